use super::*;
use crate::{TextBuffer, UnitSpan};
use pretty_assertions::assert_eq;

#[test]
fn yields_every_index_in_order() {
    let pairs: Vec<_> = enumerate(b"abc").collect();
    assert_eq!(pairs, vec![(0, b'a'), (1, b'b'), (2, b'c')]);
}

#[test]
fn empty_input_yields_nothing() {
    assert_eq!(enumerate::<u16>(&[]).next(), None);
}

#[test]
fn restartable_per_call() {
    let buffer = TextBuffer::from("xyz");
    let span = buffer.as_span();

    let mut first = span.enumerate();
    assert_eq!(first.next(), Some((0, b'x')));
    assert_eq!(first.next(), Some((1, b'y')));

    // A second call starts over, unaffected by the first cursor.
    let second: Vec<_> = span.enumerate().map(|(i, _)| i).collect();
    assert_eq!(second, vec![0, 1, 2]);
    assert_eq!(first.next(), Some((2, b'z')));
    assert_eq!(first.next(), None);
    assert_eq!(first.next(), None);
}

#[test]
fn clone_forks_at_current_position() {
    let mut cursor = enumerate(b"abcd");
    cursor.next();
    let fork = cursor.clone();
    assert_eq!(cursor.position(), 1);
    assert_eq!(fork.collect::<Vec<_>>(), cursor.collect::<Vec<_>>());
}

#[test]
fn exact_size() {
    let mut cursor = enumerate(b"hello");
    assert_eq!(cursor.len(), 5);
    cursor.next();
    assert_eq!(cursor.len(), 4);
}

#[test]
fn nth_skips_and_clamps() {
    let mut cursor = enumerate(b"abcdef");
    assert_eq!(cursor.nth(3), Some((3, b'd')));
    assert_eq!(cursor.position(), 4);
    assert_eq!(cursor.nth(10), None);
    assert_eq!(cursor.len(), 0);
}

#[test]
fn wide_values_come_through_unchanged() {
    let wide: Vec<u16> = "\u{1F600}".encode_utf16().collect();
    let pairs: Vec<_> = UnitSpan::new(&wide).enumerate().collect();
    assert_eq!(pairs, vec![(0, 0xD83D), (1, 0xDE00)]);
}
