use super::*;
use crate::TextBuffer;

#[test]
fn counts_every_match() {
    assert_eq!(count(b"aaa", b'a'), 3);
    assert_eq!(count(b"banana", b'a'), 3);
}

#[test]
fn empty_and_absent() {
    assert_eq!(count(b"", b'x'), 0);
    assert_eq!(count(b"abc", b'x'), 0);
}

#[test]
fn wide_units() {
    let wide: Vec<u16> = "\u{4F60}\u{597D}\u{4F60}".encode_utf16().collect();
    assert_eq!(count(&wide, 0x4F60), 2);

    // A surrogate pair is two UTF-16 units; count sees units, not chars.
    let emoji: Vec<u16> = "\u{1F600}\u{1F600}".encode_utf16().collect();
    assert_eq!(count(&emoji, 0xD83D), 2);
}

#[test]
fn through_buffer_and_span() {
    let buffer = TextBuffer::from("1,2,3,4");
    assert_eq!(count(buffer.as_units(), b','), 3);
    assert_eq!(buffer.as_span().count(b','), 3);
    assert_eq!(buffer.as_span().sub_span(0, 3).map(|s| s.count(b',')), Ok(1));
}
