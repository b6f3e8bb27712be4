#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use super::*;
use crate::UnitArg;
use pretty_assertions::assert_eq;
use unitscan_core::SpanError;

/// Write `bytes` to a temp file and run `command` on it.
fn run_on(bytes: &[u8], command: Command, options: &ScanOptions) -> Result<String, CliError> {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let mut out: Vec<u8> = Vec::new();
    run_command(command, &path, options, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

fn utf32le(text: &str) -> Vec<u8> {
    text.chars().flat_map(|c| u32::from(c).to_le_bytes()).collect()
}

fn with_target(target: char) -> ScanOptions {
    ScanOptions {
        target: Some(UnitArg::Char(target)),
        ..ScanOptions::default()
    }
}

// === Command Names ===

#[test]
fn command_names_round_trip() {
    for command in [
        Command::Count,
        Command::Hash,
        Command::Split,
        Command::Enumerate,
    ] {
        assert_eq!(Command::parse(command.name()), Some(command));
    }
    assert_eq!(Command::parse("enum"), Some(Command::Enumerate));
    assert_eq!(Command::parse("lex"), None);
}

// === count ===

#[test]
fn count_bytes() {
    let out = run_on(b"a,b,,c", Command::Count, &with_target(',')).unwrap();
    assert_eq!(out, "3\n");
}

#[test]
fn count_requires_target() {
    let err = run_on(b"abc", Command::Count, &ScanOptions::default());
    assert!(matches!(err, Err(CliError::MissingOption("--target"))));
}

#[test]
fn count_utf16_units() {
    let options = ScanOptions {
        width: Width::U16,
        ..with_target('\u{00E9}')
    };
    let out = run_on(&utf16le("caf\u{00E9} \u{00E9}t\u{00E9}"), Command::Count, &options).unwrap();
    assert_eq!(out, "3\n");
}

#[test]
fn count_within_range() {
    let options = ScanOptions {
        range: Some((2, 3)),
        ..with_target('a')
    };
    let out = run_on(b"aaaaaa", Command::Count, &options).unwrap();
    assert_eq!(out, "3\n");
}

// === hash ===

#[test]
fn hash_of_empty_file_is_seed() {
    let out = run_on(b"", Command::Hash, &ScanOptions::default()).unwrap();
    assert_eq!(out, "0x00001505 (5381)\n");
}

#[test]
fn hash_is_width_independent_for_ascii() {
    let narrow = run_on(b"hello", Command::Hash, &ScanOptions::default()).unwrap();
    let wide = run_on(
        &utf32le("hello"),
        Command::Hash,
        &ScanOptions {
            width: Width::U32,
            ..ScanOptions::default()
        },
    )
    .unwrap();
    assert_eq!(narrow, "0x0f923099 (261238937)\n");
    assert_eq!(narrow, wide);
}

// === split ===

#[test]
fn split_prints_tokens_with_offsets() {
    let out = run_on(b"a,,bc,", Command::Split, &ScanOptions::default()).unwrap();
    assert_eq!(out, "0\t[0..1)\ta\n1\t[2..2)\t\n2\t[3..5)\tbc\n3\t[6..6)\t\n");
}

#[test]
fn split_empty_file_yields_one_token() {
    let out = run_on(b"", Command::Split, &ScanOptions::default()).unwrap();
    assert_eq!(out, "0\t[0..0)\t\n");
}

#[test]
fn split_escapes_control_characters() {
    let options = ScanOptions {
        separator: UnitArg::Char('|'),
        ..ScanOptions::default()
    };
    let out = run_on(b"a\tb|c\nd", Command::Split, &options).unwrap();
    assert_eq!(out, "0\t[0..3)\ta\\tb\n1\t[4..7)\tc\\nd\n");
}

#[test]
fn split_utf16_renders_text() {
    let options = ScanOptions {
        width: Width::U16,
        separator: UnitArg::Char(' '),
        ..ScanOptions::default()
    };
    let out = run_on(&utf16le("\u{00E9}t\u{00E9} \u{1F600}"), Command::Split, &options).unwrap();
    assert_eq!(out, "0\t[0..3)\t\u{00E9}t\u{00E9}\n1\t[4..6)\t\u{1F600}\n");
}

#[test]
fn split_offsets_are_relative_to_range() {
    let options = ScanOptions {
        range: Some((2, 3)),
        ..ScanOptions::default()
    };
    let out = run_on(b"xxa,bxx", Command::Split, &options).unwrap();
    assert_eq!(out, "0\t[0..1)\ta\n1\t[2..3)\tb\n");
}

// === enumerate ===

#[test]
fn enumerate_bytes() {
    let out = run_on(b"AB", Command::Enumerate, &ScanOptions::default()).unwrap();
    assert_eq!(out, "0\t0x41\n1\t0x42\n");
}

#[test]
fn enumerate_pads_to_unit_width() {
    let options = ScanOptions {
        width: Width::U16,
        ..ScanOptions::default()
    };
    let out = run_on(&utf16le("A\u{1F600}"), Command::Enumerate, &options).unwrap();
    assert_eq!(out, "0\t0x0041\n1\t0xd83d\n2\t0xde00\n");
}

// === Errors ===

#[test]
fn partial_unit_is_rejected() {
    let options = ScanOptions {
        width: Width::U32,
        ..ScanOptions::default()
    };
    let err = run_on(b"abcdef", Command::Hash, &options);
    assert!(matches!(
        err,
        Err(CliError::PartialUnit {
            len: 6,
            width: 4,
            ..
        })
    ));
}

#[test]
fn missing_file_is_reported() {
    let err = run_command(
        Command::Hash,
        "/nonexistent/unitscan/input.txt",
        &ScanOptions::default(),
        &mut Vec::<u8>::new(),
    );
    assert!(matches!(err, Err(CliError::NotFound { .. })));
}

#[test]
fn out_of_range_is_a_span_error() {
    let options = ScanOptions {
        range: Some((1, 10)),
        ..ScanOptions::default()
    };
    let err = run_on(b"abc", Command::Hash, &options);
    assert!(matches!(
        err,
        Err(CliError::Span(SpanError::OutOfBounds { available: 3, .. }))
    ));
}

#[test]
fn negative_range_is_a_span_error() {
    let options = ScanOptions {
        range: Some((-1, 1)),
        ..ScanOptions::default()
    };
    let err = run_on(b"abc", Command::Hash, &options);
    assert_eq!(
        err.map_err(|e| e.to_string()),
        Err("span start -1 is negative".to_string())
    );
}

#[test]
fn wide_separator_does_not_fit_bytes() {
    let options = ScanOptions {
        separator: UnitArg::Char('\u{00E9}'),
        ..ScanOptions::default()
    };
    let err = run_on(b"abc", Command::Split, &options);
    assert_eq!(
        err.map_err(|e| e.to_string()),
        Err("'\u{00E9}' does not fit in a single 8-bit code unit".to_string())
    );
}
