//! Command handlers for the `unitscan` CLI.
//!
//! Each submodule renders one command over a [`UnitSpan`]. Loading the file,
//! choosing the unit width and applying `--range` happen once, here.

use std::io::Write;

use unitscan_core::{CodeUnit, TextBuffer, UnitSpan};

use crate::{CliError, ScanOptions, Width};

mod count;
mod enumerate;
mod hash;
mod split;

/// A scanning command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Count,
    Hash,
    Split,
    Enumerate,
}

impl Command {
    /// Look up a command by its command-line name.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "count" => Some(Command::Count),
            "hash" => Some(Command::Hash),
            "split" => Some(Command::Split),
            "enumerate" | "enum" => Some(Command::Enumerate),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Count => "count",
            Command::Hash => "hash",
            Command::Split => "split",
            Command::Enumerate => "enumerate",
        }
    }
}

/// Code units the CLI can load from a file and print back.
pub(crate) trait FileUnit: CodeUnit {
    /// Decode one little-endian unit from exactly `WIDTH` bytes.
    fn from_le(chunk: &[u8]) -> Option<Self>;

    /// Render units as text for display, replacing anything undecodable.
    fn render(units: &[Self]) -> String;
}

impl FileUnit for u8 {
    fn from_le(chunk: &[u8]) -> Option<Self> {
        chunk.first().copied()
    }

    fn render(units: &[Self]) -> String {
        String::from_utf8_lossy(units).into_owned()
    }
}

impl FileUnit for u16 {
    fn from_le(chunk: &[u8]) -> Option<Self> {
        chunk.try_into().ok().map(u16::from_le_bytes)
    }

    fn render(units: &[Self]) -> String {
        String::from_utf16_lossy(units)
    }
}

impl FileUnit for u32 {
    fn from_le(chunk: &[u8]) -> Option<Self> {
        chunk.try_into().ok().map(u32::from_le_bytes)
    }

    fn render(units: &[Self]) -> String {
        units
            .iter()
            .map(|&u| char::from_u32(u).unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }
}

/// Read `path` as raw bytes.
pub(crate) fn read_file(path: &str) -> Result<Vec<u8>, CliError> {
    std::fs::read(path).map_err(|e| CliError::from_read(path, e))
}

/// Reinterpret `bytes` as little-endian units of width `U`.
fn decode_units<U: FileUnit>(path: &str, bytes: &[u8]) -> Result<TextBuffer<U>, CliError> {
    if bytes.len() % U::WIDTH != 0 {
        return Err(CliError::PartialUnit {
            path: path.to_string(),
            len: bytes.len(),
            width: U::WIDTH,
        });
    }
    Ok(bytes.chunks_exact(U::WIDTH).filter_map(U::from_le).collect())
}

/// Run `command` on the file at `path`, writing the result to `out`.
pub fn run_command(
    command: Command,
    path: &str,
    options: &ScanOptions,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let bytes = read_file(path)?;
    tracing::debug!(
        command = command.name(),
        path,
        bytes = bytes.len(),
        width = options.width.bits(),
        "loaded input"
    );

    match options.width {
        Width::U8 => run_units::<u8>(command, &decode_units(path, &bytes)?, options, out),
        Width::U16 => run_units::<u16>(command, &decode_units(path, &bytes)?, options, out),
        Width::U32 => run_units::<u32>(command, &decode_units(path, &bytes)?, options, out),
    }
}

fn run_units<U: FileUnit>(
    command: Command,
    buffer: &TextBuffer<U>,
    options: &ScanOptions,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let span = select(buffer.as_span(), options.range)?;
    tracing::debug!(units = span.len(), "scanning");

    match command {
        Command::Count => count::run(span, options.require_target()?.to_unit()?, out),
        Command::Hash => hash::run(span, out),
        Command::Split => split::run(span, options.separator.to_unit()?, out),
        Command::Enumerate => enumerate::run(span, out),
    }
}

/// Apply `--range`, if given.
fn select<U: CodeUnit>(
    span: UnitSpan<'_, U>,
    range: Option<(isize, isize)>,
) -> Result<UnitSpan<'_, U>, CliError> {
    match range {
        Some((start, len)) => Ok(span.sub_span_signed(start, len)?),
        None => Ok(span),
    }
}

#[cfg(test)]
mod tests;
