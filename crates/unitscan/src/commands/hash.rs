//! `hash`: Djb2 hash of the selected units.

use std::io::Write;

use unitscan_core::UnitSpan;

use super::FileUnit;
use crate::CliError;

pub(super) fn run<U: FileUnit>(span: UnitSpan<'_, U>, out: &mut dyn Write) -> Result<(), CliError> {
    let hash = span.djb2_hash();
    writeln!(out, "0x{hash:08x} ({hash})")?;
    Ok(())
}
