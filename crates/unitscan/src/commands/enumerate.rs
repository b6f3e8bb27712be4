//! `enumerate`: one line per unit, index and hex value.

use std::io::Write;

use unitscan_core::UnitSpan;

use super::FileUnit;
use crate::CliError;

pub(super) fn run<U: FileUnit>(span: UnitSpan<'_, U>, out: &mut dyn Write) -> Result<(), CliError> {
    let digits = U::WIDTH * 2;
    for (index, unit) in span.enumerate() {
        writeln!(out, "{index}\t0x{:0digits$x}", unit.to_u32())?;
    }
    Ok(())
}
