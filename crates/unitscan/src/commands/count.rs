//! `count`: number of units equal to `--target`.

use std::io::Write;

use unitscan_core::UnitSpan;

use super::FileUnit;
use crate::CliError;

pub(super) fn run<U: FileUnit>(
    span: UnitSpan<'_, U>,
    target: U,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    writeln!(out, "{}", span.count(target))?;
    Ok(())
}
