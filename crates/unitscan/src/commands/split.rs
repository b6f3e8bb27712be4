//! `split`: one line per token.
//!
//! ```text
//! <index>\t[<start>..<end>)\t<text>
//! ```
//!
//! Offsets are unit offsets into the selected span, recovered from the
//! tokens themselves since they alias the loaded buffer.

use std::io::Write;

use unitscan_core::UnitSpan;

use super::FileUnit;
use crate::CliError;

pub(super) fn run<U: FileUnit>(
    span: UnitSpan<'_, U>,
    separator: U,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    for (index, token) in span.tokenize(separator).enumerate() {
        let start = token.offset_within(span).unwrap_or_default();
        let end = start + token.len();
        let text = U::render(token.as_slice());
        writeln!(out, "{index}\t[{start}..{end})\t{}", text.escape_debug())?;
    }
    Ok(())
}
