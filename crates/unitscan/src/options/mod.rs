//! Command-line options shared by every scanning command.
//!
//! Flags use the `--key=value` form:
//!
//! ```text
//! --width=8|16|32     unit width in bits; file bytes are read little-endian
//! --target=<unit>     unit to count (required by `count`)
//! --sep=<unit>        separator for `split` (default ',')
//! --range=<s>:<len>   restrict scanning to a sub-span
//! ```
//!
//! A `<unit>` is either a single character or a number (`44`, `0x2c`).

use unitscan_core::CodeUnit;

use crate::CliError;

/// Width of the code units a file is read as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Width {
    #[default]
    U8,
    U16,
    U32,
}

impl Width {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "8" | "utf8" => Some(Width::U8),
            "16" | "utf16" => Some(Width::U16),
            "32" | "utf32" => Some(Width::U32),
            _ => None,
        }
    }

    pub fn bits(self) -> usize {
        match self {
            Width::U8 => 8,
            Width::U16 => 16,
            Width::U32 => 32,
        }
    }
}

/// A code unit as written on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitArg {
    /// A literal character. Must encode to exactly one unit.
    Char(char),
    /// A raw unit value. Must fit the unit width.
    Number(u32),
}

impl UnitArg {
    fn parse(option: &'static str, value: &str) -> Result<Self, CliError> {
        let invalid = |reason| CliError::InvalidValue {
            option,
            value: value.to_string(),
            reason,
        };

        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(invalid("expected a character or a number")),
            (Some(c), None) => Ok(UnitArg::Char(c)),
            (Some(_), Some(_)) => {
                let number = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
                    Some(hex) => u32::from_str_radix(hex, 16),
                    None => value.parse::<u32>(),
                };
                number
                    .map(UnitArg::Number)
                    .map_err(|_| invalid("expected a character or a number"))
            }
        }
    }

    /// Convert to a unit of width `U`.
    pub fn to_unit<U: CodeUnit>(self) -> Result<U, CliError> {
        let does_not_fit = || CliError::UnitDoesNotFit {
            unit: self.to_string(),
            bits: U::WIDTH * 8,
        };
        let value = match self {
            UnitArg::Char(c) => {
                let single_unit = match U::WIDTH {
                    1 => c.is_ascii(),
                    2 => c.len_utf16() == 1,
                    _ => true,
                };
                if !single_unit {
                    return Err(does_not_fit());
                }
                u32::from(c)
            }
            UnitArg::Number(n) => n,
        };
        U::from_u32(value).ok_or_else(does_not_fit)
    }
}

impl std::fmt::Display for UnitArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitArg::Char(c) => write!(f, "{c}"),
            UnitArg::Number(n) => write!(f, "0x{n:x}"),
        }
    }
}

/// Parsed options for a scanning command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    pub width: Width,
    pub target: Option<UnitArg>,
    pub separator: UnitArg,
    /// `(start, len)` as given; validated against the input when applied.
    pub range: Option<(isize, isize)>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            width: Width::U8,
            target: None,
            separator: UnitArg::Char(','),
            range: None,
        }
    }
}

impl ScanOptions {
    /// The `--target` unit, which `count` cannot do without.
    pub fn require_target(&self) -> Result<UnitArg, CliError> {
        self.target.ok_or(CliError::MissingOption("--target"))
    }
}

/// Parse `--key=value` flags. Later flags override earlier ones.
pub fn parse_scan_options(args: &[String]) -> Result<ScanOptions, CliError> {
    let mut options = ScanOptions::default();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--width=") {
            options.width = Width::parse(value).ok_or_else(|| CliError::InvalidValue {
                option: "--width",
                value: value.to_string(),
                reason: "expected 8, 16 or 32",
            })?;
        } else if let Some(value) = arg.strip_prefix("--target=") {
            options.target = Some(UnitArg::parse("--target", value)?);
        } else if let Some(value) = arg.strip_prefix("--sep=") {
            options.separator = UnitArg::parse("--sep", value)?;
        } else if let Some(value) = arg.strip_prefix("--range=") {
            options.range = Some(parse_range(value)?);
        } else {
            return Err(CliError::UnknownOption(arg.clone()));
        }
    }

    Ok(options)
}

fn parse_range(value: &str) -> Result<(isize, isize), CliError> {
    let invalid = || CliError::InvalidValue {
        option: "--range",
        value: value.to_string(),
        reason: "expected <start>:<len>",
    };
    let (start, len) = value.split_once(':').ok_or_else(invalid)?;
    let start = start.trim().parse::<isize>().map_err(|_| invalid())?;
    let len = len.trim().parse::<isize>().map_err(|_| invalid())?;
    Ok((start, len))
}
