//! Errors surfaced by the command-line front end.

use std::io;

use unitscan_core::SpanError;

/// Any failure of a `unitscan` invocation. Reported by `main` as a single
/// `error: ...` line followed by exit status 1.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    /// File length is not a whole number of units at the selected width.
    #[error("'{path}' is {len} bytes, not a multiple of the {width}-byte unit width")]
    PartialUnit {
        path: String,
        len: usize,
        width: usize,
    },

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid value '{value}' for {option}: {reason}")]
    InvalidValue {
        option: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("missing required option {0}")]
    MissingOption(&'static str),

    #[error("'{unit}' does not fit in a single {bits}-bit code unit")]
    UnitDoesNotFit { unit: String, bits: usize },

    #[error(transparent)]
    Span(#[from] SpanError),

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

impl CliError {
    /// Map an I/O error from reading `path` to the most specific variant.
    pub(crate) fn from_read(path: &str, source: io::Error) -> Self {
        let path = path.to_string();
        match source.kind() {
            io::ErrorKind::NotFound => CliError::NotFound { path },
            io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            _ => CliError::Read { path, source },
        }
    }
}
