//! `unitscan` command-line front end.
//!
//! Loads a file as fixed-width code units and runs one `unitscan_core`
//! primitive over it:
//!
//! ```text
//! file bytes ──► TextBuffer<U> ──► UnitSpan (--range) ──► count | hash | split | enumerate
//! ```
//!
//! Bytes are reinterpreted as little-endian units of the `--width` chosen;
//! nothing is transcoded.

pub mod commands;
mod error;
mod options;

pub use commands::{run_command, Command};
pub use error::CliError;
pub use options::{parse_scan_options, ScanOptions, UnitArg, Width};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=unitscan=debug` or `RUST_LOG=unitscan_core=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
