//! # wamsort
//!
//! Reorders the cuts of WAZER G-code programs so that holes and other parts
//! nested inside a part are cut before the part around them, and the head
//! sweeps the bed row by row.
//!
//! ## Architecture
//!
//! wamsort is organized as a workspace with multiple crates:
//!
//! 1. **wamsort-core** - Bounding boxes, the cut record, error types
//! 2. **wamsort-parser** - Program recognition, serialization, file I/O
//! 3. **wamsort-sequence** - Containment analysis, rows, ordering, manual swap
//! 4. **wamsort-settings** - Configuration files
//! 5. **wamsort** - The [`Job`] session type and the command-line binary
//!
//! The engine does not check machine safety. Always preview the output in
//! another tool before cutting.

pub mod job;
pub mod types;

pub use job::Job;
pub use types::{CutSummary, JobSummary};

pub use wamsort_core::{BoundingBox, Cut, Error, GcodeError, Point, Result};
pub use wamsort_parser::{BlockDialect, BlockParser, Program};
pub use wamsort_sequence::{Direction, SequencePlan, SweepDirection};
pub use wamsort_settings::{Config, OutputSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Version string with build date, for `--version`
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("BUILD_DATE"),
    ")"
);

/// Initialize logging
///
/// Sets up structured logging on stderr with:
/// - RUST_LOG environment variable support
/// - INFO by default, DEBUG when `verbose`
/// - JSON lines instead of text when `json`
pub fn init_logging(verbose: bool, json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    if json {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .json();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(verbose)
            .with_level(true)
            .with_line_number(verbose);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
