//! Pipeline orchestration: load records → build report → write output.
//!
//! Shared between CLI command handlers so format detection and output
//! handling live in one place.

mod output;
mod parse;

pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};
pub use parse::load_records;

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// At least one critical anomaly was rendered (with --fail-on-critical)
    pub const CRITICAL_FOUND: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
