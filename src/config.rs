//! Configuration types shared between the CLI surface and command handlers.

use crate::reports::ReportFormat;
use std::path::PathBuf;

/// Output configuration common to all commands
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file (stdout if not set)
    pub file: Option<PathBuf>,
    /// Disable colored terminal output
    pub no_color: bool,
}

/// Configuration for the `render` command
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Path of the record feed to render
    pub input: PathBuf,
    /// Output handling
    pub output: OutputConfig,
    /// Report title override
    pub title: Option<String>,
    /// Omit the inline stylesheet from HTML output
    pub no_styles: bool,
    /// Exit with code 2 when any critical anomaly is rendered
    pub fail_on_critical: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}
