//! **A library for rendering anomaly logs into styled reports.**
//!
//! `anomaly-view` takes an ordered sequence of heterogeneous anomaly records
//! (network-intrusion events or power-grid sensor events) and renders one
//! styled card per record, as an HTML fragment, a full HTML page, structured
//! JSON, or a terminal summary. It powers a small CLI and can be embedded as
//! a library.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The central data structure, [`AnomalyRecord`] — a tagged
//!   union of the two record variants, decided once at ingestion. A record is
//!   a network anomaly iff the raw JSON carries a `source_ip` key; everything
//!   else is a grid anomaly.
//! - **[`parsers`]**: JSON ingestion with ordered-defaults field resolution.
//!   Records never fail to parse; missing or malformed fields fall back to
//!   documented defaults.
//! - **[`reports`]**: Card view models and the report generators. The two
//!   variants carry different critical thresholds (1.5 for network, 1.0 for
//!   grid) which drive accent colors and action/status badges.
//! - **[`pipeline`]**: Load-and-render orchestration shared by the CLI.
//!
//! ## Getting Started
//!
//! ```
//! use anomaly_view::parsers::parse_records_str;
//! use anomaly_view::reports::HtmlReporter;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let records = parse_records_str(
//!         r#"[{"source_ip": "10.0.0.1", "attack_type": "dos", "severity_score": 2.1}]"#,
//!     )?;
//!
//!     let fragment = HtmlReporter::new().generate_fragment(&records)?;
//!     assert!(fragment.contains("BLOCK IP"));
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{OutputConfig, RenderConfig};
pub use error::{AnomalyViewError, ParseErrorKind, Result};
pub use model::{AnomalyRecord, GridAnomaly, NetworkAnomaly};
pub use parsers::{classify, parse_records, parse_records_str, RecordKind};
pub use reports::{
    build_cards, CardView, HtmlReporter, JsonReporter, Mount, ReportConfig, ReportFormat,
    ReportGenerator, SummaryReporter,
};
