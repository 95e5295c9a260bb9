//! Render command handler.
//!
//! Implements the `render` subcommand: load a record feed, project it into
//! cards, and emit the requested report format.

use crate::config::RenderConfig;
use crate::pipeline::{
    auto_detect_format, exit_codes, load_records, should_use_color, write_output, OutputTarget,
};
use crate::reports::{
    create_reporter, HtmlReporter, ReportConfig, ReportFormat, ReportGenerator, ReportMetadata,
};
use anyhow::Result;

/// Run the render command
pub fn run_render(config: RenderConfig) -> Result<i32> {
    let records = load_records(&config.input)?;

    let critical_count = records.iter().filter(|r| r.is_critical()).count();
    if critical_count > 0 {
        tracing::info!(
            "{} of {} record(s) are critical",
            critical_count,
            records.len()
        );
    }

    let report_config = ReportConfig {
        title: config.title.clone(),
        metadata: ReportMetadata {
            source_path: Some(config.input.to_string_lossy().to_string()),
            ..ReportMetadata::new()
        },
    };

    let output_target = OutputTarget::from_option(config.output.file.clone());
    let effective_format = auto_detect_format(config.output.format, &output_target);
    let use_color = should_use_color(config.output.no_color);

    let reporter: Box<dyn ReportGenerator> = match effective_format {
        ReportFormat::Html if config.no_styles => Box::new(HtmlReporter::new().no_styles()),
        other => create_reporter(other, use_color),
    };

    let report = reporter.generate_report(&records, &report_config)?;
    write_output(&report, &output_target, config.quiet)?;

    if config.fail_on_critical && critical_count > 0 {
        return Ok(exit_codes::CRITICAL_FOUND);
    }

    Ok(exit_codes::SUCCESS)
}
