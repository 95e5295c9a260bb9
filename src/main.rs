//! anomaly-view: anomaly log rendering and reporting tool
//!
//! Renders network-intrusion and power-grid anomaly logs into styled HTML
//! cards, structured JSON, or a terminal summary.

use anomaly_view::{
    cli,
    config::{OutputConfig, RenderConfig},
    reports::ReportFormat,
};
use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nRecord Variants:",
        "\n  network: intrusion events (critical above severity 1.5)",
        "\n  grid:    sensor events (critical above severity 1.0)",
        "\n\nOutput Formats:",
        "\n  html, json, summary"
    )
}

#[derive(Parser)]
#[command(name = "anomaly-view")]
#[command(version, long_version = build_long_version())]
#[command(about = "Anomaly log rendering and reporting tool", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Report generated
    2  Critical anomalies present (with --fail-on-critical)
    3  Error occurred

EXAMPLES:
    # Render a feed as an HTML page
    anomaly-view render anomalies.json -o html -O report.html

    # Quick terminal overview
    anomaly-view render anomalies.json

    # CI gate on critical anomalies
    anomaly-view render anomalies.json -o summary --fail-on-critical")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `render` subcommand
#[derive(Parser)]
struct RenderArgs {
    /// Path to the record feed (JSON array of anomaly records)
    input: PathBuf,

    /// Output format (auto detects TTY: summary if interactive, html otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Report title
    #[arg(long)]
    title: Option<String>,

    /// Omit the inline stylesheet from HTML output
    #[arg(long)]
    no_styles: bool,

    /// Exit with code 2 if any critical anomaly is present
    #[arg(long)]
    fail_on_critical: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a record feed into a report
    Render(RenderArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Render(args) => {
            let config = RenderConfig {
                input: args.input,
                output: OutputConfig {
                    format: args.output,
                    file: args.output_file,
                    no_color: cli.no_color,
                },
                title: args.title,
                no_styles: args.no_styles,
                fail_on_critical: args.fail_on_critical,
                quiet: cli.quiet,
            };

            let exit_code = cli::run_render(config)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "anomaly-view", &mut io::stdout());
            Ok(())
        }
    }
}
