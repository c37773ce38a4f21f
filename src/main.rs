use clap::Parser;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use keyscan::cli::{self, Args, CliConfig, CliUtils, InputMode};
use keyscan::{CategoryOutcome, JsonSource, OutputFormat, ReportFormatter, ScanEngine};

fn main() -> Result<ExitCode> {
    let config = match CliConfig::from_args(Args::parse()) {
        Ok(config) => config,
        Err(e) => {
            cli::handle_error(&e);
            return Ok(ExitCode::FAILURE);
        }
    };

    // Set up logging
    init_logging(&config);
    tracing::debug!(input = %config.input_description(), "starting scan");

    let formatter = ReportFormatter::new(config.output_format())
        .with_color(CliUtils::should_use_color());

    match &config.mode {
        InputMode::Categories => scan_categories(&config, &formatter),
        InputMode::Document(source) => scan_document(&config, source, &formatter),
    }
}

fn init_logging(config: &CliConfig) {
    let default_level = if config.is_verbose() {
        "debug"
    } else if config.is_quiet() {
        "error"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("keyscan={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn scan_categories(config: &CliConfig, formatter: &ReportFormatter) -> Result<ExitCode> {
    let engine = ScanEngine::new(config.scan_config.clone())?;

    let progress = config
        .want_progress()
        .then(|| CliUtils::create_progress_bar(config.scan_config.categories.len() as u64));

    let report = engine.scan_all_with(|outcome| {
        if let Some(pb) = &progress {
            pb.set_message(outcome.category().to_string());
            pb.inc(1);
        }
    });
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    match formatter.format() {
        OutputFormat::Json => {
            let json = formatter
                .render_report_json(&report)
                .context("Failed to serialize scan report")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for outcome in &report.categories {
                match outcome {
                    CategoryOutcome::Ok(schema) => println!("{}", formatter.render_schema(schema)),
                    CategoryOutcome::Failed { .. } => {
                        if let Some(line) = formatter.failure_line(outcome) {
                            eprintln!("{}", line);
                        }
                    }
                }
            }
        }
    }

    tracing::info!(
        succeeded = report.success_count(),
        failed = report.failure_count(),
        "scan finished"
    );

    if config.is_strict() && report.failure_count() > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn scan_document(
    config: &CliConfig,
    source: &JsonSource,
    formatter: &ReportFormatter,
) -> Result<ExitCode> {
    let engine = ScanEngine::new(config.scan_config.clone())?;

    let paths = match engine.scan_source(source) {
        Ok(paths) => paths,
        Err(e) => {
            cli::handle_error(&e);
            return Ok(ExitCode::FAILURE);
        }
    };

    if paths.is_empty() && formatter.format() == OutputFormat::Text {
        return Ok(ExitCode::SUCCESS);
    }

    let rendered = formatter
        .render_paths(&paths)
        .context("Failed to serialize key paths")?;
    println!("{}", rendered);

    Ok(ExitCode::SUCCESS)
}
