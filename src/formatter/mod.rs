//! Output formatting for scan results
//!
//! Text output prints a `--- MODULE: <name> ---` header per category followed
//! by its key paths, one per line. JSON output serialises the whole report.

use console::style;

use crate::scan::{CategoryOutcome, CategorySchema, ScanReport};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Renders scan results for the terminal or for machine consumption
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFormatter {
    format: OutputFormat,
    color: bool,
}

impl ReportFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format, color: false }
    }

    /// Style headers and failure lines
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Header line announcing a category
    pub fn header(&self, category: &str) -> String {
        let header = format!("--- MODULE: {} ---", category);
        if self.color {
            style(header).bold().cyan().to_string()
        } else {
            header
        }
    }

    /// Header plus one key path per line, without a trailing newline
    pub fn render_schema(&self, schema: &CategorySchema) -> String {
        let mut out = self.header(&schema.category);
        for path in &schema.key_paths {
            out.push('\n');
            out.push_str(path);
        }
        out
    }

    /// Line reported on stderr for a failed category; `None` for successes
    pub fn failure_line(&self, outcome: &CategoryOutcome) -> Option<String> {
        let CategoryOutcome::Failed { category, error } = outcome else {
            return None;
        };

        let line = if error.is_discovery_failure() {
            error.user_message()
        } else {
            format!("Error processing {}: {}", category, error.user_message())
        };

        Some(if self.color {
            style(line).red().to_string()
        } else {
            line
        })
    }

    /// Whole report in JSON form
    pub fn render_report_json(&self, report: &ScanReport) -> serde_json::Result<String> {
        serde_json::to_string_pretty(report)
    }

    /// Key paths of a single document
    pub fn render_paths(&self, paths: &[String]) -> serde_json::Result<String> {
        match self.format {
            OutputFormat::Text => Ok(paths.join("\n")),
            OutputFormat::Json => serde_json::to_string_pretty(paths),
        }
    }
}
