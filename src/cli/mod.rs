//! Command-line interface module

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::error::{ScanError, ScanErrorKind, ScanResult};
use crate::formatter::OutputFormat;
use crate::parser::filter::SampleOptions;
use crate::parser::JsonSource;
use crate::scan::{ScanConfig, DEFAULT_BASE_PATH, DEFAULT_CATEGORIES};

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "keyscan")]
#[command(about = "Discover the key paths present in sample JSON documents")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Inline JSON text or a JSON file to extract key paths from
    /// (omit to scan the category directories)
    #[arg()]
    pub input: Option<String>,

    /// Read a JSON document from standard input
    #[arg(long, conflicts_with = "input")]
    pub stdin: bool,

    /// Directory containing one subdirectory per category
    #[arg(short, long, env = "KEYSCAN_BASE_PATH", default_value = DEFAULT_BASE_PATH)]
    pub base_path: PathBuf,

    /// Category to scan (repeatable, default: all built-in categories)
    #[arg(short, long = "category")]
    pub categories: Vec<String>,

    /// Files whose name contains this marker are not used as samples
    #[arg(long, default_value = "ref")]
    pub exclude_marker: String,

    /// Accepted sample file extension (repeatable, default: json)
    #[arg(long = "extension")]
    pub extensions: Vec<String>,

    /// Search category directories recursively
    #[arg(long)]
    pub recursive: bool,

    /// Prefix prepended to every key path
    #[arg(long, default_value = "")]
    pub prefix: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Largest sample file to read (e.g., 500KB, 100MB, default: 100MB)
    #[arg(long)]
    pub max_file_size: Option<String>,

    /// Exit with an error status when any category fails
    #[arg(long)]
    pub strict: bool,

    /// Show a progress bar while scanning categories
    #[arg(long)]
    pub progress: bool,

    /// Enable verbose logging
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(long)]
    pub quiet: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// What the invocation asks for
#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    /// Scan the configured categories below the base path
    Categories,
    /// Extract key paths from one document
    Document(JsonSource),
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub scan_config: ScanConfig,
    pub mode: InputMode,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ScanResult<Self> {
        let scan_config = Self::create_scan_config(&args)?;
        let mode = Self::input_mode(&args);

        Ok(Self {
            args,
            scan_config,
            mode,
        })
    }

    fn create_scan_config(args: &Args) -> ScanResult<ScanConfig> {
        let categories = if args.categories.is_empty() {
            DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
        } else {
            args.categories.clone()
        };

        let mut sample = SampleOptions {
            exclude_marker: args.exclude_marker.clone(),
            recursive: args.recursive,
            ..SampleOptions::default()
        };
        if !args.extensions.is_empty() {
            sample.extensions = args.extensions.clone();
        }

        let config = ScanConfig::new()
            .with_base_path(args.base_path.clone())
            .with_categories(categories)
            .with_sample_options(sample)
            .with_max_file_size(parse_size_limit(&args.max_file_size)?)
            .with_prefix(args.prefix.clone());

        config
            .validate()
            .map_err(|e| ScanError::scan(ScanErrorKind::configuration(e)))?;

        Ok(config)
    }

    fn input_mode(args: &Args) -> InputMode {
        if args.stdin {
            return InputMode::Document(JsonSource::Stdin);
        }

        match &args.input {
            None => InputMode::Categories,
            Some(input) => {
                // Check if input looks like JSON text (starts with { or [)
                let trimmed = input.trim();
                if (trimmed.starts_with('{') && trimmed.ends_with('}'))
                    || (trimmed.starts_with('[') && trimmed.ends_with(']'))
                {
                    InputMode::Document(JsonSource::String(input.clone()))
                } else {
                    InputMode::Document(JsonSource::File(PathBuf::from(input)))
                }
            }
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        self.args.format.into()
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    pub fn is_strict(&self) -> bool {
        self.args.strict
    }

    pub fn want_progress(&self) -> bool {
        self.args.progress && !self.is_quiet()
    }

    /// Get input source description
    pub fn input_description(&self) -> String {
        match &self.mode {
            InputMode::Categories => format!(
                "{} categories under '{}'",
                self.scan_config.categories.len(),
                self.scan_config.base_path.display()
            ),
            InputMode::Document(source) => source.description(),
        }
    }
}

/// Parse a size limit string (e.g., "100MB", "1GB", "500KB", "512")
pub fn parse_size_limit(limit: &Option<String>) -> ScanResult<u64> {
    let Some(limit_str) = limit else {
        return Ok(100 * 1024 * 1024); // 100MB default
    };

    let limit_str = limit_str.trim().to_uppercase();
    let invalid = || {
        ScanError::scan(ScanErrorKind::configuration(format!(
            "Invalid size limit: {}",
            limit_str
        )))
    };

    let (number, multiplier) = if let Some(n) = limit_str.strip_suffix("GB") {
        (n, 1024.0 * 1024.0 * 1024.0)
    } else if let Some(n) = limit_str.strip_suffix("MB") {
        (n, 1024.0 * 1024.0)
    } else if let Some(n) = limit_str.strip_suffix("KB") {
        (n, 1024.0)
    } else if let Some(n) = limit_str.strip_suffix('B') {
        return n.trim().parse::<u64>().map_err(|_| invalid());
    } else {
        // Assume bytes
        return limit_str.parse::<u64>().map_err(|_| invalid());
    };

    let value = number.trim().parse::<f64>().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    Ok((value * multiplier) as u64)
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Create a progress bar for category scanning
    pub fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
        let pb = indicatif::ProgressBar::new(total);
        let style = indicatif::ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| indicatif::ProgressStyle::default_bar())
            .progress_chars("#>-");
        pb.set_style(style);
        pb
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("✗ {}", message);
    }

    /// Check if output should be colored
    pub fn should_use_color() -> bool {
        // Check if stdout is a terminal and supports color
        atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ScanError) {
    CliUtils::show_error(&error.user_message());

    // Provide helpful suggestions
    match error {
        ScanError::ParseError(err) => {
            if let Some(preview) = &err.input_preview {
                eprintln!("\n{}", preview);
            }
            eprintln!("\nTip: the input must be a single well-formed JSON document");
        }
        ScanError::Scan {
            kind: ScanErrorKind::FileTooLarge { .. },
        } => {
            eprintln!("\nTip: Use --max-file-size to raise the limit");
        }
        ScanError::Scan { .. } => {}
    }

    // Show usage hint
    eprintln!("\nTry 'keyscan --help' for usage information.");
}
