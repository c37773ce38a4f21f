//! Configuration options for category scans

use std::path::{Path, PathBuf};

use crate::parser::filter::SampleOptions;

/// Directory holding one subdirectory per category
pub const DEFAULT_BASE_PATH: &str = "recordings/dev/transactions";

/// Transaction categories scanned when none are given
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "bom",
    "item",
    "workorder",
    "bill",
    "journal",
    "receiving",
    "invoice",
    "salesorder",
];

/// Scan configuration options
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Root directory of the category directories
    pub base_path: PathBuf,
    /// Categories to scan, in output order
    pub categories: Vec<String>,
    /// Sample file selection rules
    pub sample: SampleOptions,
    /// Largest sample file that will be read, in bytes
    pub max_file_size: u64,
    /// Prefix prepended to every extracted key path
    pub prefix: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from(DEFAULT_BASE_PATH),
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            sample: SampleOptions::default(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            prefix: String::new(),
        }
    }
}

impl ScanConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_path(mut self, base_path: impl Into<PathBuf>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sample_options(mut self, sample: SampleOptions) -> Self {
        self.sample = sample;
        self
    }

    pub fn with_max_file_size(mut self, limit_bytes: u64) -> Self {
        self.max_file_size = limit_bytes;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Directory holding the samples of `category`
    pub fn category_dir(&self, category: &str) -> PathBuf {
        self.base_path.join(category)
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.categories.is_empty() {
            return Err("At least one category is required".to_string());
        }

        for category in &self.categories {
            if category.trim().is_empty() {
                return Err("Category names must not be empty".to_string());
            }
            // a category is a single directory below the base path
            if Path::new(category).components().count() != 1 || category == ".." || category == "." {
                return Err(format!("Category '{}' must be a plain directory name", category));
            }
        }

        if self.sample.extensions.is_empty() {
            return Err("At least one sample file extension is required".to_string());
        }
        if let Some(ext) = self.sample.extensions.iter().find(|e| e.is_empty() || e.starts_with('.')) {
            return Err(format!("Invalid extension '{}': give it without the leading dot", ext));
        }

        if self.max_file_size == 0 {
            return Err("Max file size must be greater than 0".to_string());
        }

        Ok(())
    }
}
