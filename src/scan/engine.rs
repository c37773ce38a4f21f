//! Category scan engine: sample selection, parsing and key path extraction

use std::path::Path;

use crate::error::{ScanError, ScanErrorKind, ScanResult};
use crate::extract::{extract_sorted, Shape};
use crate::parser::directory::select_sample;
use crate::parser::JsonSource;
use crate::scan::config::ScanConfig;
use crate::scan::limits::check_source_size_before_read;
use crate::scan::report::{CategoryOutcome, CategorySchema, ScanReport};

/// Main scan engine
#[derive(Debug)]
pub struct ScanEngine {
    config: ScanConfig,
}

impl ScanEngine {
    /// Create a new scan engine, rejecting inconsistent configuration
    pub fn new(config: ScanConfig) -> ScanResult<Self> {
        config
            .validate()
            .map_err(|message| ScanError::scan(ScanErrorKind::configuration(message)))?;
        Ok(Self { config })
    }

    /// Discover the key paths of one category's representative sample
    pub fn scan_category(&self, category: &str) -> ScanResult<CategorySchema> {
        let dir = self.config.category_dir(category);
        let sample_file = select_sample(&dir, &self.config.sample)?;
        tracing::debug!(category, sample = %sample_file.display(), "selected sample");

        let key_paths = self.scan_file(&sample_file)?;
        tracing::info!(category, keys = key_paths.len(), "extracted key paths");

        Ok(CategorySchema {
            category: category.to_string(),
            sample_file,
            key_paths,
        })
    }

    /// Scan every configured category. A failing category is recorded and
    /// the remaining categories are still scanned.
    pub fn scan_all(&self) -> ScanReport {
        self.scan_all_with(|_| {})
    }

    /// [`ScanEngine::scan_all`], calling `on_outcome` after each category
    pub fn scan_all_with<F>(&self, mut on_outcome: F) -> ScanReport
    where
        F: FnMut(&CategoryOutcome),
    {
        let mut report = ScanReport::new(self.config.base_path.clone());

        for category in &self.config.categories {
            let outcome = match self.scan_category(category) {
                Ok(schema) => CategoryOutcome::Ok(schema),
                Err(error) => {
                    tracing::warn!(category = %category, error = %error.user_message(), "category failed");
                    CategoryOutcome::Failed {
                        category: category.clone(),
                        error,
                    }
                }
            };
            on_outcome(&outcome);
            report.push(outcome);
        }

        report
    }

    /// Extract the sorted key paths of a single JSON document
    pub fn scan_source(&self, source: &JsonSource) -> ScanResult<Vec<String>> {
        check_source_size_before_read(source, self.config.max_file_size)?;

        let value = source.parse()?;
        if !Shape::of(&value).is_container() {
            tracing::warn!(source = %source.description(), "document root is a scalar; no key paths");
        }

        Ok(extract_sorted(&value, &self.config.prefix))
    }

    fn scan_file(&self, path: &Path) -> ScanResult<Vec<String>> {
        self.scan_source(&JsonSource::File(path.to_path_buf()))
    }
}
