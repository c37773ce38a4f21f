//! Results of a category scan

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

use crate::error::ScanError;

/// Key paths discovered in the sample of one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySchema {
    pub category: String,
    /// The file the schema was sampled from
    pub sample_file: PathBuf,
    /// Sorted ascending
    pub key_paths: Vec<String>,
}

/// Outcome of scanning one category
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CategoryOutcome {
    Ok(CategorySchema),
    #[serde(rename = "error")]
    Failed {
        category: String,
        #[serde(serialize_with = "serialize_error")]
        error: ScanError,
    },
}

impl CategoryOutcome {
    pub fn category(&self) -> &str {
        match self {
            CategoryOutcome::Ok(schema) => &schema.category,
            CategoryOutcome::Failed { category, .. } => category,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, CategoryOutcome::Ok(_))
    }
}

fn serialize_error<S: serde::Serializer>(error: &ScanError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&error.user_message())
}

/// All category outcomes of one run, in configured order
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub generated_at: DateTime<Utc>,
    pub base_path: PathBuf,
    pub categories: Vec<CategoryOutcome>,
}

impl ScanReport {
    pub fn new(base_path: PathBuf) -> Self {
        Self {
            generated_at: Utc::now(),
            base_path,
            categories: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: CategoryOutcome) {
        self.categories.push(outcome);
    }

    pub fn success_count(&self) -> usize {
        self.categories.iter().filter(|o| o.is_ok()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.categories.len() - self.success_count()
    }

    pub fn schemas(&self) -> impl Iterator<Item = &CategorySchema> {
        self.categories.iter().filter_map(|o| match o {
            CategoryOutcome::Ok(schema) => Some(schema),
            CategoryOutcome::Failed { .. } => None,
        })
    }
}
