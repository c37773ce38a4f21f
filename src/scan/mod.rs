//! Category scanning module
//!
//! Locates one sample per category, parses it and runs key path extraction.

pub mod config;
pub mod engine;
pub mod limits;
pub mod report;

pub use config::{ScanConfig, DEFAULT_BASE_PATH, DEFAULT_CATEGORIES};
pub use engine::ScanEngine;
pub use report::{CategoryOutcome, CategorySchema, ScanReport};
