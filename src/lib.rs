//! Key path discovery for sample JSON documents
//!
//! A Rust CLI tool and library that walks JSON documents and lists every
//! field location as a dotted key path (`order.lines[].sku`), either for a
//! single document or for one representative sample per data category.

pub mod cli;
pub mod error;
pub mod extract;
pub mod formatter;
pub mod parser;
pub mod scan;

// Re-export commonly used types
pub use error::{ParseError, ScanError, ScanErrorKind, ScanResult};
pub use extract::{extract, extract_root, extract_sorted, KeyPathSet, Shape};
pub use formatter::{OutputFormat, ReportFormatter};
pub use parser::JsonSource;
pub use scan::{CategoryOutcome, CategorySchema, ScanConfig, ScanEngine, ScanReport};

/// Sorted key paths of a JSON value
pub fn extract_keys(json: &serde_json::Value) -> Vec<String> {
    extract_sorted(json, "")
}

/// Parse JSON text and return its sorted key paths
pub fn extract_keys_from_str(json_str: &str) -> Result<Vec<String>, ScanError> {
    let value = JsonSource::String(json_str.to_string()).parse()?;
    Ok(extract_keys(&value))
}
