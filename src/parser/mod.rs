//! JSON parsing and sample discovery module

pub mod directory;
pub mod filter;

use crate::error::{ParseError, ParseResult, ScanErrorKind, ScanResult};
use std::io::Read;
use std::path::PathBuf;

/// Source for parsing operations
#[derive(Debug, Clone, PartialEq)]
pub enum JsonSource {
    /// Raw JSON text
    String(String),
    /// Single JSON file path
    File(PathBuf),
    /// Standard input stream
    Stdin,
}

impl JsonSource {
    /// Parse JSON from this source. Read failures carry the file path.
    pub fn parse(&self) -> ScanResult<serde_json::Value> {
        let content = self.read_content().map_err(|e| {
            let path = match self {
                JsonSource::File(path) => Some(path.clone()),
                JsonSource::String(_) | JsonSource::Stdin => None,
            };
            ScanErrorKind::io(e.to_string(), path)
        })?;

        Ok(parse_from_string(&content)?)
    }

    /// Read the raw text of the source
    pub fn read_content(&self) -> Result<String, std::io::Error> {
        match self {
            JsonSource::String(content) => Ok(content.clone()),
            JsonSource::File(path) => std::fs::read_to_string(path),
            JsonSource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }

    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            JsonSource::String(_) => "string input".to_string(),
            JsonSource::File(path) => format!("file: {}", path.display()),
            JsonSource::Stdin => "standard input".to_string(),
        }
    }

    /// Get the size of the source in bytes, if known before reading
    pub fn estimated_size(&self) -> Option<u64> {
        match self {
            JsonSource::String(s) => Some(s.len() as u64),
            JsonSource::File(path) => std::fs::metadata(path).ok().map(|m| m.len()),
            JsonSource::Stdin => None,
        }
    }
}

/// Parse JSON from a string
pub fn parse_from_string(content: &str) -> ParseResult<serde_json::Value> {
    if content.trim().is_empty() {
        return Err(ParseError::new("Empty JSON string".to_string(), None));
    }

    // parsed untrimmed so reported lines match the file
    serde_json::from_str(content).map_err(|e| {
        let location = error_location(&e);
        let mut error = ParseError::new(format!("Invalid JSON: {}", e), location);
        if let Some(preview) = get_error_preview(content, location) {
            error = error.with_preview(preview);
        }
        error
    })
}

/// Line and column reported by serde_json (1-based). serde_json reports
/// line 0 for errors it cannot place, e.g. I/O failures.
fn error_location(error: &serde_json::Error) -> Option<(usize, usize)> {
    if error.line() == 0 {
        None
    } else {
        Some((error.line(), error.column()))
    }
}

/// Show the offending line with a caret under the error column
fn get_error_preview(content: &str, location: Option<(usize, usize)>) -> Option<String> {
    let (line, col) = location?;
    let error_line = content.lines().nth(line.checked_sub(1)?)?;
    let caret = error_line
        .chars()
        .take(col.saturating_sub(1))
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect::<String>();
    Some(format!("{}\n{}^", error_line, caret))
}
