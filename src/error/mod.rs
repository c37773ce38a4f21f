//! Error types and handling infrastructure for key path scanning

use std::fmt;
use std::path::PathBuf;

/// Failure kinds raised while locating, reading, or configuring a scan
#[derive(Debug, thiserror::Error)]
pub enum ScanErrorKind {
    #[error("Directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("No files found in: {}", path.display())]
    NoSampleFile { path: PathBuf },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("JSON file too large: {size} bytes (limit: {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl ScanErrorKind {
    pub fn directory_not_found(path: PathBuf) -> Self {
        Self::DirectoryNotFound { path }
    }

    pub fn no_sample_file(path: PathBuf) -> Self {
        Self::NoSampleFile { path }
    }

    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }
}

/// Main error type for scan operations
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error(transparent)]
    ParseError(#[from] ParseError),

    #[error("{kind}")]
    Scan { kind: ScanErrorKind },
}

impl ScanError {
    pub fn parse(message: String, location: Option<(usize, usize)>) -> Self {
        Self::ParseError(ParseError::new(message, location))
    }

    pub fn scan(kind: ScanErrorKind) -> Self {
        Self::Scan { kind }
    }

    /// Borrow the scan failure kind, if this is not a parse failure
    pub fn kind(&self) -> Option<&ScanErrorKind> {
        match self {
            Self::Scan { kind } => Some(kind),
            Self::ParseError(_) => None,
        }
    }

    /// Missing directories and empty directories are reported on their own
    /// line; everything else is a processing failure of the category.
    pub fn is_discovery_failure(&self) -> bool {
        matches!(
            self.kind(),
            Some(ScanErrorKind::DirectoryNotFound { .. } | ScanErrorKind::NoSampleFile { .. })
        )
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::ParseError(err) => {
                if let Some((line, col)) = err.location {
                    format!(
                        "JSON parse error at line {}, column {}: {}",
                        line, col, err.message
                    )
                } else {
                    format!("JSON parse error: {}", err.message)
                }
            }
            Self::Scan { kind } => match kind {
                ScanErrorKind::Io { message, path: Some(path) } => {
                    format!("{}: {}", path.display(), message)
                }
                _ => kind.to_string(),
            },
        }
    }
}

impl From<ScanErrorKind> for ScanError {
    fn from(kind: ScanErrorKind) -> Self {
        Self::scan(kind)
    }
}

/// JSON parsing errors
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
    pub input_preview: Option<String>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self {
            message,
            location,
            input_preview: None,
        }
    }

    pub fn with_preview(mut self, preview: String) -> Self {
        self.input_preview = Some(preview);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
