use std::path::Path;

/// Rules deciding which files of a category directory count as samples
#[derive(Debug, Clone, PartialEq)]
pub struct SampleOptions {
    /// File names containing this marker are reference payloads, not samples.
    /// An empty marker disables the name check.
    pub exclude_marker: String,
    /// Accepted file extensions, without the leading dot
    pub extensions: Vec<String>,
    /// Descend into subdirectories of the category directory
    pub recursive: bool,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            exclude_marker: "ref".to_string(),
            extensions: vec!["json".to_string()],
            recursive: false,
        }
    }
}

/// Return true if `path` is an existing file with an accepted extension
/// whose name does not carry the exclude marker
pub fn is_sample_file(path: &Path, options: &SampleOptions) -> bool {
    if !path.is_file() {
        return false;
    }

    let has_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| options.extensions.iter().any(|allowed| allowed == ext));
    if !has_extension {
        return false;
    }

    let file_name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    options.exclude_marker.is_empty() || !file_name.contains(options.exclude_marker.as_str())
}
