use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{ScanErrorKind, ScanResult};
use crate::parser::filter::{is_sample_file, SampleOptions};

/// Find eligible sample files in a directory, sorted by path.
/// If `options.recursive` is true, use walkdir; otherwise list files.
pub fn find_sample_files(dir: &Path, options: &SampleOptions) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();

    if options.recursive {
        for entry in WalkDir::new(dir) {
            let entry = entry?;
            let path = entry.path();
            if is_sample_file(path, options) {
                files.push(path.to_path_buf());
            }
        }
    } else {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if is_sample_file(&path, options) {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Pick the representative sample of a category directory
pub fn select_sample(dir: &Path, options: &SampleOptions) -> ScanResult<PathBuf> {
    if !dir.is_dir() {
        return Err(ScanErrorKind::directory_not_found(dir.to_path_buf()).into());
    }

    let files = find_sample_files(dir, options)
        .map_err(|e| ScanErrorKind::io(e.to_string(), Some(dir.to_path_buf())))?;
    tracing::debug!(dir = %dir.display(), candidates = files.len(), "listed sample files");

    files
        .into_iter()
        .next()
        .ok_or_else(|| ScanErrorKind::no_sample_file(dir.to_path_buf()).into())
}
