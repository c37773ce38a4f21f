use crate::error::{ScanErrorKind, ScanResult};
use crate::parser::JsonSource;

/// Check the source size before attempting to read or parse the JSON.
/// This avoids loading very large files into memory if the configured
/// limit is smaller than the file.
pub fn check_source_size_before_read(source: &JsonSource, limit: u64) -> ScanResult<()> {
    if let Some(size) = source.estimated_size() {
        if size > limit {
            return Err(ScanErrorKind::FileTooLarge { size, limit }.into());
        }
    }

    Ok(())
}
