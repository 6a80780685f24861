use std::io::Write;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::core::errors::Result;

/// A downloaded report written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedReport {
    pub path: PathBuf,
    pub bytes: usize,
    pub sha256: String,
}

/// Compute the SHA256 hex digest of the given bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// Default file name for a downloaded report.
pub fn default_file_name(report_id: &str) -> String {
    format!("report_{report_id}.pdf")
}

/// Write the report blob next to `path` first, then move it into place.
pub fn save_report(path: &Path, data: &[u8]) -> Result<SavedReport> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    std::fs::create_dir_all(parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(SavedReport {
        path: path.to_path_buf(),
        bytes: data.len(),
        sha256: sha256_hex(data),
    })
}
