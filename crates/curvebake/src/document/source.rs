//! Metadata about a region document read from disk.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::collection::DocumentLayout;

/// Metadata about the source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Top-level layout of the document.
    pub layout: DocumentLayout,
    /// Number of region records.
    pub region_count: usize,
    /// When the document was read.
    pub read_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a document that has been decoded.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        layout: DocumentLayout,
        region_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            layout,
            region_count,
            read_at: Utc::now(),
        }
    }
}
