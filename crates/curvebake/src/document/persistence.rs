//! Reading and writing region documents.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use crate::error::{CurveBakeError, Result};

use super::collection::RegionDocument;
use super::source::SourceMetadata;

impl RegionDocument {
    /// Read and decode a region document.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use curvebake::RegionDocument;
    ///
    /// let (document, source) = RegionDocument::load("src/regions.json").unwrap();
    /// println!("{} regions ({})", document.len(), source.hash);
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<(Self, SourceMetadata)> {
        let path = path.as_ref();

        let contents = fs::read(path).map_err(|e| CurveBakeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let value: serde_json::Value =
            serde_json::from_slice(&contents).map_err(|e| CurveBakeError::Decode {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let document = RegionDocument::from_value(value).map_err(|message| {
            CurveBakeError::Decode {
                path: path.to_path_buf(),
                message,
            }
        })?;

        let source = SourceMetadata::new(
            path.to_path_buf(),
            content_hash(&contents),
            contents.len() as u64,
            document.layout(),
            document.len(),
        );

        Ok((document, source))
    }

    /// Encode as pretty-printed JSON with two-space indentation.
    pub fn to_pretty_json(&self) -> Result<Vec<u8>> {
        let mut bytes = serde_json::to_vec_pretty(&self.to_value())?;
        bytes.push(b'\n');
        Ok(bytes)
    }

    /// Write the document to `path`, returning the hash of what was written.
    ///
    /// The document is encoded in full first, then written to a temporary
    /// file in the destination directory and renamed over `path`. A failure
    /// at any step leaves `path` as it was, and removes any directories the
    /// save created for it.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let bytes = self.to_pretty_json()?;

        let parent = parent_dir(path);
        let created = create_missing_dirs(&parent)?;

        if let Err(e) = write_atomically(path, &parent, &bytes) {
            remove_created_dirs(&created);
            return Err(e);
        }

        Ok(content_hash(&bytes))
    }
}

/// Stage `bytes` in `dir` and rename the staged file over `path`.
fn write_atomically(path: &Path, dir: &Path, bytes: &[u8]) -> Result<()> {
    let mut staging = NamedTempFile::new_in(dir).map_err(|e| {
        CurveBakeError::Persistence(format!(
            "Failed to create temporary file in '{}': {}",
            dir.display(),
            e
        ))
    })?;

    staging
        .write_all(bytes)
        .and_then(|_| staging.as_file().sync_all())
        .map_err(|e| {
            CurveBakeError::Persistence(format!(
                "Failed to write '{}': {}",
                path.display(),
                e
            ))
        })?;

    staging.persist(path).map_err(|e| {
        CurveBakeError::Persistence(format!(
            "Failed to move output into '{}': {}",
            path.display(),
            e.error
        ))
    })?;

    Ok(())
}

/// Create `dir` and its missing ancestors. Returns the directories that did
/// not exist before, deepest first.
fn create_missing_dirs(dir: &Path) -> Result<Vec<PathBuf>> {
    let missing: Vec<PathBuf> = dir
        .ancestors()
        .take_while(|d| !d.as_os_str().is_empty() && !d.exists())
        .map(Path::to_path_buf)
        .collect();

    if !missing.is_empty() {
        if let Err(e) = fs::create_dir_all(dir) {
            remove_created_dirs(&missing);
            return Err(CurveBakeError::Persistence(format!(
                "Failed to create directory '{}': {}",
                dir.display(),
                e
            )));
        }
    }

    Ok(missing)
}

/// Remove directories created for a save that did not complete. Stops at the
/// first one that is missing or not empty.
fn remove_created_dirs(created: &[PathBuf]) {
    for dir in created {
        if fs::remove_dir(dir).is_err() {
            break;
        }
    }
}

/// `sha256:<hex>` digest of a byte buffer.
pub fn content_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("sha256:{:x}", hasher.finalize())
}

/// Directory a file lives in; the current directory for bare file names.
fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Default output path for a source document: `<stem>_smooth.json` beside it.
///
/// # Example
///
/// ```
/// use curvebake::document::smooth_path;
///
/// let path = smooth_path("src/regions.json");
/// assert_eq!(path.to_string_lossy(), "src/regions_smooth.json");
/// ```
pub fn smooth_path(source: impl AsRef<Path>) -> PathBuf {
    let source = source.as_ref();
    let stem = source.file_stem().unwrap_or_default().to_string_lossy();
    let parent = source.parent().unwrap_or(Path::new(""));

    parent.join(format!("{}_smooth.json", stem))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_smooth_path() {
        assert_eq!(
            smooth_path("src/regions.json").to_string_lossy(),
            "src/regions_smooth.json"
        );
        assert_eq!(smooth_path("regions.json").to_string_lossy(), "regions_smooth.json");
    }

    #[test]
    fn test_parent_dir() {
        assert_eq!(parent_dir(Path::new("out.json")), PathBuf::from("."));
        assert_eq!(parent_dir(Path::new("a/b/out.json")), PathBuf::from("a/b"));
    }

    #[test]
    fn test_content_hash_format() {
        let hash = content_hash(b"[]");
        assert!(hash.starts_with("sha256:"));
        assert_eq!(hash.len(), "sha256:".len() + 64);
        assert_eq!(hash, content_hash(b"[]"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.json");
        let doc = RegionDocument::from_value(json!([{"properties": {"name": "a"}}])).unwrap();

        let hash = doc.save(&path).unwrap();
        let written = fs::read(&path).unwrap();
        assert_eq!(hash, content_hash(&written));
        assert!(written.starts_with(b"[\n  {"));

        let (loaded, source) = RegionDocument::load(&path).unwrap();
        assert_eq!(loaded, doc);
        assert_eq!(source.region_count, 1);
        assert_eq!(source.hash, hash);
        assert_eq!(source.file, "out.json");
    }

    #[test]
    fn test_create_missing_dirs_reports_new_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let created = create_missing_dirs(&nested).unwrap();
        assert_eq!(created, vec![nested.clone(), dir.path().join("a")]);
        assert!(nested.is_dir());
        assert!(create_missing_dirs(&nested).unwrap().is_empty());

        remove_created_dirs(&created);
        assert!(!dir.path().join("a").exists());
        assert!(dir.path().exists());
    }

    #[test]
    fn test_failed_save_removes_created_directories() {
        let dir = tempfile::tempdir().unwrap();
        let fresh = dir.path().join("fresh");
        // Resolves to the non-empty temp dir, so the final rename fails
        // after `fresh` has been created for the staging file.
        let path = fresh.join("..");
        let doc = RegionDocument::from_value(json!([{"properties": {"name": "a"}}])).unwrap();

        let err = doc.save(&path).unwrap_err();
        assert!(matches!(err, CurveBakeError::Persistence(_)));
        assert!(!fresh.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RegionDocument::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CurveBakeError::Io { .. }));
    }

    #[test]
    fn test_load_rejects_bad_json_and_shape() {
        let dir = tempfile::tempdir().unwrap();

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "[{").unwrap();
        assert!(matches!(
            RegionDocument::load(&bad),
            Err(CurveBakeError::Decode { .. })
        ));

        let wrong = dir.path().join("wrong.json");
        fs::write(&wrong, r#"{"regions": []}"#).unwrap();
        assert!(matches!(
            RegionDocument::load(&wrong),
            Err(CurveBakeError::Decode { .. })
        ));
    }
}
