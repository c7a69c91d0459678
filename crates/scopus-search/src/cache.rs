//! On-disk query cache.
//!
//! Each distinct query string maps to one file named by the MD5 hex digest of
//! the query. The file holds the raw JSON array of entries the API returned.
//! There is no expiry and no locking: concurrent writers to the same key race
//! and the last write wins. Writes go through a temporary file in the same
//! directory that is renamed into place, so readers never see a partial file.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use md5::{Digest, Md5};
use serde_json::Value;
use tempfile::NamedTempFile;

use crate::error::{SearchError, SearchResult};

/// Derive the cache key for a query.
///
/// Returns the 32-character lowercase hex MD5 digest of the query's UTF-8
/// bytes. Deterministic across processes.
#[must_use]
pub fn cache_key(query: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(query.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Directory of cached search results.
#[derive(Debug, Clone)]
pub struct QueryCache {
    dir: PathBuf,
}

impl QueryCache {
    /// Create a cache rooted at `dir`. Nothing is touched on disk until
    /// [`ensure_dir`](Self::ensure_dir) or [`store`](Self::store) runs.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Cache directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Cache file for `query`.
    #[must_use]
    pub fn path_for(&self, query: &str) -> PathBuf {
        self.dir.join(cache_key(query))
    }

    /// Create the cache directory if it is missing.
    pub fn ensure_dir(&self) -> SearchResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| SearchError::cache(&self.dir, e))
    }

    /// Read cached entries.
    ///
    /// Returns `Ok(None)` if no file exists at `path`.
    pub fn load(path: &Path) -> SearchResult<Option<Vec<Value>>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SearchError::cache(path, e)),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| SearchError::CorruptCache { path: path.to_path_buf(), source })
    }

    /// Write entries to `path`, replacing any previous content.
    pub fn store(path: &Path, entries: &[Value]) -> SearchResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(|e| SearchError::cache(parent, e))?;

        let json = serde_json::to_vec(entries)
            .map_err(|source| SearchError::CorruptCache { path: path.to_path_buf(), source })?;

        let mut file = NamedTempFile::new_in(parent).map_err(|e| SearchError::cache(parent, e))?;
        file.write_all(&json).map_err(|e| SearchError::cache(file.path(), e))?;
        file.flush().map_err(|e| SearchError::cache(file.path(), e))?;
        file.persist(path).map_err(|e| SearchError::cache(path, e.error))?;
        Ok(())
    }
}
