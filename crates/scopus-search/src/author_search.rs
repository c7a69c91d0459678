//! Author search: one resolved query and its author records.

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::cache::QueryCache;
use crate::client::ScopusClient;
use crate::config::api;
use crate::error::{SearchError, SearchResult};
use crate::models::AuthorRecord;
use crate::search::{EntrySource, SearchRequest, fetch_entries};

/// Parameters of a search besides the query itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Entries per round-trip. Smaller values mean more requests.
    pub count: u32,

    /// Zero-based offset of the first entry.
    pub start: u32,

    /// Fail when the API reports more matches than this.
    pub max_entries: u64,

    /// Ignore and overwrite any cached result.
    pub refresh: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            count: api::DEFAULT_COUNT,
            start: api::DEFAULT_START,
            max_entries: api::MAX_ENTRIES,
            refresh: false,
        }
    }
}

impl SearchOptions {
    #[must_use]
    pub const fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    #[must_use]
    pub const fn start(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    #[must_use]
    pub const fn max_entries(mut self, max_entries: u64) -> Self {
        self.max_entries = max_entries;
        self
    }

    #[must_use]
    pub const fn refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }
}

/// Result of an author search, e.g. `"authlast(Einstein) and authfirst(Albert)"`.
///
/// Immutable once built. Raw entries are kept as returned by the API (or as
/// read from the cache); [`authors`](Self::authors) normalizes them on every
/// call.
#[derive(Debug, Clone)]
pub struct AuthorSearch {
    query: String,
    cache_path: Option<PathBuf>,
    entries: Vec<Value>,
}

impl AuthorSearch {
    /// Run a search against the client's endpoint, using its query cache.
    ///
    /// Results are cached in `<cache_dir>/<md5(query)>`.
    pub async fn new(
        client: &ScopusClient,
        query: impl Into<String>,
        options: SearchOptions,
    ) -> SearchResult<Self> {
        Self::with_source(client, client.cache(), client.author_search_url(), query, options)
            .await
    }

    /// Run a search through any [`EntrySource`].
    pub async fn with_source<S>(
        source: &S,
        cache: &QueryCache,
        url: &str,
        query: impl Into<String>,
        options: SearchOptions,
    ) -> SearchResult<Self>
    where
        S: EntrySource + ?Sized,
    {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(SearchError::InvalidQuery("query must not be empty".to_string()));
        }
        if options.count == 0 {
            return Err(SearchError::InvalidCount);
        }

        cache.ensure_dir()?;
        let cache_path = cache.path_for(&query);

        let request = SearchRequest {
            query,
            url: url.to_string(),
            cache_path,
            refresh: options.refresh,
            count: options.count,
            start: options.start,
            max_entries: options.max_entries,
        };

        let entries = fetch_entries(source, &request).await?;

        Ok(Self { query: request.query, cache_path: Some(request.cache_path), entries })
    }

    /// Wrap an already-resolved result set.
    #[must_use]
    pub fn from_entries(query: impl Into<String>, entries: Vec<Value>) -> Self {
        Self { query: query.into(), cache_path: None, entries }
    }

    /// The query string.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Cache file backing this result, if it came from a search.
    #[must_use]
    pub fn cache_path(&self) -> Option<&Path> {
        self.cache_path.as_deref()
    }

    /// Raw entries in API order.
    #[must_use]
    pub fn entries(&self) -> &[Value] {
        &self.entries
    }

    /// Number of hits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One record per raw entry, in the same order.
    ///
    /// Fails on the first entry without an `eid`.
    pub fn authors(&self) -> SearchResult<Vec<AuthorRecord>> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| AuthorRecord::from_value(entry, index))
            .collect()
    }
}

impl fmt::Display for AuthorSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.query)?;
        write!(f, "Resulted in {} hits.", self.entries.len())?;
        for entry in &self.entries {
            write!(f, "\n    {entry}")?;
        }
        Ok(())
    }
}
