//! Fetch-or-load of a complete search result set.
//!
//! [`fetch_entries`] serves a request from the query cache when it can, and
//! otherwise pages through the API, enforces the entry ceiling, and writes
//! the accumulated entries back to the cache.

use std::path::PathBuf;

use serde_json::Value;

use crate::cache::QueryCache;
use crate::client::{ScopusClient, SearchPage};
use crate::error::{ClientResult, SearchError, SearchResult};

/// Source of search result pages.
#[async_trait::async_trait]
pub trait EntrySource: Send + Sync {
    /// Fetch the page of results for `query` beginning at `start`.
    async fn fetch_page(
        &self,
        url: &str,
        query: &str,
        start: u64,
        count: u32,
    ) -> ClientResult<SearchPage>;
}

#[async_trait::async_trait]
impl EntrySource for ScopusClient {
    async fn fetch_page(
        &self,
        url: &str,
        query: &str,
        start: u64,
        count: u32,
    ) -> ClientResult<SearchPage> {
        self.search_page(url, query, start, count).await
    }
}

/// Everything needed to resolve one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub url: String,
    pub cache_path: PathBuf,
    pub refresh: bool,
    pub count: u32,
    pub start: u32,
    pub max_entries: u64,
}

/// Resolve a search to its raw entries, in API order.
///
/// Without `refresh`, an existing cache file is returned as-is and no request
/// is made. Otherwise pages are fetched `count` at a time from `start` until
/// the reported total is reached. Nothing is written to the cache when the
/// total exceeds `max_entries`.
pub async fn fetch_entries<S>(source: &S, request: &SearchRequest) -> SearchResult<Vec<Value>>
where
    S: EntrySource + ?Sized,
{
    if request.count == 0 {
        return Err(SearchError::InvalidCount);
    }

    if !request.refresh {
        if let Some(entries) = QueryCache::load(&request.cache_path)? {
            tracing::debug!(
                query = %request.query,
                path = %request.cache_path.display(),
                entries = entries.len(),
                "Cache hit"
            );
            return Ok(entries);
        }
    }

    let count = request.count;
    let mut start = u64::from(request.start);

    let first = source.fetch_page(&request.url, &request.query, start, count).await?;
    let total = first.total_results;
    if total > request.max_entries {
        return Err(SearchError::ResultSetTooLarge { total, max_entries: request.max_entries });
    }

    tracing::debug!(query = %request.query, total, "Search total");

    let mut entries = first.entries;
    start += u64::from(count);

    while start < total {
        let page = source.fetch_page(&request.url, &request.query, start, count).await?;
        if page.entries.is_empty() {
            tracing::warn!(start, total, "Empty page before reported total, stopping");
            break;
        }

        entries.extend(page.entries);
        if entries.len() as u64 > request.max_entries {
            return Err(SearchError::ResultSetTooLarge {
                total: entries.len() as u64,
                max_entries: request.max_entries,
            });
        }

        start += u64::from(count);
    }

    QueryCache::store(&request.cache_path, &entries)?;
    tracing::info!(
        query = %request.query,
        path = %request.cache_path.display(),
        entries = entries.len(),
        "Cached search results"
    );

    Ok(entries)
}
