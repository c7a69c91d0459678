//! Scopus API client.
//!
//! Provides the shared request layer used by searches:
//! - Connection pooling via reqwest
//! - `X-ELS-APIKey` / `X-ELS-Insttoken` authentication headers
//! - Optional retry middleware with exponential backoff
//! - Decoding of the `search-results` envelope into [`SearchPage`]

mod page;

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};

use crate::cache::QueryCache;
use crate::config::Config;
use crate::error::{ClientError, ClientResult};

pub use page::SearchPage;

/// Scopus API client.
#[derive(Clone)]
pub struct ScopusClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// API key (optional).
    api_key: Option<String>,

    /// Author search endpoint.
    author_search_url: String,

    /// Query cache location.
    cache: QueryCache,
}

impl ScopusClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if a credential is not a valid header value or HTTP
    /// client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(ref key) = config.api_key {
            let mut value: HeaderValue = key.parse()?;
            value.set_sensitive(true);
            headers.insert("x-els-apikey", value);
        }

        if let Some(ref token) = config.inst_token {
            let mut value: HeaderValue = token.parse()?;
            value.set_sensitive(true);
            headers.insert("x-els-insttoken", value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        let mut builder = ClientBuilder::new(client);
        if config.max_retries > 0 {
            let retry_policy = ExponentialBackoff::builder()
                .retry_bounds(Duration::from_secs(1), Duration::from_secs(30))
                .build_with_max_retries(config.max_retries);
            builder = builder.with(RetryTransientMiddleware::new_with_policy(retry_policy));
        }

        Ok(Self {
            client: builder.build(),
            api_key: config.api_key,
            author_search_url: config.author_search_url,
            cache: QueryCache::new(config.cache_dir),
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Author search endpoint this client talks to.
    #[must_use]
    pub fn author_search_url(&self) -> &str {
        &self.author_search_url
    }

    /// Query cache configured for this client.
    #[must_use]
    pub const fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Fetch one page of search results.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or a body
    /// without a `search-results` envelope.
    pub async fn search_page(
        &self,
        url: &str,
        query: &str,
        start: u64,
        count: u32,
    ) -> ClientResult<SearchPage> {
        let params = vec![
            ("query".to_string(), query.to_string()),
            ("start".to_string(), start.to_string()),
            ("count".to_string(), count.to_string()),
        ];

        tracing::debug!(url, query, start, count, "Requesting search page");

        let response = self.client.get(url).query(&params).send().await?;
        let response = self.handle_response(response).await?;
        let body = response.bytes().await?;

        SearchPage::from_slice(&body)
    }

    /// Handle API response status codes.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);

                Err(ClientError::rate_limited(retry_after))
            }
            401 | 403 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::unauthorized(text))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::bad_request(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }
}

impl std::fmt::Debug for ScopusClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopusClient")
            .field("has_api_key", &self.has_api_key())
            .field("author_search_url", &self.author_search_url)
            .finish()
    }
}
