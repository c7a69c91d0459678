//! Configuration for the Scopus author search client.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::BaseDirs;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Author search endpoint of the Elsevier Scopus API.
    pub const AUTHOR_SEARCH_URL: &str = "https://api.elsevier.com/content/search/author";

    /// Entries requested per round-trip.
    pub const DEFAULT_COUNT: u32 = 200;

    /// Zero-based offset of the first entry.
    pub const DEFAULT_START: u32 = 0;

    /// Largest result set the Scopus search engine will page through.
    pub const MAX_ENTRIES: u64 = 5000;

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Cache directory below the user's home directory.
    pub const CACHE_SUBDIR: &str = ".scopus/author_search";
}

/// Client configuration.
#[derive(Clone)]
pub struct Config {
    /// Elsevier API key, sent as `X-ELS-APIKey`.
    pub api_key: Option<String>,

    /// Institutional token, sent as `X-ELS-Insttoken`.
    pub inst_token: Option<String>,

    /// Author search endpoint (overridable for mock servers).
    pub author_search_url: String,

    /// Directory holding one JSON file per distinct query.
    pub cache_dir: PathBuf,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Transient-failure retries. Zero disables the retry middleware.
    pub max_retries: u32,
}

impl Config {
    /// Create a production configuration.
    #[must_use]
    pub fn new(api_key: Option<String>, inst_token: Option<String>) -> Self {
        Self {
            api_key,
            inst_token,
            author_search_url: api::AUTHOR_SEARCH_URL.to_string(),
            cache_dir: default_cache_dir(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            max_retries: 0,
        }
    }

    /// Create a test configuration pointing at a mock server and a scratch cache.
    #[must_use]
    pub fn for_testing(base_url: &str, cache_dir: impl AsRef<Path>) -> Self {
        Self {
            api_key: Some("test-key".to_string()),
            inst_token: None,
            author_search_url: format!("{base_url}/content/search/author"),
            cache_dir: cache_dir.as_ref().to_path_buf(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            max_retries: 0,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `ELS_APIKEY`, `ELS_INSTTOKEN` and `SCOPUS_CACHE_DIR`, after
    /// loading a `.env` file if one is present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let api_key = std::env::var("ELS_APIKEY").ok().filter(|k| !k.is_empty());
        let inst_token = std::env::var("ELS_INSTTOKEN").ok().filter(|t| !t.is_empty());

        let mut config = Self::new(api_key, inst_token);
        if let Ok(dir) = std::env::var("SCOPUS_CACHE_DIR") {
            if dir.is_empty() {
                anyhow::bail!("SCOPUS_CACHE_DIR is set but empty");
            }
            config.cache_dir = PathBuf::from(dir);
        }
        Ok(config)
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Replace the cache directory.
    #[must_use]
    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = dir.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("has_api_key", &self.has_api_key())
            .field("has_inst_token", &self.inst_token.is_some())
            .field("author_search_url", &self.author_search_url)
            .field("cache_dir", &self.cache_dir)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

/// `~/.scopus/author_search`, or a relative path when no home directory exists.
#[must_use]
pub fn default_cache_dir() -> PathBuf {
    BaseDirs::new().map_or_else(
        || PathBuf::from(api::CACHE_SUBDIR),
        |dirs| dirs.home_dir().join(api::CACHE_SUBDIR),
    )
}
