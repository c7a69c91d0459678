//! Error types for the Scopus author search client.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::path::PathBuf;
use std::time::Duration;

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Middleware error
    #[error("Middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// Quota exhausted (429 response)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested wait time before retry
        retry_after: Duration,
    },

    /// Missing or rejected credentials (401/403 response)
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Error message from API
        message: String,
    },

    /// Invalid request parameters (400 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from API
        message: String,
    },

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Well-formed JSON lacking the expected envelope
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ClientError {
    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited { retry_after: Duration::from_secs(seconds) }
    }

    /// Create an unauthorized error.
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized { message: message.into() }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Create a malformed response error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }
}

/// Errors from running an author search or reading its records.
#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    /// The API reports more results than the caller allows
    #[error("Found {total} matches. Set max_entries to a higher number or change your query ({max_entries} allowed)")]
    ResultSetTooLarge {
        /// Total results reported by the API
        total: u64,
        /// Configured ceiling
        max_entries: u64,
    },

    /// A raw entry lacks a required key, or has it set to null
    #[error("Entry {index} has a missing or null required field '{field}'")]
    MissingField {
        /// JSON key that was absent
        field: &'static str,
        /// Position of the entry in the result set
        index: usize,
    },

    /// Query string was empty
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Page size of zero
    #[error("count must be a positive integer")]
    InvalidCount,

    /// Error from the API client
    #[error("API error: {0}")]
    Client(#[from] ClientError),

    /// Cache file could not be read or written
    #[error("Cache I/O error at {}: {source}", path.display())]
    Cache {
        /// Cache file or directory involved
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Cache file holds something other than a JSON array of entries
    #[error("Corrupt cache file {}: {source}", path.display())]
    CorruptCache {
        /// Cache file involved
        path: PathBuf,
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// A raw entry has a field of an unexpected JSON type
    #[error("Entry {index} could not be decoded: {source}")]
    Decode {
        /// Position of the entry in the result set
        index: usize,
        /// Underlying parse error
        source: serde_json::Error,
    },
}

impl SearchError {
    /// Create a missing field error.
    #[must_use]
    pub const fn missing_field(field: &'static str, index: usize) -> Self {
        Self::MissingField { field, index }
    }

    /// Create a cache I/O error.
    #[must_use]
    pub fn cache(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Cache { path: path.into(), source }
    }

    /// Convert to a user-friendly message for the command line.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Client(ClientError::RateLimited { retry_after }) => {
                format!("Scopus quota exhausted. Please wait {retry_after:?} before retrying.")
            }
            Self::Client(ClientError::Unauthorized { .. }) => {
                "Scopus rejected the request. Check ELS_APIKEY (and ELS_INSTTOKEN off-campus)."
                    .to_string()
            }
            Self::CorruptCache { path, .. } => {
                format!("Cache file {} is corrupt. Re-run with --refresh.", path.display())
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for search operations.
pub type SearchResult<T> = Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_set_too_large_message() {
        let err = SearchError::ResultSetTooLarge { total: 6000, max_entries: 5000 };
        let msg = err.to_string();
        assert!(msg.contains("6000"));
        assert!(msg.contains("5000"));
    }

    #[test]
    fn test_missing_field_message() {
        let err = SearchError::missing_field("eid", 3);
        assert_eq!(err.to_string(), "Entry 3 has a missing or null required field 'eid'");
    }

    #[test]
    fn test_user_message_for_rate_limit() {
        let err = SearchError::from(ClientError::rate_limited(30));
        assert!(err.to_user_message().contains("30s"));
    }

    #[test]
    fn test_user_message_for_corrupt_cache() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SearchError::CorruptCache { path: PathBuf::from("/tmp/abc"), source };
        assert!(err.to_user_message().contains("--refresh"));
    }
}
