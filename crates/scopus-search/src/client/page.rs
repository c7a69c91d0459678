//! Decoding of one page of a Scopus search response.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{ClientError, ClientResult};

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPage {
    /// Total matches reported by the API across all pages.
    pub total_results: u64,

    /// Raw entries in API order.
    pub entries: Vec<Value>,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "search-results")]
    results: Option<RawResults>,
}

#[derive(Deserialize)]
struct RawResults {
    #[serde(rename = "opensearch:totalResults", default, deserialize_with = "count")]
    total_results: u64,

    #[serde(default)]
    entry: Vec<Value>,
}

impl SearchPage {
    /// Decode a response body.
    ///
    /// Scopus answers an empty search with a single
    /// `{"error": "Result set was empty"}` entry; that page decodes with no
    /// entries.
    pub fn from_slice(body: &[u8]) -> ClientResult<Self> {
        let envelope: Envelope = serde_json::from_slice(body)?;
        let raw = envelope
            .results
            .ok_or_else(|| ClientError::malformed("missing 'search-results'"))?;

        let entries = if raw.total_results == 0 {
            Vec::new()
        } else {
            raw.entry
        };

        Ok(Self { total_results: raw.total_results, entries })
    }
}

/// OpenSearch counters arrive as strings ("42"), occasionally as numbers or null.
fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(0),
        Some(Raw::Number(n)) => Ok(n),
        Some(Raw::Text(text)) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: &Value) -> Vec<u8> {
        serde_json::to_vec(value).unwrap()
    }

    #[test]
    fn test_decode_page() {
        let page = SearchPage::from_slice(&body(&json!({
            "search-results": {
                "opensearch:totalResults": "2",
                "opensearch:startIndex": "0",
                "opensearch:itemsPerPage": "2",
                "entry": [{"eid": "9-s2.0-1"}, {"eid": "9-s2.0-2"}]
            }
        })))
        .unwrap();

        assert_eq!(page.total_results, 2);
        assert_eq!(page.entries.len(), 2);
        assert_eq!(page.entries[1]["eid"], "9-s2.0-2");
    }

    #[test]
    fn test_empty_result_marker_is_dropped() {
        let page = SearchPage::from_slice(&body(&json!({
            "search-results": {
                "opensearch:totalResults": "0",
                "opensearch:startIndex": "0",
                "opensearch:itemsPerPage": "0",
                "entry": [{"@_fa": "true", "error": "Result set was empty"}]
            }
        })))
        .unwrap();

        assert_eq!(page.total_results, 0);
        assert!(page.entries.is_empty());
    }

    #[test]
    fn test_numeric_counters() {
        let page = SearchPage::from_slice(&body(&json!({
            "search-results": {"opensearch:totalResults": 7, "entry": [{"eid": "a"}]}
        })))
        .unwrap();

        assert_eq!(page.total_results, 7);
        assert_eq!(page.entries.len(), 1);
    }

    #[test]
    fn test_only_total_counter_is_read() {
        let page = SearchPage::from_slice(&body(&json!({
            "search-results": {
                "opensearch:totalResults": "1",
                "opensearch:startIndex": "n/a",
                "opensearch:itemsPerPage": null,
                "entry": [{"eid": "a"}]
            }
        })))
        .unwrap();

        assert_eq!(page, SearchPage { total_results: 1, entries: vec![json!({"eid": "a"})] });
    }

    #[test]
    fn test_missing_envelope_is_malformed() {
        let err = SearchPage::from_slice(&body(&json!({"service-error": {}}))).unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = SearchPage::from_slice(b"{ invalid json").unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));
    }

    #[test]
    fn test_non_numeric_total_is_parse_error() {
        let err = SearchPage::from_slice(&body(&json!({
            "search-results": {"opensearch:totalResults": "many"}
        })))
        .unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));
    }
}
