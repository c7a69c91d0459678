//! JSON output formatting.

use serde_json::{Value, json};

use crate::models::AuthorRecord;

/// Create a compact author representation, omitting absent fields.
#[must_use]
pub fn compact_author(author: &AuthorRecord) -> Value {
    let mut obj = json!({
        "eid": author.eid,
        "name": author.display_name(),
        "documents": author.document_count().map_or_else(|| json!(author.documents), |n| json!(n)),
    });

    let optional = [
        ("surname", &author.surname),
        ("initials", &author.initials),
        ("givenname", &author.givenname),
        ("affiliation", &author.affiliation),
        ("affiliationId", &author.affiliation_id),
        ("city", &author.city),
        ("country", &author.country),
    ];
    for (key, value) in optional {
        if let Some(value) = value {
            obj[key] = json!(value);
        }
    }

    let areas = author.areas.trim();
    if !areas.is_empty() && areas != "()" {
        obj["areas"] = json!(author.areas);
    }

    obj
}

/// Format a list of authors as a pretty-printed JSON array.
pub fn format_authors_json(authors: &[AuthorRecord]) -> serde_json::Result<String> {
    let compact = authors.iter().map(compact_author).collect::<Vec<_>>();
    serde_json::to_string_pretty(&compact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_author() {
        let author = AuthorRecord {
            eid: "9-s2.0-1".to_string(),
            surname: Some("Doe".to_string()),
            initials: Some("J.".to_string()),
            givenname: None,
            documents: "12".to_string(),
            affiliation: Some("MIT".to_string()),
            affiliation_id: Some("60027".to_string()),
            city: None,
            country: None,
            areas: "PHYS (5)".to_string(),
        };

        let compact = compact_author(&author);

        assert_eq!(compact["eid"], "9-s2.0-1");
        assert_eq!(compact["name"], "Doe, J.");
        assert_eq!(compact["documents"], 12);
        assert_eq!(compact["affiliationId"], "60027");
        assert_eq!(compact["areas"], "PHYS (5)");
        assert!(compact.get("givenname").is_none());
        assert!(compact.get("city").is_none());
    }

    #[test]
    fn test_format_authors_json_is_array() {
        let output = format_authors_json(&[]).unwrap();
        assert_eq!(output, "[]");
    }
}
