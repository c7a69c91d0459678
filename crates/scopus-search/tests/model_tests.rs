//! Field extraction rules for author records.

use serde_json::json;

use scopus_search::{AuthorRecord, AuthorSearch, SearchError};

// =============================================================================
// Field extraction
// =============================================================================

#[test]
fn test_full_entry() {
    let entry = json!({
        "eid": "X",
        "preferred-name": {"surname": "Doe", "initials": "J.", "given-name": "John"},
        "document-count": "12",
        "affiliation-current": {"affiliation-name": "MIT", "affiliation-id": "60027"},
        "subject-area": {"@abbrev": "PHYS", "@frequency": "5"}
    });

    let record = AuthorRecord::from_value(&entry, 0).unwrap();

    assert_eq!(
        record,
        AuthorRecord {
            eid: "X".to_string(),
            surname: Some("Doe".to_string()),
            initials: Some("J.".to_string()),
            givenname: Some("John".to_string()),
            documents: "12".to_string(),
            affiliation: Some("MIT".to_string()),
            affiliation_id: Some("60027".to_string()),
            city: None,
            country: None,
            areas: "PHYS (5)".to_string(),
        }
    );
}

#[test]
fn test_missing_eid_fails() {
    let entry = json!({
        "preferred-name": {"surname": "Doe"},
        "document-count": "12"
    });

    let err = AuthorRecord::from_value(&entry, 0).unwrap_err();
    assert!(matches!(err, SearchError::MissingField { field: "eid", .. }));
}

#[test]
fn test_two_subject_areas_are_joined() {
    let entry = json!({
        "eid": "X",
        "subject-area": [
            {"@abbrev": "A1", "@frequency": "F1"},
            {"@abbrev": "A2", "@frequency": "F2"}
        ]
    });

    let record = AuthorRecord::from_value(&entry, 0).unwrap();
    assert_eq!(record.areas, "A1 (F1); A2 (F2)");
}

#[test]
fn test_missing_document_count_defaults_to_zero() {
    let record = AuthorRecord::from_value(&json!({"eid": "X"}), 0).unwrap();
    assert_eq!(record.documents, "0");
}

#[test]
fn test_missing_subject_area_keeps_placeholder() {
    let record = AuthorRecord::from_value(&json!({"eid": "X"}), 0).unwrap();
    assert_eq!(record.areas, " ()");
}

#[test]
fn test_subject_area_parts_default_to_empty() {
    let entry = json!({
        "eid": "X",
        "subject-area": [{"@abbrev": "MEDI"}, {"@frequency": "3"}]
    });

    let record = AuthorRecord::from_value(&entry, 0).unwrap();
    assert_eq!(record.areas, "MEDI ();  (3)");
}

#[test]
fn test_city_and_country() {
    let entry = json!({
        "eid": "X",
        "affiliation-current": {
            "affiliation-name": "ETH Zurich",
            "affiliation-city": "Zurich",
            "affiliation-country": "Switzerland"
        }
    });

    let record = AuthorRecord::from_value(&entry, 0).unwrap();
    assert_eq!(record.affiliation.as_deref(), Some("ETH Zurich"));
    assert!(record.affiliation_id.is_none());
    assert_eq!(record.city.as_deref(), Some("Zurich"));
    assert_eq!(record.country.as_deref(), Some("Switzerland"));
}

#[test]
fn test_numeric_name_and_abbrev_are_kept_as_text() {
    let entry = json!({
        "eid": "X",
        "preferred-name": {"surname": 123},
        "subject-area": {"@abbrev": 1700, "@frequency": 5}
    });

    let record = AuthorRecord::from_value(&entry, 0).unwrap();
    assert_eq!(record.surname.as_deref(), Some("123"));
    assert_eq!(record.areas, "1700 (5)");
}

#[test]
fn test_null_eid_fails() {
    let err = AuthorRecord::from_value(&json!({"eid": null}), 4).unwrap_err();
    assert!(matches!(err, SearchError::MissingField { field: "eid", index: 4 }));
    assert!(err.to_string().contains("missing or null"));
}

#[test]
fn test_partial_preferred_name() {
    let entry = json!({"eid": "X", "preferred-name": {"surname": "Noether"}});

    let record = AuthorRecord::from_value(&entry, 0).unwrap();
    assert_eq!(record.surname.as_deref(), Some("Noether"));
    assert!(record.initials.is_none());
    assert!(record.givenname.is_none());
}

// =============================================================================
// Result set
// =============================================================================

#[test]
fn test_authors_recomputed_each_call() {
    let search = AuthorSearch::from_entries("q", vec![json!({"eid": "a"}), json!({"eid": "b"})]);

    let first = search.authors().unwrap();
    let second = search.authors().unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), search.len());
}

#[test]
fn test_one_bad_entry_fails_whole_list() {
    let search = AuthorSearch::from_entries(
        "q",
        vec![json!({"eid": "a"}), json!({"surname": "no eid"}), json!({"eid": "c"})],
    );

    assert!(matches!(
        search.authors().unwrap_err(),
        SearchError::MissingField { field: "eid", index: 1 }
    ));
}

#[test]
fn test_record_serializes_with_null_fields() {
    let record = AuthorRecord::from_value(&json!({"eid": "X"}), 0).unwrap();
    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(value["eid"], "X");
    assert!(value["surname"].is_null());
    assert_eq!(value["documents"], "0");
}
