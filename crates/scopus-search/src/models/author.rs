//! Normalized author record.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::entry::{AuthorEntry, SubjectArea};
use crate::error::{SearchError, SearchResult};

/// One author from a search result, with per-field defaults applied.
///
/// All fields except `eid`, `documents` and `areas` may be absent.
/// `areas` combines abbreviated subject areas with the author's document
/// count in each, e.g. `"PHYS (5); MATH (2)"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    pub eid: String,
    pub surname: Option<String>,
    pub initials: Option<String>,
    pub givenname: Option<String>,
    pub documents: String,
    pub affiliation: Option<String>,
    pub affiliation_id: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub areas: String,
}

impl AuthorRecord {
    /// Normalize a decoded entry. `index` is used only for error reporting.
    pub fn from_entry(entry: AuthorEntry, index: usize) -> SearchResult<Self> {
        let eid = entry.eid.ok_or(SearchError::missing_field("eid", index))?;
        let name = entry.preferred_name.unwrap_or_default();
        let aff = entry.affiliation_current.unwrap_or_default();

        // A missing subject-area yields one empty area, i.e. " ()".
        let areas = entry
            .subject_area
            .map_or_else(|| vec![SubjectArea::default()], |areas| areas.into_vec())
            .iter()
            .map(SubjectArea::label)
            .collect::<Vec<_>>()
            .join("; ");

        Ok(Self {
            eid,
            surname: name.surname,
            initials: name.initials,
            givenname: name.given_name,
            documents: entry.document_count.unwrap_or_else(|| "0".to_string()),
            affiliation: aff.name,
            affiliation_id: aff.id,
            city: aff.city,
            country: aff.country,
            areas,
        })
    }

    /// Decode and normalize a raw JSON entry.
    pub fn from_value(value: &Value, index: usize) -> SearchResult<Self> {
        let entry = AuthorEntry::deserialize(value)
            .map_err(|source| SearchError::Decode { index, source })?;
        Self::from_entry(entry, index)
    }

    /// "Surname, Givenname", falling back to initials, then to the EID.
    #[must_use]
    pub fn display_name(&self) -> String {
        let first = self.givenname.as_deref().or(self.initials.as_deref());
        match (self.surname.as_deref(), first) {
            (Some(surname), Some(first)) => format!("{surname}, {first}"),
            (Some(surname), None) => surname.to_string(),
            (None, Some(first)) => first.to_string(),
            (None, None) => self.eid.clone(),
        }
    }

    /// "City, Country" from whichever parts are present.
    #[must_use]
    pub fn location(&self) -> Option<String> {
        match (self.city.as_deref(), self.country.as_deref()) {
            (Some(city), Some(country)) => Some(format!("{city}, {country}")),
            (Some(part), None) | (None, Some(part)) => Some(part.to_string()),
            (None, None) => None,
        }
    }

    /// Document count as a number, if it parses.
    #[must_use]
    pub fn document_count(&self) -> Option<u64> {
        self.documents.parse().ok()
    }
}

impl fmt::Display for AuthorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {} documents", self.display_name(), self.eid, self.documents)?;
        if let Some(affiliation) = &self.affiliation {
            write!(f, ", {affiliation}")?;
        }
        Ok(())
    }
}
