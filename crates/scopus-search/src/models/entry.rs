//! Raw author entry as returned by the Scopus author search API.

use serde::{Deserialize, Deserializer, Serialize};

/// One element of the `entry` array of an author search response.
///
/// Every field is optional. Scopus omits keys it has no data for, and `eid`
/// is checked when the entry is normalized rather than at decode time.
/// Scalar fields other than `eid` accept any JSON scalar and keep its text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorEntry {
    /// Author EID, e.g. `9-s2.0-7004212771`.
    #[serde(default)]
    pub eid: Option<String>,

    /// Preferred form of the author's name.
    #[serde(rename = "preferred-name", default)]
    pub preferred_name: Option<PreferredName>,

    /// Number of indexed documents.
    #[serde(rename = "document-count", default, deserialize_with = "scalar_text")]
    pub document_count: Option<String>,

    /// Current affiliation.
    #[serde(rename = "affiliation-current", default)]
    pub affiliation_current: Option<AffiliationCurrent>,

    /// Subject areas; Scopus sends a bare object when there is only one.
    #[serde(rename = "subject-area", default)]
    pub subject_area: Option<OneOrMany<SubjectArea>>,
}

/// Preferred name block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferredName {
    #[serde(default, deserialize_with = "scalar_text")]
    pub surname: Option<String>,

    #[serde(default, deserialize_with = "scalar_text")]
    pub initials: Option<String>,

    #[serde(rename = "given-name", default, deserialize_with = "scalar_text")]
    pub given_name: Option<String>,
}

/// Current affiliation block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AffiliationCurrent {
    #[serde(rename = "affiliation-name", default, deserialize_with = "scalar_text")]
    pub name: Option<String>,

    #[serde(rename = "affiliation-id", default, deserialize_with = "scalar_text")]
    pub id: Option<String>,

    #[serde(rename = "affiliation-city", default, deserialize_with = "scalar_text")]
    pub city: Option<String>,

    #[serde(rename = "affiliation-country", default, deserialize_with = "scalar_text")]
    pub country: Option<String>,
}

/// Subject area with the author's document frequency in it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubjectArea {
    /// Four-letter ASJC abbreviation, e.g. `PHYS`.
    #[serde(rename = "@abbrev", default, deserialize_with = "scalar_text")]
    pub abbrev: Option<String>,

    /// Documents in this area.
    #[serde(rename = "@frequency", default, deserialize_with = "scalar_text")]
    pub frequency: Option<String>,

    /// Full subject area name.
    #[serde(rename = "$", default, deserialize_with = "scalar_text")]
    pub name: Option<String>,
}

impl SubjectArea {
    /// `"ABBREV (FREQUENCY)"`, with empty strings for missing parts.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{} ({})",
            self.abbrev.as_deref().unwrap_or(""),
            self.frequency.as_deref().unwrap_or("")
        )
    }
}

/// A JSON value that is either a single object or an array of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    /// Normalize into a sequence.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }
}

/// Text of a JSON scalar. Scopus delivers counts as strings but other
/// mirrors send numbers, and names occasionally arrive as numbers or booleans.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
        Flag(bool),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
        Raw::Flag(flag) => flag.to_string(),
    }))
}
