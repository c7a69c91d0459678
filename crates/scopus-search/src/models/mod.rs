//! Data models for Scopus author search results.
//!
//! Raw entries are decoded into [`AuthorEntry`] with every field optional,
//! then normalized into [`AuthorRecord`] with explicit defaults per field.

mod author;
mod entry;
mod enums;

pub use author::AuthorRecord;
pub use entry::{AffiliationCurrent, AuthorEntry, OneOrMany, PreferredName, SubjectArea};
pub use enums::ResponseFormat;
