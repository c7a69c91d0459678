//! Output formatters for author search results.

mod json;
mod markdown;

pub use self::json::{compact_author, format_authors_json};
pub use markdown::{format_author_markdown, format_authors_markdown};

use crate::models::{AuthorRecord, ResponseFormat};

/// Render records in the requested format.
pub fn render(authors: &[AuthorRecord], format: ResponseFormat) -> serde_json::Result<String> {
    match format {
        ResponseFormat::Markdown => Ok(format_authors_markdown(authors)),
        ResponseFormat::Json => format_authors_json(authors),
    }
}
