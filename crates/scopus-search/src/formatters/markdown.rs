//! Markdown output formatting.

use crate::models::AuthorRecord;

/// Format a list of authors as Markdown.
#[must_use]
pub fn format_authors_markdown(authors: &[AuthorRecord]) -> String {
    if authors.is_empty() {
        return "No authors found.".to_string();
    }

    let mut output = format!("# Authors ({} results)\n\n", authors.len());

    for (i, author) in authors.iter().enumerate() {
        output.push_str(&format_author_markdown_indexed(author, i + 1));
        output.push_str("\n---\n\n");
    }

    output
}

/// Format a single author as Markdown.
#[must_use]
pub fn format_author_markdown(author: &AuthorRecord) -> String {
    format_author_markdown_indexed(author, 0)
}

fn format_author_markdown_indexed(author: &AuthorRecord, index: usize) -> String {
    let mut output = String::new();

    // Name
    if index > 0 {
        output.push_str(&format!("## {}. {}\n\n", index, author.display_name()));
    } else {
        output.push_str(&format!("## {}\n\n", author.display_name()));
    }

    output.push_str(&format!(
        "**EID**: {} | **Documents**: {}\n\n",
        author.eid, author.documents
    ));

    // Affiliation
    if let Some(affiliation) = &author.affiliation {
        match &author.affiliation_id {
            Some(id) => output.push_str(&format!("**Affiliation**: {affiliation} ({id})\n\n")),
            None => output.push_str(&format!("**Affiliation**: {affiliation}\n\n")),
        }
    }

    if let Some(location) = author.location() {
        output.push_str(&format!("**Location**: {location}\n\n"));
    }

    // " ()" is the placeholder for an author without subject areas
    let areas = author.areas.trim();
    if !areas.is_empty() && areas != "()" {
        output.push_str(&format!("**Subject areas**: {areas}\n\n"));
    }

    output.push_str(&format!(
        "**Scopus Profile**: [View](https://www.scopus.com/authid/detail.uri?authorId={})\n",
        author.eid.rsplit('-').next().unwrap_or(&author.eid)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> AuthorRecord {
        AuthorRecord {
            eid: "9-s2.0-7004212771".to_string(),
            surname: Some("Einstein".to_string()),
            initials: Some("A.".to_string()),
            givenname: Some("Albert".to_string()),
            documents: "52".to_string(),
            affiliation: Some("Institute for Advanced Study".to_string()),
            affiliation_id: Some("60030612".to_string()),
            city: Some("Princeton".to_string()),
            country: Some("United States".to_string()),
            areas: "PHYS (40); MATH (12)".to_string(),
        }
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_authors_markdown(&[]), "No authors found.");
    }

    #[test]
    fn test_full_record() {
        let output = format_authors_markdown(&[record()]);

        assert!(output.starts_with("# Authors (1 results)"));
        assert!(output.contains("## 1. Einstein, Albert"));
        assert!(output.contains("**EID**: 9-s2.0-7004212771 | **Documents**: 52"));
        assert!(output.contains("**Affiliation**: Institute for Advanced Study (60030612)"));
        assert!(output.contains("**Location**: Princeton, United States"));
        assert!(output.contains("**Subject areas**: PHYS (40); MATH (12)"));
        assert!(output.contains("authorId=7004212771"));
    }

    #[test]
    fn test_placeholder_areas_hidden() {
        let mut author = record();
        author.areas = " ()".to_string();
        author.affiliation = None;
        author.city = None;
        author.country = None;

        let output = format_author_markdown(&author);
        assert!(output.starts_with("## Einstein, Albert"));
        assert!(!output.contains("Subject areas"));
        assert!(!output.contains("Affiliation"));
        assert!(!output.contains("Location"));
    }
}
