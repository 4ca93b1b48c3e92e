//! Content collection metadata.
//!
//! The site lists three collections of entries: articles, projects, and
//! portfolio pieces. One schema covers all three. The contact feature does
//! not depend on this module; it lives here because the rest of the site
//! validates entry metadata through it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Named content collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Articles,
    Projects,
    Portfolio,
}

impl Collection {
    /// Resolve a collection from its content directory name.
    pub fn from_dir(name: &str) -> Option<Self> {
        match name {
            "articles" => Some(Self::Articles),
            "projects" => Some(Self::Projects),
            "portfolio" => Some(Self::Portfolio),
            _ => None,
        }
    }

    /// Content directory holding this collection's entries.
    pub fn dir(self) -> &'static str {
        match self {
            Self::Articles => "articles",
            Self::Projects => "projects",
            Self::Portfolio => "portfolio",
        }
    }
}

/// Validated metadata for one collection entry.
///
/// `short_path` is only present on entries that want a compact listing link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryMeta {
    /// Entry title.
    pub title: String,

    /// Short description for listings and meta tags.
    pub description: String,

    /// Publication date.
    pub date: NaiveDate,

    /// Logo or thumbnail asset path.
    pub logo: String,

    /// Link target for the entry.
    pub path: String,

    /// Compact link target, when the full path is too long for a listing.
    #[serde(default, rename = "shortPath", skip_serializing_if = "Option::is_none")]
    pub short_path: Option<String>,
}

impl EntryMeta {
    /// Parse and validate one entry's metadata block.
    pub fn from_yaml(collection: Collection, raw: &str) -> Result<Self> {
        serde_yaml::from_str(raw)
            .map_err(|e| CoreError::entry(collection.dir(), e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_from_dir() {
        assert_eq!(Collection::from_dir("articles"), Some(Collection::Articles));
        assert_eq!(Collection::from_dir("projects"), Some(Collection::Projects));
        assert_eq!(
            Collection::from_dir("portfolio"),
            Some(Collection::Portfolio)
        );
        assert_eq!(Collection::from_dir("drafts"), None);
    }

    #[test]
    fn test_parse_entry() {
        let raw = r#"
            title: A Static Site in Rust
            description: Notes from porting a portfolio to Leptos
            date: 2025-11-02
            logo: /images/rust.svg
            path: /articles/a-static-site-in-rust
        "#;

        let meta = EntryMeta::from_yaml(Collection::Articles, raw).unwrap();
        assert_eq!(meta.title, "A Static Site in Rust");
        assert_eq!(meta.date, NaiveDate::from_ymd_opt(2025, 11, 2).unwrap());
        assert!(meta.short_path.is_none());
    }

    #[test]
    fn test_parse_entry_with_short_path() {
        let raw = r#"
            title: Folio
            description: This site
            date: 2026-01-10
            logo: /images/folio.svg
            path: /projects/folio-a-portfolio-site-in-rust
            shortPath: /projects/folio
        "#;

        let meta = EntryMeta::from_yaml(Collection::Projects, raw).unwrap();
        assert_eq!(meta.short_path.as_deref(), Some("/projects/folio"));
    }

    #[test]
    fn test_rejects_malformed_date() {
        let raw = r#"
            title: Broken
            description: Bad date
            date: soon
            logo: /images/x.svg
            path: /articles/broken
        "#;

        let err = EntryMeta::from_yaml(Collection::Articles, raw).unwrap_err();
        assert!(err.to_string().contains("articles"));
    }

    #[test]
    fn test_rejects_missing_title() {
        let raw = r#"
            description: No title
            date: 2026-01-10
            logo: /images/x.svg
            path: /portfolio/untitled
        "#;

        let err = EntryMeta::from_yaml(Collection::Portfolio, raw).unwrap_err();
        assert!(err.to_string().contains("portfolio"));
    }
}
