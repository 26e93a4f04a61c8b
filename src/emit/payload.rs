//! Serialized payload shapes.
//!
//! These are the JSON data modules referenced by routes. Each carries the
//! minimum a renderer needs; the raw body is referenced by source path,
//! not inlined.

use crate::content::{ContentItem, Frontmatter};
use crate::paginate::PageMetadata;
use serde::Serialize;

/// Minimal reference to an item inside a listing or sample.
#[derive(Debug, Clone, Serialize)]
pub struct ItemRef {
    pub title: String,
    pub permalink: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl ItemRef {
    pub fn of(item: &ContentItem) -> Self {
        Self {
            title: item.title().to_owned(),
            permalink: item.permalink.clone(),
            date: item.frontmatter.date.clone(),
        }
    }
}

/// Payload for a single content item page.
#[derive(Debug, Serialize)]
pub struct ItemPayload<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub permalink: &'a str,
    /// Full frontmatter including passthrough fields.
    pub frontmatter: &'a Frontmatter,
    /// Sampled same-tag neighbors.
    pub related: Vec<ItemRef>,
    /// Sampled items by the same author.
    pub by_author: Vec<ItemRef>,
    /// Reference back to the raw body content (source path relative to
    /// the content directory).
    pub source: &'a str,
}

/// Payload for one page of the root listing.
#[derive(Debug, Serialize)]
pub struct ListingPayload {
    pub title: String,
    pub description: String,
    pub metadata: PageMetadata,
    /// Page items; on the first page, featured items are appended after
    /// the paginated set (a presentation splice - pagination math is
    /// untouched).
    pub items: Vec<ItemRef>,
}

/// Payload for one page of a tag or author listing.
#[derive(Debug, Serialize)]
pub struct GroupListingPayload {
    pub label: String,
    pub permalink: String,
    pub count: usize,
    pub metadata: PageMetadata,
    pub items: Vec<ItemRef>,
}

/// One entry of the tag index page.
#[derive(Debug, Serialize)]
pub struct TagIndexEntry {
    pub label: String,
    pub permalink: String,
    pub count: usize,
}

/// Payload for the tag index page.
#[derive(Debug, Serialize)]
pub struct TagIndexPayload {
    pub tags: Vec<TagIndexEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Frontmatter;
    use std::path::PathBuf;

    #[test]
    fn test_item_ref_falls_back_to_slug_title() {
        let item = ContentItem {
            id: "x".into(),
            slug: "x".into(),
            permalink: "/blog/x".into(),
            frontmatter: Frontmatter::default(),
            body: String::new(),
            source: PathBuf::from("x.md"),
            relative: "x.md".into(),
        };
        let r = ItemRef::of(&item);
        assert_eq!(r.title, "x");
        let json = serde_json::to_string(&r).unwrap();
        assert!(!json.contains("date"));
    }
}
