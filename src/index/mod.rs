//! Relationship indexing over the loaded content set.
//!
//! Derived relational views computed in one place after loading:
//!
//! | View        | Shape                                    |
//! |-------------|------------------------------------------|
//! | `tags`      | tag label → ordered item indices         |
//! | `authors`   | author id → ordered item indices         |
//! | `related`   | per item: sampled same-tag neighbors     |
//! | `by_author` | per item: sampled same-author neighbors  |
//!
//! Everything references items by index into the loader's slice; the
//! index never owns or mutates content.

pub mod groups;
pub mod related;

pub use groups::{Group, build_author_groups, build_tag_groups};
pub use related::{Sampler, author_candidates, related_candidates};

use crate::config::SiteConfig;
use crate::content::ContentItem;

/// All derived relations for one build pass.
#[derive(Debug)]
pub struct SiteIndex {
    /// Tag groups, sorted by label.
    pub tags: Vec<Group>,
    /// Author groups, sorted by label.
    pub authors: Vec<Group>,
    /// Per-item sampled related items (same-tag neighbors).
    pub related: Vec<Vec<usize>>,
    /// Per-item sampled items by the same author.
    pub by_author: Vec<Vec<usize>>,
}

/// Build the full relationship index for the item snapshot.
pub fn build_index(items: &[ContentItem], config: &SiteConfig) -> SiteIndex {
    let base_path = &config.build.base_path;
    let tags = build_tag_groups(items, base_path);
    let authors = build_author_groups(items, base_path);

    let mut sampler = Sampler::from_config(&config.build.related);
    let related = (0..items.len())
        .map(|i| sampler.sample(related_candidates(items, &tags, i)))
        .collect();
    let by_author = (0..items.len())
        .map(|i| sampler.sample(author_candidates(items, &authors, i)))
        .collect();

    SiteIndex {
        tags,
        authors,
        related,
        by_author,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SampleMode, SiteConfig};
    use crate::content::{ContentItem, Frontmatter};
    use std::path::PathBuf;

    fn item(slug: &str, tags: &[&str], author: Option<&str>) -> ContentItem {
        ContentItem {
            id: slug.into(),
            slug: slug.into(),
            permalink: format!("/blog/{slug}"),
            frontmatter: Frontmatter {
                tags: tags.iter().map(|t| (*t).to_owned()).collect(),
                authors: author.map(str::to_owned),
                ..Frontmatter::default()
            },
            body: String::new(),
            source: PathBuf::from(format!("content/{slug}.md")),
            relative: format!("{slug}.md"),
        }
    }

    fn config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.related.sampling = SampleMode::Seeded;
        config.build.related.seed = 9;
        config
    }

    #[test]
    fn test_build_index_shapes() {
        let items = vec![
            item("a", &["rust"], Some("alice")),
            item("b", &["rust"], Some("alice")),
            item("c", &["web"], Some("bob")),
        ];
        let index = build_index(&items, &config());

        assert_eq!(index.tags.len(), 2);
        assert_eq!(index.authors.len(), 2);
        assert_eq!(index.related.len(), items.len());
        assert_eq!(index.by_author.len(), items.len());
    }

    #[test]
    fn test_related_never_contains_self() {
        let items: Vec<ContentItem> = (0..8)
            .map(|i| item(&format!("p{i}"), &["rust"], Some("alice")))
            .collect();
        let index = build_index(&items, &config());

        for (i, sample) in index.related.iter().enumerate() {
            assert!(!sample.contains(&i));
            assert!(sample.len() <= 3);
        }
        for (i, sample) in index.by_author.iter().enumerate() {
            assert!(!sample.contains(&i));
            assert!(sample.len() <= 3);
        }
    }

    #[test]
    fn test_untagged_authorless_item_has_empty_samples() {
        let items = vec![item("lonely", &[], None), item("b", &["rust"], Some("a"))];
        let index = build_index(&items, &config());
        assert!(index.related[0].is_empty());
        assert!(index.by_author[0].is_empty());
    }
}
