//! Tag and author grouping.
//!
//! Single-pass construction of derived relational views: every item is
//! visited once, appending itself to each of its tag groups and to its
//! author group. Group order is sorted by label so output is
//! deterministic.

use crate::content::ContentItem;
use crate::utils::slug::{join_url, slugify};
use rustc_hash::FxHashMap;

// ============================================================================
// Group
// ============================================================================

/// A tag or author grouping over the content set.
///
/// Items are referenced by index into the loader's item slice; the group
/// never owns content. `count` is kept in lockstep with `items` so it can
/// be displayed without recomputation.
#[derive(Debug, Clone)]
pub struct Group {
    /// Raw label (tag string or author identifier).
    pub label: String,
    /// URL-safe listing permalink derived from the label.
    pub permalink: String,
    items: Vec<usize>,
    count: usize,
}

impl Group {
    fn new(label: String, permalink: String) -> Self {
        Self {
            label,
            permalink,
            items: Vec::new(),
            count: 0,
        }
    }

    /// Item indices in this group, in base-list order.
    pub fn items(&self) -> &[usize] {
        &self.items
    }

    /// Number of items; always equals `items().len()`.
    pub fn count(&self) -> usize {
        self.count
    }

    fn push(&mut self, index: usize) {
        self.items.push(index);
        self.count += 1;
    }
}

// ============================================================================
// Builders
// ============================================================================

/// Group items by tag. One pass over the item set; O(N·T) where T is the
/// average tags-per-item.
pub fn build_tag_groups(items: &[ContentItem], base_path: &str) -> Vec<Group> {
    let mut groups: FxHashMap<&str, Group> = FxHashMap::default();

    for (index, item) in items.iter().enumerate() {
        for tag in &item.frontmatter.tags {
            groups
                .entry(tag)
                .or_insert_with(|| {
                    let permalink = join_url(base_path, &format!("tags/{}", slugify(tag)));
                    Group::new(tag.clone(), permalink)
                })
                .push(index);
        }
    }

    into_sorted(groups)
}

/// Group items by author. An item has at most one author in this model.
pub fn build_author_groups(items: &[ContentItem], base_path: &str) -> Vec<Group> {
    let mut groups: FxHashMap<&str, Group> = FxHashMap::default();

    for (index, item) in items.iter().enumerate() {
        let Some(author) = &item.frontmatter.authors else {
            continue;
        };
        groups
            .entry(author)
            .or_insert_with(|| {
                let permalink = join_url(base_path, &format!("author/{}", slugify(author)));
                Group::new(author.clone(), permalink)
            })
            .push(index);
    }

    into_sorted(groups)
}

fn into_sorted(groups: FxHashMap<&str, Group>) -> Vec<Group> {
    let mut groups: Vec<Group> = groups.into_values().collect();
    groups.sort_by(|a, b| a.label.cmp(&b.label));
    groups
}
