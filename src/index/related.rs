//! Bounded random sampling of related items.
//!
//! For a target item, the candidate set is every other item sharing at
//! least one tag (or the same author). From the candidates a sample of
//! `min(size, candidates)` distinct items is drawn.
//!
//! Sampling is pluggable: unseeded random (the default, so listings vary
//! between builds) or seeded for reproducible output. Candidates are
//! sorted before shuffling so a seeded run is fully deterministic.

use crate::config::{RelatedConfig, SampleMode};
use crate::content::ContentItem;
use crate::index::groups::Group;
use rustc_hash::FxHashSet;

// ============================================================================
// Sampler
// ============================================================================

/// Draws bounded samples from candidate sets.
pub struct Sampler {
    rng: fastrand::Rng,
    size: usize,
}

impl Sampler {
    /// Build a sampler from the `[build.related]` config section.
    pub fn from_config(config: &RelatedConfig) -> Self {
        let rng = match config.sampling {
            SampleMode::Random => fastrand::Rng::new(),
            SampleMode::Seeded => fastrand::Rng::with_seed(config.seed),
        };
        Self {
            rng,
            size: config.size,
        }
    }

    /// Sample up to `size` distinct candidates.
    ///
    /// Candidates are shuffled and truncated, so the result never
    /// contains repeats as long as the input has none.
    pub fn sample(&mut self, mut candidates: Vec<usize>) -> Vec<usize> {
        self.rng.shuffle(&mut candidates);
        candidates.truncate(self.size);
        candidates
    }
}

// ============================================================================
// Candidate sets
// ============================================================================

/// Items sharing at least one tag with the target, target excluded.
///
/// Returned sorted by index so the sampler's shuffle is the only source
/// of nondeterminism.
pub fn related_candidates(items: &[ContentItem], tags: &[Group], target: usize) -> Vec<usize> {
    let item = &items[target];
    if item.frontmatter.tags.is_empty() {
        return Vec::new();
    }

    let mut candidates = FxHashSet::default();
    for group in tags {
        if item.frontmatter.tags.iter().any(|t| *t == group.label) {
            candidates.extend(group.items().iter().copied());
        }
    }
    candidates.remove(&target);

    let mut candidates: Vec<usize> = candidates.into_iter().collect();
    candidates.sort_unstable();
    candidates
}

/// Other items by the target's author, target excluded.
pub fn author_candidates(items: &[ContentItem], authors: &[Group], target: usize) -> Vec<usize> {
    let Some(author) = &items[target].frontmatter.authors else {
        return Vec::new();
    };

    authors
        .iter()
        .find(|g| g.label == *author)
        .map(|g| {
            g.items()
                .iter()
                .copied()
                .filter(|&i| i != target)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentItem, Frontmatter};
    use crate::index::groups::{build_author_groups, build_tag_groups};
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

    fn seeded(size: usize) -> Sampler {
        Sampler::from_config(&RelatedConfig {
            size,
            sampling: SampleMode::Seeded,
            seed: 1,
        })
    }

    #[test]
    fn test_candidates_share_a_tag_and_exclude_self() {
        let items = vec![
            item("a", &["rust"], None),
            item("b", &["rust", "web"], None),
            item("c", &["web"], None),
            item("d", &["other"], None),
        ];
        let tags = build_tag_groups(&items, "/blog");

        assert_eq!(related_candidates(&items, &tags, 0), vec![1]);
        assert_eq!(related_candidates(&items, &tags, 1), vec![0, 2]);
        assert_eq!(related_candidates(&items, &tags, 3), Vec::<usize>::new());
    }

    #[test]
    fn test_no_tags_empty_candidates() {
        let items = vec![item("a", &[], None), item("b", &["rust"], None)];
        let tags = build_tag_groups(&items, "/blog");
        assert!(related_candidates(&items, &tags, 0).is_empty());
    }

    #[test]
    fn test_sample_bound_and_distinct() {
        let items: Vec<ContentItem> = (0..10)
            .map(|i| item(&format!("p{i}"), &["rust"], None))
            .collect();
        let tags = build_tag_groups(&items, "/blog");

        let mut sampler = seeded(3);
        let sample = sampler.sample(related_candidates(&items, &tags, 0));

        // min(3, 9 candidates) == 3, no repeats, never the target
        assert_eq!(sample.len(), 3);
        let mut unique = sample.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), 3);
        assert!(!sample.contains(&0));
    }

    #[test]
    fn test_sample_smaller_candidate_set() {
        let items = vec![
            item("a", &["rust"], None),
            item("b", &["rust"], None),
        ];
        let tags = build_tag_groups(&items, "/blog");

        let mut sampler = seeded(3);
        let sample = sampler.sample(related_candidates(&items, &tags, 0));
        assert_eq!(sample, vec![1]);
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let items: Vec<ContentItem> = (0..20)
            .map(|i| item(&format!("p{i}"), &["rust"], None))
            .collect();
        let tags = build_tag_groups(&items, "/blog");

        let run = |_: ()| {
            let mut sampler = seeded(3);
            (0..items.len())
                .map(|i| sampler.sample(related_candidates(&items, &tags, i)))
                .collect::<Vec<_>>()
        };

        assert_eq!(run(()), run(()));
    }

    #[test]
    fn test_author_candidates() {
        let items = vec![
            item("a", &[], Some("alice")),
            item("b", &[], Some("alice")),
            item("c", &[], Some("bob")),
            item("d", &[], None),
        ];
        let authors = build_author_groups(&items, "/blog");

        assert_eq!(author_candidates(&items, &authors, 0), vec![1]);
        assert_eq!(author_candidates(&items, &authors, 2), Vec::<usize>::new());
        assert_eq!(author_candidates(&items, &authors, 3), Vec::<usize>::new());
    }
}
