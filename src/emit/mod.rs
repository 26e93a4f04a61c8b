//! Route emission.
//!
//! Turns the item snapshot and relationship index into an explicit route
//! table plus a content-addressed payload store. No global registry: the
//! emitter is a pure function over its inputs and the caller decides
//! what to do with the result.
//!
//! # Emitted views
//!
//! | View              | Path                                      |
//! |-------------------|-------------------------------------------|
//! | `post`            | `{base}/{slug}`                           |
//! | `listing`         | `{base}`, `{base}/page/{k}`               |
//! | `tag-index`       | `{base}/tags`                             |
//! | `tag-listing`     | `{base}/tags/{tag}` (+ `/page/{k}`)       |
//! | `author-listing`  | `{base}/author/{author}` (+ `/page/{k}`)  |
//!
//! Route paths are globally unique; a collision is a build-fatal error
//! naming both conflicting sources.

pub mod data;
pub mod payload;

pub use data::{DataRef, DataStore};

use crate::config::SiteConfig;
use crate::content::ContentItem;
use crate::error::BuildError;
use crate::index::SiteIndex;
use crate::index::groups::Group;
use crate::paginate::paginate;
use crate::utils::slug::{join_url, slugify};
use anyhow::Result;
use payload::{
    GroupListingPayload, ItemPayload, ItemRef, ListingPayload, TagIndexEntry, TagIndexPayload,
};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

// ============================================================================
// View names
// ============================================================================

pub const VIEW_POST: &str = "post";
pub const VIEW_LISTING: &str = "listing";
pub const VIEW_TAG_INDEX: &str = "tag-index";
pub const VIEW_TAG_LISTING: &str = "tag-listing";
pub const VIEW_AUTHOR_LISTING: &str = "author-listing";

// ============================================================================
// Routes
// ============================================================================

/// One entry of the generated route table.
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    /// Unique URL path.
    pub path: String,
    /// Rendering template this route is consumed by.
    pub view: &'static str,
    /// Named references to serialized payloads (lazy-loadable, never
    /// inline data).
    pub data_refs: BTreeMap<String, DataRef>,
}

/// Route accumulator enforcing global path uniqueness.
#[derive(Debug, Default)]
struct RouteSet {
    routes: Vec<Route>,
    /// path → human-readable source identifier, for collision reports
    sources: FxHashMap<String, String>,
}

impl RouteSet {
    fn push(&mut self, route: Route, source: String) -> Result<(), BuildError> {
        if let Some(first) = self.sources.get(&route.path) {
            return Err(BuildError::RouteCollision {
                path: route.path,
                first: first.clone(),
                second: source,
            });
        }
        self.sources.insert(route.path.clone(), source);
        self.routes.push(route);
        Ok(())
    }
}

/// Result of route emission: the table plus the payload store backing it.
#[derive(Debug)]
pub struct Emitted {
    pub routes: Vec<Route>,
    pub store: DataStore,
}

// ============================================================================
// Listing order
// ============================================================================

/// Item indices in listing order: newest date first, undated items after
/// dated ones, ties broken by title.
///
/// The loader's base order stays canonical for pagination coverage; this
/// is the presentation order listings paginate over.
pub fn listing_order(items: &[ContentItem]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| compare_by_date(&items[a], &items[b]));
    order
}

/// Newest first; items with dates come before items without.
fn compare_by_date(a: &ContentItem, b: &ContentItem) -> Ordering {
    match (&a.frontmatter.date, &b.frontmatter.date) {
        (Some(da), Some(db)) => db.cmp(da).then_with(|| a.title().cmp(b.title())),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.title().cmp(b.title()),
    }
}

// ============================================================================
// Emission
// ============================================================================

/// Emit the full route table and payload store for one build pass.
pub fn emit_routes(
    items: &[ContentItem],
    index: &SiteIndex,
    config: &SiteConfig,
) -> Result<Emitted> {
    let base_path = &config.build.base_path;
    let page_size = config.build.posts_per_page;

    let mut routes = RouteSet::default();
    let mut store = DataStore::new();

    let order = listing_order(items);
    let rank: FxHashMap<usize, usize> =
        order.iter().enumerate().map(|(pos, &i)| (i, pos)).collect();

    // ------------------------------------------------------------------
    // Per-item pages
    // ------------------------------------------------------------------
    for (i, item) in items.iter().enumerate() {
        let payload = ItemPayload {
            id: &item.id,
            title: item.title(),
            permalink: &item.permalink,
            frontmatter: &item.frontmatter,
            related: refs(items, &index.related[i]),
            by_author: refs(items, &index.by_author[i]),
            source: &item.relative,
        };
        let data_ref = store.insert(&item.relative, "item", &payload)?;

        routes.push(
            Route {
                path: item.permalink.clone(),
                view: VIEW_POST,
                data_refs: BTreeMap::from([("item".to_owned(), data_ref)]),
            },
            item.relative.clone(),
        )?;
    }

    // ------------------------------------------------------------------
    // Root listing
    // ------------------------------------------------------------------
    let featured: Vec<usize> = order
        .iter()
        .copied()
        .filter(|&i| items[i].frontmatter.is_featured)
        .collect();

    for (k, page) in paginate(&order, base_path, page_size).iter().enumerate() {
        let mut page_items = refs(items, page.items);

        // Featured items are spliced into the rendered first page only;
        // totalCount/totalPages stay untouched
        if k == 0 {
            for &i in &featured {
                if !page.items.contains(&i) {
                    page_items.push(ItemRef::of(&items[i]));
                }
            }
        }

        let payload = ListingPayload {
            title: config.base.title.clone(),
            description: config.base.description.clone(),
            metadata: page.metadata.clone(),
            items: page_items,
        };
        let data_ref = store.insert(&page.metadata.permalink, "listing", &payload)?;

        routes.push(
            Route {
                path: page.metadata.permalink.clone(),
                view: VIEW_LISTING,
                data_refs: BTreeMap::from([("listing".to_owned(), data_ref)]),
            },
            format!("root listing page {}", k + 1),
        )?;
    }

    // ------------------------------------------------------------------
    // Tag index
    // ------------------------------------------------------------------
    let tags_path = join_url(base_path, "tags");
    let payload = TagIndexPayload {
        tags: index
            .tags
            .iter()
            .map(|g| TagIndexEntry {
                label: g.label.clone(),
                permalink: g.permalink.clone(),
                count: g.count(),
            })
            .collect(),
    };
    let data_ref = store.insert(&tags_path, "tag-index", &payload)?;
    routes.push(
        Route {
            path: tags_path,
            view: VIEW_TAG_INDEX,
            data_refs: BTreeMap::from([("tags".to_owned(), data_ref)]),
        },
        "tag index".to_owned(),
    )?;

    // ------------------------------------------------------------------
    // Tag and author listings
    // ------------------------------------------------------------------
    // A label with no slug-safe characters would emit a trailing-slash
    // route like `{base}/tags/`
    for group in index.tags.iter().chain(index.authors.iter()) {
        if slugify(&group.label).is_empty() {
            return Err(BuildError::EmptySlug {
                label: group.label.clone(),
            }
            .into());
        }
    }

    for group in &index.tags {
        emit_group_listing(
            items, group, &rank, page_size, VIEW_TAG_LISTING, "tag", &mut routes, &mut store,
        )?;
    }
    for group in &index.authors {
        emit_group_listing(
            items, group, &rank, page_size, VIEW_AUTHOR_LISTING, "author", &mut routes, &mut store,
        )?;
    }

    Ok(Emitted {
        routes: routes.routes,
        store,
    })
}

// ============================================================================
// Internal
// ============================================================================

/// Emit the paginated listing routes for one tag or author group.
#[allow(clippy::too_many_arguments)]
fn emit_group_listing(
    items: &[ContentItem],
    group: &Group,
    rank: &FxHashMap<usize, usize>,
    page_size: crate::paginate::PageSize,
    view: &'static str,
    kind: &str,
    routes: &mut RouteSet,
    store: &mut DataStore,
) -> Result<()> {
    // Group members in listing order
    let mut member_order: Vec<usize> = group.items().to_vec();
    member_order.sort_by_key(|i| rank[i]);

    for (k, page) in paginate(&member_order, &group.permalink, page_size)
        .iter()
        .enumerate()
    {
        let payload = GroupListingPayload {
            label: group.label.clone(),
            permalink: group.permalink.clone(),
            count: group.count(),
            metadata: page.metadata.clone(),
            items: refs(items, page.items),
        };
        let data_ref = store.insert(&page.metadata.permalink, "group-listing", &payload)?;

        routes.push(
            Route {
                path: page.metadata.permalink.clone(),
                view,
                data_refs: BTreeMap::from([("listing".to_owned(), data_ref)]),
            },
            format!("{kind} `{}` page {}", group.label, k + 1),
        )?;
    }

    Ok(())
}

fn refs(items: &[ContentItem], indices: &[usize]) -> Vec<ItemRef> {
    indices.iter().map(|&i| ItemRef::of(&items[i])).collect()
}
