//! Pagination of ordered item lists.
//!
//! Splits a base list into bounded pages with navigation metadata and a
//! stable permalink scheme:
//!
//! | Page (0-indexed) | Permalink            |
//! |------------------|----------------------|
//! | 0                | `{base}`             |
//! | k > 0            | `{base}/page/{k+1}`  |
//!
//! Human-facing page numbers are 1-indexed while internal indexing stays
//! 0-indexed. The permalinks are an external URL contract and must not
//! change.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

// ============================================================================
// Page Size
// ============================================================================

/// Number of items per listing page.
///
/// Configured as an integer or the literal string `"ALL"`:
///
/// ```toml
/// [build]
/// posts_per_page = 10
/// # or
/// posts_per_page = "ALL"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    /// One page containing every item.
    All,
    /// At most this many items per page. Must be non-zero (validated at
    /// config load).
    Limit(usize),
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(usize),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Num(n) => Ok(Self::Limit(n)),
            Raw::Text(s) if s == "ALL" => Ok(Self::All),
            Raw::Text(s) => Err(de::Error::custom(format!(
                "invalid posts_per_page `{s}` (expected an integer or \"ALL\")"
            ))),
        }
    }
}

impl Serialize for PageSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_str("ALL"),
            Self::Limit(n) => serializer.serialize_u64(*n as u64),
        }
    }
}

// ============================================================================
// Pages
// ============================================================================

/// Navigation metadata for a single listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    /// Permalink of this page.
    pub permalink: String,
    /// 1-indexed page number (matches the URL contract).
    pub page_number: usize,
    /// Configured page size (actual item count may be smaller on the
    /// last page).
    pub items_per_page: usize,
    /// Total number of pages in this listing.
    pub total_pages: usize,
    /// Total number of items across all pages.
    pub total_count: usize,
    /// Permalink of the previous page; absent on the first page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page_permalink: Option<String>,
    /// Permalink of the next page; absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_permalink: Option<String>,
}

/// One page of a paginated base list.
///
/// Borrows its items from the base list; concatenating `items` across all
/// pages in order reproduces the base list exactly.
#[derive(Debug)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub metadata: PageMetadata,
}

/// Permalink for the page at `index` (0-indexed) under `base_path`.
pub fn page_permalink(base_path: &str, index: usize) -> String {
    if index == 0 {
        base_path.to_owned()
    } else {
        format!("{base_path}/page/{}", index + 1)
    }
}

/// Split `items` into pages under `base_path`.
///
/// - `PageSize::All` produces exactly one page with every item
/// - zero items produce zero pages, not a single empty page
pub fn paginate<'a, T>(items: &'a [T], base_path: &str, page_size: PageSize) -> Vec<Page<'a, T>> {
    if items.is_empty() {
        return Vec::new();
    }

    let per_page = match page_size {
        PageSize::All => items.len(),
        PageSize::Limit(n) => n.max(1),
    };
    let total_count = items.len();
    let total_pages = total_count.div_ceil(per_page);

    (0..total_pages)
        .map(|index| {
            let start = index * per_page;
            let end = (start + per_page).min(total_count);

            let previous_page_permalink =
                (index > 0).then(|| page_permalink(base_path, index - 1));
            let next_page_permalink =
                (index + 1 < total_pages).then(|| page_permalink(base_path, index + 1));

            Page {
                items: &items[start..end],
                metadata: PageMetadata {
                    permalink: page_permalink(base_path, index),
                    page_number: index + 1,
                    items_per_page: per_page,
                    total_pages,
                    total_count,
                    previous_page_permalink,
                    next_page_permalink,
                },
            }
        })
        .collect()
}
