//! Frontmatter parsing.
//!
//! Content files may start with a TOML frontmatter block fenced by `+++`
//! lines:
//!
//! ```text
//! +++
//! title = "Hello"
//! tags = ["rust", "ssg"]
//! +++
//!
//! Body text...
//! ```
//!
//! The pipeline branches on a small set of recognized, typed fields;
//! every other key is preserved verbatim in `extra` so renderers still
//! see arbitrary metadata.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ways a present frontmatter block can fail to parse.
///
/// Both are fatal for the build, per the fail-fast policy.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("opening `+++` fence without a closing one")]
    Unterminated,

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

/// Frontmatter fence line.
const FENCE: &str = "+++";

/// Keys lifted out of the frontmatter table into typed fields.
const KNOWN_KEYS: &[&str] = &[
    "title",
    "id",
    "slug",
    "date",
    "description",
    "tags",
    "authors",
    "is_featured",
    "draft",
    "order",
];

// ============================================================================
// Frontmatter
// ============================================================================

/// Typed view of a content file's frontmatter plus passthrough fields.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Frontmatter {
    /// Display title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Explicit stable identifier; overrides the path-derived id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Explicit permalink slug; overrides the path-derived slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Publication date as ISO 8601 string (e.g., "2025-01-15").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Short description for listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Tags for grouping and related-items candidates.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Single author identifier (an item has at most one author).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<String>,

    /// Spliced into the root listing's first page when set.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_featured: bool,

    /// Drafts are excluded from every listing, grouping and route.
    #[serde(skip)]
    pub draft: bool,

    /// Explicit base-list position; items with an order come before
    /// items without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,

    /// Passthrough fields the pipeline never branches on.
    #[serde(flatten)]
    pub extra: toml::Table,
}

/// Recognized fields, deserialized from the raw table (extras ignored here
/// and collected separately).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct KnownFields {
    title: Option<String>,
    id: Option<String>,
    slug: Option<String>,
    date: Option<String>,
    description: Option<String>,
    tags: Vec<String>,
    authors: Option<String>,
    is_featured: bool,
    draft: bool,
    order: Option<i64>,
}

impl Frontmatter {
    /// Parse a frontmatter block (the text between the fences).
    pub fn parse(block: &str) -> Result<Self, toml::de::Error> {
        let mut table: toml::Table = toml::from_str(block)?;
        let known: KnownFields = toml::Value::Table(table.clone()).try_into()?;

        for key in KNOWN_KEYS {
            table.remove(*key);
        }

        Ok(Self {
            title: known.title,
            id: known.id,
            slug: known.slug,
            date: known.date,
            description: known.description,
            tags: known.tags,
            authors: known.authors,
            is_featured: known.is_featured,
            draft: known.draft,
            order: known.order,
            extra: table,
        })
    }
}

// ============================================================================
// Splitting
// ============================================================================

/// Result of splitting a raw content file.
#[derive(Debug)]
pub enum Split<'a> {
    /// No frontmatter fence; the whole file is body.
    BodyOnly(&'a str),
    /// Opening and closing fences found.
    WithFrontmatter { block: &'a str, body: &'a str },
    /// Opening fence without a closing one.
    Unterminated,
}

/// Split raw file content into a frontmatter block and body.
///
/// The opening fence must be the first line of the file. A file without
/// one is all body (empty frontmatter, not an error).
pub fn split(raw: &str) -> Split<'_> {
    let Some(rest) = strip_fence_line(raw) else {
        return Split::BodyOnly(raw);
    };

    // Find the closing fence at the start of a line
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            let block = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Split::WithFrontmatter { block, body };
        }
        offset += line.len();
    }

    Split::Unterminated
}

/// Strip a leading fence line, returning the remainder.
fn strip_fence_line(raw: &str) -> Option<&str> {
    let rest = raw.strip_prefix(FENCE)?;
    if let Some(rest) = rest.strip_prefix("\r\n") {
        return Some(rest);
    }
    rest.strip_prefix('\n')
}
