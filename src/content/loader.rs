//! Content directory scanning and loading.
//!
//! Produces the immutable `ContentItem` snapshot every downstream stage
//! reads. Loading is fail-fast: a single unreadable or malformed file
//! aborts the whole load, because indexing assumes a complete set.

use crate::config::SiteConfig;
use crate::content::frontmatter::{self, Frontmatter, FrontmatterError, Split};
use crate::error::BuildError;
use crate::utils::slug::{join_url, slugify, slugify_path};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recognized content file extensions. Everything else is ignored, not
/// an error.
const CONTENT_EXTENSIONS: &[&str] = &["md", "mdx", "markdown"];

/// Files to ignore during directory traversal
const IGNORED_FILES: &[&str] = &[".DS_Store"];

// ============================================================================
// Content Item
// ============================================================================

/// A loaded content file.
///
/// Created once per build pass and immutable afterward; the whole set is
/// discarded and rebuilt on the next build.
#[derive(Debug, Clone)]
pub struct ContentItem {
    /// Stable unique identifier (explicit `id` field or the slug).
    pub id: String,
    /// URL-safe slug, unique across items (enforced at route emission).
    pub slug: String,
    /// Computed absolute URL path.
    pub permalink: String,
    /// Typed frontmatter view plus passthrough fields.
    pub frontmatter: Frontmatter,
    /// Raw body text, never mutated after load.
    pub body: String,
    /// Source file path.
    pub source: PathBuf,
    /// Source path relative to the content directory (for logging and
    /// deterministic ordering).
    pub relative: String,
}

impl ContentItem {
    /// Display title: the frontmatter title, falling back to the slug.
    pub fn title(&self) -> &str {
        self.frontmatter.title.as_deref().unwrap_or(&self.slug)
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Collect recognized content files from a directory, sorted by path.
///
/// Sorting here gives the loader a deterministic input order regardless
/// of filesystem iteration order.
pub fn collect_content_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| CONTENT_EXTENSIONS.contains(&ext))
        })
        .map(walkdir::DirEntry::into_path)
        .collect()
}

/// Load every content item under the configured content directory.
///
/// Drafts are dropped here so no downstream stage ever sees them.
/// The result is ordered by the explicit `order` frontmatter field when
/// present (ascending, items with an order first), then by relative
/// source path - deterministic across repeated runs on unchanged input.
pub fn load_content(config: &SiteConfig) -> Result<Vec<ContentItem>, BuildError> {
    let content_dir = &config.build.content;

    let mut items = Vec::new();
    for path in collect_content_files(content_dir) {
        if let Some(item) = load_item(&path, content_dir, &config.build.base_path)? {
            items.push(item);
        }
    }

    items.sort_by(compare_items);
    Ok(items)
}

// ============================================================================
// Internal
// ============================================================================

/// Load a single content file. Returns `None` for drafts.
fn load_item(
    path: &Path,
    content_dir: &Path,
    base_path: &str,
) -> Result<Option<ContentItem>, BuildError> {
    let raw = std::fs::read_to_string(path).map_err(|source| BuildError::ContentRead {
        path: path.to_path_buf(),
        source,
    })?;

    let (frontmatter, body) = match frontmatter::split(&raw) {
        Split::BodyOnly(body) => (Frontmatter::default(), body),
        Split::WithFrontmatter { block, body } => {
            let fm = Frontmatter::parse(block).map_err(|err| BuildError::MalformedFrontmatter {
                path: path.to_path_buf(),
                source: FrontmatterError::Toml(err),
            })?;
            (fm, body)
        }
        Split::Unterminated => {
            return Err(BuildError::MalformedFrontmatter {
                path: path.to_path_buf(),
                source: FrontmatterError::Unterminated,
            });
        }
    };

    if frontmatter.draft {
        return Ok(None);
    }

    let relative = path
        .strip_prefix(content_dir)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/");

    let slug = derive_slug(&frontmatter, &relative);
    let id = frontmatter.id.clone().unwrap_or_else(|| slug.clone());
    let permalink = join_url(base_path, &slug);

    Ok(Some(ContentItem {
        id,
        slug,
        permalink,
        frontmatter,
        body: body.to_owned(),
        source: path.to_path_buf(),
        relative,
    }))
}

/// Slug for an item: the explicit `slug` field when present, otherwise
/// derived from the relative source path without its extension. Either
/// way each `/`-separated component is normalized.
fn derive_slug(frontmatter: &Frontmatter, relative: &str) -> String {
    if let Some(explicit) = &frontmatter.slug {
        let slug = explicit
            .split('/')
            .map(slugify)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("/");
        if !slug.is_empty() {
            return slug;
        }
    }

    let stem = relative
        .rsplit_once('.')
        .map_or(relative, |(stem, _ext)| stem);
    slugify_path(Path::new(stem))
}

/// Base-list ordering: explicit `order` first (ascending), then relative
/// source path.
fn compare_items(a: &ContentItem, b: &ContentItem) -> Ordering {
    match (a.frontmatter.order, b.frontmatter.order) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.relative.cmp(&b.relative)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.relative.cmp(&b.relative),
    }
}
