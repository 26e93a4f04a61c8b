//! URL slug normalization.
//!
//! Converts tag labels, author names and path segments into URL-safe
//! permalink fragments.

use std::path::Path;

// ============================================================================
// Slugification
// ============================================================================

/// Normalize arbitrary text into a URL-safe slug.
///
/// Rules:
/// - ASCII letters and digits are kept, lowercased
/// - every run of other characters collapses to a single hyphen
/// - no leading or trailing hyphen
///
/// # Examples
///
/// | Input           | Output          |
/// |-----------------|-----------------|
/// | `"C++ Tips!"`   | `"c-tips"`      |
/// | `"Hello World"` | `"hello-world"` |
/// | `"--rust--"`    | `"rust"`        |
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Slugify each `/`-separated component of a relative content path.
///
/// Directory structure is preserved so that `posts/Hello World.md` and
/// `notes/Hello World.md` produce distinct slugs.
pub fn slugify_path(path: &Path) -> String {
    path.components()
        .map(|c| slugify(&c.as_os_str().to_string_lossy()))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Join a base path and a slug into a permalink.
///
/// Ensures exactly one `/` between segments and a leading `/`.
pub fn join_url(base: &str, rest: &str) -> String {
    let base = base.trim_end_matches('/');
    let rest = rest.trim_start_matches('/');

    match (base.is_empty(), rest.is_empty()) {
        (true, true) => "/".to_owned(),
        (true, false) => format!("/{rest}"),
        (false, true) => base.to_owned(),
        (false, false) => format!("{base}/{rest}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn test_slugify_collapses_symbol_runs() {
        // Non-alphanumeric runs collapse to a single hyphen
        assert_eq!(slugify("C++ Tips!"), "c-tips");
    }

    #[test]
    fn test_slugify_no_leading_or_trailing_hyphen() {
        assert_eq!(slugify("--rust--"), "rust");
        assert_eq!(slugify("  spaced out  "), "spaced-out");
    }

    #[test]
    fn test_slugify_preserves_digits() {
        assert_eq!(slugify("Top 10 Crates (2025)"), "top-10-crates-2025");
    }

    #[test]
    fn test_slugify_already_clean() {
        assert_eq!(slugify("hello-world"), "hello-world");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_slugify_only_symbols() {
        assert_eq!(slugify("+++!!!"), "");
    }

    #[test]
    fn test_slugify_path_components() {
        assert_eq!(
            slugify_path(Path::new("Posts/Hello World")),
            "posts/hello-world"
        );
    }

    #[test]
    fn test_slugify_path_single() {
        assert_eq!(slugify_path(Path::new("My Article")), "my-article");
    }

    #[test]
    fn test_slugify_path_drops_empty_components() {
        assert_eq!(slugify_path(Path::new("posts/!!!/hello")), "posts/hello");
    }

    #[test]
    fn test_join_url_plain() {
        assert_eq!(join_url("/blog", "hello"), "/blog/hello");
    }

    #[test]
    fn test_join_url_extra_slashes() {
        assert_eq!(join_url("/blog/", "/hello"), "/blog/hello");
    }

    #[test]
    fn test_join_url_empty_rest() {
        assert_eq!(join_url("/blog", ""), "/blog");
    }

    #[test]
    fn test_join_url_empty_base() {
        assert_eq!(join_url("", "hello"), "/hello");
        assert_eq!(join_url("", ""), "/");
    }
}
