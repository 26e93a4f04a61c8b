//! Build error taxonomy.
//!
//! All build errors are fatal: this is an offline batch process, so the
//! policy is fail the whole build and report. Nothing is retried and no
//! partial output is considered valid.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal build errors surfaced to the operator.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A content file could not be opened or decoded.
    #[error("failed to read content file `{path}`")]
    ContentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A frontmatter block was present but not parseable.
    ///
    /// Fail-fast is deliberate here: silently skipping the file would
    /// produce a partially-indexed content set with broken tag/author
    /// groups.
    #[error("malformed frontmatter in `{path}`")]
    MalformedFrontmatter {
        path: PathBuf,
        #[source]
        source: crate::content::FrontmatterError,
    },

    /// Two routes resolved to the same path.
    #[error("route collision on `{path}`: both `{first}` and `{second}` resolve to it")]
    RouteCollision {
        path: String,
        first: String,
        second: String,
    },

    /// A tag or author label normalized to an empty slug, which would
    /// emit a malformed listing route with a trailing slash.
    #[error("label `{label}` normalizes to an empty slug")]
    EmptySlug { label: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_content_read_message_names_file() {
        let err = BuildError::ContentRead {
            path: PathBuf::from("content/broken.md"),
            source: std::io::Error::other("permission denied"),
        };
        assert!(err.to_string().contains("content/broken.md"));
    }

    #[test]
    fn test_route_collision_names_both_sources() {
        let err = BuildError::RouteCollision {
            path: "/blog/hello".into(),
            first: "content/hello.md".into(),
            second: "content/posts/hello.md".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/blog/hello"));
        assert!(msg.contains("content/hello.md"));
        assert!(msg.contains("content/posts/hello.md"));
    }

    #[test]
    fn test_malformed_frontmatter_preserves_source() {
        use std::error::Error;

        let toml_err = toml::from_str::<toml::Table>("not = = valid").unwrap_err();
        let err = BuildError::MalformedFrontmatter {
            path: PathBuf::from("content/bad.md"),
            source: toml_err.into(),
        };
        assert!(err.source().is_some());
    }
}
