//! `[build]` section configuration.
//!
//! Contains build settings: paths, pagination, related-items sampling.

use super::defaults;
use crate::paginate::PageSize;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Enums
// ============================================================================

/// Related-items sampling mode.
///
/// An unseeded sample surfaces different related posts on every build;
/// a seeded one keeps the output stable across rebuilds of unchanged
/// content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleMode {
    /// Unseeded random sample; builds are not reproducible (default).
    #[default]
    Random,
    /// Seeded sample using `[build.related].seed`; identical input
    /// produces identical output.
    Seeded,
}

// ============================================================================
// Main BuildConfig
// ============================================================================

/// `[build]` section in stanza.toml - pipeline configuration.
///
/// # Example
/// ```toml
/// [build]
/// content = "content"      # Source directory
/// output = "public"        # Output directory
/// base_path = "/blog"      # URL prefix for every generated route
/// posts_per_page = 10      # or "ALL"
///
/// [build.related]
/// size = 3
/// sampling = "seeded"
/// seed = 42
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// URL path every generated route lives under (e.g., "/blog").
    #[serde(default = "defaults::build::base_path")]
    #[educe(Default = defaults::build::base_path())]
    pub base_path: String,

    /// Content source directory (markdown/MDX files).
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Build output directory for the route table and data modules.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Items per listing page, or "ALL" for a single page.
    #[serde(default = "defaults::build::posts_per_page")]
    #[educe(Default = defaults::build::posts_per_page())]
    pub posts_per_page: PageSize,

    /// Clear output directory before each build.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clean: bool,

    /// Related-items sampling settings.
    #[serde(default)]
    pub related: RelatedConfig,
}

// ============================================================================
// Sub-configurations
// ============================================================================

/// `[build.related]` section - bounded random sampling of related items.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct RelatedConfig {
    /// Maximum sample size. The actual sample is `min(size, candidates)`.
    #[serde(default = "defaults::build::related::size")]
    #[educe(Default = defaults::build::related::size())]
    pub size: usize,

    /// Sampling mode: "random" or "seeded".
    #[serde(default = "defaults::build::related::sampling")]
    #[educe(Default = defaults::build::related::sampling())]
    pub sampling: SampleMode,

    /// RNG seed used when `sampling = "seeded"`.
    #[serde(default = "defaults::build::related::seed")]
    #[educe(Default = defaults::build::related::seed())]
    pub seed: u64,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_build_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.build.base_path, "/blog");
        assert_eq!(config.build.content, PathBuf::from("content"));
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.build.posts_per_page, PageSize::Limit(10));
        assert!(!config.build.clean);
        assert_eq!(config.build.related.size, 3);
        assert_eq!(config.build.related.sampling, SampleMode::Random);
    }

    #[test]
    fn test_build_config_full() {
        let config = r#"
            [build]
            base_path = "/notes"
            content = "posts"
            output = "dist"
            posts_per_page = 5
            clean = true

            [build.related]
            size = 4
            sampling = "seeded"
            seed = 42
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.base_path, "/notes");
        assert_eq!(config.build.content, PathBuf::from("posts"));
        assert_eq!(config.build.posts_per_page, PageSize::Limit(5));
        assert!(config.build.clean);
        assert_eq!(config.build.related.size, 4);
        assert_eq!(config.build.related.sampling, SampleMode::Seeded);
        assert_eq!(config.build.related.seed, 42);
    }

    #[test]
    fn test_posts_per_page_all() {
        let config = r#"
            [build]
            posts_per_page = "ALL"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();
        assert_eq!(config.build.posts_per_page, PageSize::All);
    }

    #[test]
    fn test_sample_mode_rejects_unknown() {
        let config = r#"
            [build.related]
            sampling = "sometimes"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }

    #[test]
    fn test_build_config_unknown_field_rejection() {
        let config = r#"
            [build]
            not_a_field = true
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }
}
