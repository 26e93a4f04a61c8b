//! Site configuration management for `stanza.toml`.
//!
//! # Sections
//!
//! | Section          | Purpose                                        |
//! |------------------|------------------------------------------------|
//! | `[base]`         | Site metadata (title, description, url)        |
//! | `[build]`        | Paths, base path, pagination, clean            |
//! | `[build.related]`| Related-items sampling (size, mode, seed)      |
//! | `[extra]`        | User-defined custom fields                     |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "My Blog"
//! description = "A personal blog"
//! url = "https://example.com"
//!
//! [build]
//! content = "content"
//! output = "public"
//! base_path = "/blog"
//! posts_per_page = 10
//!
//! [extra]
//! analytics_id = "UA-12345"
//! ```

mod base;
mod build;
pub mod defaults;
mod error;

// Re-export public types used by other modules
pub use build::{RelatedConfig, SampleMode};

// Internal imports used in this module
use base::BaseConfig;
use build::BuildConfig;
use error::ConfigError;

use crate::cli::Cli;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    env, fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing stanza.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = normalize_path(path);
        Ok(config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf());
    }

    /// Directory the serialized data modules are written into.
    pub fn data_dir(&self) -> PathBuf {
        self.build.output.join("_data")
    }

    /// Path of the emitted route table.
    pub fn routes_path(&self) -> PathBuf {
        self.build.output.join("routes.json")
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());
        let root = normalize_path(&root);
        self.set_root(&root);

        // Apply CLI path overrides, then anchor everything at the root
        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());
        self.build.content = anchor(&root, &self.build.content);
        self.build.output = anchor(&root, &self.build.output);

        let args = cli.build_args();
        if args.clean {
            self.build.clean = true;
        }
        if let Some(url) = &args.base_url {
            self.base.url = Some(url.clone());
        }
        if let Some(seed) = args.seed {
            self.build.related.sampling = SampleMode::Seeded;
            self.build.related.seed = seed;
        }

        // Normalize the base path: leading slash, no trailing slash
        let trimmed = self.build.base_path.trim_matches('/');
        self.build.base_path = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        };
    }

    /// Validate configuration before building.
    pub fn validate(&self) -> Result<()> {
        if !self.build.content.is_dir() {
            bail!(ConfigError::Validation(format!(
                "content directory not found: {}",
                self.build.content.display()
            )));
        }

        if self.build.posts_per_page == crate::paginate::PageSize::Limit(0) {
            bail!(ConfigError::Validation(
                "posts_per_page must be at least 1 (or \"ALL\")".into()
            ));
        }

        if let Some(url) = &self.base.url
            && !url.starts_with("http")
        {
            bail!(ConfigError::Validation(format!(
                "base url must start with http(s): {url}"
            )));
        }

        Ok(())
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }
}

// ============================================================================
// Path helpers
// ============================================================================

/// Normalize a path to absolute form for reliable comparison.
fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Anchor a possibly-relative path at the project root.
fn anchor(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
