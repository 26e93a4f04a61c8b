//! `[base]` section configuration.
//!
//! Contains basic site information like title, description and url.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in stanza.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "My Blog"
/// description = "A personal blog about Rust"
/// url = "https://myblog.com"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title, carried into listing payloads for rendering.
    pub title: String,

    /// Site description, carried into listing payloads for rendering.
    #[serde(default)]
    pub description: String,

    /// Base URL for absolute links. Optional; permalinks in the route
    /// table are root-relative either way.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,
}
