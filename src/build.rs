//! Build orchestration.
//!
//! Coordinates the four pipeline stages and all filesystem output.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── load_content()  ──► scan + parse content files
//!     │
//!     ├── build_index()   ──► tag/author groups, related samples
//!     │
//!     ├── emit_routes()   ──► route table + content-addressed payloads
//!     │
//!     └── write output    ──► {output}/_data/*.json + {output}/routes.json
//! ```
//!
//! Every stage is fail-fast: the first content or route error aborts the
//! build with no partial output beyond what was already on disk.

use crate::config::SiteConfig;
use crate::content::load_content;
use crate::emit::emit_routes;
use crate::index::build_index;
use crate::log;
use crate::utils::log::Progress;
use anyhow::{Context, Result};
use std::fs;
use std::time::Instant;

/// Counters reported after a successful build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub items: usize,
    pub routes: usize,
    pub data_files: usize,
}

/// Build the entire site.
///
/// If `config.build.clean` is true, clears the output directory first.
pub fn build_site(config: &SiteConfig) -> Result<BuildSummary> {
    let start = Instant::now();
    let output = &config.build.output;

    // ========================================================================
    // Load content
    // ========================================================================
    let items = load_content(config)?;
    log!("load"; "found {} items in {}", items.len(), config.build.content.display());

    // ========================================================================
    // Index relationships
    // ========================================================================
    let index = build_index(&items, config);
    log!("index"; "{} tags, {} authors", index.tags.len(), index.authors.len());

    // ========================================================================
    // Emit routes
    // ========================================================================
    let emitted = emit_routes(&items, &index, config)?;
    log!("emit"; "{} routes, {} data modules", emitted.routes.len(), emitted.store.len());

    // ========================================================================
    // Write output
    // ========================================================================
    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("failed to clean output directory {}", output.display()))?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("failed to create output directory {}", output.display()))?;

    let progress = Progress::new("write", emitted.store.len());
    emitted.store.write_all(&config.data_dir(), || progress.inc())?;
    progress.finish();

    let routes_path = config.routes_path();
    let json = serde_json::to_string_pretty(&emitted.routes)
        .context("failed to serialize route table")?;
    fs::write(&routes_path, json)
        .with_context(|| format!("failed to write {}", routes_path.display()))?;

    log!("done"; "built {} routes in {:.2?}", emitted.routes.len(), start.elapsed());

    Ok(BuildSummary {
        items: items.len(),
        routes: emitted.routes.len(),
        data_files: emitted.store.len(),
    })
}
