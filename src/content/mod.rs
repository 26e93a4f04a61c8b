//! Content loading: directory scan, frontmatter parsing, item snapshot.
//!
//! # Load Flow
//!
//! ```text
//! collect_content_files() ──► load_item() ──► Vec<ContentItem>
//!         │                       │                 │
//!         ▼                       ▼                 ▼
//!   recognized files      frontmatter + body   ordered snapshot
//! ```
//!
//! The snapshot is immutable once produced; the relationship indexer,
//! paginator and route emitter all read it without copying items.

pub mod frontmatter;
pub mod loader;

pub use frontmatter::{Frontmatter, FrontmatterError};
pub use loader::{ContentItem, collect_content_files, load_content};
