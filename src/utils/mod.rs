//! Utility modules for the content pipeline.

pub mod log;
pub mod slug;
