//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use crate::paginate::PageSize;
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn base_path() -> String {
        "/blog".into()
    }

    pub fn content() -> PathBuf {
        "content".into()
    }

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub fn posts_per_page() -> PageSize {
        PageSize::Limit(10)
    }

    pub mod related {
        use crate::config::SampleMode;

        pub fn size() -> usize {
            3
        }

        pub fn sampling() -> SampleMode {
            SampleMode::default()
        }

        pub fn seed() -> u64 {
            0
        }
    }
}
