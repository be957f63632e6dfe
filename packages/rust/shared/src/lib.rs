//! Shared error model and documentation configuration for the A1 API docs tooling.
//!
//! This crate is the foundation depended on by the other a1docs crates.
//! It provides:
//! - [`A1DocsError`] — the unified error type
//! - Documentation build configuration ([`DocsConfig`], [`IntersphinxTarget`], loading)

pub mod config;
pub mod error;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    BRANCH, DEFAULT_BASE_CONFIG, DocsConfig, IntersphinxMapping, IntersphinxTarget, ONAP_BRANCH,
    RenderFormat, load_base_config, load_docs_config,
};
pub use error::{A1DocsError, Result};
