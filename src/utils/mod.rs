//! Utility modules for network, formatting, and JS interop.
//!
//! - [`fetch_listing`], [`fetch_document`] - API fetching with timeout
//! - [`format_size`] - display formatting for byte counts
//! - [`mermaid`] - diagram rendering through the page-global library

pub mod fetch;
pub mod format;
pub mod mermaid;

pub use fetch::{fetch_document, fetch_listing};
pub use format::format_size;
