//! Loopback HTTP service backing the mdview web UI.
//!
//! - [`fs`] - directory listings and file content reads
//! - [`http`] - hyper service exposing `/api/files` and `/api/content`
//! - [`cli`] - command line configuration
//! - [`error`] - service error kinds and messages

pub mod cli;
pub mod error;
pub mod fs;
pub mod http;

pub use error::ServiceError;

/// Server version reported in logs.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
