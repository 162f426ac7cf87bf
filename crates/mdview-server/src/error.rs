//! Service error kinds.
//!
//! Every failure surfaces to the client as a `{"error": message}`
//! envelope; the HTTP layer maps each kind to its status code.

use thiserror::Error;

/// Errors surfaced by the directory and content services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required request parameter was missing or empty.
    #[error("path is required")]
    BadRequest,
    /// The requested path does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Filesystem metadata or read failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
