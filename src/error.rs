//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! for each domain:
//!
//! - [`FetchError`] - network/fetch-related errors for HTTP requests
//! - [`DiagramError`] - diagram rendering through the page-global library

use std::fmt;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network request failed (timeout, CORS, etc.)
    NetworkError(String),
    /// HTTP error response (non-2xx status) with the server's message
    HttpError(u16, String),
    /// Failed to read response body
    ResponseReadFailed,
    /// Invalid response content (not text)
    InvalidContent,
    /// JSON parsing error
    JsonParseError(String),
    /// Request timed out
    Timeout,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::HttpError(status, msg) if msg.is_empty() => write!(f, "HTTP error: {}", status),
            Self::HttpError(status, msg) => write!(f, "HTTP {}: {}", status, msg),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::InvalidContent => write!(f, "Invalid response content"),
            Self::JsonParseError(msg) => write!(f, "JSON parse error: {}", msg),
            Self::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Diagram rendering errors.
#[derive(Debug, Clone)]
pub enum DiagramError {
    /// The diagram library is not loaded on the page
    Unavailable,
    /// The renderer rejected the diagram source
    RenderFailed(String),
    /// The renderer returned something other than SVG markup
    InvalidOutput,
}

impl fmt::Display for DiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "Diagram renderer not available"),
            Self::RenderFailed(msg) => write!(f, "Diagram render failed: {}", msg),
            Self::InvalidOutput => write!(f, "Diagram renderer returned invalid output"),
        }
    }
}

impl std::error::Error for DiagramError {}
