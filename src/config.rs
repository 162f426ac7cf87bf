//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the explorer header.
pub const APP_NAME: &str = "mdview";

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL of the local directory/content service.
pub const API_BASE_URL: &str = "http://127.0.0.1:3001";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Rendering Configuration
// =============================================================================

/// Fenced-code language tag rendered as a diagram instead of code.
pub const DIAGRAM_DIALECT: &str = "mermaid";
