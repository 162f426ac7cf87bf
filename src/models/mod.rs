//! Data models for the UI.
//!
//! - [`Selection`] - the session-scoped "file open in the viewer" value

mod selection;

pub use selection::Selection;
