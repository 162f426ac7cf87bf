//! Wire data model shared by the HTTP service and the web UI.
//!
//! Field names serialize in camelCase to match the HTTP surface
//! (`currentPath`, `isDirectory`).

use serde::{Deserialize, Serialize};

/// One filesystem object (file or directory) as reported by a listing.
///
/// Immutable once produced; no two entries in the same listing share a
/// `path`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntry {
    /// Entry name without any path components.
    pub name: String,
    /// Whether the entry is a directory.
    pub is_directory: bool,
    /// Absolute path of the entry.
    pub path: String,
    /// File size in bytes (always 0 for directories).
    pub size: u64,
}

/// Immediate children of a directory.
///
/// Items are sorted directories-first, each group in case-insensitive
/// name order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryListing {
    /// The directory that was listed.
    pub current_path: String,
    /// Its immediate children.
    pub items: Vec<DirectoryEntry>,
}

/// Full text of a file returned by the content endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContent {
    pub content: String,
}

/// JSON error envelope used by every non-2xx response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// How the viewer renders a selected file.
///
/// Resolved once from the file extension at selection time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileType {
    /// Rendered markdown with diagram support.
    Markdown,
    /// Raw text in a monospace block.
    PlainText,
    /// No preview; likely binary.
    Unsupported,
}

impl FileType {
    /// Detect the viewer type from a path extension.
    pub fn from_path(path: &str) -> Self {
        match path.rsplit('.').next().map(|s| s.to_lowercase()).as_deref() {
            Some("md" | "markdown") => Self::Markdown,
            Some(
                "txt" | "text" | "log" | "rs" | "py" | "js" | "ts" | "jsx" | "json" | "yaml"
                | "yml" | "toml" | "html" | "css" | "sh" | "csv" | "xml",
            ) => Self::PlainText,
            _ => Self::Unsupported,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_detection() {
        assert_eq!(FileType::from_path("/docs/readme.md"), FileType::Markdown);
        assert_eq!(FileType::from_path("/docs/readme.MD"), FileType::Markdown);
        assert_eq!(FileType::from_path("notes.markdown"), FileType::Markdown);
        assert_eq!(FileType::from_path("/src/main.rs"), FileType::PlainText);
        assert_eq!(FileType::from_path("config.yaml"), FileType::PlainText);
        assert_eq!(FileType::from_path("photo.png"), FileType::Unsupported);
        assert_eq!(FileType::from_path("archive.tar.gz"), FileType::Unsupported);
        assert_eq!(FileType::from_path("Makefile"), FileType::Unsupported);
    }

    #[test]
    fn test_entry_wire_format() {
        let entry = DirectoryEntry {
            name: "sub".to_string(),
            is_directory: true,
            path: "/a/sub".to_string(),
            size: 0,
        };

        let json = serde_json::to_value(&entry).expect("serialize entry");
        assert_eq!(json["name"], "sub");
        assert_eq!(json["isDirectory"], true);
        assert_eq!(json["path"], "/a/sub");
        assert_eq!(json["size"], 0);
    }

    #[test]
    fn test_listing_wire_format() {
        let listing = DirectoryListing {
            current_path: "/a".to_string(),
            items: Vec::new(),
        };

        let json = serde_json::to_value(&listing).expect("serialize listing");
        assert_eq!(json["currentPath"], "/a");
        assert!(json["items"].as_array().expect("items array").is_empty());
    }

    #[test]
    fn test_listing_round_trip() {
        let raw = r#"{"currentPath":"/a","items":[{"name":"note.md","isDirectory":false,"path":"/a/note.md","size":4}]}"#;
        let listing: DirectoryListing = serde_json::from_str(raw).expect("deserialize listing");
        assert_eq!(listing.current_path, "/a");
        assert_eq!(listing.items[0].name, "note.md");
        assert_eq!(listing.items[0].size, 4);
        assert!(!listing.items[0].is_directory);
    }
}
