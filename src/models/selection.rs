//! Session-scoped selection state.

use mdview_core::types::{DirectoryEntry, FileType};

/// The file currently open in the viewer.
///
/// One selection exists per session. It lives in the app context and is
/// passed down explicitly; tree nodes never share it with each other.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    /// Absolute path of the selected file.
    pub path: String,
    /// Display name (last path component).
    pub name: String,
    /// File size in bytes, as reported by the listing.
    pub size: u64,
    /// Viewer type, resolved once when the selection is made.
    pub file_type: FileType,
}

impl Selection {
    /// Build a selection from a listing entry, resolving the file type.
    pub fn from_entry(entry: &DirectoryEntry) -> Self {
        Self {
            path: entry.path.clone(),
            name: entry.name.clone(),
            size: entry.size,
            file_type: FileType::from_path(&entry.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_resolves_file_type() {
        let entry = DirectoryEntry {
            name: "note.md".to_string(),
            is_directory: false,
            path: "/a/note.md".to_string(),
            size: 4,
        };

        let selection = Selection::from_entry(&entry);
        assert_eq!(selection.file_type, FileType::Markdown);
        assert_eq!(selection.name, "note.md");
        assert_eq!(selection.size, 4);
    }
}
