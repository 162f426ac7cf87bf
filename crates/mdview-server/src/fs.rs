//! Directory listings and file content reads.
//!
//! Paths are used verbatim; there is no confinement to a root
//! directory. Symlinks get whatever `std::fs::metadata` does natively.

use std::fs;
use std::path::Path;

use mdview_core::types::{DirectoryEntry, DirectoryListing, FileContent};
use tracing::debug;

use crate::error::ServiceError;

/// List the immediate children of `path`.
///
/// Entries sort directories-first, each group in case-insensitive name
/// order. A metadata failure for any child fails the whole call, so a
/// listing is never partial.
pub fn list_directory(path: &str) -> Result<DirectoryListing, ServiceError> {
    let dir = Path::new(path);
    if !dir.exists() {
        return Err(ServiceError::NotFound("directory"));
    }

    let mut items = Vec::new();
    for child in fs::read_dir(dir)? {
        let child = child?;
        let child_path = child.path();
        let metadata = fs::metadata(&child_path)?;
        let is_directory = metadata.is_dir();

        items.push(DirectoryEntry {
            name: child.file_name().to_string_lossy().into_owned(),
            is_directory,
            path: child_path.to_string_lossy().into_owned(),
            size: if is_directory { 0 } else { metadata.len() },
        });
    }

    items.sort_by(|a, b| {
        b.is_directory
            .cmp(&a.is_directory)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });

    debug!(path, entries = items.len(), "listed directory");

    Ok(DirectoryListing {
        current_path: path.to_string(),
        items,
    })
}

/// Read a file fully into memory as UTF-8 text.
///
/// Binary files fail the UTF-8 decode and surface as an I/O error;
/// no size limit is enforced.
pub fn read_content(path: &str) -> Result<FileContent, ServiceError> {
    if path.is_empty() {
        return Err(ServiceError::BadRequest);
    }
    if !Path::new(path).exists() {
        return Err(ServiceError::NotFound("file"));
    }

    let content = fs::read_to_string(path)?;
    debug!(path, bytes = content.len(), "read file");

    Ok(FileContent { content })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{File, create_dir};
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(dir: &Path, name: &str, contents: &str) {
        let mut file = File::create(dir.join(name)).expect("create file");
        file.write_all(contents.as_bytes()).expect("write file");
    }

    #[test]
    fn directories_sort_before_files() {
        let dir = tempdir().expect("tempdir");
        write_file(dir.path(), "aaa.txt", "x");
        create_dir(dir.path().join("zzz")).expect("create dir");

        let listing = list_directory(&dir.path().to_string_lossy()).expect("list");
        assert_eq!(listing.items[0].name, "zzz");
        assert!(listing.items[0].is_directory);
        assert_eq!(listing.items[1].name, "aaa.txt");
        assert!(!listing.items[1].is_directory);
    }

    #[test]
    fn names_sort_case_insensitively() {
        let dir = tempdir().expect("tempdir");
        write_file(dir.path(), "Beta.txt", "");
        write_file(dir.path(), "alpha.txt", "");
        write_file(dir.path(), "gamma.txt", "");

        let listing = list_directory(&dir.path().to_string_lossy()).expect("list");
        let names: Vec<_> = listing.items.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["alpha.txt", "Beta.txt", "gamma.txt"]);
    }

    #[test]
    fn directory_sizes_are_zero() {
        let dir = tempdir().expect("tempdir");
        create_dir(dir.path().join("sub")).expect("create dir");
        write_file(dir.path(), "data.txt", "12345");

        let listing = list_directory(&dir.path().to_string_lossy()).expect("list");
        assert_eq!(listing.items[0].size, 0);
        assert_eq!(listing.items[1].size, 5);
    }

    #[test]
    fn listing_scenario_sub_and_note() {
        let dir = tempdir().expect("tempdir");
        create_dir(dir.path().join("sub")).expect("create dir");
        write_file(dir.path(), "note.md", "# Hi");

        let path = dir.path().to_string_lossy();
        let listing = list_directory(&path).expect("list");

        assert_eq!(listing.current_path, path);
        assert_eq!(listing.items.len(), 2);
        assert_eq!(listing.items[0].name, "sub");
        assert!(listing.items[0].is_directory);
        assert_eq!(listing.items[0].size, 0);
        assert_eq!(listing.items[1].name, "note.md");
        assert!(!listing.items[1].is_directory);
        assert_eq!(listing.items[1].size, 4);
    }

    #[test]
    fn entry_paths_are_absolute_and_unique() {
        let dir = tempdir().expect("tempdir");
        write_file(dir.path(), "a.txt", "");
        write_file(dir.path(), "b.txt", "");

        let listing = list_directory(&dir.path().to_string_lossy()).expect("list");
        assert!(
            listing
                .items
                .iter()
                .all(|e| Path::new(&e.path).is_absolute())
        );
        assert_ne!(listing.items[0].path, listing.items[1].path);
    }

    #[test]
    fn listing_missing_path_is_not_found() {
        let err = list_directory("/definitely/not/a/real/path").unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn listing_a_file_is_an_io_error() {
        let dir = tempdir().expect("tempdir");
        write_file(dir.path(), "plain.txt", "x");

        let err = list_directory(&dir.path().join("plain.txt").to_string_lossy()).unwrap_err();
        assert!(matches!(err, ServiceError::Io(_)));
    }

    #[test]
    fn read_content_round_trips() {
        let dir = tempdir().expect("tempdir");
        write_file(dir.path(), "note.md", "# Hi");

        let content = read_content(&dir.path().join("note.md").to_string_lossy()).expect("read");
        assert_eq!(content.content, "# Hi");
    }

    #[test]
    fn empty_content_path_is_bad_request() {
        let err = read_content("").unwrap_err();
        assert!(matches!(err, ServiceError::BadRequest));
    }

    #[test]
    fn missing_content_path_is_not_found() {
        let err = read_content("/definitely/not/a/real/file.md").unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn binary_content_is_an_io_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("blob.bin");
        let mut file = File::create(&path).expect("create file");
        file.write_all(&[0xff, 0xfe, 0x00, 0x80]).expect("write file");

        let err = read_content(&path.to_string_lossy()).unwrap_err();
        assert!(matches!(err, ServiceError::Io(_)));
    }
}
