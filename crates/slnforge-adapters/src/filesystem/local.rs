//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use slnforge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{SlnforgeError, SlnforgeResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> SlnforgeResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> SlnforgeResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_to_string(&self, path: &Path) -> SlnforgeResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn remove_file(&self, path: &Path) -> SlnforgeResult<()> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            // Placeholder removal is idempotent; the file may never have existed.
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(map_io_error(path, e, "remove file")),
        }
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> SlnforgeError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("notes/readme.txt");

        fs.create_dir_all(path.parent().unwrap()).unwrap();
        fs.write_file(&path, "hello").unwrap();
        assert_eq!(fs.read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn removing_a_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        assert!(fs.remove_file(&dir.path().join("never-created.cs")).is_ok());
    }

    #[test]
    fn removing_an_existing_file_deletes_it() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("Class1.cs");

        fs.write_file(&path, "class Class1 {}").unwrap();
        fs.remove_file(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn read_failure_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let missing = dir.path().join("missing.json");

        let err = fs.read_to_string(&missing).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}
