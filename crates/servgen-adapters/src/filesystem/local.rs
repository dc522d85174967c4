//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use servgen_core::{application::ports::Filesystem, error::ServgenResult};

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
    fn read_file(&self, path: &Path) -> ServgenResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ServgenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn create_dir_all(&self, path: &Path) -> ServgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> servgen_core::error::ServgenError {
    use servgen_core::application::ApplicationError;

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
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/file.txt");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(path.parent().unwrap()).unwrap();
        fs.write_file(&path, "hello").unwrap();

        assert!(fs.exists(&path));
        assert_eq!(fs.read_file(&path).unwrap(), "hello");
    }

    #[test]
    fn reading_missing_file_is_a_filesystem_error() {
        let fs = LocalFilesystem::new();
        let err = fs.read_file(Path::new("/nonexistent/servgen-test")).unwrap_err();
        assert!(err.to_string().contains("read file"));
    }
}
