use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{PatchError, Result};

/// Read a file's contents as UTF-8 text
pub fn read_file_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    debug!("Reading file: {}", path.display());

    fs::read_to_string(path).map_err(|e| PatchError::read_error(e, path))
}

/// Overwrite a file with the given text
///
/// The parent directory must already exist.
pub fn write_file(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing {} bytes to file: {}", content.len(), path.display());

    fs::write(path, content).map_err(|e| PatchError::write_error(e, path))
}

/// Check if a file exists
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

/// Check if a directory exists
pub fn dir_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_operations() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.txt");

        write_file(&file_path, "Hello, world!").unwrap();
        assert!(file_exists(&file_path));
        assert!(!dir_exists(&file_path));

        let content = read_file_to_string(&file_path).unwrap();
        assert_eq!(content, "Hello, world!");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_file_to_string(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, PatchError::Read { .. }));
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("binary.txt");
        fs::write(&file_path, [0xffu8, 0xfe, 0x00, 0x80]).unwrap();

        let err = read_file_to_string(&file_path).unwrap_err();
        assert!(matches!(err, PatchError::Read { .. }));
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("nope").join("out.txt");

        let err = write_file(&file_path, "x").unwrap_err();
        assert!(matches!(err, PatchError::Write { .. }));
        assert!(!dir_exists(dir.path().join("nope")));
    }
}
