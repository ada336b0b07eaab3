use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a patch run.
///
/// Missing directories, missing files and foreign platforms are not errors;
/// they are reported through [`crate::patcher::PatchOutcome`].
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("Error reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error writing {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid configuration {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl PatchError {
    /// Create a new read error with path context
    pub fn read_error(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Read {
            source: err,
            path: path.into(),
        }
    }

    /// Create a new write error with path context
    pub fn write_error(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Write {
            source: err,
            path: path.into(),
        }
    }

    /// Create a new configuration error
    pub fn config_error(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Path of the file the failure relates to
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } | Self::Config { path, .. } => path,
        }
    }
}

/// Result type alias for patch operations
pub type Result<T> = std::result::Result<T, PatchError>;
