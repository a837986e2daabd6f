use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// All possible errors in the to-do list
#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Invalid task position {position} (list has {len} task(s))")]
    InvalidPosition { position: usize, len: usize },

    #[error("Malformed record #{index}: missing \"title\"")]
    MalformedRecord { index: usize },

    #[error("IO error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Corrupt task file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl TaskError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        TaskError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn parse(path: &Path, source: serde_json::Error) -> Self {
        TaskError::Parse {
            path: path.to_path_buf(),
            source,
        }
    }

    /// True for read/write/decode failures of the backing file
    pub fn is_io_failure(&self) -> bool {
        matches!(self, TaskError::Io { .. } | TaskError::Parse { .. })
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TaskError>;
