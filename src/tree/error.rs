//! Root scan errors

use std::io;
use std::path::PathBuf;

/// Failure to scan the root path. Failures below the root never surface
/// here; they become error nodes in the tree.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("No such file or directory")]
    NotFound { path: PathBuf },

    #[error("Not a directory")]
    NotADirectory { path: PathBuf },

    #[error("{source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    pub(crate) fn from_io(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => ScanError::NotFound { path },
            io::ErrorKind::NotADirectory => ScanError::NotADirectory { path },
            _ => ScanError::Unreadable { path, source },
        }
    }

    /// The root path that could not be scanned.
    pub fn path(&self) -> &PathBuf {
        match self {
            ScanError::NotFound { path }
            | ScanError::NotADirectory { path }
            | ScanError::Unreadable { path, .. } => path,
        }
    }
}
