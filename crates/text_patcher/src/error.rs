// crates/text_patcher/src/error.rs

use std::io;
use std::path::{Path, PathBuf};

/// Failures of a single patch run. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    /// The marker is not a substring of an in-memory string.
    #[error("marker not found")]
    MarkerAbsent,

    /// The marker is not a substring of the target's current content.
    #[error("marker not found in {}", path.display())]
    MarkerNotFound { path: PathBuf },

    #[error("error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PatchError {
    /// True for the missing-marker precondition, false for I/O failures.
    pub fn is_precondition(&self) -> bool {
        matches!(self, PatchError::MarkerAbsent | PatchError::MarkerNotFound { .. })
    }

    /// The file the failed run was pointed at, if the error came from one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            PatchError::MarkerAbsent => None,
            PatchError::MarkerNotFound { path }
            | PatchError::Read { path, .. }
            | PatchError::Write { path, .. } => Some(path.as_path()),
        }
    }

    /// Attaches `path` to a [`PatchError::MarkerAbsent`]. Other errors
    /// already carry their path and are returned unchanged.
    pub(crate) fn in_file(self, path: &Path) -> Self {
        match self {
            PatchError::MarkerAbsent => PatchError::MarkerNotFound {
                path: path.to_path_buf(),
            },
            other => other,
        }
    }
}
