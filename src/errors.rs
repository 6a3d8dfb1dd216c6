use std::path::{Path, PathBuf};

/// All error types that can occur when working with Hue snapshots.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to deserialize JSON data.
    #[error("failed to load json: {0:?}")]
    JsonLoad(serde_json::Error),

    /// A snapshot file could not be read.
    #[error("failed to read snapshot file {path:?}: {err:?}")]
    SnapshotRead { path: PathBuf, err: std::io::Error },

    /// A chromaticity point with `y = 0` has no defined luminance and
    /// cannot be converted.
    #[error("invalid color input: chromaticity y must be positive")]
    ZeroChromaticityY,
}

impl Error {
    /// Create a new snapshot read error
    pub fn snapshot_read(path: &Path, err: std::io::Error) -> Self {
        Error::SnapshotRead {
            path: path.to_path_buf(),
            err,
        }
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
