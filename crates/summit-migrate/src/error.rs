//! Error types for the migrations
//!
//! Only fatal conditions are errors. Unrecognized editions, missing summit
//! documents and entries without frontmatter are skip-and-continue cases
//! that surface as diagnostics and report counters instead.

use std::path::{Path, PathBuf};

/// Fatal migration errors
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
    /// Filesystem operation failed
    #[error("io error on {path}: {source}")]
    Io {
        /// Path being read, written, moved or removed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed
    #[error("failed to walk {path}: {source}")]
    Walk {
        /// Root of the traversal
        path: PathBuf,
        /// Underlying error
        #[source]
        source: walkdir::Error,
    },

    /// Configuration file could not be read
    #[error("invalid configuration in {path}: {source}")]
    Config {
        /// Configuration file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },
}

impl MigrateError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create traversal error for root
    pub fn walk_error(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::Walk {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for migration operations
pub type MigrateResult<T> = Result<T, MigrateError>;

/// Attach a path to `std::io` results
pub(crate) trait IoContext<T> {
    fn at(self, path: &Path) -> MigrateResult<T>;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn at(self, path: &Path) -> MigrateResult<T> {
        self.map_err(|e| MigrateError::io_error(path, e))
    }
}
