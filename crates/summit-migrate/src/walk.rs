//! Content file discovery
//!
//! Finds files with one extension at exactly one depth below a root, in
//! file-name order so every run visits the tree the same way. Hidden files
//! and directories are skipped.

use crate::error::{MigrateError, MigrateResult};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walker for content files at a fixed depth
#[derive(Debug, Clone)]
pub struct ContentWalker {
    root: PathBuf,
    depth: usize,
    extension: String,
}

impl ContentWalker {
    /// Files directly inside `root`
    #[must_use]
    pub fn flat(root: impl AsRef<Path>, extension: impl Into<String>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            depth: 1,
            extension: extension.into(),
        }
    }

    /// Files one subdirectory below `root`
    #[must_use]
    pub fn nested(root: impl AsRef<Path>, extension: impl Into<String>) -> Self {
        Self {
            depth: 2,
            ..Self::flat(root, extension)
        }
    }

    /// Matching files, sorted; empty if the root does not exist
    ///
    /// # Errors
    /// [`MigrateError::Walk`] on any traversal error below an existing root.
    pub fn files(&self) -> MigrateResult<Vec<PathBuf>> {
        if !self.root.is_dir() {
            tracing::warn!("{} does not exist", self.root.display());
            return Ok(Vec::new());
        }

        // No min_depth: walkdir skips the entry filter below it.
        let walker = WalkDir::new(&self.root)
            .max_depth(self.depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()));

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| MigrateError::walk_error(&self.root, e))?;
            if entry.depth() == self.depth
                && entry.file_type().is_file()
                && has_extension(entry.path(), &self.extension)
            {
                files.push(entry.into_path());
            }
        }
        tracing::debug!(
            "Found {} .{} files under {}",
            files.len(),
            self.extension,
            self.root.display()
        );
        Ok(files)
    }
}

/// File stem as UTF-8
#[must_use]
pub fn file_stem(path: &Path) -> Option<&str> {
    path.file_stem()?.to_str()
}

/// Name of the containing directory as UTF-8
#[must_use]
pub fn parent_name(path: &Path) -> Option<&str> {
    path.parent()?.file_name()?.to_str()
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(ext)
}
