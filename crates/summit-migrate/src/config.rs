//! Migration configuration
//!
//! Every path is relative to the content root unless given absolute. The
//! defaults reproduce the site's fixed layout, so running from the site root
//! with no configuration file behaves exactly like the historical scripts.

use crate::error::{MigrateError, MigrateResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory layout and file extensions the migrations operate on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MigrateConfig {
    /// Site root every other path is resolved against
    pub root: PathBuf,
    /// Person records
    pub people_dir: PathBuf,
    /// Summit documents
    pub summits_dir: PathBuf,
    /// Posts to archive
    pub posts_dir: PathBuf,
    /// Archive destination for posts
    pub legacy_posts_dir: PathBuf,
    /// Journal club entries
    pub journal_club_dir: PathBuf,
    /// Person record extension (without dot)
    pub record_extension: String,
    /// Summit and journal-club document extension (without dot)
    pub document_extension: String,
}

impl MigrateConfig {
    /// Create default configuration rooted at the current directory
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default layout under `root`
    #[inline]
    #[must_use]
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        Self::default().with_root(root)
    }

    /// Load from a TOML file; missing keys take their defaults
    ///
    /// # Errors
    /// - [`MigrateError::Io`] if the file cannot be read
    /// - [`MigrateError::Config`] if it is not valid configuration
    pub fn load(path: impl AsRef<Path>) -> MigrateResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| MigrateError::io_error(path, e))?;
        toml::from_str(&text).map_err(|source| MigrateError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// With content root
    #[inline]
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// With people directory
    #[inline]
    #[must_use]
    pub fn with_people_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.people_dir = dir.into();
        self
    }

    /// With summits directory
    #[inline]
    #[must_use]
    pub fn with_summits_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.summits_dir = dir.into();
        self
    }

    /// Resolved people directory
    #[must_use]
    pub fn people(&self) -> PathBuf {
        self.root.join(&self.people_dir)
    }

    /// Resolved summits directory
    #[must_use]
    pub fn summits(&self) -> PathBuf {
        self.root.join(&self.summits_dir)
    }

    /// Resolved posts directory
    #[must_use]
    pub fn posts(&self) -> PathBuf {
        self.root.join(&self.posts_dir)
    }

    /// Resolved legacy posts archive
    #[must_use]
    pub fn legacy_posts(&self) -> PathBuf {
        self.root.join(&self.legacy_posts_dir)
    }

    /// Resolved journal club directory
    #[must_use]
    pub fn journal_club(&self) -> PathBuf {
        self.root.join(&self.journal_club_dir)
    }

    /// `<people>/<slug>.<ext>`
    #[must_use]
    pub fn flat_record_path(&self, slug: &str) -> PathBuf {
        self.people().join(format!("{slug}.{}", self.record_extension))
    }

    /// `<people>/<edition>/<slug>.<ext>`
    #[must_use]
    pub fn edition_record_path(&self, edition: &str, slug: &str) -> PathBuf {
        self.people()
            .join(edition)
            .join(format!("{slug}.{}", self.record_extension))
    }

    /// `<summits>/<summit-id>.<ext>`
    #[must_use]
    pub fn summit_path(&self, summit_id: &str) -> PathBuf {
        self.summits()
            .join(format!("{summit_id}.{}", self.document_extension))
    }
}

impl Default for MigrateConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            people_dir: PathBuf::from("src/content/people"),
            summits_dir: PathBuf::from("src/content/summits"),
            posts_dir: PathBuf::from("src/content/posts"),
            legacy_posts_dir: PathBuf::from("src/content/_posts_legacy"),
            journal_club_dir: PathBuf::from("src/content/journal-club"),
            record_extension: "yaml".to_string(),
            document_extension: "mdoc".to_string(),
        }
    }
}
