//! Testing utilities for summit migrations
//!
//! Shared fixtures: a throwaway site tree laid out like the real content
//! directory, plus builders for the records and documents the migrations
//! rewrite.

#![allow(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};
use summit_content::Edition;
use tempfile::TempDir;

pub const PEOPLE: &str = "src/content/people";
pub const SUMMITS: &str = "src/content/summits";
pub const POSTS: &str = "src/content/posts";
pub const LEGACY_POSTS: &str = "src/content/_posts_legacy";
pub const JOURNAL_CLUB: &str = "src/content/journal-club";

/// Temporary site root; removed on drop
#[derive(Debug)]
pub struct ContentTree {
    dir: TempDir,
}

impl ContentTree {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp site root"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.root().join(rel)
    }

    /// Write `content` at `rel`, creating parent directories
    pub fn write(&self, rel: impl AsRef<Path>, content: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, content).expect("write fixture");
        path
    }

    pub fn read(&self, rel: impl AsRef<Path>) -> String {
        let path = self.path(rel);
        fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
    }

    pub fn exists(&self, rel: impl AsRef<Path>) -> bool {
        self.path(rel).exists()
    }

    /// `people/<edition>/<slug>.yaml`
    pub fn edition_person(&self, edition: &str, slug: &str, content: &str) -> PathBuf {
        self.write(format!("{PEOPLE}/{edition}/{slug}.yaml"), content)
    }

    /// `people/<stem>.yaml`
    pub fn flat_person(&self, stem: &str, content: &str) -> PathBuf {
        self.write(format!("{PEOPLE}/{stem}.yaml"), content)
    }

    /// `summits/<summit-id>.mdoc` for `edition`
    pub fn summit(&self, edition: Edition, content: &str) -> PathBuf {
        self.write(format!("{SUMMITS}/{}.mdoc", edition.summit_id()), content)
    }

    pub fn journal_entry(&self, stem: &str, content: &str) -> PathBuf {
        self.write(format!("{JOURNAL_CLUB}/{stem}.mdoc"), content)
    }

    pub fn post(&self, rel: &str, content: &str) -> PathBuf {
        self.write(format!("{POSTS}/{rel}"), content)
    }

    /// Names of the entries directly under `rel`, sorted
    pub fn list(&self, rel: impl AsRef<Path>) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.path(rel))
            .map(|entries| {
                entries
                    .filter_map(Result::ok)
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        names
    }
}

impl Default for ContentTree {
    fn default() -> Self {
        Self::new()
    }
}

/// A person record as the per-edition layout stores it
pub fn person_record(name: &str, edition_label: &str, role: &str, weight: i64) -> String {
    format!(
        "name: {name}\n\
         affiliation: Institute of Virology\n\
         role: {role}\n\
         roleWeight: {weight}\n\
         isFeatured: true\n\
         edition: {edition_label}\n\
         githubId: {name}\n\
         bio: Works on RNA polymerases.\n"
    )
}

/// A summit document whose organizers reference `slugs` qualified by
/// `edition`
pub fn summit_document(edition: Edition, slugs: &[&str]) -> String {
    let mut doc = format!("---\ntitle: RdRP Summit {}\norganizers:\n", edition.year());
    for slug in slugs {
        doc.push_str(&format!("  - person: {}/{slug}\n", edition.slug()));
    }
    doc.push_str("---\nWelcome.\n");
    doc
}
