//! Run reports
//!
//! Each pipeline returns one of these so the binary can print a summary (or
//! JSON with `--json`) and tests can assert on what happened without
//! scraping log output.

use crate::reorganize::ClassSource;
use serde::Serialize;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use summit_content::Edition;

/// Outcome of a flatten run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlattenReport {
    /// Person records found under edition subdirectories
    pub records_scanned: usize,
    /// Records whose directory is not a known edition
    pub unrecognized_editions: usize,
    /// Flat records written, one per identity
    pub records_written: Vec<PathBuf>,
    /// Edition subdirectories removed afterwards
    pub directories_removed: Vec<PathBuf>,
    /// Summit documents rewritten
    pub summits_updated: Vec<SummitUpdate>,
    /// Summit identifiers with pending updates but no document on disk
    pub summits_missing: Vec<String>,
    /// Summit documents left untouched because nothing matched
    pub summits_unchanged: Vec<String>,
}

/// Changes applied to one summit document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummitUpdate {
    /// Summit identifier
    pub summit_id: String,
    /// Organizer references stripped of their edition qualifier
    pub references_rewritten: usize,
    /// Entries that received role and weight
    pub organizers_injected: usize,
    /// Pre-existing role/weight fields replaced
    pub fields_dropped: usize,
}

/// Outcome of a reorganize run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReorganizeReport {
    /// Flat person records found
    pub records_scanned: usize,
    /// Records moved into an edition subdirectory
    pub records_moved: Vec<RecordMove>,
    /// Records left in place because no edition could be determined
    pub records_skipped: Vec<PathBuf>,
    /// Posts archive step, if it ran
    pub posts: Option<ArchiveOutcome>,
}

/// One relocated person record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordMove {
    /// Original flat path
    pub from: PathBuf,
    /// New per-edition path
    pub to: PathBuf,
    /// Edition the record was filed under
    pub edition: Edition,
    /// Whether the edition came from the record or its filename
    pub source: ClassSource,
}

/// Result of archiving a directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum ArchiveOutcome {
    /// Source directory did not exist
    NothingToMove,
    /// Children moved and the source removed
    Moved {
        /// Archive directory
        archive: PathBuf,
        /// Number of immediate children moved
        entries: usize,
    },
}

/// Outcome of a journal-club run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JournalClubReport {
    /// Entries found
    pub entries_scanned: usize,
    /// Entries rewritten
    pub migrated: Vec<PathBuf>,
    /// Entries already in the new shape
    pub already_migrated: Vec<PathBuf>,
    /// Entries without a frontmatter block
    pub no_frontmatter: Vec<PathBuf>,
}

impl Display for FlattenReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Flatten Report:")?;
        writeln!(f, "  Records Scanned: {}", self.records_scanned)?;
        writeln!(f, "  Unrecognized Editions: {}", self.unrecognized_editions)?;
        writeln!(f, "  Records Written: {}", self.records_written.len())?;
        writeln!(f, "  Directories Removed: {}", self.directories_removed.len())?;
        writeln!(f, "  Summits Updated: {}", self.summits_updated.len())?;
        for update in &self.summits_updated {
            writeln!(
                f,
                "    {}: {} references, {} organizers, {} replaced fields",
                update.summit_id,
                update.references_rewritten,
                update.organizers_injected,
                update.fields_dropped
            )?;
        }
        writeln!(f, "  Summits Missing: {}", self.summits_missing.len())?;
        write!(f, "  Summits Unchanged: {}", self.summits_unchanged.len())
    }
}

impl Display for ReorganizeReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reorganize Report:")?;
        writeln!(f, "  Records Scanned: {}", self.records_scanned)?;
        writeln!(f, "  Records Moved: {}", self.records_moved.len())?;
        writeln!(f, "  Records Skipped: {}", self.records_skipped.len())?;
        match &self.posts {
            None => write!(f, "  Posts: not requested"),
            Some(ArchiveOutcome::NothingToMove) => write!(f, "  Posts: nothing to move"),
            Some(ArchiveOutcome::Moved { archive, entries }) => {
                write!(f, "  Posts: {entries} entries moved to {}", archive.display())
            }
        }
    }
}

impl Display for JournalClubReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Journal Club Report:")?;
        writeln!(f, "  Entries Scanned: {}", self.entries_scanned)?;
        writeln!(f, "  Migrated: {}", self.migrated.len())?;
        writeln!(f, "  Already Migrated: {}", self.already_migrated.len())?;
        write!(f, "  No Frontmatter: {}", self.no_frontmatter.len())
    }
}
