//! Journal club: speaker/paper-url frontmatter → speaker-name/affiliation/links
//!
//! Every `.mdoc` entry in the journal-club directory is rewritten in place.
//! Entries that already carry `speakerName`, or that have no frontmatter,
//! are left alone.

mod entry;

pub use entry::{
    detect_link_label, migrate_entry, parse_speaker, EntryLink, EntryOutcome, LinkLabel, Speaker,
};

use crate::config::MigrateConfig;
use crate::error::{IoContext, MigrateResult};
use crate::report::JournalClubReport;
use crate::walk::ContentWalker;

/// Migrate every journal-club entry
///
/// # Errors
/// Any read or write error aborts the run; entries already rewritten stay
/// rewritten.
pub fn run(config: &MigrateConfig) -> MigrateResult<JournalClubReport> {
    let files = ContentWalker::flat(config.journal_club(), &config.document_extension).files()?;
    tracing::info!("Found {} journal club entries", files.len());

    let mut report = JournalClubReport {
        entries_scanned: files.len(),
        ..JournalClubReport::default()
    };

    for path in files {
        let content = std::fs::read_to_string(&path).at(&path)?;
        match migrate_entry(&content) {
            EntryOutcome::NoFrontmatter => {
                tracing::warn!("Skipped (no frontmatter): {}", path.display());
                report.no_frontmatter.push(path);
            }
            EntryOutcome::AlreadyMigrated => {
                tracing::info!("Already migrated: {}", path.display());
                report.already_migrated.push(path);
            }
            EntryOutcome::Migrated { content, speaker, link } => {
                std::fs::write(&path, content).at(&path)?;
                tracing::info!(
                    name = speaker.name.as_deref().unwrap_or_default(),
                    affiliation = speaker.affiliation.as_deref().unwrap_or_default(),
                    "Migrated: {}",
                    path.display()
                );
                if let Some(link) = link {
                    tracing::debug!("paper URL -> links[0]: {}", link.label);
                }
                report.migrated.push(path);
            }
        }
    }

    tracing::info!("Migration complete: {} files updated", report.migrated.len());
    Ok(report)
}
