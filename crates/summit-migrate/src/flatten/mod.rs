//! Flatten: per-edition person records → one canonical record per person
//!
//! ```text
//! people/<edition>/<slug>.yaml ─scan─→ candidates ─dedup─→ survivors ─strip─→ people/<slug>.yaml
//!                                 └──→ RelationalUpdateSet ─inject─→ summits/<summit-id>.mdoc
//! ```
//!
//! Edition subdirectories are removed once the flat records exist.

mod dedup;
mod inject;
mod scanner;
mod strip;

pub use dedup::{precedence, select_survivors, Precedence};
pub use inject::{inject_organizers, Injection};
pub use scanner::{scan, Candidate, RelationalUpdateSet, Scan};
pub use strip::strip_edition_fields;

use crate::config::MigrateConfig;
use crate::error::{IoContext, MigrateResult};
use crate::report::{FlattenReport, SummitUpdate};
use std::path::PathBuf;
use summit_content::{Edition, LineDoc};

/// Run the whole flatten pipeline
///
/// # Errors
/// Any filesystem error aborts the run; files already written stay written.
pub fn run(config: &MigrateConfig) -> MigrateResult<FlattenReport> {
    let scan = scan(config)?;
    tracing::info!("Found {} people files in subdirectories", scan.candidates.len());

    let mut report = FlattenReport {
        records_scanned: scan.candidates.len(),
        unrecognized_editions: scan.unrecognized,
        ..FlattenReport::default()
    };

    report.records_written = write_survivors(config, &scan.candidates)?;
    report.directories_removed = remove_edition_dirs(config)?;
    update_summits(config, &scan.updates, &mut report)?;

    Ok(report)
}

/// Write the stripped survivor of every identity to the flat layout
///
/// # Errors
/// Fails on the first read or write error.
pub fn write_survivors(
    config: &MigrateConfig,
    candidates: &[Candidate],
) -> MigrateResult<Vec<PathBuf>> {
    let mut written = Vec::new();
    for (slug, candidate) in select_survivors(candidates) {
        let content = std::fs::read_to_string(&candidate.path).at(&candidate.path)?;
        let stripped = strip_edition_fields(LineDoc::parse(&content));

        let target = config.flat_record_path(slug);
        std::fs::write(&target, stripped.render()).at(&target)?;
        tracing::info!(
            source = %candidate.path.display(),
            "Created {}",
            target.display()
        );
        written.push(target);
    }
    Ok(written)
}

/// Remove every known edition subdirectory of the people root
///
/// # Errors
/// Fails if a present directory cannot be removed.
pub fn remove_edition_dirs(config: &MigrateConfig) -> MigrateResult<Vec<PathBuf>> {
    let mut removed = Vec::new();
    for edition in Edition::ALL {
        let dir = config.people().join(edition.slug());
        if dir.exists() {
            std::fs::remove_dir_all(&dir).at(&dir)?;
            tracing::info!("Removed directory {}", dir.display());
            removed.push(dir);
        }
    }
    Ok(removed)
}

/// Apply pending updates to each summit document
///
/// Missing documents and documents without a qualified reference are skipped
/// and left byte-for-byte untouched.
///
/// # Errors
/// Fails on the first read or write error.
pub fn update_summits(
    config: &MigrateConfig,
    updates: &RelationalUpdateSet,
    report: &mut FlattenReport,
) -> MigrateResult<()> {
    for (edition, people) in updates.iter() {
        let summit_id = edition.summit_id();
        let path = config.summit_path(summit_id);
        if !path.is_file() {
            tracing::warn!("summit document {} not found, skipping", path.display());
            report.summits_missing.push(summit_id.to_string());
            continue;
        }

        tracing::info!("Updating {}...", summit_id);
        let content = std::fs::read_to_string(&path).at(&path)?;
        let injection = inject_organizers(&LineDoc::parse(&content), people);
        if !injection.matched() {
            tracing::warn!(
                "no edition-qualified organizers in {}, leaving it untouched",
                path.display()
            );
            report.summits_unchanged.push(summit_id.to_string());
            continue;
        }

        std::fs::write(&path, injection.doc.render()).at(&path)?;
        tracing::info!("Updated {} with flattened IDs and roles", summit_id);
        report.summits_updated.push(SummitUpdate {
            summit_id: summit_id.to_string(),
            references_rewritten: injection.rewritten,
            organizers_injected: injection.injected,
            fields_dropped: injection.dropped,
        });
    }
    Ok(())
}
