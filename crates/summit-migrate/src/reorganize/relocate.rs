//! Moving a flat person record into its edition directory

use crate::config::MigrateConfig;
use crate::error::{IoContext, MigrateResult};
use std::path::{Path, PathBuf};
use summit_content::{Edition, Line, LineDoc, LineEnding};

/// Strip a trailing `-<edition-slug>` from a filename stem
#[must_use]
pub fn clean_slug(stem: &str, edition: Edition) -> &str {
    stem.strip_suffix(edition.slug())
        .and_then(|rest| rest.strip_suffix('-'))
        .filter(|rest| !rest.is_empty())
        .unwrap_or(stem)
}

/// Point the record's `edition:` line at `edition` and drop `entryId:` lines;
/// everything else passes through in order
#[must_use]
pub fn rewrite_record(doc: LineDoc, edition: Edition) -> LineDoc {
    doc.into_iter()
        .filter(|line| !line.starts_with_trimmed("entryId:"))
        .map(|line| {
            if line.starts_with_trimmed("edition:") {
                Line::field("", "edition", edition.slug(), LineEnding::Lf)
            } else {
                line
            }
        })
        .collect()
}

/// Write the rewritten record to `<people>/<edition>/<clean>.yaml` and remove
/// the original. Returns the new path.
///
/// # Errors
/// Fails on any read, write, directory creation or removal error. A failure
/// after the write leaves both files on disk.
pub fn relocate(
    config: &MigrateConfig,
    path: &Path,
    stem: &str,
    edition: Edition,
) -> MigrateResult<PathBuf> {
    let slug = clean_slug(stem, edition);
    let target = config.edition_record_path(edition.slug(), slug);
    if let Some(dir) = target.parent() {
        std::fs::create_dir_all(dir).at(dir)?;
    }

    let content = std::fs::read_to_string(path).at(path)?;
    let rewritten = rewrite_record(LineDoc::parse(&content), edition);
    std::fs::write(&target, rewritten.render_lf()).at(&target)?;
    std::fs::remove_file(path).at(path)?;

    tracing::info!(
        "Moved {stem}.{ext} -> {}/{slug}.{ext}",
        edition.slug(),
        ext = config.record_extension
    );
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clean_slug_strips_trailing_edition() {
        assert_eq!(clean_slug("shoichi-2025-lisbon", Edition::Lisbon2025), "shoichi");
        assert_eq!(clean_slug("shoichi", Edition::Lisbon2025), "shoichi");
        assert_eq!(clean_slug("2025-lisbon-talk", Edition::Lisbon2025), "2025-lisbon-talk");
        assert_eq!(clean_slug("2025-lisbon", Edition::Lisbon2025), "2025-lisbon");
        assert_eq!(clean_slug("ada-2023-valencia", Edition::Lisbon2025), "ada-2023-valencia");
    }

    #[test]
    fn rewrite_sets_edition_and_drops_entry_id() {
        let doc = LineDoc::parse(
            "name: Shoichi\nedition: \"2025 Lisbon\"\nentryId: abc123\nrole: Chair\n",
        );
        assert_eq!(
            rewrite_record(doc, Edition::Lisbon2025).render_lf(),
            "name: Shoichi\nedition: 2025-lisbon\nrole: Chair\n"
        );
    }

    #[test]
    fn rewrite_normalizes_endings_and_indent() {
        let doc = LineDoc::parse("name: Ada\r\n  edition: 2023\r\n  entryId: x\r\nbio: hi");
        assert_eq!(
            rewrite_record(doc, Edition::Valencia2023).render_lf(),
            "name: Ada\nedition: 2023-valencia\nbio: hi\n"
        );
    }

    #[test]
    fn rewrite_without_edition_line_adds_none() {
        let doc = LineDoc::parse("name: Bo\n");
        assert_eq!(rewrite_record(doc, Edition::Germany2027).render_lf(), "name: Bo\n");
    }

    #[test]
    fn relocate_moves_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = MigrateConfig::rooted(dir.path());
        std::fs::create_dir_all(config.people()).unwrap();
        let source = config.flat_record_path("shoichi-2025-lisbon");
        std::fs::write(&source, "name: Shoichi\nedition: 2025 Lisbon\nentryId: 7\n").unwrap();

        let target =
            relocate(&config, &source, "shoichi-2025-lisbon", Edition::Lisbon2025).unwrap();
        assert_eq!(target, config.edition_record_path("2025-lisbon", "shoichi"));
        assert!(!source.exists());
        assert_eq!(
            std::fs::read_to_string(target).unwrap(),
            "name: Shoichi\nedition: 2025-lisbon\n"
        );
    }
}
