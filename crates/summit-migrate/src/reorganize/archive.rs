//! Legacy posts archive

use crate::error::{IoContext, MigrateError, MigrateResult};
use crate::report::ArchiveOutcome;
use std::path::Path;
use walkdir::WalkDir;

/// Move every immediate child of `source` into `archive`, then remove the
/// emptied `source`
///
/// # Errors
/// Fails on the first move or removal error; entries already moved stay in
/// the archive.
pub fn archive_dir(source: &Path, archive: &Path) -> MigrateResult<ArchiveOutcome> {
    if !source.is_dir() {
        tracing::info!("No legacy posts to move.");
        return Ok(ArchiveOutcome::NothingToMove);
    }
    std::fs::create_dir_all(archive).at(archive)?;

    let mut children = std::fs::read_dir(source)
        .at(source)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .at(source)?;
    children.sort();

    for child in &children {
        let Some(name) = child.file_name() else { continue };
        move_entry(child, &archive.join(name))?;
    }

    std::fs::remove_dir(source).at(source)?;
    tracing::info!("Moved posts to {}", archive.display());
    Ok(ArchiveOutcome::Moved {
        archive: archive.to_path_buf(),
        entries: children.len(),
    })
}

/// Rename, falling back to copy and delete when the rename crosses devices
fn move_entry(from: &Path, to: &Path) -> MigrateResult<()> {
    match std::fs::rename(from, to) {
        Ok(()) => {
            tracing::debug!("renamed {} -> {}", from.display(), to.display());
            return Ok(());
        }
        Err(err) => {
            tracing::debug!("rename of {} failed ({}), copying instead", from.display(), err);
        }
    }

    if from.is_dir() {
        copy_tree(from, to)?;
        std::fs::remove_dir_all(from).at(from)?;
    } else {
        std::fs::copy(from, to).at(to)?;
        std::fs::remove_file(from).at(from)?;
    }
    tracing::debug!("copied {} -> {}", from.display(), to.display());
    Ok(())
}

fn copy_tree(from: &Path, to: &Path) -> MigrateResult<()> {
    for entry in WalkDir::new(from).sort_by_file_name() {
        let entry = entry.map_err(|e| MigrateError::walk_error(from, e))?;
        let rel = entry.path().strip_prefix(from).unwrap_or(entry.path());
        let dest = to.join(rel);
        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&dest).at(&dest)?;
        } else {
            std::fs::copy(entry.path(), &dest).at(&dest)?;
        }
    }
    Ok(())
}
