//! Reorganize: flat person records → per-edition subdirectories
//!
//! ```text
//! people/<stem>.yaml ─classify─→ edition ─relocate─→ people/<edition>/<clean>.yaml
//! posts/*            ─────────────archive──────────→ _posts_legacy/*
//! ```
//!
//! Records whose edition cannot be determined stay where they are.

mod archive;
mod classify;
mod relocate;

pub use archive::archive_dir;
pub use classify::{classify, ClassSource, Classification};
pub use relocate::{clean_slug, relocate, rewrite_record};

use crate::config::MigrateConfig;
use crate::error::{IoContext, MigrateResult};
use crate::report::{RecordMove, ReorganizeReport};
use crate::walk::{file_stem, ContentWalker};
use summit_content::parse_fields;

/// Reorganize run options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorganizeOptions {
    /// Archive the posts directory after relocating records
    pub archive_posts: bool,
}

impl ReorganizeOptions {
    /// Create default options
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With posts archiving on or off
    #[inline]
    #[must_use]
    pub fn with_archive_posts(mut self, archive_posts: bool) -> Self {
        self.archive_posts = archive_posts;
        self
    }
}

impl Default for ReorganizeOptions {
    fn default() -> Self {
        Self {
            archive_posts: true,
        }
    }
}

/// Run the whole reorganize pipeline
///
/// # Errors
/// Any filesystem error aborts the run; records already moved stay moved.
pub fn run(config: &MigrateConfig, options: ReorganizeOptions) -> MigrateResult<ReorganizeReport> {
    let files = ContentWalker::flat(config.people(), &config.record_extension).files()?;
    tracing::info!("Found {} people files.", files.len());

    let mut report = ReorganizeReport {
        records_scanned: files.len(),
        ..ReorganizeReport::default()
    };

    for path in files {
        let Some(stem) = file_stem(&path).map(str::to_string) else {
            continue;
        };
        let content = std::fs::read_to_string(&path).at(&path)?;

        let Some(class) = classify(&parse_fields(&content), &stem) else {
            tracing::warn!("Skipping {}: Could not determine edition.", path.display());
            report.records_skipped.push(path);
            continue;
        };
        tracing::debug!(edition = %class.edition, source = ?class.source, "classified {}", stem);

        let to = relocate(config, &path, &stem, class.edition)?;
        report.records_moved.push(RecordMove {
            from: path,
            to,
            edition: class.edition,
            source: class.source,
        });
    }

    if options.archive_posts {
        report.posts = Some(archive_dir(&config.posts(), &config.legacy_posts())?);
    }

    Ok(report)
}
