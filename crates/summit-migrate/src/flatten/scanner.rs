//! Per-edition person record scan
//!
//! Walks `<people>/<edition>/<slug>.yaml`, one level below the people root,
//! in name order. Every file becomes a dedup [`Candidate`]; files under a
//! known edition also contribute their role and weight to the
//! [`RelationalUpdateSet`] returned alongside.

use crate::config::MigrateConfig;
use crate::error::{IoContext, MigrateResult};
use crate::walk::{file_stem, parent_name, ContentWalker};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use summit_content::{parse_fields, Edition, FieldMap, RoleMeta, DEFAULT_ROLE, DEFAULT_ROLE_WEIGHT};

/// One person record found during the scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Filename stem
    pub slug: String,
    /// Parent directory name as found on disk
    pub edition_label: String,
    /// Known edition for the label, if any
    pub edition: Option<Edition>,
    /// File path
    pub path: PathBuf,
    /// Position in scan order
    pub scan_index: usize,
}

impl Candidate {
    /// Whether the record comes from the authoritative edition
    #[inline]
    #[must_use]
    pub fn is_authoritative(&self) -> bool {
        Edition::is_authoritative_label(&self.edition_label)
    }
}

/// Summit edition → person slug → organizer metadata, built once by the scan
/// and consumed once by the injector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationalUpdateSet {
    summits: BTreeMap<Edition, BTreeMap<String, RoleMeta>>,
}

impl RelationalUpdateSet {
    /// Create empty set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record metadata for `slug` under `edition`'s summit, replacing any
    /// earlier entry
    pub fn insert(
        &mut self,
        edition: Edition,
        slug: impl Into<String>,
        meta: RoleMeta,
    ) -> Option<RoleMeta> {
        self.summits
            .entry(edition)
            .or_default()
            .insert(slug.into(), meta)
    }

    /// Pending people for one summit
    #[must_use]
    pub fn people(&self, edition: Edition) -> Option<&BTreeMap<String, RoleMeta>> {
        self.summits.get(&edition)
    }

    /// Iterate summits with pending updates, oldest edition first
    pub fn iter(&self) -> impl Iterator<Item = (Edition, &BTreeMap<String, RoleMeta>)> {
        self.summits.iter().map(|(e, people)| (*e, people))
    }

    /// Whether `edition`'s summit has pending updates
    #[inline]
    #[must_use]
    pub fn contains(&self, edition: Edition) -> bool {
        self.summits.contains_key(&edition)
    }

    /// Number of summits with pending updates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.summits.len()
    }

    /// Whether nothing is pending
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summits.is_empty()
    }
}

/// Everything the scan produced
#[derive(Debug, Clone, Default)]
pub struct Scan {
    /// All records in scan order
    pub candidates: Vec<Candidate>,
    /// Metadata harvested for known editions
    pub updates: RelationalUpdateSet,
    /// Records under unrecognized edition directories
    pub unrecognized: usize,
}

/// Scan the people root for per-edition records
///
/// # Errors
/// Fails on any directory traversal or read error.
pub fn scan(config: &MigrateConfig) -> MigrateResult<Scan> {
    let mut scan = Scan::default();
    let files = ContentWalker::nested(config.people(), &config.record_extension).files()?;

    for path in files {
        let (Some(edition_label), Some(slug)) = (parent_name(&path), file_stem(&path)) else {
            continue;
        };
        let (edition_label, slug) = (edition_label.to_string(), slug.to_string());

        let content = std::fs::read_to_string(&path).at(&path)?;
        let fields = parse_fields(&content);
        let edition = match edition_label.parse::<Edition>() {
            Ok(edition) => {
                let meta = harvest(&fields, &path);
                tracing::debug!(
                    summit = edition.summit_id(),
                    person = %slug,
                    role = %meta.role,
                    weight = meta.weight,
                    "harvested organizer metadata"
                );
                scan.updates.insert(edition, slug.clone(), meta);
                Some(edition)
            }
            Err(err) => {
                tracing::warn!("{} for {}, no summit update recorded", err, path.display());
                scan.unrecognized += 1;
                None
            }
        };

        let scan_index = scan.candidates.len();
        scan.candidates.push(Candidate {
            slug,
            edition_label,
            edition,
            path,
            scan_index,
        });
    }

    Ok(scan)
}

/// Role and weight of one record, with defaults
pub(crate) fn harvest(fields: &FieldMap, path: &Path) -> RoleMeta {
    let role = fields.get_or("role", DEFAULT_ROLE);
    let weight = match fields.get("roleWeight") {
        None => DEFAULT_ROLE_WEIGHT,
        Some(raw) => RoleMeta::parse_weight(raw).unwrap_or_else(|err| {
            tracing::warn!("{} in {}, using {}", err, path.display(), DEFAULT_ROLE_WEIGHT);
            DEFAULT_ROLE_WEIGHT
        }),
    };
    RoleMeta::new(role, weight)
}
