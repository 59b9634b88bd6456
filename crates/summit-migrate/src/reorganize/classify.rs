//! Edition classification for flat person records

use serde::Serialize;
use summit_content::{Edition, FieldMap};

/// Where a classification came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassSource {
    /// The record's `edition:` field
    Field,
    /// The filename stem
    Filename,
}

/// Edition a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Target edition
    pub edition: Edition,
    /// How it was determined
    pub source: ClassSource,
}

/// Classify a record by its `edition` field, then by its filename stem.
///
/// Returns `None` when neither names a known edition.
#[must_use]
pub fn classify(fields: &FieldMap, stem: &str) -> Option<Classification> {
    let by_field = fields
        .get("edition")
        .and_then(Edition::classify_label)
        .map(|edition| Classification {
            edition,
            source: ClassSource::Field,
        });

    by_field.or_else(|| {
        Edition::classify_stem(stem).map(|edition| Classification {
            edition,
            source: ClassSource::Filename,
        })
    })
}
