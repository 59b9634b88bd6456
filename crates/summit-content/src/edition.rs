//! Summit editions
//!
//! The edition table is closed and hard-coded: the content tree on disk was
//! authored against exactly these directory names, summit identifiers and
//! label texts, so they must be reproduced verbatim.

use crate::error::ContentError;
use serde::Serialize;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// One instance of the recurring summit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Edition {
    /// 2023, Valencia
    #[serde(rename = "2023-valencia")]
    Valencia2023,
    /// 2025, Lisbon
    #[serde(rename = "2025-lisbon")]
    Lisbon2025,
    /// 2027, Germany
    #[serde(rename = "2027-germany")]
    Germany2027,
}

/// Label table used to classify free-text `edition:` values.
///
/// Order matters: the first key contained in the value wins, so the bare
/// years shadow the long labels.
const LABEL_TABLE: [(&str, Edition); 6] = [
    ("2023", Edition::Valencia2023),
    ("2025", Edition::Lisbon2025),
    ("2027", Edition::Germany2027),
    ("2023 Valencia", Edition::Valencia2023),
    ("2025 Lisbon", Edition::Lisbon2025),
    ("2027 Germany", Edition::Germany2027),
];

impl Edition {
    /// All known editions, oldest first
    pub const ALL: [Edition; 3] = [Self::Valencia2023, Self::Lisbon2025, Self::Germany2027];

    /// The edition whose person records win deduplication
    pub const AUTHORITATIVE: Edition = Self::Lisbon2025;

    /// Directory-name form, e.g. `2025-lisbon`
    #[inline]
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Valencia2023 => "2023-valencia",
            Self::Lisbon2025 => "2025-lisbon",
            Self::Germany2027 => "2027-germany",
        }
    }

    /// Summit document identifier, e.g. `rdrp-summit-2025`
    #[inline]
    #[must_use]
    pub const fn summit_id(self) -> &'static str {
        match self {
            Self::Valencia2023 => "rdrp-summit-2023",
            Self::Lisbon2025 => "rdrp-summit-2025",
            Self::Germany2027 => "rdrp-summit-2027",
        }
    }

    /// Human label, e.g. `2025 Lisbon`
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Valencia2023 => "2023 Valencia",
            Self::Lisbon2025 => "2025 Lisbon",
            Self::Germany2027 => "2027 Germany",
        }
    }

    /// Year marker, e.g. `2025`
    #[inline]
    #[must_use]
    pub const fn year(self) -> &'static str {
        match self {
            Self::Valencia2023 => "2023",
            Self::Lisbon2025 => "2025",
            Self::Germany2027 => "2027",
        }
    }

    /// Exact lookup by directory slug
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.slug() == slug)
    }

    /// Exact lookup by summit identifier
    #[must_use]
    pub fn from_summit_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.summit_id() == id)
    }

    /// Classify a free-text edition value by substring containment.
    ///
    /// `"2025 Lisbon"`, `"2025"` and `"2025-lisbon"` all classify as
    /// [`Edition::Lisbon2025`].
    #[must_use]
    pub fn classify_label(value: &str) -> Option<Self> {
        LABEL_TABLE
            .iter()
            .find(|(key, _)| value.contains(key))
            .map(|(_, edition)| *edition)
    }

    /// Classify a filename stem that embeds a directory slug,
    /// e.g. `talk-2025-lisbon`.
    #[must_use]
    pub fn classify_stem(stem: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| stem.contains(e.slug()))
    }

    /// Whether a raw edition directory label carries the authoritative
    /// edition's marker
    #[inline]
    #[must_use]
    pub fn is_authoritative_label(label: &str) -> bool {
        label.contains(Self::AUTHORITATIVE.year())
    }
}

impl Display for Edition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Edition {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(s).ok_or_else(|| ContentError::UnknownEdition(s.to_string()))
    }
}
