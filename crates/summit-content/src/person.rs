//! Person records and organizer references

use crate::error::{ContentError, ContentResult};
use once_cell::sync::Lazy;
use regex::Regex;

/// Role used when a person record carries none
pub const DEFAULT_ROLE: &str = "Organizer";

/// Weight used when a person record carries none, or one that is not an
/// integer
pub const DEFAULT_ROLE_WEIGHT: i64 = 50;

/// Line prefixes of fields that only make sense per edition and are dropped
/// when records are flattened
pub const EDITION_SPECIFIC_FIELDS: [&str; 7] = [
    "role:",
    "roleWeight:",
    "isFeatured:",
    "edition:",
    "customImage:",
    "link:",
    "githubId:",
];

static PERSON_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<lead>\s*(?:-\s+)?)person:[ \t]+(?P<edition>[\w-]+)/(?P<slug>[\w-]+)\s*$")
        .unwrap_or_else(|e| panic!("person reference pattern must compile: {e}"))
});

/// Organizer metadata carried from a person record into a summit document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleMeta {
    /// Role title, e.g. `Chair`
    pub role: String,
    /// Sort weight, rendered as a bare integer
    pub weight: i64,
}

impl RoleMeta {
    /// Create metadata
    #[inline]
    #[must_use]
    pub fn new(role: impl Into<String>, weight: i64) -> Self {
        Self {
            role: role.into(),
            weight,
        }
    }

    /// Parse a raw `roleWeight` value
    ///
    /// # Errors
    /// [`ContentError::InvalidWeight`] if the trimmed value is not an integer
    pub fn parse_weight(raw: &str) -> ContentResult<i64> {
        raw.trim()
            .parse()
            .map_err(|_| ContentError::InvalidWeight(raw.to_string()))
    }
}

/// An edition-qualified organizer reference, `person: <edition>/<slug>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRef {
    /// Everything before `person:` (indentation and list marker)
    pub lead: String,
    /// Edition qualifier as written
    pub edition: String,
    /// Person slug
    pub slug: String,
}

impl PersonRef {
    /// Match a whole line against `<lead>person: <edition>/<slug>`
    #[must_use]
    pub fn match_line(text: &str) -> Option<Self> {
        let caps = PERSON_REF.captures(text)?;
        Some(Self {
            lead: caps.name("lead")?.as_str().to_string(),
            edition: caps.name("edition")?.as_str().to_string(),
            slug: caps.name("slug")?.as_str().to_string(),
        })
    }

    /// The reference with its edition qualifier removed
    #[must_use]
    pub fn unqualified(&self) -> String {
        format!("{}person: {}", self.lead, self.slug)
    }
}
