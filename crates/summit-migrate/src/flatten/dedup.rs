//! Survivor selection for records sharing one identity
//!
//! Candidates are ordered by an explicit precedence key before the first one
//! per slug is kept:
//!
//! 1. records from the authoritative edition first
//! 2. then scan order (edition directory name, then file name)
//!
//! Only the authoritative edition is special-cased; between two other
//! editions the earlier directory wins.

use super::scanner::Candidate;
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Precedence key; smaller sorts first and wins
pub type Precedence = (Reverse<bool>, usize);

/// Precedence of one candidate
#[inline]
#[must_use]
pub fn precedence(candidate: &Candidate) -> Precedence {
    (Reverse(candidate.is_authoritative()), candidate.scan_index)
}

/// Exactly one survivor per slug, keyed by slug
#[must_use]
pub fn select_survivors(candidates: &[Candidate]) -> BTreeMap<&str, &Candidate> {
    let mut ordered: Vec<&Candidate> = candidates.iter().collect();
    ordered.sort_by_key(|c| precedence(c));

    let mut survivors = BTreeMap::new();
    for candidate in ordered {
        survivors.entry(candidate.slug.as_str()).or_insert(candidate);
    }
    survivors
}
