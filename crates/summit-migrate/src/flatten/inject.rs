//! Organizer rewriting inside summit documents
//!
//! Every `person: <edition>/<slug>` reference loses its edition qualifier.
//! When the update set carries metadata for the slug, `role:` and `weight:`
//! lines are injected right after the reference, and the entry's own
//! pre-existing `role:` / `weight:` fields are dropped. A replaced field that
//! sits on the entry's list marker (`- role: ...`) is rewritten in place
//! instead, so the marker survives and the field is not injected twice.
//! Removal is scoped through an [`EntryCursor`]: fields belonging to other
//! entries, or living elsewhere in the document, are never touched.

use std::collections::BTreeMap;
use std::ops::Range;
use summit_content::{Line, LineDoc, LineKind, PersonRef, RoleMeta};

/// Fields replaced by injected metadata
const REPLACED_FIELDS: [&str; 2] = ["role", "weight"];

/// Result of rewriting one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Injection {
    /// Rewritten document
    pub doc: LineDoc,
    /// References whose qualifier was removed
    pub rewritten: usize,
    /// References that received role and weight
    pub injected: usize,
    /// Pre-existing fields dropped in favour of injected ones
    pub dropped: usize,
}

impl Injection {
    /// Whether any reference matched
    #[inline]
    #[must_use]
    pub fn matched(&self) -> bool {
        self.rewritten > 0
    }
}

/// Extent of one list entry around a matched reference line
#[derive(Debug, Clone, PartialEq, Eq)]
struct EntryCursor {
    /// Column the entry's direct fields are indented to
    column: usize,
    /// Lines belonging to the entry
    span: Range<usize>,
    /// List marker line found by walking back from the reference
    marker: Option<usize>,
}

impl EntryCursor {
    /// Open the entry containing `lines[at]`.
    ///
    /// A reference on the list marker line (`- person: ...`) opens the entry
    /// itself; a reference on a plain field line walks back to the marker
    /// whose body column matches.
    fn open(lines: &[Line], at: usize) -> Self {
        let anchor = &lines[at];
        let column = anchor.body_column();
        let on_marker = matches!(anchor.kind(), LineKind::ListItem { .. });

        let mut start = at;
        let mut marker = None;
        if !on_marker {
            while start > 0 {
                let prev = &lines[start - 1];
                if prev.is_blank() {
                    break;
                }
                let opens_entry = matches!(prev.kind(), LineKind::ListItem { .. })
                    && prev.body_column() == column;
                if opens_entry {
                    start -= 1;
                    marker = Some(start);
                    break;
                }
                if prev.indent_width() < column {
                    break;
                }
                start -= 1;
            }
        }

        let floor = if on_marker {
            anchor.indent_width() + 1
        } else {
            column
        };
        let mut end = at + 1;
        while end < lines.len() && (lines[end].is_blank() || lines[end].indent_width() >= floor) {
            end += 1;
        }

        Self {
            column,
            span: start..end,
            marker,
        }
    }

    /// Replaced field carried on the marker line, if any
    fn marker_field(&self, lines: &[Line]) -> Option<&'static str> {
        let key = lines[self.marker?].key()?;
        REPLACED_FIELDS.iter().copied().find(|field| *field == key)
    }

    /// Whether `line` is a direct field of this entry that injection replaces
    fn replaces(&self, line: &Line) -> bool {
        line.indent_width() == self.column && REPLACED_FIELDS.iter().any(|key| line.is_field(key))
    }
}

/// Value injected for one of [`REPLACED_FIELDS`]
fn field_value(meta: &RoleMeta, key: &str) -> String {
    match key {
        "role" => meta.role.clone(),
        _ => meta.weight.to_string(),
    }
}

/// Rewrite edition-qualified references using `people` metadata
#[must_use]
pub fn inject_organizers(doc: &LineDoc, people: &BTreeMap<String, RoleMeta>) -> Injection {
    let lines = doc.lines();
    let refs: Vec<Option<PersonRef>> = lines
        .iter()
        .map(|l| PersonRef::match_line(l.text()))
        .collect();

    let mut drop = vec![false; lines.len()];
    let mut replace: Vec<Option<Line>> = vec![None; lines.len()];
    let mut hoisted: Vec<Option<&str>> = vec![None; lines.len()];
    for (at, person) in refs.iter().enumerate() {
        let Some(person) = person else { continue };
        let Some(meta) = people.get(&person.slug) else {
            continue;
        };
        let cursor = EntryCursor::open(lines, at);
        if let (Some(marker), Some(key)) = (cursor.marker, cursor.marker_field(lines)) {
            let line = &lines[marker];
            let lead = &line.text()[..line.body_column()];
            replace[marker] = Some(Line::field(lead, key, field_value(meta, key), line.ending()));
            hoisted[at] = Some(key);
        }
        for idx in cursor.span.clone() {
            if idx != at && cursor.replaces(&lines[idx]) {
                drop[idx] = true;
            }
        }
    }

    let mut out = LineDoc::new();
    let mut rewritten = 0;
    let mut injected = 0;
    for (idx, line) in lines.iter().enumerate() {
        if let Some(replacement) = &replace[idx] {
            tracing::debug!("rewriting marker field '{}'", line.trimmed());
            out.push(replacement.clone());
            continue;
        }
        if drop[idx] {
            tracing::debug!("dropping replaced field '{}'", line.trimmed());
            continue;
        }
        let Some(person) = &refs[idx] else {
            out.push(line.clone());
            continue;
        };

        rewritten += 1;
        let ending = line.ending();
        match people.get(&person.slug) {
            Some(meta) => {
                let indent = line.indent();
                let fields: Vec<&str> = REPLACED_FIELDS
                    .iter()
                    .copied()
                    .filter(|key| hoisted[idx] != Some(*key))
                    .collect();
                let last = fields.len();
                out.push(Line::new(
                    person.unqualified(),
                    if last == 0 { ending } else { ending.or_lf() },
                ));
                for (n, key) in fields.into_iter().enumerate() {
                    let end = if n + 1 == last { ending } else { ending.or_lf() };
                    out.push(Line::field(indent, key, field_value(meta, key), end));
                }
                injected += 1;
            }
            None => {
                tracing::debug!(
                    "no metadata for '{}' (edition '{}'), qualifier removed only",
                    person.slug,
                    person.edition
                );
                out.push(Line::new(person.unqualified(), ending));
            }
        }
    }

    let replaced = replace.iter().filter(|r| r.is_some()).count();
    Injection {
        doc: out,
        rewritten,
        injected,
        dropped: drop.iter().filter(|d| **d).count() + replaced,
    }
}
