//! Single journal-club entry rewrite
//!
//! Old shape:
//!
//! ```text
//! speaker: Dr. Name (Affiliation)
//! paperUrl: https://...
//! ```
//!
//! New shape:
//!
//! ```text
//! speakerName: Dr. Name
//! speakerAffiliation: Affiliation
//! links:
//!   - label: Paper
//!     url: https://...
//!     isPrimary: true
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{self, Display, Formatter};
use summit_content::{parse_fields, split_frontmatter, FieldMap, Line, LineDoc, LineEnding};

static SPEAKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<name>.+?)\s*\((?P<affiliation>[^)]+)\)\s*$")
        .unwrap_or_else(|e| panic!("speaker pattern must compile: {e}"))
});

const CODE_HOSTS: [&str; 1] = ["github.com"];
const PAPER_HOSTS: [&str; 7] = [
    "doi.org",
    "wiley.com",
    "oup.com",
    "nature.com",
    "science.org",
    "pnas.org",
    "ncbi.nlm.nih.gov",
];
const PREPRINT_HOSTS: [&str; 3] = ["arxiv.org", "biorxiv.org", "medrxiv.org"];

/// Speaker split into name and affiliation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Speaker {
    /// Display name, e.g. `Dr. Ada Lovelace`
    pub name: Option<String>,
    /// Institution from the trailing parenthetical
    pub affiliation: Option<String>,
}

/// Kind of resource a link points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkLabel {
    /// Source repository
    Code,
    /// Published paper
    Paper,
    /// Preprint server
    Preprint,
    /// Anything else
    Link,
}

impl LinkLabel {
    /// Label text as written to the frontmatter
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Code => "Code",
            Self::Paper => "Paper",
            Self::Preprint => "Preprint",
            Self::Link => "Link",
        }
    }
}

impl Display for LinkLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labelled link in the new frontmatter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLink {
    /// Detected label
    pub label: LinkLabel,
    /// Target URL
    pub url: String,
}

/// What happened to one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Rewritten; `content` replaces the file
    Migrated {
        /// New file content
        content: String,
        /// Parsed speaker
        speaker: Speaker,
        /// Link built from the paper URL
        link: Option<EntryLink>,
    },
    /// Already carries `speakerName`
    AlreadyMigrated,
    /// No `---` frontmatter block
    NoFrontmatter,
}

/// Split `Name (Affiliation)`; without a trailing parenthetical the whole
/// trimmed string is the name. Empty parts come back as `None`.
#[must_use]
pub fn parse_speaker(raw: &str) -> Speaker {
    let non_empty = |s: &str| Some(s.trim().to_string()).filter(|s| !s.is_empty());
    match SPEAKER.captures(raw) {
        Some(caps) => Speaker {
            name: caps.name("name").and_then(|m| non_empty(m.as_str())),
            affiliation: caps.name("affiliation").and_then(|m| non_empty(m.as_str())),
        },
        None => Speaker {
            name: non_empty(raw),
            affiliation: None,
        },
    }
}

/// Label a URL by its host, case-insensitively
#[must_use]
pub fn detect_link_label(url: &str) -> LinkLabel {
    let url = url.to_lowercase();
    let hit = |hosts: &[&str]| hosts.iter().any(|h| url.contains(h));
    if hit(&CODE_HOSTS) {
        LinkLabel::Code
    } else if hit(&PAPER_HOSTS) {
        LinkLabel::Paper
    } else if hit(&PREPRINT_HOSTS) {
        LinkLabel::Preprint
    } else {
        LinkLabel::Link
    }
}

/// Rewrite one entry's content
#[must_use]
pub fn migrate_entry(content: &str) -> EntryOutcome {
    let Some(frontmatter) = split_frontmatter(content) else {
        return EntryOutcome::NoFrontmatter;
    };
    let fields = parse_fields(frontmatter.header);
    if fields.contains("speakerName") {
        return EntryOutcome::AlreadyMigrated;
    }

    let speaker = fields.get("speaker").map(parse_speaker).unwrap_or_default();
    let link = fields.get_non_empty("paperUrl").map(|url| EntryLink {
        label: detect_link_label(url),
        url: url.to_string(),
    });

    let header = build_frontmatter(&fields, &speaker, link.as_ref());
    EntryOutcome::Migrated {
        content: format!("{}{}", header.render_lf(), frontmatter.body),
        speaker,
        link,
    }
}

fn build_frontmatter(fields: &FieldMap, speaker: &Speaker, link: Option<&EntryLink>) -> LineDoc {
    let lf = LineEnding::Lf;
    let mut doc = LineDoc::new();
    doc.push(Line::new("---", lf));
    doc.push(scalar("title", fields.get("title")));
    doc.push(scalar("date", fields.get("date")));
    let pinned = fields.get_non_empty("isPinned").unwrap_or("false");
    doc.push(Line::field("", "isPinned", pinned, lf));

    if let Some(name) = &speaker.name {
        doc.push(Line::field("", "speakerName", name, lf));
    }
    if let Some(affiliation) = &speaker.affiliation {
        doc.push(Line::field("", "speakerAffiliation", affiliation, lf));
    }
    if let Some(link) = link {
        doc.push(Line::new("links:", lf));
        doc.push(Line::field("  - ", "label", link.label, lf));
        doc.push(Line::field("    ", "url", &link.url, lf));
        doc.push(Line::field("    ", "isPrimary", true, lf));
    }

    doc.push(Line::new("---", lf));
    doc
}

/// `key: value`, or a bare `key:` when the value is missing
fn scalar(key: &str, value: Option<&str>) -> Line {
    match value {
        Some(value) => Line::field("", key, value, LineEnding::Lf),
        None => Line::new(format!("{key}:"), LineEnding::Lf),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn speaker_with_affiliation() {
        assert_eq!(
            parse_speaker("Dr. Gytis Dudas (Vilnius University)"),
            Speaker {
                name: Some("Dr. Gytis Dudas".into()),
                affiliation: Some("Vilnius University".into()),
            }
        );
    }

    #[test]
    fn speaker_uses_last_parenthetical() {
        let speaker = parse_speaker("Ada (Lovelace) King (Analytical Engines Ltd) ");
        assert_eq!(speaker.name.as_deref(), Some("Ada (Lovelace) King"));
        assert_eq!(speaker.affiliation.as_deref(), Some("Analytical Engines Ltd"));
    }

    #[test]
    fn speaker_without_affiliation() {
        assert_eq!(
            parse_speaker("  Dr. Name "),
            Speaker {
                name: Some("Dr. Name".into()),
                affiliation: None,
            }
        );
        assert_eq!(parse_speaker("   "), Speaker::default());
    }

    #[test]
    fn link_labels() {
        assert_eq!(detect_link_label("https://GitHub.com/x/y"), LinkLabel::Code);
        assert_eq!(detect_link_label("https://doi.org/10.1/abc"), LinkLabel::Paper);
        assert_eq!(
            detect_link_label("https://www.ncbi.nlm.nih.gov/pmc/1"),
            LinkLabel::Paper
        );
        assert_eq!(detect_link_label("https://www.biorxiv.org/content/1"), LinkLabel::Preprint);
        assert_eq!(detect_link_label("https://example.com/talk"), LinkLabel::Link);
    }

    #[test]
    fn migrates_old_shape() {
        let content = "\
---
title: \"Viral polymerases\"
date: 2024-03-01
speaker: Dr. Ada King (Uni Lisbon)
paperUrl: https://doi.org/10.1000/xyz
zoomUrl: https://zoom.example/1
---
Talk abstract.
";
        let EntryOutcome::Migrated { content, speaker, link } = migrate_entry(content) else {
            panic!("expected migration");
        };
        assert_eq!(
            content,
            "\
---
title: Viral polymerases
date: 2024-03-01
isPinned: false
speakerName: Dr. Ada King
speakerAffiliation: Uni Lisbon
links:
  - label: Paper
    url: https://doi.org/10.1000/xyz
    isPrimary: true
---
Talk abstract.
"
        );
        assert_eq!(speaker.affiliation.as_deref(), Some("Uni Lisbon"));
        assert_eq!(link.map(|l| l.label), Some(LinkLabel::Paper));
    }

    #[test]
    fn keeps_pinned_and_omits_absent_parts() {
        let content = "---\ntitle: T\ndate: D\nisPinned: true\nspeaker: Bo\npaperUrl: \"\"\n---\n";
        let EntryOutcome::Migrated { content, link, .. } = migrate_entry(content) else {
            panic!("expected migration");
        };
        assert_eq!(
            content,
            "---\ntitle: T\ndate: D\nisPinned: true\nspeakerName: Bo\n---\n"
        );
        assert_eq!(link, None);
    }

    #[test]
    fn missing_title_and_date_are_bare_keys() {
        let EntryOutcome::Migrated { content, .. } = migrate_entry("---\nspeaker: Bo\n---\nbody")
        else {
            panic!("expected migration");
        };
        assert_eq!(content, "---\ntitle:\ndate:\nisPinned: false\nspeakerName: Bo\n---\nbody");
    }

    #[test]
    fn already_migrated_and_no_frontmatter() {
        assert_eq!(
            migrate_entry("---\ntitle: T\nspeakerName: Bo\n---\n"),
            EntryOutcome::AlreadyMigrated
        );
        assert_eq!(migrate_entry("just a body\n"), EntryOutcome::NoFrontmatter);
        assert_eq!(migrate_entry("---\ntitle: unterminated\n"), EntryOutcome::NoFrontmatter);
    }

    #[test]
    fn migrated_output_is_recognized_as_migrated() {
        let EntryOutcome::Migrated { content, .. } =
            migrate_entry("---\ntitle: T\ndate: D\nspeaker: Ada (Uni)\n---\nx\n")
        else {
            panic!("expected migration");
        };
        assert_eq!(migrate_entry(&content), EntryOutcome::AlreadyMigrated);
    }

    proptest! {
        #[test]
        fn prop_body_is_preserved(body in "[a-zA-Z0-9 .\n-]{0,80}") {
            let content = format!("---\ntitle: T\nspeaker: Ada\n---\n{body}");
            let want = format!("\n---\n{body}");
            match migrate_entry(&content) {
                EntryOutcome::Migrated { content, .. } => {
                    prop_assert!(content.ends_with(&want), "body not preserved: {:?}", content);
                }
                other => prop_assert!(false, "unexpected outcome {:?}", other),
            }
        }
    }
}
