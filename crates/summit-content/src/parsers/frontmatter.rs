//! Frontmatter splitting for `.mdoc` documents

use once_cell::sync::Lazy;
use regex::Regex;

static FRONTMATTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A---\n(?P<header>[\s\S]*?)\n---\n(?P<body>[\s\S]*)\z")
        .unwrap_or_else(|e| panic!("frontmatter pattern must compile: {e}"))
});

/// A document split into its `---` header and the remaining body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frontmatter<'a> {
    /// Text between the delimiters, without them
    pub header: &'a str,
    /// Everything after the closing delimiter line
    pub body: &'a str,
}

/// Split `---\n<header>\n---\n<body>`; `None` if the document does not open
/// with a closed frontmatter block
#[must_use]
pub fn split_frontmatter(content: &str) -> Option<Frontmatter<'_>> {
    let caps = FRONTMATTER.captures(content)?;
    Some(Frontmatter {
        header: caps.name("header")?.as_str(),
        body: caps.name("body")?.as_str(),
    })
}
