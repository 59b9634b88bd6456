//! Tagged line model
//!
//! Content files are treated as an ordered sequence of lines. Each line keeps
//! its original text and terminator so that an untouched document renders
//! back byte-for-byte, and carries a syntactic tag so transformations can be
//! expressed as pure functions over the sequence instead of string surgery.

use std::fmt::{self, Display, Formatter};

/// Line terminator as found in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
    /// Last line of a file without a trailing newline
    None,
}

impl LineEnding {
    /// Terminator text
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::None => "",
        }
    }

    /// This ending, or `\n` if the line was unterminated
    #[inline]
    #[must_use]
    pub const fn or_lf(self) -> Self {
        match self {
            Self::None => Self::Lf,
            other => other,
        }
    }
}

/// Syntactic classification of a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace only
    Blank,
    /// Anything that is not a `key: value` shape
    Plain,
    /// `key: value` (or `key:`), possibly indented
    Field {
        /// Field name
        key: String,
    },
    /// `- ...` list entry, optionally opening with a field
    ListItem {
        /// Field name following the marker, if any
        key: Option<String>,
    },
}

/// A single line of a content file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    text: String,
    ending: LineEnding,
    kind: LineKind,
}

impl Line {
    /// Create a line from its text (without terminator)
    #[must_use]
    pub fn new(text: impl Into<String>, ending: LineEnding) -> Self {
        let text = text.into();
        let kind = classify(&text);
        Self { text, ending, kind }
    }

    /// Build `<indent><key>: <value>`
    #[must_use]
    pub fn field(indent: &str, key: &str, value: impl Display, ending: LineEnding) -> Self {
        Self::new(format!("{indent}{key}: {value}"), ending)
    }

    /// Line text without terminator
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Line terminator
    #[inline]
    #[must_use]
    pub fn ending(&self) -> LineEnding {
        self.ending
    }

    /// Syntactic tag
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &LineKind {
        &self.kind
    }

    /// Text with surrounding whitespace removed
    #[inline]
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Leading whitespace
    #[must_use]
    pub fn indent(&self) -> &str {
        let body = self.text.trim_start();
        &self.text[..self.text.len() - body.len()]
    }

    /// Width of the leading whitespace in bytes
    #[inline]
    #[must_use]
    pub fn indent_width(&self) -> usize {
        self.indent().len()
    }

    /// Column at which this line's content starts.
    ///
    /// For list items this is past the `- ` marker, i.e. the column that
    /// sibling fields of the same entry are indented to.
    #[must_use]
    pub fn body_column(&self) -> usize {
        let body = self.text.trim_start();
        match self.kind {
            LineKind::ListItem { .. } => {
                let after_marker = body[1..].trim_start();
                self.text.len() - after_marker.len()
            }
            _ => self.text.len() - body.len(),
        }
    }

    /// Field name, for field lines and list items opening with a field
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match &self.kind {
            LineKind::Field { key } => Some(key),
            LineKind::ListItem { key } => key.as_deref(),
            LineKind::Blank | LineKind::Plain => None,
        }
    }

    /// Whether this is a (non list item) field line named `key`
    #[inline]
    #[must_use]
    pub fn is_field(&self, key: &str) -> bool {
        matches!(&self.kind, LineKind::Field { key: k } if k == key)
    }

    /// Whether the trimmed text starts with `prefix`
    #[inline]
    #[must_use]
    pub fn starts_with_trimmed(&self, prefix: &str) -> bool {
        self.trimmed().starts_with(prefix)
    }

    /// Whether this line is blank
    #[inline]
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.kind == LineKind::Blank
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)?;
        f.write_str(self.ending.as_str())
    }
}

/// Ordered sequence of lines making up one content file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineDoc {
    lines: Vec<Line>,
}

impl LineDoc {
    /// Create empty document
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Split text into lines, keeping each line's terminator
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let lines = text
            .split_inclusive('\n')
            .map(|raw| {
                if let Some(body) = raw.strip_suffix("\r\n") {
                    Line::new(body, LineEnding::CrLf)
                } else if let Some(body) = raw.strip_suffix('\n') {
                    Line::new(body, LineEnding::Lf)
                } else {
                    Line::new(raw, LineEnding::None)
                }
            })
            .collect();
        Self { lines }
    }

    /// Lines in order
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document has no lines
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over lines
    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    /// Append a line
    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Keep only the lines matching `keep`, preserving order
    #[must_use]
    pub fn retain(mut self, mut keep: impl FnMut(&Line) -> bool) -> Self {
        self.lines.retain(|line| keep(line));
        self
    }

    /// Render with every line's original terminator
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Render with `\n` between lines and exactly one trailing `\n`
    #[must_use]
    pub fn render_lf(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line.text());
            out.push('\n');
        }
        out
    }
}

impl Display for LineDoc {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            Display::fmt(line, f)?;
        }
        Ok(())
    }
}

impl FromIterator<Line> for LineDoc {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for LineDoc {
    type Item = Line;
    type IntoIter = std::vec::IntoIter<Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

impl<'a> IntoIterator for &'a LineDoc {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

fn classify(text: &str) -> LineKind {
    let body = text.trim_start();
    if body.trim_end().is_empty() {
        return LineKind::Blank;
    }
    if let Some(rest) = body.strip_prefix('-') {
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return LineKind::ListItem {
                key: field_key(rest.trim_start()).map(str::to_string),
            };
        }
    }
    match field_key(body) {
        Some(key) => LineKind::Field {
            key: key.to_string(),
        },
        None => LineKind::Plain,
    }
}

/// `key` of `key: value` / `key:`; the key may not contain whitespace and the
/// colon must be followed by whitespace or end of line
fn field_key(body: &str) -> Option<&str> {
    let colon = body.find(':')?;
    let key = &body[..colon];
    let after = &body[colon + 1..];
    if key.is_empty() || key.contains(char::is_whitespace) {
        return None;
    }
    if !(after.is_empty() || after.starts_with(char::is_whitespace)) {
        return None;
    }
    Some(key)
}
