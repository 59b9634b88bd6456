//! Flat `key: value` extraction
//!
//! Each line is split at its first colon; key and value are trimmed and one
//! layer of matching quotes is removed from the value. Lines without a colon
//! are ignored and a repeated key keeps its last value. Anything nested,
//! listed or spanning several lines comes out wrong or not at all.

use indexmap::IndexMap;

/// Parsed fields in first-seen key order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    fields: IndexMap<String, String>,
}

impl FieldMap {
    /// Create empty map
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `key`
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Value for `key`, or `default` when absent
    #[inline]
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Value for `key` when present and non-empty
    #[inline]
    #[must_use]
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Whether `key` was seen
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Insert or overwrite a field
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Number of distinct keys
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field was parsed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate `(key, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Parse every `key: value` line of `content`
#[must_use]
pub fn parse_fields(content: &str) -> FieldMap {
    let mut map = FieldMap::new();
    for line in content.lines() {
        if let Some((key, value)) = line.split_once(':') {
            map.insert(key.trim(), unquote(value.trim()));
        }
    }
    map
}

/// Strip one layer of matching `"` or `'` quotes
#[must_use]
pub fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
