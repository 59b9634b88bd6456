//! Naive content parsers
//!
//! Deliberately not YAML:
//! - [`parse_fields`] reads flat `key: value` lines into a map
//! - [`split_frontmatter`] separates a `---` delimited header from a body

mod fields;
mod frontmatter;

pub use fields::{parse_fields, unquote, FieldMap};
pub use frontmatter::{split_frontmatter, Frontmatter};
