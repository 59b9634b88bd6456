//! Summit content model
//!
//! The pieces of the site's content tree that the migrations need to reason
//! about, and nothing more:
//!
//! - [`Edition`]: the closed table of summit editions and their directory,
//!   summit and label forms
//! - [`parsers::parse_fields`]: naive `key: value` extraction
//! - [`LineDoc`]: an ordered, tagged line model that round-trips bytes exactly
//! - [`PersonRef`] / [`RoleMeta`]: organizer references inside summit documents
//!
//! # Architecture
//!
//! ```text
//! file text → LineDoc (tagged lines) → pure transformation → LineDoc → file text
//!                ↑
//!           parse_fields (flat scalar lookups)
//! ```
//!
//! Nothing in this crate touches the filesystem.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod edition;
pub mod error;
pub mod lines;
pub mod parsers;
pub mod person;

// Re-exports for convenience
pub use edition::Edition;
pub use error::{ContentError, ContentResult};
pub use lines::{Line, LineDoc, LineEnding, LineKind};
pub use parsers::{parse_fields, split_frontmatter, FieldMap, Frontmatter};
pub use person::{PersonRef, RoleMeta, DEFAULT_ROLE, DEFAULT_ROLE_WEIGHT, EDITION_SPECIFIC_FIELDS};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with summit content
    pub use crate::edition::Edition;
    pub use crate::lines::{Line, LineDoc, LineEnding, LineKind};
    pub use crate::parsers::{parse_fields, FieldMap};
    pub use crate::person::{PersonRef, RoleMeta};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
