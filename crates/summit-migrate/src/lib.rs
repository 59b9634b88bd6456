//! Summit Migrate - one-shot content migrations for the summit site
//!
//! Three independent pipelines over a local content tree:
//! - **flatten**: per-edition person records → one canonical record per
//!   person, with role and weight moved into each summit document
//! - **reorganize**: flat person records → per-edition subdirectories, plus
//!   archiving of the legacy posts directory
//! - **journal-club**: speaker/paper-url entries → speaker-name/links entries
//!
//! # Architecture
//!
//! ```text
//!                    ┌──────────────┐
//!   migrate.toml ──→ │ MigrateConfig│
//!                    └──────┬───────┘
//!          ┌────────────────┼─────────────────┐
//!          ▼                ▼                 ▼
//!      flatten::run   reorganize::run   journal_club::run
//!          │                │                 │
//!          ▼                ▼                 ▼
//!    FlattenReport   ReorganizeReport  JournalClubReport
//! ```
//!
//! Runs are sequential, not transactional and not idempotent: a failure
//! mid-run leaves whatever was already written on disk.
//!
//! # Example
//!
//! ```rust,ignore
//! use summit_migrate::{flatten, MigrateConfig};
//!
//! let config = MigrateConfig::rooted("/path/to/site");
//! let report = flatten::run(&config)?;
//! println!("{report}");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod config;
pub mod error;
pub mod flatten;
pub mod journal_club;
pub mod reorganize;
pub mod report;
pub mod walk;

// Re-exports for convenience
pub use config::MigrateConfig;
pub use error::{MigrateError, MigrateResult};
pub use reorganize::ReorganizeOptions;
pub use report::{
    ArchiveOutcome, FlattenReport, JournalClubReport, RecordMove, ReorganizeReport, SummitUpdate,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for running migrations
    pub use crate::{
        flatten, journal_club, reorganize, FlattenReport, JournalClubReport, MigrateConfig,
        MigrateError, MigrateResult, ReorganizeOptions, ReorganizeReport,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
