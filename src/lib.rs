//! kanji-coverage - how much of a text can a WaniKani learner read?
//!
//! The tool downloads the level at which WaniKani teaches each kanji,
//! extracts the distinct kanji of a local text file, and reports for every
//! level from 1 to 60 the share of those kanji a learner at that level
//! already knows.
//!
//! # Modules
//!
//! - [`analysis`] - Kanji extraction and coverage statistics
//! - [`api`] - WaniKani authentication and catalog download
//! - [`cli`] - Command-line interface and the coverage run
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Themed terminal output
//!
//! # Example
//!
//! ```
//! use kanji_coverage::analysis::{coverage, CharacterCatalog, DocumentCharacterSet, Level};
//!
//! let catalog: CharacterCatalog = [('日', Level::MIN), ('本', Level::new(3).unwrap())]
//!     .into_iter()
//!     .collect();
//! let doc = DocumentCharacterSet::from_text("日本語の本");
//!
//! assert_eq!(coverage(Level::MIN, &catalog, &doc), 33);
//! assert_eq!(coverage(Level::MAX, &catalog, &doc), 66);
//! ```

pub mod analysis;
pub mod api;
pub mod cli;
pub mod error;
pub mod ui;

pub use error::{CoverageError, Result};
