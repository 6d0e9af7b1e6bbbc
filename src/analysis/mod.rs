//! Kanji extraction and coverage analysis.
//!
//! Everything here is a pure function of its inputs: a
//! [`CharacterCatalog`] fetched from the API and a
//! [`DocumentCharacterSet`] read from disk.

pub mod coverage;
pub mod extract;
pub mod level;

pub use coverage::{coverage, coverage_table, uncovered_characters, CharacterCatalog, CoverageRow};
pub use extract::{extract_characters, is_kanji, DocumentCharacterSet};
pub use level::Level;
