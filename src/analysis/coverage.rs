//! Per-level coverage statistics.

use std::collections::HashMap;

use super::extract::DocumentCharacterSet;
use super::level::Level;

/// Mapping from each kanji to the level that introduces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterCatalog {
    levels: HashMap<char, Level>,
}

impl CharacterCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the level of a character, returning the level it replaced.
    pub(crate) fn insert(&mut self, c: char, level: Level) -> Option<Level> {
        self.levels.insert(c, level)
    }

    /// Level at which `c` is introduced, if it is in the catalog.
    pub fn level_of(&self, c: char) -> Option<Level> {
        self.levels.get(&c).copied()
    }

    /// Check whether `c` is known by a learner at `level`.
    pub fn is_known_at(&self, c: char, level: Level) -> bool {
        self.level_of(c).is_some_and(|introduced| introduced <= level)
    }

    /// Number of characters in the catalog.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl FromIterator<(char, Level)> for CharacterCatalog {
    fn from_iter<I: IntoIterator<Item = (char, Level)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (c, level) in iter {
            catalog.insert(c, level);
        }
        catalog
    }
}

/// Coverage of a document at one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageRow {
    /// The learner level.
    pub level: Level,
    /// Percentage of the document's kanji known at `level`, truncated.
    pub percent: u32,
}

/// Percentage of `doc`'s kanji known at `level`, truncated to an integer.
///
/// An empty document has 0% coverage at every level.
pub fn coverage(level: Level, catalog: &CharacterCatalog, doc: &DocumentCharacterSet) -> u32 {
    if doc.is_empty() {
        return 0;
    }

    let known = doc.iter().filter(|&c| catalog.is_known_at(c, level)).count();
    (known * 100 / doc.len()) as u32
}

/// Coverage for every level from 1 to 60.
pub fn coverage_table(catalog: &CharacterCatalog, doc: &DocumentCharacterSet) -> Vec<CoverageRow> {
    Level::all()
        .map(|level| CoverageRow {
            level,
            percent: coverage(level, catalog, doc),
        })
        .collect()
}

/// Kanji of `doc` that the catalog does not teach at any level.
pub fn uncovered_characters(catalog: &CharacterCatalog, doc: &DocumentCharacterSet) -> Vec<char> {
    doc.iter().filter(|&c| catalog.level_of(c).is_none()).collect()
}
