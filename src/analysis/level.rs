//! Proficiency levels.

use std::fmt;

/// A WaniKani proficiency level, always within `1..=60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u8);

impl Level {
    /// The first level.
    pub const MIN: Level = Level(1);
    /// The last level.
    pub const MAX: Level = Level(60);

    /// Create a level, returning `None` when `value` is outside `1..=60`.
    pub fn new(value: u32) -> Option<Self> {
        if (Self::MIN.0 as u32..=Self::MAX.0 as u32).contains(&value) {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    /// The numeric value of this level.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Every level in ascending order.
    pub fn all() -> impl Iterator<Item = Level> {
        (Self::MIN.0..=Self::MAX.0).map(Level)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
