//! Kanji extraction from local text.
//!
//! Only the CJK Unified Ideographs block up to U+9FAF counts as kanji here.
//! Kana, punctuation, Latin text and the CJK extension blocks are ignored.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{CoverageError, Result};

/// First code point treated as kanji.
pub const KANJI_FIRST: char = '\u{4e00}';
/// Last code point treated as kanji.
pub const KANJI_LAST: char = '\u{9faf}';

/// Check whether a character falls in the kanji range.
pub fn is_kanji(c: char) -> bool {
    (KANJI_FIRST..=KANJI_LAST).contains(&c)
}

/// The distinct kanji of a document, in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentCharacterSet {
    chars: Vec<char>,
}

impl DocumentCharacterSet {
    /// Collect the distinct kanji of `text`.
    pub fn from_text(text: &str) -> Self {
        let mut seen = HashSet::new();
        let chars = text
            .chars()
            .filter(|&c| is_kanji(c) && seen.insert(c))
            .collect();
        Self { chars }
    }

    /// Number of distinct kanji.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if no kanji were found.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Iterate the kanji in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    /// View the kanji as a slice.
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}

/// Read the file at `path` and extract its distinct kanji.
pub fn extract_characters(path: &Path) -> Result<DocumentCharacterSet> {
    let text = std::fs::read_to_string(path).map_err(|e| CoverageError::FileAccess {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let set = DocumentCharacterSet::from_text(&text);
    tracing::debug!(
        "Read {} bytes from {}, {} distinct kanji",
        text.len(),
        path.display(),
        set.len()
    );
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn range_bounds_are_inclusive() {
        assert!(is_kanji('\u{4e00}'));
        assert!(is_kanji('\u{9faf}'));
        assert!(!is_kanji('\u{4dff}'));
        assert!(!is_kanji('\u{9fb0}'));
    }

    #[test]
    fn kana_and_latin_are_not_kanji() {
        assert!(!is_kanji('あ'));
        assert!(!is_kanji('カ'));
        assert!(!is_kanji('。'));
        assert!(!is_kanji('A'));
    }

    #[test]
    fn extension_b_is_excluded() {
        assert!(!is_kanji('\u{20000}'));
    }

    #[test]
    fn keeps_first_occurrence_order() {
        let set = DocumentCharacterSet::from_text("本日は日本の本を読む。");
        assert_eq!(set.as_slice(), &['本', '日', '読']);
    }

    #[test]
    fn drops_duplicates_and_out_of_range_characters() {
        let text = "Hello 世界! こんにちは、世界。\u{20000}\u{9fb0}";
        let set = DocumentCharacterSet::from_text(text);
        assert_eq!(set.as_slice(), &['世', '界']);

        let unique: HashSet<char> = set.iter().collect();
        assert_eq!(unique.len(), set.len());
        assert!(set.iter().all(is_kanji));
    }

    #[test]
    fn text_without_kanji_is_empty() {
        let set = DocumentCharacterSet::from_text("ひらがなとカタカナだけ");
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn extract_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("text.txt");
        fs::write(&path, "吾輩は猫である。名前はまだ無い。").unwrap();

        let set = extract_characters(&path).unwrap();
        assert_eq!(set.as_slice(), &['吾', '輩', '猫', '名', '前', '無']);
    }

    #[test]
    fn extract_missing_file_is_file_access_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.txt");

        let err = extract_characters(&path).unwrap_err();
        match err {
            CoverageError::FileAccess { path: p, .. } => assert_eq!(p, path),
            other => panic!("Expected FileAccess, got {other:?}"),
        }
    }

    #[test]
    fn extract_directory_is_file_access_error() {
        let temp = TempDir::new().unwrap();
        let err = extract_characters(temp.path()).unwrap_err();
        assert!(matches!(err, CoverageError::FileAccess { .. }));
    }
}
