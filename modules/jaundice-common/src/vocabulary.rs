use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::error::{JaundiceError, Result};

/// Immutable set of normalized charged words.
///
/// Loaded once at startup and shared read-only (behind an `Arc`) across all
/// concurrently running pipelines; never mutated after construction, so no
/// locking is involved.
#[derive(Debug)]
pub struct ChargedVocabulary {
    words: HashSet<String>,
}

impl ChargedVocabulary {
    /// Load the vocabulary from a UTF-8 file: one word per line, blank lines
    /// and `#` comment lines ignored, words lowercased on the way in.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| JaundiceError::VocabularyIo {
            path: path.display().to_string(),
            source,
        })?;

        let vocabulary = Self::from_words(raw.lines());
        if vocabulary.is_empty() {
            return Err(JaundiceError::EmptyVocabulary(path.display().to_string()));
        }

        info!(path = %path.display(), words = vocabulary.len(), "Charged vocabulary loaded");
        Ok(vocabulary)
    }

    /// Build a vocabulary from an iterator of words. Used directly by tests.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty() && !w.starts_with('#'))
            .collect();
        Self { words }
    }

    /// Membership test on a normalized (lowercased) token.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_and_blank_lines() {
        let vocabulary =
            ChargedVocabulary::from_words(["# sensational words", "", "Outrage", "  scandal  "]);
        assert_eq!(vocabulary.len(), 2);
        assert!(vocabulary.contains("outrage"));
        assert!(vocabulary.contains("scandal"));
        assert!(!vocabulary.contains("# sensational words"));
    }

    #[test]
    fn lowercases_on_load() {
        let vocabulary = ChargedVocabulary::from_words(["FURY"]);
        assert!(vocabulary.contains("fury"));
        assert!(!vocabulary.contains("FURY"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "shocking\nbombshell\n").unwrap();
        let vocabulary = ChargedVocabulary::from_path(&path).unwrap();
        assert_eq!(vocabulary.len(), 2);
    }

    #[test]
    fn empty_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "# only a comment\n").unwrap();
        assert!(matches!(
            ChargedVocabulary::from_path(&path),
            Err(JaundiceError::EmptyVocabulary(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            ChargedVocabulary::from_path("/nonexistent/words.txt"),
            Err(JaundiceError::VocabularyIo { .. })
        ));
    }
}
