//! Word entry representation
//!
//! A `WordEntry` stores a candidate word in its original display form together
//! with a canonical comparison form and a letter position index for reveals.

use super::letter::normalize_word;
use super::theme::Theme;
use rustc_hash::FxHashMap;
use std::fmt;

/// A word eligible for play, immutable once constructed
///
/// Stores the display form, the canonical (lowercase, diacritic-folded) form,
/// and a map from canonical letter to the positions it occupies. Canonical
/// length always equals display length, so reveal positions line up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    display: String,
    canonical: Vec<char>,
    letter_positions: FxHashMap<char, Vec<usize>>,
    theme: Option<Theme>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacters(String),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::InvalidCharacters(word) => {
                write!(f, "Word '{word}' contains non-letter characters")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl WordEntry {
    /// Create a new entry from its display form
    ///
    /// The canonical form is computed once here so every later comparison
    /// against a normalized guess is consistent.
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty after trimming, or if any
    /// character is not a letter once diacritics are folded.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::WordEntry;
    ///
    /// let word = WordEntry::new("Gato").unwrap();
    /// assert_eq!(word.display(), "Gato");
    /// assert!(word.has_letter('g'));
    ///
    /// assert!(WordEntry::new("C++").is_err());
    /// assert!(WordEntry::new("").is_err());
    /// ```
    pub fn new(display: impl Into<String>) -> Result<Self, WordError> {
        Self::with_theme(display, None)
    }

    /// Create a new entry tagged with the theme it was registered under
    ///
    /// # Errors
    /// Same conditions as [`WordEntry::new`].
    pub fn with_theme(
        display: impl Into<String>,
        theme: Option<Theme>,
    ) -> Result<Self, WordError> {
        let display: String = display.into().trim().to_string();

        if display.is_empty() {
            return Err(WordError::Empty);
        }

        let canonical: Vec<char> = normalize_word(&display).chars().collect();

        if canonical.len() != display.chars().count()
            || !canonical.iter().all(char::is_ascii_lowercase)
        {
            return Err(WordError::InvalidCharacters(display));
        }

        // Index positions per canonical letter for single-step reveals
        let mut letter_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in canonical.iter().enumerate() {
            letter_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            display,
            canonical,
            letter_positions,
            theme,
        })
    }

    /// Get the original display form
    #[inline]
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Get the canonical comparison form, one char per display char
    #[inline]
    #[must_use]
    pub fn canonical(&self) -> &[char] {
        &self.canonical
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    /// True if the word has no letters (never true for a constructed entry)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    /// Check whether a canonical letter occurs in the word
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letter_positions.contains_key(&letter)
    }

    /// All positions where a canonical letter appears
    ///
    /// Returns an empty slice if the letter does not occur.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// The theme this word was registered under, if any
    #[inline]
    #[must_use]
    pub const fn theme(&self) -> Option<Theme> {
        self.theme
    }

    /// The display character at a position (0-based)
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn display_char_at(&self, position: usize) -> char {
        self.display
            .chars()
            .nth(position)
            .expect("position validated against word length")
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display)
    }
}
