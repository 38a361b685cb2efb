//! Word pool loading utilities
//!
//! Functions to load word pools from files or convert embedded constants.

use crate::core::{Theme, WordEntry};
use std::fs;
use std::io;
use std::path::Path;

/// Load a word pool from a plain-text file, one word per line
///
/// Returns the valid entries, skipping blank lines and any entry that is not
/// letters-only.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("my_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<WordEntry>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                WordEntry::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to entries tagged with a theme
///
/// Invalid entries are skipped; the embedded pools are validated by tests so
/// none are skipped in practice.
///
/// # Examples
/// ```
/// use hangman::wordlists::{ANIMALS, loader::entries_from_slice};
/// use hangman::core::Theme;
///
/// let words = entries_from_slice(ANIMALS, Some(Theme::Animals));
/// assert_eq!(words.len(), ANIMALS.len());
/// ```
#[must_use]
pub fn entries_from_slice(slice: &[&str], theme: Option<Theme>) -> Vec<WordEntry> {
    slice
        .iter()
        .filter_map(|&s| WordEntry::with_theme(s, theme).ok())
        .collect()
}
