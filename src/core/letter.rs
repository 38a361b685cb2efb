//! Guess and word normalization
//!
//! All letter comparison in the game happens on a single canonical form:
//! lowercase ASCII with Latin diacritics folded to their base letter. The
//! mapping is an explicit fixed table rather than Unicode decomposition, so
//! behavior is identical on every platform and total for arbitrary input.

/// Fold a Latin diacritic to its base letter
///
/// Characters outside the table pass through unchanged. Input is expected to
/// be lowercase already; uppercase accented forms are handled by lowercasing
/// before the fold.
///
/// # Examples
/// ```
/// use hangman::core::fold_diacritic;
///
/// assert_eq!(fold_diacritic('á'), 'a');
/// assert_eq!(fold_diacritic('ñ'), 'n');
/// assert_eq!(fold_diacritic('x'), 'x');
/// ```
#[must_use]
pub const fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' | 'ã' => 'a',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' | 'õ' => 'o',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        _ => c,
    }
}

/// Normalize raw guess input to a single canonical letter
///
/// Strips surrounding whitespace, lowercases, and folds diacritics. Returns
/// `Some(letter)` only when the result is exactly one ASCII lowercase letter;
/// anything else (empty input, multiple characters, digits, punctuation)
/// yields `None`. Never panics.
///
/// Idempotent: normalizing an already-normalized letter returns it unchanged.
///
/// # Examples
/// ```
/// use hangman::core::normalize_guess;
///
/// assert_eq!(normalize_guess(" E "), Some('e'));
/// assert_eq!(normalize_guess("á"), Some('a'));
/// assert_eq!(normalize_guess("ab"), None);
/// assert_eq!(normalize_guess("7"), None);
/// ```
#[must_use]
pub fn normalize_guess(raw: &str) -> Option<char> {
    let mut chars = raw
        .trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(fold_diacritic);

    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_lowercase() => Some(c),
        _ => None,
    }
}

/// Normalize a whole word to its canonical comparison form
///
/// Applies the same per-character fold as [`normalize_guess`] so a secret word
/// and a guessed letter always compare in identical normal forms. Does not
/// validate; see [`crate::core::WordEntry::new`] for that.
#[must_use]
pub fn normalize_word(word: &str) -> String {
    word.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(fold_diacritic)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_plain_letter() {
        assert_eq!(normalize_guess("e"), Some('e'));
        assert_eq!(normalize_guess("Z"), Some('z'));
    }

    #[test]
    fn normalize_trims_whitespace() {
        // Scenario: " E " against a secret containing "e"
        assert_eq!(normalize_guess(" E "), Some('e'));
        assert_eq!(normalize_guess("\tq\n"), Some('q'));
    }

    #[test]
    fn normalize_folds_diacritics() {
        assert_eq!(normalize_guess("á"), Some('a'));
        assert_eq!(normalize_guess("É"), Some('e'));
        assert_eq!(normalize_guess("ü"), Some('u'));
        assert_eq!(normalize_guess("ñ"), Some('n'));
    }

    #[test]
    fn normalize_is_idempotent() {
        for c in 'a'..='z' {
            let normalized = normalize_guess(&c.to_string()).unwrap();
            assert_eq!(normalize_guess(&normalized.to_string()), Some(normalized));
        }
    }

    #[test]
    fn normalize_rejects_invalid_input() {
        assert_eq!(normalize_guess(""), None);
        assert_eq!(normalize_guess("   "), None);
        assert_eq!(normalize_guess("ab"), None);
        assert_eq!(normalize_guess("7"), None);
        assert_eq!(normalize_guess("!"), None);
        assert_eq!(normalize_guess("_"), None);
        assert_eq!(normalize_guess("🎉"), None);
    }

    #[test]
    fn normalize_never_panics_on_junk() {
        for input in ["\u{0}", "ß", "letter e", "ác", "１", "𝕖"] {
            let _ = normalize_guess(input);
        }
    }

    #[test]
    fn normalize_word_canonical_form() {
        assert_eq!(normalize_word("Gato"), "gato");
        assert_eq!(normalize_word("CamellO"), "camello");
        assert_eq!(normalize_word("canción"), "cancion");
        assert_eq!(normalize_word("  Ñandú "), "nandu");
    }
}
