//! Word source
//!
//! Holds the candidate pools, partitioned by theme plus one default pool, and
//! yields one word per request. Random selection is driven by an injected
//! generator so selection is reproducible under test.

use super::loader::entries_from_slice;
use crate::core::{Theme, WordEntry};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;

/// No word available for the requested pool
///
/// Fatal to starting a round; the caller decides whether to pick another
/// theme or abort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyPoolError {
    pub theme: Option<Theme>,
}

impl fmt::Display for EmptyPoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.theme {
            Some(theme) => write!(f, "No words available for theme '{theme}'"),
            None => write!(f, "No words available in the default pool"),
        }
    }
}

impl std::error::Error for EmptyPoolError {}

/// Pool of candidate words, one pool per theme plus a themeless default
pub struct WordSource {
    animals: Vec<WordEntry>,
    sports: Vec<WordEntry>,
    languages: Vec<WordEntry>,
    default_pool: Vec<WordEntry>,
}

impl WordSource {
    /// Source backed by the embedded pools
    #[must_use]
    pub fn built_in() -> Self {
        Self {
            animals: entries_from_slice(super::ANIMALS, Some(Theme::Animals)),
            sports: entries_from_slice(super::SPORTS, Some(Theme::Sports)),
            languages: entries_from_slice(super::LANGUAGES, Some(Theme::ProgrammingLanguages)),
            default_pool: entries_from_slice(super::DEFAULT_POOL, None),
        }
    }

    /// Source whose default pool is the given words; themed pools are empty
    ///
    /// Used for custom word lists and for tests that need a known pool.
    #[must_use]
    pub fn from_words(words: &[&str]) -> Self {
        Self {
            animals: Vec::new(),
            sports: Vec::new(),
            languages: Vec::new(),
            default_pool: entries_from_slice(words, None),
        }
    }

    /// Source with the embedded themed pools but a custom default pool
    #[must_use]
    pub fn with_default_pool(words: Vec<WordEntry>) -> Self {
        Self {
            default_pool: words,
            ..Self::built_in()
        }
    }

    /// The themes this source can serve
    #[must_use]
    pub fn list_themes() -> &'static [Theme] {
        &Theme::ALL
    }

    /// Pick one word uniformly at random from a theme's pool
    ///
    /// With no theme, picks from the default pool.
    ///
    /// # Errors
    /// Returns [`EmptyPoolError`] if the selected pool has zero entries.
    pub fn pick(
        &self,
        theme: Option<Theme>,
        rng: &mut impl Rng,
    ) -> Result<&WordEntry, EmptyPoolError> {
        self.pool(theme)
            .choose(rng)
            .ok_or(EmptyPoolError { theme })
    }

    /// Number of words registered under a theme (or the default pool)
    #[must_use]
    pub fn pool_len(&self, theme: Option<Theme>) -> usize {
        self.pool(theme).len()
    }

    fn pool(&self, theme: Option<Theme>) -> &[WordEntry] {
        match theme {
            Some(Theme::Animals) => &self.animals,
            Some(Theme::Sports) => &self.sports,
            Some(Theme::ProgrammingLanguages) => &self.languages,
            None => &self.default_pool,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn built_in_pools_are_populated() {
        let source = WordSource::built_in();
        for theme in Theme::ALL {
            assert!(source.pool_len(Some(theme)) > 0, "empty pool for {theme}");
        }
        assert!(source.pool_len(None) > 0);
    }

    #[test]
    fn pick_draws_from_requested_theme() {
        let source = WordSource::built_in();
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..20 {
            let word = source.pick(Some(Theme::Animals), &mut rng).unwrap();
            assert_eq!(word.theme(), Some(Theme::Animals));
        }
    }

    #[test]
    fn pick_without_theme_uses_default_pool() {
        let source = WordSource::from_words(&["Gato", "Pato"]);
        let mut rng = StdRng::seed_from_u64(1);

        let word = source.pick(None, &mut rng).unwrap();
        assert!(["Gato", "Pato"].contains(&word.display()));
    }

    #[test]
    fn pick_from_empty_pool_fails() {
        let source = WordSource::from_words(&[]);
        let mut rng = StdRng::seed_from_u64(1);

        let err = source.pick(None, &mut rng).unwrap_err();
        assert_eq!(err.theme, None);

        let err = source.pick(Some(Theme::Sports), &mut rng).unwrap_err();
        assert_eq!(err.theme, Some(Theme::Sports));
    }

    #[test]
    fn pick_is_deterministic_under_a_seed() {
        let source = WordSource::built_in();

        let first: Vec<String> = {
            let mut rng = StdRng::seed_from_u64(99);
            (0..10)
                .map(|_| source.pick(None, &mut rng).unwrap().display().to_string())
                .collect()
        };
        let second: Vec<String> = {
            let mut rng = StdRng::seed_from_u64(99);
            (0..10)
                .map(|_| source.pick(None, &mut rng).unwrap().display().to_string())
                .collect()
        };

        assert_eq!(first, second);
    }

    #[test]
    fn list_themes_matches_enum() {
        assert_eq!(WordSource::list_themes(), &Theme::ALL);
    }
}
