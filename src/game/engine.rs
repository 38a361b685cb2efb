//! Round engine
//!
//! Owns the word source, the random source, and at most one active round.
//! Presenters read state through [`RoundEngine::current_display`] and
//! [`RoundEngine::reveal_secret`] and submit guesses through
//! [`RoundEngine::process_guess`]; nothing else mutates the round.

use super::round::{GuessOutcome, RejectReason, RoundState, RoundStatus};
use crate::core::Theme;
use crate::wordlists::{EmptyPoolError, WordSource};
use rand::Rng;

/// Read-only snapshot of the active round for presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySnapshot {
    /// One char per secret position, placeholder where unguessed
    pub revealed: String,
    /// Letters submitted so far, sorted
    pub used_letters: Vec<char>,
    pub attempts_remaining: u8,
    pub status: RoundStatus,
    /// Index into the figure art sequence, `0..=MAX_ATTEMPTS`
    pub figure_stage: u8,
}

/// Owns one active round and enforces the guess protocol
pub struct RoundEngine<R: Rng> {
    source: WordSource,
    rng: R,
    round: Option<RoundState>,
}

impl<R: Rng> RoundEngine<R> {
    /// Create an engine over a word source and a random source
    ///
    /// The random source is injected so tests can drive selection with a
    /// seeded generator.
    pub const fn new(source: WordSource, rng: R) -> Self {
        Self {
            source,
            rng,
            round: None,
        }
    }

    /// The word source backing this engine
    #[must_use]
    pub const fn source(&self) -> &WordSource {
        &self.source
    }

    /// Start a new round, drawing a word for `theme` (or the default pool)
    ///
    /// On success the previous round, if any, is atomically replaced.
    ///
    /// # Errors
    /// Propagates [`EmptyPoolError`] when the selected pool has no words; the
    /// previous round state is left untouched in that case.
    pub fn start_round(&mut self, theme: Option<Theme>) -> Result<(), EmptyPoolError> {
        let secret = self.source.pick(theme, &mut self.rng)?.clone();
        self.round = Some(RoundState::new(secret));
        Ok(())
    }

    /// Submit one raw guess against the active round
    ///
    /// With no active round the outcome is `Rejected(RoundOver)`, the same
    /// signal as guessing after a win or loss: a new round must be started.
    pub fn process_guess(&mut self, raw: &str) -> GuessOutcome {
        match self.round.as_mut() {
            Some(round) => round.process_guess(raw),
            None => GuessOutcome::Rejected(RejectReason::RoundOver),
        }
    }

    /// Snapshot the active round for rendering; `None` before the first round
    #[must_use]
    pub fn current_display(&self) -> Option<DisplaySnapshot> {
        self.round.as_ref().map(|round| DisplaySnapshot {
            revealed: round.revealed().iter().collect(),
            used_letters: round.used_letters().collect(),
            attempts_remaining: round.attempts_remaining(),
            status: round.status(),
            figure_stage: round.figure_stage(),
        })
    }

    /// The secret's display form, for end-of-round messaging
    #[must_use]
    pub fn reveal_secret(&self) -> Option<&str> {
        self.round.as_ref().map(|round| round.secret().display())
    }
}
