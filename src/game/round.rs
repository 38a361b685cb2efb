//! One round of hangman
//!
//! A `RoundState` is created when a round starts, mutated only through
//! [`RoundState::process_guess`], and replaced wholesale when a new round
//! begins. Guess rejections are values, never errors: any input at all is
//! answered with a [`GuessOutcome`].

use crate::core::{WordEntry, normalize_guess};
use std::collections::BTreeSet;

/// Wrong guesses allowed before the round is lost
pub const MAX_ATTEMPTS: u8 = 6;

/// Placeholder for an unguessed position
pub const PLACEHOLDER: char = '_';

/// Round progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// Why a guess was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Input did not normalize to exactly one letter
    InvalidInput,
    /// The round is already won or lost
    RoundOver,
    /// The letter was submitted earlier this round
    AlreadyUsed,
}

/// Result of submitting a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess was scored; `hit` is true if the letter is in the word
    Accepted { hit: bool },
    /// The guess was not scored and the round state is unchanged
    Rejected(RejectReason),
}

/// State of the active round
#[derive(Debug, Clone)]
pub struct RoundState {
    secret: WordEntry,
    revealed: Vec<char>,
    used_letters: BTreeSet<char>,
    attempts_remaining: u8,
    status: RoundStatus,
}

impl RoundState {
    /// Start a round on the given secret
    #[must_use]
    pub fn new(secret: WordEntry) -> Self {
        let revealed = vec![PLACEHOLDER; secret.len()];
        Self {
            secret,
            revealed,
            used_letters: BTreeSet::new(),
            attempts_remaining: MAX_ATTEMPTS,
            status: RoundStatus::InProgress,
        }
    }

    /// Process one raw guess
    ///
    /// Normalizes, validates, and scores the input in that order. Rejected
    /// guesses leave the round untouched. A hit reveals every position of the
    /// letter in one step; a miss costs one attempt. Status is recomputed
    /// unconditionally after every scored guess.
    pub fn process_guess(&mut self, raw: &str) -> GuessOutcome {
        let Some(letter) = normalize_guess(raw) else {
            return GuessOutcome::Rejected(RejectReason::InvalidInput);
        };

        if self.status != RoundStatus::InProgress {
            return GuessOutcome::Rejected(RejectReason::RoundOver);
        }

        if !self.used_letters.insert(letter) {
            return GuessOutcome::Rejected(RejectReason::AlreadyUsed);
        }

        let hit = self.secret.has_letter(letter);
        if hit {
            for &i in self.secret.positions_of(letter) {
                self.revealed[i] = self.secret.display_char_at(i);
            }
        } else {
            self.attempts_remaining -= 1;
        }

        self.recompute_status();
        GuessOutcome::Accepted { hit }
    }

    /// Recompute the status from revealed positions and remaining attempts
    ///
    /// Idempotent: calling twice with no intervening guess yields the same
    /// status. Won and Lost are mutually exclusive because a winning guess
    /// never costs an attempt.
    fn recompute_status(&mut self) {
        self.status = if !self.revealed.contains(&PLACEHOLDER) {
            RoundStatus::Won
        } else if self.attempts_remaining == 0 {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        };
    }

    /// The secret being guessed
    #[must_use]
    pub const fn secret(&self) -> &WordEntry {
        &self.secret
    }

    /// Per-position reveal state, placeholder for unguessed positions
    #[must_use]
    pub fn revealed(&self) -> &[char] {
        &self.revealed
    }

    /// Letters submitted this round, in sorted order
    pub fn used_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.used_letters.iter().copied()
    }

    /// Wrong guesses still allowed
    #[must_use]
    pub const fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    /// Current status
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    /// Figure stage in `0..=MAX_ATTEMPTS`, one step per miss
    #[must_use]
    pub const fn figure_stage(&self) -> u8 {
        MAX_ATTEMPTS - self.attempts_remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(secret: &str) -> RoundState {
        RoundState::new(WordEntry::new(secret).unwrap())
    }

    #[test]
    fn new_round_all_placeholders() {
        let state = round("Gato");
        assert_eq!(state.revealed(), &[PLACEHOLDER; 4]);
        assert_eq!(state.attempts_remaining(), MAX_ATTEMPTS);
        assert_eq!(state.status(), RoundStatus::InProgress);
        assert_eq!(state.figure_stage(), 0);
        assert_eq!(state.used_letters().count(), 0);
    }

    #[test]
    fn revealed_length_matches_secret_throughout() {
        let mut state = round("Serpiente");
        let len = state.secret().len();
        for guess in ["s", "x", "e", "q", "r"] {
            state.process_guess(guess);
            assert_eq!(state.revealed().len(), len);
        }
    }

    #[test]
    fn win_scenario_gato() {
        let mut state = round("GATO");

        assert_eq!(state.process_guess("a"), GuessOutcome::Accepted { hit: true });
        assert_eq!(state.revealed(), &['_', 'A', '_', '_']);

        assert_eq!(state.process_guess("t"), GuessOutcome::Accepted { hit: true });
        assert_eq!(state.process_guess("o"), GuessOutcome::Accepted { hit: true });
        assert_eq!(state.status(), RoundStatus::InProgress);

        assert_eq!(state.process_guess("g"), GuessOutcome::Accepted { hit: true });
        assert_eq!(state.revealed(), &['G', 'A', 'T', 'O']);
        assert_eq!(state.status(), RoundStatus::Won);
        assert_eq!(state.attempts_remaining(), MAX_ATTEMPTS);
        assert_eq!(state.figure_stage(), 0);
    }

    #[test]
    fn loss_scenario_pato() {
        let mut state = round("PATO");

        for (i, guess) in ["x", "q", "w", "k", "j", "z"].iter().enumerate() {
            assert_eq!(
                state.process_guess(guess),
                GuessOutcome::Accepted { hit: false }
            );
            assert_eq!(state.attempts_remaining(), MAX_ATTEMPTS - 1 - i as u8);
            assert_eq!(state.figure_stage(), 1 + i as u8);
        }

        assert_eq!(state.attempts_remaining(), 0);
        assert_eq!(state.status(), RoundStatus::Lost);
        assert_eq!(state.figure_stage(), MAX_ATTEMPTS);
    }

    #[test]
    fn hit_reveals_every_matching_position() {
        let mut state = round("Gallina");
        assert_eq!(state.process_guess("l"), GuessOutcome::Accepted { hit: true });
        assert_eq!(state.revealed(), &['_', '_', 'l', 'l', '_', '_', '_']);
        assert_eq!(state.process_guess("a"), GuessOutcome::Accepted { hit: true });
        assert_eq!(state.revealed(), &['_', 'a', 'l', 'l', '_', '_', 'a']);
    }

    #[test]
    fn hit_never_costs_an_attempt() {
        let mut state = round("Gato");
        state.process_guess("a");
        state.process_guess("t");
        assert_eq!(state.attempts_remaining(), MAX_ATTEMPTS);
        assert_eq!(state.figure_stage(), 0);
    }

    #[test]
    fn duplicate_guess_rejected_without_change() {
        let mut state = round("Pato");
        assert_eq!(state.process_guess("e"), GuessOutcome::Accepted { hit: false });

        let revealed: Vec<char> = state.revealed().to_vec();
        let attempts = state.attempts_remaining();
        let used: Vec<char> = state.used_letters().collect();

        assert_eq!(
            state.process_guess("e"),
            GuessOutcome::Rejected(RejectReason::AlreadyUsed)
        );
        assert_eq!(state.revealed(), revealed.as_slice());
        assert_eq!(state.attempts_remaining(), attempts);
        assert_eq!(state.used_letters().collect::<Vec<_>>(), used);
        assert_eq!(state.status(), RoundStatus::InProgress);
    }

    #[test]
    fn duplicate_hit_also_rejected() {
        let mut state = round("Pato");
        assert_eq!(state.process_guess("a"), GuessOutcome::Accepted { hit: true });
        assert_eq!(
            state.process_guess("a"),
            GuessOutcome::Rejected(RejectReason::AlreadyUsed)
        );
    }

    #[test]
    fn duplicate_detection_is_diacritic_insensitive() {
        let mut state = round("Pato");
        state.process_guess("a");
        assert_eq!(
            state.process_guess("á"),
            GuessOutcome::Rejected(RejectReason::AlreadyUsed)
        );
    }

    #[test]
    fn invalid_input_rejected_without_change() {
        let mut state = round("Gato");
        for input in ["", "  ", "ab", "3", "?", "🎉"] {
            assert_eq!(
                state.process_guess(input),
                GuessOutcome::Rejected(RejectReason::InvalidInput)
            );
        }
        assert_eq!(state.used_letters().count(), 0);
        assert_eq!(state.attempts_remaining(), MAX_ATTEMPTS);
    }

    #[test]
    fn whitespace_wrapped_guess_accepted() {
        let mut state = round("Serpiente");
        assert_eq!(
            state.process_guess(" E "),
            GuessOutcome::Accepted { hit: true }
        );
    }

    #[test]
    fn guesses_after_win_rejected() {
        let mut state = round("Ga");
        state.process_guess("g");
        state.process_guess("a");
        assert_eq!(state.status(), RoundStatus::Won);

        assert_eq!(
            state.process_guess("z"),
            GuessOutcome::Rejected(RejectReason::RoundOver)
        );
        assert_eq!(state.attempts_remaining(), MAX_ATTEMPTS);
    }

    #[test]
    fn guesses_after_loss_rejected() {
        let mut state = round("Gato");
        for guess in ["x", "q", "w", "k", "j", "z"] {
            state.process_guess(guess);
        }
        assert_eq!(state.status(), RoundStatus::Lost);

        assert_eq!(
            state.process_guess("g"),
            GuessOutcome::Rejected(RejectReason::RoundOver)
        );
        assert!(state.revealed().contains(&PLACEHOLDER));
    }

    #[test]
    fn won_and_lost_are_mutually_exclusive() {
        // A mixed game that ends in a win on the last attempt
        let mut state = round("Ga");
        for guess in ["x", "q", "w", "k", "j"] {
            state.process_guess(guess);
        }
        assert_eq!(state.attempts_remaining(), 1);

        state.process_guess("g");
        state.process_guess("a");
        assert_eq!(state.status(), RoundStatus::Won);
        assert_eq!(state.attempts_remaining(), 1);
    }

    #[test]
    fn used_letters_sorted_and_unique() {
        let mut state = round("Gato");
        for guess in ["t", "z", "a", "m"] {
            state.process_guess(guess);
        }
        assert_eq!(
            state.used_letters().collect::<Vec<_>>(),
            vec!['a', 'm', 't', 'z']
        );
    }

    #[test]
    fn status_recompute_is_idempotent() {
        let mut state = round("Gato");
        state.process_guess("a");
        let before = state.status();
        state.recompute_status();
        assert_eq!(state.status(), before);
    }

    #[test]
    fn figure_stage_tracks_misses_exactly() {
        let mut state = round("Gato");
        state.process_guess("x");
        assert_eq!(state.figure_stage(), 1);
        state.process_guess("a"); // Hit: stage unchanged
        assert_eq!(state.figure_stage(), 1);
        state.process_guess("x"); // Duplicate: stage unchanged
        assert_eq!(state.figure_stage(), 1);
        state.process_guess("y");
        assert_eq!(state.figure_stage(), 2);
    }
}
