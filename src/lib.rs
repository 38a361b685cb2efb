//! Hangman
//!
//! A themed hangman game: a secret word is drawn from a pool, the player
//! guesses one letter at a time, and a gallows figure grows with each miss.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::game::{GuessOutcome, RoundEngine};
//! use hangman::wordlists::WordSource;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let source = WordSource::from_words(&["Gato"]);
//! let mut engine = RoundEngine::new(source, StdRng::seed_from_u64(1));
//!
//! engine.start_round(None).unwrap();
//! assert_eq!(engine.process_guess("a"), GuessOutcome::Accepted { hit: true });
//! ```

// Core domain types
pub mod core;

// Round state machine
pub mod game;

// Word pools
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
