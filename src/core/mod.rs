//! Core domain types
//!
//! Letter normalization, themes, and the word entries rounds are played on.

pub mod letter;
pub mod theme;
pub mod word;

pub use letter::{fold_diacritic, normalize_guess, normalize_word};
pub use theme::Theme;
pub use word::{WordEntry, WordError};
