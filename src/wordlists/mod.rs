//! Word pools for hangman
//!
//! Provides embedded themed pools compiled into the binary, a plain-text
//! loader for custom pools, and the [`WordSource`] that rounds draw from.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{
    ANIMALS, ANIMALS_COUNT, DEFAULT_POOL, DEFAULT_POOL_COUNT, LANGUAGES, LANGUAGES_COUNT, SPORTS,
    SPORTS_COUNT,
};
pub use source::{EmptyPoolError, WordSource};
