//! Gallows figure art
//!
//! Seven renderings of the figure, indexed by figure stage: stage 0 is the
//! empty gallows, stage 6 the complete figure. The engine only exposes the
//! stage integer; the art lives here with the rest of the presentation layer.

use crate::game::MAX_ATTEMPTS;

/// One rendering per figure stage, `FIGURE_STAGES[stage]` for stage `0..=6`
pub const FIGURE_STAGES: [&str; MAX_ATTEMPTS as usize + 1] = [
    r"
  +---+
  |   |
      |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
=========",
];

/// The art for a figure stage
///
/// # Panics
/// Panics if `stage > MAX_ATTEMPTS`; the engine never produces such a stage.
#[inline]
#[must_use]
pub fn figure_for_stage(stage: u8) -> &'static str {
    FIGURE_STAGES[stage as usize]
}
