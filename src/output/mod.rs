//! Terminal output: figure art and console formatting

pub mod display;
pub mod figure;
pub mod formatters;

pub use display::{print_loss, print_themes, print_turn, print_win};
pub use figure::{FIGURE_STAGES, figure_for_stage};
