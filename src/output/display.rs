//! Colored console output for the simple mode

use super::figure::figure_for_stage;
use super::formatters::{spaced_word, used_letters_line};
use crate::core::Theme;
use crate::game::DisplaySnapshot;
use colored::Colorize;

/// Print the per-turn view: figure, masked word, used letters, attempts
pub fn print_turn(snapshot: &DisplaySnapshot) {
    println!("{}", figure_for_stage(snapshot.figure_stage).red());
    println!(
        "\nWord: {}",
        spaced_word(&snapshot.revealed.to_uppercase())
            .bright_yellow()
            .bold()
    );

    if !snapshot.used_letters.is_empty() {
        println!("Used: {}", used_letters_line(snapshot).bright_black());
    }
    println!("Attempts remaining: {}\n", snapshot.attempts_remaining);
}

/// Print the win banner
pub fn print_win(secret: &str) {
    println!("\n{}", "═".repeat(40).bright_cyan());
    println!(
        "{}",
        format!("🎉 You won! The word was {}", secret.to_uppercase())
            .green()
            .bold()
    );
    println!("{}", "═".repeat(40).bright_cyan());
}

/// Print the loss banner
pub fn print_loss(secret: &str) {
    println!("\n{}", "═".repeat(40).bright_cyan());
    println!(
        "{}",
        format!("💀 You lost! The word was {}", secret.to_uppercase())
            .red()
            .bold()
    );
    println!("{}", "═".repeat(40).bright_cyan());
}

/// Print the theme list, numbered the way the menu accepts them
pub fn print_themes() {
    println!("Available themes:");
    for (i, theme) in Theme::ALL.iter().enumerate() {
        println!("  {}. {theme}", i + 1);
    }
}
