//! Simple interactive console mode
//!
//! Text-based hangman without the TUI: theme menu, guess loop, play-again
//! prompt.

use crate::core::Theme;
use crate::game::{GuessOutcome, RejectReason, RoundEngine, RoundStatus};
use crate::output::{print_loss, print_themes, print_turn, print_win};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the simple console mode
///
/// `preselected` skips the theme menu for every round; `None` asks each time.
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_simple<R: Rng>(
    engine: &mut RoundEngine<R>,
    preselected: Option<Theme>,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║            H A N G M A N             ║");
    println!("╚══════════════════════════════════════╝\n");
    println!("Guess the word one letter at a time.");
    println!("Commands: 'quit' to exit\n");

    loop {
        let theme = match preselected {
            Some(theme) => Some(theme),
            None => match choose_theme()? {
                ThemeChoice::Theme(theme) => theme,
                ThemeChoice::Quit => break,
            },
        };

        if let Err(e) = engine.start_round(theme) {
            println!("{}", format!("❌ {e}").red());
            if preselected.is_some() {
                // No other theme to offer
                return Err(e.to_string());
            }
            continue;
        }

        if !play_round(engine)? {
            break;
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

enum ThemeChoice {
    Theme(Option<Theme>),
    Quit,
}

fn choose_theme() -> Result<ThemeChoice, String> {
    print_themes();
    println!("  (press Enter for the default pool)\n");

    loop {
        let input = get_user_input("Choose a theme")?;
        match input.as_str() {
            "" => return Ok(ThemeChoice::Theme(None)),
            "quit" | "q" | "exit" => return Ok(ThemeChoice::Quit),
            name => {
                if let Some(theme) = Theme::from_name(name) {
                    return Ok(ThemeChoice::Theme(Some(theme)));
                }
                println!("❌ Unknown theme '{name}'. Try a name or number from the list.\n");
            }
        }
    }
}

/// Play one round to completion; returns false if the player wants to stop
fn play_round<R: Rng>(engine: &mut RoundEngine<R>) -> Result<bool, String> {
    loop {
        let Some(snapshot) = engine.current_display() else {
            return Err("No active round".to_string());
        };
        print_turn(&snapshot);

        if snapshot.status != RoundStatus::InProgress {
            break;
        }

        let input = get_user_input("Guess a letter")?;
        if matches!(input.as_str(), "quit" | "q" | "exit") {
            return Ok(false);
        }

        match engine.process_guess(&input) {
            GuessOutcome::Accepted { hit: true } => {
                println!("{}", "✓ The letter is in the word!".green());
            }
            GuessOutcome::Accepted { hit: false } => {
                println!("{}", "✗ The letter is not in the word.".red());
            }
            GuessOutcome::Rejected(RejectReason::InvalidInput) => {
                println!("{}", "Please enter a single letter.".yellow());
            }
            GuessOutcome::Rejected(RejectReason::AlreadyUsed) => {
                println!("{}", "You already tried that letter.".yellow());
            }
            GuessOutcome::Rejected(RejectReason::RoundOver) => {
                // Unreachable inside the loop: status is checked before prompting
                break;
            }
        }
    }

    let secret = engine.reveal_secret().unwrap_or_default().to_string();
    match engine.current_display().map(|s| s.status) {
        Some(RoundStatus::Won) => print_win(&secret),
        Some(RoundStatus::Lost) => print_loss(&secret),
        _ => {}
    }

    let again = get_user_input("\nPlay again? (yes/no)")?.to_lowercase();
    Ok(matches!(again.as_str(), "yes" | "y" | "si" | "s"))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
