//! Hangman - CLI
//!
//! Themed hangman with TUI and console modes.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use hangman::{
    commands::run_simple,
    core::Theme,
    game::RoundEngine,
    output::print_themes,
    wordlists::{WordSource, loader::load_from_file},
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Themed hangman game with TUI and console modes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Theme: animals, sports, languages (default: ask per round)
    #[arg(short, long, global = true)]
    theme: Option<String>,

    /// Wordlist: 'default' (built-in pools) or path to a custom file
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple console mode (no TUI)
    Simple,

    /// List the available themes
    Themes,
}

/// Build the word source from the -w flag
///
/// A custom file replaces the default pool; the themed pools stay embedded.
/// An unreadable file is not fatal: warn and fall back to the built-in pools.
fn build_word_source(wordlist_mode: &str) -> WordSource {
    match wordlist_mode {
        "default" => WordSource::built_in(),
        path => match load_from_file(path) {
            Ok(words) => WordSource::with_default_pool(words),
            Err(e) => {
                eprintln!("Warning: could not load '{path}' ({e}); using built-in pools");
                WordSource::built_in()
            }
        },
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let theme = match cli.theme.as_deref() {
        Some(name) => match Theme::from_name(name) {
            Some(theme) => Some(theme),
            None => bail!("Unknown theme '{name}'; try 'hangman themes'"),
        },
        None => None,
    };

    let source = build_word_source(&cli.wordlist);
    let engine = RoundEngine::new(source, StdRng::from_os_rng());

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(engine, theme),
        Commands::Simple => {
            let mut engine = engine;
            run_simple(&mut engine, theme).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Themes => {
            print_themes();
            Ok(())
        }
    }
}

fn run_play_command(engine: RoundEngine<StdRng>, theme: Option<Theme>) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(engine, theme);
    run_tui(app)
}
