//! TUI application state and logic

use crate::core::Theme;
use crate::game::{GuessOutcome, RejectReason, RoundEngine, RoundStatus};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// What the input line currently accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    ThemeSelect,
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Session tallies, in-memory only
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_won: usize,
    pub games_lost: usize,
}

/// Application state
pub struct App<R: Rng> {
    pub engine: RoundEngine<R>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    /// Theme fixed on the command line; skips theme selection entirely
    pub preselected_theme: Option<Theme>,
    /// Theme of the round being played (None = default pool)
    pub current_theme: Option<Theme>,
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(engine: RoundEngine<R>, preselected_theme: Option<Theme>) -> Self {
        Self {
            engine,
            input_mode: InputMode::ThemeSelect,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Guess the word one letter at a time.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            preselected_theme,
            current_theme: None,
        }
    }

    /// Start the first round, honoring a preselected theme
    pub fn begin(&mut self) {
        if self.preselected_theme.is_some() {
            self.start_round(self.preselected_theme);
        } else {
            self.add_message(
                "Pick a theme: 1-3, or Enter for the default pool.",
                MessageStyle::Info,
            );
        }
    }

    pub fn start_round(&mut self, theme: Option<Theme>) {
        match self.engine.start_round(theme) {
            Ok(()) => {
                self.current_theme = theme;
                self.input_mode = InputMode::Guessing;
                self.input_buffer.clear();
                let pool = theme.map_or_else(
                    || "the default pool".to_string(),
                    |theme| format!("'{theme}'"),
                );
                self.add_message(&format!("New round from {pool}. Good luck!"), MessageStyle::Info);
            }
            Err(e) => {
                self.input_mode = InputMode::ThemeSelect;
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Submit whatever is in the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let input = self.input_buffer.clone();
        self.input_buffer.clear();

        match self.engine.process_guess(&input) {
            GuessOutcome::Accepted { hit: true } => {
                self.add_message("✓ The letter is in the word!", MessageStyle::Success);
            }
            GuessOutcome::Accepted { hit: false } => {
                self.add_message("✗ Not in the word.", MessageStyle::Error);
            }
            GuessOutcome::Rejected(RejectReason::InvalidInput) => {
                self.add_message("Enter a single letter.", MessageStyle::Error);
            }
            GuessOutcome::Rejected(RejectReason::AlreadyUsed) => {
                self.add_message("You already tried that letter.", MessageStyle::Error);
            }
            GuessOutcome::Rejected(RejectReason::RoundOver) => {
                self.add_message("Round is over. Press 'n' for a new round.", MessageStyle::Info);
            }
        }

        self.check_round_end();
    }

    fn check_round_end(&mut self) {
        let Some(snapshot) = self.engine.current_display() else {
            return;
        };
        let secret = self
            .engine
            .reveal_secret()
            .unwrap_or_default()
            .to_uppercase();

        match snapshot.status {
            RoundStatus::Won => {
                self.stats.games_won += 1;
                self.input_mode = InputMode::RoundOver;
                self.add_message(
                    &format!("🎉 You won! The word was {secret}."),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
            }
            RoundStatus::Lost => {
                self.stats.games_lost += 1;
                self.input_mode = InputMode::RoundOver;
                self.add_message(
                    &format!("💀 You lost! The word was {secret}."),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
            }
            RoundStatus::InProgress => {}
        }
    }

    /// Move on after a finished round
    pub fn next_round(&mut self) {
        if self.preselected_theme.is_some() {
            self.start_round(self.preselected_theme);
        } else {
            self.input_mode = InputMode::ThemeSelect;
            self.add_message(
                "Pick a theme: 1-3, or Enter for the default pool.",
                MessageStyle::Info,
            );
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    app.begin();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else {
                match app.input_mode {
                    InputMode::ThemeSelect => match key.code {
                        KeyCode::Char('q') => app.should_quit = true,
                        KeyCode::Char(c @ '1'..='3') => {
                            if let Some(theme) = Theme::from_name(&c.to_string()) {
                                app.start_round(Some(theme));
                            }
                        }
                        KeyCode::Enter => app.start_round(None),
                        _ => {}
                    },
                    InputMode::Guessing => match key.code {
                        // 'q' stays guessable here; quit with Esc or Ctrl-C
                        KeyCode::Esc => {
                            app.input_mode = InputMode::ThemeSelect;
                            app.input_buffer.clear();
                            app.add_message("Round abandoned.", MessageStyle::Info);
                        }
                        KeyCode::Char(c) => app.input_buffer.push(c),
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        KeyCode::Enter => app.submit_guess(),
                        _ => {}
                    },
                    InputMode::RoundOver => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                        KeyCode::Char('n') => app.next_round(),
                        _ => {}
                    },
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordSource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app_with(words: &[&str]) -> App<StdRng> {
        let engine = RoundEngine::new(WordSource::from_words(words), StdRng::seed_from_u64(3));
        App::new(engine, None)
    }

    #[test]
    fn starts_in_theme_select() {
        let app = app_with(&["Gato"]);
        assert_eq!(app.input_mode, InputMode::ThemeSelect);
    }

    #[test]
    fn start_round_switches_to_guessing() {
        let mut app = app_with(&["Gato"]);
        app.start_round(None);
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.engine.current_display().is_some());
    }

    #[test]
    fn empty_pool_stays_in_theme_select() {
        let mut app = app_with(&["Gato"]);
        app.start_round(Some(Theme::Animals));
        assert_eq!(app.input_mode, InputMode::ThemeSelect);
        assert!(app.engine.current_display().is_none());
    }

    #[test]
    fn winning_updates_stats_and_mode() {
        let mut app = app_with(&["Ga"]);
        app.start_round(None);

        for letter in ["g", "a"] {
            app.input_buffer = letter.to_string();
            app.submit_guess();
        }

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.games_lost, 0);
    }

    #[test]
    fn losing_updates_stats_and_mode() {
        let mut app = app_with(&["Gato"]);
        app.start_round(None);

        for letter in ["x", "q", "w", "k", "j", "z"] {
            app.input_buffer = letter.to_string();
            app.submit_guess();
        }

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.games_lost, 1);
    }

    #[test]
    fn messages_capped_at_five() {
        let mut app = app_with(&["Gato"]);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages.last().unwrap().text, "message 9");
    }

    #[test]
    fn preselected_theme_skips_menu() {
        let engine = RoundEngine::new(WordSource::built_in(), StdRng::seed_from_u64(3));
        let mut app = App::new(engine, Some(Theme::Animals));
        app.begin();
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.current_theme, Some(Theme::Animals));
    }
}
