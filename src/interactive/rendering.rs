//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::game::MAX_ATTEMPTS;
use crate::output::figure_for_stage;
use crate::output::formatters::spaced_word;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(12),    // Main content
            Constraint::Length(3),  // Input area
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - figure on the left, round state on the right
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(30)])
        .split(chunks[1]);

    render_figure(f, app, main_chunks[0]);
    render_round_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_figure<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let stage = app
        .engine
        .current_display()
        .map_or(0, |snapshot| snapshot.figure_stage);

    let figure = Paragraph::new(figure_for_stage(stage))
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Gallows ({stage}/{MAX_ATTEMPTS}) "))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(figure, area);
}

fn render_round_panel<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Masked word
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(4), // Used letters
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_attempts(f, app, chunks[1]);
    render_used_letters(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_word<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let content = app.engine.current_display().map_or_else(
        || {
            vec![Line::from(Span::styled(
                "Pick a theme to start",
                Style::default().fg(Color::DarkGray),
            ))]
        },
        |snapshot| {
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    spaced_word(&snapshot.revealed.to_uppercase()),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
            ]
        },
    );

    let theme_label = app.current_theme.map_or_else(
        || " Word ".to_string(),
        |theme| format!(" Word — {theme} "),
    );

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(theme_label)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_attempts<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let remaining = app
        .engine
        .current_display()
        .map_or(MAX_ATTEMPTS, |snapshot| snapshot.attempts_remaining);
    let pct = u16::from(remaining) * 100 / u16::from(MAX_ATTEMPTS);

    let color = match remaining {
        0..=2 => Color::Red,
        3..=4 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(pct)
        .label(format!("{remaining}/{MAX_ATTEMPTS} remaining"));

    f.render_widget(gauge, area);
}

fn render_used_letters<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let content = app.engine.current_display().map_or_else(String::new, |s| {
        s.used_letters
            .iter()
            .map(|c| c.to_ascii_uppercase().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    });

    let paragraph = Paragraph::new(content)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Used Letters ")
                .borders(Borders::ALL),
        );
    f.render_widget(paragraph, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::ThemeSelect => (
            " Pick a Theme: 1=Animals 2=Sports 3=Languages | Enter=default | q=quit ",
            "",
            Color::Cyan,
        ),
        InputMode::Guessing => (
            " Type a letter and press Enter | ESC to abandon round ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::RoundOver => (
            " Round over | Press 'n' for a new round or 'q' to quit ",
            "",
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let total = app.stats.games_won + app.stats.games_lost;
    let stats_text = format!(
        "Won: {} | Lost: {} | Win Rate: {:.0}%",
        app.stats.games_won,
        app.stats.games_lost,
        if total > 0 {
            app.stats.games_won as f64 / total as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let pool_text = app.current_theme.map_or_else(
        || "Pool: default".to_string(),
        |theme| format!("Pool: {theme}"),
    );
    let pool = Paragraph::new(pool_text).alignment(Alignment::Center);
    f.render_widget(pool, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::ThemeSelect => "1-3/Enter: Start | q: Quit",
        InputMode::Guessing => "Enter: Guess | ESC: Abandon | Ctrl-C: Quit",
        InputMode::RoundOver => "n: New Round | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
