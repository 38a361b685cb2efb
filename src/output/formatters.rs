//! Text formatting helpers shared by the console and TUI presenters

use crate::game::DisplaySnapshot;

/// Space out the revealed word for readability: `"_A__"` becomes `"_ A _ _"`
#[must_use]
pub fn spaced_word(revealed: &str) -> String {
    let mut out = String::with_capacity(revealed.len() * 2);
    for (i, c) in revealed.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Render the used letters line, uppercased and space separated
#[must_use]
pub fn used_letters_line(snapshot: &DisplaySnapshot) -> String {
    let mut out = String::with_capacity(snapshot.used_letters.len() * 2);
    for (i, c) in snapshot.used_letters.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c.to_ascii_uppercase());
    }
    out
}

/// Render the attempts counter line
#[must_use]
pub fn attempts_line(snapshot: &DisplaySnapshot) -> String {
    format!("Attempts remaining: {}", snapshot.attempts_remaining)
}
