//! Word pool themes

use std::fmt;

/// Category used to partition the word pool
///
/// Rounds may also be played without a theme, drawing from the default pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Animals,
    Sports,
    ProgrammingLanguages,
}

impl Theme {
    /// Every available theme, in menu order
    pub const ALL: [Self; 3] = [Self::Animals, Self::Sports, Self::ProgrammingLanguages];

    /// Parse a theme from a name or menu number
    ///
    /// Accepts the names used on the CLI ("animals", "sports", "languages")
    /// and the 1-based menu digits of the console mode.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "animals" | "1" => Some(Self::Animals),
            "sports" | "2" => Some(Self::Sports),
            "languages" | "programming" | "3" => Some(Self::ProgrammingLanguages),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Animals => "Animals",
            Self::Sports => "Sports",
            Self::ProgrammingLanguages => "Programming Languages",
        };
        write!(f, "{name}")
    }
}
