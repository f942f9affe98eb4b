//! Console colors for table output.
//!
//! Tables carry at most a foreground/background pair per written fragment.
//! The palette is the classic sixteen-color console set; the layout engine
//! never interprets colors, it only forwards them to the printer.
//!
//! # Examples
//!
//! ```
//! use console_tables::color::{ColorPair, ConsoleColor};
//!
//! let red = ConsoleColor::parse("dark_red").unwrap();
//! assert_eq!(red, ConsoleColor::DarkRed);
//!
//! let pair = ColorPair::new().foreground(ConsoleColor::Yellow);
//! assert!(!pair.is_plain());
//! ```

use std::fmt;
use std::str::FromStr;

/// One of the sixteen console colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

/// Canonical names, indexed by console color number.
const COLOR_NAMES: [(&str, ConsoleColor); 16] = [
    ("black", ConsoleColor::Black),
    ("dark_blue", ConsoleColor::DarkBlue),
    ("dark_green", ConsoleColor::DarkGreen),
    ("dark_cyan", ConsoleColor::DarkCyan),
    ("dark_red", ConsoleColor::DarkRed),
    ("dark_magenta", ConsoleColor::DarkMagenta),
    ("dark_yellow", ConsoleColor::DarkYellow),
    ("gray", ConsoleColor::Gray),
    ("dark_gray", ConsoleColor::DarkGray),
    ("blue", ConsoleColor::Blue),
    ("green", ConsoleColor::Green),
    ("cyan", ConsoleColor::Cyan),
    ("red", ConsoleColor::Red),
    ("magenta", ConsoleColor::Magenta),
    ("yellow", ConsoleColor::Yellow),
    ("white", ConsoleColor::White),
];

impl ConsoleColor {
    /// All colors in console number order.
    pub const ALL: [Self; 16] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkCyan,
        Self::DarkRed,
        Self::DarkMagenta,
        Self::DarkYellow,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Cyan,
        Self::Red,
        Self::Magenta,
        Self::Yellow,
        Self::White,
    ];

    /// Console color number (0-15).
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Look up a color by console number.
    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.get(usize::from(number)).copied()
    }

    /// Canonical snake_case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        COLOR_NAMES[self as usize].0
    }

    /// Parse a color.
    ///
    /// Accepts names in any case with `_`, `-` or spaces between words
    /// (`DarkRed`, `dark-red`, `dark red`), `grey` spellings, and
    /// `color(N)` for N in 0-15.
    ///
    /// # Errors
    ///
    /// - `Empty` if the input is blank
    /// - `InvalidColorNumber` if `color(N)` is out of range or malformed
    /// - `UnknownColor` if the name is not recognized
    pub fn parse(color: &str) -> Result<Self, ColorParseError> {
        let trimmed = color.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }

        let lowered = trimmed.to_lowercase();
        if let Some(number) = lowered
            .strip_prefix("color(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return number
                .trim()
                .parse::<u8>()
                .ok()
                .and_then(Self::from_number)
                .ok_or_else(|| ColorParseError::InvalidColorNumber(trimmed.to_string()));
        }

        let key: String = lowered
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .replace("grey", "gray");

        COLOR_NAMES
            .iter()
            .find(|(name, _)| name.replace('_', "") == key)
            .map(|&(_, color)| color)
            .ok_or_else(|| ColorParseError::UnknownColor(trimmed.to_string()))
    }
}

impl fmt::Display for ConsoleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConsoleColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ConsoleColor {
    type Error = ColorParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ConsoleColor> for crossterm::style::Color {
    fn from(color: ConsoleColor) -> Self {
        use crossterm::style::Color;
        match color {
            ConsoleColor::Black => Color::Black,
            ConsoleColor::DarkBlue => Color::DarkBlue,
            ConsoleColor::DarkGreen => Color::DarkGreen,
            ConsoleColor::DarkCyan => Color::DarkCyan,
            ConsoleColor::DarkRed => Color::DarkRed,
            ConsoleColor::DarkMagenta => Color::DarkMagenta,
            ConsoleColor::DarkYellow => Color::DarkYellow,
            ConsoleColor::Gray => Color::Grey,
            ConsoleColor::DarkGray => Color::DarkGrey,
            ConsoleColor::Blue => Color::Blue,
            ConsoleColor::Green => Color::Green,
            ConsoleColor::Cyan => Color::Cyan,
            ConsoleColor::Red => Color::Red,
            ConsoleColor::Magenta => Color::Magenta,
            ConsoleColor::Yellow => Color::Yellow,
            ConsoleColor::White => Color::White,
        }
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    Empty,
    InvalidColorNumber(String),
    UnknownColor(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty color string"),
            Self::InvalidColorNumber(s) => write!(f, "Invalid color number: {s}"),
            Self::UnknownColor(s) => write!(f, "Unknown color: {s}"),
        }
    }
}

impl std::error::Error for ColorParseError {}

/// Optional foreground and background for one written fragment.
///
/// `None` means "leave the output device's current color alone".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorPair {
    pub foreground: Option<ConsoleColor>,
    pub background: Option<ConsoleColor>,
}

impl ColorPair {
    /// A pair with no colors set.
    pub const PLAIN: Self = Self {
        foreground: None,
        background: None,
    };

    /// Create an empty pair.
    #[must_use]
    pub const fn new() -> Self {
        Self::PLAIN
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn foreground(mut self, color: ConsoleColor) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn background(mut self, color: ConsoleColor) -> Self {
        self.background = Some(color);
        self
    }

    /// Check whether neither color is set.
    #[must_use]
    pub const fn is_plain(&self) -> bool {
        self.foreground.is_none() && self.background.is_none()
    }

    /// Fill unset colors from `fallback`.
    #[must_use]
    pub const fn or(self, fallback: Self) -> Self {
        Self {
            foreground: match self.foreground {
                Some(color) => Some(color),
                None => fallback.foreground,
            },
            background: match self.background {
                Some(color) => Some(color),
                None => fallback.background,
            },
        }
    }
}
