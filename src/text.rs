//! Immutable multi-line text.
//!
//! [`MultilineText`] is the content primitive stored by every cell, column
//! header and title. It is split into lines once, at construction, and is
//! never mutated afterwards; changing content means replacing the value.
//!
//! # Examples
//!
//! ```
//! use console_tables::text::MultilineText;
//!
//! let text = MultilineText::new("first\nsecond line");
//! assert_eq!(text.height(), 2);
//! assert_eq!(text.width(), 11);
//! assert_eq!(text.lines().collect::<Vec<_>>(), ["first", "second line"]);
//! ```

use std::fmt;

use crate::cells::cell_len;

/// Horizontal alignment of content inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    /// Inherit from the enclosing row, column or table.
    #[default]
    Default,
    /// Align content to the left edge.
    Left,
    /// Center content, extra space goes to the right.
    Center,
    /// Align content to the right edge.
    Right,
}

impl HorizontalAlignment {
    /// Returns `self` unless it is `Default`, in which case `fallback` is returned.
    #[must_use]
    pub const fn or(self, fallback: Self) -> Self {
        match self {
            Self::Default => fallback,
            other => other,
        }
    }

    /// Split `free` columns into (before, after) fill for this alignment.
    ///
    /// `Default` behaves like `Left`.
    #[must_use]
    pub const fn split(self, free: usize) -> (usize, usize) {
        match self {
            Self::Default | Self::Left => (0, free),
            Self::Right => (free, 0),
            Self::Center => (free / 2, free - free / 2),
        }
    }
}

/// Text made of zero or more lines.
///
/// `width` is the longest line in columns, `height` the number of lines.
/// The empty value has neither.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct MultilineText {
    lines: Vec<String>,
    width: usize,
}

impl MultilineText {
    /// Text with no lines.
    pub const EMPTY: Self = Self {
        lines: Vec::new(),
        width: 0,
    };

    /// Split `text` on `\r\n`, `\n` and `\r`.
    ///
    /// The empty string yields [`MultilineText::EMPTY`].
    #[must_use]
    pub fn new(text: &str) -> Self {
        if text.is_empty() {
            return Self::EMPTY;
        }
        Self::from_lines(split_line_breaks(text))
    }

    /// Build from an explicit sequence of lines, taken as-is.
    #[must_use]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let width = lines.iter().map(|line| cell_len(line)).max().unwrap_or(0);
        Self { lines, width }
    }

    /// Longest line, in columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of lines.
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Check whether there are no lines at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get a single line.
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Iterate over the lines. Each call starts from the first line.
    pub fn lines(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.lines.iter().map(String::as_str)
    }
}

fn split_line_breaks(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines.push(std::mem::take(&mut current));
            }
            '\n' => lines.push(std::mem::take(&mut current)),
            other => current.push(other),
        }
    }
    lines.push(current);
    lines
}

impl fmt::Display for MultilineText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

impl From<&str> for MultilineText {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MultilineText {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<&String> for MultilineText {
    fn from(value: &String) -> Self {
        Self::new(value)
    }
}

impl From<Vec<String>> for MultilineText {
    fn from(value: Vec<String>) -> Self {
        Self::from_lines(value)
    }
}

impl From<&[&str]> for MultilineText {
    fn from(value: &[&str]) -> Self {
        Self::from_lines(value.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for MultilineText {
    fn from(value: [&str; N]) -> Self {
        Self::from_lines(value)
    }
}

impl<T: Into<MultilineText>> From<Option<T>> for MultilineText {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::EMPTY, Into::into)
    }
}

impl<'a> FromIterator<&'a str> for MultilineText {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self::from_lines(iter)
    }
}

impl FromIterator<String> for MultilineText {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::from_lines(iter)
    }
}
