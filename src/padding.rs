//! Horizontal cell padding.
//!
//! Padding follows the usual shorthand conventions:
//! - 1 value: both sides equal
//! - 2 values: (left, right)

use std::fmt;
use std::str::FromStr;

/// Number of spaces written on each side of a cell's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Padding {
    /// Spaces before the content.
    pub left: usize,
    /// Spaces after the content.
    pub right: usize,
}

impl Default for Padding {
    fn default() -> Self {
        Self::all(1)
    }
}

impl Padding {
    /// Create padding with individual values for each side.
    #[must_use]
    pub const fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }

    /// Create padding with both sides equal.
    #[must_use]
    pub const fn all(n: usize) -> Self {
        Self { left: n, right: n }
    }

    /// Create zero padding.
    #[must_use]
    pub const fn zero() -> Self {
        Self::all(0)
    }

    /// Total horizontal padding (left + right).
    #[must_use]
    pub const fn horizontal(&self) -> usize {
        self.left + self.right
    }
}

impl From<usize> for Padding {
    fn from(n: usize) -> Self {
        Self::all(n)
    }
}

impl From<(usize, usize)> for Padding {
    fn from((left, right): (usize, usize)) -> Self {
        Self::new(left, right)
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.left, self.right)
    }
}

/// Error type for padding parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaddingParseError {
    /// The input did not contain one or two values.
    WrongValueCount(usize),
    /// A value was not a non-negative integer.
    InvalidValue(String),
}

impl fmt::Display for PaddingParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongValueCount(count) => {
                write!(f, "expected 1 or 2 padding values, found {count}")
            }
            Self::InvalidValue(value) => write!(f, "invalid padding value: '{value}'"),
        }
    }
}

impl std::error::Error for PaddingParseError {}

impl FromStr for Padding {
    type Err = PaddingParseError;

    /// Parse `"n"` or `"left right"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(|chunk| {
                chunk
                    .parse::<usize>()
                    .map_err(|_| PaddingParseError::InvalidValue(chunk.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        match values.as_slice() {
            [n] => Ok(Self::all(*n)),
            [left, right] => Ok(Self::new(*left, *right)),
            other => Err(PaddingParseError::WrongValueCount(other.len())),
        }
    }
}
