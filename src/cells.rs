//! Character column calculations.
//!
//! Every `char` occupies exactly one column of the character grid. Wide
//! glyphs and combining sequences are not measured specially; callers that
//! feed such content get one column per code point.

/// Get the column width of a single character.
#[must_use]
pub const fn get_character_cell_size(_c: char) -> usize {
    1
}

/// Get the total column width of a string.
#[must_use]
pub fn cell_len(text: &str) -> usize {
    text.chars().map(get_character_cell_size).sum()
}

/// Push `count` copies of `c` onto `buffer`.
pub fn push_repeated(buffer: &mut String, c: char, count: usize) {
    buffer.extend(std::iter::repeat_n(c, count));
}

/// Build a string of `count` spaces.
#[must_use]
pub fn spaces(count: usize) -> String {
    " ".repeat(count)
}
