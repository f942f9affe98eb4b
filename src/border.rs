//! Border glyph templates for tables.
//!
//! A [`BorderTemplate`] holds the fifteen glyphs used to draw a table frame
//! and turns a list of column widths into complete separator lines.
//!
//! Templates can be written as a single string of glyphs in this order:
//!
//! | # | Glyph | # | Glyph |
//! |---|-------|---|-------|
//! | 0 | top-left | 8 | top intersection |
//! | 1 | top | 9 | right intersection |
//! | 2 | top-right | 10 | bottom intersection |
//! | 3 | right | 11 | left intersection |
//! | 4 | bottom-right | 12 | middle intersection |
//! | 5 | bottom | 13 | vertical inside |
//! | 6 | bottom-left | 14 | horizontal inside |
//! | 7 | left | | |
//!
//! ```
//! use console_tables::border::BorderTemplate;
//!
//! let double = BorderTemplate::parse("╔═╗║╝═╚║╦╣╩╠╬║═").unwrap();
//! assert_eq!(double.generate_top_border(&[3, 2]), "╔═══╦══╗");
//! assert_eq!(double.generate_bottom_border(&[3, 2]), "╚═══╩══╝");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::cells::push_repeated;

/// Number of glyphs in a template string.
pub const GLYPH_COUNT: usize = 15;

/// Separator line kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderLevel {
    /// Top of the table.
    Top,
    /// Between the title and the column headers.
    TitleHeader,
    /// Between the title and the data rows.
    TitleData,
    /// Between the column headers and the data rows.
    HeaderData,
    /// Bottom of the table.
    Bottom,
}

/// Border glyph set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderTemplate {
    pub top_left: char,
    pub top: char,
    pub top_right: char,
    pub right: char,
    pub bottom_right: char,
    pub bottom: char,
    pub bottom_left: char,
    pub left: char,
    pub top_intersection: char,
    pub right_intersection: char,
    pub bottom_intersection: char,
    pub left_intersection: char,
    pub middle_intersection: char,
    pub vertical_inside: char,
    pub horizontal_inside: char,
}

impl Default for BorderTemplate {
    fn default() -> Self {
        ASCII
    }
}

impl BorderTemplate {
    /// Create a template from its glyphs, in template-string order.
    #[must_use]
    pub const fn from_glyphs(glyphs: [char; GLYPH_COUNT]) -> Self {
        Self {
            top_left: glyphs[0],
            top: glyphs[1],
            top_right: glyphs[2],
            right: glyphs[3],
            bottom_right: glyphs[4],
            bottom: glyphs[5],
            bottom_left: glyphs[6],
            left: glyphs[7],
            top_intersection: glyphs[8],
            right_intersection: glyphs[9],
            bottom_intersection: glyphs[10],
            left_intersection: glyphs[11],
            middle_intersection: glyphs[12],
            vertical_inside: glyphs[13],
            horizontal_inside: glyphs[14],
        }
    }

    /// Parse a template string of exactly fifteen glyphs.
    ///
    /// # Errors
    ///
    /// Returns `WrongGlyphCount` when the string does not hold exactly
    /// [`GLYPH_COUNT`] characters.
    pub fn parse(template: &str) -> Result<Self, BorderTemplateError> {
        let glyphs: Vec<char> = template.chars().collect();
        let glyphs: [char; GLYPH_COUNT] =
            glyphs
                .try_into()
                .map_err(|glyphs: Vec<char>| BorderTemplateError::WrongGlyphCount {
                    expected: GLYPH_COUNT,
                    actual: glyphs.len(),
                })?;
        Ok(Self::from_glyphs(glyphs))
    }

    /// The glyphs in template-string order.
    #[must_use]
    pub const fn glyphs(&self) -> [char; GLYPH_COUNT] {
        [
            self.top_left,
            self.top,
            self.top_right,
            self.right,
            self.bottom_right,
            self.bottom,
            self.bottom_left,
            self.left,
            self.top_intersection,
            self.right_intersection,
            self.bottom_intersection,
            self.left_intersection,
            self.middle_intersection,
            self.vertical_inside,
            self.horizontal_inside,
        ]
    }

    /// Get the `[left, fill, joint, right]` glyphs for a separator level.
    #[must_use]
    pub const fn get_level_chars(&self, level: BorderLevel) -> [char; 4] {
        match level {
            BorderLevel::Top => [self.top_left, self.top, self.top_intersection, self.top_right],
            BorderLevel::TitleHeader | BorderLevel::TitleData => [
                self.left_intersection,
                self.horizontal_inside,
                self.top_intersection,
                self.right_intersection,
            ],
            BorderLevel::HeaderData => [
                self.left_intersection,
                self.horizontal_inside,
                self.middle_intersection,
                self.right_intersection,
            ],
            BorderLevel::Bottom => [
                self.bottom_left,
                self.bottom,
                self.bottom_intersection,
                self.bottom_right,
            ],
        }
    }

    /// Build a separator line for the given column widths.
    ///
    /// Widths exclude the border glyphs themselves. An empty width list
    /// yields just the two corner glyphs.
    #[must_use]
    pub fn build_line(&self, widths: &[usize], level: BorderLevel) -> String {
        let [left, fill, joint, right] = self.get_level_chars(level);
        let total: usize = widths.iter().sum::<usize>() + widths.len() + 1;

        let mut result = String::with_capacity(total * fill.len_utf8());
        result.push(left);

        for (i, &width) in widths.iter().enumerate() {
            push_repeated(&mut result, fill, width);
            if i + 1 < widths.len() {
                result.push(joint);
            }
        }

        result.push(right);
        result
    }

    /// Build the top border.
    #[must_use]
    pub fn generate_top_border(&self, widths: &[usize]) -> String {
        self.build_line(widths, BorderLevel::Top)
    }

    /// Build the bottom border.
    #[must_use]
    pub fn generate_bottom_border(&self, widths: &[usize]) -> String {
        self.build_line(widths, BorderLevel::Bottom)
    }

    /// Build the separator between column headers and data rows.
    #[must_use]
    pub fn generate_header_data_separator(&self, widths: &[usize]) -> String {
        self.build_line(widths, BorderLevel::HeaderData)
    }

    /// Build the separator between the title and the data rows.
    #[must_use]
    pub fn generate_title_data_separator(&self, widths: &[usize]) -> String {
        self.build_line(widths, BorderLevel::TitleData)
    }

    /// Build the separator between the title and the column headers.
    #[must_use]
    pub fn generate_title_header_separator(&self, widths: &[usize]) -> String {
        self.build_line(widths, BorderLevel::TitleHeader)
    }
}

impl fmt::Display for BorderTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sample 3x3 frame with a header separator
        let widths = [3, 3, 3];
        let line = format!(
            "{}   {}   {}   {}",
            self.left, self.vertical_inside, self.vertical_inside, self.right
        );
        writeln!(f, "{}", self.generate_top_border(&widths))?;
        writeln!(f, "{line}")?;
        writeln!(f, "{}", self.generate_header_data_separator(&widths))?;
        writeln!(f, "{line}")?;
        write!(f, "{}", self.generate_bottom_border(&widths))
    }
}

impl FromStr for BorderTemplate {
    type Err = BorderTemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error type for border template parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorderTemplateError {
    /// The template string did not contain exactly fifteen glyphs.
    WrongGlyphCount { expected: usize, actual: usize },
}

impl fmt::Display for BorderTemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongGlyphCount { expected, actual } => write!(
                f,
                "border template must contain {expected} glyphs, found {actual}"
            ),
        }
    }
}

impl std::error::Error for BorderTemplateError {}

// ============================================================================
// Built-in Templates
// ============================================================================

/// ASCII frame (safe for all terminals). `+-+|+-+|+++++|-`
pub const ASCII: BorderTemplate = BorderTemplate::from_glyphs([
    '+', '-', '+', '|', '+', '-', '+', '|', '+', '+', '+', '+', '+', '|', '-',
]);

/// Unicode single line frame. `┌─┐│┘─└│┬┤┴├┼│─`
pub const SINGLE_LINE: BorderTemplate = BorderTemplate::from_glyphs([
    '\u{250C}', '\u{2500}', '\u{2510}', '\u{2502}', '\u{2518}', '\u{2500}', '\u{2514}', '\u{2502}',
    '\u{252C}', '\u{2524}', '\u{2534}', '\u{251C}', '\u{253C}', '\u{2502}', '\u{2500}',
]);

/// Unicode double line frame. `╔═╗║╝═╚║╦╣╩╠╬║═`
pub const DOUBLE_LINE: BorderTemplate = BorderTemplate::from_glyphs([
    '\u{2554}', '\u{2550}', '\u{2557}', '\u{2551}', '\u{255D}', '\u{2550}', '\u{255A}', '\u{2551}',
    '\u{2566}', '\u{2563}', '\u{2569}', '\u{2560}', '\u{256C}', '\u{2551}', '\u{2550}',
]);

/// Unicode single line frame with rounded corners. `╭─╮│╯─╰│┬┤┴├┼│─`
pub const ROUNDED: BorderTemplate = BorderTemplate::from_glyphs([
    '\u{256D}', '\u{2500}', '\u{256E}', '\u{2502}', '\u{256F}', '\u{2500}', '\u{2570}', '\u{2502}',
    '\u{252C}', '\u{2524}', '\u{2534}', '\u{251C}', '\u{253C}', '\u{2502}', '\u{2500}',
]);

/// Heavy (thick) line frame. `┏━┓┃┛━┗┃┳┫┻┣╋┃━`
pub const HEAVY: BorderTemplate = BorderTemplate::from_glyphs([
    '\u{250F}', '\u{2501}', '\u{2513}', '\u{2503}', '\u{251B}', '\u{2501}', '\u{2517}', '\u{2503}',
    '\u{2533}', '\u{252B}', '\u{253B}', '\u{2523}', '\u{254B}', '\u{2503}', '\u{2501}',
]);

/// Get a built-in template by name.
#[must_use]
pub fn get_template(name: &str) -> Option<&'static BorderTemplate> {
    match name.to_lowercase().as_str() {
        "ascii" => Some(&ASCII),
        "single" | "single_line" => Some(&SINGLE_LINE),
        "double" | "double_line" => Some(&DOUBLE_LINE),
        "rounded" => Some(&ROUNDED),
        "heavy" => Some(&HEAVY),
        _ => None,
    }
}
