//! Column definitions: header text and the defaults shared by a column's cells.

use crate::text::{HorizontalAlignment, MultilineText};

use super::cell::Cell;

/// Column definition for a table.
///
/// Columns are positional: column `i` describes cell `i` of every header
/// and data row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Column {
    /// Header text, shown when the table displays column headers.
    pub header: Option<MultilineText>,
    /// Alignment for data cells of this column.
    pub alignment: HorizontalAlignment,
    /// Alignment for the header cell.
    pub header_alignment: HorizontalAlignment,
    /// Left padding override for the column's cells.
    pub padding_left: Option<usize>,
    /// Right padding override for the column's cells.
    pub padding_right: Option<usize>,
    /// Width the column starts from during layout.
    pub min_width: usize,
}

impl Column {
    /// Create a column with a header.
    #[must_use]
    pub fn new(header: impl Into<MultilineText>) -> Self {
        Self {
            header: Some(header.into()),
            ..Self::default()
        }
    }

    /// Create a column without a header.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set data alignment.
    #[must_use]
    pub fn horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set header alignment.
    #[must_use]
    pub fn header_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.header_alignment = alignment;
        self
    }

    /// Set left padding.
    #[must_use]
    pub fn padding_left(mut self, padding: usize) -> Self {
        self.padding_left = Some(padding);
        self
    }

    /// Set right padding.
    #[must_use]
    pub fn padding_right(mut self, padding: usize) -> Self {
        self.padding_right = Some(padding);
        self
    }

    /// Set minimum width (content plus padding).
    #[must_use]
    pub fn min_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }

    /// Build the header cell for this column.
    #[must_use]
    pub fn header_cell(&self) -> Cell {
        let content = self.header.clone().unwrap_or(MultilineText::EMPTY);
        Cell::new(content).horizontal_alignment(self.header_alignment)
    }
}
