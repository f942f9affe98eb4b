//! Title, header and data rows.

use crate::color::{ColorPair, ConsoleColor};
use crate::padding::Padding;
use crate::segment::SegmentKind;
use crate::text::{HorizontalAlignment, MultilineText};

use super::cell::{Cell, CellContext, Size};
use super::column::Column;

/// Which part of the table a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RowKind {
    /// Single cell spanning the whole table.
    Title,
    /// Column headers.
    Header,
    /// Table content.
    #[default]
    Data,
}

impl RowKind {
    /// Printer content class used for this row's cells.
    #[must_use]
    pub const fn segment_kind(self) -> SegmentKind {
        match self {
            Self::Title => SegmentKind::Title,
            Self::Header => SegmentKind::Header,
            Self::Data => SegmentKind::Normal,
        }
    }
}

/// A row of cells with row-level overrides.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    /// Row variant.
    pub kind: RowKind,
    /// Cells, one per column position.
    pub cells: Vec<Cell>,
    /// Left padding override for every cell of the row.
    pub padding_left: Option<usize>,
    /// Right padding override for every cell of the row.
    pub padding_right: Option<usize>,
    /// Alignment for cells that do not set their own.
    pub alignment: HorizontalAlignment,
    /// Color overrides for cells that do not set their own.
    pub colors: ColorPair,
}

impl Row {
    /// Create a data row.
    #[must_use]
    pub fn data<T: Into<Cell>>(cells: impl IntoIterator<Item = T>) -> Self {
        Self {
            kind: RowKind::Data,
            cells: cells.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Create a title row holding exactly one cell.
    #[must_use]
    pub fn title(title: impl Into<MultilineText>) -> Self {
        Self {
            kind: RowKind::Title,
            cells: vec![Cell::new(title)],
            ..Self::default()
        }
    }

    /// Create a header row from column headers.
    ///
    /// Columns without a header contribute an empty cell.
    #[must_use]
    pub fn header(columns: &[Column]) -> Self {
        Self {
            kind: RowKind::Header,
            cells: columns.iter().map(Column::header_cell).collect(),
            ..Self::default()
        }
    }

    /// Set left padding for the row.
    #[must_use]
    pub fn padding_left(mut self, padding: usize) -> Self {
        self.padding_left = Some(padding);
        self
    }

    /// Set right padding for the row.
    #[must_use]
    pub fn padding_right(mut self, padding: usize) -> Self {
        self.padding_right = Some(padding);
        self
    }

    /// Set alignment for the row.
    #[must_use]
    pub fn horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set foreground color for the row.
    #[must_use]
    pub fn foreground(mut self, color: ConsoleColor) -> Self {
        self.colors.foreground = Some(color);
        self
    }

    /// Set background color for the row.
    #[must_use]
    pub fn background(mut self, color: ConsoleColor) -> Self {
        self.colors.background = Some(color);
        self
    }

    /// Append a cell.
    pub fn add_cell(&mut self, cell: impl Into<Cell>) {
        self.cells.push(cell.into());
    }

    /// Number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Cell at a column position.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Mutable cell at a column position.
    pub fn cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    /// Check whether the row has content to display.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.cells.iter().any(|cell| !cell.is_empty())
    }

    /// Layer the row's overrides over an inherited context.
    #[must_use]
    pub fn apply(&self, inherited: CellContext) -> CellContext {
        CellContext {
            padding: Padding::new(
                self.padding_left.unwrap_or(inherited.padding.left),
                self.padding_right.unwrap_or(inherited.padding.right),
            ),
            alignment: self.alignment.or(inherited.alignment),
            colors: self.colors.or(inherited.colors),
        }
    }

    /// Size the row needs without expansion.
    ///
    /// Width is the sum of preferred cell widths, plus one glyph before the
    /// first cell and after every cell when borders are drawn. Height is
    /// the tallest cell.
    pub fn preferred_size<F>(&self, display_border: bool, mut context: F) -> Size
    where
        F: FnMut(usize) -> CellContext,
    {
        let border = usize::from(display_border);
        let mut size = Size::new(border, 0);
        for (index, cell) in self.cells.iter().enumerate() {
            let cell_size = cell.preferred_size(&context(index));
            size.width += cell_size.width + border;
            size.height = size.height.max(cell_size.height);
        }
        size
    }
}

impl<T: Into<Cell>> From<Vec<T>> for Row {
    fn from(cells: Vec<T>) -> Self {
        Self::data(cells)
    }
}
