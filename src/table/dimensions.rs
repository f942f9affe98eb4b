//! Table layout calculation.
//!
//! [`TableDimensions::calculate`] measures a table in one pass per section:
//!
//! 1. the title row, if visible
//! 2. the header row, one column width per column
//! 3. every data row, growing the column list lazily for ragged rows
//!
//! The total width is the widest of the configured minimum and the three
//! sections. When the columns (plus border glyphs) fall short of it, the
//! shortfall is handed out one character at a time, round-robin from the
//! first column.
//!
//! The result is a fresh value on every call; nothing is cached on the table.

use log::{debug, trace};
use smallvec::SmallVec;

use super::Table;

/// Column widths. Most tables have few columns.
pub type ColumnWidths = SmallVec<[usize; 8]>;

/// Computed layout of a table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableDimensions {
    /// Content width of every column, without border glyphs.
    pub columns_width: ColumnWidths,
    /// Height of every data row.
    pub rows_height: Vec<usize>,
    /// Width of the title row, border glyphs included.
    pub title_row_width: usize,
    /// Height of the title row.
    pub title_row_height: usize,
    /// Width of the header row, border glyphs included.
    pub header_row_width: usize,
    /// Height of the header row.
    pub header_row_height: usize,
    /// Widest data row, border glyphs included.
    pub longest_data_row_width: usize,
    /// Width the table is laid out to.
    pub total_width: usize,
    display_border: bool,
}

impl TableDimensions {
    /// Measure a table.
    #[must_use]
    pub fn calculate(table: &Table) -> Self {
        let mut dimensions = Self {
            display_border: table.display_border,
            ..Self::default()
        };

        dimensions.measure_title(table);
        dimensions.measure_header(table);
        dimensions.measure_data_rows(table);

        dimensions.total_width = table
            .min_width
            .max(dimensions.title_row_width)
            .max(dimensions.header_row_width)
            .max(dimensions.longest_data_row_width);

        dimensions.expand_columns();

        debug!(
            "table dimensions: columns={:?} rows={} total_width={}",
            dimensions.columns_width.as_slice(),
            dimensions.rows_height.len(),
            dimensions.total_width
        );
        dimensions
    }

    fn measure_title(&mut self, table: &Table) {
        let Some(title) = table.visible_title() else {
            return;
        };
        let size = title.preferred_size(self.display_border, |column| {
            table.cell_context(title, column)
        });
        self.title_row_width = size.width;
        self.title_row_height = size.height;
    }

    fn measure_header(&mut self, table: &Table) {
        let Some(header) = table.visible_header() else {
            return;
        };
        let border = self.border_glyph();

        self.header_row_width = border;
        for (index, cell) in header.cells.iter().enumerate() {
            let size = cell.preferred_size(&table.cell_context(&header, index));
            let width = self.allocate_column(table, index).max(size.width);
            self.columns_width[index] = width;
            self.header_row_width += width + border;
            self.header_row_height = self.header_row_height.max(size.height);
        }
    }

    fn measure_data_rows(&mut self, table: &Table) {
        let border = self.border_glyph();

        for row in table.rows() {
            let mut row_width = border;
            let mut row_height = 0;

            for (index, cell) in row.cells.iter().enumerate() {
                let size = cell.preferred_size(&table.cell_context(row, index));
                let width = self.allocate_column(table, index).max(size.width);
                self.columns_width[index] = width;
                row_width += width + border;
                row_height = row_height.max(size.height);
            }

            self.rows_height.push(row_height);
            self.longest_data_row_width = self.longest_data_row_width.max(row_width);
        }
    }

    /// Current width of a column, appending it first if it is new.
    ///
    /// New columns start at their configured minimum width.
    fn allocate_column(&mut self, table: &Table, index: usize) -> usize {
        if index == self.columns_width.len() {
            let seed = table.columns().get(index).map_or(0, |column| column.min_width);
            self.columns_width.push(seed);
        }
        self.columns_width[index]
    }

    fn expand_columns(&mut self) {
        let count = self.columns_width.len();
        if count == 0 {
            return;
        }

        let columns_total = self.columns_total_width();
        if columns_total >= self.total_width {
            return;
        }

        let diff = self.total_width - columns_total;
        trace!("expanding {count} columns by {diff}");
        for i in 0..diff {
            self.columns_width[i % count] += 1;
        }
    }

    const fn border_glyph(&self) -> usize {
        if self.display_border { 1 } else { 0 }
    }

    /// Border glyphs on a full line: one per column plus the leading one,
    /// or none when borders are hidden.
    #[must_use]
    pub fn border_overhead(&self) -> usize {
        if self.display_border {
            self.columns_width.len() + 1
        } else {
            0
        }
    }

    /// Sum of column widths plus border overhead.
    #[must_use]
    pub fn columns_total_width(&self) -> usize {
        self.columns_width.iter().sum::<usize>() + self.border_overhead()
    }

    /// Width of the drawn frame.
    ///
    /// Equal to `total_width` unless a ragged layout left the columns
    /// wider than every single row, in which case the columns win.
    #[must_use]
    pub fn frame_width(&self) -> usize {
        if self.columns_width.is_empty() {
            self.total_width
        } else {
            self.total_width.max(self.columns_total_width())
        }
    }

    /// Width available to the title cell.
    #[must_use]
    pub fn title_cell_width(&self) -> usize {
        if self.display_border {
            self.frame_width().saturating_sub(2)
        } else {
            self.frame_width()
        }
    }
}
