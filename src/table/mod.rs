//! Tables with a title, column headers and data rows.
//!
//! A [`Table`] owns its rows and columns plus the table-wide settings that
//! cells fall back on. Layout is computed fresh by [`Table::dimensions`]
//! and rendering goes through any [`TablePrinter`].
//!
//! # Example
//!
//! ```
//! use console_tables::table::{Column, Table};
//!
//! let mut table = Table::new()
//!     .title("Numbers")
//!     .with_columns([Column::new("English"), Column::new("Japanese")])
//!     .display_column_headers(true);
//! table.add_row_cells(["one", "ichi"]);
//! table.add_row_cells(["two", "ni"]);
//!
//! let text = table.render_to_string();
//! assert!(text.starts_with("+---"));
//! assert!(text.contains("| one     | ichi     |"));
//! ```
//!
//! # Inherited settings
//!
//! Cells resolve what they leave unset in this order:
//!
//! - padding: cell, row, column, table
//! - alignment: cell, row, column, then `Left`
//! - colors: cell, row, table section colors

mod cell;
mod column;
mod dimensions;
mod render;
mod row;

pub use cell::{Cell, CellContext, Size};
pub use column::Column;
pub use dimensions::{ColumnWidths, TableDimensions};
pub use row::{Row, RowKind};

use std::fmt;
use std::io;

use log::{debug, warn};

use crate::border::BorderTemplate;
use crate::color::ColorPair;
use crate::padding::Padding;
use crate::printers::{ConsolePrinter, StreamPrinter, TablePrinter};
use crate::terminal;
use crate::text::{HorizontalAlignment, MultilineText};

/// A table of multi-line cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    title: Option<Row>,
    columns: Vec<Column>,
    rows: Vec<Row>,
    min_width: usize,
    display_border: bool,
    padding: Padding,
    display_title: bool,
    display_column_headers: bool,
    border_template: BorderTemplate,
    border_colors: ColorPair,
    title_colors: ColorPair,
    header_colors: ColorPair,
    data_colors: ColorPair,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            title: None,
            columns: Vec::new(),
            rows: Vec::new(),
            min_width: 0,
            display_border: true,
            padding: Padding::default(),
            display_title: true,
            display_column_headers: false,
            border_template: BorderTemplate::default(),
            border_colors: ColorPair::PLAIN,
            title_colors: ColorPair::PLAIN,
            header_colors: ColorPair::PLAIN,
            data_colors: ColorPair::PLAIN,
        }
    }
}

impl Table {
    /// Create a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Builder
    // ========================================================================

    /// Set the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<MultilineText>) -> Self {
        self.set_title(Some(title));
        self
    }

    /// Set the title alignment.
    ///
    /// Without a title, an empty title row holds the alignment until one is set.
    #[must_use]
    pub fn title_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.title
            .get_or_insert_with(|| Row::title(MultilineText::EMPTY))
            .alignment = alignment;
        self
    }

    /// Set the minimum total width, border glyphs included.
    #[must_use]
    pub fn min_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }

    /// Show or hide the border.
    #[must_use]
    pub fn display_border(mut self, display: bool) -> Self {
        self.display_border = display;
        self
    }

    /// Set the default cell padding.
    #[must_use]
    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Set the default left padding.
    #[must_use]
    pub fn padding_left(mut self, padding: usize) -> Self {
        self.padding.left = padding;
        self
    }

    /// Set the default right padding.
    #[must_use]
    pub fn padding_right(mut self, padding: usize) -> Self {
        self.padding.right = padding;
        self
    }

    /// Show or hide the title row.
    #[must_use]
    pub fn display_title(mut self, display: bool) -> Self {
        self.display_title = display;
        self
    }

    /// Show or hide the column header row.
    #[must_use]
    pub fn display_column_headers(mut self, display: bool) -> Self {
        self.display_column_headers = display;
        self
    }

    /// Set the border glyphs.
    #[must_use]
    pub fn border_template(mut self, template: BorderTemplate) -> Self {
        self.border_template = template;
        self
    }

    /// Set the colors of border glyphs.
    #[must_use]
    pub fn border_colors(mut self, colors: ColorPair) -> Self {
        self.border_colors = colors;
        self
    }

    /// Set the default colors of the title.
    #[must_use]
    pub fn title_colors(mut self, colors: ColorPair) -> Self {
        self.title_colors = colors;
        self
    }

    /// Set the default colors of column headers.
    #[must_use]
    pub fn header_colors(mut self, colors: ColorPair) -> Self {
        self.header_colors = colors;
        self
    }

    /// Set the default colors of data cells.
    #[must_use]
    pub fn data_colors(mut self, colors: ColorPair) -> Self {
        self.data_colors = colors;
        self
    }

    /// Add a column (builder pattern).
    #[must_use]
    pub fn with_column(mut self, column: Column) -> Self {
        self.add_column(column);
        self
    }

    /// Add multiple columns (builder pattern).
    #[must_use]
    pub fn with_columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        self.add_columns(columns);
        self
    }

    /// Add a row (builder pattern).
    #[must_use]
    pub fn with_row(mut self, row: Row) -> Self {
        self.add_row(row);
        self
    }

    /// Add a row from cell values (builder pattern).
    #[must_use]
    pub fn with_row_cells<T: Into<Cell>>(mut self, cells: impl IntoIterator<Item = T>) -> Self {
        self.add_row_cells(cells);
        self
    }

    // ========================================================================
    // Setters and getters
    // ========================================================================

    /// Replace or remove the title.
    pub fn set_title<T: Into<MultilineText>>(&mut self, title: Option<T>) {
        let alignment = self
            .title
            .as_ref()
            .map_or(HorizontalAlignment::Default, |row| row.alignment);
        self.title = title.map(|title| Row::title(title).horizontal_alignment(alignment));
    }

    /// The title text, if any.
    #[must_use]
    pub fn get_title(&self) -> Option<&MultilineText> {
        self.title
            .as_ref()
            .and_then(|row| row.cell(0))
            .map(|cell| &cell.content)
            .filter(|content| !content.is_empty())
    }

    /// The title row, for row-level overrides.
    #[must_use]
    pub fn title_row(&self) -> Option<&Row> {
        self.title.as_ref()
    }

    /// Mutable title row.
    pub fn title_row_mut(&mut self) -> Option<&mut Row> {
        self.title.as_mut()
    }

    pub fn set_min_width(&mut self, width: usize) {
        self.min_width = width;
    }

    #[must_use]
    pub const fn get_min_width(&self) -> usize {
        self.min_width
    }

    pub fn set_display_border(&mut self, display: bool) {
        self.display_border = display;
    }

    #[must_use]
    pub const fn is_border_displayed(&self) -> bool {
        self.display_border
    }

    pub fn set_padding(&mut self, padding: impl Into<Padding>) {
        self.padding = padding.into();
    }

    #[must_use]
    pub const fn get_padding(&self) -> Padding {
        self.padding
    }

    pub fn set_display_title(&mut self, display: bool) {
        self.display_title = display;
    }

    #[must_use]
    pub const fn is_title_displayed(&self) -> bool {
        self.display_title
    }

    pub fn set_display_column_headers(&mut self, display: bool) {
        self.display_column_headers = display;
    }

    #[must_use]
    pub const fn are_column_headers_displayed(&self) -> bool {
        self.display_column_headers
    }

    pub fn set_border_template(&mut self, template: BorderTemplate) {
        self.border_template = template;
    }

    #[must_use]
    pub const fn get_border_template(&self) -> &BorderTemplate {
        &self.border_template
    }

    // ========================================================================
    // Columns and rows
    // ========================================================================

    /// Add a column.
    pub fn add_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Add multiple columns.
    pub fn add_columns(&mut self, columns: impl IntoIterator<Item = Column>) {
        self.columns.extend(columns);
    }

    /// Column definitions.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Mutable column at an index.
    pub fn column_mut(&mut self, index: usize) -> Option<&mut Column> {
        self.columns.get_mut(index)
    }

    /// Add a data row.
    ///
    /// Rows of another kind are stored as data rows.
    pub fn add_row(&mut self, mut row: Row) {
        row.kind = RowKind::Data;
        self.rows.push(row);
    }

    /// Add multiple data rows.
    pub fn add_rows(&mut self, rows: impl IntoIterator<Item = Row>) {
        for row in rows {
            self.add_row(row);
        }
    }

    /// Add a row from cell values.
    pub fn add_row_cells<T: Into<Cell>>(&mut self, cells: impl IntoIterator<Item = T>) {
        self.rows.push(Row::data(cells));
    }

    /// Add a row from displayable values.
    pub fn add_row_display(&mut self, values: &[&dyn fmt::Display]) {
        self.rows
            .push(Row::data(values.iter().map(|value| Cell::from_display(*value))));
    }

    /// Data rows.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Data row at an index.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Mutable data row at an index.
    pub fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    /// Number of data rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Remove every data row. Columns and title are kept.
    pub fn clear_rows(&mut self) {
        self.rows.clear();
    }

    // ========================================================================
    // Layout and rendering
    // ========================================================================

    /// The title row, when it has content and is displayed.
    #[must_use]
    pub fn visible_title(&self) -> Option<&Row> {
        self.title
            .as_ref()
            .filter(|row| self.display_title && row.has_content())
    }

    /// The header row, when headers are displayed and columns exist.
    #[must_use]
    pub fn visible_header(&self) -> Option<Row> {
        (self.display_column_headers && !self.columns.is_empty())
            .then(|| Row::header(&self.columns))
    }

    /// Settings a cell at `column` of `row` inherits.
    #[must_use]
    pub fn cell_context(&self, row: &Row, column: usize) -> CellContext {
        let mut inherited = CellContext::new(
            self.padding,
            HorizontalAlignment::Default,
            match row.kind {
                RowKind::Title => self.title_colors,
                RowKind::Header => self.header_colors,
                RowKind::Data => self.data_colors,
            },
        );

        if row.kind != RowKind::Title
            && let Some(column) = self.columns.get(column)
        {
            inherited.padding = Padding::new(
                column.padding_left.unwrap_or(self.padding.left),
                column.padding_right.unwrap_or(self.padding.right),
            );
            inherited.alignment = column.alignment;
        }

        row.apply(inherited)
    }

    /// Compute the layout.
    #[must_use]
    pub fn dimensions(&self) -> TableDimensions {
        TableDimensions::calculate(self)
    }

    /// Render to a printer.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the printer. Output written
    /// before the error stays written.
    pub fn render(&self, printer: &mut dyn TablePrinter) -> io::Result<()> {
        render::render(self, printer)
    }

    /// Render to plain text.
    #[must_use]
    pub fn render_to_string(&self) -> String {
        let mut printer = StreamPrinter::buffer();
        if let Err(err) = self.render(&mut printer) {
            warn!("rendering to a buffer failed: {err}");
        }
        printer.into_string()
    }

    /// Render to stdout, in color when the terminal supports it.
    ///
    /// # Errors
    ///
    /// Returns any error writing to stdout.
    pub fn display(&self) -> io::Result<()> {
        let width = self.dimensions().frame_width();
        let terminal_width = terminal::get_terminal_width();
        if width > terminal_width {
            debug!("table width {width} exceeds terminal width {terminal_width}, lines will wrap");
        }
        let mut printer = ConsolePrinter::stdout();
        self.render(&mut printer)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border::DOUBLE_LINE;
    use crate::color::ConsoleColor;
    use crate::printers::RecordingPrinter;
    use crate::segment::SegmentKind;

    fn numbers() -> Table {
        let mut table = Table::new();
        table.add_row_cells(["one", "ichi", "eins"]);
        table.add_row_cells(["two", "ni", "zwei"]);
        table.add_row_cells(["three", "san", "drei"]);
        table
    }

    #[test]
    fn test_defaults() {
        let table = Table::new();
        assert_eq!(table.get_min_width(), 0);
        assert!(table.is_border_displayed());
        assert_eq!(table.get_padding(), Padding::new(1, 1));
        assert!(table.is_title_displayed());
        assert!(!table.are_column_headers_displayed());
        assert_eq!(table.get_border_template(), &BorderTemplate::default());
        assert!(table.get_title().is_none());
    }

    #[test]
    fn test_render_plain_ascii() {
        let expected = "\
+-------+------+------+
| one   | ichi | eins |
| two   | ni   | zwei |
| three | san  | drei |
+-------+------+------+
";
        assert_eq!(numbers().render_to_string(), expected);
    }

    #[test]
    fn test_render_without_border() {
        let table = numbers().display_border(false);
        assert_eq!(
            table.render_to_string(),
            " one    ichi  eins \n two    ni    zwei \n three  san   drei \n"
        );
    }

    #[test]
    fn test_empty_table_renders_nothing() {
        assert_eq!(Table::new().render_to_string(), "");
        assert_eq!(Table::new().title("").render_to_string(), "");
    }

    #[test]
    fn test_title_only() {
        let table = Table::new().title("Hi");
        assert_eq!(table.render_to_string(), "+----+\n| Hi |\n+----+\n");
    }

    #[test]
    fn test_hidden_title_is_skipped() {
        let table = numbers().title("My Title").display_title(false);
        assert_eq!(table.render_to_string(), numbers().render_to_string());
    }

    #[test]
    fn test_headers_without_rows() {
        let table = Table::new()
            .with_columns([Column::new("A"), Column::new("B")])
            .display_column_headers(true)
            .border_template(DOUBLE_LINE);
        assert_eq!(
            table.render_to_string(),
            "╔═══╦═══╗\n║ A ║ B ║\n╚═══╩═══╝\n"
        );
    }

    #[test]
    fn test_blank_rows_close_the_frame_early() {
        let mut table = Table::new()
            .with_column(Column::new("H"))
            .display_column_headers(true);
        table.add_row_cells([""]);
        table.add_row(Row::data(Vec::<Cell>::new()));
        assert_eq!(table.render_to_string(), "+---+\n| H |\n+---+\n");

        let mut titled = Table::new().title("T");
        titled.add_row_cells([""]);
        assert_eq!(titled.render_to_string(), "+---+\n| T |\n+---+\n");

        let mut bare = Table::new();
        bare.add_row_cells(["", ""]);
        assert_eq!(bare.render_to_string(), "");
    }

    #[test]
    fn test_ragged_row_is_filled() {
        let mut table = Table::new();
        table.add_row_cells(["a", "b"]);
        table.add_row_cells(["c"]);
        assert_eq!(
            table.render_to_string(),
            "+---+---+\n| a | b |\n| c |   |\n+---+---+\n"
        );
    }

    #[test]
    fn test_multiline_cells() {
        let mut table = Table::new();
        table.add_row_cells(["a\nb", "c"]);
        assert_eq!(
            table.render_to_string(),
            "+---+---+\n| a | c |\n| b |   |\n+---+---+\n"
        );
    }

    #[test]
    fn test_column_alignment() {
        let mut table = Table::new()
            .with_column(Column::empty().horizontal_alignment(HorizontalAlignment::Right));
        table.add_row_cells(["1"]);
        table.add_row_cells(["100"]);
        assert_eq!(
            table.render_to_string(),
            "+-----+\n|   1 |\n| 100 |\n+-----+\n"
        );
    }

    #[test]
    fn test_row_management() {
        let mut table = numbers();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.row(1).and_then(|r| r.cell(1)).map(|c| c.content.width()), Some(2));
        assert!(table.row(3).is_none());

        if let Some(row) = table.row_mut(0) {
            row.add_cell("extra");
        }
        assert_eq!(table.rows()[0].cell_count(), 4);

        table.add_row_display(&[&1, &"two", &3.5]);
        assert_eq!(table.row_count(), 4);

        table.clear_rows();
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_setters() {
        let mut table = Table::new().with_row(Row::data(["a", "b"]));
        table.add_rows([Row::data(["c", "d"])]);
        table.set_display_border(false);
        table.set_padding(Padding::zero());
        table.set_min_width(0);
        assert_eq!(table.render_to_string(), "ab\ncd\n");

        table.set_display_border(true);
        table.set_padding(Padding::all(1));
        table.set_border_template(DOUBLE_LINE);
        table.add_column(Column::new("H"));
        table.set_display_column_headers(true);
        table.set_title(Some("hidden"));
        table.set_display_title(false);
        assert_eq!(
            table.render_to_string(),
            "\
╔═══╦═══╗
║ H ║   ║
╠═══╬═══╣
║ a ║ b ║
║ c ║ d ║
╚═══╩═══╝
"
        );
    }

    #[test]
    fn test_mutable_access() {
        let mut table = numbers().title("T").with_column(Column::new("n"));

        if let Some(column) = table.column_mut(0) {
            column.alignment = HorizontalAlignment::Right;
        }
        if let Some(cell) = table.row_mut(1).and_then(|row| row.cell_mut(0)) {
            cell.colors = ColorPair::new().foreground(ConsoleColor::Red);
        }
        if let Some(title) = table.title_row_mut() {
            title.colors = ColorPair::new().background(ConsoleColor::Blue);
        }
        assert!(table.column_mut(1).is_none());

        let row = &table.rows()[1];
        let context = table.cell_context(row, 0).resolve(&row.cells[0]);
        assert_eq!(context.alignment, HorizontalAlignment::Right);
        assert_eq!(context.colors.foreground, Some(ConsoleColor::Red));

        let title = table.visible_title().unwrap();
        assert_eq!(
            table.cell_context(title, 0).colors.background,
            Some(ConsoleColor::Blue)
        );
    }

    #[test]
    fn test_add_row_forces_data_kind() {
        let mut table = Table::new();
        table.add_row(Row::title("not a title"));
        assert_eq!(table.rows()[0].kind, RowKind::Data);
    }

    #[test]
    fn test_cell_context_inheritance() {
        let table = Table::new()
            .padding(Padding::all(2))
            .data_colors(ColorPair::new().foreground(ConsoleColor::Gray))
            .with_column(Column::empty().padding_right(0));
        let row = Row::data(["x", "y"]).padding_left(5);

        let first = table.cell_context(&row, 0);
        assert_eq!(first.padding, Padding::new(5, 0));
        assert_eq!(first.colors.foreground, Some(ConsoleColor::Gray));

        let second = table.cell_context(&row, 1);
        assert_eq!(second.padding, Padding::new(5, 2));
    }

    #[test]
    fn test_title_ignores_column_settings() {
        let table = Table::new()
            .title("T")
            .with_column(Column::empty().padding_left(9));
        let title = table.visible_title().unwrap();
        assert_eq!(table.cell_context(title, 0).padding, Padding::all(1));
    }

    #[test]
    fn test_set_title_keeps_alignment() {
        let mut table = Table::new()
            .title("old")
            .title_alignment(HorizontalAlignment::Center);
        table.set_title(Some("new"));
        assert_eq!(
            table.title_row().map(|row| row.alignment),
            Some(HorizontalAlignment::Center)
        );
        assert_eq!(table.get_title(), Some(&MultilineText::new("new")));

        table.set_title(None::<&str>);
        assert!(table.get_title().is_none());
    }

    #[test]
    fn test_title_alignment_in_either_order() {
        let title_first = Table::new()
            .title("T")
            .title_alignment(HorizontalAlignment::Right)
            .min_width(9);
        let alignment_first = Table::new()
            .title_alignment(HorizontalAlignment::Right)
            .title("T")
            .min_width(9);

        let expected = "+-------+\n|     T |\n+-------+\n";
        assert_eq!(title_first.render_to_string(), expected);
        assert_eq!(alignment_first.render_to_string(), expected);
    }

    #[test]
    fn test_title_alignment_alone_shows_nothing() {
        let table = Table::new().title_alignment(HorizontalAlignment::Center);
        assert!(table.get_title().is_none());
        assert!(table.visible_title().is_none());
        assert_eq!(table.render_to_string(), "");
    }

    #[test]
    fn test_render_emits_typed_fragments() {
        let table = Table::new()
            .title("T")
            .title_colors(ColorPair::new().foreground(ConsoleColor::Yellow))
            .border_colors(ColorPair::new().foreground(ConsoleColor::DarkGray))
            .with_row_cells(["v"]);

        let mut printer = RecordingPrinter::new();
        table.render(&mut printer).unwrap();

        let title = printer
            .segments()
            .iter()
            .find(|s| s.kind == SegmentKind::Title)
            .unwrap();
        assert_eq!(title.text, " T ");
        assert_eq!(title.colors.foreground, Some(ConsoleColor::Yellow));

        assert!(
            printer
                .segments()
                .iter()
                .filter(|s| s.kind == SegmentKind::Border)
                .all(|s| s.colors.foreground == Some(ConsoleColor::DarkGray))
        );
        assert_eq!(printer.lines(), ["+---+", "| T |", "+---+", "| v |", "+---+"]);
    }

    #[test]
    fn test_display_matches_render_to_string() {
        let table = numbers().title("x");
        assert_eq!(table.to_string(), table.render_to_string());
    }
}
