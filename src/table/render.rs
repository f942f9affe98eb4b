//! Table rendering.
//!
//! The whole table is measured before the first write. Sections are then
//! emitted top to bottom: title block, header block, data rows, with the
//! separator between two blocks chosen by what comes next.

use std::io;

use log::{debug, trace};

use crate::border::{BorderLevel, BorderTemplate};
use crate::cells::spaces;
use crate::color::ColorPair;
use crate::printers::TablePrinter;

use super::Table;
use super::cell::Size;
use super::dimensions::TableDimensions;
use super::row::Row;

struct Renderer<'a> {
    table: &'a Table,
    dimensions: TableDimensions,
    printer: &'a mut dyn TablePrinter,
}

/// Render a table to a printer.
pub(super) fn render(table: &Table, printer: &mut dyn TablePrinter) -> io::Result<()> {
    let dimensions = table.dimensions();
    let mut renderer = Renderer {
        table,
        dimensions,
        printer,
    };
    renderer.render()
}

impl Renderer<'_> {
    fn render(&mut self) -> io::Result<()> {
        let table = self.table;
        let title = table.visible_title();
        let header = table.visible_header();
        let columns = self.dimensions.columns_width.clone();
        // Rows without a single content line draw nothing.
        let has_rows = !columns.is_empty() && self.dimensions.rows_height.iter().any(|&h| h > 0);

        if title.is_none() && header.is_none() && !has_rows {
            trace!("nothing visible, skipping render");
            return Ok(());
        }

        let title_width = [self.dimensions.title_cell_width()];
        let title_height = self.dimensions.title_row_height;
        let header_height = self.dimensions.header_row_height;
        let rows_height = self.dimensions.rows_height.clone();

        if let Some(title) = title {
            trace!("rendering title");
            self.border_line(&title_width, BorderLevel::Top)?;
            self.row(title, &title_width, title_height)?;

            if header.is_some() {
                self.border_line(&columns, BorderLevel::TitleHeader)?;
            } else if has_rows {
                self.border_line(&columns, BorderLevel::TitleData)?;
            } else {
                self.border_line(&title_width, BorderLevel::Bottom)?;
            }
        }

        if let Some(header) = &header {
            trace!("rendering column headers");
            if title.is_none() {
                self.border_line(&columns, BorderLevel::Top)?;
            }
            self.row(header, &columns, header_height)?;

            if has_rows {
                self.border_line(&columns, BorderLevel::HeaderData)?;
            } else {
                self.border_line(&columns, BorderLevel::Bottom)?;
            }
        }

        if has_rows {
            trace!("rendering {} data rows", table.rows().len());
            if title.is_none() && header.is_none() {
                self.border_line(&columns, BorderLevel::Top)?;
            }
            for (row, &height) in table.rows().iter().zip(&rows_height) {
                self.row(row, &columns, height)?;
            }
            self.border_line(&columns, BorderLevel::Bottom)?;
        }

        debug!(
            "rendered table: {} columns, {} rows, width {}",
            columns.len(),
            table.rows().len(),
            self.dimensions.frame_width()
        );
        Ok(())
    }

    fn template(&self) -> &BorderTemplate {
        &self.table.border_template
    }

    fn border_colors(&self) -> ColorPair {
        self.table.border_colors
    }

    /// Write a full separator line. Nothing is written without borders.
    fn border_line(&mut self, widths: &[usize], level: BorderLevel) -> io::Result<()> {
        if !self.table.display_border {
            return Ok(());
        }
        let line = self.template().build_line(widths, level);
        let colors = self.border_colors();
        self.printer.write_line_border(&line, colors)
    }

    fn row(&mut self, row: &Row, widths: &[usize], height: usize) -> io::Result<()> {
        let table = self.table;
        let border = table.display_border;
        let kind = row.kind.segment_kind();
        let colors = self.border_colors();
        let (left, inside, right) = {
            let template = self.template();
            (template.left, template.vertical_inside, template.right)
        };

        for line in 0..height {
            if border {
                self.printer.write_border_char(left, colors)?;
            }

            for (index, &width) in widths.iter().enumerate() {
                let context = table.cell_context(row, index);
                match row.cell(index) {
                    Some(cell) => cell.render_line(
                        self.printer,
                        line,
                        Size::new(width, height),
                        &context,
                        kind,
                    )?,
                    None => self.printer.write_fragment(kind, &spaces(width), context.colors)?,
                }

                if border {
                    let glyph = if index + 1 < widths.len() { inside } else { right };
                    self.printer.write_border_char(glyph, colors)?;
                }
            }

            self.printer.write_line()?;
        }
        Ok(())
    }
}
