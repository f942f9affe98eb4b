//! Table cells.
//!
//! A [`Cell`] owns its content and optional overrides. Everything it does not
//! override is supplied at measure/render time through a [`CellContext`],
//! which the table resolves from the enclosing row, column and table
//! settings. Cells never hold a reference to their parent.

use std::fmt;
use std::io;

use crate::cells::{cell_len, push_repeated, spaces};
use crate::color::{ColorPair, ConsoleColor};
use crate::padding::Padding;
use crate::printers::TablePrinter;
use crate::segment::SegmentKind;
use crate::text::{HorizontalAlignment, MultilineText};

/// Width and height in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    /// Create a size.
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

/// Inherited settings a cell falls back on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellContext {
    pub padding: Padding,
    pub alignment: HorizontalAlignment,
    pub colors: ColorPair,
}

impl CellContext {
    /// Create a context.
    #[must_use]
    pub const fn new(padding: Padding, alignment: HorizontalAlignment, colors: ColorPair) -> Self {
        Self {
            padding,
            alignment,
            colors,
        }
    }

    /// Apply a cell's own overrides on top of this context.
    ///
    /// `Default` alignment that survives every level resolves to `Left`.
    #[must_use]
    pub fn resolve(&self, cell: &Cell) -> Self {
        Self {
            padding: Padding::new(
                cell.padding_left.unwrap_or(self.padding.left),
                cell.padding_right.unwrap_or(self.padding.right),
            ),
            alignment: cell
                .alignment
                .or(self.alignment)
                .or(HorizontalAlignment::Left),
            colors: cell.colors.or(self.colors),
        }
    }
}

/// One rectangular unit of table content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    /// Cell content.
    pub content: MultilineText,
    /// Left padding override.
    pub padding_left: Option<usize>,
    /// Right padding override.
    pub padding_right: Option<usize>,
    /// Content alignment, `Default` to inherit.
    pub alignment: HorizontalAlignment,
    /// Color overrides.
    pub colors: ColorPair,
}

impl Cell {
    /// Create a cell with content.
    #[must_use]
    pub fn new(content: impl Into<MultilineText>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Create a cell from anything displayable.
    #[must_use]
    pub fn from_display(value: &dyn fmt::Display) -> Self {
        Self::new(value.to_string())
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

    /// Set both paddings.
    #[must_use]
    pub fn padding(self, padding: impl Into<Padding>) -> Self {
        let padding = padding.into();
        self.padding_left(padding.left).padding_right(padding.right)
    }

    /// Set content alignment.
    #[must_use]
    pub fn horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set foreground color.
    #[must_use]
    pub fn foreground(mut self, color: ConsoleColor) -> Self {
        self.colors.foreground = Some(color);
        self
    }

    /// Set background color.
    #[must_use]
    pub fn background(mut self, color: ConsoleColor) -> Self {
        self.colors.background = Some(color);
        self
    }

    /// Check whether the content has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Size the cell needs: content plus padding, by content height.
    #[must_use]
    pub fn preferred_size(&self, context: &CellContext) -> Size {
        let padding = context.resolve(self).padding;
        Size::new(
            padding.left + self.content.width() + padding.right,
            self.content.height(),
        )
    }

    /// Lay out one line of the cell in a `size` box.
    ///
    /// Lines past the content are blank fill of `size.width`. A content
    /// line longer than the space inside the padding is returned as-is.
    #[must_use]
    pub fn line_text(&self, line_index: usize, size: Size, context: &CellContext) -> String {
        let resolved = context.resolve(self);
        let line = match self.content.line(line_index) {
            Some(line) if line_index < size.height => line,
            _ => return spaces(size.width),
        };

        let padding = resolved.padding;
        let available = size.width.saturating_sub(padding.horizontal());
        let length = cell_len(line);
        if length > available {
            return line.to_string();
        }

        let (before, after) = resolved.alignment.split(available - length);
        let mut text = String::with_capacity(line.len() + size.width);
        push_repeated(&mut text, ' ', padding.left + before);
        text.push_str(line);
        push_repeated(&mut text, ' ', after + padding.right);
        text
    }

    /// Render one line to a printer as `kind` content.
    ///
    /// # Errors
    ///
    /// Returns any error from the printer.
    pub fn render_line(
        &self,
        printer: &mut dyn TablePrinter,
        line_index: usize,
        size: Size,
        context: &CellContext,
        kind: SegmentKind,
    ) -> io::Result<()> {
        let colors = context.resolve(self).colors;
        let text = self.line_text(line_index, size, context);
        printer.write_fragment(kind, &text, colors)
    }
}

impl<T: Into<MultilineText>> From<T> for Cell {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}
