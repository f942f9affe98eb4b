//! # console_tables
//!
//! Fixed-width table layout and rendering for terminals and text streams.
//!
//! A [`Table`] holds an optional title, column definitions and rows of
//! multi-line cells. Rendering measures everything first, then writes
//! border glyphs and padded cell lines to a [`TablePrinter`].
//!
//! ## Quick Start
//!
//! ```
//! use console_tables::prelude::*;
//!
//! let mut table = Table::new().title("My Title").border_template(DOUBLE_LINE);
//! table.add_row_cells(["one", "ichi", "eins"]);
//! table.add_row_cells(["two", "ni", "zwei"]);
//!
//! let text = table.render_to_string();
//! assert!(text.starts_with("╔═══"));
//! assert_eq!(text.lines().count(), 6);
//! ```
//!
//! ## Core Concepts
//!
//! - **MultilineText**: immutable content split into lines
//! - **BorderTemplate**: the fifteen glyphs a frame is drawn with
//! - **Cell / Row / Column**: content plus padding, alignment and colors
//! - **TableDimensions**: the computed layout, recomputed on every call
//! - **TablePrinter**: where rendered fragments go

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod border;
pub mod cells;
pub mod color;
pub mod padding;
pub mod printers;
pub mod segment;
pub mod table;
pub mod terminal;
pub mod text;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::border::{
        ASCII, BorderLevel, BorderTemplate, BorderTemplateError, DOUBLE_LINE, HEAVY, ROUNDED,
        SINGLE_LINE, get_template,
    };
    pub use crate::color::{ColorPair, ColorParseError, ConsoleColor};
    pub use crate::padding::{Padding, PaddingParseError};
    pub use crate::printers::{ConsolePrinter, RecordingPrinter, StreamPrinter, TablePrinter};
    pub use crate::segment::{Segment, SegmentKind};
    pub use crate::table::{
        Cell, CellContext, Column, Row, RowKind, Size, Table, TableDimensions,
    };
    pub use crate::text::{HorizontalAlignment, MultilineText};
}

// Re-export key types at crate root
pub use border::BorderTemplate;
pub use color::{ColorPair, ConsoleColor};
pub use printers::TablePrinter;
pub use table::{Cell, Column, Row, Table, TableDimensions};
pub use text::{HorizontalAlignment, MultilineText};
