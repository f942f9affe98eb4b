//! Golden (snapshot) tests for visual regression detection.
//!
//! Snapshots are stored inline next to each test.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run all golden tests
//! cargo test --test golden_test
//!
//! # Update snapshots when intentional changes are made
//! cargo insta test --accept
//! ```

mod common;

use common::{init_test_logging, numbers_table};
use console_tables::prelude::*;

fn fruit_table() -> Table {
    let mut table = Table::new();
    table.add_row_cells(["apple", "3"]);
    table.add_row_cells(["kiwi", "12"]);
    table
}

// =============================================================================
// Built-in Templates
// =============================================================================

#[test]
fn golden_single_line_with_headers() {
    init_test_logging();
    let table = fruit_table()
        .border_template(SINGLE_LINE)
        .with_columns([Column::new("Name"), Column::new("Qty")])
        .display_column_headers(true);

    insta::assert_snapshot!(table.render_to_string(), @r"
    ┌───────┬─────┐
    │ Name  │ Qty │
    ├───────┼─────┤
    │ apple │ 3   │
    │ kiwi  │ 12  │
    └───────┴─────┘
    ");
}

#[test]
fn golden_rounded_with_title() {
    init_test_logging();
    let table = fruit_table().border_template(ROUNDED).title("Fruit");

    insta::assert_snapshot!(table.render_to_string(), @r"
    ╭────────────╮
    │ Fruit      │
    ├───────┬────┤
    │ apple │ 3  │
    │ kiwi  │ 12 │
    ╰───────┴────╯
    ");
}

#[test]
fn golden_heavy_aligned() {
    init_test_logging();
    let table = fruit_table()
        .border_template(HEAVY)
        .title("Stock")
        .title_alignment(HorizontalAlignment::Center)
        .with_columns([
            Column::new("Name"),
            Column::new("Qty").horizontal_alignment(HorizontalAlignment::Right),
        ])
        .display_column_headers(true);

    insta::assert_snapshot!(table.render_to_string(), @r"
    ┏━━━━━━━━━━━━━┓
    ┃    Stock    ┃
    ┣━━━━━━━┳━━━━━┫
    ┃ Name  ┃ Qty ┃
    ┣━━━━━━━╋━━━━━┫
    ┃ apple ┃   3 ┃
    ┃ kiwi  ┃  12 ┃
    ┗━━━━━━━┻━━━━━┛
    ");
}

#[test]
fn golden_double_line_sample() {
    init_test_logging();
    insta::assert_snapshot!(DOUBLE_LINE.to_string(), @r"
    ╔═══╦═══╦═══╗
    ║   ║   ║   ║
    ╠═══╬═══╬═══╣
    ║   ║   ║   ║
    ╚═══╩═══╩═══╝
    ");
}

// =============================================================================
// Layout
// =============================================================================

#[test]
fn golden_multiline_title_with_min_width() {
    init_test_logging();
    let mut table = Table::new().title("Report\n2024").min_width(20);
    table.add_row_cells(["a", "b"]);

    insta::assert_snapshot!(table.render_to_string(), @r"
    +------------------+
    | Report           |
    | 2024             |
    +---------+--------+
    | a       | b      |
    +---------+--------+
    ");
}

#[test]
fn golden_numbers_with_title_and_headers() {
    init_test_logging();
    let table = numbers_table()
        .title("Numbers")
        .with_columns([Column::new("en"), Column::new("ja"), Column::new("de")])
        .display_column_headers(true);

    insta::assert_snapshot!(table.render_to_string(), @r"
    +---------------------+
    | Numbers             |
    +-------+------+------+
    | en    | ja   | de   |
    +-------+------+------+
    | one   | ichi | eins |
    | two   | ni   | zwei |
    | three | san  | drei |
    +-------+------+------+
    ");
}
