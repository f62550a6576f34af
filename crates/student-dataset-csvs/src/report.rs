/*!
# Selection Report

Human-readable summary printed after the selected dataset is written: both
shapes, the selected column names, the output file, and a preview of the
first rows.
*/

use crate::table::Table;
use prettytable::format::{Alignment, FormatBuilder};
use prettytable::{Cell, Row as GridRow, Table as Grid};
use std::io::{self, Write};
use std::path::Path;

/// Write the full report for an original/selected table pair
pub fn write_report<W: Write>(
    out: &mut W,
    original: &Table,
    selected: &Table,
    output_path: &Path,
    preview_rows: usize,
) -> io::Result<()> {
    writeln!(out, "Original dataset shape: {}", format_shape(original))?;
    writeln!(out, "Selected dataset shape: {}", format_shape(selected))?;
    writeln!(out)?;
    writeln!(out, "Selected columns: {}", format_column_list(selected.columns()))?;
    writeln!(out)?;
    writeln!(
        out,
        "New file '{}' has been created successfully!",
        output_path.display()
    )?;
    writeln!(out)?;
    writeln!(out, "First few rows of the selected dataset:")?;
    out.write_all(render_preview(&selected.head(preview_rows)).as_bytes())?;
    out.flush()
}

/// `(rows, columns)`
pub fn format_shape(table: &Table) -> String {
    let (rows, columns) = table.shape();
    format!("({rows}, {columns})")
}

/// `['sex', 'age', ...]`
pub fn format_column_list(columns: &[String]) -> String {
    let quoted: Vec<String> = columns.iter().map(|c| format!("'{c}'")).collect();
    format!("[{}]", quoted.join(", "))
}

/// Render every row of `table` as an aligned text grid.
///
/// Rows are labelled with their zero-based position. Cells are right-aligned
/// to the widest of their header and values, two spaces apart.
pub fn render_preview(table: &Table) -> String {
    let mut grid = Grid::new();
    grid.set_format(
        FormatBuilder::new()
            .column_separator(' ')
            .padding(0, 1)
            .build(),
    );

    let mut header = vec![Cell::new("")];
    header.extend(
        table
            .columns()
            .iter()
            .map(|name| Cell::new_align(name, Alignment::RIGHT)),
    );
    grid.add_row(GridRow::new(header));

    for (i, row) in table.rows().iter().enumerate() {
        let mut cells = vec![Cell::new(&i.to_string())];
        cells.extend(
            row.values()
                .iter()
                .map(|value| Cell::new_align(&value.to_string(), Alignment::RIGHT)),
        );
        grid.add_row(GridRow::new(cells));
    }

    // Right padding leaves a trailing space on every line
    grid.to_string()
        .lines()
        .map(|line| format!("{}\n", line.trim_end()))
        .collect()
}
