/*!
# Student Dataset CSVs

Loading, column selection and writing for the student performance dataset.

## Pipeline

- **Loader** ([`read_table`]): semicolon-separated `student-mat.csv` into a [`Table`]
- **Projector** ([`project`]): keep [`SELECTED_COLUMNS`], in order
- **Writer** ([`write_table`]): comma-separated `student-mat-selected.csv`, header row, no index
- **Reporter** ([`write_report`]): shapes, column names and a preview of the first rows

## Values

Cells are typed per column: a column whose fields are all integers holds
[`Value::Int`], one whose fields are all numeric holds [`Value::Float`], and
anything else holds [`Value::Str`]. Empty fields are [`Value::Missing`].

## Usage

```rust,no_run
use student_dataset_csvs::{
    project, read_table, write_table, CsvResult, INPUT_DELIMITER, OUTPUT_DELIMITER,
    SELECTED_COLUMNS,
};

fn example() -> CsvResult<()> {
    let original = read_table("student-mat.csv", INPUT_DELIMITER)?;
    let selected = project(&original, SELECTED_COLUMNS)?;
    write_table("student-mat-selected.csv", &selected, OUTPUT_DELIMITER)?;
    Ok(())
}
```
*/

pub mod errors;
pub mod loader;
pub mod projection;
pub mod report;
pub mod schemas;
pub mod table;
pub mod writer;

// Re-export main types for convenience
pub use errors::{CsvError, CsvResult};
pub use loader::read_table;
pub use projection::project;
pub use report::{format_column_list, format_shape, render_preview, write_report};
pub use schemas::{
    DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE, INPUT_DELIMITER, OUTPUT_DELIMITER, PREVIEW_ROWS,
    SELECTED_COLUMNS,
};
pub use table::{ColumnType, Row, Table, Value};
pub use writer::write_table;
