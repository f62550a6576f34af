/*!
# Column Projection

Builds a new [`Table`] holding only the requested columns, in request order.
Rows are carried over unchanged.
*/

use crate::{
    errors::{CsvError, CsvResult},
    table::{Row, Table},
};

/// Select `columns` from `table`, in the order given.
///
/// Every row is kept. Fails with [`CsvError::MissingColumn`] naming each
/// requested column the table does not have.
pub fn project(table: &Table, columns: &[&str]) -> CsvResult<Table> {
    let mut indices = Vec::with_capacity(columns.len());
    let mut missing = Vec::new();

    for name in columns {
        match table.column_index(name) {
            Some(index) => indices.push(index),
            None => missing.push((*name).to_string()),
        }
    }

    if !missing.is_empty() {
        return Err(CsvError::MissingColumn(missing));
    }

    let column_names = indices
        .iter()
        .map(|&i| table.columns()[i].clone())
        .collect();
    let column_types = indices.iter().map(|&i| table.column_types()[i]).collect();
    let rows = table
        .rows()
        .iter()
        .map(|row| {
            Row::new(
                indices
                    .iter()
                    .filter_map(|&i| row.get(i).cloned())
                    .collect(),
            )
        })
        .collect();

    Ok(Table::from_parts(column_names, column_types, rows))
}
