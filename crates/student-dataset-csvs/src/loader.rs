/*!
# Delimited File Loader

Reads a delimited text file into a [`Table`]. The first record is the header;
every later record must carry exactly as many fields as the header.
*/

use crate::{
    errors::{CsvError, CsvResult},
    table::Table,
};
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Read a delimited file into a table
pub fn read_table<P: AsRef<Path>>(path: P, delimiter: u8) -> CsvResult<Table> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CsvError::FileNotFound(path.to_path_buf()),
        _ => CsvError::Io(e),
    })?;

    let table = load(file, delimiter)?.ok_or_else(|| CsvError::EmptyInput(path.to_path_buf()))?;

    debug!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded table"
    );

    Ok(table)
}

/// `None` when the input has no header record
fn load<R: Read>(reader: R, delimiter: u8) -> CsvResult<Option<Table>> {
    // Field counts are checked here so the error can name the line
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = rdr.records();

    let Some(header) = records.next() else {
        return Ok(None);
    };
    let columns = validate_header(&header?)?;

    let mut raw_rows = Vec::new();
    for result in records {
        let record = result?;
        if record.len() != columns.len() {
            return Err(CsvError::MalformedRow {
                line: record.position().map(|p| p.line()).unwrap_or_default(),
                expected: columns.len(),
                found: record.len(),
            });
        }
        raw_rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    Ok(Some(Table::from_raw(columns, &raw_rows)))
}

// ================================================================================================
// Header Validation
// ================================================================================================

fn validate_header(header: &StringRecord) -> CsvResult<Vec<String>> {
    let mut seen = HashSet::new();
    let mut columns = Vec::with_capacity(header.len());

    for (i, name) in header.iter().enumerate() {
        let name = if i == 0 {
            name.trim_start_matches('\u{feff}')
        } else {
            name
        };
        if !seen.insert(name) {
            return Err(CsvError::DuplicateColumn(name.to_string()));
        }
        columns.push(name.to_string());
    }

    Ok(columns)
}

// ================================================================================================
// Tests
// ================================================================================================
