/*!
# Delimited File Writer

Serializes a [`Table`] with a header row and no index column. The destination
is replaced atomically: rows go to a temporary file next to it, which is
renamed into place only once fully flushed.
*/

use crate::{
    errors::{CsvError, CsvResult},
    table::Table,
};
use csv::WriterBuilder;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Write a table to `path`, creating or replacing it
pub fn write_table<P: AsRef<Path>>(path: P, table: &Table, delimiter: u8) -> CsvResult<()> {
    let path = path.as_ref();
    let write_error = |source: CsvError| CsvError::Write {
        path: path.to_path_buf(),
        source: Box::new(source),
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let temp = NamedTempFile::new_in(dir).map_err(|e| write_error(e.into()))?;
    let temp = write_records(temp, table, delimiter).map_err(write_error)?;
    temp.persist(path)
        .map_err(|e| write_error(CsvError::Io(e.error)))?;

    debug!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "wrote table"
    );

    Ok(())
}

fn write_records<W: Write>(writer: W, table: &Table, delimiter: u8) -> CsvResult<W> {
    let mut wtr = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    wtr.write_record(table.columns())?;
    for row in table.rows() {
        wtr.write_record(row.values().iter().map(ToString::to_string))?;
    }

    wtr.flush()?;
    wtr.into_inner().map_err(|e| CsvError::Io(e.into_error()))
}

// ================================================================================================
// Tests
// ================================================================================================
