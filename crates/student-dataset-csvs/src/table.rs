/*!
# In-Memory Table

A [`Table`] is an ordered list of rows sharing one ordered header. Cells are
[`Value`]s, a tagged scalar decided per column when the table is built from
raw text (see [`ColumnType::infer`]).

Tables are never mutated after construction; projection and preview build new
tables.
*/

use std::fmt;

// ================================================================================================
// Values
// ================================================================================================

/// A single cell
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    /// Empty field
    Missing,
}

impl Value {
    /// Parse a raw field under an already inferred column type
    pub fn parse(raw: &str, column_type: ColumnType) -> Self {
        if raw.is_empty() {
            return Value::Missing;
        }
        match column_type {
            ColumnType::Int => parse_int(raw)
                .map(Value::Int)
                .unwrap_or_else(|| Value::Str(raw.to_string())),
            // "nan" is an absent reading, not a number
            ColumnType::Float => match parse_float(raw) {
                Some(v) if v.is_nan() => Value::Missing,
                Some(v) => Value::Float(v),
                None => Value::Str(raw.to_string()),
            },
            ColumnType::Str => Value::Str(raw.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            // Shortest round-trip form; integral values keep their ".0"
            Value::Float(v) => write!(f, "{v:?}"),
            Value::Str(v) => f.write_str(v),
            Value::Missing => Ok(()),
        }
    }
}

fn parse_int(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok()
}

fn parse_float(raw: &str) -> Option<f64> {
    let unsigned = raw.trim_start_matches(|c: char| c == '+' || c == '-');
    let special = ["inf", "infinity", "nan"]
        .iter()
        .any(|word| unsigned.eq_ignore_ascii_case(word));
    if !special && !raw.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<f64>().ok()
}

// ================================================================================================
// Column Types
// ================================================================================================

/// Storage type of a column, decided once over all of its fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Int,
    Float,
    Str,
}

impl ColumnType {
    /// Infer the narrowest type that every non-empty field satisfies.
    ///
    /// A column with no non-empty fields is a string column.
    pub fn infer<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = false;
        let mut all_int = true;
        let mut all_float = true;

        for field in fields.into_iter().filter(|f| !f.is_empty()) {
            seen = true;
            if all_int && parse_int(field).is_none() {
                all_int = false;
            }
            if !all_int && parse_float(field).is_none() {
                all_float = false;
                break;
            }
        }

        match (seen, all_int, all_float) {
            (false, _, _) => ColumnType::Str,
            (true, true, _) => ColumnType::Int,
            (true, false, true) => ColumnType::Float,
            (true, false, false) => ColumnType::Str,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Int => "int64",
            ColumnType::Float => "float64",
            ColumnType::Str => "object",
        };
        f.write_str(name)
    }
}

// ================================================================================================
// Rows & Tables
// ================================================================================================

/// One record, aligned with its table's columns
#[derive(Debug, Clone, PartialEq)]
pub struct Row(Vec<Value>);

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[Value] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    column_types: Vec<ColumnType>,
    rows: Vec<Row>,
}

impl Table {
    /// Build a table from a header and raw text records.
    ///
    /// Callers guarantee every record has `columns.len()` fields and that
    /// column names are unique; the loader checks both before calling this.
    pub fn from_raw(columns: Vec<String>, records: &[Vec<String>]) -> Self {
        let column_types: Vec<ColumnType> = (0..columns.len())
            .map(|i| {
                ColumnType::infer(
                    records
                        .iter()
                        .map(|record| record.get(i).map(String::as_str).unwrap_or("")),
                )
            })
            .collect();

        let rows = records
            .iter()
            .map(|record| {
                Row::new(
                    record
                        .iter()
                        .zip(&column_types)
                        .map(|(raw, column_type)| Value::parse(raw, *column_type))
                        .collect(),
                )
            })
            .collect();

        Self {
            columns,
            column_types,
            rows,
        }
    }

    pub(crate) fn from_parts(
        columns: Vec<String>,
        column_types: Vec<ColumnType>,
        rows: Vec<Row>,
    ) -> Self {
        debug_assert_eq!(columns.len(), column_types.len());
        debug_assert!(rows.iter().all(|row| row.len() == columns.len()));
        Self {
            columns,
            column_types,
            rows,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_types(&self) -> &[ColumnType] {
        &self.column_types
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at `row` in the column called `column`
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)
    }

    /// The first `min(n, row_count)` rows as a new table
    pub fn head(&self, n: usize) -> Self {
        Self {
            columns: self.columns.clone(),
            column_types: self.column_types.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }
}

// ================================================================================================
// Tests
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(records: &[&[&str]]) -> Vec<Vec<String>> {
        records
            .iter()
            .map(|r| r.iter().map(|f| f.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_column_type_inference() {
        assert_eq!(ColumnType::infer(["18", "17", "-3"]), ColumnType::Int);
        assert_eq!(ColumnType::infer(["1", "2.5"]), ColumnType::Float);
        assert_eq!(ColumnType::infer(["1", "yes"]), ColumnType::Str);
        assert_eq!(ColumnType::infer(["", "4"]), ColumnType::Int);
        assert_eq!(ColumnType::infer(["", ""]), ColumnType::Str);
        assert_eq!(ColumnType::infer(["1.5", "inf", "-INF", "NaN"]), ColumnType::Float);
        assert_eq!(ColumnType::infer(["1.5", "info"]), ColumnType::Str);
        assert_eq!(ColumnType::infer(["1.5", "e"]), ColumnType::Str);
    }

    #[test]
    fn test_values_follow_column_type() {
        let table = Table::from_raw(
            vec!["age".into(), "score".into(), "paid".into(), "code".into()],
            &raw(&[&["18", "1", "no", "7"], &["17", "2.5", "yes", "x"]]),
        );

        assert_eq!(
            table.column_types(),
            &[
                ColumnType::Int,
                ColumnType::Float,
                ColumnType::Str,
                ColumnType::Str
            ]
        );
        assert_eq!(table.get(0, "age"), Some(&Value::Int(18)));
        assert_eq!(table.get(0, "score"), Some(&Value::Float(1.0)));
        assert_eq!(table.get(1, "paid"), Some(&Value::Str("yes".to_string())));
        // Numeric-looking text in a string column stays text
        assert_eq!(table.get(0, "code"), Some(&Value::Str("7".to_string())));
        assert_eq!(table.get(2, "age"), None);
        assert_eq!(table.get(0, "nope"), None);
    }

    #[test]
    fn test_nan_in_float_column_is_missing() {
        let table = Table::from_raw(vec!["x".into()], &raw(&[&["1.5"], &["nan"], &["inf"]]));
        assert_eq!(table.column_types(), &[ColumnType::Float]);
        assert_eq!(table.get(1, "x"), Some(&Value::Missing));
        assert_eq!(table.get(2, "x"), Some(&Value::Float(f64::INFINITY)));
    }

    #[test]
    fn test_empty_fields_are_missing() {
        let table = Table::from_raw(vec!["absences".into()], &raw(&[&["6"], &[""]]));
        assert_eq!(table.column_types(), &[ColumnType::Int]);
        assert!(table.get(1, "absences").is_some_and(Value::is_missing));
    }

    #[test]
    fn test_value_rendering() {
        assert_eq!(Value::Int(18).to_string(), "18");
        assert_eq!(Value::Float(1.0).to_string(), "1.0");
        assert_eq!(Value::Float(0.25).to_string(), "0.25");
        assert_eq!(Value::Float(-3.5).to_string(), "-3.5");
        assert_eq!(Value::Float(1e22).to_string(), "1e22");
        assert_eq!(Value::Float(1e-7).to_string(), "1e-7");
        assert_eq!(Value::Float(f64::INFINITY).to_string(), "inf");
        assert_eq!(Value::Float(f64::NEG_INFINITY).to_string(), "-inf");
        assert_eq!(Value::Str("GP".to_string()).to_string(), "GP");
        assert_eq!(Value::Missing.to_string(), "");
    }

    #[test]
    fn test_shape_and_head() {
        let table = Table::from_raw(
            vec!["a".into(), "b".into()],
            &raw(&[&["1", "x"], &["2", "y"], &["3", "z"]]),
        );
        assert_eq!(table.shape(), (3, 2));

        let head = table.head(2);
        assert_eq!(head.shape(), (2, 2));
        assert_eq!(head.rows(), &table.rows()[..2]);

        assert_eq!(table.head(10).shape(), (3, 2));
    }
}
