/*!
# Student Dataset Schema

File names, delimiters and the fixed column selection for the student
performance dataset.

The source file (`student-mat.csv`) is semicolon separated and carries 33
columns. The selected file (`student-mat-selected.csv`) is comma separated and
carries exactly [`SELECTED_COLUMNS`], in that order.
*/

/// Default source dataset, relative to the working directory
pub const DEFAULT_INPUT_FILE: &str = "student-mat.csv";

/// Default destination for the reduced dataset
pub const DEFAULT_OUTPUT_FILE: &str = "student-mat-selected.csv";

/// Field separator of the source dataset
pub const INPUT_DELIMITER: u8 = b';';

/// Field separator of the selected dataset
pub const OUTPUT_DELIMITER: u8 = b',';

/// Number of rows shown in the report preview
pub const PREVIEW_ROWS: usize = 5;

/// Columns kept in the selected dataset, in output order
pub const SELECTED_COLUMNS: &[&str] = &[
    "sex",
    "age",
    "Medu",
    "traveltime",
    "studytime",
    "failures",
    "paid",
    "activities",
    "higher",
    "internet",
    "famrel",
    "absences",
    "G3",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_selected_columns_are_unique() {
        let unique: HashSet<&str> = SELECTED_COLUMNS.iter().copied().collect();
        assert_eq!(unique.len(), SELECTED_COLUMNS.len());
        assert_eq!(SELECTED_COLUMNS.len(), 13);
    }

    #[test]
    fn test_selected_columns_order() {
        assert_eq!(SELECTED_COLUMNS.first(), Some(&"sex"));
        assert_eq!(SELECTED_COLUMNS.last(), Some(&"G3"));
    }
}
