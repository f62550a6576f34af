pub mod select_columns;
