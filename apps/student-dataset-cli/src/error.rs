use student_dataset_csvs::CsvError;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Csv(#[from] CsvError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
