use crate::error::{CliError, CliResult};
use std::path::{Path, PathBuf};
use student_dataset_csvs::{
    DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE, INPUT_DELIMITER, OUTPUT_DELIMITER, PREVIEW_ROWS,
};

/// Settings for one column selection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Semicolon-separated source dataset
    pub input: PathBuf,

    /// Destination of the selected dataset
    pub output: PathBuf,

    pub input_delimiter: u8,

    pub output_delimiter: u8,

    /// Rows shown in the report preview
    pub preview_rows: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            input_delimiter: INPUT_DELIMITER,
            output_delimiter: OUTPUT_DELIMITER,
            preview_rows: PREVIEW_ROWS,
        }
    }
}

impl PipelineConfig {
    pub fn new(input: PathBuf, output: PathBuf, preview_rows: usize) -> CliResult<Self> {
        let config = Self {
            input,
            output,
            preview_rows,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// The source file must never be the write target
    fn validate(&self) -> CliResult<()> {
        if resolve(&self.input) == resolve(&self.output) {
            return Err(CliError::InvalidConfig(format!(
                "input and output are the same file: {}",
                self.input.display()
            )));
        }
        Ok(())
    }
}

/// Canonical form of `path`, or of its parent joined with the file name when
/// the file does not exist yet
fn resolve(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            parent
                .canonicalize()
                .map(|dir| dir.join(name))
                .unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}
