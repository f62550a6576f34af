use crate::config::PipelineConfig;
use crate::error::CliResult;
use std::io;
use student_dataset_csvs::{project, read_table, write_report, write_table, SELECTED_COLUMNS};
use tracing::{info, warn};

/// Load the source dataset, keep the selected columns, write them out and
/// print the summary report.
///
/// Nothing is written when loading or selection fails. The report is best
/// effort: a broken stdout is logged, not returned.
pub fn execute(config: &PipelineConfig) -> CliResult<()> {
    info!(input = %config.input.display(), "loading dataset");
    let original = read_table(&config.input, config.input_delimiter)?;

    let selected = project(&original, SELECTED_COLUMNS)?;
    info!(
        rows = selected.row_count(),
        columns = selected.column_count(),
        "selected columns"
    );

    write_table(&config.output, &selected, config.output_delimiter)?;
    info!(output = %config.output.display(), "wrote selected dataset");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_report(
        &mut out,
        &original,
        &selected,
        &config.output,
        config.preview_rows,
    ) {
        warn!("Failed to print report: {}", e);
    }

    Ok(())
}
