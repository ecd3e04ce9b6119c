use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce the student table from its source file.
///
/// Any of these is fatal for the session: no partial table is ever handed out,
/// and the web layer shows an error page instead of the search form.
#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("data file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("failed to parse csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("workbook contains no worksheets")]
    NoWorksheet,

    #[error("sheet has no header row after the {0} skipped leading rows")]
    NoHeader(usize),

    #[error("unsupported file extension: {0}")]
    UnsupportedFormat(String),
}
