use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("expected a .csv file: {}", .0.display())]
    NotCsv(PathBuf),

    #[error("{}: missing required column '{}'", path.display(), column)]
    MissingColumn { path: PathBuf, column: String },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
