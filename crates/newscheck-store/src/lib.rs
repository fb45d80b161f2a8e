//! File boundary: mention and contribution CSV loaders, report and ledger writers.

mod error;
pub use error::StoreError;

pub mod contributions;
pub mod ledger;
pub mod mentions;
pub mod report;

pub use contributions::{EMPLOYER_COLUMN, NAME_COLUMN, load_contributions};
pub use ledger::{LedgerRow, write_ledger};
pub use mentions::{MENTION_COLUMN, load_mentions};
pub use report::{report_file_name, write_report_file};

use std::path::Path;

/// Position of `column` in `headers`, or [`StoreError::MissingColumn`].
fn column_index(
    headers: &csv::StringRecord,
    column: &str,
    path: &Path,
) -> Result<usize, StoreError> {
    headers
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}').trim() == column)
        .ok_or_else(|| StoreError::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
        })
}

fn ensure_exists(path: &Path) -> Result<(), StoreError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(StoreError::NotFound(path.to_path_buf()))
    }
}
