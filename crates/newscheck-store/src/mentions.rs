//! Mention CSV: the company names pulled from news coverage.

use std::path::Path;

use tracing::info;

use crate::{StoreError, column_index, ensure_exists};

pub const MENTION_COLUMN: &str = "Company/Organization Name";

/// Load mention names in file order. Values are trimmed; blank cells are skipped.
pub fn load_mentions(path: &Path) -> Result<Vec<String>, StoreError> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(StoreError::NotCsv(path.to_path_buf()));
    }
    ensure_exists(path)?;

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let idx = column_index(reader.headers()?, MENTION_COLUMN, path)?;

    let mut mentions = Vec::new();
    for row in reader.records() {
        let row = row?;
        if let Some(value) = row.get(idx).map(str::trim)
            && !value.is_empty()
        {
            mentions.push(value.to_string());
        }
    }

    info!(path = %path.display(), count = mentions.len(), "loaded mentions");
    Ok(mentions)
}
