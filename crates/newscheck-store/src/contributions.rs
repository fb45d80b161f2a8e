//! Contribution CSV: campaign-finance records to match against.

use std::path::Path;

use newscheck_core::{ReferenceCorpus, ReferenceRecord};
use tracing::info;

use crate::{StoreError, column_index, ensure_exists};

pub const NAME_COLUMN: &str = "Contributor Name";
pub const EMPLOYER_COLUMN: &str = "Contributor Employer";

/// Load every row as a reference record. Other columns are ignored;
/// missing cells become empty strings.
pub fn load_contributions(path: &Path) -> Result<ReferenceCorpus, StoreError> {
    ensure_exists(path)?;

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = reader.headers()?.clone();
    let name_idx = column_index(&headers, NAME_COLUMN, path)?;
    let employer_idx = column_index(&headers, EMPLOYER_COLUMN, path)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let cell = |idx: usize| row.get(idx).map(str::trim).unwrap_or_default();
        records.push(ReferenceRecord::new(cell(name_idx), cell(employer_idx)));
    }

    info!(path = %path.display(), count = records.len(), "loaded contribution records");
    Ok(ReferenceCorpus::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn loads_both_fields_and_ignores_extra_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cf.csv");
        fs::write(
            &path,
            "Amount,Contributor Name,Contributor Employer,Date\n\
             100,Acme Widgets LLC,Other,2024-01-01\n\
             250, Jane Doe ,\"Zenith Labs, Inc.\",2024-02-01\n",
        )
        .unwrap();

        let corpus = load_contributions(&path).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(
            corpus.records()[0],
            ReferenceRecord::new("Acme Widgets LLC", "Other")
        );
        assert_eq!(
            corpus.records()[1],
            ReferenceRecord::new("Jane Doe", "Zenith Labs, Inc.")
        );
        assert_eq!(corpus.normalized_employers()[1], "zenith labs");
    }

    #[test]
    fn short_rows_give_empty_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cf.csv");
        fs::write(&path, "Contributor Name,Contributor Employer\nAcme\n").unwrap();

        let corpus = load_contributions(&path).unwrap();
        assert_eq!(corpus.records()[0], ReferenceRecord::new("Acme", ""));
    }

    #[test]
    fn both_columns_required() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cf.csv");
        fs::write(&path, "Contributor Name,Amount\nAcme,5\n").unwrap();

        let err = load_contributions(&path).unwrap_err();
        assert!(matches!(
            err,
            StoreError::MissingColumn { ref column, .. } if column == EMPLOYER_COLUMN
        ));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_contributions(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
