//! Decision ledger: one CSV row per mention, rejected ones included.

use std::path::Path;

use newscheck_core::{Decision, MentionOutcome};
use serde::Serialize;
use tracing::info;

use crate::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerRow {
    #[serde(rename = "Mention")]
    pub mention: String,
    #[serde(rename = "Normalized")]
    pub normalized: String,
    #[serde(rename = "Decision")]
    pub decision: String,
    #[serde(rename = "Field")]
    pub field: String,
    #[serde(rename = "Score")]
    pub score: Option<u8>,
    #[serde(rename = "Contributor Name")]
    pub contributor_name: String,
    #[serde(rename = "Contributor Employer")]
    pub contributor_employer: String,
    #[serde(rename = "Details")]
    pub details: String,
}

impl From<&MentionOutcome> for LedgerRow {
    fn from(outcome: &MentionOutcome) -> Self {
        let mut row = Self {
            mention: outcome.mention.clone(),
            normalized: outcome.normalized.clone(),
            decision: outcome.decision.kind().to_string(),
            field: String::new(),
            score: None,
            contributor_name: String::new(),
            contributor_employer: String::new(),
            details: outcome.details.join("; "),
        };
        match &outcome.decision {
            Decision::Accepted(acc) => {
                row.field = acc.field.as_str().to_string();
                row.score = Some(acc.score);
                row.contributor_name = acc.contributor_name.clone();
                row.contributor_employer = acc.contributor_employer.clone();
            }
            // Keep the cause visible: "REVIEW (LLM error)" vs "REVIEW (LLM)".
            Decision::Review(_) => row.decision = outcome.decision.to_string(),
            Decision::Rejected | Decision::NoMatch => {}
        }
        row
    }
}

/// Write every outcome to `path` as CSV, overwriting any existing file.
pub fn write_ledger(path: &Path, outcomes: &[MentionOutcome]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    for outcome in outcomes {
        writer.serialize(LedgerRow::from(outcome))?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = outcomes.len(), "wrote decision ledger");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use newscheck_core::{Acceptance, MatchField, ReviewCause};

    fn outcomes() -> Vec<MentionOutcome> {
        vec![
            MentionOutcome {
                mention: "Acme Widgets".into(),
                normalized: "acme widgets".into(),
                decision: Decision::Accepted(Acceptance {
                    record_index: 0,
                    field: MatchField::Employer,
                    score: 95,
                    contributor_name: "Jane Doe".into(),
                    contributor_employer: "Acme Widgets, LLC".into(),
                }),
                details: vec!["same company".into()],
            },
            MentionOutcome {
                mention: "Random Co.".into(),
                normalized: "random".into(),
                decision: Decision::Rejected,
                details: vec![],
            },
            MentionOutcome {
                mention: "Zenith".into(),
                normalized: "zenith".into(),
                decision: Decision::Review(ReviewCause::ServiceFailure),
                details: vec!["timed out".into(), "retry later".into()],
            },
        ]
    }

    #[test]
    fn accepted_row_carries_match() {
        let row = LedgerRow::from(&outcomes()[0]);
        assert_eq!(row.decision, "ACCEPTED");
        assert_eq!(row.field, "Employer");
        assert_eq!(row.score, Some(95));
        assert_eq!(row.contributor_employer, "Acme Widgets, LLC");
        assert_eq!(row.details, "same company");
    }

    #[test]
    fn review_row_keeps_cause() {
        let row = LedgerRow::from(&outcomes()[2]);
        assert_eq!(row.decision, "REVIEW (LLM error)");
        assert_eq!(row.details, "timed out; retry later");
        assert_eq!(row.score, None);
    }

    #[test]
    fn writes_every_mention() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("ledger.csv");
        write_ledger(&path, &outcomes()).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(
            headers,
            [
                "Mention",
                "Normalized",
                "Decision",
                "Field",
                "Score",
                "Contributor Name",
                "Contributor Employer",
                "Details"
            ]
        );
        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][5], "Jane Doe");
        assert_eq!(&rows[0][6], "Acme Widgets, LLC");
        assert_eq!(&rows[1][2], "REJECTED");
        assert_eq!(&rows[1][4], "");
    }
}
