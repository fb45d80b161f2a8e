//! Reference records, match candidates and per-mention decisions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;
use crate::shortlist::shortlist;

/// One campaign-finance contribution row.
///
/// Absent cells are carried as empty strings, never `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    pub contributor_name: String,
    pub contributor_employer: String,
}

impl ReferenceRecord {
    pub fn new(name: impl Into<String>, employer: impl Into<String>) -> Self {
        Self {
            contributor_name: name.into(),
            contributor_employer: employer.into(),
        }
    }
}

/// Read-only comparison corpus for one run.
///
/// Holds the original records plus two parallel normalized search spaces;
/// index `i` in each refers to `records[i]`.
#[derive(Debug, Clone, Default)]
pub struct ReferenceCorpus {
    records: Vec<ReferenceRecord>,
    names: Vec<String>,
    employers: Vec<String>,
}

impl ReferenceCorpus {
    pub fn new(records: Vec<ReferenceRecord>) -> Self {
        let names = records
            .iter()
            .map(|r| normalize(&r.contributor_name))
            .collect();
        let employers = records
            .iter()
            .map(|r| normalize(&r.contributor_employer))
            .collect();
        Self {
            records,
            names,
            employers,
        }
    }

    pub fn records(&self) -> &[ReferenceRecord] {
        &self.records
    }

    pub fn normalized_names(&self) -> &[String] {
        &self.names
    }

    pub fn normalized_employers(&self) -> &[String] {
        &self.employers
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Shortlist candidates for an already-normalized mention.
    pub fn shortlist(&self, normalized_mention: &str, top_k: usize) -> Vec<Candidate> {
        shortlist(normalized_mention, &self.names, &self.employers, top_k)
    }
}

/// A scored association between one mention and one reference record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Position in the reference corpus.
    pub index: usize,
    /// Normalized contributor name.
    pub contributor_name: String,
    /// Normalized contributor employer.
    pub contributor_employer: String,
    pub name_score: u8,
    pub employer_score: u8,
}

impl Candidate {
    pub fn best_score(&self) -> u8 {
        self.name_score.max(self.employer_score)
    }

    /// Field that carries the best score. Ties go to [`MatchField::Name`].
    pub fn winning_field(&self) -> MatchField {
        if self.name_score >= self.employer_score {
            MatchField::Name
        } else {
            MatchField::Employer
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchField {
    Name,
    Employer,
}

impl MatchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Employer => "Employer",
        }
    }
}

/// A confirmed match against one reference record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acceptance {
    pub record_index: usize,
    pub field: MatchField,
    pub score: u8,
    /// Original (un-normalized) contributor name.
    pub contributor_name: String,
    /// Original (un-normalized) contributor employer.
    pub contributor_employer: String,
}

impl Acceptance {
    pub fn from_candidate(candidate: &Candidate, record: &ReferenceRecord) -> Self {
        Self {
            record_index: candidate.index,
            field: candidate.winning_field(),
            score: candidate.best_score(),
            contributor_name: record.contributor_name.clone(),
            contributor_employer: record.contributor_employer.clone(),
        }
    }
}

/// Why a mention needs human review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewCause {
    /// The adjudication service failed: transport, auth, timeout, refusal.
    ServiceFailure,
    /// The service answered but no JSON verdict could be read.
    Unparseable,
    /// The service was unsure, or gave a verdict that could not be applied.
    Uncertain,
}

/// Outcome of processing one mention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Below the low threshold or no candidates. Never reported.
    Rejected,
    Accepted(Acceptance),
    /// The adjudicator ruled the candidates out. Never reported.
    NoMatch,
    Review(ReviewCause),
}

impl Decision {
    /// Whether this decision produces a report entry.
    pub fn is_reported(&self) -> bool {
        matches!(self, Self::Accepted(_) | Self::Review(_))
    }

    /// Short machine-friendly label.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rejected => "REJECTED",
            Self::Accepted(_) => "ACCEPTED",
            Self::NoMatch => "NO_MATCH",
            Self::Review(_) => "REVIEW",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected => write!(f, "REJECTED"),
            Self::Accepted(a) => write!(
                f,
                "ACCEPT ({} score={}) -> Contributor Name='{}', Contributor Employer='{}'",
                a.field.as_str(),
                a.score,
                a.contributor_name,
                a.contributor_employer
            ),
            Self::NoMatch => write!(f, "NO_MATCH (LLM)"),
            Self::Review(ReviewCause::ServiceFailure) => write!(f, "REVIEW (LLM error)"),
            Self::Review(_) => write!(f, "REVIEW (LLM)"),
        }
    }
}

/// Decision for one mention, with the detail lines that explain it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionOutcome {
    pub mention: String,
    pub normalized: String,
    pub decision: Decision,
    pub details: Vec<String>,
}

/// Aggregate counts over one comparison run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompareSummary {
    pub mentions: usize,
    pub accepted: usize,
    pub review: usize,
    pub no_match: usize,
    pub rejected: usize,
    pub service_calls: usize,
}

impl CompareSummary {
    pub fn from_outcomes(outcomes: &[MentionOutcome], service_calls: usize) -> Self {
        let mut summary = Self {
            mentions: outcomes.len(),
            service_calls,
            ..Self::default()
        };
        for outcome in outcomes {
            match outcome.decision {
                Decision::Rejected => summary.rejected += 1,
                Decision::Accepted(_) => summary.accepted += 1,
                Decision::NoMatch => summary.no_match += 1,
                Decision::Review(_) => summary.review += 1,
            }
        }
        summary
    }

    /// Number of entries written to the report.
    pub fn reported(&self) -> usize {
        self.accepted + self.review
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name_score: u8, employer_score: u8) -> Candidate {
        Candidate {
            index: 0,
            contributor_name: "acme".into(),
            contributor_employer: "other".into(),
            name_score,
            employer_score,
        }
    }

    #[test]
    fn corpus_normalizes_both_fields() {
        let corpus = ReferenceCorpus::new(vec![
            ReferenceRecord::new("Acme Widgets LLC", "Other"),
            ReferenceRecord::new("Jane Doe", ""),
        ]);
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.normalized_names(), ["acme widgets", "jane doe"]);
        assert_eq!(corpus.normalized_employers(), ["other", ""]);
        assert_eq!(corpus.records()[0].contributor_name, "Acme Widgets LLC");
    }

    #[test]
    fn winning_field_ties_favour_name() {
        assert_eq!(candidate(80, 80).winning_field(), MatchField::Name);
        assert_eq!(candidate(81, 80).winning_field(), MatchField::Name);
        assert_eq!(candidate(79, 80).winning_field(), MatchField::Employer);
    }

    #[test]
    fn acceptance_uses_original_record_text() {
        let record = ReferenceRecord::new("Acme Widgets LLC", "Other");
        let acc = Acceptance::from_candidate(&candidate(85, 20), &record);
        assert_eq!(acc.field, MatchField::Name);
        assert_eq!(acc.score, 85);
        assert_eq!(acc.contributor_name, "Acme Widgets LLC");
    }

    #[test]
    fn decision_labels() {
        let record = ReferenceRecord::new("Acme Widgets LLC", "Other");
        let accepted = Decision::Accepted(Acceptance::from_candidate(&candidate(91, 10), &record));
        assert_eq!(
            accepted.to_string(),
            "ACCEPT (Name score=91) -> Contributor Name='Acme Widgets LLC', Contributor Employer='Other'"
        );
        assert_eq!(
            Decision::Review(ReviewCause::Uncertain).to_string(),
            "REVIEW (LLM)"
        );
        assert_eq!(
            Decision::Review(ReviewCause::ServiceFailure).to_string(),
            "REVIEW (LLM error)"
        );
        assert!(accepted.is_reported());
        assert!(Decision::Review(ReviewCause::Unparseable).is_reported());
        assert!(!Decision::Rejected.is_reported());
        assert!(!Decision::NoMatch.is_reported());
    }

    #[test]
    fn summary_counts_each_decision() {
        let outcome = |decision| MentionOutcome {
            mention: "m".into(),
            normalized: "m".into(),
            decision,
            details: vec![],
        };
        let outcomes = vec![
            outcome(Decision::Rejected),
            outcome(Decision::Rejected),
            outcome(Decision::NoMatch),
            outcome(Decision::Review(ReviewCause::Unparseable)),
        ];
        let summary = CompareSummary::from_outcomes(&outcomes, 2);
        assert_eq!(summary.mentions, 4);
        assert_eq!(summary.rejected, 2);
        assert_eq!(summary.no_match, 1);
        assert_eq!(summary.review, 1);
        assert_eq!(summary.accepted, 0);
        assert_eq!(summary.service_calls, 2);
        assert_eq!(summary.reported(), 1);
    }
}
