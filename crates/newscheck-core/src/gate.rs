//! Two-threshold decision gate.
//!
//! A mention whose best shortlist score is at or below the low threshold is
//! rejected outright. Everything above it, gray band and high band alike, is
//! escalated to adjudication. The high threshold only labels the band; it
//! never auto-accepts.

use crate::config::Thresholds;
use crate::record::Candidate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateAction {
    Reject,
    Escalate,
}

/// Score band relative to the thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// `score <= low`
    Low,
    /// `low < score <= high`
    Gray,
    /// `score > high`
    High,
}

impl Band {
    pub fn classify(score: u8, thresholds: &Thresholds) -> Self {
        if score <= thresholds.low {
            Self::Low
        } else if score <= thresholds.high {
            Self::Gray
        } else {
            Self::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Gray => "gray",
            Self::High => "high",
        }
    }
}

/// Best `max(name_score, employer_score)` over the shortlist, if any.
pub fn best_score(candidates: &[Candidate]) -> Option<u8> {
    candidates.iter().map(Candidate::best_score).max()
}

/// Decide whether a shortlist is rejected or escalated.
pub fn gate(candidates: &[Candidate], thresholds: &Thresholds) -> GateAction {
    match best_score(candidates) {
        None => GateAction::Reject,
        Some(score) => match Band::classify(score, thresholds) {
            Band::Low => GateAction::Reject,
            Band::Gray | Band::High => GateAction::Escalate,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: Thresholds = Thresholds { low: 60, high: 90 };

    fn cand(index: usize, name_score: u8, employer_score: u8) -> Candidate {
        Candidate {
            index,
            contributor_name: String::new(),
            contributor_employer: String::new(),
            name_score,
            employer_score,
        }
    }

    #[test]
    fn empty_shortlist_rejected() {
        assert_eq!(gate(&[], &T), GateAction::Reject);
        assert_eq!(best_score(&[]), None);
    }

    #[test]
    fn low_boundary_is_inclusive_rejection() {
        assert_eq!(gate(&[cand(0, 60, 0)], &T), GateAction::Reject);
        assert_eq!(gate(&[cand(0, 0, 60)], &T), GateAction::Reject);
    }

    #[test]
    fn one_above_low_escalates() {
        assert_eq!(gate(&[cand(0, 61, 0)], &T), GateAction::Escalate);
        assert_eq!(gate(&[cand(0, 0, 61)], &T), GateAction::Escalate);
    }

    #[test]
    fn high_band_still_escalates() {
        assert_eq!(gate(&[cand(0, 100, 100)], &T), GateAction::Escalate);
        assert_eq!(Band::classify(100, &T), Band::High);
        assert_eq!(Band::classify(90, &T), Band::Gray);
        assert_eq!(Band::classify(91, &T), Band::High);
    }

    #[test]
    fn best_score_spans_all_candidates_and_fields() {
        let cands = [cand(0, 40, 10), cand(1, 10, 72), cand(2, 55, 55)];
        assert_eq!(best_score(&cands), Some(72));
        assert_eq!(gate(&cands, &T), GateAction::Escalate);
    }
}
