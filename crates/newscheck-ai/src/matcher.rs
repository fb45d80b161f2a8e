//! Per-mention comparison pipeline.
//!
//! normalize → shortlist → gate → (escalated) adjudicate, one mention at a
//! time. A failing service call degrades only the mention it belongs to.

use newscheck_core::{
    Band, CompareConfig, CompareSummary, ConfigError, Decision, GateAction, MentionOutcome,
    ReferenceCorpus, Thresholds, best_score, gate, normalize,
};
use tracing::{debug, info};

use crate::adjudicator::{Adjudicator, AdjudicatorSettings};
use crate::service::AdjudicationService;

/// Outcomes of one comparison run, in mention order.
#[derive(Debug, Clone)]
pub struct ComparisonRun {
    pub outcomes: Vec<MentionOutcome>,
    pub summary: CompareSummary,
}

pub struct ContributionMatcher<S> {
    adjudicator: Adjudicator<S>,
    top_k: usize,
    thresholds: Thresholds,
}

impl<S: AdjudicationService> ContributionMatcher<S> {
    /// Validates `config` up front so a bad setting fails before any mention runs.
    pub fn new(service: S, config: &CompareConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            adjudicator: Adjudicator::new(service, AdjudicatorSettings::from(config)),
            top_k: config.top_k,
            thresholds: config.thresholds(),
        })
    }

    pub fn adjudicator(&self) -> &Adjudicator<S> {
        &self.adjudicator
    }

    /// Run every mention against the corpus, sequentially.
    pub async fn compare(&self, mentions: &[String], corpus: &ReferenceCorpus) -> ComparisonRun {
        info!(
            mentions = mentions.len(),
            records = corpus.len(),
            top_k = self.top_k,
            low = self.thresholds.low,
            high = self.thresholds.high,
            "starting contribution comparison"
        );

        let mut outcomes = Vec::with_capacity(mentions.len());
        let mut service_calls = 0usize;

        for mention in mentions {
            let (outcome, called) = self.process_mention(mention, corpus).await;
            if called {
                service_calls += 1;
            }
            outcomes.push(outcome);
        }

        let summary = CompareSummary::from_outcomes(&outcomes, service_calls);
        info!(
            accepted = summary.accepted,
            review = summary.review,
            no_match = summary.no_match,
            rejected = summary.rejected,
            service_calls = summary.service_calls,
            "contribution comparison complete"
        );

        ComparisonRun { outcomes, summary }
    }

    /// Decide one mention. The flag reports whether the service was called.
    pub async fn process_mention(
        &self,
        mention: &str,
        corpus: &ReferenceCorpus,
    ) -> (MentionOutcome, bool) {
        let normalized = normalize(mention);
        let candidates = corpus.shortlist(&normalized, self.top_k);
        let best = best_score(&candidates);

        if gate(&candidates, &self.thresholds) == GateAction::Reject {
            debug!(
                mention,
                candidates = candidates.len(),
                best = ?best,
                "rejected at gate"
            );
            let outcome = MentionOutcome {
                mention: mention.to_string(),
                normalized,
                decision: Decision::Rejected,
                details: Vec::new(),
            };
            return (outcome, false);
        }

        debug!(
            mention,
            candidates = candidates.len(),
            best = ?best,
            band = best.map(|s| Band::classify(s, &self.thresholds).as_str()),
            "escalating to adjudication"
        );

        let adjudication = self
            .adjudicator
            .adjudicate(mention, &normalized, &candidates, corpus.records())
            .await;

        let outcome = MentionOutcome {
            mention: mention.to_string(),
            normalized,
            decision: adjudication.decision,
            details: adjudication.details,
        };
        (outcome, true)
    }
}
