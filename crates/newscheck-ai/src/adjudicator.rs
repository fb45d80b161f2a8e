//! Same-entity adjudication of a fuzzy shortlist.
//!
//! The adjudicator sends the shortlist to an [`AdjudicationService`] and maps
//! its JSON verdict onto a [`Decision`]. It never fails: service errors and
//! unreadable responses both become [`Decision::Review`], with a detail line
//! that tells a reviewer which of the two happened.

use std::time::Duration;

use newscheck_core::{Acceptance, Candidate, CompareConfig, Decision, ReferenceRecord, ReviewCause};
use serde_json::Value;
use tracing::{debug, warn};

use crate::prompt::{SYSTEM_PROMPT, build_user_prompt};
use crate::service::{AdjudicationRequest, AdjudicationService, ServiceError};

/// Detail line for responses with no readable JSON verdict.
pub const UNPARSEABLE_DETAIL: &str = "Unparseable LLM response";

/// Model and budget for adjudication calls. Temperature is always 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjudicatorSettings {
    pub model: String,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl From<&CompareConfig> for AdjudicatorSettings {
    fn from(config: &CompareConfig) -> Self {
        Self {
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

/// Decision for one escalated mention plus the lines explaining it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjudication {
    pub decision: Decision,
    pub details: Vec<String>,
}

/// The service's answer, as read from its JSON object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Upper-cased decision string; `REVIEW` when absent.
    pub decision: String,
    /// 1-based candidate index; 0 when absent.
    pub index: i64,
    pub reason: String,
}

pub struct Adjudicator<S> {
    service: S,
    settings: AdjudicatorSettings,
}

impl<S: AdjudicationService> Adjudicator<S> {
    pub fn new(service: S, settings: AdjudicatorSettings) -> Self {
        Self { service, settings }
    }

    pub fn settings(&self) -> &AdjudicatorSettings {
        &self.settings
    }

    /// Build the request for one mention and its shortlist.
    pub fn request(
        &self,
        mention_original: &str,
        mention_normalized: &str,
        candidates: &[Candidate],
        records: &[ReferenceRecord],
    ) -> AdjudicationRequest {
        AdjudicationRequest {
            model: self.settings.model.clone(),
            system_prompt: SYSTEM_PROMPT.to_string(),
            user_prompt: build_user_prompt(
                mention_original,
                mention_normalized,
                candidates,
                records,
            ),
            max_tokens: self.settings.max_tokens,
            temperature: 0.0,
        }
    }

    /// Ask the service whether `mention` is the same entity as one of `candidates`.
    ///
    /// `records` is the full reference corpus; candidates point into it by index.
    pub async fn adjudicate(
        &self,
        mention_original: &str,
        mention_normalized: &str,
        candidates: &[Candidate],
        records: &[ReferenceRecord],
    ) -> Adjudication {
        let request = self.request(mention_original, mention_normalized, candidates, records);

        let text = match self.call(&request).await {
            Ok(text) => text,
            Err(e) => {
                warn!(mention = %mention_original, error = %e, "adjudication call failed");
                return Adjudication {
                    decision: Decision::Review(ReviewCause::ServiceFailure),
                    details: vec![e.to_string()],
                };
            }
        };

        let Some(verdict) = parse_verdict(&text) else {
            warn!(
                mention = %mention_original,
                raw = %text.chars().take(200).collect::<String>(),
                "unparseable adjudication response"
            );
            return Adjudication {
                decision: Decision::Review(ReviewCause::Unparseable),
                details: vec![UNPARSEABLE_DETAIL.to_string()],
            };
        };

        debug!(
            mention = %mention_original,
            decision = %verdict.decision,
            index = verdict.index,
            "adjudication verdict"
        );
        apply_verdict(verdict, candidates, records)
    }

    async fn call(&self, request: &AdjudicationRequest) -> Result<String, ServiceError> {
        match tokio::time::timeout(self.settings.timeout, self.service.decide(request)).await {
            Ok(result) => result,
            Err(_) => Err(ServiceError::Timeout(self.settings.timeout)),
        }
    }
}

/// Map a verdict onto a decision.
///
/// A `MATCH` whose index does not name a candidate falls through to review.
fn apply_verdict(
    verdict: Verdict,
    candidates: &[Candidate],
    records: &[ReferenceRecord],
) -> Adjudication {
    let picked = usize::try_from(verdict.index)
        .ok()
        .filter(|&i| i >= 1)
        .and_then(|i| candidates.get(i - 1));

    let decision = match (verdict.decision.as_str(), picked) {
        ("MATCH", Some(cand)) => {
            let record = records.get(cand.index).cloned().unwrap_or_default();
            Decision::Accepted(Acceptance::from_candidate(cand, &record))
        }
        ("NO_MATCH", _) => Decision::NoMatch,
        _ => Decision::Review(ReviewCause::Uncertain),
    };

    Adjudication {
        decision,
        details: vec![verdict.reason],
    }
}

/// Slice from the first `{` to the last `}`, if that forms a span.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Read a verdict from raw response text, which may wrap the JSON in prose.
///
/// Returns `None` when no object can be sliced out, the slice is not valid
/// JSON, or `index` is present but not an integer.
pub fn parse_verdict(text: &str) -> Option<Verdict> {
    let json = extract_json_object(text)?;
    let value: Value = serde_json::from_str(json).ok()?;
    let obj = value.as_object()?;

    let decision = match obj.get("decision") {
        None => "REVIEW".to_string(),
        Some(Value::String(s)) => s.trim().to_uppercase(),
        Some(other) => other.to_string().to_uppercase(),
    };

    let index = match obj.get("index") {
        None => 0,
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => i,
            None => n.as_f64().filter(|f| f.is_finite())?.trunc() as i64,
        },
        Some(Value::String(s)) => s.trim().parse().ok()?,
        Some(_) => return None,
    };

    let reason = match obj.get("reason") {
        None => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };

    Some(Verdict {
        decision,
        index,
        reason,
    })
}
