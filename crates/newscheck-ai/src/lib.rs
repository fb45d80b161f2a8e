//! Adjudication layer: asks a text-generation service whether a fuzzy
//! shortlist really names the same entity, and drives the per-mention
//! comparison pipeline around it.

pub mod adjudicator;
pub mod matcher;
pub mod prompt;
pub mod service;

#[cfg(feature = "http")]
pub mod anthropic;

pub use adjudicator::{Adjudication, Adjudicator, AdjudicatorSettings, Verdict, parse_verdict};
pub use matcher::{ComparisonRun, ContributionMatcher};
pub use service::{AdjudicationRequest, AdjudicationService, ServiceError};

#[cfg(feature = "http")]
pub use anthropic::AnthropicClient;
