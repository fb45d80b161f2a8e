pub mod config;
pub mod gate;
pub mod normalize;
pub mod record;
pub mod report;
pub mod shortlist;
pub mod similarity;

pub use config::{CompareConfig, ConfigError, Thresholds};
pub use gate::{Band, GateAction, best_score, gate};
pub use normalize::normalize;
pub use record::{
    Acceptance, Candidate, CompareSummary, Decision, MatchField, MentionOutcome, ReferenceCorpus,
    ReferenceRecord, ReviewCause,
};
pub use report::{render_report, write_report};
pub use shortlist::shortlist;
pub use similarity::token_set_ratio;
