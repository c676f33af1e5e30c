use ai_core::ObjectId;
use ai_sampling::SamplingError;
use thiserror::Error;

/// Setup-time configuration failures. Per-tick results are [`crate::TickOutcome`]s, not errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AvoidError {
    #[error("invalid avoidance config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: &'static str,
        value: f32,
        reason: &'static str,
    },

    #[error("no threat configured")]
    UnsetThreat,

    #[error("object {owner} has no navigation agent")]
    MissingNavigationAgent { owner: ObjectId },

    #[error("threat {threat} not found in the world")]
    ThreatNotFound { threat: ObjectId },

    #[error(transparent)]
    Sampling(#[from] SamplingError),
}
