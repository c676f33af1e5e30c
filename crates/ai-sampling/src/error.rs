use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplingError {
    #[error("invalid sampling configuration: {field} = {value} ({reason})")]
    InvalidConfiguration {
        field: &'static str,
        value: f32,
        reason: &'static str,
    },
}

impl SamplingError {
    pub(crate) fn invalid(field: &'static str, value: f32, reason: &'static str) -> Self {
        Self::InvalidConfiguration {
            field,
            value,
            reason,
        }
    }
}
