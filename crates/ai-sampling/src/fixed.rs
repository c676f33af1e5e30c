use ai_core::Vec2;

use crate::{PositionSampler, SampleDomain, SamplingError};

/// Replays a hand-authored point list in order.
///
/// Useful for tests and scripted scenes where the candidate order must be known up front.
/// Points are returned as given, even when they fall outside the domain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixedSampler {
    points: Vec<Vec2>,
    generated: usize,
}

impl FixedSampler {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self {
            points,
            generated: 0,
        }
    }

    /// Number of times `generate` has been called.
    pub fn generated(&self) -> usize {
        self.generated
    }
}

impl PositionSampler for FixedSampler {
    fn generate(&mut self, _domain: &SampleDomain) -> Result<Vec<Vec2>, SamplingError> {
        self.generated += 1;
        Ok(self.points.clone())
    }
}
