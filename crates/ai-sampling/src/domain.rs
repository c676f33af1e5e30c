use ai_core::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::SamplingError;

/// Rectangle `[0, width] × [0, height]` plus the minimum distance between generated points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SampleDomain {
    width: f32,
    height: f32,
    min_separation: f32,
}

impl SampleDomain {
    pub fn new(width: f32, height: f32, min_separation: f32) -> Result<Self, SamplingError> {
        check_positive("width", width)?;
        check_positive("height", height)?;
        check_positive("min_separation", min_separation)?;
        Ok(Self {
            width,
            height,
            min_separation,
        })
    }

    pub fn square(width: f32, min_separation: f32) -> Result<Self, SamplingError> {
        Self::new(width, width, min_separation)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn min_separation(&self) -> f32 {
        self.min_separation
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}

fn check_positive(field: &'static str, value: f32) -> Result<(), SamplingError> {
    if !value.is_finite() {
        return Err(SamplingError::invalid(field, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(SamplingError::invalid(field, value, "must be > 0"));
    }
    Ok(())
}
