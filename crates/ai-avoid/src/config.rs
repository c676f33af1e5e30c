#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::AvoidError;

/// Avoidance tuning. Fixed for the lifetime of an [`crate::Avoider`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AvoidanceConfig {
    /// Planar distance to the threat below which avoidance kicks in.
    pub safe_distance: f32,
    /// Candidates closer than this to the threat are never safe, whatever the line of sight.
    pub clearance: f32,
    /// Navigation speed while running for cover.
    pub avoidance_speed: f32,
    /// Side length of the square sampled around the agent.
    pub sample_width: f32,
    /// Minimum distance between sampled candidates.
    pub min_separation: f32,
    /// Range of the line-of-sight ray.
    pub ray_max_distance: f32,
    /// Seconds between avoidance checks.
    pub check_period: f32,
    /// Enables [`crate::Avoider::debug_probes`].
    pub show_debug: bool,
    /// Base seed for the candidate sampler; mixed with the owner id.
    pub sampler_seed: u64,
}

impl Default for AvoidanceConfig {
    fn default() -> Self {
        Self {
            safe_distance: 5.0,
            clearance: 3.0,
            avoidance_speed: 3.5,
            sample_width: 10.0,
            min_separation: 1.0,
            ray_max_distance: 1000.0,
            check_period: 0.5,
            show_debug: false,
            sampler_seed: 0,
        }
    }
}

impl AvoidanceConfig {
    /// Checks the scalar parameters. The sampling domain is validated when it is built.
    pub fn validate(&self) -> Result<(), AvoidError> {
        non_negative("safe_distance", self.safe_distance)?;
        non_negative("clearance", self.clearance)?;
        non_negative("avoidance_speed", self.avoidance_speed)?;
        positive("ray_max_distance", self.ray_max_distance)?;
        positive("check_period", self.check_period)?;
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), AvoidError> {
    if !value.is_finite() {
        return Err(invalid(field, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(invalid(field, value, "must be >= 0"));
    }
    Ok(())
}

fn positive(field: &'static str, value: f32) -> Result<(), AvoidError> {
    non_negative(field, value)?;
    if value == 0.0 {
        return Err(invalid(field, value, "must be > 0"));
    }
    Ok(())
}

fn invalid(field: &'static str, value: f32, reason: &'static str) -> AvoidError {
    AvoidError::InvalidConfig {
        field,
        value,
        reason,
    }
}
