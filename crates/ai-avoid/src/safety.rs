use ai_core::{ObjectId, Vec3};

use crate::{AvoidanceConfig, RayQuery};

/// The threat as seen at the start of a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreatSnapshot {
    pub id: ObjectId,
    pub position: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafetyParams {
    pub clearance: f32,
    pub ray_max_distance: f32,
}

impl From<&AvoidanceConfig> for SafetyParams {
    fn from(config: &AvoidanceConfig) -> Self {
        Self {
            clearance: config.clearance,
            ray_max_distance: config.ray_max_distance,
        }
    }
}

/// Whether `position` keeps clearance from the threat and is out of its direct line of sight.
///
/// A ray that hits nothing, or hits anything other than the threat first, counts as cover.
pub fn is_safe(
    position: Vec3,
    threat: ThreatSnapshot,
    rays: &dyn RayQuery,
    params: SafetyParams,
) -> bool {
    let to_threat = threat.position - position;
    if to_threat.length() < params.clearance {
        return false;
    }

    let direction = to_threat.normalize_or_zero();
    if direction == Vec3::ZERO {
        // Standing on the threat.
        return false;
    }

    match rays.cast(position, direction, params.ray_max_distance) {
        Some(hit) => hit.object != threat.id,
        None => true,
    }
}
