//! Debug inspection of the candidate set.
//!
//! Classifies every candidate around the agent's current position with the same transform and
//! safety predicate the controller uses, without issuing any navigation command.

use ai_core::{Vec2, Vec3};
use ai_sampling::PositionSampler;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    is_safe, transform_sample, AvoidWorldView, Avoider, RayQuery, SafetyParams, ThreatSnapshot,
};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CandidateProbe {
    pub index: usize,
    pub position: Vec3,
    pub safe: bool,
}

/// Classify `samples` around `origin`, in sample order.
pub fn probe_candidates(
    samples: &[Vec2],
    domain_width: f32,
    origin: Vec3,
    threat: ThreatSnapshot,
    rays: &dyn RayQuery,
    params: SafetyParams,
) -> Vec<CandidateProbe> {
    samples
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            let position = transform_sample(*sample, origin, domain_width);
            CandidateProbe {
                index,
                position,
                safe: is_safe(position, threat, rays, params),
            }
        })
        .collect()
}

impl<S: PositionSampler> Avoider<S> {
    /// Candidate classification around the agent, for debug drawing.
    ///
    /// Empty unless `show_debug` is set, or when the agent or threat cannot be resolved.
    /// Generates the sample set if it is absent.
    pub fn debug_probes<W>(&mut self, world: &W) -> Vec<CandidateProbe>
    where
        W: AvoidWorldView + ?Sized,
    {
        if !self.config().show_debug {
            return Vec::new();
        }
        let Some(agent) = world.navigation_agent(self.owner()) else {
            return Vec::new();
        };
        let origin = agent.current_position();
        let Some(threat) = self.threat_snapshot(world) else {
            return Vec::new();
        };
        let params = SafetyParams::from(self.config());

        let set = self.sample_set_mut();
        let width = set.domain().width();
        match set.produce() {
            Ok(samples) => {
                probe_candidates(samples, width, origin, threat, world.ray_query(), params)
            }
            Err(err) => {
                tracing::error!(error = %err, "candidate sampling failed");
                Vec::new()
            }
        }
    }
}
