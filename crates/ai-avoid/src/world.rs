use ai_core::{ObjectId, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Path-following agent that actually moves the avoiding entity.
pub trait NavigationAgent {
    fn current_position(&self) -> Vec3;
    fn set_speed(&mut self, speed: f32);
    /// Hand the agent a new goal; path planning and movement happen on the host side.
    fn set_destination(&mut self, destination: Vec3);
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RayHit {
    pub object: ObjectId,
    pub distance: f32,
}

pub trait RayQuery {
    /// First object hit by the ray, if any within `max_distance`. `direction` is unit length.
    fn cast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit>;
}

/// Read access to the scene an avoider operates in.
pub trait AvoidWorldView {
    /// The navigation agent attached to `owner`, if it has one.
    fn navigation_agent(&self, owner: ObjectId) -> Option<&dyn NavigationAgent>;
    /// Position of a tracked object. Anything resolved here must also be hittable by
    /// [`RayQuery::cast`], otherwise line of sight to it can never be detected.
    fn object_position(&self, object: ObjectId) -> Option<Vec3>;
    fn ray_query(&self) -> &dyn RayQuery;
}

pub trait AvoidWorldMut: AvoidWorldView {
    fn navigation_agent_mut(&mut self, owner: ObjectId) -> Option<&mut dyn NavigationAgent>;
}
