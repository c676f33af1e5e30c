//! Reference in-memory world: primitive colliders, a ray query, and kinematic agents.
//!
//! Small enough to drive tests, benches and scripted scenarios. A real host would implement
//! [`AvoidWorldView`]/[`AvoidWorldMut`] on top of its own physics and navigation.

use ai_core::{ObjectId, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{AvoidWorldMut, AvoidWorldView, NavigationAgent, RayHit, RayQuery};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Collider {
    Sphere { radius: f32 },
    /// Axis-aligned box.
    Box { half_extents: Vec3 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SceneObject {
    pub id: ObjectId,
    pub position: Vec3,
    pub collider: Collider,
    /// Constant drift applied on [`Scene::step`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub velocity: Vec3,
}

impl SceneObject {
    pub fn sphere(id: ObjectId, position: Vec3, radius: f32) -> Self {
        Self {
            id,
            position,
            collider: Collider::Sphere { radius },
            velocity: Vec3::ZERO,
        }
    }

    pub fn cuboid(id: ObjectId, position: Vec3, half_extents: Vec3) -> Self {
        Self {
            id,
            position,
            collider: Collider::Box { half_extents },
            velocity: Vec3::ZERO,
        }
    }

    /// Ray entry distance, ignoring colliders that contain the origin.
    fn intersect(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<f32> {
        match self.collider {
            Collider::Sphere { radius } => {
                ray_sphere(origin, direction, self.position, radius, max_distance)
            }
            Collider::Box { half_extents } => ray_aabb(
                origin,
                direction,
                self.position - half_extents.abs(),
                self.position + half_extents.abs(),
                max_distance,
            ),
        }
    }
}

/// Straight-line mover standing in for a navmesh agent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SceneAgent {
    pub id: ObjectId,
    pub position: Vec3,
    pub speed: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub destination: Option<Vec3>,
}

impl SceneAgent {
    pub fn new(id: ObjectId, position: Vec3, speed: f32) -> Self {
        Self {
            id,
            position,
            speed,
            destination: None,
        }
    }

    pub fn step(&mut self, dt_seconds: f32) {
        let Some(goal) = self.destination else {
            return;
        };
        let to_goal = goal - self.position;
        let dist = to_goal.length();
        let reach = self.speed.max(0.0) * dt_seconds.max(0.0);
        if dist <= reach || dist <= f32::EPSILON {
            self.position = goal;
            self.destination = None;
        } else {
            self.position += to_goal * (reach / dist);
        }
    }
}

impl NavigationAgent for SceneAgent {
    fn current_position(&self) -> Vec3 {
        self.position
    }

    fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    fn set_destination(&mut self, destination: Vec3) {
        self.destination = Some(destination);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scene {
    #[cfg_attr(feature = "serde", serde(default))]
    objects: Vec<SceneObject>,
    #[cfg_attr(feature = "serde", serde(default))]
    agents: Vec<SceneAgent>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an object by id.
    pub fn add_object(&mut self, object: SceneObject) {
        match self.objects.iter_mut().find(|o| o.id == object.id) {
            Some(slot) => *slot = object,
            None => self.objects.push(object),
        }
    }

    pub fn remove_object(&mut self, id: ObjectId) -> Option<SceneObject> {
        let index = self.objects.iter().position(|o| o.id == id)?;
        Some(self.objects.remove(index))
    }

    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Insert or replace an agent by id.
    pub fn add_agent(&mut self, agent: SceneAgent) {
        match self.agents.iter_mut().find(|a| a.id == agent.id) {
            Some(slot) => *slot = agent,
            None => self.agents.push(agent),
        }
    }

    pub fn remove_agent(&mut self, id: ObjectId) -> Option<SceneAgent> {
        let index = self.agents.iter().position(|a| a.id == id)?;
        Some(self.agents.remove(index))
    }

    pub fn agent(&self, id: ObjectId) -> Option<&SceneAgent> {
        self.agents.iter().find(|a| a.id == id)
    }

    pub fn agent_mut(&mut self, id: ObjectId) -> Option<&mut SceneAgent> {
        self.agents.iter_mut().find(|a| a.id == id)
    }

    pub fn agents(&self) -> &[SceneAgent] {
        &self.agents
    }

    /// Move drifting objects and agents with a destination.
    pub fn step(&mut self, dt_seconds: f32) {
        let dt = dt_seconds.max(0.0);
        for object in self.objects.iter_mut() {
            object.position += object.velocity * dt;
        }
        for agent in self.agents.iter_mut() {
            agent.step(dt);
        }
    }
}

impl RayQuery for Scene {
    fn cast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit> {
        let direction = direction.normalize_or_zero();
        if direction == Vec3::ZERO || max_distance.is_nan() || max_distance <= 0.0 {
            return None;
        }

        let mut best: Option<RayHit> = None;
        for object in &self.objects {
            let Some(distance) = object.intersect(origin, direction, max_distance) else {
                continue;
            };
            let closer = match best {
                None => true,
                Some(b) => (distance, object.id) < (b.distance, b.object),
            };
            if closer {
                best = Some(RayHit {
                    object: object.id,
                    distance,
                });
            }
        }
        best
    }
}

impl AvoidWorldView for Scene {
    fn navigation_agent(&self, owner: ObjectId) -> Option<&dyn NavigationAgent> {
        self.agent(owner).map(|a| a as &dyn NavigationAgent)
    }

    /// Only collider-bearing objects resolve: agents have no collider, so a ray could never
    /// report them as the first hit.
    fn object_position(&self, object: ObjectId) -> Option<Vec3> {
        self.object(object).map(|o| o.position)
    }

    fn ray_query(&self) -> &dyn RayQuery {
        self
    }
}

impl AvoidWorldMut for Scene {
    fn navigation_agent_mut(&mut self, owner: ObjectId) -> Option<&mut dyn NavigationAgent> {
        self.agent_mut(owner).map(|a| a as &mut dyn NavigationAgent)
    }
}

fn ray_sphere(origin: Vec3, dir: Vec3, center: Vec3, radius: f32, max: f32) -> Option<f32> {
    let oc = origin - center;
    let c = oc.length_squared() - radius * radius;
    if c <= 0.0 {
        return None;
    }
    let b = oc.dot(dir);
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0 && t <= max).then_some(t)
}

/// Slab test against `[min, max]`.
fn ray_aabb(origin: Vec3, dir: Vec3, min: Vec3, max: Vec3, max_distance: f32) -> Option<f32> {
    let inside = (0..3).all(|i| origin.axis(i) >= min.axis(i) && origin.axis(i) <= max.axis(i));
    if inside {
        return None;
    }

    let mut t_near = 0.0f32;
    let mut t_far = max_distance;
    for i in 0..3 {
        let o = origin.axis(i);
        let d = dir.axis(i);
        let (lo, hi) = (min.axis(i), max.axis(i));
        if d.abs() <= f32::EPSILON {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }
        let mut t0 = (lo - o) / d;
        let mut t1 = (hi - o) / d;
        if t0 > t1 {
            core::mem::swap(&mut t0, &mut t1);
        }
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }
    Some(t_near)
}
