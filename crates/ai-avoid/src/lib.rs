//! Reactive threat avoidance.
//!
//! An [`Avoider`] periodically checks how close its agent is to a single tracked threat. When the
//! threat is within the safe distance and the agent's current spot is exposed, it walks a cached
//! blue-noise sample set centered on the agent and sends the agent to the first candidate that
//! keeps clearance from the threat and has no unobstructed line of sight to it.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod avoider;
pub mod config;
pub mod error;
pub mod probe;
pub mod safety;
pub mod scene;
pub mod transform;
pub mod world;

pub use avoider::{Avoider, TickOutcome};
pub use config::AvoidanceConfig;
pub use error::AvoidError;
pub use probe::{probe_candidates, CandidateProbe};
pub use safety::{is_safe, SafetyParams, ThreatSnapshot};
pub use scene::{Collider, Scene, SceneAgent, SceneObject};
pub use transform::transform_sample;
pub use world::{AvoidWorldMut, AvoidWorldView, NavigationAgent, RayHit, RayQuery};
