//! Umbrella crate that re-exports the `ai-*` building blocks.
//!
//! This crate is intended as a convenient entrypoint for users and as a home for docs.rs guides.
//!
//! ```
//! use ai::avoid::{AvoidanceConfig, Avoider, Scene, SceneAgent, SceneObject, TickOutcome};
//! use ai::core::{ObjectId, Vec3};
//!
//! let mut scene = Scene::new();
//! scene.add_agent(SceneAgent::new(ObjectId(1), Vec3::new(10.0, 0.0, 0.0), 1.0));
//! scene.add_object(SceneObject::sphere(ObjectId(2), Vec3::ZERO, 0.5));
//!
//! let mut avoider =
//!     Avoider::initialize(ObjectId(1), Some(ObjectId(2)), AvoidanceConfig::default(), &scene)
//!         .unwrap();
//! assert!(matches!(
//!     avoider.tick(&mut scene),
//!     TickOutcome::ThreatOutOfRange { .. }
//! ));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use ai_core as core;

#[cfg(feature = "sampling")]
#[cfg_attr(docsrs, doc(cfg(feature = "sampling")))]
pub use ai_sampling as sampling;

#[cfg(feature = "avoid")]
#[cfg_attr(docsrs, doc(cfg(feature = "avoid")))]
pub use ai_avoid as avoid;
