//! Deterministic, engine-agnostic AI kernel primitives.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod id;
pub mod math;
pub mod rng;
pub mod tick;

pub use id::ObjectId;
pub use math::{Vec2, Vec3};
pub use rng::{DeterministicRng, SplitMix64};
pub use tick::{TickContext, Ticker};
