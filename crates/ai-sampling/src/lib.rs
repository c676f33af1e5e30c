//! Deterministic candidate-point sampling.
//!
//! A [`SampleSet`] owns a square (or rectangular) [`SampleDomain`] and a [`PositionSampler`],
//! generates the point sequence once and hands out the cached copy afterwards.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod domain;
pub mod error;
pub mod fixed;
pub mod poisson;
pub mod set;

pub use domain::SampleDomain;
pub use error::SamplingError;
pub use fixed::FixedSampler;
pub use poisson::PoissonDiscSampler;
pub use set::SampleSet;

use ai_core::Vec2;

/// Produces an ordered sequence of points confined to a domain.
///
/// Implementations must be deterministic for a given internal state; the order of the returned
/// points is meaningful to callers (it is the order candidates are considered in).
pub trait PositionSampler {
    fn generate(&mut self, domain: &SampleDomain) -> Result<Vec<Vec2>, SamplingError>;
}

impl<S: PositionSampler + ?Sized> PositionSampler for Box<S> {
    fn generate(&mut self, domain: &SampleDomain) -> Result<Vec<Vec2>, SamplingError> {
        (**self).generate(domain)
    }
}
