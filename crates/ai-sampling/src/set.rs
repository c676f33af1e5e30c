use ai_core::Vec2;

use crate::{PoissonDiscSampler, PositionSampler, SampleDomain, SamplingError};

/// Cached candidate sequence over a fixed domain.
///
/// The sequence is generated on first [`SampleSet::produce`] and reused afterwards; only
/// [`SampleSet::regenerate`] replaces it.
#[derive(Debug, Clone)]
pub struct SampleSet<S = PoissonDiscSampler> {
    domain: SampleDomain,
    sampler: S,
    samples: Option<Vec<Vec2>>,
}

impl SampleSet<PoissonDiscSampler> {
    /// Square domain of `width` sampled with a seeded Poisson-disc sampler.
    pub fn poisson(width: f32, min_separation: f32, seed: u64) -> Result<Self, SamplingError> {
        let domain = SampleDomain::square(width, min_separation)?;
        Ok(Self::new(domain, PoissonDiscSampler::new(seed)))
    }
}

impl<S: PositionSampler> SampleSet<S> {
    pub fn new(domain: SampleDomain, sampler: S) -> Self {
        Self {
            domain,
            sampler,
            samples: None,
        }
    }

    pub fn domain(&self) -> &SampleDomain {
        &self.domain
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    /// The cached sequence, generating it first if absent.
    pub fn produce(&mut self) -> Result<&[Vec2], SamplingError> {
        let samples = match self.samples.take() {
            Some(samples) => samples,
            None => self.sampler.generate(&self.domain)?,
        };
        Ok(self.samples.insert(samples).as_slice())
    }

    /// The cached sequence, if one was generated. Never generates.
    pub fn samples(&self) -> Option<&[Vec2]> {
        self.samples.as_deref()
    }

    pub fn is_generated(&self) -> bool {
        self.samples.is_some()
    }

    /// Discard the cached sequence and generate a new one.
    pub fn regenerate(&mut self) -> Result<&[Vec2], SamplingError> {
        self.samples = None;
        self.produce()
    }
}
