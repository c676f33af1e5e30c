use ai_core::rng::derive_seed;
use ai_core::{ObjectId, TickContext, Ticker, Vec2, Vec3};
use ai_sampling::{PoissonDiscSampler, PositionSampler, SampleDomain, SampleSet, SamplingError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    is_safe, transform_sample, AvoidError, AvoidWorldMut, AvoidWorldView, AvoidanceConfig,
    SafetyParams, ThreatSnapshot,
};

/// RNG stream reserved for candidate sampling.
const SAMPLER_STREAM: u64 = 0x5A3F_1E00_0000_0001;

/// What a single avoidance check decided.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "outcome", rename_all = "snake_case"))]
pub enum TickOutcome {
    /// The threat is farther than the safe distance.
    ThreatOutOfRange { distance: f32 },
    /// The agent's current position already has cover.
    AlreadySafe,
    /// The agent was sent to sample `candidate` (index into the sample set).
    Redirected { candidate: usize, destination: Vec3 },
    /// Every candidate was exposed; the agent keeps whatever it was doing.
    NoSafeCandidate { scanned: usize },
    /// The threat could no longer be resolved in the world.
    ThreatLost,
    /// The owner no longer has a navigation agent.
    AgentLost,
}

impl TickOutcome {
    pub fn issued_command(&self) -> bool {
        matches!(self, Self::Redirected { .. })
    }
}

/// Periodic threat-avoidance controller for one agent.
///
/// Built with [`Avoider::initialize`], armed with [`Avoider::start`] and driven by
/// [`Avoider::update`] from the host loop. [`Avoider::tick`] runs one decision directly.
#[derive(Debug)]
pub struct Avoider<S = PoissonDiscSampler> {
    owner: ObjectId,
    threat: ObjectId,
    config: AvoidanceConfig,
    samples: SampleSet<S>,
    ticker: Ticker,
    last_outcome: Option<TickOutcome>,
}

impl Avoider<PoissonDiscSampler> {
    /// Validate the setup and build an avoider using a Poisson-disc sampler seeded from
    /// `config.sampler_seed` and the owner id.
    pub fn initialize<W>(
        owner: ObjectId,
        threat: Option<ObjectId>,
        config: AvoidanceConfig,
        world: &W,
    ) -> Result<Self, AvoidError>
    where
        W: AvoidWorldView + ?Sized,
    {
        let seed = derive_seed(config.sampler_seed, owner.stable_id(), SAMPLER_STREAM);
        Self::initialize_with_sampler(owner, threat, config, PoissonDiscSampler::new(seed), world)
    }
}

impl<S: PositionSampler> Avoider<S> {
    pub fn initialize_with_sampler<W>(
        owner: ObjectId,
        threat: Option<ObjectId>,
        config: AvoidanceConfig,
        sampler: S,
        world: &W,
    ) -> Result<Self, AvoidError>
    where
        W: AvoidWorldView + ?Sized,
    {
        let result = Self::build(owner, threat, config, sampler, world);
        if let Err(err) = &result {
            tracing::error!(owner = %owner, error = %err, "avoider setup rejected");
        }
        result
    }

    fn build<W>(
        owner: ObjectId,
        threat: Option<ObjectId>,
        config: AvoidanceConfig,
        sampler: S,
        world: &W,
    ) -> Result<Self, AvoidError>
    where
        W: AvoidWorldView + ?Sized,
    {
        config.validate()?;
        let threat = threat.ok_or(AvoidError::UnsetThreat)?;
        if world.navigation_agent(owner).is_none() {
            return Err(AvoidError::MissingNavigationAgent { owner });
        }
        if world.object_position(threat).is_none() {
            return Err(AvoidError::ThreatNotFound { threat });
        }

        let domain = SampleDomain::square(config.sample_width, config.min_separation)?;
        let mut samples = SampleSet::new(domain, sampler);
        let count = samples.produce()?.len();
        tracing::debug!(owner = %owner, threat = %threat, samples = count, "avoider initialized");

        Ok(Self {
            owner,
            threat,
            config,
            samples,
            ticker: Ticker::new(config.check_period),
            last_outcome: None,
        })
    }

    pub fn owner(&self) -> ObjectId {
        self.owner
    }

    pub fn threat(&self) -> ObjectId {
        self.threat
    }

    pub fn config(&self) -> &AvoidanceConfig {
        &self.config
    }

    pub fn last_outcome(&self) -> Option<TickOutcome> {
        self.last_outcome
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// Start checking every `check_period` seconds; the first check runs on the next update.
    pub fn start(&mut self) {
        self.arm(self.config.check_period);
    }

    /// Start checking every `period_seconds`; the first check runs on the next update.
    ///
    /// A non-positive or non-finite period is rejected and leaves the current schedule as is.
    pub fn schedule(&mut self, period_seconds: f32) -> Result<(), AvoidError> {
        if !period_seconds.is_finite() || period_seconds <= 0.0 {
            let err = AvoidError::InvalidConfig {
                field: "check_period",
                value: period_seconds,
                reason: "must be positive and finite",
            };
            tracing::warn!(owner = %self.owner, error = %err, "avoidance schedule rejected");
            return Err(err);
        }
        self.arm(period_seconds);
        Ok(())
    }

    fn arm(&mut self, period_seconds: f32) {
        self.ticker = Ticker::new(period_seconds);
        self.ticker.start();
        tracing::info!(owner = %self.owner, period = self.ticker.period(), "avoidance scheduled");
    }

    pub fn stop(&mut self) {
        if self.ticker.is_running() {
            tracing::info!(owner = %self.owner, "avoidance stopped");
        }
        self.ticker.stop();
    }

    /// Advance the check timer and run [`Avoider::tick`] if it fired.
    ///
    /// Missed periods are coalesced: the world cannot change between checks inside one update,
    /// so at most one check runs per call.
    pub fn update<W>(&mut self, ctx: &TickContext, world: &mut W) -> Option<TickOutcome>
    where
        W: AvoidWorldMut + ?Sized,
    {
        let fired = self.ticker.advance(ctx.dt_seconds);
        if fired == 0 {
            return None;
        }
        if fired > 1 {
            tracing::debug!(owner = %self.owner, missed = fired - 1, "coalesced avoidance checks");
        }
        Some(self.tick(world))
    }

    /// Run one avoidance decision and, on a match, command the navigation agent.
    pub fn tick<W>(&mut self, world: &mut W) -> TickOutcome
    where
        W: AvoidWorldMut + ?Sized,
    {
        let mut outcome = self.decide(&*world);

        if let TickOutcome::Redirected {
            candidate,
            destination,
        } = outcome
        {
            match world.navigation_agent_mut(self.owner) {
                Some(agent) => {
                    agent.set_speed(self.config.avoidance_speed);
                    agent.set_destination(destination);
                    tracing::info!(
                        owner = %self.owner,
                        candidate,
                        x = destination.x,
                        y = destination.y,
                        z = destination.z,
                        "redirecting to cover"
                    );
                }
                None => outcome = TickOutcome::AgentLost,
            }
        }

        match outcome {
            TickOutcome::ThreatLost => {
                tracing::warn!(owner = %self.owner, threat = %self.threat, "threat not found");
            }
            TickOutcome::AgentLost => {
                tracing::warn!(owner = %self.owner, "navigation agent missing");
            }
            _ => tracing::debug!(owner = %self.owner, ?outcome, "avoidance check"),
        }

        self.last_outcome = Some(outcome);
        outcome
    }

    fn decide<W>(&mut self, world: &W) -> TickOutcome
    where
        W: AvoidWorldView + ?Sized,
    {
        let Some(agent) = world.navigation_agent(self.owner) else {
            return TickOutcome::AgentLost;
        };
        let position = agent.current_position();
        let Some(threat) = self.threat_snapshot(world) else {
            return TickOutcome::ThreatLost;
        };

        let distance = position.planar_distance(threat.position);
        if distance > self.config.safe_distance {
            return TickOutcome::ThreatOutOfRange { distance };
        }

        let params = SafetyParams::from(&self.config);
        let rays = world.ray_query();
        if is_safe(position, threat, rays, params) {
            return TickOutcome::AlreadySafe;
        }

        let width = self.samples.domain().width();
        let samples = match self.samples.produce() {
            Ok(samples) => samples,
            Err(err) => {
                tracing::error!(owner = %self.owner, error = %err, "candidate sampling failed");
                return TickOutcome::NoSafeCandidate { scanned: 0 };
            }
        };

        samples
            .iter()
            .enumerate()
            .map(|(index, sample)| (index, transform_sample(*sample, position, width)))
            .find(|(_, candidate)| is_safe(*candidate, threat, rays, params))
            .map(|(candidate, destination)| TickOutcome::Redirected {
                candidate,
                destination,
            })
            .unwrap_or(TickOutcome::NoSafeCandidate {
                scanned: samples.len(),
            })
    }

    /// Whether `position` is safe from the threat right now, or `None` if the threat is gone.
    pub fn is_position_safe<W>(&self, position: Vec3, world: &W) -> Option<bool>
    where
        W: AvoidWorldView + ?Sized,
    {
        let threat = self.threat_snapshot(world)?;
        Some(is_safe(
            position,
            threat,
            world.ray_query(),
            SafetyParams::from(&self.config),
        ))
    }

    pub(crate) fn threat_snapshot<W>(&self, world: &W) -> Option<ThreatSnapshot>
    where
        W: AvoidWorldView + ?Sized,
    {
        world
            .object_position(self.threat)
            .map(|position| ThreatSnapshot {
                id: self.threat,
                position,
            })
    }

    /// The cached candidate offsets, without generating.
    pub fn samples(&self) -> Option<&[Vec2]> {
        self.samples.samples()
    }

    /// The candidate offsets, generating them first if absent.
    pub fn candidates(&mut self) -> Result<&[Vec2], SamplingError> {
        self.samples.produce()
    }

    pub(crate) fn sample_set_mut(&mut self) -> &mut SampleSet<S> {
        &mut self.samples
    }
}
