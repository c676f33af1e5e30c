#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-frame input handed down from the host update loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub tick: u64,
    pub dt_seconds: f32,
}

impl TickContext {
    pub fn new(tick: u64, dt_seconds: f32) -> Self {
        Self { tick, dt_seconds }
    }

    /// Context for the frame after this one, with the same step size.
    pub fn next(self) -> Self {
        Self {
            tick: self.tick.wrapping_add(1),
            dt_seconds: self.dt_seconds,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
enum TickerState {
    Stopped,
    /// Armed; the next `advance` fires once before accumulating time.
    Pending,
    Running,
}

/// Repeating timer: fires once immediately after [`Ticker::start`], then every `period`.
///
/// Time is only accumulated through [`Ticker::advance`], so the cadence follows the host's
/// simulated clock rather than wall time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ticker {
    period: f32,
    accumulated: f32,
    state: TickerState,
}

impl Ticker {
    /// `period` is clamped to a small positive minimum so `advance` always terminates.
    pub fn new(period_seconds: f32) -> Self {
        Self {
            period: sanitize_period(period_seconds),
            accumulated: 0.0,
            state: TickerState::Stopped,
        }
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.state != TickerState::Stopped
    }

    /// Arm the ticker. Restarting a running ticker resets its phase.
    pub fn start(&mut self) {
        self.accumulated = 0.0;
        self.state = TickerState::Pending;
    }

    pub fn stop(&mut self) {
        self.accumulated = 0.0;
        self.state = TickerState::Stopped;
    }

    /// Advance by `dt_seconds` and return how many times the ticker fired.
    pub fn advance(&mut self, dt_seconds: f32) -> u32 {
        let mut fired: u32 = 0;
        match self.state {
            TickerState::Stopped => return 0,
            TickerState::Pending => {
                fired += 1;
                self.state = TickerState::Running;
            }
            TickerState::Running => {}
        }

        let dt = if dt_seconds.is_finite() {
            dt_seconds.max(0.0)
        } else {
            0.0
        };
        self.accumulated += dt;
        if self.accumulated >= self.period {
            // `as` saturates, so absurd frame times cannot overflow the count.
            let periods = (self.accumulated / self.period).floor() as u32;
            fired = fired.saturating_add(periods);
            self.accumulated = self.accumulated.rem_euclid(self.period);
        }
        fired
    }

    /// Seconds until the next firing, or `None` while stopped.
    pub fn remaining(&self) -> Option<f32> {
        match self.state {
            TickerState::Stopped => None,
            TickerState::Pending => Some(0.0),
            TickerState::Running => Some((self.period - self.accumulated).max(0.0)),
        }
    }
}

fn sanitize_period(period: f32) -> f32 {
    if period.is_finite() {
        period.max(1e-3)
    } else {
        1e-3
    }
}
