use core::f32::consts::{SQRT_2, TAU};

use ai_core::{DeterministicRng, SplitMix64, Vec2};

use crate::{PositionSampler, SampleDomain, SamplingError};

/// Upper bound on background-grid cells, so a tiny separation cannot allocate unbounded memory.
const MAX_GRID_CELLS: usize = 1 << 22;

/// Blue-noise sampler (Bridson's Poisson-disc algorithm).
///
/// Every pair of generated points is at least `min_separation` apart and every point lies in
/// `[0, width) × [0, height)`. Points are returned in acceptance order, which depends only on the
/// seed and on how many sequences this sampler already produced.
#[derive(Debug, Clone)]
pub struct PoissonDiscSampler {
    rng: SplitMix64,
    attempts: u32,
}

impl PoissonDiscSampler {
    /// Candidates tried around an active point before it is retired.
    pub const DEFAULT_ATTEMPTS: u32 = 30;

    pub fn new(seed: u64) -> Self {
        Self {
            rng: SplitMix64::new(seed),
            attempts: Self::DEFAULT_ATTEMPTS,
        }
    }

    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts.max(1);
        self
    }
}

impl Default for PoissonDiscSampler {
    fn default() -> Self {
        Self::new(0)
    }
}

impl PositionSampler for PoissonDiscSampler {
    fn generate(&mut self, domain: &SampleDomain) -> Result<Vec<Vec2>, SamplingError> {
        let mut grid = BackgroundGrid::new(domain)?;
        let radius = domain.min_separation();
        let radius2 = radius * radius;

        let mut points = Vec::new();
        let mut active = Vec::new();

        let first = Vec2::new(
            self.rng.next_f32_range(0.0, domain.width()),
            self.rng.next_f32_range(0.0, domain.height()),
        );
        grid.insert(first, points.len());
        active.push(points.len());
        points.push(first);

        while !active.is_empty() {
            let slot = self.rng.next_index(active.len());
            let center = points[active[slot]];

            let mut accepted = false;
            for _ in 0..self.attempts {
                // Uniform over the annulus [r, 2r].
                let angle = TAU * self.rng.next_f32_unit();
                let dist = (self.rng.next_f32_unit() * 3.0 * radius2 + radius2).sqrt();
                let candidate = center + Vec2::new(angle.cos(), angle.sin()) * dist;

                if !in_half_open(domain, candidate) || grid.has_neighbor(candidate, &points, radius2)
                {
                    continue;
                }

                grid.insert(candidate, points.len());
                active.push(points.len());
                points.push(candidate);
                accepted = true;
                break;
            }

            if !accepted {
                active.swap_remove(slot);
            }
        }

        Ok(points)
    }
}

fn in_half_open(domain: &SampleDomain, p: Vec2) -> bool {
    p.x >= 0.0 && p.x < domain.width() && p.y >= 0.0 && p.y < domain.height()
}

/// Acceleration grid with cells of size `r / sqrt(2)`: each cell holds at most one point.
struct BackgroundGrid {
    cell_size: f32,
    cols: usize,
    rows: usize,
    cells: Vec<Option<usize>>,
}

impl BackgroundGrid {
    fn new(domain: &SampleDomain) -> Result<Self, SamplingError> {
        let cell_size = domain.min_separation() / SQRT_2;
        let cols = (domain.width() / cell_size).ceil().max(1.0) as usize;
        let rows = (domain.height() / cell_size).ceil().max(1.0) as usize;
        let Some(count) = cols.checked_mul(rows).filter(|c| *c <= MAX_GRID_CELLS) else {
            return Err(SamplingError::InvalidConfiguration {
                field: "min_separation",
                value: domain.min_separation(),
                reason: "too small for the domain size",
            });
        };
        Ok(Self {
            cell_size,
            cols,
            rows,
            cells: vec![None; count],
        })
    }

    fn cell_of(&self, p: Vec2) -> (usize, usize) {
        let cx = ((p.x / self.cell_size) as usize).min(self.cols - 1);
        let cy = ((p.y / self.cell_size) as usize).min(self.rows - 1);
        (cx, cy)
    }

    fn insert(&mut self, p: Vec2, index: usize) {
        let (cx, cy) = self.cell_of(p);
        self.cells[cy * self.cols + cx] = Some(index);
    }

    fn has_neighbor(&self, p: Vec2, points: &[Vec2], radius2: f32) -> bool {
        let (cx, cy) = self.cell_of(p);
        let x0 = cx.saturating_sub(2);
        let y0 = cy.saturating_sub(2);
        let x1 = (cx + 2).min(self.cols - 1);
        let y1 = (cy + 2).min(self.rows - 1);

        for y in y0..=y1 {
            for x in x0..=x1 {
                let Some(other) = self.cells[y * self.cols + x] else {
                    continue;
                };
                if points[other].distance_squared(p) < radius2 {
                    return true;
                }
            }
        }
        false
    }
}
