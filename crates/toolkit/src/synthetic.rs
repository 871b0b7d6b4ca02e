//! Synthetic load-list generation for testing and demos.

use rand::prelude::*;
use stowage_engine::Box3D;

/// Dimension range for generated boxes, in container units.
const DIM_RANGE: std::ops::Range<f64> = 0.5..4.0;

/// Weight range for generated boxes.
const WEIGHT_RANGE: std::ops::Range<f64> = 1.0..100.0;

/// Generator for random box loads.
///
/// Draws dimensions and weights uniformly from the ranges a 40 ft container
/// load is typically exercised with. Seedable for reproducible fixtures.
#[derive(Debug, Clone)]
pub struct SyntheticGenerator {
    rng: StdRng,
}

impl SyntheticGenerator {
    /// Creates a new generator with a random seed.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new generator with a specific seed for reproducibility.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates `count` random boxes in draw order.
    pub fn generate(&mut self, count: usize) -> Vec<Box3D> {
        (0..count)
            .map(|_| {
                let length = self.rng.gen_range(DIM_RANGE);
                let width = self.rng.gen_range(DIM_RANGE);
                let height = self.rng.gen_range(DIM_RANGE);
                let weight = self.rng.gen_range(WEIGHT_RANGE);
                Box3D::new(length, width, height, weight)
            })
            .collect()
    }

    /// Generates `count` random boxes sorted by weight, heaviest first.
    ///
    /// Heaviest-first is the caller-side ordering that gives the greedy
    /// engine its best stacks: heavy boxes claim the floor before light
    /// ones arrive.
    pub fn generate_sorted(&mut self, count: usize) -> Vec<Box3D> {
        let mut boxes = self.generate(count);
        boxes.sort_by(|a, b| {
            b.weight()
                .partial_cmp(&a.weight())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        boxes
    }
}

impl Default for SyntheticGenerator {
    fn default() -> Self {
        Self::new()
    }
}
