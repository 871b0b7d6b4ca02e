//! Greedy first-fit placement search and the loading orchestrator.

use crate::boundary::Container;
use crate::collision::{collides_with_any, Region};
use crate::geometry::Box3D;
use crate::stability::is_supported;
use nalgebra::Point3;
use stowage_core::{PackResult, PlacedBox, Result};

use std::time::Instant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the loading orchestrator.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackConfig {
    /// Boxes shorter than this fraction of the container height take the
    /// stacking shortcut before falling back to the full search.
    pub low_height_ratio: f64,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            low_height_ratio: 0.3,
        }
    }
}

impl PackConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the low-height cutoff ratio.
    pub fn with_low_height_ratio(mut self, ratio: f64) -> Self {
        self.low_height_ratio = ratio;
        self
    }
}

/// Searches for the first feasible slot for one box.
///
/// Each of the four orientations is tried in generator order; for every
/// orientation the candidate positions are scanned over an integer grid,
/// `z` outermost, then `y`, then `x`, from the origin upward. The first
/// position that is collision-free against all placed boxes and supported is
/// returned immediately, so ties resolve lowest-z, then lowest-y, lowest-x,
/// earliest orientation.
///
/// Positions are integer-quantized even though dimensions are real-valued; a
/// fractionally-sized box is only ever tried at whole-number offsets, and
/// feasible fractional slots are skipped by design. Revisiting the
/// quantization (like extending the orientation set) would reshuffle every
/// existing layout and is left as an explicit follow-up decision.
///
/// `None` means the box fits nowhere — a normal outcome, not an error. A box
/// larger than the container in some axis produces an empty scan range and
/// falls out the same way.
pub fn find_placement(
    item: &Box3D,
    placed: &[PlacedBox],
    container: &Container,
) -> Option<PlacedBox> {
    for oriented in item.rotations() {
        let max_x = (container.length() - oriented.length()).floor() as i64;
        let max_y = (container.width() - oriented.width()).floor() as i64;
        let max_z = (container.height() - oriented.height()).floor() as i64;

        if max_x < 0 || max_y < 0 || max_z < 0 {
            continue;
        }

        for z in 0..=max_z {
            for y in 0..=max_y {
                for x in 0..=max_x {
                    let candidate = Region::new(
                        Point3::new(x as f64, y as f64, z as f64),
                        *oriented.dimensions(),
                    );

                    if !collides_with_any(&candidate, placed)
                        && is_supported(&candidate, placed)
                    {
                        return Some(PlacedBox::new(
                            candidate.position,
                            candidate.dimensions,
                            oriented.weight(),
                        ));
                    }
                }
            }
        }
    }

    None
}

/// Greedy first-fit loading orchestrator.
///
/// Boxes are processed strictly in input order (ordering is caller policy,
/// e.g. heaviest first) and each box is placed at most once; placements are
/// never revisited. Low boxes first try a position directly on top of each
/// already-placed box before paying for the full grid search.
#[derive(Debug, Clone, Default)]
pub struct Packer {
    config: PackConfig,
}

impl Packer {
    /// Creates a new packer with the given configuration.
    pub fn new(config: PackConfig) -> Self {
        Self { config }
    }

    /// Loads the boxes into the container.
    ///
    /// Validates the container and every box up front, then places each box
    /// in input order. Boxes that fit nowhere are skipped and recorded in
    /// [`PackResult::unplaced`] by input index; everything placed appears in
    /// [`PackResult::placements`] in acceptance order.
    pub fn pack(&self, boxes: &[Box3D], container: &Container) -> Result<PackResult> {
        container.validate()?;
        for item in boxes {
            item.validate()?;
        }

        let start = Instant::now();
        let mut result = PackResult::new();
        let low_cutoff = self.config.low_height_ratio * container.height();

        for (index, item) in boxes.iter().enumerate() {
            let placement = if item.height() < low_cutoff {
                self.stack_on_existing(item, &result.placements, container)
                    .or_else(|| find_placement(item, &result.placements, container))
            } else {
                find_placement(item, &result.placements, container)
            };

            match placement {
                Some(p) => result.placements.push(p),
                None => {
                    log::debug!(
                        "box {} ({}x{}x{}) fits nowhere, skipping",
                        index,
                        item.length(),
                        item.width(),
                        item.height()
                    );
                    result.unplaced.push(index);
                }
            }
        }

        result.utilization = result.occupied_volume() / container.volume();
        result.computation_time_ms = start.elapsed().as_millis() as u64;

        Ok(result)
    }

    /// Tries the stacking shortcut: drop the box, unrotated, directly on top
    /// of each placed box in placement order and accept the first candidate
    /// that is contained, collision-free and supported.
    fn stack_on_existing(
        &self,
        item: &Box3D,
        placed: &[PlacedBox],
        container: &Container,
    ) -> Option<PlacedBox> {
        for base in placed {
            let position = Point3::new(base.position.x, base.position.y, base.top_z());
            let candidate = Region::new(position, *item.dimensions());

            if container.contains(&candidate)
                && !collides_with_any(&candidate, placed)
                && is_supported(&candidate, placed)
            {
                return Some(PlacedBox::new(position, candidate.dimensions, item.weight()));
            }
        }

        None
    }
}
