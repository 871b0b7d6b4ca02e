//! Support testing for candidate placements.

use crate::collision::Region;
use stowage_core::PlacedBox;

/// Checks whether a candidate region would rest on the floor or on a single
/// sufficiently large box directly beneath it.
///
/// A candidate at `z == 0` is floor-supported. Otherwise some placed box must
/// have its top face exactly in the candidate's bottom plane, a footprint at
/// least as large in both plan dimensions, and a footprint that is not
/// disjoint from the candidate's.
///
/// The comparison of the two z-planes is exact: candidate bottoms come either
/// from the integer placement grid or directly from a supporter's `top_z()`,
/// so no tolerance is involved. The test looks for one supporter only — a box
/// bridging two smaller neighbors with adequate combined footprint is
/// rejected as floating.
pub fn is_supported(candidate: &Region, placed: &[PlacedBox]) -> bool {
    if candidate.position.z == 0.0 {
        return true;
    }

    placed.iter().any(|p| {
        p.top_z() == candidate.position.z
            && p.dimensions.x >= candidate.dimensions.x
            && p.dimensions.y >= candidate.dimensions.y
            && Region::from(p).footprint_overlaps(candidate)
    })
}
