//! Axis-aligned collision testing between cuboid regions.

use nalgebra::{Point3, Vector3};
use stowage_core::PlacedBox;

/// A candidate cuboid region: position plus oriented extents.
///
/// Regions are throwaway values built fresh for every trial position; they
/// are only materialized into a [`PlacedBox`] when a trial is accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// Position of the bottom-left-front corner.
    pub position: Point3<f64>,
    /// Extents along X, Y, Z.
    pub dimensions: Vector3<f64>,
}

impl Region {
    /// Creates a new region.
    pub fn new(position: Point3<f64>, dimensions: Vector3<f64>) -> Self {
        Self {
            position,
            dimensions,
        }
    }

    /// Returns the max corner of the region.
    pub fn max_corner(&self) -> Point3<f64> {
        self.position + self.dimensions
    }

    /// Checks whether this region and `other` overlap on a positive volume.
    ///
    /// Two cuboids overlap iff they intersect on all three axes at once;
    /// the comparisons are strict, so touching faces are not an overlap.
    pub fn overlaps(&self, other: &Region) -> bool {
        let self_max = self.max_corner();
        let other_max = other.max_corner();

        self.position.x < other_max.x
            && other.position.x < self_max.x
            && self.position.y < other_max.y
            && other.position.y < self_max.y
            && self.position.z < other_max.z
            && other.position.z < self_max.z
    }

    /// Checks whether the X-Y footprints of this region and `other` overlap.
    ///
    /// Same separating-axis rule as [`Region::overlaps`], restricted to the
    /// plan dimensions; Z is ignored.
    pub fn footprint_overlaps(&self, other: &Region) -> bool {
        let self_max = self.max_corner();
        let other_max = other.max_corner();

        self.position.x < other_max.x
            && other.position.x < self_max.x
            && self.position.y < other_max.y
            && other.position.y < self_max.y
    }
}

impl From<&PlacedBox> for Region {
    fn from(placed: &PlacedBox) -> Self {
        Self::new(placed.position, placed.dimensions)
    }
}

/// Checks a candidate region against every placed box.
pub fn collides_with_any(candidate: &Region, placed: &[PlacedBox]) -> bool {
    placed
        .iter()
        .any(|p| candidate.overlaps(&Region::from(p)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(pos: (f64, f64, f64), dims: (f64, f64, f64)) -> Region {
        Region::new(
            Point3::new(pos.0, pos.1, pos.2),
            Vector3::new(dims.0, dims.1, dims.2),
        )
    }

    #[test]
    fn test_overlap() {
        let a = region((0.0, 0.0, 0.0), (10.0, 10.0, 10.0));
        let b = region((5.0, 5.0, 5.0), (10.0, 10.0, 10.0));
        let c = region((20.0, 20.0, 20.0), (10.0, 10.0, 10.0));

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_touching_faces_do_not_overlap() {
        let a = region((0.0, 0.0, 0.0), (10.0, 10.0, 10.0));
        let face = region((10.0, 0.0, 0.0), (10.0, 10.0, 10.0));
        let edge = region((10.0, 10.0, 0.0), (10.0, 10.0, 10.0));
        let stacked = region((0.0, 0.0, 10.0), (10.0, 10.0, 10.0));

        assert!(!a.overlaps(&face));
        assert!(!a.overlaps(&edge));
        assert!(!a.overlaps(&stacked));
    }

    #[test]
    fn test_single_axis_separation_is_enough() {
        let a = region((0.0, 0.0, 0.0), (10.0, 10.0, 10.0));
        // Overlapping in X and Y but fully above in Z.
        let above = region((2.0, 2.0, 15.0), (10.0, 10.0, 10.0));
        assert!(!a.overlaps(&above));
    }

    #[test]
    fn test_footprint_overlap_ignores_z() {
        let a = region((0.0, 0.0, 0.0), (10.0, 10.0, 10.0));
        let above = region((2.0, 2.0, 50.0), (4.0, 4.0, 4.0));
        let beside = region((10.0, 0.0, 0.0), (4.0, 4.0, 4.0));

        assert!(a.footprint_overlaps(&above));
        assert!(!a.footprint_overlaps(&beside));
    }

    #[test]
    fn test_collides_with_any() {
        let placed = vec![
            PlacedBox::new(Point3::origin(), Vector3::new(10.0, 10.0, 10.0), 1.0),
            PlacedBox::new(
                Point3::new(20.0, 0.0, 0.0),
                Vector3::new(10.0, 10.0, 10.0),
                1.0,
            ),
        ];

        let hit = region((5.0, 5.0, 5.0), (2.0, 2.0, 2.0));
        let miss = region((12.0, 0.0, 0.0), (2.0, 2.0, 2.0));

        assert!(collides_with_any(&hit, &placed));
        assert!(!collides_with_any(&miss, &placed));
        assert!(!collides_with_any(&hit, &[]));
    }
}
