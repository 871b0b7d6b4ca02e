//! Placement representation for boxes accepted into the container.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A box that has been assigned a position inside the container.
///
/// Created only by the packer once a collision-free, supported slot is found.
/// The dimensions are the oriented extents along the container's X, Y and Z
/// axes; a `PlacedBox` is never moved or re-oriented after creation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedBox {
    /// Position of the bottom-left-front corner.
    pub position: Point3<f64>,

    /// Oriented extents along X, Y, Z.
    pub dimensions: Vector3<f64>,

    /// Weight of the box, carried through unchanged from the input.
    pub weight: f64,
}

impl PlacedBox {
    /// Creates a new placed box.
    pub fn new(position: Point3<f64>, dimensions: Vector3<f64>, weight: f64) -> Self {
        Self {
            position,
            dimensions,
            weight,
        }
    }

    /// Returns the max corner of the box.
    pub fn max_corner(&self) -> Point3<f64> {
        self.position + self.dimensions
    }

    /// Returns the z-plane of the top face.
    pub fn top_z(&self) -> f64 {
        self.position.z + self.dimensions.z
    }

    /// Returns the volume of the box.
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Returns the area of the bottom face.
    pub fn base_area(&self) -> f64 {
        self.dimensions.x * self.dimensions.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_max_corner() {
        let b = PlacedBox::new(
            Point3::new(1.0, 2.0, 3.0),
            Vector3::new(10.0, 20.0, 30.0),
            5.0,
        );
        let max = b.max_corner();
        assert_relative_eq!(max.x, 11.0);
        assert_relative_eq!(max.y, 22.0);
        assert_relative_eq!(max.z, 33.0);
    }

    #[test]
    fn test_top_z_and_volume() {
        let b = PlacedBox::new(
            Point3::new(0.0, 0.0, 2.0),
            Vector3::new(2.0, 3.0, 4.0),
            1.0,
        );
        assert_relative_eq!(b.top_z(), 6.0);
        assert_relative_eq!(b.volume(), 24.0);
        assert_relative_eq!(b.base_area(), 6.0);
    }
}
