//! Box geometry and the discrete orientation set.

use nalgebra::Vector3;
use stowage_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An unplaced rectangular box.
///
/// Dimensions are extents along the container's X, Y and Z axes; weight is
/// carried through to the placement untouched.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Box3D {
    /// Extents along X (length), Y (width), Z (height).
    dimensions: Vector3<f64>,

    /// Weight of the box.
    weight: f64,
}

impl Box3D {
    /// Creates a new box with the given extents and weight.
    pub fn new(length: f64, width: f64, height: f64, weight: f64) -> Self {
        Self {
            dimensions: Vector3::new(length, width, height),
            weight,
        }
    }

    /// Creates a box from a dimension triple and weight.
    pub fn from_parts(dimensions: Vector3<f64>, weight: f64) -> Self {
        Self { dimensions, weight }
    }

    /// Returns the dimension triple (length, width, height).
    pub fn dimensions(&self) -> &Vector3<f64> {
        &self.dimensions
    }

    /// Returns the extent along X.
    pub fn length(&self) -> f64 {
        self.dimensions.x
    }

    /// Returns the extent along Y.
    pub fn width(&self) -> f64 {
        self.dimensions.y
    }

    /// Returns the extent along Z.
    pub fn height(&self) -> f64 {
        self.dimensions.z
    }

    /// Returns the weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the volume.
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Validates the box and returns an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.dimensions.x <= 0.0 || self.dimensions.y <= 0.0 || self.dimensions.z <= 0.0 {
            return Err(Error::InvalidBox(format!(
                "all dimensions must be positive, got {}x{}x{}",
                self.dimensions.x, self.dimensions.y, self.dimensions.z
            )));
        }

        if self.weight <= 0.0 {
            return Err(Error::InvalidBox(format!(
                "weight must be positive, got {}",
                self.weight
            )));
        }

        Ok(())
    }

    /// Returns the four orientations tried during placement, in search order.
    ///
    /// From original extents `(d0, d1, d2)` these are the identity and the
    /// three single-swap axis permutations:
    ///
    /// 1. `(d0, d1, d2)`
    /// 2. `(d1, d0, d2)` — swap X/Y
    /// 3. `(d0, d2, d1)` — swap Y/Z
    /// 4. `(d2, d1, d0)` — swap X/Z
    ///
    /// The two permutations reachable only by composing two swaps are never
    /// generated. Layouts and test fixtures depend on exactly this set and
    /// its order; extending it to all six permutations is a deliberate
    /// follow-up design decision, not a drop-in fix.
    pub fn rotations(&self) -> [Box3D; 4] {
        let d = self.dimensions;
        [
            Self::from_parts(Vector3::new(d.x, d.y, d.z), self.weight),
            Self::from_parts(Vector3::new(d.y, d.x, d.z), self.weight),
            Self::from_parts(Vector3::new(d.x, d.z, d.y), self.weight),
            Self::from_parts(Vector3::new(d.z, d.y, d.x), self.weight),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_box_volume() {
        let b = Box3D::new(10.0, 20.0, 30.0, 5.0);
        assert_relative_eq!(b.volume(), 6000.0, epsilon = 0.001);
    }

    #[test]
    fn test_rotations_exact_set_and_order() {
        let b = Box3D::new(1.0, 2.0, 3.0, 7.0);
        let rots = b.rotations();

        assert_eq!(*rots[0].dimensions(), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(*rots[1].dimensions(), Vector3::new(2.0, 1.0, 3.0));
        assert_eq!(*rots[2].dimensions(), Vector3::new(1.0, 3.0, 2.0));
        assert_eq!(*rots[3].dimensions(), Vector3::new(3.0, 2.0, 1.0));

        // The two double-swap permutations must never appear.
        for rot in &rots {
            assert_ne!(*rot.dimensions(), Vector3::new(2.0, 3.0, 1.0));
            assert_ne!(*rot.dimensions(), Vector3::new(3.0, 1.0, 2.0));
        }
    }

    #[test]
    fn test_rotations_preserve_weight() {
        let b = Box3D::new(1.0, 2.0, 3.0, 42.0);
        for rot in b.rotations() {
            assert_relative_eq!(rot.weight(), 42.0);
        }
    }

    #[test]
    fn test_validation() {
        let valid = Box3D::new(10.0, 20.0, 30.0, 1.0);
        assert!(valid.validate().is_ok());

        let negative_dim = Box3D::new(-10.0, 20.0, 30.0, 1.0);
        assert!(negative_dim.validate().is_err());

        let zero_weight = Box3D::new(10.0, 20.0, 30.0, 0.0);
        assert!(zero_weight.validate().is_err());
    }
}
