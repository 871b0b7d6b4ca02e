//! Container boundary.

use crate::collision::Region;
use nalgebra::Vector3;
use stowage_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The fixed rectangular volume boxes are loaded into.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Container {
    /// Extents along X (length), Y (width), Z (height).
    dimensions: Vector3<f64>,
}

impl Container {
    /// Creates a new container with the given extents.
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            dimensions: Vector3::new(length, width, height),
        }
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

    /// Returns the volume.
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Validates the container and returns an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.dimensions.x <= 0.0 || self.dimensions.y <= 0.0 || self.dimensions.z <= 0.0 {
            return Err(Error::InvalidContainer(
                "all dimensions must be positive".into(),
            ));
        }

        Ok(())
    }

    /// Returns true if the region lies entirely within the container.
    ///
    /// Bounds are closed: a region flush against a wall is contained.
    pub fn contains(&self, region: &Region) -> bool {
        let max = region.max_corner();
        region.position.x >= 0.0
            && region.position.y >= 0.0
            && region.position.z >= 0.0
            && max.x <= self.dimensions.x
            && max.y <= self.dimensions.y
            && max.z <= self.dimensions.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    #[test]
    fn test_container_volume() {
        let container = Container::new(40.0, 8.0, 8.5);
        assert_relative_eq!(container.volume(), 2720.0, epsilon = 0.001);
    }

    #[test]
    fn test_validation() {
        let valid = Container::new(40.0, 8.0, 8.5);
        assert!(valid.validate().is_ok());

        let invalid = Container::new(40.0, -8.0, 8.5);
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_contains() {
        let container = Container::new(10.0, 10.0, 10.0);

        let inside = Region::new(Point3::new(1.0, 1.0, 1.0), Vector3::new(2.0, 2.0, 2.0));
        assert!(container.contains(&inside));

        // Flush against the far walls still counts.
        let flush = Region::new(Point3::new(8.0, 8.0, 8.0), Vector3::new(2.0, 2.0, 2.0));
        assert!(container.contains(&flush));

        let poking_out = Region::new(Point3::new(9.0, 0.0, 0.0), Vector3::new(2.0, 2.0, 2.0));
        assert!(!container.contains(&poking_out));

        let negative = Region::new(Point3::new(-1.0, 0.0, 0.0), Vector3::new(2.0, 2.0, 2.0));
        assert!(!container.contains(&negative));
    }
}
