//! Pack result representation.

use crate::placement::PlacedBox;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a container loading run.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackResult {
    /// Boxes in the order they were accepted, each with its chosen
    /// orientation and position.
    pub placements: Vec<PlacedBox>,

    /// Indices into the input sequence of boxes that found no slot.
    ///
    /// Informational only: the placement sequence above is the engine's
    /// output contract, and skipped boxes are simply absent from it.
    pub unplaced: Vec<usize>,

    /// Occupied volume over container volume (0.0 - 1.0).
    pub utilization: f64,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,
}

impl PackResult {
    /// Creates a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of boxes placed.
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    /// Returns the number of boxes that found no slot.
    pub fn unplaced_count(&self) -> usize {
        self.unplaced.len()
    }

    /// Returns true if every input box was placed.
    pub fn all_placed(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Returns true if at least one box was placed.
    pub fn is_successful(&self) -> bool {
        !self.placements.is_empty()
    }

    /// Returns the total volume of all placed boxes.
    pub fn occupied_volume(&self) -> f64 {
        self.placements.iter().map(PlacedBox::volume).sum()
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point3, Vector3};

    #[test]
    fn test_result_new() {
        let result = PackResult::new();
        assert!(result.placements.is_empty());
        assert_eq!(result.utilization, 0.0);
        assert!(result.all_placed());
        assert!(!result.is_successful());
    }

    #[test]
    fn test_result_with_placements() {
        let mut result = PackResult::new();
        result.placements.push(PlacedBox::new(
            Point3::origin(),
            Vector3::new(2.0, 2.0, 2.0),
            10.0,
        ));
        result.utilization = 0.85;

        assert_eq!(result.placed_count(), 1);
        assert!(result.is_successful());
        assert_eq!(result.occupied_volume(), 8.0);
        assert_eq!(result.utilization_percent(), "85.0%");
    }

    #[test]
    fn test_result_with_unplaced() {
        let mut result = PackResult::new();
        result.unplaced.push(3);
        result.unplaced.push(7);

        assert!(!result.all_placed());
        assert_eq!(result.unplaced_count(), 2);
    }
}
