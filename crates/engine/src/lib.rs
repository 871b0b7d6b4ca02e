//! # Stowage Engine
//!
//! Greedy first-fit placement engine for 3D container loading.
//!
//! Given an ordered sequence of boxes and a container, the engine assigns
//! each box a non-overlapping, physically supported position, trying four
//! axis-aligned orientations per box over an integer-quantized position grid.
//! Boxes that fit nowhere are skipped; everything else about the input order
//! is honored verbatim.
//!
//! ```
//! use stowage_engine::{Box3D, Container, Packer};
//!
//! let container = Container::new(40.0, 8.0, 8.5);
//! let boxes = vec![
//!     Box3D::new(2.0, 2.0, 2.0, 80.0),
//!     Box3D::new(2.0, 2.0, 1.0, 35.0),
//! ];
//!
//! let result = Packer::default().pack(&boxes, &container)?;
//! assert_eq!(result.placed_count(), 2);
//! # Ok::<(), stowage_core::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod boundary;
pub mod collision;
pub mod geometry;
pub mod packer;
pub mod stability;

// Re-exports
pub use boundary::Container;
pub use collision::{collides_with_any, Region};
pub use geometry::Box3D;
pub use packer::{find_placement, PackConfig, Packer};
pub use stability::is_supported;
pub use stowage_core::{Error, PackResult, PlacedBox, Result};
