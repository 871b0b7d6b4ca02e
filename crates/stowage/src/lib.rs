//! # Stowage
//!
//! Greedy first-fit 3D container loading.
//!
//! Given an ordered list of boxes (dimensions plus weight) and a fixed
//! container, Stowage assigns each box a non-overlapping, physically
//! supported position and reports the resulting layout.
//!
//! ## Quick Start
//!
//! ```
//! use stowage::{Box3D, Container, Packer};
//!
//! let container = Container::new(40.0, 8.0, 8.5);
//! let boxes = vec![
//!     Box3D::new(4.0, 3.0, 3.0, 95.0),
//!     Box3D::new(2.0, 2.0, 1.0, 40.0),
//! ];
//!
//! let result = Packer::default().pack(&boxes, &container)?;
//! println!("placed {} of {}", result.placed_count(), boxes.len());
//! # Ok::<(), stowage::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support for the engine and result types

/// Shared types.
pub use stowage_core as core;

/// The placement engine.
pub use stowage_engine as engine;

// Re-export commonly used types at root level
pub use stowage_core::{Error, PackResult, PlacedBox, Result};
pub use stowage_engine::{Box3D, Container, PackConfig, Packer};
