//! # Stowage Core
//!
//! Shared types for the Stowage container loading engine.
//!
//! This crate provides the types exchanged between the placement engine and
//! its collaborators (load-list readers, report and scene generators):
//!
//! - [`PlacedBox`]: a box with its accepted position and orientation
//! - [`PackResult`]: the ordered outcome of one loading run
//! - [`Error`] / [`Result`]: contract-violation errors
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod placement;
pub mod result;

// Re-exports
pub use error::{Error, Result};
pub use placement::PlacedBox;
pub use result::PackResult;
