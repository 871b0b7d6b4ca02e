//! # Stowage Toolkit
//!
//! Collaborators around the Stowage placement engine:
//!
//! - Manifest readers (JSON / CSV load lists with quantity expansion)
//! - Synthetic load-list generation
//! - Load report generation (stdout table, markdown, JSON)
//! - Scene export for 3D renderers
//!
//! The engine itself only ever sees an ordered `Vec<Box3D>` and a
//! [`Container`](stowage_engine::Container); everything in this crate
//! produces that input or consumes the resulting
//! [`PackResult`](stowage_core::PackResult).

mod manifest;
mod report;
mod scene;
mod synthetic;

pub use manifest::{Manifest, ManifestEntry, ManifestError};
pub use report::{BoxRow, LoadReport};
pub use scene::{BoxMesh, Scene};
pub use synthetic::SyntheticGenerator;
