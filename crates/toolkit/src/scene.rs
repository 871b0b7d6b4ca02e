//! Renderer handoff: cuboid meshes for the 3D view.
//!
//! The engine's output is positions and extents; a renderer wants vertices
//! and faces. This module does that expansion once, plus the weight
//! normalization the view uses to drive its color ramp, and leaves the
//! actual drawing to whatever consumes the JSON.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use stowage_core::PackResult;
use stowage_engine::Container;

/// Quad faces of a cuboid as indices into its vertex list:
/// bottom, top, front, back, right, left.
const CUBOID_FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [2, 3, 7, 6],
    [1, 2, 6, 5],
    [0, 3, 7, 4],
];

/// One placed box expanded to a renderable mesh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxMesh {
    /// The 8 corner vertices: bottom face counter-clockwise, then the top
    /// face in the same order.
    pub vertices: [[f64; 3]; 8],
    /// Quad faces as vertex index quartets.
    pub faces: [[usize; 4]; 6],
    /// Weight of the box.
    pub weight: f64,
    /// Weight mapped to 0.0..=1.0 across the load, for the color ramp.
    pub weight_normalized: f64,
}

/// A full renderable scene: the container extents and one mesh per box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Container extents (x, y, z).
    pub container: [f64; 3],
    /// Meshes in placement order.
    pub meshes: Vec<BoxMesh>,
}

impl Scene {
    /// Builds a scene from a pack result.
    pub fn new(container: &Container, result: &PackResult) -> Self {
        let weights: Vec<f64> = result.placements.iter().map(|p| p.weight).collect();
        let min_weight = weights.iter().copied().fold(f64::INFINITY, f64::min);
        let max_weight = weights.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let span = max_weight - min_weight;

        let meshes = result
            .placements
            .iter()
            .map(|p| {
                let (x, y, z) = (p.position.x, p.position.y, p.position.z);
                let (dx, dy, dz) = (p.dimensions.x, p.dimensions.y, p.dimensions.z);

                let vertices = [
                    [x, y, z],
                    [x + dx, y, z],
                    [x + dx, y + dy, z],
                    [x, y + dy, z],
                    [x, y, z + dz],
                    [x + dx, y, z + dz],
                    [x + dx, y + dy, z + dz],
                    [x, y + dy, z + dz],
                ];

                let weight_normalized = if span > 0.0 {
                    (p.weight - min_weight) / span
                } else {
                    0.0
                };

                BoxMesh {
                    vertices,
                    faces: CUBOID_FACES,
                    weight: p.weight,
                    weight_normalized,
                }
            })
            .collect();

        Self {
            container: [container.length(), container.width(), container.height()],
            meshes,
        }
    }

    /// Saves the scene to a JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use stowage_engine::{Box3D, Packer};

    #[test]
    fn test_mesh_vertices_span_the_box() {
        let container = Container::new(10.0, 10.0, 10.0);
        let boxes = vec![Box3D::new(2.0, 3.0, 4.0, 10.0)];
        let result = Packer::default().pack(&boxes, &container).unwrap();

        let scene = Scene::new(&container, &result);
        assert_eq!(scene.container, [10.0, 10.0, 10.0]);
        assert_eq!(scene.meshes.len(), 1);

        let mesh = &scene.meshes[0];
        assert_eq!(mesh.vertices[0], [0.0, 0.0, 0.0]);
        assert_eq!(mesh.vertices[6], [2.0, 3.0, 4.0]);
        assert_eq!(mesh.faces.len(), 6);
        for face in &mesh.faces {
            for &idx in face {
                assert!(idx < 8);
            }
        }
    }

    #[test]
    fn test_weight_normalization() {
        let container = Container::new(20.0, 20.0, 20.0);
        let boxes = vec![
            Box3D::new(2.0, 2.0, 2.0, 10.0),
            Box3D::new(2.0, 2.0, 2.0, 55.0),
            Box3D::new(2.0, 2.0, 2.0, 100.0),
        ];
        let result = Packer::default().pack(&boxes, &container).unwrap();

        let scene = Scene::new(&container, &result);
        assert_relative_eq!(scene.meshes[0].weight_normalized, 0.0);
        assert_relative_eq!(scene.meshes[1].weight_normalized, 0.5);
        assert_relative_eq!(scene.meshes[2].weight_normalized, 1.0);
    }

    #[test]
    fn test_uniform_weights_normalize_to_zero() {
        let container = Container::new(20.0, 20.0, 20.0);
        let boxes = vec![
            Box3D::new(2.0, 2.0, 2.0, 10.0),
            Box3D::new(2.0, 2.0, 2.0, 10.0),
        ];
        let result = Packer::default().pack(&boxes, &container).unwrap();

        let scene = Scene::new(&container, &result);
        for mesh in &scene.meshes {
            assert_relative_eq!(mesh.weight_normalized, 0.0);
        }
    }
}
