//! # Barycentric Wireframe Coordinates
//!
//! Tags every vertex with one of the basis vectors `(1,0,0,0)`,
//! `(0,1,0,0)`, `(0,0,1,0)` so a fragment shader can draw triangle edges
//! from the interpolated value.
//!
//! ## Algorithm
//!
//! All vertices start unassigned (`(1,1,1,1)`). Triangles are visited in
//! order; for each basis vector in the order Z, Y, X that the triangle
//! does not carry yet, the first unassigned vertex of the triangle takes
//! it. Shared vertices make a perfect assignment impossible in general, so
//! a triangle left with two equal coordinates is counted as a conflict.
//! Meshes with per-face vertices (e.g. the box) assign without conflicts.

use crate::mesh::Mesh;
use glam::DVec4;
use tracing::debug;

/// Marker for a vertex that has not received a basis vector.
pub const UNASSIGNED: DVec4 = DVec4::ONE;

const BASIS: [DVec4; 3] = [DVec4::Z, DVec4::Y, DVec4::X];

/// Result of [`assign`].
#[derive(Debug, Clone, PartialEq)]
pub struct BarycentricCoordinates {
    /// One coordinate per mesh vertex
    pub coordinates: Vec<DVec4>,
    /// Triangles whose corners share a coordinate
    pub conflicts: usize,
}

impl BarycentricCoordinates {
    /// Coordinates narrowed to `f32`, flattened `[x, y, z, w, ...]`.
    pub fn to_f32(&self) -> Vec<f32> {
        self.coordinates
            .iter()
            .flat_map(|c| c.as_vec4().to_array())
            .collect()
    }
}

/// Assigns wireframe coordinates to every vertex of `mesh`.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::barycentric;
/// use primitive_mesh::primitives::{create_box, BoxParams};
///
/// let mesh = create_box(&BoxParams::default()).unwrap();
/// let result = barycentric::assign(&mesh);
/// assert_eq!(result.coordinates.len(), mesh.vertex_count());
/// ```
pub fn assign(mesh: &Mesh) -> BarycentricCoordinates {
    let mut coordinates = vec![UNASSIGNED; mesh.vertex_count()];
    let mut conflicts = 0;

    for triangle in mesh.triangles() {
        let corners = triangle.map(|i| i as usize);

        for basis in BASIS {
            if corners.iter().any(|&i| coordinates[i] == basis) {
                continue;
            }
            if let Some(&free) = corners.iter().find(|&&i| coordinates[i] == UNASSIGNED) {
                coordinates[free] = basis;
            }
        }

        let [a, b, c] = corners.map(|i| coordinates[i]);
        if a == b || b == c || a == c {
            conflicts += 1;
        }
    }

    if conflicts > 0 {
        debug!(
            "barycentric::assign: {} of {} triangles share a coordinate",
            conflicts,
            mesh.triangle_count()
        );
    }

    BarycentricCoordinates {
        coordinates,
        conflicts,
    }
}
