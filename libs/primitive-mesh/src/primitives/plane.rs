//! # Plane Primitive
//!
//! A subdivided rectangle in the XZ plane at `y = 0`, facing +Y.

use crate::builder::MeshBuilder;
use crate::error::MeshError;
use crate::grid::IndexedGrid;
use crate::mesh::Mesh;
use crate::validate::{check_min_segments, check_positive, lattice_triangles, lattice_vertices};
use config::constants::{
    PLANE_DEFAULT_HEIGHT, PLANE_DEFAULT_SEGMENTS, PLANE_DEFAULT_WIDTH, PLANE_MIN_SEGMENTS,
};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parameters for [`create_plane`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaneParams {
    /// Extent along X
    pub width: f64,
    /// Extent along Z
    pub height: f64,
    /// Subdivisions along X (>= 1)
    pub width_segments: u32,
    /// Subdivisions along Z (>= 1)
    pub height_segments: u32,
}

impl Default for PlaneParams {
    fn default() -> Self {
        Self {
            width: PLANE_DEFAULT_WIDTH,
            height: PLANE_DEFAULT_HEIGHT,
            width_segments: PLANE_DEFAULT_SEGMENTS,
            height_segments: PLANE_DEFAULT_SEGMENTS,
        }
    }
}

impl PlaneParams {
    /// Checks every parameter.
    pub fn validate(&self) -> Result<(), MeshError> {
        check_positive("width", self.width)?;
        check_positive("height", self.height)?;
        check_min_segments("width_segments", self.width_segments, PLANE_MIN_SEGMENTS)?;
        check_min_segments("height_segments", self.height_segments, PLANE_MIN_SEGMENTS)?;
        Ok(())
    }
}

/// Creates a plane mesh centered on the origin.
///
/// Vertex `(ix, iz)` sits at `(ix * width / width_segments - width / 2, 0,
/// iz * height / height_segments - height / 2)` with UV
/// `(ix / width_segments, 1 - iz / height_segments)`.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::{create_plane, PlaneParams};
///
/// let mesh = create_plane(&PlaneParams::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 11 * 11);
/// assert_eq!(mesh.triangle_count(), 2 * 10 * 10);
/// ```
pub fn create_plane(params: &PlaneParams) -> Result<Mesh, MeshError> {
    params.validate()?;

    let grid_x = params.width_segments;
    let grid_z = params.height_segments;
    let mut builder = MeshBuilder::with_budget(
        lattice_vertices(grid_x, grid_z),
        lattice_triangles(grid_x, grid_z),
    )?;
    let grid = IndexedGrid::new(builder.vertex_count(), grid_x, grid_z)?;

    let segment_width = params.width / grid_x as f64;
    let segment_height = params.height / grid_z as f64;

    for iz in 0..=grid_z {
        for ix in 0..=grid_x {
            let x = ix as f64 * segment_width - params.width / 2.0;
            let z = iz as f64 * segment_height - params.height / 2.0;
            let uv = DVec2::new(ix as f64 / grid_x as f64, 1.0 - iz as f64 / grid_z as f64);
            builder.push_vertex(DVec3::new(x, 0.0, z), uv);
        }
    }

    grid.triangulate(&mut builder);

    let mesh = builder.build();
    debug!(
        "create_plane: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_plane_basic() {
        let params = PlaneParams {
            width: 4.0,
            height: 2.0,
            width_segments: 2,
            height_segments: 1,
        };
        let mesh = create_plane(&params).unwrap();
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 4);
        assert!(mesh.validate());

        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-2.0, 0.0, -1.0));
        assert_eq!(max, DVec3::new(2.0, 0.0, 1.0));
    }

    #[test]
    fn test_plane_faces_up() {
        let mesh = create_plane(&PlaneParams::default()).unwrap();
        for i in 0..mesh.triangle_count() {
            assert!(mesh.face_normal(i).y > 0.0);
        }
        for n in mesh.normals() {
            assert_relative_eq!(n.y, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_plane_uvs() {
        let params = PlaneParams {
            width_segments: 1,
            height_segments: 1,
            ..Default::default()
        };
        let mesh = create_plane(&params).unwrap();
        assert_eq!(
            mesh.uvs(),
            &[
                DVec2::new(0.0, 1.0),
                DVec2::new(1.0, 1.0),
                DVec2::new(0.0, 0.0),
                DVec2::new(1.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_plane_invalid() {
        assert!(create_plane(&PlaneParams {
            height: -1.0,
            ..Default::default()
        })
        .is_err());
        assert!(create_plane(&PlaneParams {
            width_segments: 0,
            ..Default::default()
        })
        .is_err());
    }
}
