//! # Ring Primitive
//!
//! A flat annulus (or annulus sector) in the XY plane, facing +Z. Built from
//! `phi_segments + 1` concentric circles of `theta_segments + 1` vertices.
//! The angular seam is duplicated, so a partial ring never stitches its
//! start edge to its end edge.

use super::circle::disc_uv;
use crate::builder::MeshBuilder;
use crate::error::MeshError;
use crate::grid::IndexedGrid;
use crate::mesh::Mesh;
use crate::validate::{
    check_finite, check_min_segments, check_non_negative, lattice_triangles, lattice_vertices,
};
use config::constants::{
    approx_equal, approx_zero, is_full_turn, DEFAULT_START_ANGLE, FULL_TURN,
    RING_DEFAULT_INNER_RADIUS, RING_DEFAULT_OUTER_RADIUS, RING_DEFAULT_PHI_SEGMENTS,
    RING_DEFAULT_THETA_SEGMENTS, RING_MIN_PHI_SEGMENTS, RING_MIN_THETA_SEGMENTS,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Parameters for [`create_ring`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingParams {
    /// Radius of the innermost circle (>= 0)
    pub inner_radius: f64,
    /// Radius of the outermost circle (>= 0)
    pub outer_radius: f64,
    /// Angular divisions (>= 3)
    pub theta_segments: u32,
    /// Radial divisions (>= 1)
    pub phi_segments: u32,
    /// Start angle (radians)
    pub theta_start: f64,
    /// Angle swept (radians, `2π` = full ring)
    pub theta_length: f64,
}

impl Default for RingParams {
    fn default() -> Self {
        Self {
            inner_radius: RING_DEFAULT_INNER_RADIUS,
            outer_radius: RING_DEFAULT_OUTER_RADIUS,
            theta_segments: RING_DEFAULT_THETA_SEGMENTS,
            phi_segments: RING_DEFAULT_PHI_SEGMENTS,
            theta_start: DEFAULT_START_ANGLE,
            theta_length: FULL_TURN,
        }
    }
}

impl RingParams {
    /// Checks every parameter.
    pub fn validate(&self) -> Result<(), MeshError> {
        check_non_negative("inner_radius", self.inner_radius)?;
        check_non_negative("outer_radius", self.outer_radius)?;
        check_min_segments("theta_segments", self.theta_segments, RING_MIN_THETA_SEGMENTS)?;
        check_min_segments("phi_segments", self.phi_segments, RING_MIN_PHI_SEGMENTS)?;
        check_finite("theta_start", self.theta_start)?;
        check_finite("theta_length", self.theta_length)?;
        Ok(())
    }

    /// Returns true when the annulus spans a full turn, so its seam vertices
    /// coincide.
    pub fn is_closed(&self) -> bool {
        is_full_turn(self.theta_length)
    }
}

/// Creates a ring mesh.
///
/// UVs are a planar projection scaled by the outer radius, so a full ring
/// maps into the unit square the same way a circle of that radius does.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::{create_ring, RingParams};
///
/// let params = RingParams { theta_segments: 8, phi_segments: 2, ..Default::default() };
/// let mesh = create_ring(&params).unwrap();
/// assert_eq!(mesh.vertex_count(), 9 * 3);
/// assert_eq!(mesh.triangle_count(), 2 * 8 * 2);
/// ```
pub fn create_ring(params: &RingParams) -> Result<Mesh, MeshError> {
    params.validate()?;

    if approx_equal(params.inner_radius, params.outer_radius) {
        warn!("create_ring: inner and outer radius are equal, every triangle has zero area");
    } else if params.inner_radius > params.outer_radius {
        warn!("create_ring: inner_radius exceeds outer_radius, the ring faces -Z");
    }
    if approx_zero(params.theta_length) {
        warn!("create_ring: theta_length is 0, every triangle has zero area");
    } else if !params.is_closed() {
        debug!("create_ring: partial turn of {} rad", params.theta_length);
    }

    let theta_segments = params.theta_segments;
    let phi_segments = params.phi_segments;
    let mut builder = MeshBuilder::with_budget(
        lattice_vertices(theta_segments, phi_segments),
        lattice_triangles(theta_segments, phi_segments),
    )?;
    let grid = IndexedGrid::new(builder.vertex_count(), theta_segments, phi_segments)?;

    let radius_step = (params.outer_radius - params.inner_radius) / phi_segments as f64;

    for i in 0..=phi_segments {
        let radius = params.inner_radius + radius_step * i as f64;
        for o in 0..=theta_segments {
            let angle =
                params.theta_start + o as f64 / theta_segments as f64 * params.theta_length;
            let position = DVec3::new(radius * angle.cos(), radius * angle.sin(), 0.0);
            builder.push_vertex(position, disc_uv(position, params.outer_radius));
        }
    }

    grid.triangulate(&mut builder);

    let mesh = builder.build();
    debug!(
        "create_ring: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DVec2;
    use std::f64::consts::PI;

    #[test]
    fn test_ring_counts() {
        let params = RingParams {
            theta_segments: 12,
            phi_segments: 3,
            ..Default::default()
        };
        let mesh = create_ring(&params).unwrap();
        assert_eq!(mesh.vertex_count(), 13 * 4);
        assert_eq!(mesh.triangle_count(), 2 * 12 * 3);
        assert!(mesh.validate());
    }

    #[test]
    fn test_ring_faces_positive_z() {
        let mesh = create_ring(&RingParams::default()).unwrap();
        for i in 0..mesh.triangle_count() {
            assert!(mesh.face_normal(i).z > 0.0);
        }
        for n in mesh.normals() {
            assert_relative_eq!(n.z, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_ring_radii() {
        let params = RingParams {
            inner_radius: 1.0,
            outer_radius: 2.0,
            ..Default::default()
        };
        let mesh = create_ring(&params).unwrap();
        for p in mesh.positions() {
            let r = p.length();
            assert!(r > 1.0 - 1e-9 && r < 2.0 + 1e-9);
        }
    }

    #[test]
    fn test_partial_ring_does_not_stitch_seam() {
        let params = RingParams {
            theta_segments: 4,
            phi_segments: 1,
            theta_start: 0.0,
            theta_length: PI,
            ..Default::default()
        };
        assert!(!params.is_closed());
        assert!(RingParams::default().is_closed());
        let mesh = create_ring(&params).unwrap();
        // No triangle may connect the first angular column to the last
        let first_column = [0u32, 5];
        let last_column = [4u32, 9];
        for tri in mesh.triangles() {
            let touches_start = tri.iter().any(|i| first_column.contains(i));
            let touches_end = tri.iter().any(|i| last_column.contains(i));
            assert!(!(touches_start && touches_end));
        }
    }

    #[test]
    fn test_ring_uvs_scaled_by_outer_radius() {
        let params = RingParams {
            inner_radius: 1.0,
            outer_radius: 2.0,
            theta_segments: 4,
            phi_segments: 1,
            ..Default::default()
        };
        let mesh = create_ring(&params).unwrap();
        // inner vertex at angle 0: (1, 0) -> ((0.5 + 1) / 2, 0.5)
        assert_relative_eq!(mesh.uvs()[0].x, 0.75);
        assert_relative_eq!(mesh.uvs()[0].y, 0.5);
        // outer vertex at angle 0: (2, 0) -> (1, 0.5)
        assert_relative_eq!(mesh.uvs()[5].x, 1.0);
    }

    #[test]
    fn test_ring_zero_outer_radius() {
        let params = RingParams {
            inner_radius: 0.0,
            outer_radius: 0.0,
            ..Default::default()
        };
        let mesh = create_ring(&params).unwrap();
        assert!(mesh.uvs().iter().all(|uv| *uv == DVec2::splat(0.5)));
        assert_eq!(mesh.degenerate_triangle_count(), mesh.triangle_count());
    }

    #[test]
    fn test_ring_equal_radii_is_degenerate_not_error() {
        let params = RingParams {
            inner_radius: 2.0,
            outer_radius: 2.0,
            ..Default::default()
        };
        let mesh = create_ring(&params).unwrap();
        assert!(mesh.triangle_count() > 0);
        assert_eq!(mesh.degenerate_triangle_count(), mesh.triangle_count());
    }

    #[test]
    fn test_ring_invalid_segments() {
        assert!(create_ring(&RingParams {
            theta_segments: 2,
            ..Default::default()
        })
        .is_err());
        assert!(create_ring(&RingParams {
            phi_segments: 0,
            ..Default::default()
        })
        .is_err());
    }
}
