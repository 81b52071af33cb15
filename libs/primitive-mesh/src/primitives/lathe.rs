//! # Lathe Primitive
//!
//! Revolves an ordered profile of points around the Z axis.
//!
//! ## Algorithm
//!
//! 1. For each of the `segments + 1` rotation steps `φ` in
//!    `[phi_start, phi_start + phi_length]`, rotate every profile point
//!    `(x, y, z)` to `(x cos φ - y sin φ, x sin φ + y cos φ, z)`
//! 2. Connect consecutive copies of the profile with the shared grid
//!    triangulation (profile edges × rotation steps)
//!
//! The first and last copies coincide for a full turn but stay separate
//! vertices, like every other seam.

use crate::builder::MeshBuilder;
use crate::error::MeshError;
use crate::grid::IndexedGrid;
use crate::mesh::Mesh;
use crate::validate::{check_finite, check_min_segments, lattice_triangles, lattice_vertices};
use config::constants::{
    approx_zero, is_full_turn, DEFAULT_START_ANGLE, FULL_TURN, LATHE_DEFAULT_PROFILE_POINTS,
    LATHE_DEFAULT_SEGMENTS, LATHE_MIN_POINTS, LATHE_MIN_SEGMENTS,
};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Parameters for [`create_lathe`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatheParams {
    /// Profile to revolve, in order (at least 2 points)
    pub points: Vec<DVec3>,
    /// Rotation steps (>= 1)
    pub segments: u32,
    /// First rotation angle (radians)
    pub phi_start: f64,
    /// Angle swept (radians, `2π` = full revolution)
    pub phi_length: f64,
}

impl Default for LatheParams {
    fn default() -> Self {
        Self {
            points: default_profile(),
            segments: LATHE_DEFAULT_SEGMENTS,
            phi_start: DEFAULT_START_ANGLE,
            phi_length: FULL_TURN,
        }
    }
}

impl LatheParams {
    /// Checks every parameter.
    ///
    /// A profile with fewer than 2 points has no edge to revolve and is
    /// reported as `DegenerateGeometry`.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.points.len() < LATHE_MIN_POINTS {
            return Err(MeshError::degenerate(format!(
                "lathe profile needs at least {} points, got {}",
                LATHE_MIN_POINTS,
                self.points.len()
            )));
        }
        if let Some(index) = self.points.iter().position(|p| !p.is_finite()) {
            return Err(MeshError::invalid_parameter(
                "points",
                format!("point {} is not finite", index),
            ));
        }
        check_min_segments("segments", self.segments, LATHE_MIN_SEGMENTS)?;
        check_finite("phi_start", self.phi_start)?;
        check_finite("phi_length", self.phi_length)?;
        Ok(())
    }

    /// Returns true when the revolution spans a full turn, so its seam vertices
    /// coincide.
    pub fn is_closed(&self) -> bool {
        is_full_turn(self.phi_length)
    }
}

/// The wavy vase profile a fresh lathe starts with.
///
/// Point `i` of 50 is `(sin(0.2 i) sin(0.1 i) 15 + 50, 0, 2 (i - 25))`.
pub fn default_profile() -> Vec<DVec3> {
    (0..LATHE_DEFAULT_PROFILE_POINTS)
        .map(|i| {
            let i = i as f64;
            DVec3::new(
                (i * 0.2).sin() * (i * 0.1).sin() * 15.0 + 50.0,
                0.0,
                (i - 25.0) * 2.0,
            )
        })
        .collect()
}

/// Creates a lathe mesh.
///
/// # Arguments
///
/// * `params` - Profile, rotation steps and angular range
///
/// # Returns
///
/// A mesh with `(segments + 1) * points.len()` vertices and
/// `2 * segments * (points.len() - 1)` triangles. UVs run
/// `(step / segments, point / (points.len() - 1))`.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::{create_lathe, LatheParams};
/// use glam::DVec3;
///
/// let params = LatheParams {
///     points: vec![DVec3::new(1.0, 0.0, -1.0), DVec3::new(1.0, 0.0, 1.0)],
///     segments: 12,
///     ..Default::default()
/// };
/// let mesh = create_lathe(&params).unwrap();
/// assert_eq!(mesh.vertex_count(), 13 * 2);
/// assert_eq!(mesh.triangle_count(), 2 * 12);
/// ```
pub fn create_lathe(params: &LatheParams) -> Result<Mesh, MeshError> {
    params.validate()?;

    if approx_zero(params.phi_length) {
        warn!("create_lathe: phi_length is 0, every triangle has zero area");
    } else if !params.is_closed() {
        debug!("create_lathe: partial turn of {} rad", params.phi_length);
    }

    let edges = (params.points.len() - 1) as u32;
    let segments = params.segments;
    let mut builder = MeshBuilder::with_budget(
        lattice_vertices(edges, segments),
        lattice_triangles(edges, segments),
    )?;
    let grid = IndexedGrid::new(builder.vertex_count(), edges, segments)?;

    for i in 0..=segments {
        let phi = params.phi_start + i as f64 / segments as f64 * params.phi_length;
        let (sin_phi, cos_phi) = phi.sin_cos();

        for (j, point) in params.points.iter().enumerate() {
            let position = DVec3::new(
                cos_phi * point.x - sin_phi * point.y,
                sin_phi * point.x + cos_phi * point.y,
                point.z,
            );
            let uv = DVec2::new(i as f64 / segments as f64, j as f64 / edges as f64);
            builder.push_vertex(position, uv);
        }
    }

    grid.triangulate(&mut builder);

    let mesh = builder.build();
    debug!(
        "create_lathe: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn tube(segments: u32) -> LatheParams {
        LatheParams {
            points: vec![
                DVec3::new(1.0, 0.0, -1.0),
                DVec3::new(1.5, 0.0, 0.0),
                DVec3::new(1.0, 0.0, 1.0),
            ],
            segments,
            ..Default::default()
        }
    }

    #[test]
    fn test_lathe_counts() {
        let mesh = create_lathe(&tube(10)).unwrap();
        assert_eq!(mesh.vertex_count(), 11 * 3);
        assert_eq!(mesh.triangle_count(), 2 * 10 * 2);
        assert!(mesh.validate());
    }

    #[test]
    fn test_lathe_preserves_radius_and_z() {
        let params = tube(7);
        let mesh = create_lathe(&params).unwrap();
        for (k, p) in mesh.positions().iter().enumerate() {
            let source = params.points[k % params.points.len()];
            assert_relative_eq!(p.truncate().length(), source.x, epsilon = 1e-12);
            assert_eq!(p.z, source.z);
        }
    }

    #[test]
    fn test_lathe_quarter_turn() {
        let params = LatheParams {
            phi_length: FRAC_PI_2,
            ..tube(1)
        };
        assert!(!params.is_closed());
        assert!(tube(1).is_closed());
        let mesh = create_lathe(&params).unwrap();
        // Second copy of the first point is rotated onto +Y
        let rotated = mesh.position(3);
        assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(rotated.y, 1.0);
    }

    #[test]
    fn test_lathe_faces_point_outward() {
        let mesh = create_lathe(&LatheParams::default()).unwrap();
        for i in 0..mesh.triangle_count() {
            let [a, b, c] = mesh.triangle(i);
            let centroid = (mesh.position(a) + mesh.position(b) + mesh.position(c)) / 3.0;
            let radial = DVec3::new(centroid.x, centroid.y, 0.0);
            assert!(mesh.face_normal(i).dot(radial) > 0.0, "triangle {}", i);
        }
    }

    #[test]
    fn test_lathe_uvs() {
        let mesh = create_lathe(&tube(4)).unwrap();
        assert_eq!(mesh.uvs()[0], DVec2::new(0.0, 0.0));
        assert_eq!(mesh.uvs()[2], DVec2::new(0.0, 1.0));
        assert_eq!(mesh.uvs()[14], DVec2::new(1.0, 1.0));
    }

    #[test]
    fn test_default_profile() {
        let profile = default_profile();
        assert_eq!(profile.len(), 50);
        assert_eq!(profile[0], DVec3::new(50.0, 0.0, -50.0));
        assert_eq!(profile[49].z, 48.0);
    }

    #[test]
    fn test_lathe_short_profile_is_degenerate() {
        let params = LatheParams {
            points: vec![DVec3::X],
            ..Default::default()
        };
        assert!(matches!(
            create_lathe(&params),
            Err(MeshError::DegenerateGeometry { .. })
        ));

        let empty = LatheParams {
            points: Vec::new(),
            ..Default::default()
        };
        assert!(create_lathe(&empty).is_err());
    }

    #[test]
    fn test_lathe_invalid_parameters() {
        assert!(create_lathe(&tube(0)).is_err());

        let mut params = tube(4);
        params.points[1].x = f64::NAN;
        let err = create_lathe(&params).unwrap_err();
        assert_eq!(err.parameter_name(), Some("points"));
    }
}
