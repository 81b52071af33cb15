//! # Sphere Primitive
//!
//! Generates a sphere (or a longitude / latitude patch of one) using a
//! latitude/longitude lattice.
//!
//! ## Parameterization
//!
//! Vertex `(x, y)` of the `(width_segments + 1) × (height_segments + 1)`
//! lattice sits at
//!
//! ```text
//! φ = phi_start + x / width_segments * phi_length        (longitude)
//! θ = theta_start + y / height_segments * theta_length   (colatitude)
//! p = (-r cos φ sin θ, r cos θ, r sin φ sin θ)
//! ```
//!
//! ## Poles
//!
//! A lattice row whose height is exactly `±radius` collapses to a point.
//! Cells touching such a row emit a single triangle instead of two. The
//! test is exact floating-point equality: rows that are only *nearly* at a
//! pole (e.g. `theta_start = 1e-9`) are triangulated as regular quads.

use crate::builder::MeshBuilder;
use crate::error::MeshError;
use crate::grid::IndexedGrid;
use crate::mesh::Mesh;
use crate::validate::{
    check_finite, check_min_segments, check_non_negative, lattice_triangles, lattice_vertices,
};
use config::constants::{
    approx_zero, DEFAULT_START_ANGLE, FULL_TURN, HALF_TURN, SPHERE_DEFAULT_HEIGHT_SEGMENTS,
    SPHERE_DEFAULT_RADIUS, SPHERE_DEFAULT_WIDTH_SEGMENTS, SPHERE_MIN_HEIGHT_SEGMENTS,
    SPHERE_MIN_WIDTH_SEGMENTS, SPHERE_SOLID_HEIGHT_SEGMENTS, SPHERE_SOLID_WIDTH_SEGMENTS,
};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Parameters for [`create_sphere`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereParams {
    /// Radius (>= 0)
    pub radius: f64,
    /// Longitude segments (>= 1, fewer than 3 is flat)
    pub width_segments: u32,
    /// Latitude segments (>= 1, a single one collapses to the poles)
    pub height_segments: u32,
    /// First longitude (radians)
    pub phi_start: f64,
    /// Longitude range (radians, `2π` = all the way around)
    pub phi_length: f64,
    /// First colatitude (radians, 0 = north pole)
    pub theta_start: f64,
    /// Colatitude range (radians, `π` = pole to pole)
    pub theta_length: f64,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            radius: SPHERE_DEFAULT_RADIUS,
            width_segments: SPHERE_DEFAULT_WIDTH_SEGMENTS,
            height_segments: SPHERE_DEFAULT_HEIGHT_SEGMENTS,
            phi_start: DEFAULT_START_ANGLE,
            phi_length: FULL_TURN,
            theta_start: DEFAULT_START_ANGLE,
            theta_length: HALF_TURN,
        }
    }
}

impl SphereParams {
    /// Checks every parameter.
    pub fn validate(&self) -> Result<(), MeshError> {
        check_non_negative("radius", self.radius)?;
        check_min_segments("width_segments", self.width_segments, SPHERE_MIN_WIDTH_SEGMENTS)?;
        check_min_segments(
            "height_segments",
            self.height_segments,
            SPHERE_MIN_HEIGHT_SEGMENTS,
        )?;
        check_finite("phi_start", self.phi_start)?;
        check_finite("phi_length", self.phi_length)?;
        check_finite("theta_start", self.theta_start)?;
        check_finite("theta_length", self.theta_length)?;
        Ok(())
    }
}

/// Creates a sphere mesh.
///
/// # Arguments
///
/// * `params` - Radius, lattice resolution and angular ranges
///
/// # Returns
///
/// A mesh with `(width_segments + 1) * (height_segments + 1)` vertices.
/// A full sphere has `2 * width_segments * (height_segments - 1)`
/// triangles: one fan of `width_segments` per pole, two per cell elsewhere.
/// With a single height segment both lattice rows are poles and each cell
/// emits one zero-area triangle.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::{create_sphere, SphereParams};
///
/// let params = SphereParams { width_segments: 8, height_segments: 4, ..Default::default() };
/// let mesh = create_sphere(&params).unwrap();
/// assert_eq!(mesh.vertex_count(), 9 * 5);
/// assert_eq!(mesh.triangle_count(), 2 * 8 * 3);
/// ```
pub fn create_sphere(params: &SphereParams) -> Result<Mesh, MeshError> {
    params.validate()?;

    if approx_zero(params.radius) {
        warn!("create_sphere: radius is 0, every triangle has zero area");
    }
    if approx_zero(params.phi_length) || approx_zero(params.theta_length) {
        warn!("create_sphere: empty angular range, every triangle has zero area");
    }
    if params.width_segments < SPHERE_SOLID_WIDTH_SEGMENTS
        || params.height_segments < SPHERE_SOLID_HEIGHT_SEGMENTS
    {
        warn!(
            "create_sphere: {} x {} segments cannot enclose a volume",
            params.width_segments, params.height_segments
        );
    }

    let columns = params.width_segments;
    let rows = params.height_segments;
    let mut builder = MeshBuilder::with_budget(
        lattice_vertices(columns, rows),
        lattice_triangles(columns, rows),
    )?;
    let grid = IndexedGrid::new(builder.vertex_count(), columns, rows)?;

    let radius = params.radius;
    let mut row_heights = Vec::with_capacity(rows as usize + 1);

    for y in 0..=rows {
        let v = y as f64 / rows as f64;
        let theta = params.theta_start + v * params.theta_length;
        let (sin_theta, cos_theta) = theta.sin_cos();
        row_heights.push(radius * cos_theta);

        for x in 0..=columns {
            let u = x as f64 / columns as f64;
            let phi = params.phi_start + u * params.phi_length;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let position = DVec3::new(
                -radius * cos_phi * sin_theta,
                radius * cos_theta,
                radius * sin_phi * sin_theta,
            );
            builder.push_vertex(position, DVec2::new(u, 1.0 - v));
        }
    }

    let is_pole = |height: f64| height.abs() == radius;

    for quad in grid.quads() {
        if is_pole(row_heights[quad.row as usize]) {
            builder.push_triangle(quad.d, quad.b, quad.c);
        } else if is_pole(row_heights[quad.row as usize + 1]) {
            builder.push_triangle(quad.d, quad.a, quad.b);
        } else {
            builder.push_triangle(quad.d, quad.a, quad.c);
            builder.push_triangle(quad.a, quad.b, quad.c);
        }
    }

    let mesh = builder.build();
    debug!(
        "create_sphere: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests;
