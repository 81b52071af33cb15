//! # Torus Knot Primitive
//!
//! A tube swept along a `(p, q)` torus knot: the curve winds `p` times
//! around the axis of rotational symmetry and `q` times around the torus'
//! interior circle.
//!
//! ## Algorithm
//!
//! 1. Sample the knot curve at `radial_segments` points
//! 2. At each sample `p1`, build a frame from a second sample `p2` a small
//!    step further along the curve: `T = p2 - p1`, `B = T × (p1 + p2)`,
//!    `N = B × T`, with `N` and `B` normalized per sample
//! 3. Place `tubular_segments` vertices on the circle of radius `tube`
//!    spanned by `N` and `B`
//! 4. Connect samples with indices wrapping in both directions, so the tube
//!    is closed and has no seam vertices

use crate::builder::MeshBuilder;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::validate::{check_finite, check_min_segments, check_non_negative};
use config::constants::{
    approx_zero, FULL_TURN, TORUS_DEFAULT_RADIAL_SEGMENTS, TORUS_DEFAULT_RADIUS,
    TORUS_DEFAULT_TUBE, TORUS_DEFAULT_TUBULAR_SEGMENTS, TORUS_KNOT_DEFAULT_HEIGHT_SCALE,
    TORUS_KNOT_DEFAULT_P, TORUS_KNOT_DEFAULT_Q, TORUS_KNOT_MIN_RADIAL_SEGMENTS,
    TORUS_KNOT_MIN_TUBULAR_SEGMENTS, TORUS_KNOT_TANGENT_STEP,
};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Parameters for [`create_torus_knot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorusKnotParams {
    /// Overall radius of the knot (> 0)
    pub radius: f64,
    /// Radius of the tube (>= 0)
    pub tube: f64,
    /// Samples along the curve (>= 3)
    pub radial_segments: u32,
    /// Segments around the tube (>= 3)
    pub tubular_segments: u32,
    /// Windings around the axis of rotational symmetry (>= 1)
    pub p: u32,
    /// Windings around the interior circle (>= 1)
    pub q: u32,
    /// Scale of the curve's Z excursion
    pub height_scale: f64,
}

impl Default for TorusKnotParams {
    fn default() -> Self {
        Self::trefoil(TORUS_DEFAULT_RADIUS, TORUS_DEFAULT_TUBE)
    }
}

impl TorusKnotParams {
    /// A `(2, 3)` knot with unit height scale.
    pub fn trefoil(radius: f64, tube: f64) -> Self {
        Self {
            radius,
            tube,
            radial_segments: TORUS_DEFAULT_RADIAL_SEGMENTS,
            tubular_segments: TORUS_DEFAULT_TUBULAR_SEGMENTS,
            p: TORUS_KNOT_DEFAULT_P,
            q: TORUS_KNOT_DEFAULT_Q,
            height_scale: TORUS_KNOT_DEFAULT_HEIGHT_SCALE,
        }
    }

    /// Replaces the segment counts.
    pub fn with_segments(mut self, radial_segments: u32, tubular_segments: u32) -> Self {
        self.radial_segments = radial_segments;
        self.tubular_segments = tubular_segments;
        self
    }

    /// Checks every parameter.
    ///
    /// A non-positive `radius` collapses the curve to a point where no frame
    /// exists, so it is reported as `DegenerateGeometry`.
    pub fn validate(&self) -> Result<(), MeshError> {
        check_finite("radius", self.radius)?;
        if self.radius <= 0.0 {
            return Err(MeshError::degenerate(format!(
                "torus knot radius must be positive, got {}",
                self.radius
            )));
        }
        check_non_negative("tube", self.tube)?;
        check_min_segments(
            "radial_segments",
            self.radial_segments,
            TORUS_KNOT_MIN_RADIAL_SEGMENTS,
        )?;
        check_min_segments(
            "tubular_segments",
            self.tubular_segments,
            TORUS_KNOT_MIN_TUBULAR_SEGMENTS,
        )?;
        check_min_segments("p", self.p, 1)?;
        check_min_segments("q", self.q, 1)?;
        check_finite("height_scale", self.height_scale)?;
        Ok(())
    }

    /// Point on the knot curve at parameter `u`.
    pub fn curve_point(&self, u: f64) -> DVec3 {
        let q_over_p = self.q as f64 / self.p as f64 * u;
        let (sin_qp, cos_qp) = q_over_p.sin_cos();
        let (sin_u, cos_u) = u.sin_cos();
        let half = self.radius * 0.5;

        DVec3::new(
            half * (2.0 + cos_qp) * cos_u,
            half * (2.0 + cos_qp) * sin_u,
            self.height_scale * half * sin_qp,
        )
    }
}

/// Local frame of the tube at one curve sample.
#[derive(Debug, Clone, Copy)]
struct Frame {
    origin: DVec3,
    normal: DVec3,
    bitangent: DVec3,
}

impl Frame {
    fn at(params: &TorusKnotParams, u: f64) -> Self {
        let p1 = params.curve_point(u);
        let p2 = params.curve_point(u + TORUS_KNOT_TANGENT_STEP);

        let tangent = p2 - p1;
        let bitangent = tangent.cross(p1 + p2);
        let normal = bitangent.cross(tangent);

        match (normal.try_normalize(), bitangent.try_normalize()) {
            (Some(normal), Some(bitangent)) => Self {
                origin: p1,
                normal,
                bitangent,
            },
            _ => {
                // Tangent parallel to the position: any perpendicular pair
                let (normal, bitangent) = tangent.normalize_or_zero().any_orthonormal_pair();
                Self {
                    origin: p1,
                    normal,
                    bitangent,
                }
            }
        }
    }
}

/// Creates a torus knot mesh.
///
/// # Arguments
///
/// * `params` - Knot shape, tube radius and resolution
///
/// # Returns
///
/// A closed tube with `radial_segments * tubular_segments` vertices and
/// twice as many triangles. Normals are analytic (from the curve to the
/// vertex) and unit length.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::{create_torus_knot, TorusKnotParams};
///
/// let params = TorusKnotParams::trefoil(2.0, 0.5).with_segments(64, 8);
/// let mesh = create_torus_knot(&params).unwrap();
/// assert_eq!(mesh.vertex_count(), 64 * 8);
/// assert_eq!(mesh.triangle_count(), 2 * 64 * 8);
/// ```
pub fn create_torus_knot(params: &TorusKnotParams) -> Result<Mesh, MeshError> {
    params.validate()?;

    if approx_zero(params.tube) {
        warn!("create_torus_knot: tube is 0, every triangle has zero area");
    }

    let radial = params.radial_segments;
    let tubular = params.tubular_segments;
    let vertex_count = (radial as usize).saturating_mul(tubular as usize);
    let mut builder = MeshBuilder::with_budget(vertex_count, vertex_count.saturating_mul(2))?;

    for i in 0..radial {
        let u = i as f64 / radial as f64 * params.p as f64 * FULL_TURN;
        let frame = Frame::at(params, u);

        for j in 0..tubular {
            let v = j as f64 / tubular as f64 * FULL_TURN;
            let (sin_v, cos_v) = v.sin_cos();

            // Negated so that the winding below faces outward
            let offset = -params.tube * cos_v * frame.normal + params.tube * sin_v * frame.bitangent;
            let position = frame.origin + offset;

            let direction = -cos_v * frame.normal + sin_v * frame.bitangent;
            let normal = offset.try_normalize().unwrap_or(direction);

            let uv = DVec2::new(i as f64 / radial as f64, j as f64 / tubular as f64);
            builder.push_vertex_with_normal(position, uv, normal);
        }
    }

    let index = |i: u32, j: u32| i * tubular + j;
    for i in 0..radial {
        let ip = (i + 1) % radial;
        for j in 0..tubular {
            let jp = (j + 1) % tubular;

            let a = index(i, j);
            let b = index(ip, j);
            let c = index(ip, jp);
            let d = index(i, jp);

            builder.push_triangle(a, b, d);
            builder.push_triangle(b, c, d);
        }
    }

    let mesh = builder.build();
    debug!(
        "create_torus_knot: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests;
