//! # Torus Primitive
//!
//! A tube of radius `tube` swept around a major circle of radius `radius`
//! in the XY plane, through `arc` radians. Normals are analytic: each points
//! from the tube's center line to the vertex.

use crate::builder::MeshBuilder;
use crate::error::MeshError;
use crate::grid::IndexedGrid;
use crate::mesh::Mesh;
use crate::validate::{
    check_finite, check_min_segments, check_non_negative, lattice_triangles, lattice_vertices,
};
use config::constants::{
    approx_zero, is_full_turn, FULL_TURN, TORUS_DEFAULT_RADIAL_SEGMENTS, TORUS_DEFAULT_RADIUS,
    TORUS_DEFAULT_TUBE, TORUS_DEFAULT_TUBULAR_SEGMENTS, TORUS_MIN_RADIAL_SEGMENTS,
    TORUS_MIN_TUBULAR_SEGMENTS,
};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Parameters for [`create_torus`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorusParams {
    /// Radius of the major circle (>= 0)
    pub radius: f64,
    /// Radius of the tube (>= 0)
    pub tube: f64,
    /// Segments around the tube cross-section (>= 3)
    pub radial_segments: u32,
    /// Segments along the major circle (>= 3)
    pub tubular_segments: u32,
    /// Sweep of the major circle (radians, `2π` = closed torus)
    pub arc: f64,
}

impl Default for TorusParams {
    fn default() -> Self {
        Self {
            radius: TORUS_DEFAULT_RADIUS,
            tube: TORUS_DEFAULT_TUBE,
            radial_segments: TORUS_DEFAULT_RADIAL_SEGMENTS,
            tubular_segments: TORUS_DEFAULT_TUBULAR_SEGMENTS,
            arc: FULL_TURN,
        }
    }
}

impl TorusParams {
    /// Checks every parameter.
    pub fn validate(&self) -> Result<(), MeshError> {
        check_non_negative("radius", self.radius)?;
        check_non_negative("tube", self.tube)?;
        check_min_segments("radial_segments", self.radial_segments, TORUS_MIN_RADIAL_SEGMENTS)?;
        check_min_segments(
            "tubular_segments",
            self.tubular_segments,
            TORUS_MIN_TUBULAR_SEGMENTS,
        )?;
        check_finite("arc", self.arc)?;
        Ok(())
    }

    /// Returns true when the major circle spans a full turn, so its seam vertices
    /// coincide.
    pub fn is_closed(&self) -> bool {
        is_full_turn(self.arc)
    }
}

/// Creates a torus mesh.
///
/// Lattice row `j` (of `radial_segments + 1`) is one position around the
/// tube, column `i` (of `tubular_segments + 1`) one position along the
/// major circle. Both seams are duplicated; an open arc is left uncapped.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::{create_torus, TorusParams};
///
/// let params = TorusParams { radial_segments: 8, tubular_segments: 12, ..Default::default() };
/// let mesh = create_torus(&params).unwrap();
/// assert_eq!(mesh.vertex_count(), 9 * 13);
/// assert_eq!(mesh.triangle_count(), 2 * 8 * 12);
/// ```
pub fn create_torus(params: &TorusParams) -> Result<Mesh, MeshError> {
    params.validate()?;

    if approx_zero(params.tube) {
        warn!("create_torus: tube is 0, every triangle has zero area");
    }
    if approx_zero(params.arc) {
        warn!("create_torus: arc is 0, every triangle has zero area");
    } else if !params.is_closed() {
        debug!("create_torus: partial turn of {} rad", params.arc);
    }

    let columns = params.tubular_segments;
    let rows = params.radial_segments;
    let mut builder = MeshBuilder::with_budget(
        lattice_vertices(columns, rows),
        lattice_triangles(columns, rows),
    )?;
    let grid = IndexedGrid::new(builder.vertex_count(), columns, rows)?;

    for j in 0..=rows {
        let v = j as f64 / rows as f64 * FULL_TURN;
        let (sin_v, cos_v) = v.sin_cos();

        for i in 0..=columns {
            let u = i as f64 / columns as f64 * params.arc;
            let (sin_u, cos_u) = u.sin_cos();

            let center = DVec3::new(params.radius * cos_u, params.radius * sin_u, 0.0);
            let ring = params.radius + params.tube * cos_v;
            let position = DVec3::new(ring * cos_u, ring * sin_u, params.tube * sin_v);

            // Direction the tube's cross-section points at this vertex
            let outward = DVec3::new(cos_v * cos_u, cos_v * sin_u, sin_v);
            let normal = (position - center).try_normalize().unwrap_or(outward);

            let uv = DVec2::new(i as f64 / columns as f64, j as f64 / rows as f64);
            builder.push_vertex_with_normal(position, uv, normal);
        }
    }

    for quad in grid.quads() {
        builder.push_triangle(quad.b, quad.a, quad.c);
        builder.push_triangle(quad.a, quad.d, quad.c);
    }

    let mesh = builder.build();
    debug!(
        "create_torus: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}
