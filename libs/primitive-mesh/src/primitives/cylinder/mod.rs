//! # Cylinder Primitive
//!
//! Generates cylinders, truncated cones and cones along the Y axis,
//! centered on the origin.
//!
//! ## Layout
//!
//! - `height_segments + 1` rings of `radial_segments + 1` vertices, top
//!   (`y = height / 2`) to bottom; the angular seam is duplicated
//! - A ring of radius 0 still has `radial_segments + 1` vertices, all at
//!   the apex, so the side-wall UVs stay continuous
//! - Optional cap fans around an apex vertex, only for a closed cylinder
//!   and only on ends with a positive radius

use crate::builder::MeshBuilder;
use crate::error::MeshError;
use crate::grid::IndexedGrid;
use crate::mesh::Mesh;
use crate::validate::{check_min_segments, check_non_negative, lattice_triangles, lattice_vertices};
use config::constants::{
    approx_zero, CYLINDER_DEFAULT_BOTTOM_RADIUS, CYLINDER_DEFAULT_HEIGHT,
    CYLINDER_DEFAULT_HEIGHT_SEGMENTS, CYLINDER_DEFAULT_RADIAL_SEGMENTS,
    CYLINDER_DEFAULT_TOP_RADIUS, CYLINDER_MIN_HEIGHT_SEGMENTS, CYLINDER_MIN_RADIAL_SEGMENTS,
    FULL_TURN,
};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Parameters for [`create_cylinder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CylinderParams {
    /// Radius at `y = height / 2` (>= 0)
    pub top_radius: f64,
    /// Radius at `y = -height / 2` (>= 0)
    pub bottom_radius: f64,
    /// Extent along Y (>= 0)
    pub height: f64,
    /// Segments around the axis (>= 2)
    pub radial_segments: u32,
    /// Segments along the axis (>= 1)
    pub height_segments: u32,
    /// Omit both end caps
    pub open_ended: bool,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self {
            top_radius: CYLINDER_DEFAULT_TOP_RADIUS,
            bottom_radius: CYLINDER_DEFAULT_BOTTOM_RADIUS,
            height: CYLINDER_DEFAULT_HEIGHT,
            radial_segments: CYLINDER_DEFAULT_RADIAL_SEGMENTS,
            height_segments: CYLINDER_DEFAULT_HEIGHT_SEGMENTS,
            open_ended: false,
        }
    }
}

impl CylinderParams {
    /// Checks every parameter.
    pub fn validate(&self) -> Result<(), MeshError> {
        check_non_negative("top_radius", self.top_radius)?;
        check_non_negative("bottom_radius", self.bottom_radius)?;
        check_non_negative("height", self.height)?;
        check_min_segments(
            "radial_segments",
            self.radial_segments,
            CYLINDER_MIN_RADIAL_SEGMENTS,
        )?;
        check_min_segments(
            "height_segments",
            self.height_segments,
            CYLINDER_MIN_HEIGHT_SEGMENTS,
        )?;
        Ok(())
    }

    /// True when the top cap fan is emitted.
    pub fn has_top_cap(&self) -> bool {
        !self.open_ended && self.top_radius > 0.0
    }

    /// True when the bottom cap fan is emitted.
    pub fn has_bottom_cap(&self) -> bool {
        !self.open_ended && self.bottom_radius > 0.0
    }
}

/// Creates a cylinder (or cone) mesh.
///
/// # Arguments
///
/// * `params` - Radii, height, subdivisions and whether to cap the ends
///
/// # Returns
///
/// A mesh whose side wall has `2 * radial_segments * height_segments`
/// triangles plus `radial_segments` per emitted cap.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::{create_cylinder, CylinderParams};
///
/// let cone = CylinderParams {
///     top_radius: 0.0,
///     bottom_radius: 1.0,
///     radial_segments: 8,
///     height_segments: 1,
///     ..Default::default()
/// };
/// let mesh = create_cylinder(&cone).unwrap();
/// assert_eq!(mesh.triangle_count(), 2 * 8 + 8);
/// ```
pub fn create_cylinder(params: &CylinderParams) -> Result<Mesh, MeshError> {
    params.validate()?;

    if approx_zero(params.top_radius) && approx_zero(params.bottom_radius) {
        warn!("create_cylinder: both radii are 0, the mesh has no volume");
    }
    if approx_zero(params.height) {
        warn!("create_cylinder: height is 0, the side wall is flat");
    }

    let radial = params.radial_segments;
    let rows = params.height_segments;
    let caps = params.has_top_cap() as usize + params.has_bottom_cap() as usize;

    let vertex_count = lattice_vertices(radial, rows).saturating_add(caps);
    let triangle_count =
        lattice_triangles(radial, rows).saturating_add(caps.saturating_mul(radial as usize));
    let mut builder = MeshBuilder::with_budget(vertex_count, triangle_count)?;

    let half_height = params.height / 2.0;
    let wall = IndexedGrid::new(builder.vertex_count(), radial, rows)?;

    for y in 0..=rows {
        let v = y as f64 / rows as f64;
        let radius = v * (params.bottom_radius - params.top_radius) + params.top_radius;
        let height = -v * params.height + half_height;

        for x in 0..=radial {
            let u = x as f64 / radial as f64;
            let angle = u * FULL_TURN;
            let position = DVec3::new(radius * angle.sin(), height, radius * angle.cos());
            builder.push_vertex(position, DVec2::new(1.0 - u, 1.0 - v));
        }
    }

    wall.triangulate(&mut builder);

    if params.has_top_cap() {
        let apex = builder.push_vertex(DVec3::new(0.0, half_height, 0.0), DVec2::new(0.5, 0.0));
        for x in 0..radial {
            builder.push_triangle(wall.index(x, 0), wall.index(x + 1, 0), apex);
        }
    }

    if params.has_bottom_cap() {
        let apex = builder.push_vertex(DVec3::new(0.0, -half_height, 0.0), DVec2::new(0.5, 1.0));
        for x in 0..radial {
            builder.push_triangle(wall.index(x + 1, rows), wall.index(x, rows), apex);
        }
    }

    let mesh = builder.build();
    debug!(
        "create_cylinder: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}
