//! # Box Primitive
//!
//! Generates an axis-aligned box centered on the origin. Each of the six
//! faces is its own subdivided grid with its own vertices, so edges are not
//! welded: every face keeps flat normals and an independent UV square.

use crate::builder::MeshBuilder;
use crate::error::MeshError;
use crate::grid::IndexedGrid;
use crate::mesh::Mesh;
use crate::validate::{check_min_segments, check_positive, lattice_triangles, lattice_vertices};
use config::constants::{
    BOX_DEFAULT_DEPTH, BOX_DEFAULT_HEIGHT, BOX_DEFAULT_SEGMENTS, BOX_DEFAULT_WIDTH,
    BOX_MIN_SEGMENTS,
};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parameters for [`create_box`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxParams {
    /// Extent along X
    pub width: f64,
    /// Extent along Y
    pub height: f64,
    /// Extent along Z
    pub depth: f64,
    /// Subdivisions along X (>= 1)
    pub width_segments: u32,
    /// Subdivisions along Y (>= 1)
    pub height_segments: u32,
    /// Subdivisions along Z (>= 1)
    pub depth_segments: u32,
}

impl Default for BoxParams {
    fn default() -> Self {
        Self {
            width: BOX_DEFAULT_WIDTH,
            height: BOX_DEFAULT_HEIGHT,
            depth: BOX_DEFAULT_DEPTH,
            width_segments: BOX_DEFAULT_SEGMENTS,
            height_segments: BOX_DEFAULT_SEGMENTS,
            depth_segments: BOX_DEFAULT_SEGMENTS,
        }
    }
}

impl BoxParams {
    /// Checks every parameter.
    pub fn validate(&self) -> Result<(), MeshError> {
        check_positive("width", self.width)?;
        check_positive("height", self.height)?;
        check_positive("depth", self.depth)?;
        check_min_segments("width_segments", self.width_segments, BOX_MIN_SEGMENTS)?;
        check_min_segments("height_segments", self.height_segments, BOX_MIN_SEGMENTS)?;
        check_min_segments("depth_segments", self.depth_segments, BOX_MIN_SEGMENTS)?;
        Ok(())
    }

    fn extents(&self) -> [f64; 3] {
        [self.width, self.height, self.depth]
    }

    fn segments(&self) -> [u32; 3] {
        [self.width_segments, self.height_segments, self.depth_segments]
    }
}

// =============================================================================
// FACE TABLE
// =============================================================================

/// One box face: the in-plane axes `u`/`v` (0 = X, 1 = Y, 2 = Z), the
/// normal axis `w`, and the direction of each.
#[derive(Debug, Clone, Copy)]
struct BoxFace {
    u: usize,
    v: usize,
    w: usize,
    sign_u: f64,
    sign_v: f64,
    sign_w: f64,
}

/// Faces in emission order: +X, -X, +Y, -Y, +Z, -Z.
const FACES: [BoxFace; 6] = [
    BoxFace { u: 2, v: 1, w: 0, sign_u: -1.0, sign_v: -1.0, sign_w: 1.0 },
    BoxFace { u: 2, v: 1, w: 0, sign_u: 1.0, sign_v: -1.0, sign_w: -1.0 },
    BoxFace { u: 0, v: 2, w: 1, sign_u: 1.0, sign_v: 1.0, sign_w: 1.0 },
    BoxFace { u: 0, v: 2, w: 1, sign_u: 1.0, sign_v: -1.0, sign_w: -1.0 },
    BoxFace { u: 0, v: 1, w: 2, sign_u: 1.0, sign_v: -1.0, sign_w: 1.0 },
    BoxFace { u: 0, v: 1, w: 2, sign_u: -1.0, sign_v: -1.0, sign_w: -1.0 },
];

/// Creates a box mesh.
///
/// # Arguments
///
/// * `params` - Box dimensions and subdivisions
///
/// # Returns
///
/// A mesh with `6` independent face grids.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::{create_box, BoxParams};
///
/// let params = BoxParams {
///     width_segments: 1,
///     height_segments: 1,
///     depth_segments: 1,
///     ..Default::default()
/// };
/// let mesh = create_box(&params).unwrap();
/// assert_eq!(mesh.vertex_count(), 24);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_box(params: &BoxParams) -> Result<Mesh, MeshError> {
    params.validate()?;

    let extents = params.extents();
    let segments = params.segments();

    let (vertex_count, triangle_count) = FACES.iter().fold((0usize, 0usize), |(v, t), face| {
        (
            v.saturating_add(lattice_vertices(segments[face.u], segments[face.v])),
            t.saturating_add(lattice_triangles(segments[face.u], segments[face.v])),
        )
    });
    let mut builder = MeshBuilder::with_budget(vertex_count, triangle_count)?;

    for face in &FACES {
        build_face(&mut builder, face, extents, segments)?;
    }

    let mesh = builder.build();
    debug!(
        "create_box: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Appends one face grid to the builder.
fn build_face(
    builder: &mut MeshBuilder,
    face: &BoxFace,
    extents: [f64; 3],
    segments: [u32; 3],
) -> Result<(), MeshError> {
    let width = extents[face.u];
    let height = extents[face.v];
    let depth = face.sign_w * extents[face.w] / 2.0;
    let grid_x = segments[face.u];
    let grid_y = segments[face.v];

    let segment_width = width / grid_x as f64;
    let segment_height = height / grid_y as f64;
    let grid = IndexedGrid::new(builder.vertex_count(), grid_x, grid_y)?;

    for iy in 0..=grid_y {
        for ix in 0..=grid_x {
            let mut position = DVec3::ZERO;
            position[face.u] = (ix as f64 * segment_width - width / 2.0) * face.sign_u;
            position[face.v] = (iy as f64 * segment_height - height / 2.0) * face.sign_v;
            position[face.w] = depth;

            let uv = DVec2::new(
                1.0 - ix as f64 / grid_x as f64,
                1.0 - iy as f64 / grid_y as f64,
            );
            builder.push_vertex(position, uv);
        }
    }

    grid.triangulate(builder);
    Ok(())
}
