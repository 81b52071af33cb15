//! # Mesh Data Structure
//!
//! Immutable mesh value with positions, texture coordinates, normals and
//! triangles. Meshes are produced by [`MeshBuilder`](crate::builder::MeshBuilder)
//! and never modified afterwards; regenerating a shape yields a new value.

use config::constants::DEGENERATE_AREA_EPSILON;
use glam::{DVec2, DVec3};

/// A triangle mesh with per-vertex attributes.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the renderer boundary via the `*_f32` helpers.
///
/// Invariants (upheld by the builder):
/// - `uvs` and `normals` have exactly one entry per position
/// - every triangle index is `< vertex_count()`
///
/// # Example
///
/// ```rust
/// use primitive_mesh::MeshBuilder;
/// use glam::{DVec2, DVec3};
///
/// let mut builder = MeshBuilder::new();
/// let a = builder.push_vertex(DVec3::new(0.0, 0.0, 0.0), DVec2::ZERO);
/// let b = builder.push_vertex(DVec3::new(1.0, 0.0, 0.0), DVec2::X);
/// let c = builder.push_vertex(DVec3::new(0.0, 1.0, 0.0), DVec2::Y);
/// builder.push_triangle(a, b, c);
///
/// let mesh = builder.build();
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    positions: Vec<DVec3>,
    /// Texture coordinates, one per position
    uvs: Vec<DVec2>,
    /// Unit vertex normals, one per position (zero where undefined)
    normals: Vec<DVec3>,
    /// Triangle indices, counter-clockwise seen from outside
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Assembles a mesh from buffers that already satisfy the invariants.
    pub(crate) fn from_parts(
        positions: Vec<DVec3>,
        uvs: Vec<DVec2>,
        normals: Vec<DVec3>,
        triangles: Vec<[u32; 3]>,
    ) -> Self {
        debug_assert_eq!(positions.len(), uvs.len());
        debug_assert_eq!(positions.len(), normals.len());
        Self {
            positions,
            uvs,
            normals,
            triangles,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns the texture coordinates.
    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// Returns the vertex normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the position at the given index.
    #[inline]
    pub fn position(&self, index: u32) -> DVec3 {
        self.positions[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Returns the unnormalized face normal `(p1 - p0) × (p2 - p0)` of a
    /// triangle. Its length is twice the triangle's area.
    pub fn face_normal(&self, index: usize) -> DVec3 {
        let [i0, i1, i2] = self.triangles[index];
        let p0 = self.position(i0);
        let p1 = self.position(i1);
        let p2 = self.position(i2);
        (p1 - p0).cross(p2 - p0)
    }

    /// Returns the area of a triangle.
    pub fn triangle_area(&self, index: usize) -> f64 {
        0.5 * self.face_normal(index).length()
    }

    /// Counts triangles whose area is (numerically) zero.
    ///
    /// The threshold is `DEGENERATE_AREA_EPSILON` times the squared
    /// bounding-box diagonal, so the count does not change when a mesh is
    /// uniformly scaled. When every vertex coincides, every triangle counts.
    ///
    /// Degenerate triangles are legal output: cone tips, zero radius,
    /// and zero angular size all produce them.
    pub fn degenerate_triangle_count(&self) -> usize {
        let (min, max) = self.bounding_box();
        let threshold = DEGENERATE_AREA_EPSILON * (max - min).length_squared();
        (0..self.triangles.len())
            .filter(|&i| self.triangle_area(i) <= threshold)
            .count()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.positions.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.positions[0];
        let mut max = self.positions[0];

        for p in &self.positions[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }

        (min, max)
    }

    /// Validates the structural invariants of the mesh.
    ///
    /// Checks:
    /// - `uvs` and `normals` correspond one-to-one with positions
    /// - All triangle indices are in range
    ///
    /// Zero-area triangles are not an error here; see
    /// [`degenerate_triangle_count`](Self::degenerate_triangle_count).
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        if self.uvs.len() != self.positions.len() || self.normals.len() != self.positions.len() {
            return false;
        }

        let vertex_count = self.positions.len();
        self.triangles
            .iter()
            .all(|tri| tri.iter().all(|&i| (i as usize) < vertex_count))
    }

    /// Exports positions as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn positions_f32(&self) -> Vec<f32> {
        flatten3(&self.positions)
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten3(&self.normals)
    }

    /// Exports texture coordinates as f32 array for GPU.
    ///
    /// Returns flattened [u, v, u, v, ...] array.
    pub fn uvs_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.uvs.len() * 2);
        for uv in &self.uvs {
            result.push(uv.x as f32);
            result.push(uv.y as f32);
        }
        result
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

fn flatten3(values: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len() * 3);
    for v in values {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}
