//! # Mesh Builder
//!
//! Owns the buffers of a single generator call and turns them into an
//! immutable [`Mesh`].
//!
//! ## Example
//!
//! ```rust
//! use primitive_mesh::MeshBuilder;
//! use glam::{DVec2, DVec3};
//!
//! let mut builder = MeshBuilder::with_budget(3, 1).unwrap();
//! let a = builder.push_vertex(DVec3::ZERO, DVec2::ZERO);
//! let b = builder.push_vertex(DVec3::X, DVec2::X);
//! let c = builder.push_vertex(DVec3::Y, DVec2::Y);
//! builder.push_triangle(a, b, c);
//! let mesh = builder.build();
//! assert_eq!(mesh.normals()[0], DVec3::Z);
//! ```

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::normals::accumulate_normals;
use config::constants::{MAX_TRIANGLES, MAX_VERTICES};
use glam::{DVec2, DVec3};

// =============================================================================
// MESH BUILDER
// =============================================================================

/// Accumulates vertices and triangles for one mesh.
///
/// Vertices pushed with [`push_vertex_with_normal`](Self::push_vertex_with_normal)
/// carry analytic normals. If every vertex has one, [`build`](Self::build)
/// keeps them; otherwise all normals are recomputed by face accumulation.
#[derive(Debug, Default)]
pub struct MeshBuilder {
    positions: Vec<DVec3>,
    uvs: Vec<DVec2>,
    normals: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
    /// Number of vertices pushed with an analytic normal.
    analytic_normals: usize,
}

impl MeshBuilder {
    /// Creates an empty builder without limit checks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder for a mesh of known size.
    ///
    /// Checks the counts against [`MAX_VERTICES`] and [`MAX_TRIANGLES`]
    /// before allocating anything.
    ///
    /// # Errors
    ///
    /// `TooManyVertices` / `TooManyTriangles` when a limit is exceeded.
    pub fn with_budget(vertex_count: usize, triangle_count: usize) -> Result<Self, MeshError> {
        if vertex_count > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count: vertex_count,
                max: MAX_VERTICES,
            });
        }
        if triangle_count > MAX_TRIANGLES {
            return Err(MeshError::TooManyTriangles {
                count: triangle_count,
                max: MAX_TRIANGLES,
            });
        }

        Ok(Self {
            positions: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            analytic_normals: 0,
        })
    }

    /// Returns the number of vertices pushed so far.
    ///
    /// This is the index the next pushed vertex will get, which is the
    /// `offset` of a grid about to be emitted.
    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.positions.len() as u32
    }

    /// Returns the number of triangles pushed so far.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Adds a vertex and returns its index.
    pub fn push_vertex(&mut self, position: DVec3, uv: DVec2) -> u32 {
        let index = self.vertex_count();
        self.positions.push(position);
        self.uvs.push(uv);
        self.normals.push(DVec3::ZERO);
        index
    }

    /// Adds a vertex with an analytic normal and returns its index.
    pub fn push_vertex_with_normal(&mut self, position: DVec3, uv: DVec2, normal: DVec3) -> u32 {
        let index = self.vertex_count();
        self.positions.push(position);
        self.uvs.push(uv);
        self.normals.push(normal);
        self.analytic_normals += 1;
        index
    }

    /// Adds a triangle by vertex indices (counter-clockwise from outside).
    ///
    /// Indices may refer to vertices pushed later; they are checked in
    /// [`build`](Self::build).
    #[inline]
    pub fn push_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Finishes the mesh.
    ///
    /// Every triangle index must be `< vertex_count()`. Debug builds
    /// assert it; release builds skip offending triangles while
    /// accumulating normals and leave them for `Mesh::validate` to report.
    pub fn build(self) -> Mesh {
        debug_assert!(
            self.triangles
                .iter()
                .flatten()
                .all(|&i| (i as usize) < self.positions.len()),
            "triangle index out of range for {} vertices",
            self.positions.len()
        );
        let normals = if self.analytic_normals == self.positions.len() {
            self.normals
        } else {
            accumulate_normals(&self.positions, &self.triangles)
        };
        Mesh::from_parts(self.positions, self.uvs, normals, self.triangles)
    }
}
