//! # Indexed Grid Triangulation
//!
//! Turns a rectangular lattice of vertices into triangles. The lattice has
//! `(columns + 1) × (rows + 1)` vertices laid out row by row starting at
//! `offset` in the builder's vertex list.
//!
//! ## Cell Layout
//!
//! ```text
//!   row + 1   b ---- c
//!             |    / |
//!             |  /   |
//!   row       a ---- d
//!          column  column + 1
//! ```
//!
//! [`IndexedGrid::triangulate`] splits every cell into `(a, b, d)` and
//! `(b, c, d)`. Shapes that need another diagonal or pole fans consume
//! [`IndexedGrid::quads`] directly.

use crate::builder::MeshBuilder;
use crate::error::MeshError;

/// The four corner indices of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridQuad {
    /// Column of the cell (0-based).
    pub column: u32,
    /// Row of the cell (0-based).
    pub row: u32,
    /// Vertex at `(column, row)`.
    pub a: u32,
    /// Vertex at `(column, row + 1)`.
    pub b: u32,
    /// Vertex at `(column + 1, row + 1)`.
    pub c: u32,
    /// Vertex at `(column + 1, row)`.
    pub d: u32,
}

/// A `columns × rows` cell grid over vertices already pushed to a builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedGrid {
    offset: u32,
    columns: u32,
    rows: u32,
}

impl IndexedGrid {
    /// Creates a grid whose first vertex has index `offset`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when `columns` or `rows` is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use primitive_mesh::grid::IndexedGrid;
    ///
    /// let grid = IndexedGrid::new(0, 2, 1).unwrap();
    /// assert_eq!(grid.index(1, 1), 4);
    /// assert_eq!(grid.quads().count(), 2);
    /// ```
    pub fn new(offset: u32, columns: u32, rows: u32) -> Result<Self, MeshError> {
        if columns == 0 {
            return Err(MeshError::invalid_parameter("columns", "grid needs at least 1 column"));
        }
        if rows == 0 {
            return Err(MeshError::invalid_parameter("rows", "grid needs at least 1 row"));
        }
        Ok(Self {
            offset,
            columns,
            rows,
        })
    }

    /// Vertices per lattice row.
    #[inline]
    pub fn stride(&self) -> u32 {
        self.columns + 1
    }

    /// Number of triangles [`triangulate`](Self::triangulate) emits.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        2 * self.columns as usize * self.rows as usize
    }

    /// Vertex index of lattice point `(column, row)`.
    #[inline]
    pub fn index(&self, column: u32, row: u32) -> u32 {
        self.offset + row * self.stride() + column
    }

    /// Iterates over all cells in row-major order.
    pub fn quads(&self) -> impl Iterator<Item = GridQuad> {
        let grid = *self;
        (0..grid.rows).flat_map(move |row| {
            (0..grid.columns).map(move |column| GridQuad {
                column,
                row,
                a: grid.index(column, row),
                b: grid.index(column, row + 1),
                c: grid.index(column + 1, row + 1),
                d: grid.index(column + 1, row),
            })
        })
    }

    /// Emits two triangles per cell: `(a, b, d)` and `(b, c, d)`.
    pub fn triangulate(&self, builder: &mut MeshBuilder) {
        for quad in self.quads() {
            builder.push_triangle(quad.a, quad.b, quad.d);
            builder.push_triangle(quad.b, quad.c, quad.d);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{DVec2, DVec3};

    #[test]
    fn test_grid_rejects_empty() {
        assert!(IndexedGrid::new(0, 0, 1).is_err());
        assert!(IndexedGrid::new(0, 1, 0).is_err());
    }

    #[test]
    fn test_grid_index_with_offset() {
        let grid = IndexedGrid::new(10, 3, 2).unwrap();
        assert_eq!(grid.stride(), 4);
        assert_eq!(grid.index(0, 0), 10);
        assert_eq!(grid.index(3, 0), 13);
        assert_eq!(grid.index(0, 1), 14);
        assert_eq!(grid.index(3, 2), 21);
    }

    #[test]
    fn test_grid_quads_row_major() {
        let grid = IndexedGrid::new(0, 2, 2).unwrap();
        let quads: Vec<_> = grid.quads().collect();
        assert_eq!(quads.len(), 4);
        assert_eq!(
            quads[0],
            GridQuad {
                column: 0,
                row: 0,
                a: 0,
                b: 3,
                c: 4,
                d: 1
            }
        );
        assert_eq!((quads[1].column, quads[1].row), (1, 0));
        assert_eq!((quads[2].column, quads[2].row), (0, 1));
    }

    #[test]
    fn test_grid_triangulate_single_cell() {
        let mut builder = MeshBuilder::new();
        for _ in 0..4 {
            builder.push_vertex(DVec3::ZERO, DVec2::ZERO);
        }
        let grid = IndexedGrid::new(0, 1, 1).unwrap();
        grid.triangulate(&mut builder);
        let mesh = builder.build();
        assert_eq!(mesh.triangles(), &[[0, 2, 1], [2, 3, 1]]);
    }

    #[test]
    fn test_grid_triangle_count_and_bounds() {
        let grid = IndexedGrid::new(5, 4, 3).unwrap();
        let mut builder = MeshBuilder::new();
        for _ in 0..(5 + 5 * 4) {
            builder.push_vertex(DVec3::ZERO, DVec2::ZERO);
        }
        grid.triangulate(&mut builder);
        assert_eq!(builder.triangle_count(), grid.triangle_count());
        let mesh = builder.build();
        assert!(mesh.validate());
        assert!(mesh.indices_u32().iter().all(|&i| i >= 5));
    }
}
