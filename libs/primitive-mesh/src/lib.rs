//! # Primitive Mesh
//!
//! Procedural parametric mesh generation.
//! Turns a shape kind and its parameters into an indexed triangle mesh with
//! positions, UVs and normals.
//!
//! ## Architecture
//!
//! ```text
//! ShapeParameters → catalog::generate → primitives::create_* → MeshBuilder → Mesh
//!                                                  ↑
//!                                       IndexedGrid (shared lattice)
//! ```
//!
//! ## Shapes
//!
//! Box, plane, circle, ring, cylinder / cone, sphere, torus, torus knot and
//! lathe. Every generator is a pure function of its parameters; regenerating
//! with new parameters produces a new, independent mesh.
//!
//! ## Usage
//!
//! ```rust
//! use primitive_mesh::{generate, ShapeKind};
//!
//! let params = ShapeKind::Torus.default_parameters();
//! let mesh = generate(&params).unwrap();
//! assert!(mesh.validate());
//!
//! let positions: Vec<f32> = mesh.positions_f32();
//! let indices: Vec<u32> = mesh.indices_u32();
//! assert_eq!(positions.len(), mesh.vertex_count() * 3);
//! assert_eq!(indices.len(), mesh.triangle_count() * 3);
//! ```

pub mod barycentric;
pub mod builder;
pub mod catalog;
pub mod error;
pub mod grid;
pub mod mesh;
pub mod normals;
pub mod primitives;

mod validate;

pub use builder::MeshBuilder;
pub use catalog::{
    generate, generate_batch, ParameterRange, ParameterSpec, ParameterValue, ShapeKind,
    ShapeParameters,
};
pub use error::MeshError;
pub use mesh::Mesh;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_generate_box() {
        let mesh = generate(&ShapeKind::Box.default_parameters()).unwrap();
        // 6 faces of 11 x 11 vertices
        assert_eq!(mesh.vertex_count(), 6 * 11 * 11);
        assert_eq!(mesh.triangle_count(), 6 * 10 * 10 * 2);
    }

    #[test]
    fn test_generate_rejects_bad_parameters() {
        let mut params = ShapeKind::Plane.default_parameters();
        params.set("width", ParameterValue::Float(-1.0)).unwrap();
        assert!(matches!(
            generate(&params),
            Err(MeshError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_regeneration_is_independent() {
        let mut params = ShapeKind::Sphere.default_parameters();
        let first = generate(&params).unwrap();
        params.set("width_segments", ParameterValue::Integer(8)).unwrap();
        let second = generate(&params).unwrap();

        assert_ne!(first.vertex_count(), second.vertex_count());
        // The earlier mesh is untouched
        assert_eq!(first, generate(&ShapeKind::Sphere.default_parameters()).unwrap());
    }

    /// Performance check for generating every default shape at once.
    #[test]
    fn test_performance_default_catalog() {
        let batch: Vec<_> = ShapeKind::ALL
            .into_iter()
            .map(|kind| kind.default_parameters())
            .collect();

        // Warm-up run
        let _ = generate_batch(&batch);

        let start = Instant::now();
        let results = generate_batch(&batch);
        let elapsed = start.elapsed();

        let vertices: usize = results
            .iter()
            .map(|r| r.as_ref().map_or(0, |m| m.vertex_count()))
            .sum();
        println!("Default catalog generation time: {:?}", elapsed);
        println!("Total vertices: {}", vertices);

        assert!(results.iter().all(|r| r.is_ok()));
        assert!(elapsed.as_millis() < 2000, "Generation took too long: {:?}", elapsed);
    }
}
