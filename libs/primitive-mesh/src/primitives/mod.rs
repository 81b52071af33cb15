//! # Primitives
//!
//! One generator per shape. Each takes its own parameter record, validates
//! it, and returns a fresh [`Mesh`](crate::Mesh).
//!
//! | Shape | Generator | Normals |
//! |-------|-----------|---------|
//! | Box | [`create_box`] | accumulated, flat per face |
//! | Plane | [`create_plane`] | accumulated |
//! | Circle | [`create_circle`] | accumulated |
//! | Ring | [`create_ring`] | accumulated |
//! | Cylinder / cone | [`create_cylinder`] | accumulated |
//! | Sphere | [`create_sphere`] | accumulated |
//! | Torus | [`create_torus`] | analytic |
//! | Torus knot | [`create_torus_knot`] | analytic |
//! | Lathe | [`create_lathe`] | accumulated |

pub mod box_mesh;
pub mod circle;
pub mod cylinder;
pub mod lathe;
pub mod plane;
pub mod ring;
pub mod sphere;
pub mod torus;
pub mod torus_knot;

pub use box_mesh::{create_box, BoxParams};
pub use circle::{create_circle, CircleParams};
pub use cylinder::{create_cylinder, CylinderParams};
pub use lathe::{create_lathe, default_profile, LatheParams};
pub use plane::{create_plane, PlaneParams};
pub use ring::{create_ring, RingParams};
pub use sphere::{create_sphere, SphereParams};
pub use torus::{create_torus, TorusParams};
pub use torus_knot::{create_torus_knot, TorusKnotParams};
