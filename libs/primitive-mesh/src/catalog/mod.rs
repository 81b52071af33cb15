//! # Shape Catalog
//!
//! The closed set of shape kinds, their parameter schemas and the single
//! dispatch point from a parameter record to its generator.
//!
//! ## Example
//!
//! ```rust
//! use primitive_mesh::catalog::{generate, ShapeKind, ParameterValue};
//!
//! let mut params = ShapeKind::Sphere.default_parameters();
//! params.set("radius", ParameterValue::Float(1.0)).unwrap();
//! let mesh = generate(&params).unwrap();
//! assert_eq!(mesh.vertex_count(), 21 * 21);
//! ```

mod access;
mod schema;


use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::primitives::{
    create_box, create_circle, create_cylinder, create_lathe, create_plane, create_ring,
    create_sphere, create_torus, create_torus_knot, BoxParams, CircleParams, CylinderParams,
    LatheParams, PlaneParams, RingParams, SphereParams, TorusKnotParams, TorusParams,
};
use access::ParameterAccess;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

pub use access::ParameterValue;
pub use schema::{ParameterRange, ParameterSpec};

// =============================================================================
// SHAPE KIND
// =============================================================================

/// Every shape the generator knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Box,
    Cylinder,
    Lathe,
    Sphere,
    Torus,
    TorusKnot,
    Circle,
    Plane,
    Ring,
}

impl ShapeKind {
    /// All kinds, in catalog order.
    pub const ALL: [ShapeKind; 9] = [
        ShapeKind::Box,
        ShapeKind::Cylinder,
        ShapeKind::Lathe,
        ShapeKind::Sphere,
        ShapeKind::Torus,
        ShapeKind::TorusKnot,
        ShapeKind::Circle,
        ShapeKind::Plane,
        ShapeKind::Ring,
    ];

    /// Snake case name, also used by `Display`, `FromStr` and serde.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Box => "box",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Lathe => "lathe",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Torus => "torus",
            ShapeKind::TorusKnot => "torus_knot",
            ShapeKind::Circle => "circle",
            ShapeKind::Plane => "plane",
            ShapeKind::Ring => "ring",
        }
    }

    /// True for the flat shapes (circle, plane, ring).
    pub fn is_planar(&self) -> bool {
        matches!(self, ShapeKind::Circle | ShapeKind::Plane | ShapeKind::Ring)
    }

    /// Ordered parameter list with editing ranges.
    pub fn parameter_schema(&self) -> &'static [ParameterSpec] {
        match self {
            ShapeKind::Box => schema::BOX,
            ShapeKind::Cylinder => schema::CYLINDER,
            ShapeKind::Lathe => schema::LATHE,
            ShapeKind::Sphere => schema::SPHERE,
            ShapeKind::Torus => schema::TORUS,
            ShapeKind::TorusKnot => schema::TORUS_KNOT,
            ShapeKind::Circle => schema::CIRCLE,
            ShapeKind::Plane => schema::PLANE,
            ShapeKind::Ring => schema::RING,
        }
    }

    /// The parameters a freshly selected shape of this kind starts with.
    pub fn default_parameters(&self) -> ShapeParameters {
        match self {
            ShapeKind::Box => ShapeParameters::Box(BoxParams::default()),
            ShapeKind::Cylinder => ShapeParameters::Cylinder(CylinderParams::default()),
            ShapeKind::Lathe => ShapeParameters::Lathe(LatheParams::default()),
            ShapeKind::Sphere => ShapeParameters::Sphere(SphereParams::default()),
            ShapeKind::Torus => ShapeParameters::Torus(TorusParams::default()),
            ShapeKind::TorusKnot => ShapeParameters::TorusKnot(TorusKnotParams::default()),
            ShapeKind::Circle => ShapeParameters::Circle(CircleParams::default()),
            ShapeKind::Plane => ShapeParameters::Plane(PlaneParams::default()),
            ShapeKind::Ring => ShapeParameters::Ring(RingParams::default()),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| MeshError::invalid_parameter("kind", format!("unknown shape '{}'", s)))
    }
}

// =============================================================================
// SHAPE PARAMETERS
// =============================================================================

/// A shape kind together with its parameter record.
///
/// Serializes internally tagged, e.g. `{"kind": "sphere", "radius": 1.0}`.
/// Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeParameters {
    Box(BoxParams),
    Cylinder(CylinderParams),
    Lathe(LatheParams),
    Sphere(SphereParams),
    Torus(TorusParams),
    TorusKnot(TorusKnotParams),
    Circle(CircleParams),
    Plane(PlaneParams),
    Ring(RingParams),
}

impl ShapeParameters {
    /// The kind of shape these parameters describe.
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeParameters::Box(_) => ShapeKind::Box,
            ShapeParameters::Cylinder(_) => ShapeKind::Cylinder,
            ShapeParameters::Lathe(_) => ShapeKind::Lathe,
            ShapeParameters::Sphere(_) => ShapeKind::Sphere,
            ShapeParameters::Torus(_) => ShapeKind::Torus,
            ShapeParameters::TorusKnot(_) => ShapeKind::TorusKnot,
            ShapeParameters::Circle(_) => ShapeKind::Circle,
            ShapeParameters::Plane(_) => ShapeKind::Plane,
            ShapeParameters::Ring(_) => ShapeKind::Ring,
        }
    }

    /// Builds the mesh. Same as [`generate`].
    pub fn generate(&self) -> Result<Mesh, MeshError> {
        generate(self)
    }

    /// Reads a scalar parameter by schema name.
    ///
    /// Returns `None` for unknown names and for the lathe profile.
    pub fn get(&self, name: &str) -> Option<ParameterValue> {
        self.access().get(name)
    }

    /// Writes a scalar parameter by schema name.
    ///
    /// Integer values are accepted for float fields. Any other type
    /// mismatch, an unknown name, or a count outside `u32` is an
    /// `InvalidParameter` error and leaves the record unchanged. Values are
    /// not range checked here; the generator validates on `generate`.
    pub fn set(&mut self, name: &str, value: ParameterValue) -> Result<(), MeshError> {
        self.access_mut().set(name, value)
    }

    fn access(&self) -> &dyn ParameterAccess {
        match self {
            ShapeParameters::Box(p) => p,
            ShapeParameters::Cylinder(p) => p,
            ShapeParameters::Lathe(p) => p,
            ShapeParameters::Sphere(p) => p,
            ShapeParameters::Torus(p) => p,
            ShapeParameters::TorusKnot(p) => p,
            ShapeParameters::Circle(p) => p,
            ShapeParameters::Plane(p) => p,
            ShapeParameters::Ring(p) => p,
        }
    }

    fn access_mut(&mut self) -> &mut dyn ParameterAccess {
        match self {
            ShapeParameters::Box(p) => p,
            ShapeParameters::Cylinder(p) => p,
            ShapeParameters::Lathe(p) => p,
            ShapeParameters::Sphere(p) => p,
            ShapeParameters::Torus(p) => p,
            ShapeParameters::TorusKnot(p) => p,
            ShapeParameters::Circle(p) => p,
            ShapeParameters::Plane(p) => p,
            ShapeParameters::Ring(p) => p,
        }
    }
}

impl From<BoxParams> for ShapeParameters {
    fn from(params: BoxParams) -> Self {
        ShapeParameters::Box(params)
    }
}

impl From<CylinderParams> for ShapeParameters {
    fn from(params: CylinderParams) -> Self {
        ShapeParameters::Cylinder(params)
    }
}

impl From<LatheParams> for ShapeParameters {
    fn from(params: LatheParams) -> Self {
        ShapeParameters::Lathe(params)
    }
}

impl From<SphereParams> for ShapeParameters {
    fn from(params: SphereParams) -> Self {
        ShapeParameters::Sphere(params)
    }
}

impl From<TorusParams> for ShapeParameters {
    fn from(params: TorusParams) -> Self {
        ShapeParameters::Torus(params)
    }
}

impl From<TorusKnotParams> for ShapeParameters {
    fn from(params: TorusKnotParams) -> Self {
        ShapeParameters::TorusKnot(params)
    }
}

impl From<CircleParams> for ShapeParameters {
    fn from(params: CircleParams) -> Self {
        ShapeParameters::Circle(params)
    }
}

impl From<PlaneParams> for ShapeParameters {
    fn from(params: PlaneParams) -> Self {
        ShapeParameters::Plane(params)
    }
}

impl From<RingParams> for ShapeParameters {
    fn from(params: RingParams) -> Self {
        ShapeParameters::Ring(params)
    }
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Builds the mesh described by `params`.
///
/// # Returns
///
/// A fresh mesh, or the generator's validation error.
pub fn generate(params: &ShapeParameters) -> Result<Mesh, MeshError> {
    match params {
        ShapeParameters::Box(p) => create_box(p),
        ShapeParameters::Cylinder(p) => create_cylinder(p),
        ShapeParameters::Lathe(p) => create_lathe(p),
        ShapeParameters::Sphere(p) => create_sphere(p),
        ShapeParameters::Torus(p) => create_torus(p),
        ShapeParameters::TorusKnot(p) => create_torus_knot(p),
        ShapeParameters::Circle(p) => create_circle(p),
        ShapeParameters::Plane(p) => create_plane(p),
        ShapeParameters::Ring(p) => create_ring(p),
    }
}

/// Builds many meshes in parallel.
///
/// Each entry succeeds or fails on its own; result `i` belongs to
/// `params[i]`.
pub fn generate_batch(params: &[ShapeParameters]) -> Vec<Result<Mesh, MeshError>> {
    debug!("generate_batch: {} shapes", params.len());
    params.par_iter().map(generate).collect()
}
