//! # Circle Primitive
//!
//! A flat disc (or disc sector) in the XY plane, triangulated as a fan
//! around a centroid at the origin. Faces +Z.

use crate::builder::MeshBuilder;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::validate::{check_finite, check_min_segments, check_non_negative};
use config::constants::{
    approx_zero, is_full_turn, CIRCLE_DEFAULT_RADIUS, CIRCLE_DEFAULT_SEGMENTS, CIRCLE_MIN_SEGMENTS,
    DEFAULT_START_ANGLE, FULL_TURN,
};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Parameters for [`create_circle`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleParams {
    /// Radius (>= 0)
    pub radius: f64,
    /// Rim segments (>= 3)
    pub segments: u32,
    /// Angle of the first rim vertex (radians)
    pub start_angle: f64,
    /// Angle swept by the fan (radians, `2π` = full circle)
    pub angular_size: f64,
}

impl Default for CircleParams {
    fn default() -> Self {
        Self {
            radius: CIRCLE_DEFAULT_RADIUS,
            segments: CIRCLE_DEFAULT_SEGMENTS,
            start_angle: DEFAULT_START_ANGLE,
            angular_size: FULL_TURN,
        }
    }
}

impl CircleParams {
    /// Checks every parameter.
    pub fn validate(&self) -> Result<(), MeshError> {
        check_non_negative("radius", self.radius)?;
        check_min_segments("segments", self.segments, CIRCLE_MIN_SEGMENTS)?;
        check_finite("start_angle", self.start_angle)?;
        check_finite("angular_size", self.angular_size)?;
        Ok(())
    }

    /// Returns true when the fan spans a full turn, so its seam vertices
    /// coincide.
    pub fn is_closed(&self) -> bool {
        is_full_turn(self.angular_size)
    }
}

/// Creates a circle mesh.
///
/// Emits the centroid followed by `segments + 1` rim vertices at
/// `start_angle + i * angular_size / segments`. For a full turn the first
/// and last rim vertex coincide in position but stay separate vertices.
///
/// A zero radius or zero angular size produces zero-area triangles rather
/// than an error.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::{create_circle, CircleParams};
///
/// let params = CircleParams { segments: 8, ..Default::default() };
/// let mesh = create_circle(&params).unwrap();
/// assert_eq!(mesh.vertex_count(), 10);
/// assert_eq!(mesh.triangle_count(), 8);
/// ```
pub fn create_circle(params: &CircleParams) -> Result<Mesh, MeshError> {
    params.validate()?;

    if approx_zero(params.radius) {
        warn!("create_circle: radius is 0, every triangle has zero area");
    }
    if approx_zero(params.angular_size) {
        warn!("create_circle: angular_size is 0, every triangle has zero area");
    } else if !params.is_closed() {
        debug!("create_circle: partial turn of {} rad", params.angular_size);
    }

    let segments = params.segments;
    let mut builder = MeshBuilder::with_budget(segments as usize + 2, segments as usize)?;

    let center = builder.push_vertex(DVec3::ZERO, DVec2::splat(0.5));

    let step = params.angular_size / segments as f64;
    for i in 0..=segments {
        let angle = params.start_angle + step * i as f64;
        let position = DVec3::new(params.radius * angle.cos(), params.radius * angle.sin(), 0.0);
        builder.push_vertex(position, disc_uv(position, params.radius));
    }

    for i in 0..segments {
        let rim = center + 1 + i;
        builder.push_triangle(center, rim, rim + 1);
    }

    let mesh = builder.build();
    debug!(
        "create_circle: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Planar UV mapping of an XY position onto a disc of the given radius.
///
/// A zero radius maps everything to the UV center.
pub(crate) fn disc_uv(position: DVec3, radius: f64) -> DVec2 {
    if radius == 0.0 {
        return DVec2::splat(0.5);
    }
    DVec2::new(
        (position.x / radius + 1.0) / 2.0,
        (position.y / radius + 1.0) / 2.0,
    )
}
