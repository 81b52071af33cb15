//! Parameter schemas: the ordered, labelled, range-annotated field list of
//! each shape kind.
//!
//! Ranges are editor slider bounds. They are hints for a UI, not
//! validation; generators still check their own inputs.

use config::constants::{
    EDIT_MAX_BOX_SEGMENTS, EDIT_MAX_CYLINDER_LENGTH, EDIT_MAX_FAN_SEGMENTS,
    EDIT_MAX_HEIGHT_SCALE, EDIT_MAX_RADIUS, EDIT_MAX_RING_RADIUS, EDIT_MAX_SEGMENTS,
    EDIT_MAX_SIDE, EDIT_MAX_WINDINGS, EDIT_MIN_LENGTH, EDIT_MIN_TUBE_RADIAL_SEGMENTS,
    EDIT_MIN_TUBE_TUBULAR_SEGMENTS, CIRCLE_MIN_SEGMENTS, CYLINDER_MIN_RADIAL_SEGMENTS,
    FULL_TURN, HALF_TURN, RING_MIN_PHI_SEGMENTS, RING_MIN_THETA_SEGMENTS,
};
use serde::Serialize;

/// The editable range of one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParameterRange {
    /// Real value in `[min, max]`
    Float { min: f64, max: f64 },
    /// Whole value in `[min, max]`
    Integer { min: u32, max: u32 },
    /// On / off
    Flag,
    /// An ordered point list (lathe profile), edited outside the slider UI
    Profile,
}

impl ParameterRange {
    /// Clamps a float into this range. Non-float ranges return the value
    /// unchanged.
    pub fn clamp_float(&self, value: f64) -> f64 {
        match *self {
            ParameterRange::Float { min, max } => value.clamp(min, max),
            _ => value,
        }
    }

    /// Clamps an integer into this range. Non-integer ranges return the
    /// value unchanged.
    pub fn clamp_integer(&self, value: u32) -> u32 {
        match *self {
            ParameterRange::Integer { min, max } => value.clamp(min, max),
            _ => value,
        }
    }
}

/// One entry of a shape's parameter schema.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterSpec {
    /// Field name accepted by `ShapeParameters::get` / `set`
    pub name: &'static str,
    /// Human readable label
    pub label: &'static str,
    /// Editing range
    pub range: ParameterRange,
}

const fn float(name: &'static str, label: &'static str, min: f64, max: f64) -> ParameterSpec {
    ParameterSpec {
        name,
        label,
        range: ParameterRange::Float { min, max },
    }
}

const fn integer(name: &'static str, label: &'static str, min: u32, max: u32) -> ParameterSpec {
    ParameterSpec {
        name,
        label,
        range: ParameterRange::Integer { min, max },
    }
}

const fn flag(name: &'static str, label: &'static str) -> ParameterSpec {
    ParameterSpec {
        name,
        label,
        range: ParameterRange::Flag,
    }
}

// =============================================================================
// PER-KIND SCHEMAS
// =============================================================================

pub(crate) const BOX: &[ParameterSpec] = &[
    float("width", "Width", EDIT_MIN_LENGTH, EDIT_MAX_SIDE),
    float("height", "Height", EDIT_MIN_LENGTH, EDIT_MAX_SIDE),
    float("depth", "Depth", EDIT_MIN_LENGTH, EDIT_MAX_SIDE),
    integer("width_segments", "Width Divisions", 1, EDIT_MAX_BOX_SEGMENTS),
    integer("height_segments", "Height Divisions", 1, EDIT_MAX_BOX_SEGMENTS),
    integer("depth_segments", "Depth Divisions", 1, EDIT_MAX_BOX_SEGMENTS),
];

pub(crate) const CYLINDER: &[ParameterSpec] = &[
    float("bottom_radius", "Bottom Radius", 0.0, EDIT_MAX_CYLINDER_LENGTH),
    float("top_radius", "Top Radius", 0.0, EDIT_MAX_CYLINDER_LENGTH),
    float("height", "Length", EDIT_MIN_LENGTH, EDIT_MAX_CYLINDER_LENGTH),
    integer("height_segments", "Stacks", 1, EDIT_MAX_SEGMENTS),
    integer(
        "radial_segments",
        "Slices",
        CYLINDER_MIN_RADIAL_SEGMENTS,
        EDIT_MAX_SEGMENTS,
    ),
    flag("open_ended", "Open Ended"),
];

pub(crate) const LATHE: &[ParameterSpec] = &[
    ParameterSpec {
        name: "points",
        label: "Profile",
        range: ParameterRange::Profile,
    },
    integer("segments", "Segments", 3, EDIT_MAX_FAN_SEGMENTS),
    float("phi_start", "Start Angle", 0.0, FULL_TURN),
    float("phi_length", "Angular Size", 0.0, FULL_TURN),
];

pub(crate) const SPHERE: &[ParameterSpec] = &[
    float("radius", "Radius", EDIT_MIN_LENGTH, EDIT_MAX_RADIUS),
    integer("height_segments", "Stacks", 1, EDIT_MAX_SEGMENTS),
    integer("width_segments", "Slices", 1, EDIT_MAX_SEGMENTS),
    float("phi_start", "Phi Start", 0.0, FULL_TURN),
    float("phi_length", "Phi Length", 0.0, FULL_TURN),
    float("theta_start", "Theta Start", 0.0, HALF_TURN),
    float("theta_length", "Theta Length", 0.0, HALF_TURN),
];

pub(crate) const TORUS: &[ParameterSpec] = &[
    float("radius", "Radius", EDIT_MIN_LENGTH, EDIT_MAX_RADIUS),
    float("tube", "Tube Radius", EDIT_MIN_LENGTH, EDIT_MAX_RADIUS),
    integer(
        "radial_segments",
        "Radial Segments",
        EDIT_MIN_TUBE_RADIAL_SEGMENTS,
        EDIT_MAX_SEGMENTS,
    ),
    integer(
        "tubular_segments",
        "Tubular Segments",
        EDIT_MIN_TUBE_TUBULAR_SEGMENTS,
        EDIT_MAX_SEGMENTS,
    ),
    float("arc", "Arc", 0.0, FULL_TURN),
];

pub(crate) const TORUS_KNOT: &[ParameterSpec] = &[
    float("radius", "Radius", EDIT_MIN_LENGTH, EDIT_MAX_RADIUS),
    float("tube", "Tube Radius", EDIT_MIN_LENGTH, EDIT_MAX_RADIUS),
    integer(
        "radial_segments",
        "Radial Segments",
        EDIT_MIN_TUBE_RADIAL_SEGMENTS,
        EDIT_MAX_SEGMENTS,
    ),
    integer(
        "tubular_segments",
        "Tubular Segments",
        EDIT_MIN_TUBE_TUBULAR_SEGMENTS,
        EDIT_MAX_SEGMENTS,
    ),
    integer("p", "P", 1, EDIT_MAX_WINDINGS),
    integer("q", "Q", 1, EDIT_MAX_WINDINGS),
    float("height_scale", "Height Scale", 0.0, EDIT_MAX_HEIGHT_SCALE),
];

pub(crate) const CIRCLE: &[ParameterSpec] = &[
    float("radius", "Radius", EDIT_MIN_LENGTH, EDIT_MAX_RADIUS),
    integer(
        "segments",
        "Segments",
        CIRCLE_MIN_SEGMENTS,
        EDIT_MAX_FAN_SEGMENTS,
    ),
    float("start_angle", "Start Angle", 0.0, FULL_TURN),
    float("angular_size", "Angular Size", 0.0, FULL_TURN),
];

pub(crate) const PLANE: &[ParameterSpec] = &[
    float("width", "Width", EDIT_MIN_LENGTH, EDIT_MAX_SIDE),
    float("height", "Height", EDIT_MIN_LENGTH, EDIT_MAX_SIDE),
    integer("width_segments", "Width Divisions", 1, EDIT_MAX_SEGMENTS),
    integer("height_segments", "Height Divisions", 1, EDIT_MAX_SEGMENTS),
];

pub(crate) const RING: &[ParameterSpec] = &[
    float("inner_radius", "Inner Radius", EDIT_MIN_LENGTH, EDIT_MAX_RING_RADIUS),
    float("outer_radius", "Outer Radius", EDIT_MIN_LENGTH, EDIT_MAX_RING_RADIUS),
    integer(
        "theta_segments",
        "Theta Segments",
        RING_MIN_THETA_SEGMENTS,
        EDIT_MAX_FAN_SEGMENTS,
    ),
    integer(
        "phi_segments",
        "Phi Segments",
        RING_MIN_PHI_SEGMENTS,
        EDIT_MAX_FAN_SEGMENTS,
    ),
    float("theta_start", "Start Angle", 0.0, FULL_TURN),
    float("theta_length", "Angular Size", 0.0, FULL_TURN),
];
