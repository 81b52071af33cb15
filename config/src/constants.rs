//! # Configuration Constants
//!
//! Centralized constants for the primitive generator. All precision values,
//! safety limits, minimum segment counts and default shape parameters are
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Limits**: Maximum mesh sizes for safety bounds
//! - **Minimums**: Smallest segment counts each generator accepts
//! - **Defaults**: Parameter values a freshly selected shape starts with
//! - **Editing Ranges**: Slider bounds offered to an interactive editor

use std::f64::consts::{PI, TAU};

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance for "unit length" checks on emitted normals.
///
/// Analytic normals (torus, torus knot) must have magnitude 1 within this
/// tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::UNIT_NORMAL_TOLERANCE;
///
/// let length: f64 = 1.0 + 1e-7;
/// assert!((length - 1.0).abs() < UNIT_NORMAL_TOLERANCE);
/// ```
pub const UNIT_NORMAL_TOLERANCE: f64 = 1e-5;

/// Relative area below which a triangle is reported as degenerate.
///
/// Multiplied by the squared bounding-box diagonal of the mesh, so the
/// same shape is judged alike at any scale. Degenerate triangles are legal
/// output (cone tips, zero angular size); this threshold only drives
/// diagnostics such as `Mesh::degenerate_triangle_count`.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-12;

/// Parameter step used to sample the torus knot curve a second time when
/// building its local frame.
pub const TORUS_KNOT_TANGENT_STEP: f64 = 0.01;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single generated mesh.
///
/// Safety limit checked before any buffer is allocated. Well below
/// `u32::MAX` so every index fits the `u32` index format.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single generated mesh.
pub const MAX_TRIANGLES: usize = 20_000_000;

// =============================================================================
// MINIMUM SEGMENT COUNTS
// =============================================================================

/// Minimum segments along any box axis.
pub const BOX_MIN_SEGMENTS: u32 = 1;

/// Minimum segments along either plane axis.
pub const PLANE_MIN_SEGMENTS: u32 = 1;

/// Minimum rim segments of a circle fan.
pub const CIRCLE_MIN_SEGMENTS: u32 = 3;

/// Minimum angular segments of a ring.
pub const RING_MIN_THETA_SEGMENTS: u32 = 3;

/// Minimum radial (concentric) segments of a ring.
pub const RING_MIN_PHI_SEGMENTS: u32 = 1;

/// Minimum segments around a cylinder.
pub const CYLINDER_MIN_RADIAL_SEGMENTS: u32 = 2;

/// Minimum segments along a cylinder's height.
pub const CYLINDER_MIN_HEIGHT_SEGMENTS: u32 = 1;

/// Minimum longitude segments of a sphere.
///
/// Fewer than 3 produce a flat or zero-area mesh; accepted with a warning.
pub const SPHERE_MIN_WIDTH_SEGMENTS: u32 = 1;

/// Minimum latitude segments of a sphere.
///
/// A single segment spans pole to pole and collapses to zero area.
pub const SPHERE_MIN_HEIGHT_SEGMENTS: u32 = 1;

/// Fewest longitude segments that enclose a volume.
pub const SPHERE_SOLID_WIDTH_SEGMENTS: u32 = 3;

/// Fewest latitude segments that enclose a volume.
pub const SPHERE_SOLID_HEIGHT_SEGMENTS: u32 = 2;

/// Minimum segments around a torus tube cross-section.
pub const TORUS_MIN_RADIAL_SEGMENTS: u32 = 3;

/// Minimum segments along a torus' major circle.
pub const TORUS_MIN_TUBULAR_SEGMENTS: u32 = 3;

/// Minimum samples along a torus knot curve.
pub const TORUS_KNOT_MIN_RADIAL_SEGMENTS: u32 = 3;

/// Minimum segments around a torus knot tube.
pub const TORUS_KNOT_MIN_TUBULAR_SEGMENTS: u32 = 3;

/// Minimum revolution steps of a lathe.
pub const LATHE_MIN_SEGMENTS: u32 = 1;

/// Minimum number of profile points a lathe can revolve.
pub const LATHE_MIN_POINTS: usize = 2;

// =============================================================================
// DEFAULT PARAMETERS
// =============================================================================

/// Default box width (X).
pub const BOX_DEFAULT_WIDTH: f64 = 5.0;
/// Default box height (Y).
pub const BOX_DEFAULT_HEIGHT: f64 = 5.0;
/// Default box depth (Z).
pub const BOX_DEFAULT_DEPTH: f64 = 5.0;
/// Default segments along each box axis.
pub const BOX_DEFAULT_SEGMENTS: u32 = 10;

/// Default plane width (X).
pub const PLANE_DEFAULT_WIDTH: f64 = 5.0;
/// Default plane height (Z).
pub const PLANE_DEFAULT_HEIGHT: f64 = 5.0;
/// Default segments along each plane axis.
pub const PLANE_DEFAULT_SEGMENTS: u32 = 10;

/// Default circle radius.
pub const CIRCLE_DEFAULT_RADIUS: f64 = 2.5;
/// Default circle rim segments.
pub const CIRCLE_DEFAULT_SEGMENTS: u32 = 20;

/// Default ring inner radius.
pub const RING_DEFAULT_INNER_RADIUS: f64 = 3.0;
/// Default ring outer radius.
pub const RING_DEFAULT_OUTER_RADIUS: f64 = 5.0;
/// Default ring angular segments.
pub const RING_DEFAULT_THETA_SEGMENTS: u32 = 20;
/// Default ring radial segments.
pub const RING_DEFAULT_PHI_SEGMENTS: u32 = 20;

/// Default cylinder top radius.
pub const CYLINDER_DEFAULT_TOP_RADIUS: f64 = 1.0;
/// Default cylinder bottom radius.
pub const CYLINDER_DEFAULT_BOTTOM_RADIUS: f64 = 1.0;
/// Default cylinder height.
pub const CYLINDER_DEFAULT_HEIGHT: f64 = 5.0;
/// Default cylinder radial segments.
pub const CYLINDER_DEFAULT_RADIAL_SEGMENTS: u32 = 20;
/// Default cylinder height segments.
pub const CYLINDER_DEFAULT_HEIGHT_SEGMENTS: u32 = 20;

/// Default sphere radius.
pub const SPHERE_DEFAULT_RADIUS: f64 = 2.5;
/// Default sphere longitude segments.
pub const SPHERE_DEFAULT_WIDTH_SEGMENTS: u32 = 20;
/// Default sphere latitude segments.
pub const SPHERE_DEFAULT_HEIGHT_SEGMENTS: u32 = 20;

/// Default torus major radius.
pub const TORUS_DEFAULT_RADIUS: f64 = 2.5;
/// Default torus tube radius.
pub const TORUS_DEFAULT_TUBE: f64 = 1.0;
/// Default torus radial segments (around the tube).
pub const TORUS_DEFAULT_RADIAL_SEGMENTS: u32 = 50;
/// Default torus tubular segments (along the major circle).
pub const TORUS_DEFAULT_TUBULAR_SEGMENTS: u32 = 20;

/// Default torus knot winding number around the axis of rotational symmetry.
pub const TORUS_KNOT_DEFAULT_P: u32 = 2;
/// Default torus knot winding number around the interior circle.
pub const TORUS_KNOT_DEFAULT_Q: u32 = 3;
/// Default torus knot height scale.
pub const TORUS_KNOT_DEFAULT_HEIGHT_SCALE: f64 = 1.0;

/// Default lathe revolution steps.
pub const LATHE_DEFAULT_SEGMENTS: u32 = 20;
/// Number of points in the default lathe profile.
pub const LATHE_DEFAULT_PROFILE_POINTS: usize = 50;

/// Default start angle for every angular range (radians).
pub const DEFAULT_START_ANGLE: f64 = 0.0;

/// A full turn (radians). Default angular size of circles, rings, lathes,
/// tori and the sphere's longitude range.
pub const FULL_TURN: f64 = TAU;

/// A half turn (radians). Default latitude range of a sphere.
pub const HALF_TURN: f64 = PI;

// =============================================================================
// EDITING RANGES
// =============================================================================

/// Smallest length an editor slider offers for sizes and radii.
pub const EDIT_MIN_LENGTH: f64 = 0.01;

/// Largest box / plane side an editor slider offers.
pub const EDIT_MAX_SIDE: f64 = 10.0;

/// Largest sphere / circle / torus radius an editor slider offers.
pub const EDIT_MAX_RADIUS: f64 = 5.0;

/// Largest ring radius an editor slider offers.
pub const EDIT_MAX_RING_RADIUS: f64 = 15.0;

/// Largest cylinder radius or height an editor slider offers.
pub const EDIT_MAX_CYLINDER_LENGTH: f64 = 10.0;

/// Largest torus knot height scale an editor slider offers.
pub const EDIT_MAX_HEIGHT_SCALE: f64 = 2.0;

/// Largest segment count an editor slider offers for most shapes.
pub const EDIT_MAX_SEGMENTS: u32 = 100;

/// Largest per-axis segment count an editor slider offers for boxes.
pub const EDIT_MAX_BOX_SEGMENTS: u32 = 75;

/// Largest segment count an editor slider offers for circles, rings and
/// lathes.
pub const EDIT_MAX_FAN_SEGMENTS: u32 = 50;

/// Smallest tube cross-section resolution an editor slider offers.
pub const EDIT_MIN_TUBE_RADIAL_SEGMENTS: u32 = 8;

/// Smallest resolution along a tube an editor slider offers.
pub const EDIT_MIN_TUBE_TUBULAR_SEGMENTS: u32 = 6;

/// Largest torus knot winding number an editor slider offers.
pub const EDIT_MAX_WINDINGS: u32 = 10;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Checks if an angular size describes a full turn (within EPSILON).
///
/// # Example
///
/// ```rust
/// use config::constants::{is_full_turn, FULL_TURN};
///
/// assert!(is_full_turn(FULL_TURN));
/// assert!(!is_full_turn(std::f64::consts::PI));
/// ```
#[inline]
pub fn is_full_turn(angle: f64) -> bool {
    approx_equal(angle.abs(), FULL_TURN)
}
