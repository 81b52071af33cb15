//! # Parameter Validation
//!
//! Checks shared by every generator. All of them run before any buffer
//! is allocated, so a rejected call never produces a partial mesh.

use crate::error::MeshError;

/// Rejects a segment count below the shape's minimum.
pub(crate) fn check_min_segments(name: &str, value: u32, min: u32) -> Result<(), MeshError> {
    if value < min {
        return Err(MeshError::invalid_parameter(
            name,
            format!("must be at least {}, got {}", min, value),
        ));
    }
    Ok(())
}

/// Rejects NaN and infinities.
pub(crate) fn check_finite(name: &str, value: f64) -> Result<(), MeshError> {
    if !value.is_finite() {
        return Err(MeshError::invalid_parameter(
            name,
            format!("must be finite, got {}", value),
        ));
    }
    Ok(())
}

/// Rejects non-finite and non-positive values.
pub(crate) fn check_positive(name: &str, value: f64) -> Result<(), MeshError> {
    check_finite(name, value)?;
    if value <= 0.0 {
        return Err(MeshError::invalid_parameter(
            name,
            format!("must be positive, got {}", value),
        ));
    }
    Ok(())
}

/// Rejects non-finite and negative values. Zero is allowed.
pub(crate) fn check_non_negative(name: &str, value: f64) -> Result<(), MeshError> {
    check_finite(name, value)?;
    if value < 0.0 {
        return Err(MeshError::invalid_parameter(
            name,
            format!("must not be negative, got {}", value),
        ));
    }
    Ok(())
}

/// Number of vertices in a `(columns + 1) × (rows + 1)` lattice.
///
/// Saturates instead of overflowing so oversized requests reach the
/// builder's limit check.
pub(crate) fn lattice_vertices(columns: u32, rows: u32) -> usize {
    (columns as usize + 1).saturating_mul(rows as usize + 1)
}

/// Number of triangles when every cell of a `columns × rows` grid is split
/// in two.
pub(crate) fn lattice_triangles(columns: u32, rows: u32) -> usize {
    (columns as usize)
        .saturating_mul(rows as usize)
        .saturating_mul(2)
}
