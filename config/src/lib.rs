//! # Config Crate
//!
//! Centralized configuration constants for the procedural primitive
//! generator. Tolerances, safety limits, minimum segment counts and the
//! default shape parameters are defined here so every generator and every
//! caller agrees on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, SPHERE_MIN_WIDTH_SEGMENTS, SPHERE_DEFAULT_RADIUS};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // Segment minima are enforced by the generators
//! assert!(SPHERE_MIN_WIDTH_SEGMENTS >= 1);
//! assert!(SPHERE_DEFAULT_RADIUS > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Plain `f64`/`u32` values only
//! - **Editor Compatible**: Defaults match the interactive shape menu
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
