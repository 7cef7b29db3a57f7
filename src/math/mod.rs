//! Rotation representations and the conversions between them.
//!
//! Vectors, quaternions and affine transforms are `glam`'s double-precision
//! types. This module adds the pieces `glam` does not carry: degree-based
//! axis-angle and turntable representations, and quaternion helpers that
//! guard the singular cases (zero-length axes, zero-angle axis extraction)
//! instead of producing NaN.

/// Degree normalization and field-of-view conversion.
pub mod angle;
/// Axis-angle rotation representation.
pub mod axis_angle;
/// Guarded quaternion construction and decomposition.
pub mod quat;
/// Turntable (z-then-x) rotation representation.
pub mod turntable;

pub use angle::{horizontal_fov_radians, normalize_degrees};
pub use axis_angle::AxisAngle;
pub use turntable::Turntable;
