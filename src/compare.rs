//! Tolerant floating-point comparison.
//!
//! Every type in this crate compares for equality within a small numeric
//! margin. The thresholds differ per type and are part of the observable
//! contract, so they live here as named constants rather than as inline
//! literals at each call site.

use float_eq::float_eq;

/// Relative tolerance shared by all tolerant comparisons.
pub const REL_TOL: f64 = 1e-9;

/// Absolute tolerance for [`Vector`](crate::Vector) and
/// [`Point`](crate::Point) equality.
pub const VECTOR_ABS_TOL: f64 = 1e-4;

/// Absolute tolerance for [`Quaternion`](crate::Quaternion) equality.
/// Tighter than [`VECTOR_ABS_TOL`]; the two must not be unified.
pub const QUATERNION_ABS_TOL: f64 = 1e-9;

/// Absolute tolerance used when testing components and magnitudes against
/// zero.
pub const ZERO_ABS_TOL: f64 = 1e-4;

/// True if `a` and `b` agree to within `abs_tol` absolutely, or to within
/// `rel_tol` relative to the larger magnitude.
pub fn is_close(a: f64, b: f64, rel_tol: f64, abs_tol: f64) -> bool {
    float_eq!(a, b, abs <= abs_tol, rmax <= rel_tol)
}

/// `is_close` with the Vector/Point tolerances.
pub(crate) fn vector_close(a: f64, b: f64) -> bool {
    is_close(a, b, REL_TOL, VECTOR_ABS_TOL)
}

/// `is_close` with the Quaternion tolerances.
pub(crate) fn quaternion_close(a: f64, b: f64) -> bool {
    is_close(a, b, REL_TOL, QUATERNION_ABS_TOL)
}

/// Within [`ZERO_ABS_TOL`] of zero.
pub(crate) fn near_zero(x: f64) -> bool {
    float_eq!(x, 0.0, abs <= ZERO_ABS_TOL)
}
