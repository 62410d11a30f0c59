//! Thin wrapper around `glam::DVec3` shared across kernel modules.
//!
//! glam already provides the arithmetic the kernel needs (add, subtract,
//! scale, dot, cross, length, normalize). Equality is exact and
//! component-wise. The helpers below cover the two spots where the kernel
//! needs a total (never-NaN) variant.

use config::constants::NORMAL_EPSILON;

pub use glam::DVec3 as Vec3;

/// Creates a zero vector.
///
/// # Examples
/// ```
/// use woodshop_geom::vec3::{self, Vec3};
/// assert_eq!(vec3::zero(), Vec3::new(0.0, 0.0, 0.0));
/// ```
pub fn zero() -> Vec3 {
    Vec3::ZERO
}

/// Euclidean distance between two points.
///
/// # Examples
/// ```
/// use woodshop_geom::vec3::{distance, Vec3};
/// assert_eq!(distance(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0)), 5.0);
/// ```
pub fn distance(a: Vec3, b: Vec3) -> f64 {
    (a - b).length()
}

/// Normalizes `v`, or returns `fallback` when `|v|` is below
/// [`NORMAL_EPSILON`] or not finite.
///
/// # Examples
/// ```
/// use woodshop_geom::vec3::{normalize_or, Vec3};
/// assert_eq!(normalize_or(Vec3::new(0.0, 0.0, 2.0), Vec3::X), Vec3::Z);
/// assert_eq!(normalize_or(Vec3::ZERO, Vec3::X), Vec3::X);
/// ```
pub fn normalize_or(v: Vec3, fallback: Vec3) -> Vec3 {
    let len = v.length();
    if len.is_finite() && len >= NORMAL_EPSILON {
        v / len
    } else {
        fallback
    }
}
