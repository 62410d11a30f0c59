//! # Tessellation Parameters
//!
//! Tolerance inputs and the segment counts derived from them.
//!
//! ## Algorithm
//!
//! The parameters are not segment counts. Each count is an empirical,
//! monotonic mapping from a deflection tolerance:
//!
//! ```text
//! longitudinal = even(ceil(2π / sqrt(max(linear, 1e-4))))
//!                clamped to [max(minSegments, 6), maxSegments]
//! latitudinal  = max(ceil(π / radians(max(angular, 0.1))), 2)
//!                clamped to [2, maxSegments / 2]
//! height(h)    = max(ceil(h / max(linear, 1e-3)), minSegments / 2)
//!                clamped to [1, maxSegments]
//! ```
//!
//! A tighter tolerance never yields fewer segments. When an upper clamp
//! falls below its floor, the floor wins so generated meshes stay valid.

use std::f64::consts::PI;

use config::constants::{
    DEFAULT_ANGULAR_DEFLECTION_DEG, DEFAULT_LINEAR_DEFLECTION, DEFAULT_MAX_SEGMENTS,
    DEFAULT_MIN_SEGMENTS, MIN_ANGULAR_DEFLECTION_DEG, MIN_HEIGHT_DEFLECTION,
    MIN_HEIGHT_SEGMENTS, MIN_LATITUDINAL_SEGMENTS, MIN_LINEAR_DEFLECTION,
    MIN_LONGITUDINAL_SEGMENTS,
};
use serde::{Deserialize, Serialize};

/// Tolerance-style tessellation configuration.
///
/// Deserializes from camelCase host payloads; missing fields take their
/// defaults.
///
/// ## Example
///
/// ```rust
/// use woodshop_geom::TessellationParameters;
///
/// let coarse = TessellationParameters::default().with_linear_deflection(2.0);
/// let fine = TessellationParameters::default().with_linear_deflection(0.1);
/// assert!(fine.longitudinal_segments() > coarse.longitudinal_segments());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TessellationParameters {
    /// Maximum chord-to-arc deviation. Strictly positive in valid input.
    ///
    /// Default: 0.5
    pub linear_deflection: f64,

    /// Maximum angular step in degrees.
    ///
    /// Default: 15°
    pub angular_deflection_deg: f64,

    /// Lower clamp on generated segment counts.
    ///
    /// Default: 8
    pub min_segments: u32,

    /// Upper clamp on generated segment counts.
    ///
    /// Default: 512
    pub max_segments: u32,
}

impl Default for TessellationParameters {
    fn default() -> Self {
        Self {
            linear_deflection: DEFAULT_LINEAR_DEFLECTION,
            angular_deflection_deg: DEFAULT_ANGULAR_DEFLECTION_DEG,
            min_segments: DEFAULT_MIN_SEGMENTS,
            max_segments: DEFAULT_MAX_SEGMENTS,
        }
    }
}

impl TessellationParameters {
    /// Replaces the linear deflection.
    #[must_use]
    pub fn with_linear_deflection(mut self, linear_deflection: f64) -> Self {
        self.linear_deflection = linear_deflection;
        self
    }

    /// Replaces the angular deflection (degrees).
    #[must_use]
    pub fn with_angular_deflection_deg(mut self, angular_deflection_deg: f64) -> Self {
        self.angular_deflection_deg = angular_deflection_deg;
        self
    }

    /// Replaces the segment clamp range.
    #[must_use]
    pub fn with_segment_range(mut self, min_segments: u32, max_segments: u32) -> Self {
        self.min_segments = min_segments;
        self.max_segments = max_segments;
        self
    }

    /// Slices around an axis (sphere longitude, cylinder circumference).
    ///
    /// Always even, so the sphere is symmetric about its poles whenever the
    /// clamp range allows it.
    #[must_use]
    pub fn longitudinal_segments(&self) -> u32 {
        let safe_linear = self.linear_deflection.max(MIN_LINEAR_DEFLECTION);
        let mut estimated = ceil_to_u32(2.0 * PI / safe_linear.sqrt());
        if estimated % 2 != 0 {
            estimated = estimated.saturating_add(1);
        }
        clamp_segments(
            estimated,
            self.min_segments.max(MIN_LONGITUDINAL_SEGMENTS),
            self.max_segments,
        )
    }

    /// Belts from pole to pole of a sphere.
    #[must_use]
    pub fn latitudinal_segments(&self) -> u32 {
        let safe_angular = self.angular_deflection_deg.max(MIN_ANGULAR_DEFLECTION_DEG);
        let estimated = ceil_to_u32(PI / safe_angular.to_radians()).max(MIN_LATITUDINAL_SEGMENTS);
        clamp_segments(estimated, MIN_LATITUDINAL_SEGMENTS, self.max_segments / 2)
    }

    /// Rings of faces along a cylinder of the given height.
    #[must_use]
    pub fn height_segments(&self, height: f64) -> u32 {
        let safe_linear = self.linear_deflection.max(MIN_HEIGHT_DEFLECTION);
        let estimated = ceil_to_u32(height / safe_linear).max(self.min_segments / 2);
        clamp_segments(estimated, MIN_HEIGHT_SEGMENTS, self.max_segments)
    }
}

/// `ceil(value)` saturated into `u32`; NaN maps to zero.
fn ceil_to_u32(value: f64) -> u32 {
    // Float-to-int `as` casts saturate.
    value.ceil() as u32
}

/// Clamps `value` into `[minimum, maximum]`, letting `minimum` win when the
/// bounds cross.
fn clamp_segments(value: u32, minimum: u32, maximum: u32) -> u32 {
    value.min(maximum).max(minimum)
}

// =============================================================================
// TESTS
// =============================================================================
