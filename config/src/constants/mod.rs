//! # Configuration Constants
//!
//! Centralized constants for the woodshop geometry kernel.
//!
//! ## Categories
//!
//! - **Tessellation**: Default tolerance parameters and segment clamps
//! - **Precision**: Floating-point tolerances for metrics and round trips
//! - **Formats**: Literals of the STEP-like and IGES-like text formats

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Default maximum chord-to-arc deviation.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_LINEAR_DEFLECTION;
/// assert_eq!(DEFAULT_LINEAR_DEFLECTION, 0.5);
/// ```
pub const DEFAULT_LINEAR_DEFLECTION: f64 = 0.5;

/// Default maximum angular step in degrees.
pub const DEFAULT_ANGULAR_DEFLECTION_DEG: f64 = 15.0;

/// Default lower clamp on generated segment counts.
pub const DEFAULT_MIN_SEGMENTS: u32 = 8;

/// Default upper clamp on generated segment counts.
pub const DEFAULT_MAX_SEGMENTS: u32 = 512;

/// Floor applied to the linear deflection before deriving slices around an
/// axis.
///
/// Keeps `2π / sqrt(deflection)` finite for zero or negative requests.
pub const MIN_LINEAR_DEFLECTION: f64 = 1e-4;

/// Floor applied to the linear deflection before deriving cylinder height
/// segments.
pub const MIN_HEIGHT_DEFLECTION: f64 = 1e-3;

/// Floor applied to the angular deflection (degrees) before deriving belts.
pub const MIN_ANGULAR_DEFLECTION_DEG: f64 = 0.1;

/// Smallest number of slices around an axis, regardless of `minSegments`.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_MIN_SEGMENTS, MIN_LONGITUDINAL_SEGMENTS};
/// assert_eq!(DEFAULT_MIN_SEGMENTS.max(MIN_LONGITUDINAL_SEGMENTS), 8);
/// ```
pub const MIN_LONGITUDINAL_SEGMENTS: u32 = 6;

/// Smallest number of belts between the poles of a sphere.
pub const MIN_LATITUDINAL_SEGMENTS: u32 = 2;

/// Smallest number of height segments along a cylinder.
pub const MIN_HEIGHT_SEGMENTS: u32 = 1;

/// Replacement for non-positive primitive dimensions (radius, height).
///
/// Degenerate inputs are clamped to this value instead of being rejected.
pub const DEGENERATE_DIMENSION_EPSILON: f64 = 1e-6;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Accumulated normals shorter than this fall back to the vertex position.
///
/// # Examples
/// ```
/// use config::constants::NORMAL_EPSILON;
/// assert!(NORMAL_EPSILON < 1e-6);
/// ```
pub const NORMAL_EPSILON: f64 = 1e-9;

/// Maximum per-vertex deviation accepted for a lossless round trip.
pub const ROUNDTRIP_TOLERANCE: f64 = 1e-9;

// =============================================================================
// FORMAT CONSTANTS
// =============================================================================

/// First token of every STEP-like file.
pub const STEP_MAGIC: &str = "WOODSHOP_STEP";

/// Version string written after [`STEP_MAGIC`]. Ignored on read.
pub const STEP_VERSION: &str = "1.1";

/// Canonical extension of STEP-like files.
pub const STEP_EXTENSION: &str = "stp";

/// Exact first line (after trimming) of every IGES-like file.
///
/// # Examples
/// ```
/// use config::constants::IGES_HEADER;
/// assert_eq!("  WOODSHOP_IGES 1.0 \r".trim(), IGES_HEADER);
/// ```
pub const IGES_HEADER: &str = "WOODSHOP_IGES 1.0";

/// Line that terminates the IGES-like record scan.
pub const IGES_TERMINATOR: &str = "END-IGES";

/// Canonical extension of IGES-like files.
pub const IGES_EXTENSION: &str = "igs";
