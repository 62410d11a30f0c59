//! # Config Crate
//!
//! Centralized configuration constants for the woodshop geometry kernel.
//! Tessellation defaults, clamp floors, numeric tolerances and the literals of
//! the two textual mesh formats are defined here so that the geometry and I/O
//! crates never scatter magic numbers.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_LINEAR_DEFLECTION, MIN_LINEAR_DEFLECTION};
//!
//! let requested = 0.0;
//! let safe = f64::max(requested, MIN_LINEAR_DEFLECTION);
//! assert!(safe > 0.0);
//! assert!(DEFAULT_LINEAR_DEFLECTION > safe);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Ambient State**: Nothing here is read from the environment
//! - **Format Literals**: File magic strings live next to the tolerances that
//!   guard their round trips

pub mod constants;
