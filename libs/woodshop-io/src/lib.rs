//! # Woodshop I/O
//!
//! Deterministic text persistence for [`MeshModel`]s in two unrelated
//! formats:
//!
//! - **STEP-like** (`.stp`): token stream with counted sections, carries
//!   normals
//! - **IGES-like** (`.igs`): one record per line, no normals
//!
//! The names are homages only. Neither format is ISO 10303 or IGES.
//!
//! # Example
//!
//! ```no_run
//! use woodshop_geom::{tessellate_unit_sphere, TessellationParameters};
//! use woodshop_io::{load_model, max_vertex_distance, save_model, MeshModel};
//!
//! let sphere = tessellate_unit_sphere(&TessellationParameters::default());
//! let model = MeshModel::new("sphere", sphere);
//!
//! save_model(&model, "sphere.stp").unwrap();
//! let loaded = load_model("sphere.stp").unwrap();
//! assert!(max_vertex_distance(&model, &loaded) < 1e-9);
//! ```
//!
//! Both formats write coordinates in the shortest form that parses back to
//! the same `f64`, so write-then-read is lossless.

mod error;
mod iges;
mod model;
mod step;

pub use error::{IoError, IoResult};
pub use iges::{load_iges, parse_iges, save_iges, write_iges};
pub use model::{max_vertex_distance, MeshModel};
pub use step::{load_step, parse_step, save_step, write_step};

use std::fmt;
use std::path::Path;

use config::constants::{IGES_EXTENSION, STEP_EXTENSION};

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshFormat {
    /// STEP-like token format.
    Step,
    /// IGES-like line format.
    Iges,
}

impl MeshFormat {
    /// Detect format from file extension, ignoring case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use woodshop_io::MeshFormat;
    ///
    /// assert_eq!(MeshFormat::from_path("part.STEP"), Some(MeshFormat::Step));
    /// assert_eq!(MeshFormat::from_path("part.igs"), Some(MeshFormat::Iges));
    /// assert_eq!(MeshFormat::from_path("part.stl"), None);
    /// ```
    #[must_use]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "stp" | "step" => Some(Self::Step),
            "igs" | "iges" => Some(Self::Iges),
            _ => None,
        }
    }

    /// Get the canonical file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Step => STEP_EXTENSION,
            Self::Iges => IGES_EXTENSION,
        }
    }
}

impl fmt::Display for MeshFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step => f.write_str("STEP"),
            Self::Iges => f.write_str("IGES"),
        }
    }
}

fn format_for(path: &Path) -> IoResult<MeshFormat> {
    MeshFormat::from_path(path).ok_or_else(|| IoError::UnknownFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })
}

/// Load a model from a file, detecting format from extension.
///
/// # Errors
///
/// Returns an error if:
/// - The file format cannot be determined from the extension
/// - The file cannot be read
/// - The file content is invalid for the detected format
pub fn load_model<P: AsRef<Path>>(path: P) -> IoResult<MeshModel> {
    let path = path.as_ref();
    match format_for(path)? {
        MeshFormat::Step => load_step(path),
        MeshFormat::Iges => load_iges(path),
    }
}

/// Save a model to a file, detecting format from extension.
///
/// # Errors
///
/// Returns an error if:
/// - The file format cannot be determined from the extension
/// - The file cannot be written
pub fn save_model<P: AsRef<Path>>(model: &MeshModel, path: P) -> IoResult<()> {
    let path = path.as_ref();
    match format_for(path)? {
        MeshFormat::Step => save_step(model, path),
        MeshFormat::Iges => save_iges(model, path),
    }
}
