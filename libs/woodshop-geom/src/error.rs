//! # Geometry Errors
//!
//! Error types for mesh construction.
//!
//! Tessellation and metric computation are total: degenerate dimensions are
//! clamped and out-of-range triangles are skipped. The only failure left is
//! an attempt to break a [`Mesh`](crate::Mesh) invariant.

use thiserror::Error;

/// Errors that can occur while building or mutating a mesh.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeomError {
    /// A normal buffer whose length disagrees with the vertex count.
    #[error("normal count {normals} does not match vertex count {vertices}")]
    NormalCountMismatch {
        /// Number of normals supplied.
        normals: usize,
        /// Number of vertices in the mesh.
        vertices: usize,
    },
}

/// Result type alias for geometry operations.
pub type GeomResult<T> = Result<T, GeomError>;
