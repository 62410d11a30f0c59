//! # Tessellation Engine
//!
//! Turns a tolerance specification into a watertight triangulated
//! approximation of an analytic primitive (unit sphere, cylinder).
//!
//! Every mesh returned from this module carries vertex normals.

pub mod cylinder;
pub mod params;
pub mod sphere;

pub use cylinder::tessellate_cylinder;
pub use params::TessellationParameters;
pub use sphere::tessellate_unit_sphere;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::aabb::Aabb;
use crate::mesh::Mesh;

/// A primitive the engine knows how to tessellate.
///
/// Serialized with a `kind` tag so a host can send requests as JSON:
/// `{ "kind": "cylinder", "radius": 1.0, "height": 2.0, "capped": true }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Primitive {
    /// Unit sphere centered at the origin.
    UnitSphere,
    /// Z-axis cylinder centered at the origin.
    Cylinder {
        /// Radius; non-positive values are clamped.
        radius: f64,
        /// Height; non-positive values are clamped.
        height: f64,
        /// Whether both ends are closed with fans.
        capped: bool,
    },
}

/// Tessellates one primitive.
///
/// # Example
///
/// ```rust
/// use woodshop_geom::{tessellate, Primitive, TessellationParameters};
///
/// let mesh = tessellate(&Primitive::UnitSphere, &TessellationParameters::default());
/// assert!(mesh.triangle_count() > 0);
/// ```
pub fn tessellate(primitive: &Primitive, params: &TessellationParameters) -> Mesh {
    match *primitive {
        Primitive::UnitSphere => tessellate_unit_sphere(params),
        Primitive::Cylinder {
            radius,
            height,
            capped,
        } => tessellate_cylinder(radius, height, params, capped),
    }
}

/// Tessellates independent primitives in parallel.
///
/// Output order matches input order.
pub fn tessellate_many(primitives: &[Primitive], params: &TessellationParameters) -> Vec<Mesh> {
    primitives
        .par_iter()
        .map(|primitive| tessellate(primitive, params))
        .collect()
}

/// Headline metrics of a tessellated mesh, as reported back to a host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshSummary {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of triangles.
    pub triangle_count: usize,
    /// Total area of valid triangles.
    pub surface_area: f64,
    /// Axis-aligned bounding box.
    pub bounding_box: Aabb,
}

impl MeshSummary {
    /// Summarizes a mesh.
    pub fn of(mesh: &Mesh) -> Self {
        Self {
            vertex_count: mesh.vertex_count(),
            triangle_count: mesh.triangle_count(),
            surface_area: mesh.surface_area(),
            bounding_box: mesh.bounding_box(),
        }
    }
}

#[cfg(test)]
mod tests;
