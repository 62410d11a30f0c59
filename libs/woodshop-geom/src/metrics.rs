//! # Mesh Metrics
//!
//! Per-vertex normals, bounding box and surface area derived from an
//! arbitrary mesh, independent of how it was produced.
//!
//! All three are total over any index sequence: triangles that reference a
//! missing vertex are skipped, never reported as errors.

use config::constants::NORMAL_EPSILON;
use glam::DVec3;
use tracing::debug;

use crate::aabb::Aabb;
use crate::mesh::Mesh;
use crate::vec3::normalize_or;

/// Computes area-weighted per-vertex normals.
///
/// Each valid triangle adds its un-normalized face normal `(b - a) x (c - a)`
/// to its three corners. The cross product's length is twice the triangle
/// area, so the sum is already area-weighted.
///
/// A vertex whose accumulated normal is shorter than [`NORMAL_EPSILON`] (it
/// touches no valid triangle, or its faces cancel out) uses its own
/// normalized position instead, which only makes sense for shapes centered
/// near the origin. A vertex sitting on the origin falls back to `+Z`.
///
/// # Example
///
/// ```rust
/// use woodshop_geom::{metrics, Mesh};
/// use glam::DVec3;
///
/// let mesh = Mesh::from_parts(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![[0, 1, 2]]);
/// let normals = metrics::compute_normals(&mesh);
/// assert!(normals.iter().all(|n| *n == DVec3::Z));
/// ```
pub fn compute_normals(mesh: &Mesh) -> Vec<DVec3> {
    let mut normals = vec![DVec3::ZERO; mesh.vertex_count()];

    let mut accumulated = 0usize;
    for (ids, [a, b, c]) in mesh.valid_triangles() {
        let face_normal = (b - a).cross(c - a);
        for id in ids {
            normals[id] += face_normal;
        }
        accumulated += 1;
    }

    let mut fallbacks = 0usize;
    for (normal, position) in normals.iter_mut().zip(mesh.vertices()) {
        let len = normal.length();
        *normal = if len >= NORMAL_EPSILON {
            *normal / len
        } else {
            fallbacks += 1;
            normalize_or(*position, DVec3::Z)
        };
    }

    let skipped = mesh.triangle_count() - accumulated;
    if skipped > 0 || fallbacks > 0 {
        debug!(
            "Computed normals for {} vertices: {} out-of-range triangles skipped, {} positional fallbacks",
            mesh.vertex_count(),
            skipped,
            fallbacks
        );
    }

    normals
}

/// Computes the axis-aligned bounding box of all vertices.
///
/// An empty mesh yields the zero box at the origin.
pub fn compute_aabb(mesh: &Mesh) -> Aabb {
    Aabb::from_points(mesh.vertices().iter().copied())
}

/// Sums the area of every valid triangle.
///
/// # Example
///
/// ```rust
/// use woodshop_geom::{metrics, Mesh};
/// use glam::DVec3;
///
/// let mesh = Mesh::from_parts(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![[0, 1, 2], [0, 1, 9]]);
/// assert_eq!(metrics::surface_area(&mesh), 0.5);
/// ```
pub fn surface_area(mesh: &Mesh) -> f64 {
    mesh.valid_triangles()
        .map(|(_, [a, b, c])| 0.5 * (b - a).cross(c - a).length())
        .sum()
}
