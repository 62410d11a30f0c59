//! # Cylinder
//!
//! Z-axis cylinder centered at the origin, spanning `z ∈ [-h/2, h/2]`.
//!
//! Ring 0 is the top ring and rings descend toward the bottom, so the belt
//! winding shared with the sphere makes every lateral face point outward.
//! Capped cylinders append the bottom center vertex, then the top center
//! vertex, and close each end with a fan.

use std::f64::consts::PI;

use config::constants::DEGENERATE_DIMENSION_EPSILON;
use glam::DVec3;
use tracing::debug;

use super::params::TessellationParameters;
use crate::mesh::Mesh;

/// Tessellates a cylinder of the given radius and height.
///
/// The radial segment count is the longitudinal count of `params`; the number
/// of rings along the axis comes from
/// [`TessellationParameters::height_segments`]. Non-positive dimensions are
/// clamped to a tiny positive value, yielding a degenerate but valid mesh.
/// Vertex normals are populated.
///
/// # Example
///
/// ```rust
/// use woodshop_geom::{tessellate_cylinder, TessellationParameters};
///
/// let mesh = tessellate_cylinder(0.75, 2.0, &TessellationParameters::default(), true);
/// let size = mesh.bounding_box().size();
/// assert!((size.z - 2.0).abs() < 1e-12);
/// ```
pub fn tessellate_cylinder(
    radius: f64,
    height: f64,
    params: &TessellationParameters,
    capped: bool,
) -> Mesh {
    let radius = clamp_dimension("radius", radius);
    let height = clamp_dimension("height", height);

    let radial = params.longitudinal_segments();
    let rings = params.height_segments(height).saturating_add(1);

    let (vertex_count, triangle_count) = element_counts(radial, rings, capped);
    let mut mesh = Mesh::with_capacity(vertex_count, triangle_count);

    let index_for = |ring: u32, column: u32| ring * radial + column % radial;

    // Rings, top to bottom
    let half = height / 2.0;
    for ring in 0..rings {
        let z = half - height * f64::from(ring) / f64::from(rings - 1);
        for column in 0..radial {
            let theta = 2.0 * PI * f64::from(column) / f64::from(radial);
            let (sin_theta, cos_theta) = theta.sin_cos();
            mesh.add_vertex(DVec3::new(radius * cos_theta, radius * sin_theta, z));
        }
    }

    // Lateral surface
    for ring in 0..rings - 1 {
        for column in 0..radial {
            let v00 = index_for(ring, column);
            let v01 = index_for(ring, column + 1);
            let v10 = index_for(ring + 1, column);
            let v11 = index_for(ring + 1, column + 1);

            mesh.add_triangle(v00, v10, v11);
            mesh.add_triangle(v00, v11, v01);
        }
    }

    if capped {
        let bottom = mesh.add_vertex(DVec3::new(0.0, 0.0, -half));
        let top = mesh.add_vertex(DVec3::new(0.0, 0.0, half));
        let last_ring = rings - 1;

        for column in 0..radial {
            mesh.add_triangle(top, index_for(0, column), index_for(0, column + 1));
        }
        for column in 0..radial {
            mesh.add_triangle(
                index_for(last_ring, column + 1),
                index_for(last_ring, column),
                bottom,
            );
        }
    }

    mesh.recompute_normals();

    debug!(
        "Tessellated cylinder r={} h={} capped={}: {} radial, {} rings, {} triangles",
        radius,
        height,
        capped,
        radial,
        rings,
        mesh.triangle_count()
    );

    mesh
}

/// Vertex and triangle counts of a cylinder with `radial` columns and `rings`
/// rings, saturating instead of overflowing.
fn element_counts(radial: u32, rings: u32, capped: bool) -> (usize, usize) {
    let radial = radial as usize;
    let rings = rings as usize;

    let vertices = rings.saturating_mul(radial);
    let triangles = rings.saturating_sub(1).saturating_mul(radial).saturating_mul(2);
    if capped {
        (vertices.saturating_add(2), triangles.saturating_add(radial.saturating_mul(2)))
    } else {
        (vertices, triangles)
    }
}

/// Replaces non-positive (or NaN) dimensions with a tiny positive value.
fn clamp_dimension(name: &str, value: f64) -> f64 {
    if value > 0.0 {
        value
    } else {
        debug!("Clamping cylinder {} {} to {}", name, value, DEGENERATE_DIMENSION_EPSILON);
        DEGENERATE_DIMENSION_EPSILON
    }
}
