//! # Unit Sphere
//!
//! Latitude/longitude tessellation of the unit sphere centered at the origin.
//!
//! ## Layout
//!
//! ```text
//! index 0                      north pole (0, 0, 1)
//! 1 + (lat - 1) * lon_n + lon  belt `lat` in 1..lat_n, column `lon`
//! last                         south pole (0, 0, -1)
//! ```
//!
//! Belts are parametrized by `θ = 2πu`, `φ = πv`. Columns wrap modulo the
//! longitudinal count, which closes the seam at `θ = 2π`.

use std::f64::consts::PI;

use glam::DVec3;
use tracing::debug;

use super::params::TessellationParameters;
use crate::mesh::Mesh;

/// Tessellates the unit sphere.
///
/// The mesh is watertight, every face is wound counter-clockwise when seen
/// from outside, and vertex normals are populated.
///
/// # Example
///
/// ```rust
/// use woodshop_geom::{tessellate_unit_sphere, TessellationParameters};
///
/// let mesh = tessellate_unit_sphere(&TessellationParameters::default());
/// // 10 slices, 12 belts: 2 * 10 * (12 - 1) triangles
/// assert_eq!(mesh.triangle_count(), 220);
/// assert!(mesh.normals().is_some());
/// ```
pub fn tessellate_unit_sphere(params: &TessellationParameters) -> Mesh {
    let grid = SphereGrid {
        lon_segments: params.longitudinal_segments(),
        lat_segments: params.latitudinal_segments(),
    };

    let mut mesh = Mesh::with_capacity(grid.vertex_count(), grid.triangle_count());
    grid.add_vertices(&mut mesh);
    grid.add_triangles(&mut mesh);
    mesh.recompute_normals();

    debug!(
        "Tessellated unit sphere: {} slices, {} belts, {} vertices, {} triangles",
        grid.lon_segments,
        grid.lat_segments,
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    mesh
}

/// Segment counts of one sphere tessellation.
struct SphereGrid {
    lon_segments: u32,
    lat_segments: u32,
}

impl SphereGrid {
    fn belt_vertices(&self) -> usize {
        (self.lat_segments as usize - 1).saturating_mul(self.lon_segments as usize)
    }

    fn vertex_count(&self) -> usize {
        self.belt_vertices().saturating_add(2)
    }

    fn triangle_count(&self) -> usize {
        self.belt_vertices().saturating_mul(2)
    }

    fn north(&self) -> u32 {
        0
    }

    fn south(&self) -> u32 {
        1 + (self.lat_segments - 1) * self.lon_segments
    }

    /// Vertex index of belt `lat`, column `lon`.
    ///
    /// `lat` at or beyond either pole collapses onto that pole; `lon` wraps.
    fn index_for(&self, lat: u32, lon: u32) -> u32 {
        if lat == 0 {
            return self.north();
        }
        if lat >= self.lat_segments {
            return self.south();
        }
        1 + (lat - 1) * self.lon_segments + lon % self.lon_segments
    }

    fn add_vertices(&self, mesh: &mut Mesh) {
        mesh.add_vertex(DVec3::Z);

        let lat_n = f64::from(self.lat_segments);
        let lon_n = f64::from(self.lon_segments);
        for lat in 1..self.lat_segments {
            let phi = PI * f64::from(lat) / lat_n;
            let (sin_phi, cos_phi) = phi.sin_cos();
            for lon in 0..self.lon_segments {
                let theta = 2.0 * PI * f64::from(lon) / lon_n;
                let (sin_theta, cos_theta) = theta.sin_cos();
                mesh.add_vertex(DVec3::new(sin_phi * cos_theta, sin_phi * sin_theta, cos_phi));
            }
        }

        mesh.add_vertex(DVec3::NEG_Z);
    }

    fn add_triangles(&self, mesh: &mut Mesh) {
        let last_belt = self.lat_segments - 1;

        // North cap
        for lon in 0..self.lon_segments {
            mesh.add_triangle(self.north(), self.index_for(1, lon), self.index_for(1, lon + 1));
        }

        // Interior belts
        for lat in 1..last_belt {
            for lon in 0..self.lon_segments {
                let v00 = self.index_for(lat, lon);
                let v01 = self.index_for(lat, lon + 1);
                let v10 = self.index_for(lat + 1, lon);
                let v11 = self.index_for(lat + 1, lon + 1);

                mesh.add_triangle(v00, v10, v11);
                mesh.add_triangle(v00, v11, v01);
            }
        }

        // South cap
        for lon in 0..self.lon_segments {
            mesh.add_triangle(
                self.index_for(last_belt, lon + 1),
                self.index_for(last_belt, lon),
                self.south(),
            );
        }
    }
}
