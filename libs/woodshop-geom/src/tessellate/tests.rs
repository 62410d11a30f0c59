//! Tessellation engine tests.

use std::collections::HashMap;
use std::f64::consts::PI;

use approx::assert_relative_eq;
use glam::DVec3;
use proptest::prelude::*;

use super::*;

/// Asserts every directed edge is matched by exactly one reversed edge, i.e.
/// the mesh is closed and consistently wound.
fn assert_watertight(mesh: &Mesh) {
    let mut directed: HashMap<(u32, u32), usize> = HashMap::new();
    for &[a, b, c] in mesh.triangles() {
        for edge in [(a, b), (b, c), (c, a)] {
            *directed.entry(edge).or_default() += 1;
        }
    }
    for (&(from, to), &count) in &directed {
        assert_eq!(count, 1, "edge {from}->{to} used {count} times");
        assert_eq!(
            directed.get(&(to, from)),
            Some(&1),
            "edge {from}->{to} has no opposite"
        );
    }
}

fn assert_unit_normals(mesh: &Mesh) {
    let normals = mesh.normals().expect("engine output carries normals");
    assert_eq!(normals.len(), mesh.vertex_count());
    for n in normals {
        assert!((n.length() - 1.0).abs() < 1e-9, "normal {n} not unit length");
    }
}

fn coarse() -> TessellationParameters {
    TessellationParameters::default()
        .with_linear_deflection(2.0)
        .with_angular_deflection_deg(30.0)
}

fn fine() -> TessellationParameters {
    TessellationParameters::default()
        .with_linear_deflection(0.1)
        .with_angular_deflection_deg(5.0)
}

// =============================================================================
// SPHERE
// =============================================================================

#[test]
fn test_sphere_default_counts() {
    let mesh = tessellate_unit_sphere(&TessellationParameters::default());
    // 10 slices, 12 belts
    assert_eq!(mesh.vertex_count(), 2 + 11 * 10);
    assert_eq!(mesh.triangle_count(), 2 * 10 * 11);
    assert!(mesh.validate());
}

#[test]
fn test_sphere_poles() {
    let mesh = tessellate_unit_sphere(&TessellationParameters::default());
    assert_eq!(mesh.vertex(0), DVec3::Z);
    assert_eq!(mesh.vertex(mesh.vertex_count() as u32 - 1), DVec3::NEG_Z);
}

#[test]
fn test_sphere_vertices_on_unit_sphere() {
    let mesh = tessellate_unit_sphere(&fine());
    for v in mesh.vertices() {
        assert_relative_eq!(v.length(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_sphere_seam_wraps_to_first_column() {
    let mesh = tessellate_unit_sphere(&TessellationParameters::default());
    // The last north-cap triangle closes onto column 0 of belt 1.
    assert_eq!(mesh.triangle(9), [0, 10, 1]);
    // No index points past the south pole: the seam reuses existing columns.
    let south = mesh.vertex_count() as u32 - 1;
    assert!(mesh.triangles().iter().flatten().all(|&i| i <= south));
}

#[test]
fn test_sphere_is_watertight() {
    for params in [coarse(), TessellationParameters::default(), fine()] {
        assert_watertight(&tessellate_unit_sphere(&params));
    }
}

#[test]
fn test_sphere_minimal_belts_is_watertight() {
    let params = TessellationParameters::default().with_angular_deflection_deg(170.0);
    assert_eq!(params.latitudinal_segments(), 2);
    let mesh = tessellate_unit_sphere(&params);
    assert_eq!(mesh.triangle_count(), 2 * 10);
    assert_watertight(&mesh);
}

#[test]
fn test_sphere_faces_point_outward() {
    let mesh = tessellate_unit_sphere(&TessellationParameters::default());
    for (_, [a, b, c]) in mesh.valid_triangles() {
        let centroid = (a + b + c) / 3.0;
        assert!((b - a).cross(c - a).dot(centroid) > 0.0);
    }
}

#[test]
fn test_sphere_normals_are_radial() {
    let params = TessellationParameters::default()
        .with_linear_deflection(0.4)
        .with_angular_deflection_deg(12.0);
    let mesh = tessellate_unit_sphere(&params);
    assert_unit_normals(&mesh);
    let normals = mesh.normals().unwrap_or_default();
    for (v, n) in mesh.vertices().iter().zip(normals) {
        assert!(v.normalize().dot(*n) > 0.99);
    }
}

#[test]
fn test_sphere_default_surface_area() {
    let area = tessellate_unit_sphere(&TessellationParameters::default()).surface_area();
    assert!(area > 12.0 && area < 13.5, "area = {area}");
    assert!(area < 4.0 * PI);
}

#[test]
fn test_sphere_area_converges() {
    let coarse_area = tessellate_unit_sphere(&coarse()).surface_area();
    let fine_area = tessellate_unit_sphere(&fine()).surface_area();
    assert!(fine_area > coarse_area);
    assert!((4.0 * PI - fine_area) / (4.0 * PI) < 0.02);
}

#[test]
fn test_sphere_bounding_box() {
    let size = tessellate_unit_sphere(&TessellationParameters::default())
        .bounding_box()
        .size();
    assert!(size.x > 1.9 && size.x < 2.1);
    assert!(size.y > 1.9 && size.y < 2.1);
    assert_relative_eq!(size.z, 2.0);
}

#[test]
fn test_coarse_sphere_has_fewer_triangles() {
    let coarse_mesh = tessellate_unit_sphere(&coarse());
    let fine_mesh = tessellate_unit_sphere(&fine());
    assert_eq!(coarse_mesh.triangle_count(), 80);
    assert_eq!(fine_mesh.triangle_count(), 1400);
    assert!(coarse_mesh.triangle_count() < fine_mesh.triangle_count());
}

// =============================================================================
// CYLINDER
// =============================================================================

#[test]
fn test_cylinder_default_counts() {
    let mesh = tessellate_cylinder(1.0, 2.0, &TessellationParameters::default(), true);
    // 10 columns, 4 height segments -> 5 rings, plus two centers
    assert_eq!(mesh.vertex_count(), 5 * 10 + 2);
    assert_eq!(mesh.triangle_count(), 2 * 4 * 10 + 2 * 10);
    assert!(mesh.validate());
    assert_watertight(&mesh);
}

#[test]
fn test_cylinder_centers() {
    let mesh = tessellate_cylinder(1.0, 2.0, &TessellationParameters::default(), true);
    let n = mesh.vertex_count() as u32;
    assert_eq!(mesh.vertex(n - 2), DVec3::new(0.0, 0.0, -1.0));
    assert_eq!(mesh.vertex(n - 1), DVec3::new(0.0, 0.0, 1.0));
    let normals = mesh.normals().unwrap_or_default();
    assert!(normals[n as usize - 2].abs_diff_eq(DVec3::NEG_Z, 1e-12));
    assert!(normals[n as usize - 1].abs_diff_eq(DVec3::Z, 1e-12));
}

#[test]
fn test_uncapped_cylinder_is_open_tube() {
    let mesh = tessellate_cylinder(1.0, 2.0, &TessellationParameters::default(), false);
    assert_eq!(mesh.vertex_count(), 5 * 10);
    assert_eq!(mesh.triangle_count(), 2 * 4 * 10);
    assert_unit_normals(&mesh);
    // Lateral normals are horizontal and radial.
    for (v, n) in mesh.vertices().iter().zip(mesh.normals().unwrap_or_default()) {
        assert!(n.z.abs() < 1e-9);
        assert!(DVec3::new(v.x, v.y, 0.0).normalize().dot(*n) > 0.99);
    }
}

#[test]
fn test_cylinder_metrics() {
    let params = TessellationParameters::default()
        .with_linear_deflection(0.25)
        .with_angular_deflection_deg(10.0)
        .with_segment_range(12, 512);
    let (radius, height) = (0.75, 2.0);
    let mesh = tessellate_cylinder(radius, height, &params, true);
    assert!(mesh.triangle_count() > 0);
    assert_unit_normals(&mesh);
    assert_watertight(&mesh);

    let size = mesh.bounding_box().size();
    assert!(size.x > radius * 1.9 && size.x < radius * 2.1);
    assert!(size.y > radius * 1.9 && size.y < radius * 2.1);
    assert!(size.z > height * 0.99 && size.z < height * 1.01);

    let expected = 2.0 * PI * radius * (radius + height);
    assert!((mesh.surface_area() - expected).abs() / expected < 0.2);
}

#[test]
fn test_cylinder_faces_point_outward() {
    let mesh = tessellate_cylinder(1.0, 3.0, &TessellationParameters::default(), true);
    for (_, [a, b, c]) in mesh.valid_triangles() {
        let centroid = (a + b + c) / 3.0;
        assert!((b - a).cross(c - a).dot(centroid) > 0.0);
    }
}

#[test]
fn test_cylinder_degenerate_dimensions_are_clamped() {
    let mesh = tessellate_cylinder(-1.0, 0.0, &TessellationParameters::default(), true);
    assert!(mesh.vertex_count() > 0);
    assert_unit_normals(&mesh);
    let size = mesh.bounding_box().size();
    assert!(size.x <= 2e-6 && size.x > 0.0);
    assert!(size.z <= 1e-6 && size.z > 0.0);
}

#[test]
fn test_cylinder_nan_dimensions_are_clamped() {
    let mesh = tessellate_cylinder(f64::NAN, f64::NAN, &TessellationParameters::default(), false);
    assert!(mesh.vertices().iter().all(|v| v.is_finite()));
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

#[test]
fn test_tessellate_dispatch() {
    let params = TessellationParameters::default();
    assert_eq!(
        tessellate(&Primitive::UnitSphere, &params),
        tessellate_unit_sphere(&params)
    );
    let cylinder = Primitive::Cylinder {
        radius: 0.5,
        height: 1.0,
        capped: false,
    };
    assert_eq!(
        tessellate(&cylinder, &params),
        tessellate_cylinder(0.5, 1.0, &params, false)
    );
}

#[test]
fn test_tessellate_many_preserves_order() {
    let params = TessellationParameters::default();
    let primitives = [
        Primitive::Cylinder {
            radius: 1.0,
            height: 4.0,
            capped: true,
        },
        Primitive::UnitSphere,
        Primitive::Cylinder {
            radius: 2.0,
            height: 1.0,
            capped: false,
        },
    ];
    let meshes = tessellate_many(&primitives, &params);
    assert_eq!(meshes.len(), 3);
    for (primitive, mesh) in primitives.iter().zip(&meshes) {
        assert_eq!(*mesh, tessellate(primitive, &params));
    }
}

#[test]
fn test_primitive_from_json() {
    let primitive: Primitive =
        serde_json::from_str(r#"{ "kind": "cylinder", "radius": 1.5, "height": 2.0, "capped": true }"#)
            .unwrap();
    assert_eq!(
        primitive,
        Primitive::Cylinder {
            radius: 1.5,
            height: 2.0,
            capped: true
        }
    );
    let sphere: Primitive = serde_json::from_str(r#"{ "kind": "unitSphere" }"#).unwrap();
    assert_eq!(sphere, Primitive::UnitSphere);
}

#[test]
fn test_mesh_summary() {
    let mesh = tessellate_unit_sphere(&TessellationParameters::default());
    let summary = MeshSummary::of(&mesh);
    assert_eq!(summary.vertex_count, 112);
    assert_eq!(summary.triangle_count, 220);
    assert_eq!(summary.surface_area, mesh.surface_area());
    assert_eq!(summary.bounding_box, mesh.bounding_box());
}

// =============================================================================
// MONOTONICITY
// =============================================================================

proptest! {
    #[test]
    fn proptest_sphere_triangles_monotonic(
        linear in 0.001f64..5.0,
        linear_scale in 1.0f64..10.0,
        angular in 0.5f64..90.0,
        angular_scale in 1.0f64..4.0,
    ) {
        let tight = TessellationParameters::default()
            .with_linear_deflection(linear)
            .with_angular_deflection_deg(angular);
        let loose = TessellationParameters::default()
            .with_linear_deflection(linear * linear_scale)
            .with_angular_deflection_deg(angular * angular_scale);
        prop_assert!(
            tessellate_unit_sphere(&tight).triangle_count()
                >= tessellate_unit_sphere(&loose).triangle_count()
        );
    }

    #[test]
    fn proptest_cylinder_triangles_monotonic(
        linear in 0.01f64..5.0,
        linear_scale in 1.0f64..10.0,
        radius in 0.1f64..3.0,
        height in 0.1f64..10.0,
    ) {
        let tight = TessellationParameters::default().with_linear_deflection(linear);
        let loose = tight.with_linear_deflection(linear * linear_scale);
        prop_assert!(
            tessellate_cylinder(radius, height, &tight, true).triangle_count()
                >= tessellate_cylinder(radius, height, &loose, true).triangle_count()
        );
    }
}
