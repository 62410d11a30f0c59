//! Named meshes and the round-trip comparator.

use serde::{Deserialize, Serialize};
use woodshop_geom::vec3::distance;
use woodshop_geom::Mesh;

/// A mesh together with the name it is persisted under.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshModel {
    /// Free-form model name. Must not contain line breaks to survive a round
    /// trip.
    pub name: String,
    /// The geometry.
    pub mesh: Mesh,
}

impl MeshModel {
    /// Creates a named model.
    pub fn new(name: impl Into<String>, mesh: Mesh) -> Self {
        Self {
            name: name.into(),
            mesh,
        }
    }

    /// Recomputes vertex normals when the mesh has none.
    ///
    /// IGES-like files never carry normals, so callers run this after
    /// [`load_iges`](crate::load_iges) when they need them.
    pub fn ensure_normals(&mut self) {
        if !self.mesh.has_normals() {
            self.mesh.recompute_normals();
        }
    }
}

/// Largest distance between same-index vertices of two models.
///
/// Returns `f64::INFINITY` when the vertex counts differ, and `0.0` for two
/// empty meshes.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use woodshop_geom::Mesh;
/// use woodshop_io::{max_vertex_distance, MeshModel};
///
/// let a = MeshModel::new("a", Mesh::from_parts(vec![DVec3::ZERO], vec![]));
/// let b = MeshModel::new("b", Mesh::from_parts(vec![DVec3::new(0.0, 3.0, 4.0)], vec![]));
/// assert_eq!(max_vertex_distance(&a, &b), 5.0);
/// ```
pub fn max_vertex_distance(a: &MeshModel, b: &MeshModel) -> f64 {
    if a.mesh.vertex_count() != b.mesh.vertex_count() {
        return f64::INFINITY;
    }
    a.mesh
        .vertices()
        .iter()
        .zip(b.mesh.vertices())
        .map(|(&va, &vb)| distance(va, vb))
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn triangle() -> Mesh {
        Mesh::from_parts(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![[0, 1, 2]])
    }

    #[test]
    fn identical_models_have_zero_distance() {
        let a = MeshModel::new("a", triangle());
        assert_eq!(max_vertex_distance(&a, &a.clone()), 0.0);
    }

    #[test]
    fn distance_is_maximum_over_vertices() {
        let a = MeshModel::new("a", triangle());
        let mut moved = triangle().vertices().to_vec();
        moved[1].x += 0.25;
        moved[2].z -= 0.5;
        let b = MeshModel::new("b", Mesh::from_parts(moved, vec![[0, 1, 2]]));
        assert_eq!(max_vertex_distance(&a, &b), 0.5);
    }

    #[test]
    fn count_mismatch_is_infinite() {
        let a = MeshModel::new("a", triangle());
        let b = MeshModel::new("b", Mesh::new());
        assert_eq!(max_vertex_distance(&a, &b), f64::INFINITY);
        assert_eq!(max_vertex_distance(&b, &b), 0.0);
    }

    #[test]
    fn ensure_normals_fills_missing_normals() {
        let mut model = MeshModel::new("t", triangle());
        assert!(!model.mesh.has_normals());
        model.ensure_normals();
        assert_eq!(model.mesh.normals(), Some(&[DVec3::Z; 3][..]));
    }

    #[test]
    fn deserialize_rejects_mismatched_normals() {
        let json = r#"{
            "name": "bad",
            "mesh": {
                "vertices": [[0, 0, 0], [1, 0, 0], [0, 1, 0]],
                "triangles": [[0, 1, 2]],
                "normals": [[0, 0, 1]]
            }
        }"#;
        assert!(serde_json::from_str::<MeshModel>(json).is_err());
    }

    #[test]
    fn deserialize_round_trip() {
        let mut model = MeshModel::new("t", triangle());
        model.ensure_normals();
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(serde_json::from_str::<MeshModel>(&json).unwrap(), model);
    }

    #[test]
    fn ensure_normals_keeps_existing_normals() {
        let mut mesh = triangle();
        mesh.set_normals(vec![DVec3::X; 3]).unwrap();
        let mut model = MeshModel::new("t", mesh);
        model.ensure_normals();
        assert_eq!(model.mesh.normals(), Some(&[DVec3::X; 3][..]));
    }
}
