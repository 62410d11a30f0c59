//! # Mesh Data Structure
//!
//! Core mesh representation with vertices, triangles, and optional normals.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::aabb::Aabb;
use crate::error::{GeomError, GeomResult};
use crate::metrics;

/// A triangle mesh with vertices, indices and optional per-vertex normals.
///
/// Vertex insertion order is the canonical index order. Each triangle is one
/// index triplet; indices are not required to be in range; metric
/// computation skips triangles that reference missing vertices. Normals,
/// when present, always match the vertex count.
///
/// # Example
///
/// ```rust
/// use woodshop_geom::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.index_count(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MeshData")]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Optional vertex normals
    normals: Option<Vec<DVec3>>,
}

/// Unchecked wire form of [`Mesh`].
#[derive(Deserialize)]
struct MeshData {
    vertices: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
    #[serde(default)]
    normals: Option<Vec<DVec3>>,
}

impl TryFrom<MeshData> for Mesh {
    type Error = GeomError;

    fn try_from(data: MeshData) -> GeomResult<Self> {
        let mut mesh = Mesh::from_parts(data.vertices, data.triangles);
        if let Some(normals) = data.normals {
            mesh.set_normals(normals)?;
        }
        Ok(mesh)
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            normals: None,
        }
    }

    /// Creates a mesh without normals from existing buffers.
    pub fn from_parts(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            triangles,
            normals: None,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the number of indices (three per triangle).
    #[inline]
    pub fn index_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    ///
    /// Normals no longer match the vertex count afterwards, so they are
    /// dropped.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.normals = None;
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the flattened index list `[a0, b0, c0, a1, b1, c1, ...]`.
    pub fn indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Iterates over triangles whose three indices name existing vertices,
    /// yielding the corner positions.
    ///
    /// Out-of-range triangles are skipped silently.
    pub fn valid_triangles(&self) -> impl Iterator<Item = ([usize; 3], [DVec3; 3])> + '_ {
        self.triangles.iter().filter_map(|tri| {
            let ids = tri.map(|i| i as usize);
            let corners = [
                *self.vertices.get(ids[0])?,
                *self.vertices.get(ids[1])?,
                *self.vertices.get(ids[2])?,
            ];
            Some((ids, corners))
        })
    }

    /// Sets vertex normals.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::NormalCountMismatch`] when `normals` does not
    /// have exactly one entry per vertex.
    pub fn set_normals(&mut self, normals: Vec<DVec3>) -> GeomResult<()> {
        if normals.len() != self.vertices.len() {
            return Err(GeomError::NormalCountMismatch {
                normals: normals.len(),
                vertices: self.vertices.len(),
            });
        }
        self.normals = Some(normals);
        Ok(())
    }

    /// Returns the vertex normals.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Returns true if per-vertex normals are present.
    #[inline]
    pub fn has_normals(&self) -> bool {
        self.normals.is_some()
    }

    /// Drops the vertex normals.
    pub fn clear_normals(&mut self) {
        self.normals = None;
    }

    /// Computes and stores area-weighted vertex normals.
    pub fn recompute_normals(&mut self) {
        self.normals = Some(metrics::compute_normals(self));
    }

    /// Computes the axis-aligned bounding box.
    pub fn bounding_box(&self) -> Aabb {
        metrics::compute_aabb(self)
    }

    /// Computes the total area of all valid triangles.
    pub fn surface_area(&self) -> f64 {
        metrics::surface_area(self)
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No triangle repeats a vertex
    /// - No zero-area triangles
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len();

        self.triangles.iter().all(|tri| {
            if tri.iter().any(|&i| i as usize >= vertex_count) {
                return false;
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }
            let [v0, v1, v2] = tri.map(|i| self.vertices[i as usize]);
            (v1 - v0).cross(v2 - v0).length() > 0.0
        })
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        flatten_f32(&self.vertices)
    }

    /// Exports triangle indices as u32 array for GPU.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.indices()
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_deref().map(flatten_f32)
    }
}

fn flatten_f32(values: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len() * 3);
    for v in values {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}
