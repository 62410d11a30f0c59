//! # Woodshop Geometry
//!
//! Mesh kernel for the woodshop engine: tolerance-driven tessellation of
//! analytic primitives plus the metrics a host reports back.
//!
//! ## Architecture
//!
//! ```text
//! TessellationParameters ─┐
//!                         ├─> tessellate ─> Mesh ─> metrics (normals, AABB, area)
//! Primitive ──────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`mesh`]: indexed triangle mesh with optional per-vertex normals
//! - [`metrics`]: area-weighted normals, bounding box, surface area
//! - [`aabb`]: axis-aligned boxes and their volume arithmetic
//! - [`tessellate`]: unit sphere and cylinder generators
//! - [`vec3`]: vector helpers over `glam::DVec3`
//!
//! ## Usage
//!
//! ```rust
//! use woodshop_geom::{tessellate_cylinder, MeshSummary, TessellationParameters};
//!
//! let params = TessellationParameters::default().with_linear_deflection(0.25);
//! let mesh = tessellate_cylinder(0.75, 2.0, &params, true);
//! let summary = MeshSummary::of(&mesh);
//! assert_eq!(summary.triangle_count, mesh.triangle_count());
//! ```

pub mod aabb;
pub mod error;
pub mod mesh;
pub mod metrics;
pub mod tessellate;
pub mod vec3;

pub use aabb::Aabb;
pub use error::{GeomError, GeomResult};
pub use mesh::Mesh;
pub use tessellate::{
    tessellate, tessellate_cylinder, tessellate_many, tessellate_unit_sphere, MeshSummary,
    Primitive, TessellationParameters,
};
pub use vec3::Vec3;
