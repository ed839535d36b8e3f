//! Affine transformations for glyph meshes.
//!
//! Transforms are values composed with [`Transform3D::then`] and baked into
//! geometry with [`Transform3D::flatten_into`], so a mesh never carries a
//! live transform alongside its vertices.
//!
//! # Example
//!
//! ```
//! use mesh_transform::Transform3D;
//! use mesh_types::{unit_cube, MeshBounds};
//!
//! let mut cube = unit_cube();
//! Transform3D::uniform_scale(2.0).flatten_into(&mut cube);
//! assert!((cube.bounds().max.x - 2.0).abs() < 1e-12);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod transform;

pub use transform::Transform3D;
