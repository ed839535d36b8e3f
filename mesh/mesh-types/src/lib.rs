//! Core mesh types for glyph meshes.
//!
//! This crate provides the foundational types shared by the loader, the
//! component splitter and font assembly:
//!
//! - [`Vertex`] - A point in 3D space with a component group tag
//! - [`Edge`], [`Face`] - Index elements, each with a group tag
//! - [`IndexedMesh`] - The geometry container
//! - [`Triangle`] - A concrete triangle with vertex positions
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`. Font
//! assembly normalizes glyphs so one unit is the reference glyph height.
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system**:
//! - X: text direction (left/right)
//! - Y: up
//! - Z: depth (extrusion)
//!
//! Face winding is **counter-clockwise (CCW) when viewed from outside**.
//!
//! # Example
//!
//! ```
//! use mesh_types::{Vertex, IndexedMesh, MeshBounds, MeshTopology};
//!
//! let mut mesh = IndexedMesh::new();
//! let a = mesh.add_vertex(Vertex::from_coords(0.0, 0.0, 0.0));
//! let b = mesh.add_vertex(Vertex::from_coords(1.0, 0.0, 0.0));
//! let c = mesh.add_vertex(Vertex::from_coords(0.5, 1.0, 0.0));
//! mesh.add_triangle(a, b, c);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.bounds().is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod bounds;
mod element;
mod mesh;
mod traits;
mod triangle;
mod vertex;

// Re-export core types
pub use bounds::{Aabb, ParseAabbError};
pub use element::{Edge, Face};
pub use mesh::{cuboid, unit_cube, IndexedMesh, MeshProperties, SubsetError};
pub use traits::{MeshBounds, MeshTopology};
pub use triangle::Triangle;
pub use vertex::{Vertex, VertexAttributes};

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix4, Point3, Vector3};
