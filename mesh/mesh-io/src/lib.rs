//! Mesh file I/O for glyph meshes.
//!
//! Glyph sources are stored in an edge-indexed text format: vertices,
//! then edges as vertex pairs, then triangles as edge triples. See
//! [`parse_edge_mesh`] for the layout and the rules used to recover
//! triangle winding from unordered edges.
//!
//! Loaded meshes are finished, so face and vertex normals are populated
//! and every element carries group tag 0 until components are labelled.
//!
//! # Example
//!
//! ```no_run
//! use mesh_io::{load_edge_mesh, save_edge_mesh};
//!
//! let mesh = load_edge_mesh("glyphs.txt").unwrap();
//! save_edge_mesh(&mesh, "copy.txt").unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod edge;
mod error;

pub use edge::{
    load_edge_mesh, orient_edges, parse_edge_mesh, read_edge_mesh, save_edge_mesh,
    write_edge_mesh,
};
pub use error::{IoError, IoResult, Section};
