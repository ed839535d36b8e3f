//! 3D glyph fonts from glyph mesh files.
//!
//! This umbrella crate re-exports the mesh-* crates behind the font
//! pipeline and provides [`load_fonts`], which runs all of it: load the
//! edge-indexed mesh, label its connected components, split them into
//! groups and assemble one font per row.
//!
//! # Quick Start
//!
//! ```no_run
//! use meshfont::prelude::*;
//!
//! let fonts = load_fonts("glyphs.txt", "0123456789", 1, &FontParams::default()).unwrap();
//! let font = &fonts[0];
//!
//! let mut soup = TriangleSoup::new();
//! font.paint("2048", &mut soup);
//! let offset = font.gap_center("2048");
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Core data structures: `IndexedMesh`, `Vertex`, `Aabb`
//! - [`io`] - Edge-indexed mesh file format
//! - [`transform`] - Affine transforms baked into geometry
//! - [`split`] - Component labeling and per-group splitting
//! - [`font`] - Font assembly, glyphs and text queries
//!
//! # Feature Flags
//!
//! - `serde` - Serialize bounds, meshes and font parameters

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod error;
mod pipeline;

pub use error::{Error, Result};
pub use pipeline::{fonts_from_mesh, load_fonts};

/// Core data structures: `IndexedMesh`, `Vertex`, `Triangle`, `Aabb`.
pub use mesh_types as types;

/// Edge-indexed mesh loading and saving.
pub use mesh_io as io;

/// Affine transforms.
pub use mesh_transform as transform;

/// Component labeling and splitting.
pub use mesh_split as split;

/// Font assembly and text queries.
pub use mesh_font as font;

pub use mesh_font::{Font, FontParams};

/// Common imports for building and using fonts.
///
/// # Usage
///
/// ```
/// use meshfont::prelude::*;
/// ```
pub mod prelude {
    pub use mesh_types::{Aabb, IndexedMesh, MeshBounds, MeshTopology, Vertex};

    pub use mesh_io::{load_edge_mesh, save_edge_mesh};

    pub use mesh_split::{label_components, split_by_group, MeshGroup};

    pub use mesh_font::{
        assemble_fonts, Font, FontParams, Glyph, GlyphPainter, TriangleSoup,
    };

    pub use crate::{load_fonts, Error};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_imports() {
        use prelude::*;

        let mesh = IndexedMesh::new();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn test_module_reexports() {
        let _ = types::IndexedMesh::new();
        let _ = font::FontParams::default();
        let _ = transform::Transform3D::identity();
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = font::FontError::EmptyCodepoints.into();
        assert!(matches!(err, Error::Font(_)));
        assert_eq!(err.to_string(), "codepoint list is empty");
    }
}
