//! 3D glyph fonts assembled from glyph meshes.
//!
//! An artist models every glyph of one or more fonts as disjoint solids in
//! a single mesh: glyphs left to right in codepoint order, one font per
//! row, rows stacked downwards one unit apart. Given the split groups of
//! that mesh, [`assemble_fonts`] produces one [`Font`] per row mapping
//! codepoints to normalized glyph geometry.
//!
//! Groups that overlap the preceding glyph horizontally (the dot of an
//! `i`, the inside of an `O` modeled separately) are merged into it.
//! Whitespace codepoints get blank glyphs.
//!
//! # Example
//!
//! ```
//! use mesh_font::{assemble_fonts, FontParams, TriangleSoup};
//! use mesh_split::MeshGroup;
//! use mesh_types::{cuboid, Point3};
//!
//! let groups: Vec<MeshGroup> = [0.0, 1.0, 2.0]
//!     .iter()
//!     .map(|&x| MeshGroup::new(cuboid(Point3::new(x, 0.0, 0.0), Point3::new(x + 0.5, 0.5, 0.1))))
//!     .collect();
//!
//! let fonts = assemble_fonts(&groups, &['a', 'b', 'c'], 1, &FontParams::default()).unwrap();
//! let font = &fonts[0];
//!
//! let mut soup = TriangleSoup::new();
//! font.paint("cab", &mut soup);
//! assert_eq!(soup.triangles().len(), 36);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod assemble;
mod error;
mod font;
mod glyph;
mod params;
mod text;

pub use assemble::assemble_fonts;
pub use error::{FontError, FontResult};
pub use font::{Font, GlyphPainter, PlacedGlyph, TriangleSoup};
pub use glyph::Glyph;
pub use params::FontParams;
pub use text::{decode_codepoints, decode_codepoints_strict};
