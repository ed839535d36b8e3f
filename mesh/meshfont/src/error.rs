//! Unified error type for the font pipeline.

use thiserror::Error;

/// Result type for the font pipeline.
pub type Result<T> = std::result::Result<T, Error>;

/// Any failure while turning a glyph mesh file into fonts.
#[derive(Debug, Error)]
pub enum Error {
    /// The mesh file could not be read or parsed.
    #[error(transparent)]
    Io(#[from] mesh_io::IoError),

    /// Component tags are inconsistent with the mesh.
    #[error(transparent)]
    Split(#[from] mesh_split::SplitError),

    /// The glyph groups do not form a valid font.
    #[error(transparent)]
    Font(#[from] mesh_font::FontError),
}
