//! File to fonts, end to end.

use std::path::Path;

use mesh_font::{assemble_fonts, Font, FontParams};
use mesh_io::load_edge_mesh;
use mesh_split::{label_components, split_by_group};
use mesh_types::IndexedMesh;
use tracing::info;

use crate::error::Result;

/// Load an edge-indexed glyph mesh and assemble `rows` fonts from it.
///
/// `codepoints` lists the characters of each row in modeling order.
///
/// # Errors
///
/// Returns the first failure of loading, splitting or assembly.
///
/// # Example
///
/// ```no_run
/// use meshfont::{load_fonts, FontParams};
///
/// let fonts = load_fonts("font.txt", "ABC abc", 2, &FontParams::default()).unwrap();
/// let width = fonts[0].size("Cab").size_x();
/// ```
pub fn load_fonts<P: AsRef<Path>>(
    path: P,
    codepoints: &str,
    rows: usize,
    params: &FontParams,
) -> Result<Vec<Font>> {
    let path = path.as_ref();
    let mesh = load_edge_mesh(path)?;
    let fonts = fonts_from_mesh(mesh, codepoints, rows, params)?;
    info!(path = %path.display(), fonts = fonts.len(), "Loaded fonts");
    Ok(fonts)
}

/// Assemble fonts from a glyph mesh already in memory.
///
/// Any existing group tags are replaced by connected components.
///
/// # Errors
///
/// Returns the first failure of splitting or assembly.
pub fn fonts_from_mesh(
    mut mesh: IndexedMesh,
    codepoints: &str,
    rows: usize,
    params: &FontParams,
) -> Result<Vec<Font>> {
    label_components(&mut mesh);
    let groups = split_by_group(&mesh)?;
    let codepoints: Vec<char> = codepoints.chars().collect();
    Ok(assemble_fonts(&groups, &codepoints, rows, params)?)
}
