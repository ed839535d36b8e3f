//! Building fonts from split glyph groups.
//!
//! The source mesh stacks one font per row along -Y, each row holding its
//! glyphs left to right in codepoint order. Assembly runs per row:
//!
//! 1. select the groups whose vertical center lies in the row's band
//! 2. walk them in order, assigning codepoints and merging groups that
//!    overlap the previous glyph into it
//! 3. anchor each glyph at its left edge on the row baseline
//! 4. measure the reference glyphs
//! 5. scale everything to unit reference height and bake the transform
//!    into the geometry

use mesh_split::MeshGroup;
use mesh_transform::Transform3D;
use mesh_types::{Aabb, Vector3};
use tracing::{debug, info};

use crate::error::{FontError, FontResult};
use crate::font::Font;
use crate::glyph::Glyph;
use crate::params::FontParams;

/// Whether a codepoint is drawn, as opposed to space or control.
#[inline]
const fn is_printable(codepoint: char) -> bool {
    codepoint > ' '
}

/// Assemble one font per row from split glyph groups.
///
/// `groups` must be in modeling order, which for meshes labelled by
/// [`mesh_split::label_components`] is the order of first vertex in the
/// file. Groups without vertices are ignored.
///
/// # Errors
///
/// - [`FontError::EmptyCodepoints`] for an empty codepoint list
/// - [`FontError::NonPrintableBoundary`] if the list starts or ends with a
///   non-printable codepoint
/// - [`FontError::EmptyRow`] if a row has no groups
/// - [`FontError::TooFewCodepoints`] if a row has more glyphs than
///   codepoints
/// - [`FontError::TooManyCodepoints`] if
///   [`require_all_codepoints`](FontParams::require_all_codepoints) is set
///   and a row leaves printable codepoints unmatched
/// - [`FontError::DegenerateMetrics`] if the reference glyphs have no
///   height
pub fn assemble_fonts(
    groups: &[MeshGroup],
    codepoints: &[char],
    rows: usize,
    params: &FontParams,
) -> FontResult<Vec<Font>> {
    validate_codepoints(codepoints)?;

    let fonts = (0..rows)
        .map(|row| assemble_row(groups, codepoints, row, params))
        .collect::<FontResult<Vec<_>>>()?;

    info!(
        rows,
        groups = groups.len(),
        codepoints = codepoints.len(),
        "Assembled fonts"
    );
    Ok(fonts)
}

fn validate_codepoints(codepoints: &[char]) -> FontResult<()> {
    let (Some(&first), Some(&last)) = (codepoints.first(), codepoints.last()) else {
        return Err(FontError::EmptyCodepoints);
    };
    if !is_printable(first) {
        return Err(FontError::NonPrintableBoundary {
            codepoint: first,
            position: 0,
        });
    }
    if !is_printable(last) {
        return Err(FontError::NonPrintableBoundary {
            codepoint: last,
            position: codepoints.len() - 1,
        });
    }
    Ok(())
}

/// Groups of one row, in their original order.
fn row_members<'a>(
    groups: &'a [MeshGroup],
    row: usize,
    params: &FontParams,
) -> Vec<&'a MeshGroup> {
    let limit = params.row_limit(row);
    let floor = limit - params.font_distance;
    groups
        .iter()
        .filter(|g| !g.bounds.is_empty())
        .filter(|g| {
            let center = g.bounds.center().y;
            center > floor && center <= limit
        })
        .collect()
}

fn assemble_row(
    groups: &[MeshGroup],
    codepoints: &[char],
    row: usize,
    params: &FontParams,
) -> FontResult<Font> {
    let members = row_members(groups, row, params);
    let mut font = match_codepoints(&members, codepoints, row, params)?;

    let translations = anchor(&mut font, params);
    let (scale, ascent, descent) = measure(&font, params, row)?;
    font.set_metrics(ascent, descent);

    let scale = Transform3D::uniform_scale(scale);
    for (codepoint, offset) in translations {
        if let Some(glyph) = font.glyph_mut(codepoint) {
            // bounds were anchored already, the mesh was not
            Transform3D::from_translation(offset)
                .then(&scale)
                .flatten_into(&mut glyph.mesh);
            glyph.bounds = scale.apply_to_aabb(&glyph.bounds);
        }
    }

    info!(
        row,
        glyphs = font.len(),
        ascent,
        descent,
        "Assembled font row"
    );
    Ok(font)
}

/// Assign the row's groups to codepoints, merging continuation groups.
///
/// Glyph bounds are left in source coordinates.
fn match_codepoints(
    members: &[&MeshGroup],
    codepoints: &[char],
    row: usize,
    params: &FontParams,
) -> FontResult<Font> {
    let Some((first, rest)) = members.split_first() else {
        return Err(FontError::EmptyRow { row });
    };

    let mut font = Font::new(codepoints.to_vec(), params.glyph_distance);
    let mut cursor = 0;
    let mut current = Glyph::from_group(first);

    for group in rest {
        let overlap = current.overlap(&group.bounds);
        if overlap > params.merge_threshold {
            debug!(
                row,
                codepoint = %codepoints[cursor],
                overlap,
                "Merging group into previous glyph"
            );
            current.absorb(group);
            continue;
        }

        let previous_bounds = current.bounds;
        font.insert(codepoints[cursor], current);

        cursor += 1;
        while codepoints
            .get(cursor)
            .is_some_and(|&c| !is_printable(c))
        {
            debug!(row, codepoint = ?codepoints[cursor], "Inserting blank glyph");
            font.insert(codepoints[cursor], Glyph::blank(previous_bounds));
            cursor += 1;
        }
        if cursor >= codepoints.len() {
            return Err(FontError::TooFewCodepoints {
                row,
                groups: members.len(),
                codepoints: codepoints.len(),
            });
        }
        current = Glyph::from_group(group);
    }
    font.insert(codepoints[cursor], current);

    if params.require_all_codepoints {
        if let Some(&next) = codepoints[cursor + 1..].iter().find(|&&c| is_printable(c)) {
            return Err(FontError::TooManyCodepoints {
                row,
                matched: cursor + 1,
                codepoints: codepoints.len(),
                next,
            });
        }
    }

    Ok(font)
}

/// Move each glyph's bounds so its left edge sits at `x = 0` and the row
/// baseline at `y = 0`, returning the translation applied per codepoint.
fn anchor(font: &mut Font, params: &FontParams) -> Vec<(char, Vector3<f64>)> {
    let mut translations = Vec::with_capacity(font.len());
    let order: Vec<char> = font.glyphs().map(|(c, _)| c).collect();
    for codepoint in order {
        if let Some(glyph) = font.glyph_mut(codepoint) {
            let b = glyph.bounds;
            let anchor_y = (b.center().y - params.font_lowline - 0.5).round();
            let offset = Vector3::new(-b.min.x, -anchor_y, 0.0);
            glyph.bounds = b.translated(&offset);
            translations.push((codepoint, offset));
        }
    }
    translations
}

/// Reference height, ascent and descent of an anchored row.
///
/// Returns the scale factor `1 / height` with the normalized metrics.
fn measure(font: &Font, params: &FontParams, row: usize) -> FontResult<(f64, f64, f64)> {
    let mut reference = Aabb::empty();
    if let Some((_, first)) = font.glyphs().next() {
        reference.insert(&first.bounds);
    }
    for glyph in params.reference_glyphs.iter().filter_map(|&c| font.glyph(c)) {
        reference.insert(&glyph.bounds);
    }

    let height = reference.size_y();
    if height < f64::EPSILON {
        return Err(FontError::DegenerateMetrics { row, height });
    }

    let ascent = reference.max.y / height;
    let descent = reference.min.y / height;
    debug!(row, height, "Measured reference glyphs");
    Ok((height.recip(), ascent, descent))
}
