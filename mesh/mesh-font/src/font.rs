//! Assembled fonts and text queries.

use hashbrown::HashMap;
use mesh_types::{Aabb, IndexedMesh, MeshTopology, Triangle, Vector3};

use crate::glyph::Glyph;
use crate::text::decode_codepoints;

/// A glyph placed on a line of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedGlyph<'a> {
    /// The codepoint being drawn.
    pub codepoint: char,
    /// Translation from the glyph's local frame to the line.
    pub offset: Vector3<f64>,
    /// The glyph.
    pub glyph: &'a Glyph,
}

impl PlacedGlyph<'_> {
    /// Glyph bounds in line coordinates.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        self.glyph.bounds.translated(&self.offset)
    }
}

/// Receiver for glyph draw submissions from [`Font::paint`].
///
/// Geometry is in the glyph's local frame; the renderer adds `offset`.
pub trait GlyphPainter {
    /// Draw one glyph.
    fn submit(&mut self, codepoint: char, offset: Vector3<f64>, mesh: &IndexedMesh);
}

impl<F> GlyphPainter for F
where
    F: FnMut(char, Vector3<f64>, &IndexedMesh),
{
    fn submit(&mut self, codepoint: char, offset: Vector3<f64>, mesh: &IndexedMesh) {
        self(codepoint, offset, mesh);
    }
}

/// A painter collecting every submitted triangle in line coordinates.
#[derive(Debug, Clone, Default)]
pub struct TriangleSoup {
    triangles: Vec<Triangle>,
    submissions: usize,
}

impl TriangleSoup {
    /// Create an empty soup.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            triangles: Vec::new(),
            submissions: 0,
        }
    }

    /// Collected triangles.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Number of glyphs submitted.
    #[must_use]
    pub const fn submissions(&self) -> usize {
        self.submissions
    }

    /// Bounds of all collected triangles.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.triangles.iter().flat_map(|t| [&t.v0, &t.v1, &t.v2]))
    }
}

impl GlyphPainter for TriangleSoup {
    fn submit(&mut self, _codepoint: char, offset: Vector3<f64>, mesh: &IndexedMesh) {
        self.submissions += 1;
        self.triangles
            .extend(mesh.triangles().map(|t| t.translated(&offset)));
    }
}

/// A font: one row of glyphs from a glyph mesh.
///
/// Geometry and bounds are normalized so one unit is the height of the
/// reference glyphs. Each glyph's local origin is its left edge on the
/// baseline.
///
/// # Example
///
/// ```
/// use mesh_font::{assemble_fonts, FontParams};
/// use mesh_split::MeshGroup;
/// use mesh_types::{cuboid, Point3};
///
/// let groups: Vec<MeshGroup> = [0.0, 2.0]
///     .iter()
///     .map(|&x| MeshGroup::new(cuboid(Point3::new(x, 0.0, 0.0), Point3::new(x + 1.0, 0.5, 0.1))))
///     .collect();
/// let fonts = assemble_fonts(&groups, &['H', 'i'], 1, &FontParams::default()).unwrap();
///
/// let font = &fonts[0];
/// assert_eq!(font.len(), 2);
/// assert!(font.size("Hi").size_x() > 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    codepoints: Vec<char>,
    glyphs: HashMap<char, Glyph>,
    order: Vec<char>,
    glyph_distance: f64,
    ascent: f64,
    descent: f64,
}

impl Font {
    pub(crate) fn new(codepoints: Vec<char>, glyph_distance: f64) -> Self {
        Self {
            codepoints,
            glyphs: HashMap::new(),
            order: Vec::new(),
            glyph_distance,
            ascent: 0.0,
            descent: 0.0,
        }
    }

    /// Insert or replace a glyph. A replaced glyph keeps its original
    /// position in [`glyphs`](Self::glyphs).
    pub(crate) fn insert(&mut self, codepoint: char, glyph: Glyph) {
        if self.glyphs.insert(codepoint, glyph).is_none() {
            self.order.push(codepoint);
        }
    }

    pub(crate) fn glyph_mut(&mut self, codepoint: char) -> Option<&mut Glyph> {
        self.glyphs.get_mut(&codepoint)
    }

    pub(crate) fn set_metrics(&mut self, ascent: f64, descent: f64) {
        self.ascent = ascent;
        self.descent = descent;
    }

    /// Look up a glyph.
    #[must_use]
    pub fn glyph(&self, codepoint: char) -> Option<&Glyph> {
        self.glyphs.get(&codepoint)
    }

    /// Glyphs in the order they were assembled.
    pub fn glyphs(&self) -> impl Iterator<Item = (char, &Glyph)> {
        self.order
            .iter()
            .filter_map(|&c| self.glyphs.get(&c).map(|g| (c, g)))
    }

    /// The declared character set.
    #[must_use]
    pub fn codepoints(&self) -> &[char] {
        &self.codepoints
    }

    /// Top of the reference glyphs above the baseline.
    #[must_use]
    pub const fn ascent(&self) -> f64 {
        self.ascent
    }

    /// Bottom of the reference glyphs relative to the baseline, usually
    /// negative.
    #[must_use]
    pub const fn descent(&self) -> f64 {
        self.descent
    }

    /// Advance added after each glyph.
    #[must_use]
    pub const fn glyph_distance(&self) -> f64 {
        self.glyph_distance
    }

    /// Number of glyphs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the font has no glyphs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Place each codepoint of `text` on a line starting at the origin.
    ///
    /// The cursor advances by the glyph's width plus the glyph distance.
    /// Codepoints without a glyph are skipped and do not advance.
    pub fn layout(&self, text: impl AsRef<[u8]>) -> Vec<PlacedGlyph<'_>> {
        let mut cursor = 0.0;
        decode_codepoints(text.as_ref())
            .into_iter()
            .filter_map(|codepoint| {
                let glyph = self.glyphs.get(&codepoint)?;
                let placed = PlacedGlyph {
                    codepoint,
                    offset: Vector3::new(cursor, 0.0, 0.0),
                    glyph,
                };
                cursor += glyph.width() + self.glyph_distance;
                Some(placed)
            })
            .collect()
    }

    /// Submit every drawable glyph of `text` to `painter`.
    ///
    /// Whitespace glyphs advance the cursor without a submission.
    pub fn paint<P: GlyphPainter + ?Sized>(&self, text: impl AsRef<[u8]>, painter: &mut P) {
        for placed in self.layout(text) {
            if !placed.glyph.is_blank() {
                painter.submit(placed.codepoint, placed.offset, &placed.glyph.mesh);
            }
        }
    }

    /// Bounds of `text` as laid out by [`layout`](Self::layout).
    ///
    /// Empty text, or text with no known codepoints, gives an empty box.
    #[must_use]
    pub fn size(&self, text: impl AsRef<[u8]>) -> Aabb {
        let mut bounds = Aabb::empty();
        for placed in self.layout(text) {
            bounds.insert(&placed.bounds());
        }
        bounds
    }

    /// Offset that centers the gaps between glyphs on the origin.
    ///
    /// Takes the midpoint of the first and the last inter-glyph gap and
    /// returns the horizontal translation moving their average to `x = 0`.
    /// Fewer than two placed glyphs give the zero vector.
    #[must_use]
    pub fn gap_center(&self, text: impl AsRef<[u8]>) -> Vector3<f64> {
        let placed = self.layout(text);
        let gap_mid = |pair: &[PlacedGlyph<'_>]| {
            let left = pair[0].bounds().max.x;
            let right = pair[1].bounds().min.x;
            (left + right) / 2.0
        };

        let mut gaps = placed.windows(2).map(gap_mid);
        match (gaps.next(), gaps.next_back()) {
            (Some(first), Some(last)) => Vector3::new(-(first + last) / 2.0, 0.0, 0.0),
            (Some(only), None) => Vector3::new(-only, 0.0, 0.0),
            _ => Vector3::zeros(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mesh_types::{cuboid, Point3};

    /// Font with square 'a', wide 'b' and a blank ' ' of width 1.
    fn sample() -> Font {
        let mut font = Font::new(vec!['a', ' ', 'b'], 0.25);
        let square = cuboid(Point3::origin(), Point3::new(1.0, 1.0, 0.1));
        let wide = cuboid(Point3::origin(), Point3::new(2.0, 1.0, 0.1));
        font.insert('a', Glyph { bounds: mesh_types::MeshBounds::bounds(&square), mesh: square });
        font.insert(' ', Glyph::blank(Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 0.1))));
        font.insert('b', Glyph { bounds: mesh_types::MeshBounds::bounds(&wide), mesh: wide });
        font.set_metrics(1.0, 0.0);
        font
    }

    #[test]
    fn accessors() {
        let font = sample();
        assert_eq!(font.len(), 3);
        assert!(!font.is_empty());
        assert_eq!(font.codepoints(), &['a', ' ', 'b']);
        let order: Vec<char> = font.glyphs().map(|(c, _)| c).collect();
        assert_eq!(order, vec!['a', ' ', 'b']);
        assert!(font.glyph('z').is_none());
        assert_relative_eq!(font.ascent(), 1.0);
        assert_relative_eq!(font.glyph_distance(), 0.25);
    }

    #[test]
    fn replacing_keeps_order() {
        let mut font = sample();
        font.insert('a', Glyph::blank(Aabb::empty()));
        let order: Vec<char> = font.glyphs().map(|(c, _)| c).collect();
        assert_eq!(order, vec!['a', ' ', 'b']);
        assert!(font.glyph('a').is_some_and(Glyph::is_blank));
    }

    #[test]
    fn layout_advances_and_skips_missing() {
        let font = sample();
        let placed = font.layout("a?b a");
        let offsets: Vec<f64> = placed.iter().map(|p| p.offset.x).collect();
        assert_eq!(placed.len(), 4);
        assert_relative_eq!(offsets[0], 0.0);
        assert_relative_eq!(offsets[1], 1.25, epsilon = 1e-12);
        assert_relative_eq!(offsets[2], 3.5, epsilon = 1e-12);
        assert_relative_eq!(offsets[3], 4.75, epsilon = 1e-12);
    }

    #[test]
    fn size_of_text() {
        let font = sample();
        let size = font.size("ab");
        assert_relative_eq!(size.min.x, 0.0);
        assert_relative_eq!(size.max.x, 3.25, epsilon = 1e-12);
        assert_relative_eq!(size.size_y(), 1.0, epsilon = 1e-12);

        assert!(font.size("").is_empty());
        assert_eq!(font.size(""), Aabb::empty());
        assert!(font.size("zz").is_empty());
    }

    #[test]
    fn size_accepts_raw_bytes() {
        let font = sample();
        assert_eq!(font.size(b"ab"), font.size("ab"));
        // invalid byte decodes to U+FFFD, which has no glyph
        assert_eq!(font.size(b"a\xffb"), font.size("ab"));
    }

    #[test]
    fn paint_skips_blank_glyphs() {
        let font = sample();
        let mut soup = TriangleSoup::new();
        font.paint("a b", &mut soup);
        assert_eq!(soup.submissions(), 2);
        assert_eq!(soup.triangles().len(), 24);
        let bounds = soup.bounds();
        assert_relative_eq!(bounds.max.x, 4.5, epsilon = 1e-12);

        let mut seen = Vec::new();
        let mut record = |c: char, offset: Vector3<f64>, _: &IndexedMesh| seen.push((c, offset.x));
        font.paint("ba", &mut record);
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1].0, 'a');
        assert_relative_eq!(seen[1].1, 2.25, epsilon = 1e-12);
    }

    #[test]
    fn gap_center_of_text() {
        let font = sample();
        assert_eq!(font.gap_center("a"), Vector3::zeros());
        assert_eq!(font.gap_center(""), Vector3::zeros());

        // single gap between x = 1 and x = 1.25
        assert_relative_eq!(font.gap_center("ab").x, -1.125, epsilon = 1e-12);

        // gaps at 1.125 and 3.375 for "aba"
        let center = font.gap_center("aba");
        assert_relative_eq!(center.x, -2.25, epsilon = 1e-12);
        assert_relative_eq!(center.y, 0.0);
    }
}
