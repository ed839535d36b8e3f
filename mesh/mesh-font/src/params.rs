//! Font assembly parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters for font assembly.
///
/// Distances are in source mesh units except `glyph_distance`, which is in
/// normalized units (one unit is the reference glyph height).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct FontParams {
    /// Overlap above which a group continues the previous glyph.
    ///
    /// Overlap is `(previous.xmax - next.xmin) / previous.width`, so a
    /// negative threshold also merges groups separated by a small gap.
    pub merge_threshold: f64,

    /// Vertical distance between stacked font rows.
    pub font_distance: f64,

    /// Baseline offset inside a row.
    pub font_lowline: f64,

    /// Horizontal advance added after each glyph.
    pub glyph_distance: f64,

    /// Codepoints whose bounds define the vertical metric.
    pub reference_glyphs: Vec<char>,

    /// Fail if printable codepoints remain once a row runs out of groups.
    pub require_all_codepoints: bool,
}

impl Default for FontParams {
    fn default() -> Self {
        Self {
            merge_threshold: -0.25,
            font_distance: 1.0,
            font_lowline: -0.15,
            glyph_distance: 0.1,
            reference_glyphs: vec!['h', 'p', 'H', 'P'],
            require_all_codepoints: false,
        }
    }
}

impl FontParams {
    /// Parameters that reject rows with unmatched printable codepoints.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            require_all_codepoints: true,
            ..Default::default()
        }
    }

    /// Set the merge threshold.
    #[must_use]
    pub const fn with_merge_threshold(mut self, threshold: f64) -> Self {
        self.merge_threshold = threshold;
        self
    }

    /// Set the row spacing.
    #[must_use]
    pub const fn with_font_distance(mut self, distance: f64) -> Self {
        self.font_distance = distance;
        self
    }

    /// Set the baseline offset.
    #[must_use]
    pub const fn with_font_lowline(mut self, lowline: f64) -> Self {
        self.font_lowline = lowline;
        self
    }

    /// Set the advance added after each glyph.
    #[must_use]
    pub const fn with_glyph_distance(mut self, distance: f64) -> Self {
        self.glyph_distance = distance;
        self
    }

    /// Set the metric reference codepoints.
    #[must_use]
    pub fn with_reference_glyphs(mut self, glyphs: impl IntoIterator<Item = char>) -> Self {
        self.reference_glyphs = glyphs.into_iter().collect();
        self
    }

    /// Require every printable codepoint to be matched.
    #[must_use]
    pub const fn with_require_all_codepoints(mut self, require: bool) -> Self {
        self.require_all_codepoints = require;
        self
    }

    /// Upper bound of the vertical band holding row `row`.
    ///
    /// A group belongs to the row if its center lies in
    /// `(limit - font_distance, limit]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn row_limit(&self, row: usize) -> f64 {
        1.0 - row as f64 * self.font_distance + self.font_lowline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = FontParams::default();
        assert!((params.merge_threshold + 0.25).abs() < f64::EPSILON);
        assert!((params.font_distance - 1.0).abs() < f64::EPSILON);
        assert!((params.font_lowline + 0.15).abs() < f64::EPSILON);
        assert!((params.glyph_distance - 0.1).abs() < f64::EPSILON);
        assert_eq!(params.reference_glyphs, vec!['h', 'p', 'H', 'P']);
        assert!(!params.require_all_codepoints);
    }

    #[test]
    fn test_strict() {
        assert!(FontParams::strict().require_all_codepoints);
    }

    #[test]
    fn test_builder() {
        let params = FontParams::default()
            .with_merge_threshold(0.1)
            .with_font_distance(2.0)
            .with_font_lowline(0.0)
            .with_glyph_distance(0.5)
            .with_reference_glyphs("x".chars())
            .with_require_all_codepoints(true);

        assert!((params.merge_threshold - 0.1).abs() < f64::EPSILON);
        assert!((params.font_distance - 2.0).abs() < f64::EPSILON);
        assert!(params.font_lowline.abs() < f64::EPSILON);
        assert!((params.glyph_distance - 0.5).abs() < f64::EPSILON);
        assert_eq!(params.reference_glyphs, vec!['x']);
        assert!(params.require_all_codepoints);
    }

    #[test]
    fn test_row_limits() {
        let params = FontParams::default();
        assert!((params.row_limit(0) - 0.85).abs() < 1e-12);
        assert!((params.row_limit(1) + 0.15).abs() < 1e-12);
        assert!((params.row_limit(3) + 2.15).abs() < 1e-12);
    }
}
