//! Error types for font assembly.

use thiserror::Error;

/// Result type for font operations.
pub type FontResult<T> = Result<T, FontError>;

/// Errors that can occur while assembling a font.
///
/// Every variant names the row or codepoint at fault so the source mesh
/// can be fixed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FontError {
    /// The codepoint list is empty.
    #[error("codepoint list is empty")]
    EmptyCodepoints,

    /// The first or last codepoint is whitespace or a control character.
    #[error("codepoint {codepoint:?} at position {position} must be printable")]
    NonPrintableBoundary {
        /// The offending codepoint.
        codepoint: char,
        /// Its position in the codepoint list.
        position: usize,
    },

    /// A row has more glyphs than the codepoint list can name.
    #[error("row {row}: {groups} groups but only {codepoints} codepoints")]
    TooFewCodepoints {
        /// Row index, 0 is topmost.
        row: usize,
        /// Groups in the row.
        groups: usize,
        /// Length of the codepoint list.
        codepoints: usize,
    },

    /// Printable codepoints were left unmatched in a row.
    #[error("row {row}: only {matched} of {codepoints} codepoints matched, next is {next:?}")]
    TooManyCodepoints {
        /// Row index, 0 is topmost.
        row: usize,
        /// Codepoints consumed by the row.
        matched: usize,
        /// Length of the codepoint list.
        codepoints: usize,
        /// First unmatched printable codepoint.
        next: char,
    },

    /// No group lies in a row's vertical band.
    #[error("row {row} has no glyphs")]
    EmptyRow {
        /// Row index, 0 is topmost.
        row: usize,
    },

    /// The reference glyphs have no height.
    #[error("row {row}: reference glyph height {height} is degenerate")]
    DegenerateMetrics {
        /// Row index, 0 is topmost.
        row: usize,
        /// The measured height.
        height: f64,
    },

    /// Text is not valid UTF-8.
    #[error("invalid UTF-8 at byte offset {offset}")]
    InvalidUtf8 {
        /// Offset of the first invalid byte.
        offset: usize,
    },
}
