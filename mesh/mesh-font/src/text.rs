//! UTF-8 codepoint decoding.

use crate::error::{FontError, FontResult};

/// Decode bytes into codepoints.
///
/// Each maximal invalid sequence becomes one U+FFFD replacement character.
///
/// # Example
///
/// ```
/// use mesh_font::decode_codepoints;
///
/// assert_eq!(decode_codepoints("Aé".as_bytes()), vec!['A', 'é']);
/// assert_eq!(decode_codepoints(b"A\xffB"), vec!['A', '\u{FFFD}', 'B']);
/// ```
#[must_use]
pub fn decode_codepoints(bytes: &[u8]) -> Vec<char> {
    let mut out = Vec::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.extend(chunk.valid().chars());
        if !chunk.invalid().is_empty() {
            out.push(char::REPLACEMENT_CHARACTER);
        }
    }
    out
}

/// Decode bytes into codepoints, rejecting invalid UTF-8.
///
/// # Errors
///
/// Returns [`FontError::InvalidUtf8`] with the offset of the first bad
/// byte.
pub fn decode_codepoints_strict(bytes: &[u8]) -> FontResult<Vec<char>> {
    std::str::from_utf8(bytes)
        .map(|s| s.chars().collect())
        .map_err(|e| FontError::InvalidUtf8 {
            offset: e.valid_up_to(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_and_multibyte() {
        assert_eq!(decode_codepoints(b""), Vec::<char>::new());
        assert_eq!(decode_codepoints(b"hp"), vec!['h', 'p']);
        assert_eq!(
            decode_codepoints("€𝄞".as_bytes()),
            vec!['\u{20AC}', '\u{1D11E}']
        );
    }

    #[test]
    fn truncated_sequence_is_replaced_once() {
        // first three bytes of a four byte sequence
        assert_eq!(
            decode_codepoints(b"a\xf0\x9d\x84b"),
            vec!['a', '\u{FFFD}', 'b']
        );
    }

    #[test]
    fn strict_reports_offset() {
        assert_eq!(
            decode_codepoints_strict(b"ab\xc3"),
            Err(FontError::InvalidUtf8 { offset: 2 })
        );
        assert_eq!(decode_codepoints_strict(b"ok"), Ok(vec!['o', 'k']));
    }
}
