//! Codepoint string encoding.
//!
//! Converts emoji glyphs into the canonical codepoint string used throughout
//! the catalog: lowercase hex scalar values joined by `-`, with no leading
//! zero padding. For example "😀" becomes `1f600` and "👩‍💻" becomes
//! `1f469-200d-1f4bb`.

use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

/// Separator between scalar values in a codepoint string.
pub const CODEPOINT_SEPARATOR: char = '-';

/// Errors produced when turning a codepoint string back into a glyph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodepointError {
    /// The input was empty or contained an empty segment (e.g. `1f600--fe0f`).
    #[error("empty codepoint segment in '{0}'")]
    EmptySegment(String),

    /// A segment was not valid hexadecimal.
    #[error("invalid hex segment '{segment}' in '{input}'")]
    InvalidHex {
        /// The full codepoint string.
        input: String,
        /// The offending segment.
        segment: String,
    },

    /// A segment parsed but is not a Unicode scalar value (surrogate or > U+10FFFF).
    #[error("U+{value:X} is not a Unicode scalar value")]
    NotScalar {
        /// The parsed numeric value.
        value: u32,
    },
}

/// Encode a glyph into its canonical codepoint string.
///
/// Every scalar value is written as lowercase hex, in order, so joiners and
/// variation selectors are kept. Never fails; the empty string encodes to
/// the empty string.
pub fn encode(glyph: &str) -> String {
    glyph
        .chars()
        .map(|c| format!("{:x}", u32::from(c)))
        .collect::<Vec<_>>()
        .join("-")
}

/// Decode a codepoint string such as `1f469-200d-1f4bb` back into a glyph.
///
/// Hex digits are accepted in either case.
pub fn decode(codepoints: &str) -> Result<String, CodepointError> {
    let trimmed = codepoints.trim();
    if trimmed.is_empty() {
        return Err(CodepointError::EmptySegment(codepoints.to_string()));
    }

    let mut glyph = String::new();
    for segment in trimmed.split(CODEPOINT_SEPARATOR) {
        if segment.is_empty() {
            return Err(CodepointError::EmptySegment(codepoints.to_string()));
        }
        let value =
            u32::from_str_radix(segment, 16).map_err(|_| CodepointError::InvalidHex {
                input: codepoints.to_string(),
                segment: segment.to_string(),
            })?;
        let c = char::from_u32(value).ok_or(CodepointError::NotScalar { value })?;
        glyph.push(c);
    }
    Ok(glyph)
}

/// Returns true if `s` looks like a codepoint string rather than a glyph.
///
/// Only ASCII hex digits and separators qualify, so any emoji glyph is
/// rejected immediately.
pub fn is_codepoint_string(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_hexdigit() || c == CODEPOINT_SEPARATOR)
        && !s.starts_with(CODEPOINT_SEPARATOR)
        && !s.ends_with(CODEPOINT_SEPARATOR)
}

/// Split text into user-perceived characters (extended grapheme clusters).
///
/// "😀🔥" yields two glyphs while a ZWJ sequence such as "👩‍💻" stays whole.
pub fn split_glyphs(text: &str) -> Vec<&str> {
    text.graphemes(true).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_single_scalar() {
        assert_eq!(encode("😀"), "1f600");
        assert_eq!(encode("🔥"), "1f525");
    }

    #[test]
    fn test_encode_zwj_sequence() {
        assert_eq!(encode("👩\u{200d}💻"), "1f469-200d-1f4bb");
    }

    #[test]
    fn test_encode_keeps_variation_selector() {
        assert_eq!(encode("❤\u{fe0f}"), "2764-fe0f");
    }

    #[test]
    fn test_encode_no_zero_padding() {
        // '#' is U+0023
        assert_eq!(encode("#"), "23");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(""), "");
    }

    #[test]
    fn test_encode_is_lowercase() {
        let encoded = encode("\u{1F4AF}");
        assert_eq!(encoded, encoded.to_lowercase());
        assert_eq!(encoded, "1f4af");
    }

    #[test]
    fn test_decode_sequence() {
        assert_eq!(decode("1f469-200d-1f4bb").unwrap(), "👩\u{200d}💻");
    }

    #[test]
    fn test_decode_uppercase() {
        assert_eq!(decode("1F600").unwrap(), "😀");
    }

    #[test]
    fn test_decode_round_trip_lowercases() {
        assert_eq!(encode(&decode("1F469-200D-1F4BB").unwrap()), "1f469-200d-1f4bb");
    }

    #[test]
    fn test_decode_invalid_hex() {
        let err = decode("zz").unwrap_err();
        assert!(matches!(err, CodepointError::InvalidHex { .. }));
    }

    #[test]
    fn test_decode_empty_segment() {
        assert!(matches!(
            decode("1f600--fe0f"),
            Err(CodepointError::EmptySegment(_))
        ));
        assert!(matches!(decode(""), Err(CodepointError::EmptySegment(_))));
    }

    #[test]
    fn test_decode_surrogate_rejected() {
        assert_eq!(
            decode("d800"),
            Err(CodepointError::NotScalar { value: 0xd800 })
        );
    }

    #[test]
    fn test_is_codepoint_string() {
        assert!(is_codepoint_string("1f600"));
        assert!(is_codepoint_string("1F469-200D-1F4BB"));
        assert!(!is_codepoint_string("😀"));
        assert!(!is_codepoint_string(""));
        assert!(!is_codepoint_string("-1f600"));
        assert!(!is_codepoint_string("fire"));
    }

    #[test]
    fn test_split_glyphs() {
        assert_eq!(split_glyphs("😀🔥"), vec!["😀", "🔥"]);
        assert_eq!(split_glyphs("👩\u{200d}💻😀").len(), 2);
        assert!(split_glyphs("").is_empty());
    }
}
