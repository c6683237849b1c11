//! Path-addressed value editing
//!
//! An edit parses the input, walks the path choosing the first matching tag
//! at each level, swaps the target's value and then rebuilds every ancestor
//! on the way back up so their lengths reflect the new size. Everything not
//! on the path is re-emitted byte for byte.

use crate::element::TlvElement;
use crate::parser::TlvParser;
use crate::path::TagPath;
use bertlv_core::{decode_hex, encode_hex, CodecConfig, TlvError, TlvResult};

/// BER-TLV value editor
#[derive(Debug, Clone, Default)]
pub struct TlvEditor {
    parser: TlvParser,
}

impl TlvEditor {
    pub fn new(config: CodecConfig) -> Self {
        Self {
            parser: TlvParser::new(config),
        }
    }

    /// Replace the value at `path` and return the re-serialized stream
    ///
    /// # Arguments
    /// * `raw_hex` - Complete BER-TLV stream as hex
    /// * `path` - Colon-separated tag path, e.g. `"E0:9F33"`
    /// * `new_value_hex` - Replacement value as hex
    ///
    /// # Error Handling
    /// Fails with `InvalidHex`, `InvalidPath`, `TagNotFound`, or any parse
    /// error of the input stream. No partial output is produced.
    pub fn edit(&self, raw_hex: &str, path: &str, new_value_hex: &str) -> TlvResult<String> {
        let data = decode_hex(raw_hex)?;
        let path = TagPath::parse(path)?;
        let new_value = decode_hex(new_value_hex)?;
        let output = self.edit_bytes(&data, &path, new_value)?;
        Ok(encode_hex(&output))
    }

    /// Byte-level form of [`TlvEditor::edit`]
    pub fn edit_bytes(
        &self,
        data: &[u8],
        path: &TagPath,
        new_value: Vec<u8>,
    ) -> TlvResult<Vec<u8>> {
        let mut stream = self.parser.parse(data)?;
        log::debug!("Editing {} ({} new value bytes)", path, new_value.len());
        self.replace_at(stream.elements_mut(), path, 0, new_value)?;
        Ok(stream.to_bytes())
    }

    /// Descend to `path[level..]` within `elements`, then rebuild on return
    fn replace_at(
        &self,
        elements: &mut [TlvElement],
        path: &TagPath,
        level: usize,
        new_value: Vec<u8>,
    ) -> TlvResult<()> {
        let segment = &path.segments()[level];
        let element = elements
            .iter_mut()
            .find(|e| e.tag() == segment)
            .ok_or_else(|| TlvError::TagNotFound(path.prefix(level + 1)))?;

        if level + 1 == path.len() {
            let children = if element.is_constructed() {
                self.parser.parse_children(element.tag(), &new_value, level + 1)
            } else {
                Some(Vec::new())
            };
            element.replace_value(new_value, children);
            log::debug!("Replaced {} value, length now {}", path, element.length());
            return Ok(());
        }

        if !element.is_constructed() || element.is_unparsed() {
            return Err(TlvError::TagNotFound(format!(
                "{} (no nested elements under {})",
                path.prefix(level + 2),
                path.prefix(level + 1)
            )));
        }

        self.replace_at(element.children_mut(), path, level + 1, new_value)?;
        element.rebuild_from_children();
        log::trace!("Rebuilt {}, length now {}", path.prefix(level + 1), element.length());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(raw: &str, path: &str, value: &str) -> TlvResult<String> {
        TlvEditor::default().edit(raw, path, value)
    }

    #[test]
    fn test_edit_primitive_same_size() {
        assert_eq!(edit("9F3303E0F8C8", "9F33", "010203").unwrap(), "9F3303010203");
    }

    #[test]
    fn test_edit_nested_same_size() {
        assert_eq!(
            edit("E0069F3303AABBCC", "E0:9F33", "010203").unwrap(),
            "E0069F3303010203"
        );
    }

    #[test]
    fn test_edit_nested_growth() {
        assert_eq!(
            edit("E0069F3303AABBCC", "E0:9F33", "01020304").unwrap(),
            "E0079F330401020304"
        );
    }

    #[test]
    fn test_edit_nested_shrink_to_empty() {
        assert_eq!(edit("E0069F3303AABBCC", "E0:9F33", "").unwrap(), "E0039F3300");
    }

    #[test]
    fn test_edit_three_levels() {
        // E1 { E2 { 5A 01 11 } 5F20 01 22 }
        let raw = "E109E2035A01115F200122";
        let result = edit(raw, "E1:E2:5A", "AABB").unwrap();
        assert_eq!(result, "E10AE2045A02AABB5F200122");
    }

    #[test]
    fn test_edit_crosses_long_form_boundary() {
        let value = "CC".repeat(0x7E);
        let raw = format!("E081819F337E{}", value);
        let grown = "DD".repeat(0x80);
        let result = edit(&raw, "E0:9F33", &grown).unwrap();
        assert_eq!(result, format!("E081849F338180{}", grown));
    }

    #[test]
    fn test_edit_first_duplicate_only() {
        assert_eq!(edit("5A01015A0102", "5A", "FF").unwrap(), "5A01FF5A0102");
    }

    #[test]
    fn test_edit_preserves_siblings() {
        let raw = "E00B5A01119F3303AABBCC8200E1035F2000";
        let result = edit(raw, "E0:9F33", "00").unwrap();
        assert_eq!(result, "E0095A01119F3301008200E1035F2000");
    }

    #[test]
    fn test_edit_keeps_non_minimal_length_when_size_unchanged() {
        assert_eq!(edit("5A810201025F2000", "5A", "0304").unwrap(), "5A810203045F2000");
        assert_eq!(edit("5A81020102", "5A", "03").unwrap(), "5A0103");
    }

    #[test]
    fn test_edit_constructed_reparses_children() {
        let editor = TlvEditor::default();
        let output = editor.edit("E0035A0101", "E0", "5A01025F2000").unwrap();
        assert_eq!(output, "E0065A01025F2000");
        assert_eq!(
            editor.edit(&output, "E0:5F20", "77").unwrap(),
            "E0075A01025F200177"
        );
    }

    #[test]
    fn test_edit_lowercase_input_uppercase_output() {
        assert_eq!(
            edit("e0069f3303aabbcc", "e0:9f33", "0a0b0c").unwrap(),
            "E0069F33030A0B0C"
        );
    }

    #[test]
    fn test_edit_tag_not_found() {
        assert!(matches!(edit("9F3303E0F8C8", "9F34", "00"), Err(TlvError::TagNotFound(_))));
        assert!(matches!(edit("E0069F3303AABBCC", "E0:5A", "00"), Err(TlvError::TagNotFound(_))));
    }

    #[test]
    fn test_edit_descend_into_primitive() {
        let result = edit("9F3303E0F8C8", "9F33:5A", "00");
        assert!(matches!(result, Err(TlvError::TagNotFound(_))));
    }

    #[test]
    fn test_edit_descend_into_unparsed() {
        let result = edit("E0049F3305AA", "E0:9F33", "00");
        assert!(matches!(result, Err(TlvError::TagNotFound(_))));
    }

    #[test]
    fn test_edit_invalid_path() {
        assert!(matches!(edit("9F3303E0F8C8", "", "00"), Err(TlvError::InvalidPath(_))));
        assert!(matches!(edit("9F3303E0F8C8", "9F33:", "00"), Err(TlvError::InvalidPath(_))));
    }

    #[test]
    fn test_edit_invalid_hex() {
        assert!(matches!(edit("9F3303E0F8C", "9F33", "00"), Err(TlvError::InvalidHex(_))));
        assert!(matches!(edit("9F3303E0F8C8", "9F33", "0"), Err(TlvError::InvalidHex(_))));
    }

    #[test]
    fn test_edit_propagates_parse_error() {
        assert!(matches!(edit("9F3380", "9F33", "00"), Err(TlvError::MalformedLength(_))));
        assert!(matches!(edit("9F3305E0", "9F33", "00"), Err(TlvError::TruncatedInput(_))));
    }
}
