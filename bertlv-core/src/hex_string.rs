//! Hex boundary helpers
//!
//! All binary data crosses the public API as hex digit strings. Input is
//! case-insensitive and may contain ASCII whitespace between digits; output
//! is always uppercase.

use crate::error::{TlvError, TlvResult};

/// Decode a hex string into bytes
///
/// # Error Handling
/// Returns `InvalidHex` if the string (whitespace removed) has an odd number
/// of digits or contains a non-hex character.
pub fn decode_hex(input: &str) -> TlvResult<Vec<u8>> {
    let digits: String = input.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    hex::decode(&digits).map_err(|e| TlvError::InvalidHex(format!("{:?}: {}", input, e)))
}

/// Encode bytes as an uppercase hex string
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_mixed_case() {
        assert_eq!(decode_hex("9f33e0").unwrap(), vec![0x9F, 0x33, 0xE0]);
        assert_eq!(decode_hex("9F33E0").unwrap(), vec![0x9F, 0x33, 0xE0]);
    }

    #[test]
    fn test_decode_ignores_whitespace() {
        assert_eq!(decode_hex(" 9F 33\n03 ").unwrap(), vec![0x9F, 0x33, 0x03]);
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode_hex("").unwrap().is_empty());
    }

    #[test]
    fn test_decode_odd_length() {
        assert!(matches!(decode_hex("9F3"), Err(TlvError::InvalidHex(_))));
    }

    #[test]
    fn test_decode_non_hex() {
        assert!(matches!(decode_hex("9G"), Err(TlvError::InvalidHex(_))));
    }

    #[test]
    fn test_encode_uppercase() {
        assert_eq!(encode_hex(&[0xab, 0x01]), "AB01");
    }
}
