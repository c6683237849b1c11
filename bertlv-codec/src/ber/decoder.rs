//! BER-TLV cursor decoder
//!
//! # Usage Example
//!
//! ```rust
//! use bertlv_codec::ber::BerDecoder;
//!
//! let data = [0x9F, 0x33, 0x03, 0xE0, 0xF8, 0xC8];
//! let mut decoder = BerDecoder::new(&data);
//! let (tag, length_octets, value) = decoder.decode_tlv().unwrap();
//! assert_eq!(tag.to_hex(), "9F33");
//! assert_eq!(length_octets, &[0x03]);
//! assert_eq!(value, &[0xE0, 0xF8, 0xC8]);
//! ```

use crate::ber::types::{BerLength, BerTag, DEFAULT_MAX_LENGTH_OCTETS};
use bertlv_core::{TlvError, TlvResult};

/// BER-TLV decoder over a borrowed buffer
///
/// # Position Tracking
///
/// The decoder maintains a position pointer that advances as data is decoded.
/// This allows sequential decoding of multiple values from the same buffer.
/// A failed decode leaves the position unspecified; callers abandon the
/// decoder on error.
pub struct BerDecoder<'a> {
    buffer: &'a [u8],
    position: usize,
    max_length_octets: usize,
}

impl<'a> BerDecoder<'a> {
    /// Create a new BER decoder
    ///
    /// # Arguments
    /// * `buffer` - Buffer containing BER-TLV encoded data
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
            max_length_octets: DEFAULT_MAX_LENGTH_OCTETS,
        }
    }

    /// Limit the number of subsequent octets accepted in a long-form length
    pub fn with_max_length_octets(mut self, max_length_octets: usize) -> Self {
        self.max_length_octets = max_length_octets;
        self
    }

    /// Get current position in buffer
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get remaining bytes
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    /// Check if there is more data to decode
    pub fn has_remaining(&self) -> bool {
        self.position < self.buffer.len()
    }

    /// Read multiple bytes from the buffer
    ///
    /// # Error Handling
    /// Returns `TruncatedInput` if buffer doesn't have enough bytes.
    fn read_bytes(&mut self, count: usize) -> TlvResult<&'a [u8]> {
        if count > self.remaining() {
            return Err(TlvError::TruncatedInput(format!(
                "Value at offset {} needs {} bytes, have {}",
                self.position,
                count,
                self.remaining()
            )));
        }
        let start = self.position;
        self.position += count;
        Ok(&self.buffer[start..start + count])
    }

    /// Decode a TLV (Tag-Length-Value) triplet
    ///
    /// # Returns
    /// Returns `Ok((tag, length_octets, value))`; the length octets are
    /// returned exactly as they appear in the buffer.
    ///
    /// # Decoding Process
    /// 1. Decode tag
    /// 2. Decode length
    /// 3. Read value bytes
    pub fn decode_tlv(&mut self) -> TlvResult<(BerTag, &'a [u8], &'a [u8])> {
        let (tag, tag_bytes) = BerTag::decode(&self.buffer[self.position..])?;
        self.position += tag_bytes;

        let (length, length_bytes) =
            BerLength::decode_with_limit(&self.buffer[self.position..], self.max_length_octets)?;
        let length_octets = self.read_bytes(length_bytes)?;

        let value = self.read_bytes(length.value())?;

        Ok((tag, length_octets, value))
    }
}
