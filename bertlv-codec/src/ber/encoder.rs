//! BER-TLV encoder
//!
//! # Usage Example
//!
//! ```rust
//! use bertlv_codec::ber::{BerEncoder, BerTag, BerTagClass};
//!
//! let mut encoder = BerEncoder::new();
//! encoder.encode_tlv(&BerTag::new(BerTagClass::ContextSpecific, false, 0x33), &[0x01]);
//! assert_eq!(encoder.into_bytes(), vec![0x9F, 0x33, 0x01, 0x01]);
//! ```

use crate::ber::types::{BerLength, BerTag};
use crate::element::TlvElement;

/// BER-TLV encoder accumulating into a `Vec<u8>` buffer
pub struct BerEncoder {
    buffer: Vec<u8>,
}

impl BerEncoder {
    /// Create a new BER encoder
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Create a new BER encoder with initial capacity
    ///
    /// # Arguments
    /// * `capacity` - Initial buffer capacity in bytes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Encode a TLV triplet with a minimally encoded length
    pub fn encode_tlv(&mut self, tag: &BerTag, value: &[u8]) {
        self.buffer.extend_from_slice(tag.as_bytes());
        self.buffer.extend_from_slice(&BerLength::new(value.len()).encode());
        self.buffer.extend_from_slice(value);
    }

    /// Encode an element with the tag and length octets it carries
    pub fn encode_element(&mut self, element: &TlvElement) {
        self.buffer.extend_from_slice(element.tag().as_bytes());
        self.buffer.extend_from_slice(element.length_octets());
        self.buffer.extend_from_slice(element.value());
    }

    /// Encode a sequence of elements back to back
    pub fn encode_elements(&mut self, elements: &[TlvElement]) {
        for element in elements {
            self.encode_element(element);
        }
    }

    /// Get the encoded bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    /// Get a reference to the encoded bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }
}

impl Default for BerEncoder {
    fn default() -> Self {
        Self::new()
    }
}
