//! BER encoding types (Tag, Length)

use bertlv_core::{decode_hex, encode_hex, TlvError, TlvResult};
use serde::{Serialize, Serializer};
use std::fmt;

/// Default parser limit on the number of subsequent octets in a long-form length
pub const DEFAULT_MAX_LENGTH_OCTETS: usize = 4;

/// BER Tag Class
///
/// Carried in bits 8-7 of the first tag octet. The codec does not attach
/// any meaning to it beyond reporting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BerTagClass {
    /// Universal class (00)
    Universal = 0,
    /// Application class (01)
    Application = 1,
    /// Context-specific class (10)
    ContextSpecific = 2,
    /// Private class (11)
    Private = 3,
}

impl BerTagClass {
    /// Get tag class from bits (bits 7-6 of tag byte)
    pub fn from_bits(bits: u8) -> Self {
        match (bits >> 6) & 0x03 {
            0 => BerTagClass::Universal,
            1 => BerTagClass::Application,
            2 => BerTagClass::ContextSpecific,
            _ => BerTagClass::Private,
        }
    }

    /// Convert tag class to bits (for encoding)
    pub fn to_bits(self) -> u8 {
        (self as u8) << 6
    }
}

/// BER Tag
///
/// The tag is kept as the octets it was read from, so an element is always
/// re-emitted with exactly the tag bytes it arrived with. Class, the
/// constructed flag and the tag number are derived from those octets.
///
/// # Encoding Format
///
/// Single octet (tag number 0-30):
/// ```text
/// Bits: 8 7 6 5 4 3 2 1
///       C C P T T T T T
/// ```
///
/// Multi-octet (low five bits of the first octet all set):
/// ```text
/// First byte:  C C P 1 1 1 1 1
/// Following bytes: 1 T T T T T T T ... 0 T T T T T T T
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BerTag {
    bytes: Vec<u8>,
}

impl BerTag {
    /// Create a tag with minimal encoding
    ///
    /// # Arguments
    /// * `class` - Tag class
    /// * `constructed` - Whether this is a constructed type
    /// * `number` - Tag number
    pub fn new(class: BerTagClass, constructed: bool, number: u32) -> Self {
        let mut result = Vec::new();

        let class_bits = class.to_bits();
        let constructed_bit = if constructed { 0x20 } else { 0x00 };

        if number <= 30 {
            result.push(class_bits | constructed_bit | (number as u8 & 0x1F));
        } else {
            result.push(class_bits | constructed_bit | 0x1F);

            let mut remaining = number;
            let mut groups = Vec::new();
            while remaining > 0 {
                groups.push((remaining & 0x7F) as u8);
                remaining >>= 7;
            }

            // Continuation bit on all but the last octet
            for (i, &group) in groups.iter().rev().enumerate() {
                if i < groups.len() - 1 {
                    result.push(group | 0x80);
                } else {
                    result.push(group);
                }
            }
        }

        Self { bytes: result }
    }

    /// Parse exactly one complete tag from a hex string
    ///
    /// # Error Handling
    /// Returns `InvalidHex` if the string is not hex or does not hold
    /// exactly one complete tag.
    pub fn from_hex(s: &str) -> TlvResult<Self> {
        let data = decode_hex(s)?;
        let (tag, consumed) = Self::decode(&data)
            .map_err(|e| TlvError::InvalidHex(format!("{:?} is not a complete tag: {}", s, e)))?;
        if consumed != data.len() {
            return Err(TlvError::InvalidHex(format!(
                "{:?} holds {} trailing bytes after tag {}",
                s,
                data.len() - consumed,
                tag
            )));
        }
        Ok(tag)
    }

    /// Get tag class
    pub fn class(&self) -> BerTagClass {
        BerTagClass::from_bits(self.bytes[0])
    }

    /// Check if tag is constructed (bit 6 of the first octet)
    pub fn is_constructed(&self) -> bool {
        (self.bytes[0] & 0x20) != 0
    }

    /// Get tag number
    ///
    /// Returns `None` if a multi-octet tag number does not fit in `u32`.
    pub fn number(&self) -> Option<u32> {
        let tag_bits = self.bytes[0] & 0x1F;
        if tag_bits != 0x1F {
            return Some(tag_bits as u32);
        }
        self.bytes[1..].iter().try_fold(0u32, |acc, &byte| {
            acc.checked_mul(128).map(|shifted| shifted | (byte & 0x7F) as u32)
        })
    }

    /// Raw tag octets
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of tag octets
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; a tag has at least one octet
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn to_hex(&self) -> String {
        encode_hex(&self.bytes)
    }

    /// Decode tag from bytes
    ///
    /// # Returns
    /// Returns `Ok((BerTag, bytes_consumed))` if successful, `Err` otherwise
    ///
    /// # Error Handling
    /// Returns `TruncatedInput` if the buffer is empty or ends before the
    /// last octet of a multi-octet tag.
    pub fn decode(data: &[u8]) -> TlvResult<(Self, usize)> {
        let first_byte = *data.first().ok_or_else(|| {
            TlvError::TruncatedInput("Empty buffer for tag decoding".to_string())
        })?;

        if first_byte & 0x1F != 0x1F {
            return Ok((Self { bytes: vec![first_byte] }, 1));
        }

        let mut pos = 1;
        loop {
            let byte = *data.get(pos).ok_or_else(|| {
                TlvError::TruncatedInput(format!(
                    "Incomplete multi-byte tag: {} after {} bytes",
                    encode_hex(&data[..pos]),
                    pos
                ))
            })?;
            pos += 1;
            if byte & 0x80 == 0 {
                break;
            }
        }

        Ok((Self { bytes: data[..pos].to_vec() }, pos))
    }
}

impl fmt::Display for BerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for BerTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// BER Length encoding
///
/// BER length can be encoded in two forms:
/// - **Short form**: For lengths 0-127 (1 byte)
/// - **Long form**: For lengths > 127 (2-127 bytes)
///
/// # Encoding Format
///
/// Short form:
/// ```text
/// Byte: 0 L L L L L L L
/// ```
///
/// Long form:
/// ```text
/// First byte:  1 N N N N N N N  (N = number of length bytes)
/// Following bytes: L L L L L L L L  (big-endian length value)
/// ```
///
/// The indefinite form (a lone `0x80`) is never produced and is rejected on
/// input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BerLength {
    /// Short form: length 0-127
    Short(u8),
    /// Long form, encoded with length-of-length
    Long(usize),
}

impl BerLength {
    /// Create a new BER length
    ///
    /// Automatically chooses short or long form based on the length value.
    pub fn new(length: usize) -> Self {
        if length < 128 {
            BerLength::Short(length as u8)
        } else {
            BerLength::Long(length)
        }
    }

    /// Get the length value
    pub fn value(&self) -> usize {
        match self {
            BerLength::Short(l) => *l as usize,
            BerLength::Long(l) => *l,
        }
    }

    /// Encode length to bytes
    ///
    /// Long form uses the minimal number of big-endian octets (at least one).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            BerLength::Short(length) => vec![*length],
            BerLength::Long(length) => {
                let mut num_bytes = 0;
                let mut temp = *length;
                while temp > 0 {
                    num_bytes += 1;
                    temp >>= 8;
                }
                if num_bytes == 0 {
                    num_bytes = 1;
                }

                let mut result = vec![0x80 | (num_bytes as u8)];
                for i in (0..num_bytes).rev() {
                    result.push(((*length >> (i * 8)) & 0xFF) as u8);
                }

                result
            }
        }
    }

    /// Decode any length that fits in `usize`
    ///
    /// # Returns
    /// Returns `Ok((BerLength, bytes_consumed))` if successful, `Err` otherwise
    pub fn decode(data: &[u8]) -> TlvResult<(Self, usize)> {
        Self::decode_with_limit(data, std::mem::size_of::<usize>())
    }

    /// Decode length from bytes
    ///
    /// # Error Handling
    /// - `TruncatedInput` if the buffer is empty or shorter than the
    ///   announced number of length octets
    /// - `MalformedLength` for the indefinite form (`0x80`), the reserved
    ///   `0xFF` octet, or more than `max_octets` subsequent octets
    pub fn decode_with_limit(data: &[u8], max_octets: usize) -> TlvResult<(Self, usize)> {
        let first_byte = *data.first().ok_or_else(|| {
            TlvError::TruncatedInput("Empty buffer for length decoding".to_string())
        })?;

        if (first_byte & 0x80) == 0 {
            return Ok((BerLength::Short(first_byte), 1));
        }

        let num_bytes = (first_byte & 0x7F) as usize;

        if num_bytes == 0 {
            return Err(TlvError::MalformedLength(
                "Indefinite length encoding not supported".to_string(),
            ));
        }

        if num_bytes == 0x7F {
            return Err(TlvError::MalformedLength(
                "Reserved length octet 0xFF".to_string(),
            ));
        }

        let limit = max_octets.min(std::mem::size_of::<usize>());
        if num_bytes > limit {
            return Err(TlvError::MalformedLength(format!(
                "Length encoding too large: {} bytes (max {})",
                num_bytes, limit
            )));
        }

        if data.len() < 1 + num_bytes {
            return Err(TlvError::TruncatedInput(format!(
                "Buffer too short for long form length: need {} bytes, got {}",
                1 + num_bytes,
                data.len()
            )));
        }

        let length = data[1..=num_bytes]
            .iter()
            .fold(0usize, |acc, &byte| (acc << 8) | byte as usize);

        Ok((BerLength::Long(length), 1 + num_bytes))
    }
}

/// Encode a length as hex length octets
pub fn encode_length(length: usize) -> String {
    encode_hex(&BerLength::new(length).encode())
}

/// Decode the length octets starting at `offset`
///
/// # Returns
/// Returns `(length value, number of octets consumed)`.
pub fn decode_length(bytes: &[u8], offset: usize) -> TlvResult<(usize, usize)> {
    let data = bytes.get(offset..).ok_or_else(|| {
        TlvError::TruncatedInput(format!(
            "Length offset {} past end of {}-byte buffer",
            offset,
            bytes.len()
        ))
    })?;
    let (length, consumed) = BerLength::decode(data)?;
    Ok((length.value(), consumed))
}
