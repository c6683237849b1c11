//! BER (Basic Encoding Rules) tag and length codec
//!
//! Each element of a BER-TLV stream is a triplet:
//!
//! ```text
//! [Tag] [Length] [Value]
//! ```
//!
//! ## Tag Encoding
//!
//! ```text
//! Bits: 8 7 6 5 4 3 2 1
//!       C C P T T T T T
//! ```
//! - CC = Class (00=Universal, 01=Application, 10=Context, 11=Private)
//! - P = Primitive (0) or Constructed (1); a constructed value is itself a
//!   sequence of TLV triplets
//! - TTTTT = Tag number (0-30), or 11111 when the number continues in the
//!   following octets (bit 8 set on every octet but the last)
//!
//! ## Length Encoding
//!
//! - **Short form** (1 byte): lengths 0-127
//! - **Long form**: first byte `0x80 | N`, then N big-endian octets
//!
//! Only definite lengths are supported. The indefinite form is rejected
//! with `MalformedLength`.

pub mod decoder;
pub mod encoder;
pub mod types;

pub use decoder::BerDecoder;
pub use encoder::BerEncoder;
pub use types::{decode_length, encode_length, BerLength, BerTag, BerTagClass};
