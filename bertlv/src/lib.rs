//! bertlv - BER-TLV parsing and path-addressed value editing
//!
//! # Architecture
//!
//! This library is organized as a workspace with multiple crates:
//!
//! - `bertlv-core`: error type, hex helpers, configuration
//! - `bertlv-codec`: tag/length codec, parser, tag paths, editor
//!
//! # Usage
//!
//! ```rust
//! let stream = bertlv::parse_tlv("E0069F3303AABBCC").unwrap();
//! assert_eq!(stream.elements()[0].children()[0].value_hex(), "AABBCC");
//!
//! let edited = bertlv::edit_tlv_value("E0069F3303AABBCC", "E0:9F33", "01020304").unwrap();
//! assert_eq!(edited, "E0079F330401020304");
//! ```

pub use bertlv_core::{decode_hex, encode_hex, CodecConfig, TlvError, TlvResult};
pub use bertlv_codec::{
    decode_length, edit_tlv_value, encode_length, parse_tlv, BerLength, BerTag, BerTagClass,
    TagPath, TlvEditor, TlvElement, TlvParser, TlvStream,
};
