//! BER-TLV parsing and editing
//!
//! This crate decodes hex-encoded BER-TLV streams into element trees and
//! edits the value of an element addressed by a tag path, recomputing the
//! length of every enclosing element.
//!
//! - `ber`: tag and length codec, cursor decoder, encoder
//! - `element`: decoded element tree
//! - `parser`: recursive parser
//! - `path`: colon-separated tag paths
//! - `editor`: locate, replace and re-serialize
//!
//! All operations are pure functions of their inputs and hold no shared
//! state, so they can be called from any number of threads.

pub mod ber;
pub mod editor;
pub mod element;
pub mod parser;
pub mod path;

pub use ber::{
    decode_length, encode_length, BerDecoder, BerEncoder, BerLength, BerTag, BerTagClass,
};
pub use bertlv_core::{CodecConfig, TlvError, TlvResult};
pub use editor::TlvEditor;
pub use element::{TlvElement, TlvStream};
pub use parser::TlvParser;
pub use path::TagPath;

/// Parse a hex-encoded BER-TLV stream with the default configuration
pub fn parse_tlv(hex: &str) -> TlvResult<TlvStream> {
    TlvParser::default().parse_hex(hex)
}

/// Replace the value at `path` with the default configuration
///
/// ```rust
/// let output =
///     bertlv_codec::edit_tlv_value("E0069F3303AABBCC", "E0:9F33", "01020304").unwrap();
/// assert_eq!(output, "E0079F330401020304");
/// ```
pub fn edit_tlv_value(raw_hex: &str, path: &str, new_value_hex: &str) -> TlvResult<String> {
    TlvEditor::default().edit(raw_hex, path, new_value_hex)
}
