//! Recursive BER-TLV parser
//!
//! Scans a byte range left to right, decoding one element at a time and
//! descending into constructed values. A nested region that fails to decode
//! does not fail the parse: the enclosing element is kept with its raw value
//! and marked unparsed. Errors in the top-level range abort the call.

use crate::ber::{BerDecoder, BerTag};
use crate::element::{TlvElement, TlvStream};
use bertlv_core::{decode_hex, encode_hex, CodecConfig, TlvResult};

/// BER-TLV parser
#[derive(Debug, Clone, Default)]
pub struct TlvParser {
    config: CodecConfig,
}

impl TlvParser {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Parse a hex string into a stream of elements
    pub fn parse_hex(&self, hex: &str) -> TlvResult<TlvStream> {
        let data = decode_hex(hex)?;
        self.parse(&data)
    }

    /// Parse bytes into a stream of elements
    pub fn parse(&self, data: &[u8]) -> TlvResult<TlvStream> {
        let elements = self.parse_sequence(data, 0)?;
        log::debug!("Parsed {} top-level elements from {} bytes", elements.len(), data.len());
        Ok(TlvStream::new(elements))
    }

    /// Decode every element of `data`; elements sit at nesting `depth`
    fn parse_sequence(&self, data: &[u8], depth: usize) -> TlvResult<Vec<TlvElement>> {
        let mut decoder =
            BerDecoder::new(data).with_max_length_octets(self.config.max_length_octets);
        let mut elements = Vec::new();

        while decoder.has_remaining() {
            let offset = decoder.position();
            let (tag, length_octets, value) = decoder.decode_tlv()?;
            log::trace!("depth {} offset {}: tag {} length {}", depth, offset, tag, value.len());

            let children = if tag.is_constructed() {
                self.parse_children(&tag, value, depth + 1)
            } else {
                Some(Vec::new())
            };
            elements.push(TlvElement::from_parts(
                tag,
                length_octets.to_vec(),
                value.to_vec(),
                children,
            ));
        }

        Ok(elements)
    }

    /// Decode the value of a constructed element as nested TLV
    ///
    /// Returns `None` when the region is not valid nested TLV or lies
    /// deeper than `max_depth`.
    pub(crate) fn parse_children(
        &self,
        tag: &BerTag,
        value: &[u8],
        depth: usize,
    ) -> Option<Vec<TlvElement>> {
        if depth > self.config.max_depth {
            log::debug!(
                "Keeping {} opaque: depth {} exceeds {}",
                tag,
                depth,
                self.config.max_depth
            );
            return None;
        }
        match self.parse_sequence(value, depth) {
            Ok(children) => Some(children),
            Err(e) => {
                log::debug!(
                    "Constructed {} left unparsed ({}): {}",
                    tag,
                    e,
                    encode_hex(value)
                );
                None
            }
        }
    }
}
