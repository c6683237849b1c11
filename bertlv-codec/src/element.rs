//! Decoded element tree
//!
//! A [`TlvStream`] is the ordered sequence of top-level elements found in a
//! byte stream. Each [`TlvElement`] owns its children; there are no
//! back-references. Elements are built by the parser and read-only for
//! callers. The editor rebuilds them internally.

use crate::ber::{BerEncoder, BerLength, BerTag};
use crate::path::TagPath;
use bertlv_core::encode_hex;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// One decoded tag-length-value unit
///
/// `value` always holds the raw value region. For a constructed element it
/// is the concatenation of the children's encodings, kept alongside the
/// decoded `children` so the element re-serializes byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlvElement {
    tag: BerTag,
    length_octets: Vec<u8>,
    value: Vec<u8>,
    children: Vec<TlvElement>,
    unparsed: bool,
}

impl TlvElement {
    /// Assemble an element from decoded parts
    ///
    /// `children` is `None` when the element is constructed but its value
    /// region could not be decoded as nested TLV.
    pub(crate) fn from_parts(
        tag: BerTag,
        length_octets: Vec<u8>,
        value: Vec<u8>,
        children: Option<Vec<TlvElement>>,
    ) -> Self {
        let unparsed = tag.is_constructed() && children.is_none();
        Self {
            tag,
            length_octets,
            value,
            children: children.unwrap_or_default(),
            unparsed,
        }
    }

    pub fn tag(&self) -> &BerTag {
        &self.tag
    }

    /// Number of bytes in the value region
    pub fn length(&self) -> usize {
        self.value.len()
    }

    /// Length octets as they will be serialized
    pub fn length_octets(&self) -> &[u8] {
        &self.length_octets
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    pub fn value_hex(&self) -> String {
        encode_hex(&self.value)
    }

    pub fn is_constructed(&self) -> bool {
        self.tag.is_constructed()
    }

    /// Nested elements; empty for primitive and unparsed elements
    pub fn children(&self) -> &[TlvElement] {
        &self.children
    }

    /// Constructed, but the value region is not valid nested TLV
    pub fn is_unparsed(&self) -> bool {
        self.unparsed
    }

    /// Size of the full tag + length + value encoding
    pub fn encoded_len(&self) -> usize {
        self.tag.len() + self.length_octets.len() + self.value.len()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut encoder = BerEncoder::with_capacity(self.encoded_len());
        encoder.encode_element(self);
        encoder.into_bytes()
    }

    /// Find a descendant by path, the first segment matching this element's children
    pub fn find(&self, path: &TagPath) -> Option<&TlvElement> {
        find_in(&self.children, path.segments())
    }

    pub(crate) fn children_mut(&mut self) -> &mut [TlvElement] {
        &mut self.children
    }

    /// Replace the value region and the decoded children
    pub(crate) fn replace_value(&mut self, value: Vec<u8>, children: Option<Vec<TlvElement>>) {
        let previous_length = self.value.len();
        self.value = value;
        self.unparsed = self.tag.is_constructed() && children.is_none();
        self.children = children.unwrap_or_default();
        self.sync_length_octets(previous_length);
    }

    /// Recompute the value region from the (possibly edited) children
    pub(crate) fn rebuild_from_children(&mut self) {
        let previous_length = self.value.len();
        let mut encoder = BerEncoder::with_capacity(previous_length);
        encoder.encode_elements(&self.children);
        self.value = encoder.into_bytes();
        self.sync_length_octets(previous_length);
    }

    /// Re-encode the length octets if the value size changed
    ///
    /// Unchanged sizes keep the octets the element was read with, so a
    /// non-minimal length encoding survives an edit that does not resize.
    fn sync_length_octets(&mut self, previous_length: usize) {
        if self.value.len() != previous_length {
            self.length_octets = BerLength::new(self.value.len()).encode();
        }
    }
}

impl Serialize for TlvElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TlvElement", 7)?;
        state.serialize_field("tag", &self.tag)?;
        state.serialize_field("class", &self.tag.class())?;
        state.serialize_field("number", &self.tag.number())?;
        state.serialize_field("length", &self.length())?;
        state.serialize_field("value", &self.value_hex())?;
        state.serialize_field("constructed", &self.is_constructed())?;
        if self.unparsed {
            state.serialize_field("unparsed", &true)?;
        } else if self.is_constructed() {
            state.serialize_field("children", &self.children)?;
        } else {
            state.skip_field("children")?;
        }
        state.end()
    }
}

/// Ordered top-level elements of a parsed stream
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TlvStream {
    elements: Vec<TlvElement>,
}

impl TlvStream {
    pub fn new(elements: Vec<TlvElement>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[TlvElement] {
        &self.elements
    }

    pub(crate) fn elements_mut(&mut self) -> &mut [TlvElement] {
        &mut self.elements
    }

    pub fn into_elements(self) -> Vec<TlvElement> {
        self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Find an element by path, starting at the top level
    ///
    /// Each segment selects the first element with a matching tag.
    pub fn find(&self, path: &TagPath) -> Option<&TlvElement> {
        find_in(&self.elements, path.segments())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let capacity = self.elements.iter().map(TlvElement::encoded_len).sum();
        let mut encoder = BerEncoder::with_capacity(capacity);
        encoder.encode_elements(&self.elements);
        encoder.into_bytes()
    }

    pub fn to_hex(&self) -> String {
        encode_hex(&self.to_bytes())
    }
}

fn find_in<'a>(elements: &'a [TlvElement], segments: &[BerTag]) -> Option<&'a TlvElement> {
    let (first, rest) = segments.split_first()?;
    let element = elements.iter().find(|e| e.tag() == first)?;
    if rest.is_empty() {
        Some(element)
    } else {
        find_in(&element.children, rest)
    }
}

fn write_tree(f: &mut fmt::Formatter<'_>, elements: &[TlvElement], indent: usize) -> fmt::Result {
    for element in elements {
        write!(f, "{:width$}{} ({})", "", element.tag, element.length(), width = indent * 2)?;
        if element.unparsed {
            writeln!(f, " unparsed: {}", element.value_hex())?;
        } else if element.is_constructed() {
            writeln!(f)?;
            write_tree(f, &element.children, indent + 1)?;
        } else {
            writeln!(f, " {}", element.value_hex())?;
        }
    }
    Ok(())
}

/// Indented read-only tree, one element per line
impl fmt::Display for TlvStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(f, &self.elements, 0)
    }
}
