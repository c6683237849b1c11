//! Colon-separated tag paths
//!
//! `E0:9F33` names the first `9F33` child of the first top-level `E0`.
//! Paths may be arbitrarily deep. When siblings share a tag, each segment
//! selects the first of them.

use crate::ber::BerTag;
use bertlv_core::{TlvError, TlvResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static SEGMENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[0-9A-Fa-f]{2})+$").expect("segment pattern is valid"));

/// Path of tags from a top-level element down to a descendant
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagPath {
    segments: Vec<BerTag>,
}

impl TagPath {
    /// Parse a path such as `"E0:9F33"`
    ///
    /// # Error Handling
    /// Returns `InvalidPath` if the path is empty, has an empty segment, or a
    /// segment is not exactly one complete hex-encoded tag.
    pub fn parse(s: &str) -> TlvResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TlvError::InvalidPath("Empty path".to_string()));
        }

        let segments = trimmed
            .split(':')
            .enumerate()
            .map(|(index, segment)| Self::parse_segment(trimmed, index, segment))
            .collect::<TlvResult<Vec<_>>>()?;

        Ok(Self { segments })
    }

    fn parse_segment(path: &str, index: usize, segment: &str) -> TlvResult<BerTag> {
        if segment.is_empty() {
            return Err(TlvError::InvalidPath(format!(
                "Empty segment {} in {:?}",
                index, path
            )));
        }
        if !SEGMENT_PATTERN.is_match(segment) {
            return Err(TlvError::InvalidPath(format!(
                "Segment {:?} in {:?} is not an even-length hex tag",
                segment, path
            )));
        }
        BerTag::from_hex(segment).map_err(|e| {
            TlvError::InvalidPath(format!("Segment {:?} in {:?}: {}", segment, path, e))
        })
    }

    pub fn segments(&self) -> &[BerTag] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false for a parsed path
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The first `count` segments joined with `:`
    pub fn prefix(&self, count: usize) -> String {
        self.segments
            .iter()
            .take(count)
            .map(BerTag::to_hex)
            .collect::<Vec<_>>()
            .join(":")
    }
}

impl FromStr for TagPath {
    type Err = TlvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TagPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix(self.segments.len()))
    }
}
