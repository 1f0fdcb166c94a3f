//! Text range types for source location tracking.
//!
//! Parsed nodes carry the byte range of the text they were produced from.
//! Synthesized nodes have no source text; they carry the sentinel range
//! `(-1, -1)`. Positions are therefore signed.

use std::fmt;

/// A position in source text: a byte offset, or `-1` for "no position".
pub type TextPos = i32;

/// A text range with start and end positions, end exclusive.
///
/// `TextRange::SYNTHESIZED` (`-1..-1`) marks nodes built by a transform
/// rather than by parsing.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextRange {
    /// The byte offset where this range starts (inclusive), or -1.
    pub pos: TextPos,
    /// The byte offset where this range ends (exclusive), or -1.
    pub end: TextPos,
}

impl TextRange {
    /// The range of a node with no source text.
    pub const SYNTHESIZED: TextRange = TextRange { pos: -1, end: -1 };

    /// Create a new text range.
    #[inline]
    pub fn new(pos: TextPos, end: TextPos) -> Self {
        Self { pos, end }
    }

    /// Create an empty range at a position.
    #[inline]
    pub fn empty(pos: TextPos) -> Self {
        Self { pos, end: pos }
    }

    /// Whether either bound is the "no position" sentinel.
    #[inline]
    pub fn is_synthesized(&self) -> bool {
        self.pos < 0 || self.end < 0
    }

    /// The length of this range in bytes. Zero for synthesized ranges.
    #[inline]
    pub fn len(&self) -> u32 {
        if self.is_synthesized() {
            0
        } else {
            (self.end - self.pos) as u32
        }
    }

    /// Whether this range is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this range contains a position.
    #[inline]
    pub fn contains(&self, pos: TextPos) -> bool {
        pos >= self.pos && pos < self.end
    }
}

impl fmt::Debug for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.pos, self.end)
    }
}

/// A span in source text, defined by a start position and a length.
/// The start/length form consumers outside this layer tend to expect.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextSpan {
    /// The byte offset where this span starts.
    pub start: u32,
    /// The length of this span in bytes.
    pub length: u32,
}

impl TextSpan {
    /// Create a new text span.
    #[inline]
    pub fn new(start: u32, length: u32) -> Self {
        Self { start, length }
    }

    /// Create a span from start and end positions.
    #[inline]
    pub fn from_bounds(start: u32, end: u32) -> Self {
        debug_assert!(end >= start);
        Self {
            start,
            length: end - start,
        }
    }

    /// The end position of this span (exclusive).
    #[inline]
    pub fn end(&self) -> u32 {
        self.start + self.length
    }

    /// Whether this span contains the given position.
    #[inline]
    pub fn contains(&self, pos: u32) -> bool {
        pos >= self.start && pos < self.end()
    }
}

impl fmt::Debug for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

impl TryFrom<TextRange> for TextSpan {
    type Error = ();

    /// Fails for synthesized ranges, which have no span in any file.
    fn try_from(range: TextRange) -> Result<Self, ()> {
        if range.is_synthesized() {
            Err(())
        } else {
            Ok(TextSpan::from_bounds(range.pos as u32, range.end as u32))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesized_range() {
        let range = TextRange::SYNTHESIZED;
        assert!(range.is_synthesized());
        assert_eq!(range.len(), 0);
        assert!(TextSpan::try_from(range).is_err());
    }

    #[test]
    fn test_parsed_range() {
        let range = TextRange::new(5, 15);
        assert!(!range.is_synthesized());
        assert_eq!(range.len(), 10);
        assert!(range.contains(5));
        assert!(range.contains(14));
        assert!(!range.contains(15));

        let span = TextSpan::try_from(range).unwrap();
        assert_eq!(span.start, 5);
        assert_eq!(span.length, 10);
    }
}
