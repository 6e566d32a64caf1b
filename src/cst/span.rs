//! Span and position utilities for the syntax tree

use nom_locate::LocatedSpan;

/// Parser input type, tracks the byte offset into the original source
pub type Input<'a> = LocatedSpan<&'a str>;

/// Byte offsets `[start, end)` into the original source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates a span from two parser positions (start inclusive, end exclusive)
    pub fn from_range(start: Input, end: Input) -> Self {
        Self {
            start: start.location_offset(),
            end: end.location_offset(),
        }
    }

    /// Creates a span covering a recognized fragment
    pub fn of(fragment: Input) -> Self {
        let start = fragment.location_offset();
        Self {
            start,
            end: start + fragment.fragment().len(),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// The exact source text covered by this span.
    ///
    /// Out of bounds or non char-boundary spans yield an empty string rather
    /// than panicking.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }

    /// Text accessor for nodes that may lack position information.
    /// Synthetic nodes (no span) render as the empty string.
    pub fn text_of<'a>(span: Option<Span>, source: &'a str) -> &'a str {
        span.map_or("", |span| span.text(source))
    }
}
