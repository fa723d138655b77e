//! Fragment storage and location mapping.
//!
//! Line and column numbering restarts at `(1, 0)` at every segment boundary:
//! a location always describes a position inside the fragment it came from.

use std::fmt;

use serde::Serialize;

use super::{CharSource, ReadError};

/// Lightweight handle to a segment in an aggregate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct SegmentId(pub(crate) u32);

impl SegmentId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A resolved location.
///
/// `line` is 1-based. `column` counts characters since the last line
/// terminator, starting at 0. `offset` is the byte offset into the whole
/// aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SourceSpan {
    pub source_name: Option<String>,
    pub line: u32,
    pub column: u32,
    pub offset: u32,
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source_name {
            Some(name) => write!(f, "{}:{}:{}", name, self.line, self.column),
            None => write!(f, "{}:{}", self.line, self.column),
        }
    }
}

/// One named fragment and its position in the aggregate.
#[derive(Clone, Debug)]
pub struct Segment {
    name: Option<String>,
    content: String,
    start: u32,
}

impl Segment {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name for diagnostics; unnamed fragments show as `<query>`.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<query>")
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Byte offset of the first byte of this segment in the aggregate.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Length in bytes.
    pub fn len(&self) -> u32 {
        self.content.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn end(&self) -> u32 {
        self.start + self.len()
    }
}

/// Ordered, contiguous fragments read as one logical document.
///
/// Segments never overlap and their start offsets never decrease; the total
/// length equals the sum of the segment lengths.
#[derive(Clone, Debug, Default)]
pub struct SourceAggregate {
    segments: Vec<Segment>,
    len: u32,
}

impl SourceAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single unnamed fragment, the common path.
    pub fn one_liner(content: &str) -> Result<Self, ReadError> {
        let mut aggregate = Self::new();
        aggregate.add(None, content)?;
        Ok(aggregate)
    }

    /// Single fragment labelled with `name` for diagnostics.
    pub fn named(name: &str, content: &str) -> Result<Self, ReadError> {
        let mut aggregate = Self::new();
        aggregate.add(Some(name), content)?;
        Ok(aggregate)
    }

    /// Appends a fragment after all existing ones.
    ///
    /// Fails without modifying the aggregate when the total would no longer
    /// fit a `u32` offset.
    pub fn add(&mut self, name: Option<&str>, content: &str) -> Result<SegmentId, ReadError> {
        let len = extend_len(self.len, content.len()).ok_or(ReadError::SourceTooLarge {
            len: (self.len as usize).saturating_add(content.len()),
        })?;
        let id = SegmentId(self.segments.len() as u32);
        self.segments.push(Segment {
            name: name.map(str::to_owned),
            content: content.to_owned(),
            start: self.len,
        });
        self.len = len;
        Ok(id)
    }

    /// Total length in bytes.
    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.get(id.index())
    }

    /// The segment holding `offset`.
    ///
    /// The end-of-input offset belongs to the last non-empty segment. Offsets
    /// past the end, or any offset into an empty aggregate, have no segment.
    pub fn segment_at(&self, offset: u32) -> Option<&Segment> {
        if self.len == 0 || offset > self.len {
            return None;
        }
        if offset == self.len {
            return self.segments.iter().rev().find(|s| !s.is_empty());
        }
        let idx = self.segments.partition_point(|s| s.end() <= offset);
        self.segments.get(idx)
    }

    /// Resolves an absolute byte offset. Never panics; unknown offsets give `None`.
    pub fn locate(&self, offset: u32) -> Option<SourceSpan> {
        let segment = self.segment_at(offset)?;
        let content = segment.content();
        let mut local = (offset - segment.start()) as usize;
        while !content.is_char_boundary(local) {
            local -= 1;
        }

        let (line, column) = line_column(&content[..local]);
        Some(SourceSpan {
            source_name: segment.name.clone(),
            line,
            column,
            offset,
        })
    }

    /// A fresh reader positioned at the start of the first segment.
    pub fn reader(&self) -> AggregateReader<'_> {
        AggregateReader {
            aggregate: self,
            segment: 0,
            pos: 0,
        }
    }
}

/// Line and column at the end of `prefix`. `\r\n` counts as one terminator.
fn line_column(prefix: &str) -> (u32, u32) {
    let mut line = 1;
    let mut column = 0;
    let mut prev_cr = false;
    for c in prefix.chars() {
        match c {
            '\n' if prev_cr => {}
            '\n' | '\r' => {
                line += 1;
                column = 0;
            }
            _ => column += 1,
        }
        prev_cr = c == '\r';
    }
    (line, column)
}

/// Reads an aggregate's segments back to back as one stream.
#[derive(Clone, Debug)]
pub struct AggregateReader<'a> {
    aggregate: &'a SourceAggregate,
    segment: usize,
    pos: usize,
}

impl CharSource for AggregateReader<'_> {
    fn read(&mut self, buf: &mut String, max_chars: usize) -> Result<usize, ReadError> {
        let segments = self.aggregate.segments();
        let mut total = 0;
        while total < max_chars && self.segment < segments.len() {
            let rest = &segments[self.segment].content()[self.pos..];
            if rest.is_empty() {
                self.segment += 1;
                self.pos = 0;
                continue;
            }
            let (bytes, chars) = take_chars(rest, max_chars - total);
            buf.push_str(&rest[..bytes]);
            self.pos += bytes;
            total += chars;
        }
        Ok(total)
    }

    fn is_exhausted(&self) -> bool {
        let segments = self.aggregate.segments();
        match segments.get(self.segment) {
            None => true,
            Some(current) => {
                self.pos >= current.content().len()
                    && segments[self.segment + 1..].iter().all(Segment::is_empty)
            }
        }
    }
}

/// Byte length and char count of the longest prefix with at most `max` chars.
fn take_chars(text: &str, max: usize) -> (usize, usize) {
    let mut chars = 0;
    for (idx, _) in text.char_indices() {
        if chars == max {
            return (idx, chars);
        }
        chars += 1;
    }
    (text.len(), chars)
}

/// `current + added` as a `u32`, or `None` past `u32::MAX`.
pub(super) fn extend_len(current: u32, added: usize) -> Option<u32> {
    u32::try_from(added).ok()?.checked_add(current)
}
