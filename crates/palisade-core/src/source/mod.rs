//! Source input for a parse.
//!
//! A parse reads one logical document that may be stitched together from
//! several named fragments. [`SourceAggregate`] owns the fragments and maps
//! absolute offsets back to `(name, line, column)`. Characters reach the lexer
//! through the [`CharSource`] pull interface, optionally wrapped in a
//! [`BoundedCharGate`] that enforces the character ceiling.
//!
//! Offsets are UTF-8 byte offsets into the concatenated text; ceilings count
//! Unicode scalar values.

mod aggregate;
mod gate;

#[cfg(test)]
mod gate_tests;

pub use aggregate::{AggregateReader, Segment, SegmentId, SourceAggregate, SourceSpan};
pub use gate::{BoundedCharGate, drain};

/// Errors raised while pulling characters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    #[error(
        "More than {ceiling} characters have been presented. To prevent Denial Of Service attacks, parsing has been cancelled."
    )]
    CharacterLimitExceeded { ceiling: u32 },
    #[error("Source of {len} bytes exceeds the 4 GiB offset range.")]
    SourceTooLarge { len: usize },
}

/// A pull-based character stream.
///
/// Each wrapper holds exactly one delegate and adds one concern.
pub trait CharSource {
    /// Appends at most `max_chars` characters to `buf` and returns how many were
    /// appended. `Ok(0)` with a non-zero `max_chars` means end of stream.
    fn read(&mut self, buf: &mut String, max_chars: usize) -> Result<usize, ReadError>;

    /// Whether the stream has nothing left. Never consumes characters.
    fn is_exhausted(&self) -> bool;
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn read(&mut self, buf: &mut String, max_chars: usize) -> Result<usize, ReadError> {
        (**self).read(buf, max_chars)
    }

    fn is_exhausted(&self) -> bool {
        (**self).is_exhausted()
    }
}
