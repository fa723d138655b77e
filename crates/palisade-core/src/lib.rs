//! Core data structures for Palisade.
//!
//! - `source` - multi-fragment input, offset-to-location mapping and the
//!   character-bounded read path that feeds the lexer
//! - `limits` - resource ceilings resolved once per parser instance
//!
//! Nothing here knows about the GraphQL grammar; the parser crate builds on
//! these types.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod limits;
pub mod source;

#[cfg(test)]
mod limits_tests;

pub use limits::LimitsConfig;
pub use source::{
    AggregateReader, BoundedCharGate, CharSource, ReadError, Segment, SegmentId, SourceAggregate,
    SourceSpan, drain,
};
