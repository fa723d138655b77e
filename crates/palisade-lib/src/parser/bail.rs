//! Fail-fast error handling.
//!
//! The grammar never resynchronizes: the first anomaly is handed to the
//! error strategy, which turns it into the single error of the parse.

use palisade_core::SourceAggregate;
use rowan::TextRange;
use tracing::debug;

use super::events::SyntaxAnomaly;
use crate::{Error, ErrorKind};

/// Policy for shaping the terminal error of a failed parse.
pub trait ErrorStrategy {
    /// Called once, for the first anomaly. The parse is over afterwards.
    fn report(&mut self, anomaly: &SyntaxAnomaly<'_>) -> Error;

    /// Called when a complete document is followed by unconsumed tokens.
    fn trailing_input(&mut self, range: TextRange, text: &str) -> Error;
}

/// Locates the anomaly and reports it as a [`ErrorKind::SyntaxError`].
#[derive(Debug, Clone, Copy)]
pub struct BailStrategy<'a> {
    locator: &'a SourceAggregate,
}

impl<'a> BailStrategy<'a> {
    pub fn new(locator: &'a SourceAggregate) -> Self {
        Self { locator }
    }
}

impl ErrorStrategy for BailStrategy<'_> {
    fn report(&mut self, anomaly: &SyntaxAnomaly<'_>) -> Error {
        debug!(offending = anomaly.offending_text, "bailing out on syntax error");
        Error::new(
            ErrorKind::SyntaxError,
            format!(
                "Invalid syntax with offending token '{}': {}",
                anomaly.offending_text, anomaly.message
            ),
        )
        .with_span(self.locator.locate(anomaly.range.start().into()))
        .with_offending_text(anomaly.offending_text)
    }

    fn trailing_input(&mut self, range: TextRange, text: &str) -> Error {
        debug!(offending = text, "rejecting unconsumed trailing input");
        Error::new(
            ErrorKind::TrailingInput,
            format!(
                "Invalid syntax encountered. There are extra tokens in the text that have not been consumed. Offending token '{}'",
                text
            ),
        )
        .with_span(self.locator.locate(range.start().into()))
        .with_offending_text(text)
    }
}
