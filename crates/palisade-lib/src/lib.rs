//! Palisade: a resource-governed GraphQL document parser.
//!
//! Every parse runs behind the ceilings of a [`LimitsConfig`]: characters are
//! counted before they reach the lexer, rule depth and significant tokens are
//! counted while the grammar runs, and the first syntax error ends the parse.
//!
//! # Example
//!
//! ```
//! use palisade_lib::{DocumentParser, ErrorKind, LimitsConfig};
//!
//! let parser = DocumentParser::new(LimitsConfig::default());
//! let document = parser.parse_str("{ hero { name } }").expect("valid query");
//! assert_eq!(document.operation_count(), 1);
//!
//! let err = parser.parse_str("{ a } }").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::TrailingInput);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod document;
pub mod parser;
pub mod validate;

#[cfg(test)]
mod document_tests;

use palisade_core::{ReadError, SourceSpan};
use serde::Serialize;

pub use document::{Document, DocumentParser};
pub use palisade_core::{LimitsConfig, SourceAggregate};
pub use validate::{ValidationError, ValidationErrorKind, ValidationErrors, validate};

/// What ended a parse or a validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    CharacterLimitExceeded,
    RuleDepthExceeded,
    TokenCountExceeded,
    SyntaxError,
    TrailingInput,
    /// Raised by validation, never by the parser.
    NodeCountExceeded,
}

/// The single terminal error of a parse or validation pass.
///
/// Every grammar production returns `Result<()>`, so the payload is boxed to
/// keep that result one pointer wide on deeply nested input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("{}", .inner.message)]
pub struct Error {
    inner: Box<ErrorInner>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct ErrorInner {
    kind: ErrorKind,
    span: Option<SourceSpan>,
    message: String,
    offending_text: Option<String>,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            inner: Box::new(ErrorInner {
                kind,
                span: None,
                message: message.into(),
                offending_text: None,
            }),
        }
    }

    pub fn with_span(mut self, span: Option<SourceSpan>) -> Self {
        self.inner.span = span;
        self
    }

    pub fn with_offending_text(mut self, text: impl Into<String>) -> Self {
        self.inner.offending_text = Some(text.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.inner.kind
    }

    /// `None` when the offset could not be resolved.
    pub fn span(&self) -> Option<&SourceSpan> {
        self.inner.span.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.inner.message
    }

    pub fn offending_text(&self) -> Option<&str> {
        self.inner.offending_text.as_deref()
    }
}

impl From<ReadError> for Error {
    fn from(err: ReadError) -> Self {
        match err {
            ReadError::CharacterLimitExceeded { .. } | ReadError::SourceTooLarge { .. } => {
                Error::new(ErrorKind::CharacterLimitExceeded, err.to_string())
            }
        }
    }
}

/// Result type for parsing and validation.
pub type Result<T> = std::result::Result<T, Error>;
