//! Parser infrastructure for GraphQL executable documents.
//!
//! # Architecture
//!
//! This parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder.
//!
//! - Zero-copy parsing: tokens carry spans, text sliced only when building tree nodes
//! - Trivia buffering: whitespace, commas and comments are collected, then attached as
//!   leading trivia; they are never reported to listeners
//! - Event stream: every node start, node finish and significant token is reported to the
//!   attached [`ParseListener`]s before the tree builder sees it
//!
//! # Failure
//!
//! There is no recovery. Productions return `Result` and the first failure unwinds the
//! whole descent: a listener veto (see [`ParseGuard`]), a syntax anomaly shaped by the
//! [`ErrorStrategy`], or unconsumed tokens after the document.

pub mod ast;
pub mod cst;
pub mod events;
pub mod lexer;

mod bail;
mod core;
mod grammar;
mod guard;
mod invariants;
mod printer;
mod trailing;

#[cfg(test)]
mod bail_tests;
#[cfg(test)]
mod events_tests;

pub use bail::{BailStrategy, ErrorStrategy};
pub use core::{ParseOutput, Parser};
pub use cst::{SyntaxKind, SyntaxNode, SyntaxToken};
pub use events::{EOF_TEXT, EventRecorder, ParseEvent, ParseListener, RecordedEvent};
pub use guard::ParseGuard;
pub use printer::CstPrinter;
pub use trailing::find_trailing_token;
