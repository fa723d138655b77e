//! Grammar productions for GraphQL executable documents.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Each production opens its node at its first significant token and returns
//! the first error it meets; nothing resynchronizes.

mod definitions;
mod selections;
mod values;

use super::core::Parser;
use super::cst::SyntaxKind;
use crate::Result;

/// Keywords that open an operation.
const OPERATION_TYPES: [&str; 3] = ["query", "mutation", "subscription"];

impl Parser<'_> {
    /// `Document := Definition+`
    ///
    /// Stops at the first token that cannot start a definition; whatever follows
    /// is left for the trailing-input check.
    pub(super) fn parse_document(&mut self) -> Result<()> {
        self.start_node(SyntaxKind::Document)?;

        if !self.at_definition_start() {
            return Err(self.unexpected("expected a definition"));
        }
        while self.at_definition_start() {
            self.parse_definition()?;
        }

        self.eat_trivia();
        self.finish_node()
    }

    fn at_definition_start(&mut self) -> bool {
        match self.current() {
            SyntaxKind::BraceOpen => true,
            SyntaxKind::Name => {
                let text = self.current_text();
                text == "fragment" || OPERATION_TYPES.contains(&text)
            }
            _ => false,
        }
    }

    fn parse_definition(&mut self) -> Result<()> {
        if self.at_keyword("fragment") {
            self.parse_fragment_definition()
        } else {
            self.parse_operation_definition()
        }
    }

    /// `Name`, failing with `expected {what}`.
    pub(super) fn expect_name(&mut self, what: &str) -> Result<()> {
        self.expect(SyntaxKind::Name, what)
    }

    /// Consumes the keyword `text` or fails.
    pub(super) fn expect_keyword(&mut self, text: &str) -> Result<()> {
        if self.at_keyword(text) {
            return self.bump();
        }
        Err(self.unexpected(format!("expected '{}'", text)))
    }
}
