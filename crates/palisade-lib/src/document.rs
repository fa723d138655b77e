//! Parser facade and the parsed document handle.

use palisade_core::{BoundedCharGate, LimitsConfig, SourceAggregate, drain};
use rowan::GreenNode;
use tracing::{debug, trace};

use crate::parser::lexer::lex;
use crate::parser::{
    BailStrategy, CstPrinter, ParseGuard, ParseListener, Parser, SyntaxNode, ast,
};
use crate::Result;

/// Parses documents under one fixed set of limits.
///
/// The limits are resolved once, at construction, and never change. A parser is
/// `Copy` and holds no per-parse state, so one instance can serve any number of
/// threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentParser {
    limits: LimitsConfig,
}

impl DocumentParser {
    pub fn new(limits: LimitsConfig) -> Self {
        Self { limits }
    }

    /// Limits from `PALISADE_MAX_*` environment variables.
    pub fn from_env() -> Self {
        Self::new(LimitsConfig::from_env())
    }

    /// No ceilings at all. Only for input that is not attacker-controlled.
    pub fn trusted() -> Self {
        Self::new(LimitsConfig::trusted())
    }

    pub fn limits(&self) -> &LimitsConfig {
        &self.limits
    }

    pub fn parse(&self, source: &SourceAggregate) -> Result<Document> {
        self.run(source, None)
    }

    /// Single unnamed fragment.
    pub fn parse_str(&self, text: &str) -> Result<Document> {
        self.parse(&SourceAggregate::one_liner(text)?)
    }

    /// Parses while reporting every event to `listener`, after the guard has
    /// accepted it.
    pub fn parse_with_listener(
        &self,
        source: &SourceAggregate,
        listener: &mut dyn ParseListener,
    ) -> Result<Document> {
        self.run(source, Some(listener))
    }

    fn run(
        &self,
        source: &SourceAggregate,
        listener: Option<&mut dyn ParseListener>,
    ) -> Result<Document> {
        let result = self.run_inner(source, listener);
        if let Err(err) = &result {
            debug!(kind = ?err.kind(), "parse aborted");
        }
        result
    }

    fn run_inner(
        &self,
        source: &SourceAggregate,
        listener: Option<&mut dyn ParseListener>,
    ) -> Result<Document> {
        let text = self.read_text(source)?;
        let tokens = lex(&text);

        let mut parser = Parser::new(&text, tokens, Box::new(BailStrategy::new(source)));
        if let Some(guard) = ParseGuard::new(&self.limits, source) {
            parser = parser.with_listener(Box::new(guard));
        }
        if let Some(listener) = listener {
            parser = parser.with_listener(Box::new(listener));
        }

        let output = parser.parse()?;
        trace!(tokens = output.token_count, "parse complete");
        Ok(Document {
            green: output.green,
        })
    }

    /// Pulls the whole aggregate through the character gate, when enabled.
    fn read_text(&self, source: &SourceAggregate) -> Result<String> {
        let text = match self.limits.char_ceiling() {
            Some(ceiling) => drain(BoundedCharGate::new(source.reader(), ceiling))?,
            None => drain(source.reader())?,
        };
        Ok(text)
    }
}

/// A successfully parsed executable document.
///
/// Holds the immutable green tree; it is `Send + Sync` and cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Document {
    green: GreenNode,
}

impl Document {
    pub fn as_cst(&self) -> &GreenNode {
        &self.green
    }

    /// Creates a typed view over the immutable green tree.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn root(&self) -> ast::Document {
        ast::Document::cast(self.syntax()).expect("parser always produces a Document root")
    }

    /// The exact text the document was parsed from, trivia included.
    pub fn text(&self) -> String {
        self.syntax().text().to_string()
    }

    pub fn operation_count(&self) -> usize {
        self.root().operations().count()
    }

    pub fn fragment_count(&self) -> usize {
        self.root().fragments().count()
    }

    pub fn dump_cst(&self) -> String {
        CstPrinter::new().dump(&self.syntax())
    }

    pub fn dump_cst_full(&self) -> String {
        CstPrinter::new()
            .with_trivia(true)
            .with_spans(true)
            .dump(&self.syntax())
    }
}
