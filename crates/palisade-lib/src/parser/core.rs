//! Parser state machine and low-level operations.

use rowan::{GreenNode, GreenNodeBuilder, TextRange, TextSize};

use super::bail::ErrorStrategy;
use super::cst::{SyntaxKind, TokenSet};
use super::events::{EOF_TEXT, ParseEvent, ParseListener, SyntaxAnomaly};
use super::lexer::{Token, token_text};
use super::trailing::find_trailing_token;
use crate::{Error, Result};

/// Output of a successful parse.
#[derive(Debug)]
pub struct ParseOutput {
    pub green: GreenNode,
    /// Significant tokens in the input.
    pub token_count: usize,
}

/// Recursive-descent parser over a pre-lexed token vector.
///
/// Trivia tokens are buffered and flushed when starting a new node. Every
/// production returns `Result`; the first error unwinds the whole descent.
pub struct Parser<'a> {
    pub(super) source: &'a str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) trivia_buffer: Vec<Token>,
    pub(super) builder: GreenNodeBuilder<'static>,
    pub(super) rule_stack: Vec<SyntaxKind>,
    pub(super) last_consumed: Option<usize>,
    pub(super) debug_fuel: std::cell::Cell<u32>,
    listeners: Vec<Box<dyn ParseListener + 'a>>,
    strategy: Box<dyn ErrorStrategy + 'a>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, tokens: Vec<Token>, strategy: Box<dyn ErrorStrategy + 'a>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            trivia_buffer: Vec::with_capacity(4),
            builder: GreenNodeBuilder::new(),
            rule_stack: Vec::with_capacity(32),
            last_consumed: None,
            debug_fuel: std::cell::Cell::new(256),
            listeners: Vec::new(),
            strategy,
        }
    }

    /// Attaches an observer. Listeners run in attachment order.
    pub fn with_listener(mut self, listener: Box<dyn ParseListener + 'a>) -> Self {
        self.listeners.push(listener);
        self
    }

    /// Parses one document and checks that nothing significant follows it.
    pub fn parse(mut self) -> Result<ParseOutput> {
        self.parse_document()?;

        if let Some(idx) = find_trailing_token(&self.tokens, self.last_consumed) {
            let token = self.tokens[idx];
            let text = token_text(self.source, &token);
            return Err(self.strategy.trailing_input(token.span, text));
        }

        let token_count = self.tokens.iter().filter(|t| !t.kind.is_trivia()).count();
        Ok(ParseOutput {
            green: self.builder.finish(),
            token_count,
        })
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(256);
    }

    pub(super) fn skip_trivia_to_buffer(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            self.trivia_buffer.push(self.tokens[self.pos]);
            self.pos += 1;
        }
    }

    pub(super) fn drain_trivia(&mut self) {
        for token in self.trivia_buffer.drain(..) {
            let text = token_text(self.source, &token);
            self.builder.token(token.kind.into(), text);
        }
    }

    pub(super) fn eat_trivia(&mut self) {
        self.skip_trivia_to_buffer();
        self.drain_trivia();
    }

    /// Kind of the current significant token, `Error` at end of input.
    pub(super) fn current(&mut self) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        self.ensure_progress();
        self.tokens
            .get(self.pos)
            .map_or(SyntaxKind::Error, |t| t.kind)
    }

    pub(super) fn currently_is(&mut self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn currently_is_one_of(&mut self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    /// Whether the current token is the name `text`.
    pub(super) fn at_keyword(&mut self, text: &str) -> bool {
        self.currently_is(SyntaxKind::Name) && self.current_text() == text
    }

    pub(super) fn current_text(&mut self) -> &'a str {
        self.skip_trivia_to_buffer();
        self.tokens
            .get(self.pos)
            .map_or(EOF_TEXT, |t| token_text(self.source, t))
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.skip_trivia_to_buffer();
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    /// LL(k) lookahead past trivia: kind and text of the `n`th significant token.
    pub(super) fn peek_nth(&mut self, n: usize) -> (SyntaxKind, &'a str) {
        self.skip_trivia_to_buffer();
        self.ensure_progress();
        let source = self.source;
        self.tokens[self.pos..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(n)
            .map_or((SyntaxKind::Error, EOF_TEXT), |t| {
                (t.kind, token_text(source, t))
            })
    }

    fn notify(&mut self, event: &ParseEvent<'_>) -> Result<()> {
        for listener in &mut self.listeners {
            listener.on_event(event)?;
        }
        Ok(())
    }

    /// Reports a rule entry, then opens its node.
    pub(super) fn start_node(&mut self, kind: SyntaxKind) -> Result<()> {
        let start = self.current_span();
        let start_text = self.current_text();
        self.notify(&ParseEvent::RuleEnter {
            rule: kind,
            start,
            start_text,
        })?;
        self.reset_debug_fuel();
        // Leading trivia of the root node stays inside it.
        if !self.rule_stack.is_empty() {
            self.drain_trivia();
        }
        self.builder.start_node(kind.into());
        self.rule_stack.push(kind);
        Ok(())
    }

    pub(super) fn finish_node(&mut self) -> Result<()> {
        let rule = self.rule_stack.pop();
        debug_assert!(rule.is_some(), "finish_node without matching start_node");
        self.builder.finish_node();
        match rule {
            Some(rule) => self.notify(&ParseEvent::RuleExit { rule }),
            None => Ok(()),
        }
    }

    /// Reports the current significant token, then adds it to the tree.
    pub(super) fn bump(&mut self) -> Result<()> {
        self.skip_trivia_to_buffer();
        assert!(self.pos < self.tokens.len(), "bump called at EOF");

        let token = self.tokens[self.pos];
        let text = token_text(self.source, &token);
        self.notify(&ParseEvent::Terminal {
            kind: token.kind,
            text,
            range: token.span,
        })?;

        self.reset_debug_fuel();
        self.drain_trivia();
        self.builder.token(token.kind.into(), text);
        self.last_consumed = Some(self.pos);
        self.pos += 1;
        Ok(())
    }

    /// Consumes the current token if it has `kind`, otherwise fails.
    pub(super) fn expect(&mut self, kind: SyntaxKind, what: &str) -> Result<()> {
        if self.currently_is(kind) {
            return self.bump();
        }
        Err(self.unexpected(format!("expected {}", what)))
    }

    /// Builds the terminal error for the current token.
    ///
    /// Listeners see the anomaly first; the error strategy then shapes the
    /// error. Nothing is consumed and no recovery is attempted.
    pub(super) fn unexpected(&mut self, message: impl Into<String>) -> Error {
        let anomaly = SyntaxAnomaly {
            range: self.current_span(),
            offending_text: self.current_text(),
            message: message.into(),
        };
        if let Err(err) = self.notify(&anomaly.as_event()) {
            return err;
        }
        self.strategy.report(&anomaly)
    }
}
