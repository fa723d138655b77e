//! Lexer for GraphQL executable documents.
//!
//! Tokens carry a kind and a byte span into the source; the text is sliced out
//! with [`token_text`] when the grammar or a diagnostic needs it.
//!
//! Input GraphQL has no token for (`%`, `~`, an unterminated block string) does
//! not abort lexing. Each maximal run of it becomes one `Garbage` token, so
//! `{ a %% }` yields a single `%%` the parser reports as the offending token,
//! and `{ a } %%` surfaces as trailing input.

use logos::Logos;
use rowan::{TextRange, TextSize};

use super::cst::SyntaxKind;

/// A token kind and its byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

/// Byte offset as a `TextSize`, saturating at `u32::MAX`.
///
/// Parser input comes out of a `SourceAggregate`, whose length never exceeds
/// `u32::MAX`, so saturation is unreachable there.
pub(crate) fn offset(n: usize) -> TextSize {
    TextSize::try_from(n).unwrap_or(TextSize::new(u32::MAX))
}

fn span(start: usize, end: usize) -> TextRange {
    TextRange::new(offset(start), offset(end))
}

/// Tokenizes a GraphQL document, whitespace, commas and comments included.
///
/// Unrecognised characters are merged into `Garbage` runs; see the module docs.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = SyntaxKind::lexer(source);
    let mut garbage_from: Option<usize> = None;

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        match result {
            Ok(kind) => {
                flush_garbage(&mut tokens, &mut garbage_from, range.start);
                tokens.push(Token::new(kind, span(range.start, range.end)));
            }
            Err(()) => {
                garbage_from.get_or_insert(range.start);
            }
        }
    }
    flush_garbage(&mut tokens, &mut garbage_from, source.len());

    tokens
}

fn flush_garbage(tokens: &mut Vec<Token>, garbage_from: &mut Option<usize>, end: usize) {
    if let Some(start) = garbage_from.take() {
        tokens.push(Token::new(SyntaxKind::Garbage, span(start, end)));
    }
}

/// The source text under `token`.
#[inline]
pub fn token_text<'q>(source: &'q str, token: &Token) -> &'q str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
