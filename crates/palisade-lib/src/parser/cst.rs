//! Syntax kinds for GraphQL executable documents.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (from parser).
//! Logos derives token recognition; node kinds lack token/regex attributes.
//! `GqlLang` implements Rowan's `Language` trait for tree construction.

use logos::{Lexer, Logos};
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("{")]
    BraceOpen = 0,

    #[token("}")]
    BraceClose,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token(":")]
    Colon,

    #[token("=")]
    Equals,

    #[token("@")]
    At,

    #[token("$")]
    Dollar,

    #[token("!")]
    Bang,

    #[token("...")]
    Spread,

    /// Only meaningful in type system documents; lexed so it reports as unexpected.
    #[token("&")]
    Amp,

    /// Only meaningful in type system documents; lexed so it reports as unexpected.
    #[token("|")]
    Pipe,

    /// Keywords (`query`, `on`, `true`, ...) are names; the parser checks text per context.
    #[regex(r"[_A-Za-z][_0-9A-Za-z]*")]
    Name,

    #[regex(r"-?(?:0|[1-9][0-9]*)")]
    IntLit,

    #[regex(r"-?(?:0|[1-9][0-9]*)(?:\.[0-9]+(?:[eE][+-]?[0-9]+)?|[eE][+-]?[0-9]+)")]
    FloatLit,

    #[regex(r#""(?:[^"\\\n\r]|\\["\\/bfnrt]|\\u[0-9A-Fa-f]{4})*""#)]
    StringLit,

    #[token(r#"""""#, lex_block_string)]
    BlockStringLit,

    #[regex(r"[ \t\u{FEFF}]+")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    #[token("\r")]
    Newline,

    /// Insignificant in GraphQL.
    #[token(",")]
    Comma,

    #[regex(r"#[^\n\r]*", allow_greedy = true)]
    Comment,

    /// Coalesced unrecognized characters
    Garbage,
    Error,

    // --- Node kinds (non-terminals) ---
    Document,
    OperationDefinition,
    FragmentDefinition,
    VariableDefinitions,
    VariableDefinition,
    Variable,
    DefaultValue,
    Type,
    NamedType,
    ListType,
    SelectionSet,
    Field,
    Alias,
    Arguments,
    Argument,
    FragmentSpread,
    InlineFragment,
    TypeCondition,
    Directives,
    Directive,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

/// Consumes a block string body up to and including the closing `"""`.
/// An escaped `\"""` inside the body does not close it.
fn lex_block_string(lex: &mut Lexer<SyntaxKind>) -> bool {
    let rest = lex.remainder();
    let bytes = rest.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i..].starts_with(br#"\""""#) {
            i += 4;
        } else if bytes[i..].starts_with(br#"""""#) {
            lex.bump(i + 3);
            return true;
        } else {
            i += 1;
        }
    }
    // Unterminated: the rest of the input becomes one error token.
    lex.bump(rest.len());
    false
}

use SyntaxKind::*;

impl SyntaxKind {
    /// Ignored tokens: kept in the tree, never seen by the grammar or the guards.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Newline | Comma | Comment)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GqlLang {}

impl Language for GqlLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<GqlLang>;
pub type SyntaxToken = rowan::SyntaxToken<GqlLang>;

/// 64-bit bitset of `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..64u16 {
            if self.0 & (1 << i) != 0 && i < __LAST as u16 {
                let kind: SyntaxKind = unsafe { std::mem::transmute(i) };
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    /// Tokens that can start a value (names cover `true`, `false`, `null` and enums).
    pub const VALUE_FIRST: TokenSet = TokenSet::new(&[
        Dollar,
        IntLit,
        FloatLit,
        StringLit,
        BlockStringLit,
        Name,
        BracketOpen,
        BraceOpen,
    ]);

    pub const SELECTION_FIRST: TokenSet = TokenSet::new(&[Name, Spread]);
}
