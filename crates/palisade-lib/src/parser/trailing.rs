//! Full-consumption check after a structurally complete parse.

use super::lexer::Token;

/// Index of the last significant token when it lies past `stop`, the last
/// token the document rule consumed.
///
/// Trivia is on a different channel and never counts as trailing input. The
/// lexer emits no end-of-input token, so any significant token past `stop` is
/// real input the grammar ignored.
pub fn find_trailing_token(tokens: &[Token], stop: Option<usize>) -> Option<usize> {
    let stop = stop?;
    let last = tokens.iter().rposition(|t| !t.kind.is_trivia())?;
    (last > stop).then_some(last)
}
