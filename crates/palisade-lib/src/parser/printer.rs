//! Indented text dump of the concrete syntax tree.

use std::fmt::Write;

use rowan::{NodeOrToken, TextRange};

use super::cst::SyntaxNode;

/// Prints one line per node and per token, children indented by two spaces.
///
/// Trivia and spans are hidden unless enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct CstPrinter {
    trivia: bool,
    spans: bool,
}

impl CstPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self, root: &SyntaxNode) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.format(root, 0, &mut out);
        out
    }

    fn span_str(&self, range: TextRange) -> String {
        if self.spans {
            format!(" [{}..{}]", u32::from(range.start()), u32::from(range.end()))
        } else {
            String::new()
        }
    }

    fn format(&self, node: &SyntaxNode, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        writeln!(w, "{}{:?}{}", prefix, node.kind(), self.span_str(node.text_range()))?;

        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Node(n) => self.format(&n, indent + 1, w)?,
                NodeOrToken::Token(t) => {
                    if self.trivia || !t.kind().is_trivia() {
                        writeln!(
                            w,
                            "{}  {:?}{} {:?}",
                            prefix,
                            t.kind(),
                            self.span_str(t.text_range()),
                            t.text()
                        )?;
                    }
                }
            }
        }
        Ok(())
    }
}
