//! Builder-pattern printer over a source aggregate.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use palisade_core::{Segment, SourceAggregate};

use crate::{Error, ValidationError, ValidationErrors};

/// Renders errors against the aggregate they were produced from.
pub struct DiagnosticsPrinter<'s> {
    source: &'s SourceAggregate,
    colored: bool,
}

/// A primary annotation resolved to one segment.
struct Located<'s> {
    segment: &'s Segment,
    range: Range<usize>,
}

impl<'s> DiagnosticsPrinter<'s> {
    pub fn new(source: &'s SourceAggregate) -> Self {
        Self {
            source,
            colored: false,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    /// The terminal error of a parse or validation pass.
    ///
    /// Without a resolvable span only the title line is printed.
    pub fn render_error(&self, error: &Error) -> String {
        let located = error
            .span()
            .and_then(|span| self.resolve(span.offset, error.offending_text()));
        self.render_one(error.message(), located, None)
    }

    /// Every finding, in collector order, separated by blank lines.
    pub fn render_findings(&self, errors: &ValidationErrors) -> String {
        let mut out = String::new();
        for (i, finding) in errors.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&self.render_finding(finding));
        }
        out
    }

    pub fn render_finding(&self, finding: &ValidationError) -> String {
        let start: u32 = finding.range().start().into();
        let located = self.source.segment_at(start).map(|segment| {
            let local = (start - segment.start()) as usize;
            let len: usize = finding.range().len().into();
            Located {
                segment,
                range: clamp(local..local + len, segment.content()),
            }
        });
        self.render_one(finding.message(), located, finding.kind().default_hint())
    }

    fn resolve(&self, offset: u32, offending: Option<&str>) -> Option<Located<'s>> {
        let segment = self.source.segment_at(offset)?;
        let content = segment.content();
        let local = (offset - segment.start()) as usize;

        // `<EOF>` and gate errors carry text that is not in the source.
        let len = match offending {
            Some(text) if content.get(local..).is_some_and(|rest| rest.starts_with(text)) => {
                text.len()
            }
            _ => 0,
        };
        Some(Located {
            segment,
            range: clamp(local..local + len, content),
        })
    }

    fn render_one(
        &self,
        message: &str,
        located: Option<Located<'_>>,
        hint: Option<&str>,
    ) -> String {
        let Some(located) = located else {
            return format!("error: {}\n", message);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let snippet = Snippet::source(located.segment.content())
            .line_start(1)
            .path(located.segment.display_name())
            .annotation(AnnotationKind::Primary.span(located.range));

        let mut group = Level::ERROR.primary_title(message).element(snippet);
        if let Some(hint) = hint {
            group = group.element(Level::HELP.message(hint));
        }

        let report: Vec<Group> = vec![group];
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", renderer.render(&report));
        out
    }
}

/// Widens an empty range to one character, keeping it inside `content`.
fn clamp(range: Range<usize>, content: &str) -> Range<usize> {
    let limit = content.len();
    let start = range.start.min(limit);
    let end = range.end.min(limit);
    if start != end {
        return start..end;
    }

    let next = content
        .get(start..)
        .and_then(|rest| rest.chars().next())
        .map_or(start, |c| start + c.len_utf8());
    start..next
}
