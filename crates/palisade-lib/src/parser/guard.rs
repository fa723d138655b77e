//! Rule-depth and token-count ceilings.

use palisade_core::{LimitsConfig, SourceAggregate};

use super::events::{ParseEvent, ParseListener};
use crate::{Error, ErrorKind, Result};

/// Aborts the parse once rule nesting or the significant token count passes
/// its ceiling.
///
/// The two counters are independent and checked strictly in event order, so
/// whichever ceiling is crossed first wins. A rule that pushes depth past the
/// ceiling is rejected before any of its children are visited.
#[derive(Debug)]
pub struct ParseGuard<'a> {
    max_depth: Option<u32>,
    max_tokens: Option<u32>,
    depth: u32,
    token_count: u32,
    locator: &'a SourceAggregate,
}

impl<'a> ParseGuard<'a> {
    /// `None` when both checks are disabled, so no listener is attached at all.
    pub fn new(limits: &LimitsConfig, locator: &'a SourceAggregate) -> Option<Self> {
        let max_depth = limits.depth_ceiling();
        let max_tokens = limits.token_ceiling();
        if max_depth.is_none() && max_tokens.is_none() {
            return None;
        }
        Some(Self {
            max_depth,
            max_tokens,
            depth: 0,
            token_count: 0,
            locator,
        })
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn token_count(&self) -> u32 {
        self.token_count
    }
}

impl ParseListener for ParseGuard<'_> {
    fn on_event(&mut self, event: &ParseEvent<'_>) -> Result<()> {
        match *event {
            ParseEvent::RuleEnter {
                start, start_text, ..
            } => {
                self.depth += 1;
                if let Some(max) = self.max_depth
                    && self.depth > max
                {
                    return Err(Error::new(
                        ErrorKind::RuleDepthExceeded,
                        format!(
                            "More than {} deep 'grammar' rules have been entered. To prevent Denial Of Service attacks, parsing has been cancelled.",
                            max
                        ),
                    )
                    .with_span(self.locator.locate(start.start().into()))
                    .with_offending_text(start_text));
                }
            }
            ParseEvent::RuleExit { .. } => {
                self.depth = self.depth.saturating_sub(1);
            }
            ParseEvent::Terminal { text, range, .. } => {
                self.token_count += 1;
                if let Some(max) = self.max_tokens
                    && self.token_count > max
                {
                    return Err(Error::new(
                        ErrorKind::TokenCountExceeded,
                        format!(
                            "More than {} 'grammar' tokens have been presented. To prevent Denial Of Service attacks, parsing has been cancelled.",
                            max
                        ),
                    )
                    .with_span(self.locator.locate(range.start().into()))
                    .with_offending_text(text));
                }
            }
            ParseEvent::SyntaxAnomaly { .. } => {}
        }
        Ok(())
    }
}
