//! Parse events and the observer interface.
//!
//! The parser reports every rule entry, rule exit and consumed significant
//! token to its listeners, synchronously and in document order, before the
//! tree builder sees it. A listener that returns `Err` ends the parse with that
//! error; the rule or token that triggered it never reaches the tree.

use std::fmt;

use rowan::TextRange;

use super::cst::SyntaxKind;
use crate::Result;

/// Text reported for the end-of-input position.
pub const EOF_TEXT: &str = "<EOF>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseEvent<'a> {
    /// A grammar rule starts at the current significant token.
    RuleEnter {
        rule: SyntaxKind,
        start: TextRange,
        start_text: &'a str,
    },
    RuleExit {
        rule: SyntaxKind,
    },
    /// A significant token was consumed. Trivia is never reported.
    Terminal {
        kind: SyntaxKind,
        text: &'a str,
        range: TextRange,
    },
    /// The grammar cannot continue. Always the last event of a parse.
    SyntaxAnomaly {
        range: TextRange,
        offending_text: &'a str,
        message: &'a str,
    },
}

impl ParseEvent<'_> {
    pub fn to_recorded(&self) -> RecordedEvent {
        match *self {
            ParseEvent::RuleEnter {
                rule,
                start,
                start_text,
            } => RecordedEvent::RuleEnter {
                rule,
                start,
                start_text: start_text.to_owned(),
            },
            ParseEvent::RuleExit { rule } => RecordedEvent::RuleExit { rule },
            ParseEvent::Terminal { kind, text, range } => RecordedEvent::Terminal {
                kind,
                text: text.to_owned(),
                range,
            },
            ParseEvent::SyntaxAnomaly {
                range,
                offending_text,
                message,
            } => RecordedEvent::SyntaxAnomaly {
                range,
                offending_text: offending_text.to_owned(),
                message: message.to_owned(),
            },
        }
    }
}

/// A syntax error as detected by the grammar, before it is located and turned
/// into an [`Error`](crate::Error) by the error strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxAnomaly<'a> {
    pub range: TextRange,
    pub offending_text: &'a str,
    pub message: String,
}

impl SyntaxAnomaly<'_> {
    pub fn as_event(&self) -> ParseEvent<'_> {
        ParseEvent::SyntaxAnomaly {
            range: self.range,
            offending_text: self.offending_text,
            message: &self.message,
        }
    }
}

/// Observer attached to a parser.
pub trait ParseListener {
    fn on_event(&mut self, event: &ParseEvent<'_>) -> Result<()>;
}

/// Owned copy of a [`ParseEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedEvent {
    RuleEnter {
        rule: SyntaxKind,
        start: TextRange,
        start_text: String,
    },
    RuleExit {
        rule: SyntaxKind,
    },
    Terminal {
        kind: SyntaxKind,
        text: String,
        range: TextRange,
    },
    SyntaxAnomaly {
        range: TextRange,
        offending_text: String,
        message: String,
    },
}

impl fmt::Display for RecordedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordedEvent::RuleEnter {
                rule,
                start,
                start_text,
            } => write!(f, "enter {:?} {:?} {:?}", rule, start, start_text),
            RecordedEvent::RuleExit { rule } => write!(f, "exit {:?}", rule),
            RecordedEvent::Terminal { kind, text, range } => {
                write!(f, "terminal {:?} {:?} {:?}", kind, range, text)
            }
            RecordedEvent::SyntaxAnomaly {
                range,
                offending_text,
                message,
            } => write!(f, "anomaly {:?} {:?}: {}", range, offending_text, message),
        }
    }
}

/// Listener that keeps every event it sees.
#[derive(Debug, Default)]
pub struct EventRecorder {
    events: Vec<RecordedEvent>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }
}

impl ParseListener for EventRecorder {
    fn on_event(&mut self, event: &ParseEvent<'_>) -> Result<()> {
        self.events.push(event.to_recorded());
        Ok(())
    }
}

impl<L: ParseListener + ?Sized> ParseListener for &mut L {
    fn on_event(&mut self, event: &ParseEvent<'_>) -> Result<()> {
        (**self).on_event(event)
    }
}
