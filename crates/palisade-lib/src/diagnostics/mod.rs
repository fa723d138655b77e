//! Human-readable rendering of parse errors and validation findings.
//!
//! Errors are drawn against the segment they point into, with the segment's
//! display name as the path and line numbers local to that segment.

mod printer;


pub use printer::DiagnosticsPrinter;
