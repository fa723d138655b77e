//! Parser-bug checks, excluded from coverage reports.
//!
//! These never fire on malformed input; input problems are `Err` values.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::Parser;
use super::cst::SyntaxKind;

impl Parser<'_> {
    /// Lookahead without consuming burns fuel; a bump or node start refills it.
    #[inline]
    pub(super) fn ensure_progress(&self) {
        let fuel = self.debug_fuel.get();
        assert!(fuel != 0, "grammar made no progress after repeated lookahead");
        self.debug_fuel.set(fuel - 1);
    }

    /// Productions are only entered once the caller has seen their first token.
    #[inline]
    pub(super) fn assert_current(&mut self, expected: SyntaxKind) {
        let found = self.current();
        assert_eq!(
            found, expected,
            "production entered on {:?}, caller should have checked for {:?}",
            found, expected,
        );
    }
}
