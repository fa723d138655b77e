//! Validation of a parsed document.
//!
//! One traversal runs every [`Rule`] as a callback and collects their findings
//! in [`ValidationErrors`]. The [`NodeCountGuard`] rides the same traversal and
//! is the only thing that can stop it: its error unwinds every `visit_*` call
//! and is returned as the `Err` of [`validate`], with nothing collected so far.

mod errors;
mod node_count;
pub mod rules;
pub mod visitor;

#[cfg(test)]
mod node_count_tests;
#[cfg(test)]
mod rules_tests;

pub use errors::{ValidationError, ValidationErrorKind, ValidationErrors};
pub use node_count::NodeCountGuard;
pub use rules::Rule;

use palisade_core::LimitsConfig;
use tracing::trace;

use crate::parser::ast::{
    Document, Field, FragmentDefinition, FragmentSpread, OperationDefinition, Variable,
    VariableDefinition,
};
use crate::{Result, document};
use visitor::{
    Visitor, walk_document, walk_field, walk_fragment_definition, walk_operation,
};

/// Validates `doc` with the default rules under `limits`.
pub fn validate(doc: &document::Document, limits: &LimitsConfig) -> Result<ValidationErrors> {
    Validator::new(limits).run(doc)
}

/// A configured validation traversal.
pub struct Validator {
    guard: Option<NodeCountGuard>,
    rules: Vec<Box<dyn Rule>>,
    errors: ValidationErrors,
}

impl Validator {
    /// Default rules and collector; the node guard follows `limits`.
    pub fn new(limits: &LimitsConfig) -> Self {
        Self {
            guard: NodeCountGuard::new(limits),
            rules: rules::default_rules(),
            errors: ValidationErrors::default(),
        }
    }

    /// Replaces the rule set.
    pub fn with_rules(mut self, rules: Vec<Box<dyn Rule>>) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.errors = ValidationErrors::new(max_errors);
        self
    }

    pub fn run(mut self, doc: &document::Document) -> Result<ValidationErrors> {
        self.visit_document(&doc.root())?;
        trace!(
            findings = self.errors.len(),
            fields = self.guard.as_ref().map(NodeCountGuard::count),
            "validation complete"
        );
        Ok(self.errors.sorted())
    }
}

impl Visitor for Validator {
    fn visit_document(&mut self, doc: &Document) -> Result<()> {
        for rule in &mut self.rules {
            rule.enter_document(doc, &mut self.errors);
        }
        walk_document(self, doc)?;
        for rule in &mut self.rules {
            rule.leave_document(doc, &mut self.errors);
        }
        Ok(())
    }

    fn visit_operation(&mut self, op: &OperationDefinition) -> Result<()> {
        for rule in &mut self.rules {
            rule.enter_operation(op, &mut self.errors);
        }
        walk_operation(self, op)
    }

    fn visit_fragment_definition(&mut self, frag: &FragmentDefinition) -> Result<()> {
        for rule in &mut self.rules {
            rule.enter_fragment_definition(frag, &mut self.errors);
        }
        walk_fragment_definition(self, frag)
    }

    fn visit_variable_definition(&mut self, def: &VariableDefinition) -> Result<()> {
        for rule in &mut self.rules {
            rule.check_variable_definition(def, &mut self.errors);
        }
        Ok(())
    }

    fn visit_field(&mut self, field: &Field) -> Result<()> {
        if let Some(guard) = &mut self.guard {
            guard.check_field(field)?;
        }
        for rule in &mut self.rules {
            rule.check_field(field, &mut self.errors);
        }
        walk_field(self, field)
    }

    fn visit_fragment_spread(&mut self, spread: &FragmentSpread) -> Result<()> {
        for rule in &mut self.rules {
            rule.check_fragment_spread(spread, &mut self.errors);
        }
        if let Some(directives) = spread.directives() {
            visitor::walk_directives(self, &directives)?;
        }
        Ok(())
    }

    fn visit_variable(&mut self, var: &Variable) -> Result<()> {
        for rule in &mut self.rules {
            rule.check_variable(var, &mut self.errors);
        }
        Ok(())
    }
}
