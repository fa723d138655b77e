//! Schema-independent validation rules.
//!
//! Rules are callbacks on the single validation traversal. They can only push
//! findings into the collector; they have no way to abort the traversal.

mod fragments;
mod operations;
mod variables;

pub use fragments::FragmentUsage;
pub use operations::OperationNames;
pub use variables::VariableUsage;

use rowan::TextRange;

use super::ValidationErrors;
use crate::parser::SyntaxNode;
use crate::parser::ast::{
    Document, Field, FragmentDefinition, FragmentSpread, OperationDefinition, Variable,
    VariableDefinition,
};

pub trait Rule {
    fn enter_document(&mut self, _doc: &Document, _errors: &mut ValidationErrors) {}

    fn enter_operation(&mut self, _op: &OperationDefinition, _errors: &mut ValidationErrors) {}

    fn enter_fragment_definition(
        &mut self,
        _frag: &FragmentDefinition,
        _errors: &mut ValidationErrors,
    ) {
    }

    fn check_variable_definition(
        &mut self,
        _def: &VariableDefinition,
        _errors: &mut ValidationErrors,
    ) {
    }

    fn check_field(&mut self, _field: &Field, _errors: &mut ValidationErrors) {}

    fn check_fragment_spread(&mut self, _spread: &FragmentSpread, _errors: &mut ValidationErrors) {
    }

    /// A variable used as a value, never its definition.
    fn check_variable(&mut self, _var: &Variable, _errors: &mut ValidationErrors) {}

    /// Runs after every definition was visited.
    fn leave_document(&mut self, _doc: &Document, _errors: &mut ValidationErrors) {}
}

pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(OperationNames::default()),
        Box::new(FragmentUsage::default()),
        Box::new(VariableUsage::default()),
    ]
}

/// Range of the first token of `node`, where findings about the whole node point.
pub(crate) fn head_range(node: &SyntaxNode) -> TextRange {
    node.first_token()
        .map_or_else(|| node.text_range(), |t| t.text_range())
}
