use indexmap::{IndexMap, IndexSet};
use rowan::TextRange;

use super::Rule;
use crate::parser::ast::{
    Document, FragmentDefinition, FragmentSpread, OperationDefinition, Variable,
    VariableDefinition,
};
use crate::validate::{ValidationError, ValidationErrorKind, ValidationErrors};

#[derive(Debug, Default)]
struct Scope {
    used: Vec<(String, TextRange)>,
    spreads: Vec<String>,
}

#[derive(Debug, Default)]
struct OperationScope {
    name: Option<String>,
    defined: IndexMap<String, TextRange>,
    scope: Scope,
}

impl OperationScope {
    fn suffix(&self) -> String {
        match &self.name {
            Some(name) => format!(" by operation '{}'", name),
            None => String::new(),
        }
    }
}

/// Every variable an operation uses is defined by it, and every variable it
/// defines is used, following fragment spreads transitively.
#[derive(Debug, Default)]
pub struct VariableUsage {
    operations: Vec<OperationScope>,
    fragments: IndexMap<String, Scope>,
    current_fragment: Option<String>,
}

impl VariableUsage {
    fn current_scope(&mut self) -> Option<&mut Scope> {
        match &self.current_fragment {
            Some(name) => self.fragments.get_mut(name),
            None => self.operations.last_mut().map(|op| &mut op.scope),
        }
    }

    /// Direct uses plus uses in every fragment reachable from `scope`. Each
    /// fragment is visited once, so spread cycles terminate.
    fn all_uses<'a>(&'a self, scope: &'a Scope) -> Vec<&'a (String, TextRange)> {
        let mut uses: Vec<_> = scope.used.iter().collect();
        let mut seen: IndexSet<&str> = IndexSet::new();
        let mut stack: Vec<&str> = scope.spreads.iter().map(String::as_str).collect();
        while let Some(name) = stack.pop() {
            if !seen.insert(name) {
                continue;
            }
            if let Some(frag) = self.fragments.get(name) {
                uses.extend(frag.used.iter());
                stack.extend(frag.spreads.iter().map(String::as_str));
            }
        }
        uses
    }
}

impl Rule for VariableUsage {
    fn enter_operation(&mut self, op: &OperationDefinition, _errors: &mut ValidationErrors) {
        self.current_fragment = None;
        self.operations.push(OperationScope {
            name: op.name().map(|n| n.text().to_owned()),
            ..OperationScope::default()
        });
    }

    fn enter_fragment_definition(
        &mut self,
        frag: &FragmentDefinition,
        _errors: &mut ValidationErrors,
    ) {
        let name = frag.name().map(|n| n.text().to_owned()).unwrap_or_default();
        self.fragments.entry(name.clone()).or_default();
        self.current_fragment = Some(name);
    }

    fn check_variable_definition(&mut self, def: &VariableDefinition, _errors: &mut ValidationErrors) {
        let Some(var) = def.variable() else {
            return;
        };
        let Some(name) = var.name() else {
            return;
        };
        if let Some(op) = self.operations.last_mut() {
            op.defined
                .entry(name.text().to_owned())
                .or_insert(var.as_cst().text_range());
        }
    }

    fn check_fragment_spread(&mut self, spread: &FragmentSpread, _errors: &mut ValidationErrors) {
        let Some(name) = spread.name() else {
            return;
        };
        if let Some(scope) = self.current_scope() {
            scope.spreads.push(name.text().to_owned());
        }
    }

    fn check_variable(&mut self, var: &Variable, _errors: &mut ValidationErrors) {
        let Some(name) = var.name() else {
            return;
        };
        let range = var.as_cst().text_range();
        if let Some(scope) = self.current_scope() {
            scope.used.push((name.text().to_owned(), range));
        }
    }

    fn leave_document(&mut self, _doc: &Document, errors: &mut ValidationErrors) {
        for op in &self.operations {
            let uses = self.all_uses(&op.scope);

            let mut reported = IndexSet::new();
            for (name, range) in &uses {
                if !op.defined.contains_key(name) && reported.insert((name.as_str(), *range)) {
                    errors.push(
                        ValidationError::new(ValidationErrorKind::UndefinedVariable, *range)
                            .with_message(format!(
                                "variable '${}' is not defined{}",
                                name,
                                op.suffix()
                            )),
                    );
                }
            }

            for (name, range) in &op.defined {
                if !uses.iter().any(|(used, _)| used == name) {
                    errors.push(
                        ValidationError::new(ValidationErrorKind::UnusedVariable, *range)
                            .with_message(format!(
                                "variable '${}' is never used{}",
                                name,
                                op.suffix()
                            )),
                    );
                }
            }
        }
    }
}
