use indexmap::{IndexMap, IndexSet};
use rowan::TextRange;

use super::Rule;
use crate::parser::ast::{Document, FragmentDefinition, FragmentSpread, OperationDefinition};
use crate::validate::{ValidationError, ValidationErrorKind, ValidationErrors};

/// Spread targets exist, every fragment is reachable from an operation, and
/// no fragment spreads itself.
#[derive(Debug, Default)]
pub struct FragmentUsage {
    /// Fragment name to the range of its name; the first definition wins.
    defined: IndexMap<String, TextRange>,
    operation_spreads: Vec<Vec<String>>,
    fragment_spreads: IndexMap<String, Vec<(String, TextRange)>>,
    current_fragment: Option<String>,
}

impl FragmentUsage {
    fn reachable(&self) -> IndexSet<&str> {
        let mut seen = IndexSet::new();
        let mut stack: Vec<&str> = self
            .operation_spreads
            .iter()
            .flatten()
            .map(String::as_str)
            .collect();
        while let Some(name) = stack.pop() {
            if !seen.insert(name) {
                continue;
            }
            if let Some(spreads) = self.fragment_spreads.get(name) {
                stack.extend(spreads.iter().map(|(target, _)| target.as_str()));
            }
        }
        seen
    }

    fn report_cycles(&self, errors: &mut ValidationErrors) {
        let mut done = IndexSet::new();
        let mut path = Vec::new();
        for name in self.fragment_spreads.keys() {
            self.walk_cycles(name, &mut done, &mut path, errors);
        }
    }

    fn walk_cycles<'a>(
        &'a self,
        name: &'a str,
        done: &mut IndexSet<&'a str>,
        path: &mut Vec<&'a str>,
        errors: &mut ValidationErrors,
    ) {
        if done.contains(name) {
            return;
        }
        path.push(name);
        for (target, range) in self.fragment_spreads.get(name).into_iter().flatten() {
            match path.iter().position(|n| *n == target.as_str()) {
                Some(start) => {
                    let via = &path[start + 1..];
                    let mut message = format!("cannot spread fragment '{}' within itself", target);
                    if !via.is_empty() {
                        let names: Vec<String> = via.iter().map(|n| format!("'{}'", n)).collect();
                        message.push_str(&format!(" via {}", names.join(", ")));
                    }
                    errors.push(
                        ValidationError::new(ValidationErrorKind::FragmentCycle, *range)
                            .with_message(message),
                    );
                }
                None => self.walk_cycles(target, done, path, errors),
            }
        }
        path.pop();
        done.insert(name);
    }
}

impl Rule for FragmentUsage {
    fn enter_document(&mut self, doc: &Document, _errors: &mut ValidationErrors) {
        for frag in doc.fragments() {
            if let Some(name) = frag.name() {
                self.defined
                    .entry(name.text().to_owned())
                    .or_insert(name.text_range());
            }
        }
    }

    fn enter_operation(&mut self, _op: &OperationDefinition, _errors: &mut ValidationErrors) {
        self.current_fragment = None;
        self.operation_spreads.push(Vec::new());
    }

    fn enter_fragment_definition(
        &mut self,
        frag: &FragmentDefinition,
        _errors: &mut ValidationErrors,
    ) {
        let name = frag.name().map(|n| n.text().to_owned()).unwrap_or_default();
        self.fragment_spreads.entry(name.clone()).or_default();
        self.current_fragment = Some(name);
    }

    fn check_fragment_spread(&mut self, spread: &FragmentSpread, errors: &mut ValidationErrors) {
        let Some(name) = spread.name() else {
            return;
        };
        let target = name.text().to_owned();

        if !self.defined.contains_key(&target) {
            errors.push(
                ValidationError::new(ValidationErrorKind::UndefinedFragment, name.text_range())
                    .with_message(format!("undefined fragment '{}'", target)),
            );
        }

        match &self.current_fragment {
            Some(owner) => {
                if let Some(spreads) = self.fragment_spreads.get_mut(owner) {
                    spreads.push((target, name.text_range()));
                }
            }
            None => {
                if let Some(spreads) = self.operation_spreads.last_mut() {
                    spreads.push(target);
                }
            }
        }
    }

    fn leave_document(&mut self, _doc: &Document, errors: &mut ValidationErrors) {
        let reachable = self.reachable();
        for (name, range) in &self.defined {
            if !reachable.contains(name.as_str()) {
                errors.push(
                    ValidationError::new(ValidationErrorKind::UnusedFragment, *range)
                        .with_message(format!("fragment '{}' is never used", name)),
                );
            }
        }
        self.report_cycles(errors);
    }
}
