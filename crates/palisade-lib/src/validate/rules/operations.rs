use indexmap::IndexMap;
use rowan::TextRange;

use super::{Rule, head_range};
use crate::parser::ast::{Document, OperationDefinition};
use crate::validate::{ValidationError, ValidationErrorKind, ValidationErrors};

/// Lone anonymous operation and unique operation names.
#[derive(Debug, Default)]
pub struct OperationNames {
    operation_count: usize,
    seen: IndexMap<String, TextRange>,
}

impl Rule for OperationNames {
    fn enter_document(&mut self, doc: &Document, _errors: &mut ValidationErrors) {
        self.operation_count = doc.operations().count();
    }

    fn enter_operation(&mut self, op: &OperationDefinition, errors: &mut ValidationErrors) {
        let Some(name) = op.name() else {
            if self.operation_count > 1 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::LoneAnonymousOperation,
                    head_range(op.as_cst()),
                ));
            }
            return;
        };

        if self.seen.contains_key(name.text()) {
            errors.push(
                ValidationError::new(ValidationErrorKind::DuplicateOperationName, name.text_range())
                    .with_message(format!(
                        "there can be only one operation named '{}'",
                        name.text()
                    )),
            );
            return;
        }
        self.seen.insert(name.text().to_owned(), name.text_range());
    }
}
