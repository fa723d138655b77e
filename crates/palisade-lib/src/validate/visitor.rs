//! AST Visitor pattern for validation traversals.
//!
//! # Usage
//!
//! Implement `Visitor` for your struct. Override `visit_*` methods to add logic.
//! Call `walk_*` within your override to continue recursion (or omit it to stop).
//! Returning `Err` unwinds the whole traversal; ordinary findings never do.
//!
//! ```ignore
//! impl Visitor for MyPass {
//!     fn visit_field(&mut self, field: &Field) -> Result<()> {
//!         // Pre-order logic
//!         walk_field(self, field)?;
//!         // Post-order logic
//!         Ok(())
//!     }
//! }
//! ```

use crate::Result;
use crate::parser::ast::{
    Arguments, Definition, Directives, Document, Field, FragmentDefinition, FragmentSpread,
    InlineFragment, OperationDefinition, SelectionSet, Selection, Value, Variable,
    VariableDefinition,
};

pub trait Visitor: Sized {
    fn visit_document(&mut self, doc: &Document) -> Result<()> {
        walk_document(self, doc)
    }

    fn visit_operation(&mut self, op: &OperationDefinition) -> Result<()> {
        walk_operation(self, op)
    }

    fn visit_fragment_definition(&mut self, frag: &FragmentDefinition) -> Result<()> {
        walk_fragment_definition(self, frag)
    }

    fn visit_variable_definition(&mut self, _def: &VariableDefinition) -> Result<()> {
        // Defaults are constant; nothing below can use a variable
        Ok(())
    }

    fn visit_selection_set(&mut self, set: &SelectionSet) -> Result<()> {
        walk_selection_set(self, set)
    }

    fn visit_field(&mut self, field: &Field) -> Result<()> {
        walk_field(self, field)
    }

    fn visit_fragment_spread(&mut self, spread: &FragmentSpread) -> Result<()> {
        if let Some(directives) = spread.directives() {
            walk_directives(self, &directives)?;
        }
        Ok(())
    }

    fn visit_inline_fragment(&mut self, inline: &InlineFragment) -> Result<()> {
        walk_inline_fragment(self, inline)
    }

    fn visit_value(&mut self, value: &Value) -> Result<()> {
        walk_value(self, value)
    }

    fn visit_variable(&mut self, _var: &Variable) -> Result<()> {
        Ok(())
    }
}

pub fn walk_document<V: Visitor>(visitor: &mut V, doc: &Document) -> Result<()> {
    for def in doc.definitions() {
        match def {
            Definition::Operation(op) => visitor.visit_operation(&op)?,
            Definition::Fragment(frag) => visitor.visit_fragment_definition(&frag)?,
        }
    }
    Ok(())
}

pub fn walk_operation<V: Visitor>(visitor: &mut V, op: &OperationDefinition) -> Result<()> {
    if let Some(defs) = op.variable_definitions() {
        for def in defs.definitions() {
            visitor.visit_variable_definition(&def)?;
        }
    }
    if let Some(directives) = op.directives() {
        walk_directives(visitor, &directives)?;
    }
    if let Some(set) = op.selection_set() {
        visitor.visit_selection_set(&set)?;
    }
    Ok(())
}

pub fn walk_fragment_definition<V: Visitor>(
    visitor: &mut V,
    frag: &FragmentDefinition,
) -> Result<()> {
    if let Some(directives) = frag.directives() {
        walk_directives(visitor, &directives)?;
    }
    if let Some(set) = frag.selection_set() {
        visitor.visit_selection_set(&set)?;
    }
    Ok(())
}

pub fn walk_selection_set<V: Visitor>(visitor: &mut V, set: &SelectionSet) -> Result<()> {
    for selection in set.selections() {
        match selection {
            Selection::Field(f) => visitor.visit_field(&f)?,
            Selection::FragmentSpread(s) => visitor.visit_fragment_spread(&s)?,
            Selection::InlineFragment(i) => visitor.visit_inline_fragment(&i)?,
        }
    }
    Ok(())
}

pub fn walk_field<V: Visitor>(visitor: &mut V, field: &Field) -> Result<()> {
    if let Some(args) = field.arguments() {
        walk_arguments(visitor, &args)?;
    }
    if let Some(directives) = field.directives() {
        walk_directives(visitor, &directives)?;
    }
    if let Some(set) = field.selection_set() {
        visitor.visit_selection_set(&set)?;
    }
    Ok(())
}

pub fn walk_inline_fragment<V: Visitor>(visitor: &mut V, inline: &InlineFragment) -> Result<()> {
    if let Some(directives) = inline.directives() {
        walk_directives(visitor, &directives)?;
    }
    if let Some(set) = inline.selection_set() {
        visitor.visit_selection_set(&set)?;
    }
    Ok(())
}

pub fn walk_directives<V: Visitor>(visitor: &mut V, directives: &Directives) -> Result<()> {
    for directive in directives.directives() {
        if let Some(args) = directive.arguments() {
            walk_arguments(visitor, &args)?;
        }
    }
    Ok(())
}

pub fn walk_arguments<V: Visitor>(visitor: &mut V, args: &Arguments) -> Result<()> {
    for arg in args.arguments() {
        if let Some(value) = arg.value() {
            visitor.visit_value(&value)?;
        }
    }
    Ok(())
}

pub fn walk_value<V: Visitor>(visitor: &mut V, value: &Value) -> Result<()> {
    match value {
        Value::Variable(var) => visitor.visit_variable(var),
        Value::Scalar(_) => Ok(()),
        Value::List(list) => {
            for item in list.values() {
                visitor.visit_value(&item)?;
            }
            Ok(())
        }
        Value::Object(obj) => {
            for field in obj.fields() {
                if let Some(value) = field.value() {
                    visitor.visit_value(&value)?;
                }
            }
            Ok(())
        }
    }
}
