//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast is infallible for correct `SyntaxKind`; a successful parse guarantees
//! the shape the accessors expect.

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(Document, Document);
ast_node!(OperationDefinition, OperationDefinition);
ast_node!(FragmentDefinition, FragmentDefinition);
ast_node!(VariableDefinitions, VariableDefinitions);
ast_node!(VariableDefinition, VariableDefinition);
ast_node!(Variable, Variable);
ast_node!(DefaultValue, DefaultValue);
ast_node!(SelectionSet, SelectionSet);
ast_node!(Field, Field);
ast_node!(Alias, Alias);
ast_node!(Arguments, Arguments);
ast_node!(Argument, Argument);
ast_node!(FragmentSpread, FragmentSpread);
ast_node!(InlineFragment, InlineFragment);
ast_node!(TypeCondition, TypeCondition);
ast_node!(Directives, Directives);
ast_node!(Directive, Directive);
ast_node!(ListValue, ListValue);
ast_node!(ObjectValue, ObjectValue);
ast_node!(ObjectField, ObjectField);

fn names(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> + '_ {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .filter(|t| t.kind() == SyntaxKind::Name)
}

fn child<N>(node: &SyntaxNode, cast: fn(SyntaxNode) -> Option<N>) -> Option<N> {
    node.children().find_map(cast)
}

/// Top-level definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
}

impl Definition {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::OperationDefinition => {
                OperationDefinition::cast(node).map(Definition::Operation)
            }
            SyntaxKind::FragmentDefinition => {
                FragmentDefinition::cast(node).map(Definition::Fragment)
            }
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Definition::Operation(n) => n.as_cst(),
            Definition::Fragment(n) => n.as_cst(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

/// Member of a selection set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

impl Selection {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::Field => Field::cast(node).map(Selection::Field),
            SyntaxKind::FragmentSpread => FragmentSpread::cast(node).map(Selection::FragmentSpread),
            SyntaxKind::InlineFragment => InlineFragment::cast(node).map(Selection::InlineFragment),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Selection::Field(n) => n.as_cst(),
            Selection::FragmentSpread(n) => n.as_cst(),
            Selection::InlineFragment(n) => n.as_cst(),
        }
    }
}

/// Input value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Variable(Variable),
    /// Int, float, string, boolean, null or enum literal.
    Scalar(SyntaxNode),
    List(ListValue),
    Object(ObjectValue),
}

impl Value {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::Variable => Variable::cast(node).map(Value::Variable),
            SyntaxKind::ListValue => ListValue::cast(node).map(Value::List),
            SyntaxKind::ObjectValue => ObjectValue::cast(node).map(Value::Object),
            SyntaxKind::IntValue
            | SyntaxKind::FloatValue
            | SyntaxKind::StringValue
            | SyntaxKind::BooleanValue
            | SyntaxKind::NullValue
            | SyntaxKind::EnumValue => Some(Value::Scalar(node)),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Value::Variable(n) => n.as_cst(),
            Value::Scalar(n) => n,
            Value::List(n) => n.as_cst(),
            Value::Object(n) => n.as_cst(),
        }
    }
}

impl Document {
    pub fn definitions(&self) -> impl Iterator<Item = Definition> + '_ {
        self.0.children().filter_map(Definition::cast)
    }

    pub fn operations(&self) -> impl Iterator<Item = OperationDefinition> + '_ {
        self.0.children().filter_map(OperationDefinition::cast)
    }

    pub fn fragments(&self) -> impl Iterator<Item = FragmentDefinition> + '_ {
        self.0.children().filter_map(FragmentDefinition::cast)
    }
}

impl OperationDefinition {
    /// `false` for the `{ ... }` shorthand.
    pub fn has_keyword(&self) -> bool {
        names(&self.0).next().is_some()
    }

    pub fn operation_type(&self) -> OperationType {
        match names(&self.0).next().as_ref().map(SyntaxToken::text) {
            Some("mutation") => OperationType::Mutation,
            Some("subscription") => OperationType::Subscription,
            _ => OperationType::Query,
        }
    }

    pub fn name(&self) -> Option<SyntaxToken> {
        names(&self.0).nth(1)
    }

    pub fn variable_definitions(&self) -> Option<VariableDefinitions> {
        child(&self.0, VariableDefinitions::cast)
    }

    pub fn directives(&self) -> Option<Directives> {
        child(&self.0, Directives::cast)
    }

    pub fn selection_set(&self) -> Option<SelectionSet> {
        child(&self.0, SelectionSet::cast)
    }
}

impl FragmentDefinition {
    pub fn name(&self) -> Option<SyntaxToken> {
        names(&self.0).nth(1)
    }

    pub fn type_condition(&self) -> Option<TypeCondition> {
        child(&self.0, TypeCondition::cast)
    }

    pub fn directives(&self) -> Option<Directives> {
        child(&self.0, Directives::cast)
    }

    pub fn selection_set(&self) -> Option<SelectionSet> {
        child(&self.0, SelectionSet::cast)
    }
}

impl VariableDefinitions {
    pub fn definitions(&self) -> impl Iterator<Item = VariableDefinition> + '_ {
        self.0.children().filter_map(VariableDefinition::cast)
    }
}

impl VariableDefinition {
    pub fn variable(&self) -> Option<Variable> {
        child(&self.0, Variable::cast)
    }

    pub fn default_value(&self) -> Option<DefaultValue> {
        child(&self.0, DefaultValue::cast)
    }

    pub fn directives(&self) -> Option<Directives> {
        child(&self.0, Directives::cast)
    }
}

impl DefaultValue {
    pub fn value(&self) -> Option<Value> {
        self.0.children().find_map(Value::cast)
    }
}

impl Variable {
    pub fn name(&self) -> Option<SyntaxToken> {
        names(&self.0).next()
    }
}

impl SelectionSet {
    pub fn selections(&self) -> impl Iterator<Item = Selection> + '_ {
        self.0.children().filter_map(Selection::cast)
    }
}

impl Field {
    pub fn alias(&self) -> Option<Alias> {
        child(&self.0, Alias::cast)
    }

    pub fn name(&self) -> Option<SyntaxToken> {
        names(&self.0).next()
    }

    pub fn arguments(&self) -> Option<Arguments> {
        child(&self.0, Arguments::cast)
    }

    pub fn directives(&self) -> Option<Directives> {
        child(&self.0, Directives::cast)
    }

    pub fn selection_set(&self) -> Option<SelectionSet> {
        child(&self.0, SelectionSet::cast)
    }
}

impl Alias {
    pub fn name(&self) -> Option<SyntaxToken> {
        names(&self.0).next()
    }
}

impl Arguments {
    pub fn arguments(&self) -> impl Iterator<Item = Argument> + '_ {
        self.0.children().filter_map(Argument::cast)
    }
}

impl Argument {
    pub fn name(&self) -> Option<SyntaxToken> {
        names(&self.0).next()
    }

    pub fn value(&self) -> Option<Value> {
        self.0.children().find_map(Value::cast)
    }
}

impl FragmentSpread {
    pub fn name(&self) -> Option<SyntaxToken> {
        names(&self.0).next()
    }

    pub fn directives(&self) -> Option<Directives> {
        child(&self.0, Directives::cast)
    }
}

impl InlineFragment {
    pub fn type_condition(&self) -> Option<TypeCondition> {
        child(&self.0, TypeCondition::cast)
    }

    pub fn directives(&self) -> Option<Directives> {
        child(&self.0, Directives::cast)
    }

    pub fn selection_set(&self) -> Option<SelectionSet> {
        child(&self.0, SelectionSet::cast)
    }
}

impl TypeCondition {
    /// Name of the type after `on`.
    pub fn type_name(&self) -> Option<SyntaxToken> {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::NamedType)
            .and_then(|n| names(&n).next())
    }
}

impl Directives {
    pub fn directives(&self) -> impl Iterator<Item = Directive> + '_ {
        self.0.children().filter_map(Directive::cast)
    }
}

impl Directive {
    pub fn name(&self) -> Option<SyntaxToken> {
        names(&self.0).next()
    }

    pub fn arguments(&self) -> Option<Arguments> {
        child(&self.0, Arguments::cast)
    }
}

impl ListValue {
    pub fn values(&self) -> impl Iterator<Item = Value> + '_ {
        self.0.children().filter_map(Value::cast)
    }
}

impl ObjectValue {
    pub fn fields(&self) -> impl Iterator<Item = ObjectField> + '_ {
        self.0.children().filter_map(ObjectField::cast)
    }
}

impl ObjectField {
    pub fn name(&self) -> Option<SyntaxToken> {
        names(&self.0).next()
    }

    pub fn value(&self) -> Option<Value> {
        self.0.children().find_map(Value::cast)
    }
}
