use super::OPERATION_TYPES;
use crate::Result;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;

impl Parser<'_> {
    /// `{ ... }` shorthand, or `query|mutation|subscription Name? VariableDefinitions? Directives? SelectionSet`
    pub(crate) fn parse_operation_definition(&mut self) -> Result<()> {
        self.start_node(SyntaxKind::OperationDefinition)?;

        if self.currently_is(SyntaxKind::BraceOpen) {
            self.parse_selection_set()?;
            return self.finish_node();
        }

        let keyword = self.current_text();
        if !OPERATION_TYPES.contains(&keyword) {
            return Err(self.unexpected("expected 'query', 'mutation' or 'subscription'"));
        }
        self.bump()?;

        if self.currently_is(SyntaxKind::Name) {
            self.bump()?;
        }
        if self.currently_is(SyntaxKind::ParenOpen) {
            self.parse_variable_definitions()?;
        }
        if self.currently_is(SyntaxKind::At) {
            self.parse_directives(false)?;
        }
        self.parse_selection_set()?;

        self.finish_node()
    }

    /// `fragment FragmentName TypeCondition Directives? SelectionSet`
    pub(crate) fn parse_fragment_definition(&mut self) -> Result<()> {
        self.start_node(SyntaxKind::FragmentDefinition)?;
        self.expect_keyword("fragment")?;
        self.parse_fragment_name()?;
        self.parse_type_condition()?;
        if self.currently_is(SyntaxKind::At) {
            self.parse_directives(false)?;
        }
        self.parse_selection_set()?;
        self.finish_node()
    }

    /// Any name but `on`.
    pub(crate) fn parse_fragment_name(&mut self) -> Result<()> {
        if self.at_keyword("on") {
            return Err(self.unexpected("expected a fragment name, 'on' is reserved"));
        }
        self.expect_name("a fragment name")
    }

    /// `on NamedType`
    pub(crate) fn parse_type_condition(&mut self) -> Result<()> {
        self.start_node(SyntaxKind::TypeCondition)?;
        self.expect_keyword("on")?;
        self.parse_named_type()?;
        self.finish_node()
    }

    /// `( VariableDefinition+ )`
    fn parse_variable_definitions(&mut self) -> Result<()> {
        self.start_node(SyntaxKind::VariableDefinitions)?;
        self.assert_current(SyntaxKind::ParenOpen);
        self.bump()?;

        loop {
            self.parse_variable_definition()?;
            if self.currently_is(SyntaxKind::ParenClose) {
                break;
            }
        }
        self.bump()?;

        self.finish_node()
    }

    /// `Variable : Type DefaultValue? Directives?`
    fn parse_variable_definition(&mut self) -> Result<()> {
        self.start_node(SyntaxKind::VariableDefinition)?;
        if !self.currently_is(SyntaxKind::Dollar) {
            return Err(self.unexpected("expected a variable definition"));
        }
        self.parse_variable()?;
        self.expect(SyntaxKind::Colon, "':'")?;
        self.parse_type()?;

        if self.currently_is(SyntaxKind::Equals) {
            self.start_node(SyntaxKind::DefaultValue)?;
            self.bump()?;
            self.parse_value(true)?;
            self.finish_node()?;
        }
        if self.currently_is(SyntaxKind::At) {
            self.parse_directives(true)?;
        }

        self.finish_node()
    }

    /// `NamedType !?` or `[ Type ] !?`
    pub(crate) fn parse_type(&mut self) -> Result<()> {
        self.start_node(SyntaxKind::Type)?;

        match self.current() {
            SyntaxKind::Name => self.parse_named_type()?,
            SyntaxKind::BracketOpen => {
                self.start_node(SyntaxKind::ListType)?;
                self.bump()?;
                self.parse_type()?;
                self.expect(SyntaxKind::BracketClose, "']'")?;
                self.finish_node()?;
            }
            _ => return Err(self.unexpected("expected a type")),
        }
        if self.currently_is(SyntaxKind::Bang) {
            self.bump()?;
        }

        self.finish_node()
    }

    pub(crate) fn parse_named_type(&mut self) -> Result<()> {
        self.start_node(SyntaxKind::NamedType)?;
        self.expect_name("a type name")?;
        self.finish_node()
    }
}
