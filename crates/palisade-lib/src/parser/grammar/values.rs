use crate::Result;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::VALUE_FIRST;

impl Parser<'_> {
    /// `( Argument+ )` where `Argument := Name : Value`
    pub(crate) fn parse_arguments(&mut self, is_const: bool) -> Result<()> {
        self.start_node(SyntaxKind::Arguments)?;
        self.assert_current(SyntaxKind::ParenOpen);
        self.bump()?;

        loop {
            self.start_node(SyntaxKind::Argument)?;
            self.expect_name("an argument name")?;
            self.expect(SyntaxKind::Colon, "':'")?;
            self.parse_value(is_const)?;
            self.finish_node()?;
            if self.currently_is(SyntaxKind::ParenClose) {
                break;
            }
        }
        self.bump()?;

        self.finish_node()
    }

    /// `Directive+` where `Directive := @ Name Arguments?`
    pub(crate) fn parse_directives(&mut self, is_const: bool) -> Result<()> {
        self.start_node(SyntaxKind::Directives)?;

        while self.currently_is(SyntaxKind::At) {
            self.start_node(SyntaxKind::Directive)?;
            self.bump()?;
            self.expect_name("a directive name")?;
            if self.currently_is(SyntaxKind::ParenOpen) {
                self.parse_arguments(is_const)?;
            }
            self.finish_node()?;
        }

        self.finish_node()
    }

    /// `$ Name`
    pub(crate) fn parse_variable(&mut self) -> Result<()> {
        self.start_node(SyntaxKind::Variable)?;
        self.assert_current(SyntaxKind::Dollar);
        self.bump()?;
        self.expect_name("a variable name")?;
        self.finish_node()
    }

    /// Any value; `is_const` rejects variables anywhere inside it.
    pub(crate) fn parse_value(&mut self, is_const: bool) -> Result<()> {
        if !self.currently_is_one_of(VALUE_FIRST) {
            return Err(self.unexpected("expected a value"));
        }

        match self.current() {
            SyntaxKind::Dollar if is_const => {
                Err(self.unexpected("variables are not allowed in constant values"))
            }
            SyntaxKind::Dollar => self.parse_variable(),
            SyntaxKind::IntLit => self.parse_scalar(SyntaxKind::IntValue),
            SyntaxKind::FloatLit => self.parse_scalar(SyntaxKind::FloatValue),
            SyntaxKind::StringLit | SyntaxKind::BlockStringLit => {
                self.parse_scalar(SyntaxKind::StringValue)
            }
            SyntaxKind::Name => {
                let kind = match self.current_text() {
                    "true" | "false" => SyntaxKind::BooleanValue,
                    "null" => SyntaxKind::NullValue,
                    _ => SyntaxKind::EnumValue,
                };
                self.parse_scalar(kind)
            }
            SyntaxKind::BracketOpen => self.parse_list_value(is_const),
            _ => self.parse_object_value(is_const),
        }
    }

    fn parse_scalar(&mut self, kind: SyntaxKind) -> Result<()> {
        self.start_node(kind)?;
        self.bump()?;
        self.finish_node()
    }

    /// `[ Value* ]`
    fn parse_list_value(&mut self, is_const: bool) -> Result<()> {
        self.start_node(SyntaxKind::ListValue)?;
        self.bump()?;
        while !self.currently_is(SyntaxKind::BracketClose) {
            self.parse_value(is_const)?;
        }
        self.bump()?;
        self.finish_node()
    }

    /// `{ ObjectField* }` where `ObjectField := Name : Value`
    fn parse_object_value(&mut self, is_const: bool) -> Result<()> {
        self.start_node(SyntaxKind::ObjectValue)?;
        self.assert_current(SyntaxKind::BraceOpen);
        self.bump()?;
        while !self.currently_is(SyntaxKind::BraceClose) {
            self.start_node(SyntaxKind::ObjectField)?;
            self.expect_name("an object field name")?;
            self.expect(SyntaxKind::Colon, "':'")?;
            self.parse_value(is_const)?;
            self.finish_node()?;
        }
        self.bump()?;
        self.finish_node()
    }
}
