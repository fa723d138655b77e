use crate::Result;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::SELECTION_FIRST;

impl Parser<'_> {
    /// `{ Selection+ }`
    pub(crate) fn parse_selection_set(&mut self) -> Result<()> {
        self.start_node(SyntaxKind::SelectionSet)?;
        self.expect(SyntaxKind::BraceOpen, "'{'")?;

        loop {
            self.parse_selection()?;
            if self.currently_is(SyntaxKind::BraceClose) {
                break;
            }
        }
        self.bump()?;

        self.finish_node()
    }

    fn parse_selection(&mut self) -> Result<()> {
        if !self.currently_is_one_of(SELECTION_FIRST) {
            return Err(self.unexpected("expected a selection"));
        }
        if self.currently_is(SyntaxKind::Spread) {
            return self.parse_spread();
        }
        self.parse_field()
    }

    /// `Alias? Name Arguments? Directives? SelectionSet?`
    fn parse_field(&mut self) -> Result<()> {
        self.start_node(SyntaxKind::Field)?;

        // LL(2): `name :` is an alias
        if self.peek_nth(1).0 == SyntaxKind::Colon {
            self.start_node(SyntaxKind::Alias)?;
            self.bump()?;
            self.bump()?;
            self.finish_node()?;
        }
        self.expect_name("a field name")?;

        if self.currently_is(SyntaxKind::ParenOpen) {
            self.parse_arguments(false)?;
        }
        if self.currently_is(SyntaxKind::At) {
            self.parse_directives(false)?;
        }
        if self.currently_is(SyntaxKind::BraceOpen) {
            self.parse_selection_set()?;
        }

        self.finish_node()
    }

    /// `... FragmentName Directives?` or `... TypeCondition? Directives? SelectionSet`
    fn parse_spread(&mut self) -> Result<()> {
        // LL(2): a name other than `on` after the spread names a fragment
        let (next, text) = self.peek_nth(1);
        if next == SyntaxKind::Name && text != "on" {
            self.start_node(SyntaxKind::FragmentSpread)?;
            self.bump()?;
            self.bump()?;
            if self.currently_is(SyntaxKind::At) {
                self.parse_directives(false)?;
            }
            return self.finish_node();
        }

        self.start_node(SyntaxKind::InlineFragment)?;
        self.bump()?;
        if self.at_keyword("on") {
            self.parse_type_condition()?;
        }
        if self.currently_is(SyntaxKind::At) {
            self.parse_directives(false)?;
        }
        self.parse_selection_set()?;
        self.finish_node()
    }
}
