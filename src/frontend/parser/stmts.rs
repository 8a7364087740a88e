/// Statement productions.

impl Parser {
    // statements = statement (";" statement)*
    fn parse_statements(&mut self) -> Result<(), CompileError> {
        self.parse_statement()?;
        while self.check(TokenKind::Semicolon) {
            self.advance()?;
            self.parse_statement()?;
        }
        Ok(())
    }

    // statement = assign | call | group | if | while | for | empty
    //
    // The empty statement is recognized by its FOLLOW set: a ";", "END", or
    // "ELSE" in lookahead position means there is no statement here.
    fn parse_statement(&mut self) -> Result<(), CompileError> {
        match self.lookahead.kind {
            TokenKind::Ident(_) => self.parse_assign_st(),
            TokenKind::Call => self.parse_call_st(),
            TokenKind::Begin => self.parse_group_st(),
            TokenKind::If => self.parse_if_st(),
            TokenKind::While => self.parse_while_st(),
            TokenKind::For => self.parse_for_st(),
            TokenKind::Semicolon | TokenKind::End | TokenKind::Else => Ok(()),
            _ => Err(CompileError::new(
                ErrorKind::InvalidStatement,
                self.lookahead.pos,
            )),
        }
    }

    // lvalue = ident indexes?
    //
    // An assignable name is a variable (possibly indexed down to an element),
    // a parameter, or the function whose body is being parsed.
    fn parse_lvalue(&mut self) -> Result<Type, CompileError> {
        let (name, pos) = self.expect_ident()?;
        let id = semantics::check_declared_lvalue_ident(&self.table, &name, pos)?;
        let kind = self.table.entity(id).kind.clone();
        match kind {
            EntityKind::Variable { ty } => self.parse_indexes(ty),
            EntityKind::Parameter { ty, .. } => Ok(ty),
            EntityKind::Function { return_type, .. } => Ok(return_type),
            _ => unreachable!("lvalue check admits only assignable entities"),
        }
    }

    // assign = lvalue ":=" expression
    fn parse_assign_st(&mut self) -> Result<(), CompileError> {
        let lvalue_ty = self.parse_lvalue()?;
        self.expect(TokenKind::Assign)?;
        let expr_ty = self.parse_expression()?;
        semantics::check_type_equality(&lvalue_ty, &expr_ty, self.current.pos)
    }

    // call = "CALL" ident arguments
    fn parse_call_st(&mut self) -> Result<(), CompileError> {
        self.expect(TokenKind::Call)?;
        let (name, pos) = self.expect_ident()?;
        let proc = semantics::check_declared_procedure(&self.table, &name, pos)?;
        let params = self.table.params_of(proc).to_vec();
        self.parse_arguments(&params)
    }

    // group = "BEGIN" statements "END"
    fn parse_group_st(&mut self) -> Result<(), CompileError> {
        self.expect(TokenKind::Begin)?;
        self.parse_statements()?;
        self.expect(TokenKind::End)
    }

    // if = "IF" condition "THEN" statement ["ELSE" statement]
    fn parse_if_st(&mut self) -> Result<(), CompileError> {
        self.expect(TokenKind::If)?;
        self.parse_condition()?;
        self.expect(TokenKind::Then)?;
        self.parse_statement()?;
        if self.check(TokenKind::Else) {
            self.advance()?;
            self.parse_statement()?;
        }
        Ok(())
    }

    // while = "WHILE" condition "DO" statement
    fn parse_while_st(&mut self) -> Result<(), CompileError> {
        self.expect(TokenKind::While)?;
        self.parse_condition()?;
        self.expect(TokenKind::Do)?;
        self.parse_statement()
    }

    // for = "FOR" ident ":=" expression "TO" expression "DO" statement
    //
    // The loop variable must be an Int variable; both bounds must be Int.
    fn parse_for_st(&mut self) -> Result<(), CompileError> {
        self.expect(TokenKind::For)?;
        let (name, pos) = self.expect_ident()?;
        let var = semantics::check_declared_variable(&self.table, &name, pos)?;
        let var_ty = match &self.table.entity(var).kind {
            EntityKind::Variable { ty } => ty.clone(),
            _ => unreachable!("variable check admits only variables"),
        };
        semantics::check_int_type(&var_ty, self.current.pos)?;

        self.expect(TokenKind::Assign)?;
        let from_ty = self.parse_expression()?;
        semantics::check_type_equality(&var_ty, &from_ty, self.current.pos)?;

        self.expect(TokenKind::To)?;
        let to_ty = self.parse_expression()?;
        semantics::check_int_type(&to_ty, self.current.pos)?;

        self.expect(TokenKind::Do)?;
        self.parse_statement()
    }
}
