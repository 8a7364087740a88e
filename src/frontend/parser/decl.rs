/// Declaration productions: blocks, constants, types, variables, routines,
/// and parameter lists.

impl Parser {
    // block = [const_decls] [type_decls] [var_decls] sub_decls body
    fn parse_block(&mut self) -> Result<(), CompileError> {
        self.parse_const_decls()?;
        self.parse_type_decls()?;
        self.parse_var_decls()?;
        self.parse_sub_decls()?;
        self.parse_body()
    }

    // const_decls = "CONST" (ident "=" constant ";")+
    fn parse_const_decls(&mut self) -> Result<(), CompileError> {
        if !self.check(TokenKind::Const) {
            return Ok(());
        }
        self.advance()?;
        loop {
            let (name, pos) = self.expect_ident()?;
            semantics::check_fresh_ident(&self.table, &name, pos)?;
            self.expect(TokenKind::Eq)?;
            let value = self.parse_constant()?;
            let id = self.table.create_constant(&name, value);
            self.table.declare(id);
            self.expect(TokenKind::Semicolon)?;
            if !self.at_ident() {
                return Ok(());
            }
        }
    }

    // type_decls = "TYPE" (ident "=" type ";")+
    fn parse_type_decls(&mut self) -> Result<(), CompileError> {
        if !self.check(TokenKind::Type) {
            return Ok(());
        }
        self.advance()?;
        loop {
            let (name, pos) = self.expect_ident()?;
            semantics::check_fresh_ident(&self.table, &name, pos)?;
            self.expect(TokenKind::Eq)?;
            let actual = self.parse_type()?;
            let id = self.table.create_type(&name, actual);
            self.table.declare(id);
            self.expect(TokenKind::Semicolon)?;
            if !self.at_ident() {
                return Ok(());
            }
        }
    }

    // var_decls = "VAR" (ident ":" type ";")+
    fn parse_var_decls(&mut self) -> Result<(), CompileError> {
        if !self.check(TokenKind::Var) {
            return Ok(());
        }
        self.advance()?;
        loop {
            let (name, pos) = self.expect_ident()?;
            semantics::check_fresh_ident(&self.table, &name, pos)?;
            self.expect(TokenKind::Colon)?;
            let ty = self.parse_type()?;
            let id = self.table.create_variable(&name, ty);
            self.table.declare(id);
            self.expect(TokenKind::Semicolon)?;
            if !self.at_ident() {
                return Ok(());
            }
        }
    }

    // sub_decls = (function_decl | procedure_decl)*
    fn parse_sub_decls(&mut self) -> Result<(), CompileError> {
        loop {
            if self.check(TokenKind::Function) {
                self.parse_function_decl()?;
            } else if self.check(TokenKind::Procedure) {
                self.parse_procedure_decl()?;
            } else {
                return Ok(());
            }
        }
    }

    // body = "BEGIN" statements "END"
    fn parse_body(&mut self) -> Result<(), CompileError> {
        self.expect(TokenKind::Begin)?;
        self.parse_statements()?;
        self.expect(TokenKind::End)
    }

    // function_decl = "FUNCTION" ident [params] ":" basic_type ";" block ";"
    //
    // Parameters are collected before the function entity exists (its return
    // type comes after them), then declared into the fresh scope.
    fn parse_function_decl(&mut self) -> Result<(), CompileError> {
        self.expect(TokenKind::Function)?;
        let (name, pos) = self.expect_ident()?;
        semantics::check_fresh_ident(&self.table, &name, pos)?;

        let params = self.parse_params()?;
        self.expect(TokenKind::Colon)?;
        let return_type = self.parse_basic_type()?;

        let id = self.table.create_function(&name, return_type);
        self.table.declare(id);
        let scope = self
            .table
            .scope_of(id)
            .expect("INVARIANT: a function entity always owns a scope");
        self.table.enter_scope(scope);
        self.declare_params(params);

        self.expect(TokenKind::Semicolon)?;
        self.parse_block()?;
        self.expect(TokenKind::Semicolon)?;

        self.table.exit_scope();
        Ok(())
    }

    // procedure_decl = "PROCEDURE" ident [params] ";" block ";"
    fn parse_procedure_decl(&mut self) -> Result<(), CompileError> {
        self.expect(TokenKind::Procedure)?;
        let (name, pos) = self.expect_ident()?;
        semantics::check_fresh_ident(&self.table, &name, pos)?;

        let params = self.parse_params()?;

        let id = self.table.create_procedure(&name);
        self.table.declare(id);
        let scope = self
            .table
            .scope_of(id)
            .expect("INVARIANT: a procedure entity always owns a scope");
        self.table.enter_scope(scope);
        self.declare_params(params);

        self.expect(TokenKind::Semicolon)?;
        self.parse_block()?;
        self.expect(TokenKind::Semicolon)?;

        self.table.exit_scope();
        Ok(())
    }

    // params = "(" param (";" param)* ")" | empty
    fn parse_params(&mut self) -> Result<Vec<ParamSpec>, CompileError> {
        let mut params = Vec::new();
        if self.check(TokenKind::LParen) {
            self.advance()?;
            self.parse_param(&mut params)?;
            while self.check(TokenKind::Semicolon) {
                self.advance()?;
                self.parse_param(&mut params)?;
            }
            self.expect(TokenKind::RParen)?;
        }
        Ok(params)
    }

    // param = ["VAR"] ident ":" basic_type
    fn parse_param(&mut self, params: &mut Vec<ParamSpec>) -> Result<(), CompileError> {
        let pass = match self.lookahead.kind {
            TokenKind::Ident(_) => PassKind::ByValue,
            TokenKind::Var => {
                self.advance()?;
                PassKind::ByReference
            }
            _ => {
                return Err(CompileError::new(
                    ErrorKind::InvalidParameter,
                    self.lookahead.pos,
                ));
            }
        };
        let (name, pos) = self.expect_ident()?;
        // The routine's scope holds nothing but its parameters at this
        // point, so freshness is freshness against the collected list.
        if params.iter().any(|p| p.name == name) {
            return Err(errors::duplicate_ident(pos));
        }
        self.expect(TokenKind::Colon)?;
        let ty = self.parse_basic_type()?;
        params.push(ParamSpec { name, pass, ty });
        Ok(())
    }

    fn declare_params(&mut self, params: Vec<ParamSpec>) {
        for spec in params {
            let id = self.table.create_parameter(&spec.name, spec.ty, spec.pass);
            self.table.declare(id);
        }
    }

    // constant = ("+" | "-") int_constant | char_literal | int_constant
    fn parse_constant(&mut self) -> Result<ConstantValue, CompileError> {
        match self.lookahead.kind {
            TokenKind::Plus => {
                self.advance()?;
                Ok(ConstantValue::Int(self.parse_int_constant()?))
            }
            TokenKind::Minus => {
                self.advance()?;
                Ok(ConstantValue::Int(-self.parse_int_constant()?))
            }
            TokenKind::CharLit(c) => {
                self.advance()?;
                Ok(ConstantValue::Char(c))
            }
            _ => Ok(ConstantValue::Int(self.parse_int_constant()?)),
        }
    }

    // int_constant = number | ident naming an Int constant
    fn parse_int_constant(&mut self) -> Result<i64, CompileError> {
        match self.lookahead.kind {
            TokenKind::Number(_) => {
                let (value, _) = self.expect_number()?;
                Ok(value)
            }
            TokenKind::Ident(_) => {
                let (name, pos) = self.expect_ident()?;
                match semantics::check_declared_constant(&self.table, &name, pos)? {
                    ConstantValue::Int(value) => Ok(value),
                    ConstantValue::Char(_) => {
                        Err(CompileError::new(ErrorKind::UndeclaredIntConstant, pos))
                    }
                }
            }
            _ => Err(CompileError::new(
                ErrorKind::InvalidConstant,
                self.lookahead.pos,
            )),
        }
    }

    // type = "INTEGER" | "CHAR" | "ARRAY" "[" number "]" "OF" type
    //      | ident naming a declared type
    fn parse_type(&mut self) -> Result<Type, CompileError> {
        match self.lookahead.kind {
            TokenKind::Integer => {
                self.advance()?;
                Ok(Type::Int)
            }
            TokenKind::CharKw => {
                self.advance()?;
                Ok(Type::Char)
            }
            TokenKind::Array => {
                self.advance()?;
                self.expect(TokenKind::LBracket)?;
                let (size, _) = self.expect_number()?;
                self.expect(TokenKind::RBracket)?;
                self.expect(TokenKind::Of)?;
                let element = self.parse_type()?;
                Ok(Type::array(size, element))
            }
            TokenKind::Ident(_) => {
                let (name, pos) = self.expect_ident()?;
                semantics::check_declared_type(&self.table, &name, pos)
            }
            _ => Err(CompileError::new(ErrorKind::InvalidType, self.lookahead.pos)),
        }
    }

    // basic_type = "INTEGER" | "CHAR"
    fn parse_basic_type(&mut self) -> Result<Type, CompileError> {
        match self.lookahead.kind {
            TokenKind::Integer => {
                self.advance()?;
                Ok(Type::Int)
            }
            TokenKind::CharKw => {
                self.advance()?;
                Ok(Type::Char)
            }
            _ => Err(CompileError::new(
                ErrorKind::InvalidBasicType,
                self.lookahead.pos,
            )),
        }
    }
}
