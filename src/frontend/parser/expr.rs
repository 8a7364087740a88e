/// Expression, condition, index, and argument productions.

impl Parser {
    // condition = expression comparator expression
    //
    // Both sides must be basic and structurally equal.
    fn parse_condition(&mut self) -> Result<(), CompileError> {
        let t1 = self.parse_expression()?;
        semantics::check_basic_type(&t1, self.current.pos)?;

        match self.lookahead.kind {
            TokenKind::Eq
            | TokenKind::Neq
            | TokenKind::Le
            | TokenKind::Lt
            | TokenKind::Ge
            | TokenKind::Gt => self.advance()?,
            _ => {
                return Err(CompileError::new(
                    ErrorKind::InvalidComparator,
                    self.lookahead.pos,
                ));
            }
        }

        let t2 = self.parse_expression()?;
        semantics::check_basic_type(&t2, self.current.pos)?;
        semantics::check_type_equality(&t1, &t2, self.current.pos)
    }

    // expression = ["+" | "-"] additive
    //
    // A unary sign forces the whole expression to Int.
    fn parse_expression(&mut self) -> Result<Type, CompileError> {
        match self.lookahead.kind {
            TokenKind::Plus | TokenKind::Minus => {
                self.advance()?;
                let ty = self.parse_additive()?;
                semantics::check_int_type(&ty, self.current.pos)?;
                Ok(ty)
            }
            _ => self.parse_additive(),
        }
    }

    // additive = term (("+" | "-") term)*
    //
    // Every term after an operator must be Int; the expression's type is the
    // first term's, checked for consistency against the operator chain. The
    // list ends only at a token in FOLLOW(expression); anything else is a
    // malformed expression.
    fn parse_additive(&mut self) -> Result<Type, CompileError> {
        let first = self.parse_term()?;
        let mut rest: Option<Type> = None;
        loop {
            match self.lookahead.kind {
                TokenKind::Plus | TokenKind::Minus => {
                    self.advance()?;
                    let ty = self.parse_term()?;
                    semantics::check_int_type(&ty, self.current.pos)?;
                    if rest.is_none() {
                        rest = Some(ty);
                    }
                }
                _ if self.at_expression_follow() => break,
                _ => {
                    return Err(CompileError::new(
                        ErrorKind::InvalidExpression,
                        self.lookahead.pos,
                    ));
                }
            }
        }
        if let Some(rest) = rest {
            semantics::check_type_equality(&first, &rest, self.current.pos)?;
        }
        Ok(first)
    }

    // term = factor (("*" | "/") factor)*
    //
    // The term's type is the first factor's; factors after an operator must
    // be Int.
    fn parse_term(&mut self) -> Result<Type, CompileError> {
        let ty = self.parse_factor()?;
        loop {
            match self.lookahead.kind {
                TokenKind::Star | TokenKind::Slash => {
                    self.advance()?;
                    let factor_ty = self.parse_factor()?;
                    semantics::check_int_type(&factor_ty, self.current.pos)?;
                }
                _ if self.at_term_follow() => break,
                _ => {
                    return Err(CompileError::new(
                        ErrorKind::InvalidTerm,
                        self.lookahead.pos,
                    ));
                }
            }
        }
        Ok(ty)
    }

    // factor = number | char_literal | "(" expression ")"
    //        | ident (constant | indexed variable | parameter | function call)
    fn parse_factor(&mut self) -> Result<Type, CompileError> {
        match self.lookahead.kind {
            TokenKind::Number(_) => {
                self.advance()?;
                Ok(Type::Int)
            }
            TokenKind::CharLit(_) => {
                self.advance()?;
                Ok(Type::Char)
            }
            TokenKind::LParen => {
                self.advance()?;
                let ty = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(ty)
            }
            TokenKind::Ident(_) => {
                let (name, pos) = self.expect_ident()?;
                let id = semantics::check_declared_ident(&self.table, &name, pos)?;
                let kind = self.table.entity(id).kind.clone();
                match kind {
                    EntityKind::Constant { value } => Ok(value.ty()),
                    EntityKind::Variable { ty } => self.parse_indexes(ty),
                    EntityKind::Parameter { ty, .. } => Ok(ty),
                    EntityKind::Function {
                        return_type,
                        params,
                        ..
                    } => {
                        self.parse_arguments(&params)?;
                        Ok(return_type)
                    }
                    _ => Err(CompileError::new(ErrorKind::InvalidFactor, pos)),
                }
            }
            _ => Err(CompileError::new(
                ErrorKind::InvalidFactor,
                self.lookahead.pos,
            )),
        }
    }

    // indexes = ("[" expression "]")*
    //
    // Each index requires the type so far to be an array and narrows it to
    // the element type; each index expression must be Int.
    fn parse_indexes(&mut self, mut ty: Type) -> Result<Type, CompileError> {
        while self.check(TokenKind::LBracket) {
            semantics::check_array_type(&ty, self.current.pos)?;
            self.advance()?;
            let index_ty = self.parse_expression()?;
            semantics::check_int_type(&index_ty, self.current.pos)?;
            self.expect(TokenKind::RBracket)?;
            ty = match ty {
                Type::Array { element, .. } => *element,
                _ => unreachable!("array check guarantees an array type"),
            };
        }
        Ok(ty)
    }

    // arguments = "(" expression ("," expression)* ")" | empty
    //
    // Arguments are paired with parameters in lockstep; whichever list runs
    // out first stops the pairing. An absent argument list is legal only
    // when the lookahead is in FOLLOW(arguments).
    fn parse_arguments(&mut self, params: &[EntityId]) -> Result<(), CompileError> {
        if self.check(TokenKind::LParen) {
            self.advance()?;
            let mut params = params.iter();
            if let Some(&param) = params.next() {
                self.parse_argument(param)?;
            }
            while self.check(TokenKind::Comma) {
                self.advance()?;
                if let Some(&param) = params.next() {
                    self.parse_argument(param)?;
                }
            }
            self.expect(TokenKind::RParen)
        } else if self.at_arguments_follow() {
            Ok(())
        } else {
            Err(CompileError::new(
                ErrorKind::InvalidArguments,
                self.lookahead.pos,
            ))
        }
    }

    // argument = expression, type-checked against its parameter
    fn parse_argument(&mut self, param: EntityId) -> Result<(), CompileError> {
        let param_ty = match &self.table.entity(param).kind {
            EntityKind::Parameter { ty, .. } => ty.clone(),
            _ => unreachable!("parameter lists hold only parameter entities"),
        };
        let arg_ty = self.parse_expression()?;
        semantics::check_type_equality(&param_ty, &arg_ty, self.current.pos)
    }
}
