/// Token window primitives and FOLLOW-set predicates.

impl Parser {
    /// Slide the window: the lookahead becomes current and a fresh token is
    /// scanned.
    fn advance(&mut self) -> Result<(), CompileError> {
        let next = self.lexer.next_token()?;
        self.current = std::mem::replace(&mut self.lookahead, next);
        Ok(())
    }

    /// Consume the lookahead if it matches, otherwise fail with
    /// `Missing <token>` at the lookahead position.
    fn expect(&mut self, kind: TokenKind) -> Result<(), CompileError> {
        if self.lookahead.kind == kind {
            self.advance()
        } else {
            Err(errors::missing_token(kind.name(), self.lookahead.pos))
        }
    }

    /// Consume an identifier, returning its text and position.
    fn expect_ident(&mut self) -> Result<(String, Pos), CompileError> {
        match &self.lookahead.kind {
            TokenKind::Ident(name) => {
                let name = name.clone();
                let pos = self.lookahead.pos;
                self.advance()?;
                Ok((name, pos))
            }
            _ => Err(errors::missing_token("IDENT", self.lookahead.pos)),
        }
    }

    /// Consume a number literal, returning its value and position.
    fn expect_number(&mut self) -> Result<(i64, Pos), CompileError> {
        match self.lookahead.kind {
            TokenKind::Number(value) => {
                let pos = self.lookahead.pos;
                self.advance()?;
                Ok((value, pos))
            }
            _ => Err(errors::missing_token("NUMBER", self.lookahead.pos)),
        }
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.lookahead.kind == kind
    }

    fn at_ident(&self) -> bool {
        matches!(self.lookahead.kind, TokenKind::Ident(_))
    }

    // FOLLOW(expression): everything that may legally come after an
    // expression. A lookahead outside this set (and not an operator) means
    // the expression is malformed.
    fn at_expression_follow(&self) -> bool {
        use TokenKind::*;
        matches!(
            self.lookahead.kind,
            To | Do
                | RParen
                | Comma
                | Eq
                | Neq
                | Le
                | Lt
                | Ge
                | Gt
                | RBracket
                | Semicolon
                | End
                | Else
                | Then
        )
    }

    // FOLLOW(term) additionally admits the additive operators.
    fn at_term_follow(&self) -> bool {
        matches!(self.lookahead.kind, TokenKind::Plus | TokenKind::Minus)
            || self.at_expression_follow()
    }

    // FOLLOW(arguments) additionally admits the multiplicative operators: an
    // argument-less function reference may sit inside a term.
    fn at_arguments_follow(&self) -> bool {
        matches!(self.lookahead.kind, TokenKind::Star | TokenKind::Slash) || self.at_term_follow()
    }
}
