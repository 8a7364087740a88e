/// Parser core state and entrypoint.
///
/// This chunk defines the [`Parser`] type, the top-level `parse()` entrypoint,
/// and small internal types shared across the other parser chunks.

/// A parameter recognized syntactically, before its routine entity exists.
/// The routine is created only once its return type is known, so parameters
/// are collected first and declared into the routine's scope afterwards.
struct ParamSpec {
    name: String,
    pass: PassKind,
    ty: Type,
}

/// Parser state.
///
/// Holds the two-token window (`current` is the last consumed token,
/// `lookahead` drives every decision) and owns the symbol table being built.
pub struct Parser {
    lexer: Lexer,
    current: Token,
    lookahead: Token,
    table: SymbolTable,
}

impl Parser {
    /// Create a parser over a source string. Fails if the very first token
    /// is already malformed.
    pub fn new(source: &str) -> Result<Self, CompileError> {
        let mut lexer = Lexer::new(source);
        let lookahead = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current: Token::new(TokenKind::Eof, Pos::default()),
            lookahead,
            table: SymbolTable::new(),
        })
    }

    /// Parse the whole program. On success the finished symbol table is
    /// handed back; on failure the single fatal diagnostic is returned and
    /// the partial table is discarded.
    pub fn parse(mut self) -> Result<SymbolTable, CompileError> {
        self.parse_program()?;
        Ok(self.table)
    }

    // program = "PROGRAM" ident ";" block "."
    fn parse_program(&mut self) -> Result<(), CompileError> {
        self.expect(TokenKind::Program)?;
        let (name, _) = self.expect_ident()?;
        let program = self.table.create_program(&name);
        let scope = self
            .table
            .scope_of(program)
            .expect("INVARIANT: a program entity always owns a scope");
        self.table.enter_scope(scope);

        self.expect(TokenKind::Semicolon)?;
        self.parse_block()?;
        self.expect(TokenKind::Period)?;

        self.table.exit_scope();
        Ok(())
    }
}

/// Parse a KPL source string into its symbol table.
///
/// This is the main public entrypoint for the front-end.
///
/// ## Errors
/// Returns the first [`CompileError`] encountered; nothing past it is
/// examined.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Result<SymbolTable, CompileError> {
    Parser::new(source)?.parse()
}
