//! Token definitions for the KPL scanner.

use crate::frontend::diagnostics::Pos;
use std::fmt;

/// Every token the scanner can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // Keywords
    Program,
    Const,
    Type,
    Var,
    Integer,
    CharKw,
    Array,
    Of,
    Function,
    Procedure,
    Begin,
    End,
    Call,
    If,
    Then,
    Else,
    While,
    Do,
    For,
    To,

    // Literals and names
    Ident(String),
    Number(i64),
    CharLit(char),

    // Symbols
    Semicolon,
    Colon,
    Period,
    Comma,
    Assign,
    Eq,
    Neq,
    Lt,
    Le,
    Gt,
    Ge,
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
    LBracket,
    RBracket,

    Eof,
}

impl TokenKind {
    /// Name used in `Missing <token>` diagnostics and token dumps.
    pub fn name(&self) -> &'static str {
        use TokenKind::*;
        match self {
            Program => "PROGRAM",
            Const => "CONST",
            Type => "TYPE",
            Var => "VAR",
            Integer => "INTEGER",
            CharKw => "CHAR",
            Array => "ARRAY",
            Of => "OF",
            Function => "FUNCTION",
            Procedure => "PROCEDURE",
            Begin => "BEGIN",
            End => "END",
            Call => "CALL",
            If => "IF",
            Then => "THEN",
            Else => "ELSE",
            While => "WHILE",
            Do => "DO",
            For => "FOR",
            To => "TO",
            Ident(_) => "IDENT",
            Number(_) => "NUMBER",
            CharLit(_) => "CHAR LITERAL",
            Semicolon => "SEMICOLON",
            Colon => "COLON",
            Period => "PERIOD",
            Comma => "COMMA",
            Assign => "ASSIGN",
            Eq => "EQ",
            Neq => "NEQ",
            Lt => "LT",
            Le => "LE",
            Gt => "GT",
            Ge => "GE",
            Plus => "PLUS",
            Minus => "MINUS",
            Star => "TIMES",
            Slash => "SLASH",
            LParen => "LPAR",
            RParen => "RPAR",
            LBracket => "LBRACKET",
            RBracket => "RBRACKET",
            Eof => "END OF FILE",
        }
    }

    /// Keyword lookup for a scanned identifier. Keywords are uppercase and
    /// matching is exact, so `program` stays an identifier.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        use TokenKind::*;
        let kind = match word {
            "PROGRAM" => Program,
            "CONST" => Const,
            "TYPE" => Type,
            "VAR" => Var,
            "INTEGER" => Integer,
            "CHAR" => CharKw,
            "ARRAY" => Array,
            "OF" => Of,
            "FUNCTION" => Function,
            "PROCEDURE" => Procedure,
            "BEGIN" => Begin,
            "END" => End,
            "CALL" => Call,
            "IF" => If,
            "THEN" => Then,
            "ELSE" => Else,
            "WHILE" => While,
            "DO" => Do,
            "FOR" => For,
            "TO" => To,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(name) => write!(f, "IDENT({name})"),
            TokenKind::Number(n) => write!(f, "NUMBER({n})"),
            TokenKind::CharLit(c) => write!(f, "CHAR('{c}')"),
            other => f.write_str(other.name()),
        }
    }
}

/// A token and the position of its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: Pos,
}

impl Token {
    pub fn new(kind: TokenKind, pos: Pos) -> Self {
        Token { kind, pos }
    }
}
