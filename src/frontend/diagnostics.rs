//! Error values and reporting.
//!
//! The front-end stops at the first violation. Every lexical, syntactic, and
//! semantic check produces a [`CompileError`] carrying an [`ErrorKind`] and
//! the source position it was detected at; the driver renders it as a single
//! `<line>-<col>:<message>` line.

use std::fmt;
use thiserror::Error;

/// A 1-based source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pos {
    pub line: u32,
    pub col: u32,
}

impl Pos {
    pub fn new(line: u32, col: u32) -> Self {
        Pos { line, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.line, self.col)
    }
}

/// Broad classification of an error, by the phase that detects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Malformed input the scanner rejects.
    Lexical,
    /// A token sequence no production accepts.
    Syntax,
    /// A name that does not resolve to the required entity kind.
    Resolution,
    /// A structural type mismatch or a type used where its shape is not allowed.
    Typing,
}

/// Every diagnostic the front-end can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    // Lexical
    #[error("End of comment expected!")]
    UnterminatedComment,
    #[error("Identification too long!")]
    IdentTooLong,
    #[error("Invalid const char!")]
    InvalidCharConstant,
    #[error("Invalid symbol!")]
    InvalidSymbol,

    // Syntax
    #[error("Missing {0}")]
    MissingToken(&'static str),
    #[error("Invalid constant!")]
    InvalidConstant,
    #[error("Invalid type!")]
    InvalidType,
    #[error("Invalid basic type!")]
    InvalidBasicType,
    #[error("Invalid parameter!")]
    InvalidParameter,
    #[error("Invalid statement!")]
    InvalidStatement,
    #[error("Invalid arguments!")]
    InvalidArguments,
    #[error("Invalid comparator!")]
    InvalidComparator,
    #[error("Invalid expression!")]
    InvalidExpression,
    #[error("Invalid term!")]
    InvalidTerm,
    #[error("Invalid factor!")]
    InvalidFactor,

    // Resolution
    #[error("Undeclared identifier!")]
    UndeclaredIdent,
    #[error("Undeclared constant!")]
    UndeclaredConstant,
    #[error("Undeclared int constant!")]
    UndeclaredIntConstant,
    #[error("Undeclared type!")]
    UndeclaredType,
    #[error("Undeclared variable!")]
    UndeclaredVariable,
    #[error("Undeclared function!")]
    UndeclaredFunction,
    #[error("Undeclared procedure!")]
    UndeclaredProcedure,
    #[error("Duplicate identifier!")]
    DuplicateIdent,
    #[error("Invalid identifier!")]
    InvalidIdent,
    #[error("Invalid variable!")]
    InvalidVariable,
    #[error("Invalid function!")]
    InvalidFunction,
    #[error("Invalid procedure!")]
    InvalidProcedure,

    // Typing
    #[error("Type inconsistency!")]
    TypeInconsistency,
}

impl ErrorKind {
    /// The phase taxonomy this kind belongs to.
    pub fn class(&self) -> ErrorClass {
        use ErrorKind::*;
        match self {
            UnterminatedComment | IdentTooLong | InvalidCharConstant | InvalidSymbol => {
                ErrorClass::Lexical
            }
            MissingToken(_) | InvalidConstant | InvalidType | InvalidBasicType
            | InvalidParameter | InvalidStatement | InvalidArguments | InvalidComparator
            | InvalidExpression | InvalidTerm | InvalidFactor => ErrorClass::Syntax,
            UndeclaredIdent | UndeclaredConstant | UndeclaredIntConstant | UndeclaredType
            | UndeclaredVariable | UndeclaredFunction | UndeclaredProcedure | DuplicateIdent
            | InvalidIdent | InvalidVariable | InvalidFunction | InvalidProcedure => {
                ErrorClass::Resolution
            }
            TypeInconsistency => ErrorClass::Typing,
        }
    }
}

/// A fatal compile diagnostic: what went wrong and where.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{pos}:{kind}")]
pub struct CompileError {
    pub kind: ErrorKind,
    pub pos: Pos,
}

impl CompileError {
    pub fn new(kind: ErrorKind, pos: Pos) -> Self {
        CompileError { kind, pos }
    }

    /// The single diagnostic line the driver prints.
    pub fn report(&self) -> String {
        self.to_string()
    }
}

/// Constructors for the diagnostics the parser raises most often.
pub mod errors {
    use super::{CompileError, ErrorKind, Pos};

    pub fn missing_token(what: &'static str, pos: Pos) -> CompileError {
        CompileError::new(ErrorKind::MissingToken(what), pos)
    }

    pub fn undeclared_ident(pos: Pos) -> CompileError {
        CompileError::new(ErrorKind::UndeclaredIdent, pos)
    }

    pub fn duplicate_ident(pos: Pos) -> CompileError {
        CompileError::new(ErrorKind::DuplicateIdent, pos)
    }

    pub fn type_inconsistency(pos: Pos) -> CompileError {
        CompileError::new(ErrorKind::TypeInconsistency, pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_format() {
        let err = CompileError::new(ErrorKind::TypeInconsistency, Pos::new(4, 12));
        assert_eq!(err.report(), "4-12:Type inconsistency!");
    }

    #[test]
    fn test_missing_token_message() {
        let err = errors::missing_token("SEMICOLON", Pos::new(2, 7));
        assert_eq!(err.report(), "2-7:Missing SEMICOLON");
    }

    #[test]
    fn test_classification() {
        assert_eq!(ErrorKind::UnterminatedComment.class(), ErrorClass::Lexical);
        assert_eq!(ErrorKind::MissingToken("END").class(), ErrorClass::Syntax);
        assert_eq!(ErrorKind::UndeclaredVariable.class(), ErrorClass::Resolution);
        assert_eq!(ErrorKind::TypeInconsistency.class(), ErrorClass::Typing);
    }
}
