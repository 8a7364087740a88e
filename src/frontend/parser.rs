//! Recursive-descent parser for KPL.
//!
//! Parsing, declaration handling, and type checking run in a single pass: the
//! parser holds a two-token window over the scanner and calls into
//! [`crate::frontend::semantics`] at each semantic action. The first violation
//! of any kind aborts the compilation with one [`CompileError`].
//!
//! ## Examples
//!
//! ```rust
//! use kpl::parser;
//!
//! let table = parser::parse("PROGRAM p; BEGIN END.").unwrap();
//! assert_eq!(table.entity(table.program().unwrap()).name, "p");
//! ```

use crate::frontend::diagnostics::{errors, CompileError, ErrorKind, Pos};
use crate::frontend::lexer::{Lexer, Token, TokenKind};
use crate::frontend::semantics;
use crate::frontend::symtab::{EntityId, EntityKind, PassKind, SymbolTable};
use crate::frontend::types::{ConstantValue, Type};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/tests.rs");
