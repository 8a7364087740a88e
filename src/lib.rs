#![forbid(unsafe_code)]
//! KPL Compiler Front-End
//!
//! KPL is a small Pascal-like teaching language: nested constant/type/variable
//! declarations, functions and procedures (value and reference parameters),
//! arrays, and structured statements. This crate provides the front-end: a
//! single-lookahead recursive-descent parser that builds a scoped symbol table
//! and type-checks the program as it parses, stopping at the first error.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`.
//!   Every lexical, syntactic, and semantic violation is a [`diagnostics::CompileError`]
//!   value propagated up to the driver; the core never exits the process.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a compiler bug (logic error), use
//!   `.expect("INVARIANT: reason")` with a clear explanation.

pub mod cli;
pub mod frontend;

pub use frontend::diagnostics;
pub use frontend::dump;
pub use frontend::lexer;
pub use frontend::parser;
pub use frontend::semantics;
pub use frontend::symtab;
pub use frontend::types;
