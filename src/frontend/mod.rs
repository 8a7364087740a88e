//! KPL Compiler Frontend
//!
//! This module contains all frontend components:
//! - `lexer`: tokenization of source code
//! - `parser`: recursive-descent parsing with parse-time semantic actions
//! - `types`: the structural type model and constant values
//! - `symtab`: symbol table and scope management
//! - `semantics`: declaration and type checks invoked by the parser
//! - `diagnostics`: error values and reporting
//! - `dump`: read-only pretty printer for the finished symbol table

pub mod diagnostics;
pub mod dump;
pub mod lexer;
pub mod parser;
pub mod semantics;
pub mod symtab;
pub mod types;
