//! Read-only pretty printer for a finished symbol table.
//!
//! Renders the scope tree with one entity per line, indented four columns
//! per nesting level, e.g.
//!
//! ```text
//! Program p
//!     Const c = 10
//!     Var v : Arr(10,Int)
//!     Function f : Int
//!         Param n : Int
//! ```

use crate::frontend::symtab::{EntityId, EntityKind, PassKind, ScopeId, SymbolTable};
use std::fmt::Write;

const INDENT: usize = 4;

/// Render the whole table, starting at the program entity. An empty string
/// if no program was ever created.
pub fn dump(table: &SymbolTable) -> String {
    let mut out = String::new();
    if let Some(program) = table.program() {
        write_entity(table, program, 0, &mut out);
        out.push('\n');
    }
    out
}

fn write_entity(table: &SymbolTable, id: EntityId, indent: usize, out: &mut String) {
    let entity = table.entity(id);
    let _ = write!(out, "{:indent$}", "");
    match &entity.kind {
        EntityKind::Program { scope } => {
            let _ = write!(out, "Program {}", entity.name);
            write_scope(table, *scope, indent + INDENT, out);
        }
        EntityKind::Constant { value } => {
            let _ = write!(out, "Const {} = {}", entity.name, value);
        }
        EntityKind::TypeDef { actual } => {
            let _ = write!(out, "Type {} = {}", entity.name, actual);
        }
        EntityKind::Variable { ty } => {
            let _ = write!(out, "Var {} : {}", entity.name, ty);
        }
        EntityKind::Parameter { ty, pass } => {
            match pass {
                PassKind::ByValue => {
                    let _ = write!(out, "Param {} : {}", entity.name, ty);
                }
                PassKind::ByReference => {
                    let _ = write!(out, "Param VAR {} : {}", entity.name, ty);
                }
            };
        }
        EntityKind::Function {
            return_type, scope, ..
        } => {
            let _ = write!(out, "Function {} : {}", entity.name, return_type);
            write_scope(table, *scope, indent + INDENT, out);
        }
        EntityKind::Procedure { scope, .. } => {
            let _ = write!(out, "Procedure {}", entity.name);
            write_scope(table, *scope, indent + INDENT, out);
        }
    }
}

fn write_scope(table: &SymbolTable, scope: ScopeId, indent: usize, out: &mut String) {
    for &id in &table.scope(scope).entities {
        out.push('\n');
        write_entity(table, id, indent, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::parser;

    #[test]
    fn test_dump_layout() {
        let table = parser::parse(
            "PROGRAM p;\n\
             CONST c = 10;\n\
             TYPE vec = ARRAY [10] OF INTEGER;\n\
             VAR v : vec; ch : CHAR;\n\
             FUNCTION f(n : INTEGER; VAR m : CHAR) : INTEGER;\n\
             VAR local : INTEGER;\n\
             BEGIN f := n END;\n\
             BEGIN END.",
        )
        .unwrap();
        let rendered = dump(&table);
        assert_eq!(
            rendered,
            "Program p\n\
             \x20   Const c = 10\n\
             \x20   Type vec = Arr(10,Int)\n\
             \x20   Var v : Arr(10,Int)\n\
             \x20   Var ch : Char\n\
             \x20   Function f : Int\n\
             \x20       Param n : Int\n\
             \x20       Param VAR m : Char\n\
             \x20       Var local : Int\n"
        );
    }

    #[test]
    fn test_dump_without_program_is_empty() {
        assert_eq!(dump(&SymbolTable::new()), "");
    }
}
