//! Semantic checks the parser invokes as it recognizes the program.
//!
//! Each check is a stateless function over the symbol table and the type
//! model. A failed check is the fatal diagnostic for the compilation; the
//! caller supplies the source position to report it at.

use crate::frontend::diagnostics::{CompileError, ErrorKind, Pos};
use crate::frontend::symtab::{EntityId, EntityKind, SymbolTable};
use crate::frontend::types::{ConstantValue, Type};

/// A name about to be declared must not exist in the current scope.
/// Shadowing an outer declaration is fine.
pub fn check_fresh_ident(table: &SymbolTable, name: &str, pos: Pos) -> Result<(), CompileError> {
    if table.lookup_local(name).is_some() {
        return Err(CompileError::new(ErrorKind::DuplicateIdent, pos));
    }
    Ok(())
}

/// The name must resolve to some entity, of any kind.
pub fn check_declared_ident(
    table: &SymbolTable,
    name: &str,
    pos: Pos,
) -> Result<EntityId, CompileError> {
    table
        .lookup(name)
        .ok_or_else(|| CompileError::new(ErrorKind::UndeclaredIdent, pos))
}

/// The name must resolve to a constant. Returns a copy of its value.
pub fn check_declared_constant(
    table: &SymbolTable,
    name: &str,
    pos: Pos,
) -> Result<ConstantValue, CompileError> {
    let id = table
        .lookup(name)
        .ok_or_else(|| CompileError::new(ErrorKind::UndeclaredConstant, pos))?;
    match &table.entity(id).kind {
        EntityKind::Constant { value } => Ok(value.clone()),
        _ => Err(CompileError::new(ErrorKind::InvalidConstant, pos)),
    }
}

/// The name must resolve to a type declaration. Returns a copy of the
/// denoted type.
pub fn check_declared_type(
    table: &SymbolTable,
    name: &str,
    pos: Pos,
) -> Result<Type, CompileError> {
    let id = table
        .lookup(name)
        .ok_or_else(|| CompileError::new(ErrorKind::UndeclaredType, pos))?;
    match &table.entity(id).kind {
        EntityKind::TypeDef { actual } => Ok(actual.clone()),
        _ => Err(CompileError::new(ErrorKind::InvalidType, pos)),
    }
}

/// The name must resolve to a variable.
pub fn check_declared_variable(
    table: &SymbolTable,
    name: &str,
    pos: Pos,
) -> Result<EntityId, CompileError> {
    let id = table
        .lookup(name)
        .ok_or_else(|| CompileError::new(ErrorKind::UndeclaredVariable, pos))?;
    match table.entity(id).kind {
        EntityKind::Variable { .. } => Ok(id),
        _ => Err(CompileError::new(ErrorKind::InvalidVariable, pos)),
    }
}

/// The name must resolve to a function.
pub fn check_declared_function(
    table: &SymbolTable,
    name: &str,
    pos: Pos,
) -> Result<EntityId, CompileError> {
    let id = table
        .lookup(name)
        .ok_or_else(|| CompileError::new(ErrorKind::UndeclaredFunction, pos))?;
    match table.entity(id).kind {
        EntityKind::Function { .. } => Ok(id),
        _ => Err(CompileError::new(ErrorKind::InvalidFunction, pos)),
    }
}

/// The name must resolve to a procedure.
pub fn check_declared_procedure(
    table: &SymbolTable,
    name: &str,
    pos: Pos,
) -> Result<EntityId, CompileError> {
    let id = table
        .lookup(name)
        .ok_or_else(|| CompileError::new(ErrorKind::UndeclaredProcedure, pos))?;
    match table.entity(id).kind {
        EntityKind::Procedure { .. } => Ok(id),
        _ => Err(CompileError::new(ErrorKind::InvalidProcedure, pos)),
    }
}

/// The name must resolve to something assignable: a variable, a parameter,
/// or the function whose body is currently being parsed (assigning the
/// return value).
pub fn check_declared_lvalue_ident(
    table: &SymbolTable,
    name: &str,
    pos: Pos,
) -> Result<EntityId, CompileError> {
    let id = table
        .lookup(name)
        .ok_or_else(|| CompileError::new(ErrorKind::UndeclaredIdent, pos))?;
    match table.entity(id).kind {
        EntityKind::Variable { .. } | EntityKind::Parameter { .. } => Ok(id),
        EntityKind::Function { .. } if table.current_owner() == Some(id) => Ok(id),
        _ => Err(CompileError::new(ErrorKind::InvalidIdent, pos)),
    }
}

pub fn check_int_type(ty: &Type, pos: Pos) -> Result<(), CompileError> {
    if *ty != Type::Int {
        return Err(CompileError::new(ErrorKind::InvalidBasicType, pos));
    }
    Ok(())
}

pub fn check_char_type(ty: &Type, pos: Pos) -> Result<(), CompileError> {
    if *ty != Type::Char {
        return Err(CompileError::new(ErrorKind::InvalidBasicType, pos));
    }
    Ok(())
}

pub fn check_basic_type(ty: &Type, pos: Pos) -> Result<(), CompileError> {
    if !ty.is_basic() {
        return Err(CompileError::new(ErrorKind::InvalidBasicType, pos));
    }
    Ok(())
}

pub fn check_array_type(ty: &Type, pos: Pos) -> Result<(), CompileError> {
    match ty {
        Type::Array { .. } => Ok(()),
        _ => Err(CompileError::new(ErrorKind::InvalidType, pos)),
    }
}

/// Structural equality of two types.
pub fn check_type_equality(t1: &Type, t2: &Type, pos: Pos) -> Result<(), CompileError> {
    if t1 != t2 {
        return Err(CompileError::new(ErrorKind::TypeInconsistency, pos));
    }
    Ok(())
}
