//! The scoped symbol table.
//!
//! Entities and scopes live in arena vectors owned by the table and are
//! referenced by plain index handles, so the scope tree needs no interior
//! pointers and the table can be moved out of the parser when compilation
//! succeeds.
//!
//! Scopes form a tree rooted at the program scope. Each scope is owned by
//! the Program, Function, or Procedure entity that introduced it and holds
//! its declarations in source order. Parameters are registered twice: once
//! in the routine's parameter list (for argument pairing) and once in the
//! routine's scope (for name lookup). Lookup walks from the current scope
//! outward and falls back to the global built-in list.

use crate::frontend::types::{ConstantValue, Type};

pub type EntityId = usize;
pub type ScopeId = usize;

/// How a parameter receives its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassKind {
    ByValue,
    ByReference,
}

/// What a declared name is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityKind {
    Program { scope: ScopeId },
    Constant { value: ConstantValue },
    TypeDef { actual: Type },
    Variable { ty: Type },
    Parameter { ty: Type, pass: PassKind },
    Function { return_type: Type, params: Vec<EntityId>, scope: ScopeId },
    Procedure { params: Vec<EntityId>, scope: ScopeId },
}

/// A declared name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub name: String,
    pub kind: EntityKind,
}

/// One block's declarations.
#[derive(Debug)]
pub struct Scope {
    pub owner: EntityId,
    pub outer: Option<ScopeId>,
    pub entities: Vec<EntityId>,
}

#[derive(Debug)]
pub struct SymbolTable {
    entities: Vec<Entity>,
    scopes: Vec<Scope>,
    current_scope: Option<ScopeId>,
    program: Option<EntityId>,
    globals: Vec<EntityId>,
}

impl SymbolTable {
    /// A table pre-populated with the built-in I/O routines.
    pub fn new() -> Self {
        let mut table = SymbolTable {
            entities: Vec::new(),
            scopes: Vec::new(),
            current_scope: None,
            program: None,
            globals: Vec::new(),
        };
        table.register_builtins();
        table
    }

    fn register_builtins(&mut self) {
        let readc = self.create_function("READC", Type::Char);
        let readi = self.create_function("READI", Type::Int);
        let writei = self.create_procedure("WRITEI");
        self.add_builtin_param(writei, "i", Type::Int);
        let writec = self.create_procedure("WRITEC");
        self.add_builtin_param(writec, "ch", Type::Char);
        let writeln = self.create_procedure("WRITELN");
        self.globals.extend([readc, readi, writei, writec, writeln]);
    }

    /// Built-in parameters go on the routine's parameter list only; they are
    /// never looked up by name, so they stay out of any scope.
    fn add_builtin_param(&mut self, routine: EntityId, name: &str, ty: Type) {
        let param = self.add(Entity {
            name: name.to_owned(),
            kind: EntityKind::Parameter { ty, pass: PassKind::ByValue },
        });
        self.params_mut(routine).push(param);
    }

    fn add(&mut self, entity: Entity) -> EntityId {
        self.entities.push(entity);
        self.entities.len() - 1
    }

    fn add_scope(&mut self, owner: EntityId) -> ScopeId {
        self.scopes.push(Scope {
            owner,
            outer: self.current_scope,
            entities: Vec::new(),
        });
        self.scopes.len() - 1
    }

    fn params_mut(&mut self, routine: EntityId) -> &mut Vec<EntityId> {
        match &mut self.entities[routine].kind {
            EntityKind::Function { params, .. } | EntityKind::Procedure { params, .. } => params,
            _ => panic!("INVARIANT: parameter attached to a non-routine entity"),
        }
    }

    /// Create the program entity and its root scope. Does not enter the
    /// scope; the parser does that explicitly.
    pub fn create_program(&mut self, name: &str) -> EntityId {
        let id = self.add(Entity {
            name: name.to_owned(),
            kind: EntityKind::Program { scope: 0 },
        });
        let scope = self.add_scope(id);
        self.entities[id].kind = EntityKind::Program { scope };
        self.program = Some(id);
        id
    }

    /// Create a function entity with its own (empty) scope, linked to the
    /// current scope as outer.
    pub fn create_function(&mut self, name: &str, return_type: Type) -> EntityId {
        let id = self.add(Entity {
            name: name.to_owned(),
            kind: EntityKind::Function { return_type, params: Vec::new(), scope: 0 },
        });
        let scope = self.add_scope(id);
        match &mut self.entities[id].kind {
            EntityKind::Function { scope: s, .. } => *s = scope,
            _ => unreachable!(),
        }
        id
    }

    pub fn create_procedure(&mut self, name: &str) -> EntityId {
        let id = self.add(Entity {
            name: name.to_owned(),
            kind: EntityKind::Procedure { params: Vec::new(), scope: 0 },
        });
        let scope = self.add_scope(id);
        match &mut self.entities[id].kind {
            EntityKind::Procedure { scope: s, .. } => *s = scope,
            _ => unreachable!(),
        }
        id
    }

    pub fn create_constant(&mut self, name: &str, value: ConstantValue) -> EntityId {
        self.add(Entity { name: name.to_owned(), kind: EntityKind::Constant { value } })
    }

    pub fn create_type(&mut self, name: &str, actual: Type) -> EntityId {
        self.add(Entity { name: name.to_owned(), kind: EntityKind::TypeDef { actual } })
    }

    pub fn create_variable(&mut self, name: &str, ty: Type) -> EntityId {
        self.add(Entity { name: name.to_owned(), kind: EntityKind::Variable { ty } })
    }

    pub fn create_parameter(&mut self, name: &str, ty: Type, pass: PassKind) -> EntityId {
        self.add(Entity { name: name.to_owned(), kind: EntityKind::Parameter { ty, pass } })
    }

    /// Register an entity in the current scope. A parameter is additionally
    /// appended to the owning routine's parameter list.
    pub fn declare(&mut self, id: EntityId) {
        let scope = self
            .current_scope
            .expect("INVARIANT: declare called outside any scope");
        self.scopes[scope].entities.push(id);
        if matches!(self.entities[id].kind, EntityKind::Parameter { .. }) {
            let owner = self.scopes[scope].owner;
            self.params_mut(owner).push(id);
        }
    }

    pub fn enter_scope(&mut self, scope: ScopeId) {
        self.current_scope = Some(scope);
    }

    pub fn exit_scope(&mut self) {
        let scope = self
            .current_scope
            .expect("INVARIANT: exit_scope called with no current scope");
        self.current_scope = self.scopes[scope].outer;
    }

    /// Find a name, innermost scope first, then the built-ins.
    pub fn lookup(&self, name: &str) -> Option<EntityId> {
        let mut scope = self.current_scope;
        while let Some(s) = scope {
            if let Some(id) = self.find_in(s, name) {
                return Some(id);
            }
            scope = self.scopes[s].outer;
        }
        self.globals
            .iter()
            .copied()
            .find(|&id| self.entities[id].name == name)
    }

    /// Find a name in the current scope only.
    pub fn lookup_local(&self, name: &str) -> Option<EntityId> {
        self.find_in(self.current_scope?, name)
    }

    fn find_in(&self, scope: ScopeId, name: &str) -> Option<EntityId> {
        self.scopes[scope]
            .entities
            .iter()
            .copied()
            .find(|&id| self.entities[id].name == name)
    }

    pub fn entity(&self, id: EntityId) -> &Entity {
        &self.entities[id]
    }

    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id]
    }

    /// The scope introduced by a program, function, or procedure entity.
    pub fn scope_of(&self, id: EntityId) -> Option<ScopeId> {
        match self.entities[id].kind {
            EntityKind::Program { scope }
            | EntityKind::Function { scope, .. }
            | EntityKind::Procedure { scope, .. } => Some(scope),
            _ => None,
        }
    }

    /// The parameter list of a function or procedure, in declaration order.
    pub fn params_of(&self, id: EntityId) -> &[EntityId] {
        match &self.entities[id].kind {
            EntityKind::Function { params, .. } | EntityKind::Procedure { params, .. } => params,
            _ => &[],
        }
    }

    /// The entity owning the scope declarations currently go into.
    pub fn current_owner(&self) -> Option<EntityId> {
        Some(self.scopes[self.current_scope?].owner)
    }

    pub fn program(&self) -> Option<EntityId> {
        self.program
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        SymbolTable::new()
    }
}
