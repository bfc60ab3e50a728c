use std::{fmt::Display, slice::Iter, str::FromStr};

use crate::errors::errors::{Error, ErrorImpl};

use super::vars::Var;

/// Kind of a globally declared call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallType {
    Command,
    Function,
    Lookup,
    LibraryCall,
}

impl FromStr for CallType {
    type Err = Error;

    /// Accepts both the kind names and the declaration tag names of plan documents.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Command" | "CommandDeclaration" => Ok(CallType::Command),
            "Function" | "FunctionDeclaration" => Ok(CallType::Function),
            "Lookup" | "StateDeclaration" => Ok(CallType::Lookup),
            "LibraryCall" | "LibraryNodeDeclaration" => Ok(CallType::LibraryCall),
            _ => Err(Error::new(ErrorImpl::UnknownCallType { call: s.to_string() })),
        }
    }
}

impl Display for CallType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A declared call signature.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalDecl {
    pub call_type: CallType,
    pub id: String,
    pub params: Vec<Var>,
    pub returns: Vec<Var>,
}

impl GlobalDecl {
    pub fn new(call_type: CallType, id: &str, params: Vec<Var>, returns: Vec<Var>) -> Self {
        GlobalDecl {
            call_type,
            id: id.to_string(),
            params,
            returns,
        }
    }
}

impl Display for GlobalDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let params = self
            .params
            .iter()
            .map(|param| param.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "{} {}({})", self.call_type, self.id, params)?;

        if !self.returns.is_empty() {
            let returns = self
                .returns
                .iter()
                .map(|ret| ret.to_string())
                .collect::<Vec<String>>()
                .join(", ");
            write!(f, " -> {}", returns)?;
        }
        Ok(())
    }
}

/// The plan's declaration table, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalDeclList {
    decls: Vec<GlobalDecl>,
}

impl GlobalDeclList {
    pub fn new() -> Self {
        GlobalDeclList { decls: vec![] }
    }

    pub fn add(&mut self, decl: GlobalDecl) {
        self.decls.push(decl);
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GlobalDecl> {
        self.decls.get(index)
    }

    pub fn iter(&self) -> Iter<'_, GlobalDecl> {
        self.decls.iter()
    }

    /// First declaration with the given identifier.
    pub fn find_call_by_id(&self, id: &str) -> Option<&GlobalDecl> {
        self.decls.iter().find(|decl| decl.id == id)
    }

    pub fn find_by_type(&self, call_type: CallType) -> impl Iterator<Item = &GlobalDecl> {
        self.decls.iter().filter(move |decl| decl.call_type == call_type)
    }
}

impl From<Vec<GlobalDecl>> for GlobalDeclList {
    fn from(decls: Vec<GlobalDecl>) -> Self {
        GlobalDeclList { decls }
    }
}

impl<'a> IntoIterator for &'a GlobalDeclList {
    type Item = &'a GlobalDecl;
    type IntoIter = Iter<'a, GlobalDecl>;

    fn into_iter(self) -> Self::IntoIter {
        self.decls.iter()
    }
}
