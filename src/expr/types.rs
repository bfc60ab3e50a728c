//! Value types of the plan language.
//!
//! `ExprType` is the checker's type lattice: three data types, five
//! node-reference types and the wildcard `A`, which unifies with everything.
//! `VarType` is what a variable declaration states; Integer and Real both
//! coerce to `Num`.

use std::{fmt::Display, str::FromStr};

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::errors::errors::{Error, ErrorImpl};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprType {
    Num,
    Bool,
    Str,
    NodeState,
    NodeOutcome,
    NodeFailureType,
    NodeTimepointValue,
    NodeCommandHandle,
    /// Generic, matches any other type.
    A,
}

impl ExprType {
    /// Types whose values name another node rather than hold data.
    pub fn is_node_reference(&self) -> bool {
        matches!(
            self,
            ExprType::NodeState
                | ExprType::NodeOutcome
                | ExprType::NodeFailureType
                | ExprType::NodeTimepointValue
                | ExprType::NodeCommandHandle
        )
    }

    /// Whether an expression of this type can stand for a variable of `var_type`.
    pub fn matches_var_type(&self, var_type: VarType) -> bool {
        *self == ExprType::A || *self == var_type.coerce()
    }
}

impl Display for ExprType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Intersection of two possibly unknown types.
///
/// `None` is the empty intersection and is what the type checker propagates
/// as failure.
pub fn type_intersection(left: Option<ExprType>, right: Option<ExprType>) -> Option<ExprType> {
    if left == Some(ExprType::A) {
        return right;
    }
    if right == Some(ExprType::A) {
        return left;
    }

    match (left, right) {
        (Some(left), Some(right)) if left == right => Some(left),
        _ => None,
    }
}

/// Renders an optional type the way diagnostics expect it.
pub fn describe_type(ty: Option<ExprType>) -> String {
    match ty {
        Some(ty) => format!("type {}", ty),
        None => String::from("unknown type"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarType {
    Boolean,
    Integer,
    Real,
    String,
}

impl VarType {
    pub fn coerce(&self) -> ExprType {
        match self {
            VarType::Boolean => ExprType::Bool,
            VarType::Integer | VarType::Real => ExprType::Num,
            VarType::String => ExprType::Str,
        }
    }
}

lazy_static! {
    static ref VAR_TYPE_LOOKUP: HashMap<&'static str, VarType> = {
        let mut map = HashMap::new();
        map.insert("B", VarType::Boolean);
        map.insert("Boolean", VarType::Boolean);
        map.insert("I", VarType::Integer);
        map.insert("Integer", VarType::Integer);
        map.insert("R", VarType::Real);
        map.insert("Real", VarType::Real);
        map.insert("S", VarType::String);
        map.insert("String", VarType::String);
        map
    };
}

impl FromStr for VarType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VAR_TYPE_LOOKUP
            .get(s.trim())
            .copied()
            .ok_or_else(|| Error::new(ErrorImpl::UnknownVarType { type_: s.to_string() }))
    }
}

impl Display for VarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
