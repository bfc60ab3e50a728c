use std::fmt::Display;

use crate::expr::types::VarType;

/// Interface direction of a variable passed into a library node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VarMod {
    In,
    InOut,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarKind {
    Scalar,
    Array { capacity: usize },
}

/// A declared variable, or an anonymous parameter/return slot of a declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Var {
    pub id: String,
    pub var_type: VarType,
    pub modifier: VarMod,
    pub kind: VarKind,
}

impl Var {
    pub fn new(id: &str, var_type: VarType) -> Self {
        Var {
            id: id.to_string(),
            var_type,
            modifier: VarMod::None,
            kind: VarKind::Scalar,
        }
    }

    pub fn array(id: &str, var_type: VarType, capacity: usize) -> Self {
        Var {
            kind: VarKind::Array { capacity },
            ..Var::new(id, var_type)
        }
    }

    /// A typed slot with no name, as found in declaration signatures.
    pub fn anonymous(var_type: VarType) -> Self {
        Var::new("", var_type)
    }

    pub fn with_modifier(mut self, modifier: VarMod) -> Self {
        self.modifier = modifier;
        self
    }

    pub fn is_array(&self) -> bool {
        matches!(self.kind, VarKind::Array { .. })
    }

    pub fn capacity(&self) -> Option<usize> {
        match self.kind {
            VarKind::Scalar => None,
            VarKind::Array { capacity } => Some(capacity),
        }
    }
}

impl Display for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.modifier {
            VarMod::In => write!(f, "In ")?,
            VarMod::InOut => write!(f, "InOut ")?,
            VarMod::None => {}
        }
        write!(f, "{}", self.var_type)?;
        if !self.id.is_empty() {
            write!(f, " {}", self.id)?;
        }
        if let VarKind::Array { capacity } = self.kind {
            write!(f, "[{}]", capacity)?;
        }
        Ok(())
    }
}
