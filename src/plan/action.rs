use std::fmt::Display;

use crate::{
    errors::errors::{Error, ErrorImpl},
    expr::{
        expr::{ExprArena, ExprId},
        types::ExprType,
    },
};

use super::decls::CallType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    Command,
    Function,
    Lookup,
    LibraryCall,
    Assignment,
    Update,
    Empty,
}

impl ActionType {
    /// Kind of declaration this action must be matched against, if any.
    pub fn declared_as(&self) -> Option<CallType> {
        match self {
            ActionType::Command => Some(CallType::Command),
            ActionType::Lookup => Some(CallType::Lookup),
            ActionType::LibraryCall => Some(CallType::LibraryCall),
            ActionType::Function
            | ActionType::Assignment
            | ActionType::Update
            | ActionType::Empty => None,
        }
    }

    /// Action kind for a node body tag name.
    pub fn from_tag(tag: &str) -> Result<ActionType, Error> {
        match tag {
            "Command" => Ok(ActionType::Command),
            "FunctionCall" | "Function" => Ok(ActionType::Function),
            "LibraryNodeCall" => Ok(ActionType::LibraryCall),
            "Assignment" => Ok(ActionType::Assignment),
            "Update" => Ok(ActionType::Update),
            "NodeList" | "Empty" => Ok(ActionType::Empty),
            tag if tag.starts_with("Lookup") => Ok(ActionType::Lookup),
            _ => Err(Error::new(ErrorImpl::UnknownCallType { call: tag.to_string() })),
        }
    }
}

impl Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// What a node (or a lookup leaf) does.
///
/// For assignments `ret` is the assigned-to expression and `args` holds the
/// single right-hand side.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub action_type: ActionType,
    pub name: ExprId,
    pub args: Vec<ExprId>,
    pub ret: Option<ExprId>,
}

impl Action {
    pub fn new(action_type: ActionType, name: ExprId, args: Vec<ExprId>, ret: Option<ExprId>) -> Self {
        Action {
            action_type,
            name,
            args,
            ret,
        }
    }

    /// A call whose name is the string constant `name`.
    pub fn call(
        exprs: &mut ExprArena,
        action_type: ActionType,
        name: &str,
        args: Vec<ExprId>,
        ret: Option<ExprId>,
    ) -> Self {
        let name = exprs.constant(name, ExprType::Str);
        Action::new(action_type, name, args, ret)
    }

    pub fn assignment(exprs: &mut ExprArena, lhs: ExprId, rhs: ExprId) -> Self {
        let name = exprs.constant("", ExprType::Str);
        Action::new(ActionType::Assignment, name, vec![rhs], Some(lhs))
    }

    pub fn empty(exprs: &mut ExprArena) -> Self {
        let name = exprs.constant("", ExprType::Str);
        Action::new(ActionType::Empty, name, vec![], None)
    }

    /// Right-hand side of an assignment.
    pub fn rhs(&self) -> Option<ExprId> {
        self.args.first().copied()
    }

    /// Return expressions supplied by the call site.
    pub fn returns(&self) -> Vec<ExprId> {
        self.ret.into_iter().collect()
    }

    /// Every expression the action refers to directly.
    pub fn expressions(&self) -> Vec<ExprId> {
        let mut exprs = vec![self.name];
        exprs.extend(self.args.iter().copied());
        exprs.extend(self.ret);
        exprs
    }

    pub fn display<'a>(&'a self, exprs: &'a ExprArena) -> ActionDisplay<'a> {
        ActionDisplay { action: self, exprs }
    }
}

pub struct ActionDisplay<'a> {
    action: &'a Action,
    exprs: &'a ExprArena,
}

impl Display for ActionDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let action = self.action;
        if action.action_type == ActionType::Assignment {
            let lhs = action
                .ret
                .map(|ret| self.exprs.display(ret).to_string())
                .unwrap_or_default();
            let rhs = action
                .rhs()
                .map(|rhs| self.exprs.display(rhs).to_string())
                .unwrap_or_default();
            return write!(f, "Assignment {} = {}", lhs, rhs);
        }

        let name = self
            .exprs
            .static_string(action.name)
            .unwrap_or_else(|| self.exprs.display(action.name).to_string());
        let args = action
            .args
            .iter()
            .map(|arg| self.exprs.display(*arg).to_string())
            .collect::<Vec<String>>()
            .join(", ");

        write!(f, "{} {}({})", action.action_type, name, args)?;
        if let Some(ret) = action.ret {
            write!(f, " -> {}", self.exprs.display(ret))?;
        }
        Ok(())
    }
}
