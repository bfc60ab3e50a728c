use std::{collections::HashSet, fmt::Display, ops::Index};

use crate::{
    errors::errors::{Error, ErrorImpl},
    plan::{action::Action, vars::Var},
};

use super::{
    elements::{Arity, ExprElement},
    types::ExprType,
};

/// Handle of an expression inside an `ExprArena`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExprId(pub usize);

impl Display for ExprId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Plan-wide variable table used to type variable references.
pub trait VarLookup {
    fn find_var(&self, id: &str) -> Option<&Var>;
}

impl VarLookup for [Var] {
    fn find_var(&self, id: &str) -> Option<&Var> {
        self.iter().find(|var| var.id == id)
    }
}

impl VarLookup for Vec<Var> {
    fn find_var(&self, id: &str) -> Option<&Var> {
        self.as_slice().find_var(id)
    }
}

/// Payload of a leaf: a variable/lookup name or a constant's literal text.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafExpr {
    pub id: String,
    /// The call being looked up, for Lookup leaves.
    pub action: Option<Action>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Leaf(LeafExpr),
    Unary(ExprId),
    Binary(ExprId, ExprId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprNode {
    pub element: ExprElement,
    pub kind: ExprKind,
    /// Type stated by whoever built the expression.
    pub expr_type: Option<ExprType>,
    /// Operand type stated by whoever built the expression, e.g. `EQNumeric`.
    pub child_type: Option<ExprType>,
    pub parent: Option<ExprId>,
}

impl ExprNode {
    pub fn leaf(&self) -> Option<&LeafExpr> {
        match &self.kind {
            ExprKind::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }

    pub fn get_id(&self) -> Option<&str> {
        self.leaf().map(|leaf| leaf.id.as_str())
    }

    pub fn left_child(&self) -> Option<ExprId> {
        match self.kind {
            ExprKind::Leaf(_) => None,
            ExprKind::Unary(child) => Some(child),
            ExprKind::Binary(left, _) => Some(left),
        }
    }

    pub fn right_child(&self) -> Option<ExprId> {
        match self.kind {
            ExprKind::Binary(_, right) => Some(right),
            _ => None,
        }
    }

    pub fn children(&self) -> Vec<ExprId> {
        self.left_child().into_iter().chain(self.right_child()).collect()
    }
}

/// Owner of every expression in a plan.
///
/// Operands point up to their parent by handle; a handle can be attached to
/// at most one parent.
#[derive(Debug, Clone, Default)]
pub struct ExprArena {
    exprs: Vec<ExprNode>,
}

impl ExprArena {
    pub fn new() -> Self {
        ExprArena { exprs: vec![] }
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    pub fn get(&self, id: ExprId) -> Option<&ExprNode> {
        self.exprs.get(id.0)
    }

    fn get_mut(&mut self, id: ExprId) -> Result<&mut ExprNode, Error> {
        self.exprs
            .get_mut(id.0)
            .ok_or_else(|| Error::new(ErrorImpl::ExprNotFound { id: id.0 }))
    }

    fn push(&mut self, node: ExprNode) -> ExprId {
        self.exprs.push(node);
        ExprId(self.exprs.len() - 1)
    }

    fn adopt(&mut self, parent: ExprId, child: ExprId) -> Result<(), Error> {
        let child_node = self.get_mut(child)?;
        if let Some(owner) = child_node.parent {
            return Err(Error::new(ErrorImpl::ExprAlreadyOwned {
                id: child.0,
                parent: owner.0,
            }));
        }
        child_node.parent = Some(parent);
        Ok(())
    }

    fn ensure_free(&self, id: ExprId) -> Result<(), Error> {
        match self.get(id) {
            None => Err(Error::new(ErrorImpl::ExprNotFound { id: id.0 })),
            Some(ExprNode { parent: Some(owner), .. }) => Err(Error::new(ErrorImpl::ExprAlreadyOwned {
                id: id.0,
                parent: owner.0,
            })),
            Some(_) => Ok(()),
        }
    }

    fn new_leaf(&mut self, element: ExprElement, leaf: LeafExpr, expr_type: Option<ExprType>) -> ExprId {
        self.push(ExprNode {
            element,
            kind: ExprKind::Leaf(leaf),
            expr_type,
            child_type: None,
            parent: None,
        })
    }

    /// A literal. String literals keep their text unquoted.
    pub fn constant(&mut self, literal: &str, expr_type: ExprType) -> ExprId {
        self.new_leaf(
            ExprElement::Const,
            LeafExpr { id: literal.to_string(), action: None },
            Some(expr_type),
        )
    }

    /// A reference to a variable, or to a node when `expr_type` is a node-reference type.
    pub fn variable(&mut self, id: &str, expr_type: Option<ExprType>) -> ExprId {
        self.new_leaf(
            ExprElement::Var,
            LeafExpr { id: id.to_string(), action: None },
            expr_type,
        )
    }

    /// A lookup leaf owning the call it describes.
    ///
    /// The call's name and argument expressions become owned by the leaf.
    pub fn lookup(&mut self, action: Action, expr_type: Option<ExprType>) -> Result<ExprId, Error> {
        let owned = action.expressions();
        let mut seen = HashSet::new();
        for id in owned.iter() {
            if !seen.insert(*id) {
                return Err(Error::new(ErrorImpl::ExprAlreadyOwned {
                    id: id.0,
                    parent: self.len(),
                }));
            }
            self.ensure_free(*id)?;
        }

        let name = self.static_string(action.name).unwrap_or_default();
        let lookup = self.new_leaf(
            ExprElement::Lookup,
            LeafExpr { id: name, action: Some(action) },
            expr_type,
        );
        for id in owned {
            self.adopt(lookup, id)?;
        }

        Ok(lookup)
    }

    pub fn unary(&mut self, element: ExprElement, operand: ExprId) -> Result<ExprId, Error> {
        if element.arity() != Arity::Unary {
            return Err(Error::new(ErrorImpl::ArityMismatch {
                element: element.to_string(),
                expected: element.arity().operand_count(),
                received: 1,
            }));
        }
        self.ensure_free(operand)?;

        let id = self.push(ExprNode {
            element,
            kind: ExprKind::Unary(operand),
            expr_type: None,
            child_type: None,
            parent: None,
        });
        self.adopt(id, operand)?;
        Ok(id)
    }

    pub fn binary(&mut self, element: ExprElement, left: ExprId, right: ExprId) -> Result<ExprId, Error> {
        if element.arity() != Arity::Binary {
            return Err(Error::new(ErrorImpl::ArityMismatch {
                element: element.to_string(),
                expected: element.arity().operand_count(),
                received: 2,
            }));
        }
        if left == right {
            return Err(Error::new(ErrorImpl::ExprAlreadyOwned {
                id: right.0,
                parent: self.len(),
            }));
        }
        self.ensure_free(left)?;
        self.ensure_free(right)?;

        let id = self.push(ExprNode {
            element,
            kind: ExprKind::Binary(left, right),
            expr_type: None,
            child_type: None,
            parent: None,
        });
        self.adopt(id, left)?;
        self.adopt(id, right)?;
        Ok(id)
    }

    pub fn set_type(&mut self, id: ExprId, expr_type: ExprType) -> Result<(), Error> {
        self.get_mut(id)?.expr_type = Some(expr_type);
        Ok(())
    }

    pub fn set_child_type(&mut self, id: ExprId, child_type: ExprType) -> Result<(), Error> {
        self.get_mut(id)?.child_type = Some(child_type);
        Ok(())
    }

    /// Type an expression evaluates to.
    ///
    /// Unknown variables type as the wildcard; reporting them is left to the
    /// reference checks.
    pub fn result_type<V: VarLookup + ?Sized>(&self, id: ExprId, vars: &V) -> Option<ExprType> {
        let expr = self.get(id)?;
        match (&expr.kind, expr.element) {
            (ExprKind::Leaf(leaf), ExprElement::Var) => match expr.expr_type {
                Some(ty) if ty.is_node_reference() => Some(ty),
                _ => Some(
                    vars.find_var(&leaf.id)
                        .map(|var| var.var_type.coerce())
                        .unwrap_or(ExprType::A),
                ),
            },
            (ExprKind::Leaf(_), ExprElement::Lookup) => Some(expr.expr_type.unwrap_or(ExprType::A)),
            (ExprKind::Leaf(_), _) => expr.expr_type,
            (_, element) => element.result_type(),
        }
    }

    /// Type the operands of an expression must have.
    pub fn child_type(&self, id: ExprId) -> ExprType {
        self.get(id)
            .and_then(|expr| expr.element.child_type().or(expr.child_type))
            .unwrap_or(ExprType::A)
    }

    /// Reduces a Const/Concat string expression to its text.
    ///
    /// `None` when any part is only known while executing.
    pub fn static_string(&self, id: ExprId) -> Option<String> {
        let expr = self.get(id)?;
        match (&expr.kind, expr.element) {
            (ExprKind::Leaf(leaf), ExprElement::Const) => match expr.expr_type {
                Some(ExprType::Str) | Some(ExprType::A) => Some(leaf.id.clone()),
                _ => None,
            },
            (ExprKind::Binary(left, right), ExprElement::Concat) => {
                if !matches!(expr.expr_type, None | Some(ExprType::Str) | Some(ExprType::A)) {
                    return None;
                }
                let left = self.static_string(*left)?;
                let right = self.static_string(*right)?;
                Some(left + &right)
            }
            _ => None,
        }
    }

    /// Every sub-expression of `id` (itself included) with the given element, in pre-order.
    pub fn find_sub_exprs(&self, id: ExprId, element: ExprElement) -> Vec<ExprId> {
        let mut found = vec![];
        let mut stack = vec![id];

        while let Some(current) = stack.pop() {
            let Some(expr) = self.get(current) else {
                continue;
            };
            if expr.element == element {
                found.push(current);
            }
            if let Some(right) = expr.right_child() {
                stack.push(right);
            }
            if let Some(left) = expr.left_child() {
                stack.push(left);
            }
        }

        found
    }

    /// Whether `id` is the array operand of an ArrayElem.
    pub fn is_used_as_array(&self, id: ExprId) -> bool {
        self.get(id)
            .and_then(|expr| expr.parent)
            .and_then(|parent| self.get(parent))
            .is_some_and(|parent| {
                parent.element == ExprElement::ArrayElem && parent.left_child() == Some(id)
            })
    }

    pub fn display(&self, id: ExprId) -> ExprDisplay<'_> {
        ExprDisplay { arena: self, id }
    }
}

impl Index<ExprId> for ExprArena {
    type Output = ExprNode;

    fn index(&self, index: ExprId) -> &Self::Output {
        &self.exprs[index.0]
    }
}

/// Source-like rendering of an expression, for messages.
pub struct ExprDisplay<'a> {
    arena: &'a ExprArena,
    id: ExprId,
}

impl Display for ExprDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some(expr) = self.arena.get(self.id) else {
            return write!(f, "<missing {}>", self.id);
        };

        match &expr.kind {
            ExprKind::Leaf(leaf) => match expr.element {
                ExprElement::Const if expr.expr_type == Some(ExprType::Str) => {
                    write!(f, "\"{}\"", leaf.id)
                }
                ExprElement::Lookup => match &leaf.action {
                    Some(action) => write!(f, "{}", action.display(self.arena)),
                    None => write!(f, "Lookup {}", leaf.id),
                },
                _ => write!(f, "{}", leaf.id),
            },
            ExprKind::Unary(child) => {
                write!(f, "{}({})", expr.element.symbol(), self.arena.display(*child))
            }
            ExprKind::Binary(left, right) => match expr.element {
                ExprElement::ArrayElem => write!(
                    f,
                    "{}[{}]",
                    self.arena.display(*left),
                    self.arena.display(*right)
                ),
                element => write!(
                    f,
                    "({} {} {})",
                    self.arena.display(*left),
                    element.symbol(),
                    self.arena.display(*right)
                ),
            },
        }
    }
}
