use std::ops::Index;

use crate::{
    errors::errors::{Error, ErrorImpl},
    expr::expr::{ExprArena, ExprId, VarLookup},
};

use super::{
    action::Action,
    decls::{GlobalDecl, GlobalDeclList},
    node::{Condition, ConditionType, Node, NodeId},
    vars::Var,
};

/// A whole plan: declarations, the node tree and the expressions it uses.
///
/// Nodes are kept in creation order; a node's parent always precedes it.
#[derive(Debug, Clone, Default)]
pub struct Plan {
    decls: GlobalDeclList,
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
    exprs: ExprArena,
}

impl Plan {
    pub fn new() -> Self {
        Plan::default()
    }

    pub fn with_decls(decls: GlobalDeclList) -> Self {
        Plan {
            decls,
            ..Plan::default()
        }
    }

    pub fn decls(&self) -> &GlobalDeclList {
        &self.decls
    }

    pub fn add_decl(&mut self, decl: GlobalDecl) {
        self.decls.add(decl);
    }

    /// First declaration with the given identifier.
    pub fn find_decl(&self, id: &str) -> Option<&GlobalDecl> {
        self.decls.find_call_by_id(id)
    }

    pub fn exprs(&self) -> &ExprArena {
        &self.exprs
    }

    pub fn exprs_mut(&mut self) -> &mut ExprArena {
        &mut self.exprs
    }

    pub fn add_node(&mut self, id: &str, parent: Option<NodeId>) -> Result<NodeId, Error> {
        if let Some(parent) = parent {
            self.check_node(parent)?;
        }

        let node_id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(id, parent));

        match parent {
            Some(parent) => self.nodes[parent.0].children.push(node_id),
            None => self.roots.push(node_id),
        }

        Ok(node_id)
    }

    fn check_node(&self, id: NodeId) -> Result<(), Error> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(Error::new(ErrorImpl::NodeNotFound { id: id.0 }))
        }
    }

    fn check_expr(&self, id: ExprId) -> Result<(), Error> {
        match self.exprs.get(id) {
            Some(_) => Ok(()),
            None => Err(Error::new(ErrorImpl::ExprNotFound { id: id.0 })),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, Error> {
        self.nodes
            .get_mut(id.0)
            .ok_or_else(|| Error::new(ErrorImpl::NodeNotFound { id: id.0 }))
    }

    pub fn declare_var(&mut self, node: NodeId, var: Var) -> Result<(), Error> {
        self.node_mut(node)?.vars.push(var);
        Ok(())
    }

    pub fn add_condition(&mut self, node: NodeId, condition_type: ConditionType, expr: ExprId) -> Result<(), Error> {
        self.check_expr(expr)?;
        self.node_mut(node)?
            .conditions
            .push(Condition::new(condition_type, expr));
        Ok(())
    }

    pub fn set_action(&mut self, node: NodeId, action: Action) -> Result<(), Error> {
        for expr in action.expressions() {
            self.check_expr(expr)?;
        }
        self.node_mut(node)?.action = Some(action);
        Ok(())
    }

    pub fn get_node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.nodes.get(id.0).map(|_| NodeRef { plan: self, id })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every node, parents before children.
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'_>> {
        (0..self.nodes.len()).map(move |index| NodeRef {
            plan: self,
            id: NodeId(index),
        })
    }

    pub fn roots(&self) -> impl Iterator<Item = NodeRef<'_>> {
        self.roots.iter().map(move |id| NodeRef { plan: self, id: *id })
    }

    /// Every variable declared anywhere in the plan.
    pub fn vars(&self) -> impl Iterator<Item = &Var> {
        self.nodes.iter().flat_map(|node| node.vars.iter())
    }
}

impl VarLookup for Plan {
    fn find_var(&self, id: &str) -> Option<&Var> {
        self.vars().find(|var| var.id == id)
    }
}

impl Index<NodeId> for Plan {
    type Output = Node;

    fn index(&self, index: NodeId) -> &Self::Output {
        &self.nodes[index.0]
    }
}

/// A node together with the plan it lives in, for tree and scope queries.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    plan: &'a Plan,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn node(&self) -> &'a Node {
        &self.plan[self.id]
    }

    pub fn name(&self) -> &'a str {
        &self.node().id
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.node().is_named(name)
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.node().parent.map(|parent| NodeRef {
            plan: self.plan,
            id: parent,
        })
    }

    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let plan = self.plan;
        self.node().children.iter().map(move |id| NodeRef { plan, id: *id })
    }

    pub fn has_child_named(&self, name: &str) -> bool {
        self.children().any(|child| child.is_named(name))
    }

    /// This node followed by its ancestors, nearest first.
    pub fn ancestry(&self) -> impl Iterator<Item = NodeRef<'a>> {
        std::iter::successors(Some(*self), |node| node.parent())
    }

    /// Variable visible from this node: its own, then each enclosing node's.
    pub fn find_var_in_scope(&self, id: &str) -> Option<&'a Var> {
        self.ancestry().find_map(|node| node.node().find_local_var(id))
    }

    /// Whether a node-reference value naming `name` can be resolved here.
    ///
    /// Visible nodes are this node, its children, its parent and the parent's
    /// children.
    pub fn can_see_node(&self, name: &str) -> bool {
        if self.is_named(name) || self.has_child_named(name) {
            return true;
        }
        self.parent()
            .is_some_and(|parent| parent.is_named(name) || parent.has_child_named(name))
    }

    pub fn conditions(&self) -> &'a [Condition] {
        &self.node().conditions
    }

    pub fn action(&self) -> Option<&'a Action> {
        self.node().action.as_ref()
    }
}
