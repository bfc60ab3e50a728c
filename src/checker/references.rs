use crate::{
    errors::errors::{Log, LogImpl},
    expr::{elements::ExprElement, expr::ExprId},
    plan::plan::NodeRef,
};

use super::checker::Checker;

impl<'a> Checker<'a> {
    /// Resolves every variable reference in `root` from the point of view of `node`.
    ///
    /// `context` says where the expression sits, e.g. "in Start Condition of node N".
    pub fn check_vars_in_expr(&self, root: ExprId, node: NodeRef<'a>, context: &str) -> Vec<Log> {
        let exprs = self.exprs();
        let mut logs = vec![];

        for id in exprs.find_sub_exprs(root, ExprElement::Var) {
            let Some(expr) = exprs.get(id) else {
                continue;
            };
            let Some(name) = expr.get_id() else {
                continue;
            };

            if let Some(ty) = expr.expr_type.filter(|ty| ty.is_node_reference()) {
                log::trace!("resolving {} reference to node {}", ty, name);
                if !node.can_see_node(name) {
                    logs.push(Log::new(LogImpl::InaccessibleNode {
                        name: name.to_string(),
                        node: node.name().to_string(),
                    }));
                }
                continue;
            }

            let Some(var) = node.find_var_in_scope(name) else {
                logs.push(Log::new(LogImpl::VariableNotFound {
                    variable: name.to_string(),
                    context: context.to_string(),
                }));
                continue;
            };

            if let Some(used) = expr.expr_type {
                if !used.matches_var_type(var.var_type) {
                    logs.push(Log::new(LogImpl::VariableMismatch {
                        variable: var.id.clone(),
                        declared: var.var_type.to_string(),
                        used: used.to_string(),
                        context: context.to_string(),
                    }));
                }
            }

            match (var.is_array(), exprs.is_used_as_array(id)) {
                (true, false) => logs.push(Log::new(LogImpl::ArrayNeedsIndex {
                    variable: var.id.clone(),
                    expr: exprs.display(root).to_string(),
                })),
                (false, true) => logs.push(Log::new(LogImpl::NotAnArray {
                    variable: var.id.clone(),
                    expr: exprs.display(root).to_string(),
                })),
                _ => {}
            }
        }

        logs
    }

    /// Matches every lookup in `root` against the declaration table.
    pub fn check_lookups_in_expr(&self, root: ExprId, node: NodeRef<'a>, context: &str) -> Vec<Log> {
        let exprs = self.exprs();
        let mut logs = vec![];

        for id in exprs.find_sub_exprs(root, ExprElement::Lookup) {
            let Some(expr) = exprs.get(id) else {
                continue;
            };
            // Node-reference values never come from a lookup
            if expr.expr_type.is_some_and(|ty| ty.is_node_reference()) {
                continue;
            }
            let Some(action) = expr.leaf().and_then(|leaf| leaf.action.as_ref()) else {
                continue;
            };

            let Some(name) = exprs.static_string(action.name) else {
                logs.push(Log::new(LogImpl::NonStaticName {
                    name: exprs.display(action.name).to_string(),
                    node: node.name().to_string(),
                }));
                continue;
            };

            match self.plan.find_decl(&name) {
                None => logs.push(Log::new(LogImpl::NoLookupDeclaration {
                    call: action.display(exprs).to_string(),
                    context: context.to_string(),
                })),
                Some(decl) => logs.extend(self.compare_calls(action, decl, node)),
            }
        }

        logs
    }
}
