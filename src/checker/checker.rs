use crate::{
    errors::errors::{Log, LogImpl},
    expr::{
        elements::ExprElement,
        expr::ExprArena,
        types::{type_intersection, ExprType},
    },
    plan::{
        action::ActionType,
        decls::GlobalDeclList,
        plan::{NodeRef, Plan},
    },
};

/// Runs every pass over `plan` and concatenates their findings.
pub fn check_plan(plan: &Plan) -> Vec<Log> {
    Checker::new(plan).check_plan()
}

/// Read-only view of a plan being checked.
///
/// Every pass is a pure function of the plan; passes never see each other's
/// findings.
#[derive(Debug, Clone, Copy)]
pub struct Checker<'a> {
    pub plan: &'a Plan,
}

impl<'a> Checker<'a> {
    pub fn new(plan: &'a Plan) -> Self {
        Checker { plan }
    }

    pub fn exprs(&self) -> &'a ExprArena {
        self.plan.exprs()
    }

    pub fn check_plan(&self) -> Vec<Log> {
        let mut logs = check_decl_redundancy(self.plan.decls());
        logs.extend(self.check_node_decl_consistency());
        logs.extend(self.check_var_accessibility());
        logs
    }

    /// Every Command and Lookup action must name a matching declaration.
    pub fn check_node_decl_consistency(&self) -> Vec<Log> {
        let mut logs = vec![];

        for node in self.plan.nodes() {
            let Some(action) = node.action() else {
                continue;
            };
            if !matches!(action.action_type, ActionType::Command | ActionType::Lookup) {
                continue;
            }
            log::trace!("checking {} action of node {}", action.action_type, node.name());

            let Some(name) = self.exprs().static_string(action.name) else {
                logs.push(Log::new(LogImpl::NonStaticName {
                    name: self.exprs().display(action.name).to_string(),
                    node: node.name().to_string(),
                }));
                continue;
            };

            match self.plan.find_decl(&name) {
                None => logs.push(Log::new(LogImpl::NoDeclarationMatch {
                    call: action.display(self.exprs()).to_string(),
                    node: node.name().to_string(),
                })),
                Some(decl) => logs.extend(self.compare_calls(action, decl, node)),
            }
        }

        log::debug!("node/declaration consistency: {} diagnostic(s)", logs.len());
        logs
    }

    /// Checks the references and types of every condition and assignment.
    pub fn check_var_accessibility(&self) -> Vec<Log> {
        let mut logs = vec![];

        for node in self.plan.nodes() {
            log::trace!("checking references of node {}", node.name());

            for condition in node.conditions() {
                let context = format!(
                    "in {} Condition of node {}",
                    condition.condition_type,
                    node.name()
                );
                logs.extend(self.check_vars_in_expr(condition.expr, node, &context));
                logs.extend(self.check_lookups_in_expr(condition.expr, node, &context));
                logs.extend(self.check_expr_type(condition.expr, ExprType::Bool).logs);
            }

            if let Some(action) = node.action() {
                if action.action_type == ActionType::Assignment {
                    logs.extend(self.check_assignment(node));
                }
            }
        }

        log::debug!("variable accessibility: {} diagnostic(s)", logs.len());
        logs
    }

    fn check_assignment(&self, node: NodeRef<'a>) -> Vec<Log> {
        let Some(action) = node.action() else {
            return vec![];
        };
        let (Some(lhs), Some(rhs)) = (action.ret, action.rhs()) else {
            return vec![];
        };

        let lhs_context = format!("in LHS Assignment of node {}", node.name());
        let rhs_context = format!("in RHS Assignment of node {}", node.name());

        let mut reference_logs = self.check_vars_in_expr(lhs, node, &lhs_context);
        reference_logs.extend(self.check_lookups_in_expr(lhs, node, &lhs_context));
        reference_logs.extend(self.check_vars_in_expr(rhs, node, &rhs_context));
        reference_logs.extend(self.check_lookups_in_expr(rhs, node, &rhs_context));

        // A reference problem already explains any type disagreement
        if !reference_logs.is_empty() {
            return reference_logs;
        }

        let lhs_type = self.check_expr_type(lhs, ExprType::A);
        let rhs_type = self.check_expr_type(rhs, ExprType::A);

        let assigned_type = rhs_type.expr_type;
        let agrees = type_intersection(lhs_type.expr_type, rhs_type.expr_type).is_some();

        let mut logs = lhs_type.logs;
        logs.extend(rhs_type.logs);

        if !agrees {
            let target = self
                .exprs()
                .find_sub_exprs(lhs, ExprElement::Var)
                .first()
                .and_then(|var| self.exprs()[*var].get_id())
                .and_then(|id| node.find_var_in_scope(id))
                .map(|var| var.to_string())
                .unwrap_or_else(|| self.exprs().display(lhs).to_string());

            logs.push(Log::new(LogImpl::AssignmentMismatch {
                variable: target,
                found: assigned_type
                    .map(|ty| ty.to_string())
                    .unwrap_or_else(|| String::from("unknown")),
                node: node.name().to_string(),
            }));
        }

        logs
    }
}

/// Every pair of declarations sharing an identifier is a conflict.
pub fn check_decl_redundancy(decls: &GlobalDeclList) -> Vec<Log> {
    let mut logs = vec![];
    let decls = decls.iter().collect::<Vec<_>>();

    for (index, first) in decls.iter().enumerate() {
        for second in decls.iter().skip(index + 1) {
            if first.id == second.id {
                logs.push(Log::new(LogImpl::NameConflict {
                    first: first.to_string(),
                    second: second.to_string(),
                }));
            }
        }
    }

    log::debug!("declaration redundancy: {} diagnostic(s)", logs.len());
    logs
}
