use crate::{
    errors::errors::{Log, LogImpl},
    expr::expr::ExprId,
    plan::{action::Action, decls::GlobalDecl, plan::NodeRef, vars::Var},
};

use super::checker::Checker;

impl<'a> Checker<'a> {
    /// Matches a call site against the declaration found under its name.
    ///
    /// Checks the call kind, then the arguments, then the returns, and stops
    /// at the first disagreement.
    pub fn compare_calls(&self, action: &Action, decl: &GlobalDecl, node: NodeRef<'a>) -> Option<Log> {
        let kind_matches = action
            .action_type
            .declared_as()
            .is_none_or(|call_type| call_type == decl.call_type);

        let returns = action.returns();
        let matches = kind_matches
            && self.types_match(&action.args, &decl.params, true)
            && self.types_match(&returns, &decl.returns, false);

        if matches {
            return None;
        }

        log::trace!("{} does not match {}", action.display(self.exprs()), decl);
        Some(Log::new(LogImpl::DeclarationMismatch {
            call: action.display(self.exprs()).to_string(),
            node: node.name().to_string(),
            declaration: decl.to_string(),
        }))
    }

    /// Pairwise strict type equality between call expressions and declared slots.
    ///
    /// With `exact_count` unset the call may supply fewer expressions than declared.
    fn types_match(&self, exprs: &[ExprId], declared: &[Var], exact_count: bool) -> bool {
        let count_ok = if exact_count {
            exprs.len() == declared.len()
        } else {
            exprs.len() <= declared.len()
        };

        count_ok
            && exprs.iter().zip(declared).all(|(expr, var)| {
                self.exprs().result_type(*expr, self.plan) == Some(var.var_type.coerce())
            })
    }
}
