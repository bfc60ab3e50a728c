use crate::{
    errors::errors::{Log, LogImpl},
    expr::{
        elements::ExprElement,
        expr::ExprId,
        types::{describe_type, type_intersection, ExprType},
    },
};

use super::checker::Checker;

/// Outcome of type checking a subtree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeCheck {
    /// Type the subtree was narrowed to, `None` when it failed.
    pub expr_type: Option<ExprType>,
    pub logs: Vec<Log>,
}

impl<'a> Checker<'a> {
    /// Checks `id` against `expected`, then its operands against the operator's child type.
    ///
    /// A failing expression is reported once and its operands are not visited.
    pub fn check_expr_type(&self, id: ExprId, expected: ExprType) -> TypeCheck {
        let exprs = self.exprs();
        let Some(expr) = exprs.get(id) else {
            return TypeCheck::default();
        };

        let found = exprs.result_type(id, self.plan);
        let mut check = TypeCheck {
            expr_type: type_intersection(Some(expected), found),
            logs: vec![],
        };
        log::trace!("{} has {}, expected {}", exprs.display(id), describe_type(found), expected);

        if check.expr_type.is_none() {
            check.logs.push(self.expression_type_log(id, found, Some(expected)));
            return check;
        }

        if expr.element == ExprElement::ArrayElem {
            return self.check_array_elem(id, check);
        }

        let child_type = exprs.child_type(id);
        let left = expr.left_child().map(|left| self.check_expr_type(left, child_type));
        let right = expr.right_child().map(|right| self.check_expr_type(right, child_type));

        if let (Some(left), Some(right), Some(right_id)) = (&left, &right, expr.right_child()) {
            // Operands that passed on their own must still agree with each other
            if left.expr_type.is_some()
                && right.expr_type.is_some()
                && type_intersection(left.expr_type, right.expr_type).is_none()
            {
                check
                    .logs
                    .push(self.expression_type_log(right_id, right.expr_type, left.expr_type));
            }
        }

        for operand in left.into_iter().chain(right) {
            check.logs.extend(operand.logs);
        }
        check
    }

    /// The array operand takes the element's place in the enclosing
    /// expression; the index must be numeric.
    fn check_array_elem(&self, id: ExprId, mut check: TypeCheck) -> TypeCheck {
        let exprs = self.exprs();
        let Some((array, index)) = exprs
            .get(id)
            .and_then(|expr| expr.left_child().zip(expr.right_child()))
        else {
            return check;
        };

        let array_check = self.check_expr_type(array, exprs.child_type(id));
        let index_check = self.check_expr_type(index, ExprType::Num);

        // Misused variables are reported by the reference checks
        let array_element = exprs.get(array).map(|expr| expr.element);
        if !matches!(array_element, Some(ExprElement::Var | ExprElement::Lookup)) {
            check.logs.push(Log::new(LogImpl::NotAnArray {
                variable: exprs.display(array).to_string(),
                expr: exprs.display(id).to_string(),
            }));
        }

        if array_check.expr_type.is_some() {
            let narrowed = type_intersection(check.expr_type, array_check.expr_type);
            if narrowed.is_none() {
                check
                    .logs
                    .push(self.expression_type_log(id, array_check.expr_type, check.expr_type));
            }
            check.expr_type = narrowed;
        }

        check.logs.extend(array_check.logs);
        check.logs.extend(index_check.logs);
        check
    }

    fn expression_type_log(&self, id: ExprId, found: Option<ExprType>, expected: Option<ExprType>) -> Log {
        Log::new(LogImpl::ExpressionType {
            expr: self.exprs().display(id).to_string(),
            found: describe_type(found),
            expected: describe_type(expected),
        })
    }
}
