use std::fmt::Display;

use super::types::ExprType;

/// Number of operands an element takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Leaf,
    Unary,
    Binary,
}

impl Arity {
    pub fn operand_count(&self) -> usize {
        match self {
            Arity::Leaf => 0,
            Arity::Unary => 1,
            Arity::Binary => 2,
        }
    }
}

/// Operator tag of an expression node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprElement {
    // Leaves
    Const,
    Var,
    Lookup,

    // Access
    ArrayElem,
    Alias,

    // Arithmetic
    Plus,
    Minus,
    Mult,
    Div,
    Mod,
    Max,
    Min,
    Sqrt,
    Abs,
    Ceil,
    Floor,
    Round,
    Trunc,
    RealToInt,

    // Comparison
    Eq,
    NEq,
    LT,
    GT,
    LEq,
    GEq,

    // Boolean
    Not,
    Or,
    And,
    XOr,
    IsKnown,

    // String
    Concat,
    Strlen,
}

impl ExprElement {
    pub fn arity(&self) -> Arity {
        match self {
            ExprElement::Const | ExprElement::Var | ExprElement::Lookup => Arity::Leaf,
            ExprElement::Sqrt
            | ExprElement::Abs
            | ExprElement::Ceil
            | ExprElement::Floor
            | ExprElement::Round
            | ExprElement::Trunc
            | ExprElement::RealToInt
            | ExprElement::Strlen
            | ExprElement::Not
            | ExprElement::IsKnown => Arity::Unary,
            ExprElement::ArrayElem
            | ExprElement::Alias
            | ExprElement::Plus
            | ExprElement::Minus
            | ExprElement::Mult
            | ExprElement::Div
            | ExprElement::Mod
            | ExprElement::Max
            | ExprElement::Min
            | ExprElement::Eq
            | ExprElement::NEq
            | ExprElement::LT
            | ExprElement::GT
            | ExprElement::LEq
            | ExprElement::GEq
            | ExprElement::Or
            | ExprElement::And
            | ExprElement::XOr
            | ExprElement::Concat => Arity::Binary,
        }
    }

    /// Fixed result type of an operator.
    ///
    /// Leaves return `None`: their type comes from the leaf itself.
    pub fn result_type(&self) -> Option<ExprType> {
        match self {
            ExprElement::Const | ExprElement::Var | ExprElement::Lookup => None,
            ExprElement::Plus
            | ExprElement::Minus
            | ExprElement::Mult
            | ExprElement::Div
            | ExprElement::Mod
            | ExprElement::Max
            | ExprElement::Min
            | ExprElement::Sqrt
            | ExprElement::Abs
            | ExprElement::Ceil
            | ExprElement::Floor
            | ExprElement::Round
            | ExprElement::Trunc
            | ExprElement::RealToInt
            | ExprElement::Strlen => Some(ExprType::Num),
            ExprElement::Eq
            | ExprElement::NEq
            | ExprElement::LT
            | ExprElement::GT
            | ExprElement::LEq
            | ExprElement::GEq
            | ExprElement::Not
            | ExprElement::Or
            | ExprElement::And
            | ExprElement::XOr
            | ExprElement::IsKnown => Some(ExprType::Bool),
            ExprElement::Concat => Some(ExprType::Str),
            // Resolved from context
            ExprElement::ArrayElem | ExprElement::Alias => Some(ExprType::A),
        }
    }

    /// Fixed constraint on the operands of an operator, if it has one.
    ///
    /// Eq and NEq only require their operands to agree with each other.
    pub fn child_type(&self) -> Option<ExprType> {
        match self {
            ExprElement::Plus
            | ExprElement::Minus
            | ExprElement::Mult
            | ExprElement::Div
            | ExprElement::Mod
            | ExprElement::Max
            | ExprElement::Min
            | ExprElement::Sqrt
            | ExprElement::Abs
            | ExprElement::Ceil
            | ExprElement::Floor
            | ExprElement::Round
            | ExprElement::Trunc
            | ExprElement::RealToInt
            | ExprElement::LT
            | ExprElement::GT
            | ExprElement::LEq
            | ExprElement::GEq => Some(ExprType::Num),
            ExprElement::Or | ExprElement::And | ExprElement::XOr | ExprElement::Not => {
                Some(ExprType::Bool)
            }
            ExprElement::Concat | ExprElement::Strlen => Some(ExprType::Str),
            ExprElement::Const
            | ExprElement::Var
            | ExprElement::Lookup
            | ExprElement::ArrayElem
            | ExprElement::Alias
            | ExprElement::Eq
            | ExprElement::NEq
            | ExprElement::IsKnown => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ExprElement::Const => "const",
            ExprElement::Var => "var",
            ExprElement::Lookup => "lookup",
            ExprElement::ArrayElem => "[]",
            ExprElement::Alias => "alias",
            ExprElement::Plus => "+",
            ExprElement::Minus => "-",
            ExprElement::Mult => "*",
            ExprElement::Div => "/",
            ExprElement::Mod => "mod",
            ExprElement::Max => "max",
            ExprElement::Min => "min",
            ExprElement::Sqrt => "sqrt",
            ExprElement::Abs => "abs",
            ExprElement::Ceil => "ceil",
            ExprElement::Floor => "floor",
            ExprElement::Round => "round",
            ExprElement::Trunc => "trunc",
            ExprElement::RealToInt => "real_to_int",
            ExprElement::Eq => "==",
            ExprElement::NEq => "!=",
            ExprElement::LT => "<",
            ExprElement::GT => ">",
            ExprElement::LEq => "<=",
            ExprElement::GEq => ">=",
            ExprElement::Not => "!",
            ExprElement::Or => "||",
            ExprElement::And => "&&",
            ExprElement::XOr => "xor",
            ExprElement::IsKnown => "is_known",
            ExprElement::Concat => "+",
            ExprElement::Strlen => "strlen",
        }
    }
}

impl Display for ExprElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
