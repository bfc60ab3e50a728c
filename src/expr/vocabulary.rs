//! Names used by plan documents for expression elements.
//!
//! Plans arrive with their expressions tagged by element name (`ADD`,
//! `EQNumeric`, `LookupNow`, ...). These tables turn those names into
//! `ExprElement`s and recover the operand type encoded in the name.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::errors::{Error, ErrorImpl};

use super::{elements::ExprElement, types::ExprType};

lazy_static! {
    pub static ref ELEMENT_LOOKUP: HashMap<&'static str, ExprElement> = {
        let mut map = HashMap::new();
        map.insert("NodeStateValue", ExprElement::Const);
        map.insert("NodeOutcomeValue", ExprElement::Const);
        map.insert("NodeFailureValue", ExprElement::Const);
        map.insert("NodeTimepointValue", ExprElement::Const);
        map.insert("NodeCommandHandleValue", ExprElement::Const);
        map.insert("BooleanValue", ExprElement::Const);
        map.insert("StringValue", ExprElement::Const);
        map.insert("IntegerValue", ExprElement::Const);
        map.insert("RealValue", ExprElement::Const);
        map.insert("NodeStateVariable", ExprElement::Var);
        map.insert("NodeOutcomeVariable", ExprElement::Var);
        map.insert("NodeFailureVariable", ExprElement::Var);
        map.insert("NodeCommandHandleVariable", ExprElement::Var);
        map.insert("BooleanVariable", ExprElement::Var);
        map.insert("StringVariable", ExprElement::Var);
        map.insert("IntegerVariable", ExprElement::Var);
        map.insert("RealVariable", ExprElement::Var);
        map.insert("LookupNow", ExprElement::Lookup);
        map.insert("LookupOnChange", ExprElement::Lookup);
        map.insert("ArrayElement", ExprElement::ArrayElem);
        map.insert("Alias", ExprElement::Alias);
        map.insert("ADD", ExprElement::Plus);
        map.insert("SUB", ExprElement::Minus);
        map.insert("MUL", ExprElement::Mult);
        map.insert("DIV", ExprElement::Div);
        map.insert("MOD", ExprElement::Mod);
        map.insert("MAX", ExprElement::Max);
        map.insert("MIN", ExprElement::Min);
        map.insert("SQRT", ExprElement::Sqrt);
        map.insert("ABS", ExprElement::Abs);
        map.insert("CEIL", ExprElement::Ceil);
        map.insert("FLOOR", ExprElement::Floor);
        map.insert("ROUND", ExprElement::Round);
        map.insert("TRUNC", ExprElement::Trunc);
        map.insert("REAL_TO_INT", ExprElement::RealToInt);
        map.insert("EQInternal", ExprElement::Eq);
        map.insert("EQBoolean", ExprElement::Eq);
        map.insert("EQString", ExprElement::Eq);
        map.insert("EQNumeric", ExprElement::Eq);
        map.insert("NEInternal", ExprElement::NEq);
        map.insert("NEBoolean", ExprElement::NEq);
        map.insert("NEString", ExprElement::NEq);
        map.insert("NENumeric", ExprElement::NEq);
        map.insert("GT", ExprElement::GT);
        map.insert("LT", ExprElement::LT);
        map.insert("GE", ExprElement::GEq);
        map.insert("LE", ExprElement::LEq);
        map.insert("NOT", ExprElement::Not);
        map.insert("OR", ExprElement::Or);
        map.insert("AND", ExprElement::And);
        map.insert("XOR", ExprElement::XOr);
        map.insert("IsKnown", ExprElement::IsKnown);
        map.insert("Concat", ExprElement::Concat);
        map.insert("STRLEN", ExprElement::Strlen);
        map
    };

    // Order matters: later matches override earlier ones.
    static ref CHILD_TYPE_PATTERNS: Vec<(Regex, ExprType)> = vec![
        (Regex::new("Boolean").unwrap(), ExprType::Bool),
        (Regex::new("String").unwrap(), ExprType::Str),
        (Regex::new("Numeric|Integer|Real").unwrap(), ExprType::Num),
        (Regex::new("Internal|NodeState").unwrap(), ExprType::NodeState),
        (Regex::new("NodeOutcome").unwrap(), ExprType::NodeOutcome),
        (Regex::new("NodeFailure").unwrap(), ExprType::NodeFailureType),
        (Regex::new("NodeTimepointValue").unwrap(), ExprType::NodeTimepointValue),
        (Regex::new("NodeCommandHandle").unwrap(), ExprType::NodeCommandHandle),
    ];
}

impl ExprElement {
    /// Element for a plan document tag name.
    pub fn from_tag(tag: &str) -> Result<ExprElement, Error> {
        ELEMENT_LOOKUP
            .get(tag)
            .copied()
            .ok_or_else(|| Error::new(ErrorImpl::UnknownElement { element: tag.to_string() }))
    }
}

/// Value or operand type encoded in a tag name, e.g. `EQNumeric` or `NodeOutcomeVariable`.
pub fn type_from_tag(tag: &str) -> Option<ExprType> {
    CHILD_TYPE_PATTERNS
        .iter()
        .filter(|(regex, _)| regex.is_match(tag))
        .map(|(_, ty)| *ty)
        .last()
}
