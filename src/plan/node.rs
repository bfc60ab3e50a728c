use std::{fmt::Display, str::FromStr};

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::{
    errors::errors::{Error, ErrorImpl},
    expr::expr::ExprId,
};

use super::{action::Action, vars::Var};

/// Handle of a node inside a `Plan`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionType {
    Start,
    End,
    Pre,
    Post,
    Invariant,
    Repeat,
    Skip,
}

lazy_static! {
    static ref CONDITION_LOOKUP: HashMap<&'static str, ConditionType> = {
        let mut map = HashMap::new();
        map.insert("StartCondition", ConditionType::Start);
        map.insert("EndCondition", ConditionType::End);
        map.insert("PreCondition", ConditionType::Pre);
        map.insert("PostCondition", ConditionType::Post);
        map.insert("InvariantCondition", ConditionType::Invariant);
        map.insert("RepeatCondition", ConditionType::Repeat);
        map.insert("SkipCondition", ConditionType::Skip);
        map
    };
}

impl FromStr for ConditionType {
    type Err = Error;

    /// Accepts `Start` as well as the tag name `StartCondition`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = if s.ends_with("Condition") {
            s.to_string()
        } else {
            format!("{}Condition", s)
        };
        CONDITION_LOOKUP
            .get(tag.as_str())
            .copied()
            .ok_or_else(|| Error::new(ErrorImpl::UnknownConditionType { condition: s.to_string() }))
    }
}

impl Display for ConditionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A guard on a node: a boolean expression of a given kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub condition_type: ConditionType,
    pub expr: ExprId,
}

impl Condition {
    pub fn new(condition_type: ConditionType, expr: ExprId) -> Self {
        Condition {
            condition_type,
            expr,
        }
    }
}

/// One step of a plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub conditions: Vec<Condition>,
    pub action: Option<Action>,
    pub vars: Vec<Var>,
}

impl Node {
    pub fn new(id: &str, parent: Option<NodeId>) -> Self {
        Node {
            id: id.to_string(),
            parent,
            children: vec![],
            conditions: vec![],
            action: None,
            vars: vec![],
        }
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.id == name
    }

    /// A variable declared by this node itself.
    pub fn find_local_var(&self, id: &str) -> Option<&Var> {
        self.vars.iter().find(|var| var.id == id)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
