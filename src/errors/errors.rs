use std::fmt::Display;

use thiserror::Error;

/// Failure raised while building a plan, never by the checker itself.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
        }
    }

    pub fn get_internal(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnknownVarType { .. } => "UnknownVarType",
            ErrorImpl::UnknownElement { .. } => "UnknownElement",
            ErrorImpl::UnknownConditionType { .. } => "UnknownConditionType",
            ErrorImpl::UnknownCallType { .. } => "UnknownCallType",
            ErrorImpl::ArityMismatch { .. } => "ArityMismatch",
            ErrorImpl::ExprNotFound { .. } => "ExprNotFound",
            ErrorImpl::ExprAlreadyOwned { .. } => "ExprAlreadyOwned",
            ErrorImpl::NodeNotFound { .. } => "NodeNotFound",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnknownVarType { type_ } => ErrorTip::Suggestion(format!(
                "Unknown variable type `{}`, expected one of Boolean, Integer, Real or String",
                type_
            )),
            ErrorImpl::UnknownElement { element } => {
                ErrorTip::Suggestion(format!("Element `{}` has no expression equivalent", element))
            }
            ErrorImpl::UnknownConditionType { condition } => ErrorTip::Suggestion(format!(
                "Condition `{}` is not one of Start, End, Pre, Post, Invariant, Repeat or Skip",
                condition
            )),
            ErrorImpl::UnknownCallType { call } => {
                ErrorTip::Suggestion(format!("`{}` does not name a declaration or action", call))
            }
            ErrorImpl::ArityMismatch { element, expected, received } => {
                ErrorTip::Suggestion(format!(
                    "`{}` takes {} operand(s), received {}",
                    element, expected, received
                ))
            }
            ErrorImpl::ExprNotFound { .. } => ErrorTip::None,
            ErrorImpl::ExprAlreadyOwned { .. } => ErrorTip::Suggestion(String::from(
                "Each expression can only be the operand of a single parent",
            )),
            ErrorImpl::NodeNotFound { .. } => ErrorTip::None,
        }
    }
}

impl From<ErrorImpl> for Error {
    fn from(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unknown variable type {type_:?}")]
    UnknownVarType { type_: String },
    #[error("unknown expression element {element:?}")]
    UnknownElement { element: String },
    #[error("unknown condition type {condition:?}")]
    UnknownConditionType { condition: String },
    #[error("unknown call type {call:?}")]
    UnknownCallType { call: String },
    #[error("element {element} expects {expected} operand(s), received {received}")]
    ArityMismatch {
        element: String,
        expected: usize,
        received: usize,
    },
    #[error("expression #{id} does not exist")]
    ExprNotFound { id: usize },
    #[error("expression #{id} already belongs to expression #{parent}")]
    ExprAlreadyOwned { id: usize, parent: usize },
    #[error("node #{id} does not exist")]
    NodeNotFound { id: usize },
}

/// Severity of a checker finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Could not be verified, but is not necessarily wrong.
    Warning,
    /// Proven inconsistent.
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "Warning"),
            Severity::Error => write!(f, "Error"),
        }
    }
}

/// A single checker finding.
///
/// Logs are plain values: the checker collects them and never stops on one.
#[derive(Debug, Clone, PartialEq)]
pub struct Log {
    severity: Severity,
    internal_log: LogImpl,
}

impl Log {
    pub fn new(log_impl: LogImpl) -> Self {
        Log {
            severity: log_impl.severity(),
            internal_log: log_impl,
        }
    }

    pub fn get_severity(&self) -> Severity {
        self.severity
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    pub fn get_internal(&self) -> &LogImpl {
        &self.internal_log
    }

    pub fn get_message(&self) -> String {
        self.internal_log.to_string()
    }

    pub fn get_log_name(&self) -> &str {
        match &self.internal_log {
            LogImpl::NameConflict { .. } => "NameConflict",
            LogImpl::NonStaticName { .. } => "NonStaticName",
            LogImpl::NoDeclarationMatch { .. } => "NoDeclarationMatch",
            LogImpl::NoLookupDeclaration { .. } => "NoLookupDeclaration",
            LogImpl::DeclarationMismatch { .. } => "DeclarationMismatch",
            LogImpl::InaccessibleNode { .. } => "InaccessibleNode",
            LogImpl::ExpressionType { .. } => "ExpressionType",
            LogImpl::VariableNotFound { .. } => "VariableNotFound",
            LogImpl::VariableMismatch { .. } => "VariableMismatch",
            LogImpl::AssignmentMismatch { .. } => "AssignmentMismatch",
            LogImpl::NotAnArray { .. } => "NotAnArray",
            LogImpl::ArrayNeedsIndex { .. } => "ArrayNeedsIndex",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_log {
            LogImpl::NameConflict { .. } => ErrorTip::Suggestion(String::from(
                "Rename or remove one of the declarations",
            )),
            LogImpl::NonStaticName { .. } => ErrorTip::Suggestion(String::from(
                "Names built from variables or lookups are only known while executing",
            )),
            LogImpl::NoDeclarationMatch { .. } | LogImpl::NoLookupDeclaration { .. } => {
                ErrorTip::Suggestion(String::from("Add a global declaration for this call"))
            }
            LogImpl::DeclarationMismatch { .. } => ErrorTip::Suggestion(String::from(
                "Check the call kind, argument types and return types against the declaration",
            )),
            LogImpl::InaccessibleNode { .. } => ErrorTip::Suggestion(String::from(
                "Only the node itself, its children, its parent and its siblings can be referenced",
            )),
            LogImpl::ExpressionType { .. } => ErrorTip::None,
            LogImpl::VariableNotFound { variable, .. } => {
                ErrorTip::Suggestion(format!("Declare `{}` in this node or an ancestor", variable))
            }
            LogImpl::VariableMismatch { .. } => ErrorTip::None,
            LogImpl::AssignmentMismatch { .. } => ErrorTip::None,
            LogImpl::NotAnArray { .. } => ErrorTip::Suggestion(String::from(
                "Only array variables can be indexed",
            )),
            LogImpl::ArrayNeedsIndex { .. } => ErrorTip::Suggestion(String::from(
                "Access a single element with an index",
            )),
        }
    }
}

impl Display for Log {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.internal_log)
    }
}

impl From<LogImpl> for Log {
    fn from(log_impl: LogImpl) -> Self {
        Log::new(log_impl)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LogImpl {
    #[error("Name conflict between {first} and {second}")]
    NameConflict { first: String, second: String },
    #[error("Cannot statically determine correctness of name {name} in {node}")]
    NonStaticName { name: String, node: String },
    #[error("No declaration matches {call} in {node}")]
    NoDeclarationMatch { call: String, node: String },
    #[error("No declaration matches {call} {context}")]
    NoLookupDeclaration { call: String, context: String },
    #[error("{call} in {node} does not match {declaration}")]
    DeclarationMismatch {
        call: String,
        node: String,
        declaration: String,
    },
    #[error("Node {name} is not accessible from scope of node {node}")]
    InaccessibleNode { name: String, node: String },
    #[error("Expr {expr} with {found} does not match {expected}")]
    ExpressionType {
        expr: String,
        found: String,
        expected: String,
    },
    #[error("Could not find variable definition to match expression {variable} {context}")]
    VariableNotFound { variable: String, context: String },
    #[error("Var {variable} with type {declared} does not match expected type {used} {context}")]
    VariableMismatch {
        variable: String,
        declared: String,
        used: String,
        context: String,
    },
    #[error("Var {variable} does not match RHS expected type {found} in {node}")]
    AssignmentMismatch {
        variable: String,
        found: String,
        node: String,
    },
    #[error("{variable} in expression {expr} is not an array.")]
    NotAnArray { variable: String, expr: String },
    #[error("{variable} in expression {expr} needs to be accessed as a single array element.")]
    ArrayNeedsIndex { variable: String, expr: String },
}

impl LogImpl {
    pub fn severity(&self) -> Severity {
        match self {
            LogImpl::NonStaticName { .. }
            | LogImpl::NoDeclarationMatch { .. }
            | LogImpl::NoLookupDeclaration { .. }
            | LogImpl::InaccessibleNode { .. } => Severity::Warning,
            LogImpl::NameConflict { .. }
            | LogImpl::DeclarationMismatch { .. }
            | LogImpl::ExpressionType { .. }
            | LogImpl::VariableNotFound { .. }
            | LogImpl::VariableMismatch { .. }
            | LogImpl::AssignmentMismatch { .. }
            | LogImpl::NotAnArray { .. }
            | LogImpl::ArrayNeedsIndex { .. } => Severity::Error,
        }
    }
}
