//! Unit tests for error and diagnostic types.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, Log, LogImpl, Severity};

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnknownVarType {
        type_: "Quaternion".to_string(),
    });

    assert_eq!(error.get_error_name(), "UnknownVarType");
    assert_eq!(error.to_string(), "unknown variable type \"Quaternion\"");
}

#[test]
fn test_error_from_impl() {
    let error: Error = ErrorImpl::NodeNotFound { id: 7 }.into();

    assert_eq!(error.get_error_name(), "NodeNotFound");
    assert_eq!(error.get_internal(), &ErrorImpl::NodeNotFound { id: 7 });
}

#[test]
fn test_arity_mismatch_error() {
    let error = Error::new(ErrorImpl::ArityMismatch {
        element: "Not".to_string(),
        expected: 1,
        received: 2,
    });

    assert_eq!(error.get_error_name(), "ArityMismatch");
    assert_eq!(error.get_tip().to_string(), "`Not` takes 1 operand(s), received 2");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::ExprNotFound { id: 3 });

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_log_severity_follows_kind() {
    let warning = Log::new(LogImpl::InaccessibleNode {
        name: "Far".to_string(),
        node: "Here".to_string(),
    });
    let error = Log::new(LogImpl::NameConflict {
        first: "Command Foo()".to_string(),
        second: "Lookup Foo()".to_string(),
    });

    assert_eq!(warning.get_severity(), Severity::Warning);
    assert!(warning.is_warning());
    assert_eq!(error.get_severity(), Severity::Error);
    assert!(error.is_error());
}

#[test]
fn test_log_message() {
    let log = Log::new(LogImpl::InaccessibleNode {
        name: "Far".to_string(),
        node: "Here".to_string(),
    });

    assert_eq!(log.get_log_name(), "InaccessibleNode");
    assert_eq!(
        log.get_message(),
        "Node Far is not accessible from scope of node Here"
    );
    assert_eq!(
        log.to_string(),
        "Warning: Node Far is not accessible from scope of node Here"
    );
}

#[test]
fn test_log_tip_names_variable() {
    let log = Log::new(LogImpl::VariableNotFound {
        variable: "count".to_string(),
        context: "in Start Condition of node Root".to_string(),
    });

    match log.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`count`")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_warning_kinds() {
    let warnings = [
        LogImpl::NonStaticName {
            name: "x".to_string(),
            node: "N".to_string(),
        },
        LogImpl::NoDeclarationMatch {
            call: "Command Foo()".to_string(),
            node: "N".to_string(),
        },
        LogImpl::NoLookupDeclaration {
            call: "Lookup Foo()".to_string(),
            context: "".to_string(),
        },
    ];

    for warning in warnings {
        assert_eq!(warning.severity(), Severity::Warning);
    }
}
