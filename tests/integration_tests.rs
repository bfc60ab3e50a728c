//! Integration tests for checking whole plans.
//!
//! Plans are assembled the way a document reader would: element and type
//! names are resolved through the vocabulary tables, then the full checker
//! runs over the result.

use std::sync::Once;

use plan_checker::{
    check_plan,
    checker::checker::{check_decl_redundancy, Checker},
    errors::errors::Severity,
    expr::{
        elements::ExprElement,
        expr::ExprId,
        types::{ExprType, VarType},
        vocabulary::type_from_tag,
    },
    plan::{
        action::{Action, ActionType},
        decls::{CallType, GlobalDecl},
        node::{ConditionType, NodeId},
        plan::Plan,
        vars::Var,
    },
    render_report,
};
use pretty_assertions::assert_eq;

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

fn decl(tag: &str, id: &str, params: &[&str], returns: &[&str]) -> GlobalDecl {
    let slots = |names: &[&str]| {
        names
            .iter()
            .map(|name| Var::anonymous(name.parse::<VarType>().unwrap()))
            .collect::<Vec<Var>>()
    };
    GlobalDecl::new(tag.parse::<CallType>().unwrap(), id, slots(params), slots(returns))
}

fn value(plan: &mut Plan, tag: &str, literal: &str) -> ExprId {
    let ty = type_from_tag(tag).unwrap();
    plan.exprs_mut().constant(literal, ty)
}

fn variable(plan: &mut Plan, tag: &str, name: &str) -> ExprId {
    plan.exprs_mut().variable(name, type_from_tag(tag))
}

fn operator(plan: &mut Plan, tag: &str, left: ExprId, right: ExprId) -> ExprId {
    let element = ExprElement::from_tag(tag).unwrap();
    let id = plan.exprs_mut().binary(element, left, right).unwrap();
    if let Some(child_type) = type_from_tag(tag) {
        plan.exprs_mut().set_child_type(id, child_type).unwrap();
    }
    id
}

fn lookup_now(plan: &mut Plan, name: &str, ty: ExprType) -> ExprId {
    let action = Action::call(plan.exprs_mut(), ActionType::from_tag("LookupNow").unwrap(), name, vec![], None);
    plan.exprs_mut().lookup(action, Some(ty)).unwrap()
}

fn condition(plan: &mut Plan, node: NodeId, tag: &str, expr: ExprId) {
    let condition_type = tag.parse::<ConditionType>().unwrap();
    plan.add_condition(node, condition_type, expr).unwrap();
}

struct Drive {
    plan: Plan,
    root: NodeId,
    drive: NodeId,
}

/// SafeDrive -> (Init, Drive, Record)
fn safe_drive() -> Drive {
    let mut plan = Plan::new();
    plan.add_decl(decl("CommandDeclaration", "Drive", &["Real"], &[]));
    plan.add_decl(decl("StateDeclaration", "Speed", &[], &["Real"]));

    let root = plan.add_node("SafeDrive", None).unwrap();
    plan.declare_var(root, Var::new("speed_limit", VarType::Real)).unwrap();
    plan.declare_var(root, Var::new("done", VarType::Boolean)).unwrap();
    plan.declare_var(root, Var::array("samples", VarType::Real, 4)).unwrap();
    plan.declare_var(root, Var::new("i", "I".parse::<VarType>().unwrap())).unwrap();

    // Init: i = 0
    let init = plan.add_node("Init", Some(root)).unwrap();
    let i = variable(&mut plan, "IntegerVariable", "i");
    let zero = value(&mut plan, "IntegerValue", "0");
    let action = Action::assignment(plan.exprs_mut(), i, zero);
    plan.set_action(init, action).unwrap();

    // Drive: Drive(speed_limit), starts once Init finished, ends when Speed < samples[i]
    let drive = plan.add_node("Drive", Some(root)).unwrap();
    let limit = variable(&mut plan, "RealVariable", "speed_limit");
    let action = Action::call(plan.exprs_mut(), ActionType::Command, "Drive", vec![limit], None);
    plan.set_action(drive, action).unwrap();

    let init_state = variable(&mut plan, "NodeStateVariable", "Init");
    let finished = value(&mut plan, "NodeStateValue", "FINISHED");
    let start = operator(&mut plan, "EQInternal", init_state, finished);
    condition(&mut plan, drive, "StartCondition", start);

    let speed = lookup_now(&mut plan, "Speed", ExprType::Num);
    let samples = variable(&mut plan, "RealVariable", "samples");
    let i = variable(&mut plan, "IntegerVariable", "i");
    let sample = operator(&mut plan, "ArrayElement", samples, i);
    let end = operator(&mut plan, "LT", speed, sample);
    condition(&mut plan, drive, "EndCondition", end);

    // Record: samples[i] = Speed
    let record = plan.add_node("Record", Some(root)).unwrap();
    let samples = variable(&mut plan, "RealVariable", "samples");
    let i = variable(&mut plan, "IntegerVariable", "i");
    let slot = operator(&mut plan, "ArrayElement", samples, i);
    let speed = lookup_now(&mut plan, "Speed", ExprType::Num);
    let action = Action::assignment(plan.exprs_mut(), slot, speed);
    plan.set_action(record, action).unwrap();

    Drive { plan, root, drive }
}

#[test]
fn test_consistent_plan_has_no_findings() {
    init_logging();
    let Drive { plan, .. } = safe_drive();

    let logs = check_plan(&plan);
    assert!(logs.is_empty(), "unexpected findings: {:?}", logs);
    assert_eq!(render_report(&logs), "0 error(s), 0 warning(s)");
}

#[test]
fn test_command_called_with_wrong_argument_type() {
    init_logging();
    let mut plan = Plan::new();
    plan.add_decl(decl("Command", "Foo", &["Integer"], &["Boolean"]));
    let root = plan.add_node("Root", None).unwrap();

    let arg = value(&mut plan, "StringValue", "ten");
    let action = Action::call(plan.exprs_mut(), ActionType::Command, "Foo", vec![arg], None);
    plan.set_action(root, action).unwrap();

    let checker = Checker::new(&plan);
    assert!(check_decl_redundancy(plan.decls()).is_empty());
    assert!(checker.check_var_accessibility().is_empty());

    let consistency = checker.check_node_decl_consistency();
    assert_eq!(consistency.len(), 1);
    assert_eq!(consistency[0].get_severity(), Severity::Error);

    let logs = check_plan(&plan);
    assert_eq!(logs, consistency);
    assert_eq!(
        logs[0].to_string(),
        "Error: Command Foo(\"ten\") in Root does not match Command Foo(Integer) -> Boolean"
    );
}

#[test]
fn test_faults_are_reported_by_each_pass() {
    init_logging();
    let Drive {
        mut plan,
        root,
        drive,
    } = safe_drive();

    // Shadows the Speed lookup declaration
    plan.add_decl(decl("Command", "Speed", &[], &[]));

    let report = plan.add_node("Report", Some(root)).unwrap();
    let message = value(&mut plan, "StringValue", "arrived");
    let action = Action::call(plan.exprs_mut(), ActionType::Command, "Log", vec![message], None);
    plan.set_action(report, action).unwrap();

    let elsewhere = variable(&mut plan, "NodeStateVariable", "Elsewhere");
    let executing = value(&mut plan, "NodeStateValue", "EXECUTING");
    let invariant = operator(&mut plan, "EQInternal", elsewhere, executing);
    condition(&mut plan, drive, "InvariantCondition", invariant);

    let logs = check_plan(&plan);
    let names = logs.iter().map(|log| log.get_log_name()).collect::<Vec<&str>>();
    assert_eq!(names, vec!["NameConflict", "NoDeclarationMatch", "InaccessibleNode"]);

    let report = render_report(&logs);
    assert!(report.contains("Name conflict between Lookup Speed() -> Real and Command Speed()"));
    assert!(report.contains("No declaration matches Command Log(\"arrived\") in Report"));
    assert!(report.contains("Node Elsewhere is not accessible from scope of node Drive"));
    assert!(report.ends_with("1 error(s), 2 warning(s)"));
}

#[test]
fn test_type_and_reference_errors_in_conditions() {
    init_logging();
    let Drive { mut plan, drive, .. } = safe_drive();

    // done + 1 is numeric, not boolean
    let done = variable(&mut plan, "BooleanVariable", "done");
    let one = value(&mut plan, "IntegerValue", "1");
    let sum = operator(&mut plan, "ADD", done, one);
    condition(&mut plan, drive, "RepeatCondition", sum);

    // samples > speed_limit without an index
    let samples = variable(&mut plan, "RealVariable", "samples");
    let limit = variable(&mut plan, "RealVariable", "speed_limit");
    let gt = operator(&mut plan, "GT", samples, limit);
    condition(&mut plan, drive, "PreCondition", gt);

    let logs = Checker::new(&plan).check_var_accessibility();
    let names = logs.iter().map(|log| log.get_log_name()).collect::<Vec<&str>>();
    assert_eq!(names, vec!["ExpressionType", "ArrayNeedsIndex"]);
    assert!(logs.iter().all(|log| log.is_error()));
    assert_eq!(
        logs[0].get_message(),
        "Expr (done + 1) with type Num does not match type Bool"
    );
}

#[test]
fn test_unknown_names_fail_construction() {
    assert_eq!(
        ExprElement::from_tag("POW").unwrap_err().get_error_name(),
        "UnknownElement"
    );
    assert_eq!(
        "Float".parse::<VarType>().unwrap_err().get_error_name(),
        "UnknownVarType"
    );
    assert_eq!(
        "Finally".parse::<ConditionType>().unwrap_err().get_error_name(),
        "UnknownConditionType"
    );
    assert_eq!(
        "MacroDeclaration".parse::<CallType>().unwrap_err().get_error_name(),
        "UnknownCallType"
    );
}
