#![allow(clippy::module_inception)]

use crate::errors::errors::{ErrorTip, Log, Severity};

pub mod checker;
pub mod errors;
pub mod expr;
pub mod plan;

extern crate regex;

pub use checker::checker::check_plan;

/// Renders one finding for a terminal.
///
/// ```text
/// Error: DeclarationMismatch (Check the call kind, ...)
///  | Command Foo("x") in Root does not match Command Foo(Integer) -> Boolean
/// ```
pub fn render_log(log: &Log) -> String {
    let header = match log.get_tip() {
        ErrorTip::None => format!("{}: {}", log.get_severity(), log.get_log_name()),
        tip => format!("{}: {} ({})", log.get_severity(), log.get_log_name(), tip),
    };

    format!("{}\n | {}", header, log.get_message())
}

/// Renders every finding followed by an error/warning count.
pub fn render_report(logs: &[Log]) -> String {
    let errors = logs
        .iter()
        .filter(|log| log.get_severity() == Severity::Error)
        .count();
    let warnings = logs.len() - errors;

    let mut report = logs.iter().map(render_log).collect::<Vec<String>>().join("\n\n");
    if !report.is_empty() {
        report.push_str("\n\n");
    }
    report.push_str(&format!("{} error(s), {} warning(s)", errors, warnings));
    report
}
