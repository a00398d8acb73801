use super::{DiagnosticKind, ValidationPolicy, ValidationReport, record, uniqueness};
use crate::json_utils::strip_bom;
use camino::Utf8Path;
use serde_json::Value;
use std::fs;
use std::io;

const LOG_TARGET: &str = "  validate";

/// Validate one metric-definition file.
///
/// Problems with the file itself (missing, unreadable, not JSON, not a non-empty array) end
/// validation of that file; everything else is checked exhaustively.
#[must_use]
pub fn validate_file(path: &Utf8Path, policy: &ValidationPolicy) -> ValidationReport {
    let mut report = ValidationReport::new(Some(path.to_path_buf()));

    log::debug!(target: LOG_TARGET, "Validating '{path}'");

    match fs::read_to_string(path) {
        Ok(text) => validate_text(&text, policy, &mut report),
        Err(e) if e.kind() == io::ErrorKind::NotFound => report.push_file_level(DiagnosticKind::EmptyOrMissing),
        Err(e) => report.push_file_level(DiagnosticKind::ReadError { message: e.to_string() }),
    }

    log::debug!(
        target: LOG_TARGET,
        "Finished '{path}': {} definitions, {} errors, {} warnings",
        report.record_count(),
        report.error_count(),
        report.warning_count()
    );

    report
}

#[cfg(test)]
fn validate_str(text: &str, policy: &ValidationPolicy) -> ValidationReport {
    let mut report = ValidationReport::new(None);
    validate_text(text, policy, &mut report);
    report
}

fn validate_text(text: &str, policy: &ValidationPolicy, report: &mut ValidationReport) {
    let text = strip_bom(text);
    if text.trim().is_empty() {
        report.push_file_level(DiagnosticKind::EmptyOrMissing);
        return;
    }

    let root: Value = match serde_json::from_str(text) {
        Ok(root) => root,
        Err(e) => {
            report.push_file_level(DiagnosticKind::ParseError { message: e.to_string() });
            return;
        }
    };

    match root.as_array() {
        Some(definitions) if !definitions.is_empty() => validate_definitions(definitions, policy, report),
        _ => report.push_file_level(DiagnosticKind::EmptyOrMissing),
    }
}

/// Validate a parsed array of definitions: file-level uniqueness first, then every record.
fn validate_definitions(definitions: &[Value], policy: &ValidationPolicy, report: &mut ValidationReport) {
    report.set_record_count(definitions.len());

    uniqueness::check_metric_names(definitions, report);
    uniqueness::check_ids(definitions, report);

    for (index, definition) in definitions.iter().enumerate() {
        record::validate_record(index, definition, policy, report);
    }
}
