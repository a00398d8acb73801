//! Checks applied to a single metric definition.

use super::report::RecordScope;
use super::suggest::closest_match;
use super::{Diagnostic, DiagnosticKind, Severity, ValidationPolicy, ValidationReport, thresholds};
use crate::json_utils::{describe, type_name};
use crate::schema::{DefinitionView, FieldSpec, METRIC_DEFINITION_FIELDS, ValueRule, field_names, is_valid_time_grain};
use serde_json::Value;

/// Validate one definition, appending its findings to `report`.
pub fn validate_record(index: usize, value: &Value, policy: &ValidationPolicy, report: &mut ValidationReport) {
    let Some(fields) = value.as_object() else {
        report.push(
            Diagnostic::new(
                Severity::Error,
                DiagnosticKind::RecordNotObject {
                    found: type_name(value),
                },
            )
            .at_record(index, None),
        );
        return;
    };

    let view = DefinitionView::new(index, fields);
    let mut scope = report.record_scope(view.index(), view.metric_name());

    for spec in METRIC_DEFINITION_FIELDS {
        check_field(&view, spec, policy, &mut scope);
    }

    match (view.static_thresholds().is_some(), view.dynamic_thresholds().is_some()) {
        (false, false) => scope.emit_as(policy.threshold_kind_severity, DiagnosticKind::ThresholdKindMissing),
        (true, true) => scope.emit_as(policy.threshold_kind_severity, DiagnosticKind::ThresholdKindConflict),
        _ => {}
    }

    for name in view.unrecognized_keys() {
        scope.emit(DiagnosticKind::UnknownProperty {
            container: None,
            name: name.to_string(),
            suggestion: closest_match(name, field_names()),
        });
    }
}

/// Check one schema row. A missing or mistyped property suppresses the value checks for it.
fn check_field(view: &DefinitionView<'_>, spec: &FieldSpec, policy: &ValidationPolicy, scope: &mut RecordScope<'_>) {
    let value = if spec.required {
        view.field(spec.name)
    } else {
        view.optional_field(spec.name)
    };

    let Some(value) = value else {
        if spec.required {
            scope.emit(DiagnosticKind::InvalidSchema {
                field: spec.name,
                expected: spec.kind,
                found: None,
            });
        }
        return;
    };

    if !spec.kind.matches(value) {
        if spec.rule == ValueRule::Unit {
            scope.emit(DiagnosticKind::UnrecognizedUnit { value: describe(value) });
        } else {
            scope.emit(DiagnosticKind::InvalidSchema {
                field: spec.name,
                expected: spec.kind,
                found: Some(type_name(value)),
            });
        }
        return;
    }

    match spec.rule {
        ValueRule::Unrestricted => {}

        ValueRule::OneOf(allowed) => {
            let text = describe(value);
            if !allowed.contains(&text.as_str()) {
                scope.emit(DiagnosticKind::InvalidValue {
                    field: spec.name,
                    value: text,
                    allowed,
                });
            }
        }

        ValueRule::TimeGrain => {
            if let Some(grain) = value.as_str()
                && !is_valid_time_grain(grain)
            {
                scope.emit(DiagnosticKind::InvalidTimeGrain { value: grain.to_string() });
            }
        }

        ValueRule::Unit => {
            if let Some(unit) = value.as_str()
                && !policy.is_allowed_unit(unit)
            {
                scope.emit(DiagnosticKind::UnrecognizedUnit { value: unit.to_string() });
            }
        }

        ValueRule::StaticThresholds => {
            if let Some(block) = value.as_object() {
                thresholds::check_static(block, policy, scope);
            }
        }

        ValueRule::DynamicThresholds => {
            if let Some(block) = value.as_object() {
                thresholds::check_dynamic(block, scope);
            }
        }
    }
}
