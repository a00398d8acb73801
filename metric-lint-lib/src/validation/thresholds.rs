//! Checks for the nested `staticThresholds` and `dynamicThresholds` blocks.

use super::report::RecordScope;
use super::suggest::closest_match;
use super::{DiagnosticKind, ValidationPolicy};
use crate::json_utils::describe;
use crate::schema::{
    ComparisonOperator, DEGRADED_OPERATOR, DEGRADED_THRESHOLD, DYNAMIC_THRESHOLD_PROPERTIES, DYNAMIC_THRESHOLDS, DynamicModel, MODEL,
    OPERATOR, SENSITIVITY, STATIC_THRESHOLD_PROPERTIES, STATIC_THRESHOLDS, UNHEALTHY_OPERATOR, UNHEALTHY_THRESHOLD,
};
use core::ops::RangeInclusive;
use serde_json::{Map, Value};

const SENSITIVITY_RANGE: RangeInclusive<i64> = 0..=2;

/// A property counts as present unless it is missing or `null`.
fn present<'a>(block: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    block.get(name).filter(|v| !v.is_null())
}

pub fn check_static(block: &Map<String, Value>, policy: &ValidationPolicy, scope: &mut RecordScope<'_>) {
    let missing: Vec<&'static str> = [UNHEALTHY_THRESHOLD, UNHEALTHY_OPERATOR]
        .into_iter()
        .filter(|name| present(block, name).is_none())
        .collect();

    if !missing.is_empty() {
        scope.emit(DiagnosticKind::MissingRequiredThreshold { missing });
    }

    for name in [DEGRADED_OPERATOR, UNHEALTHY_OPERATOR] {
        if let Some(value) = present(block, name) {
            check_operator(name, value, scope);
        }
    }

    match (present(block, DEGRADED_THRESHOLD), present(block, DEGRADED_OPERATOR)) {
        (Some(_), None) => scope.emit(DiagnosticKind::IncompleteDegradedPair {
            present: DEGRADED_THRESHOLD,
            missing: DEGRADED_OPERATOR,
        }),
        (None, Some(_)) => scope.emit(DiagnosticKind::IncompleteDegradedPair {
            present: DEGRADED_OPERATOR,
            missing: DEGRADED_THRESHOLD,
        }),
        _ => {}
    }

    // Threshold values are only type-checked on request.
    if policy.strict_threshold_values {
        for name in [DEGRADED_THRESHOLD, UNHEALTHY_THRESHOLD] {
            if let Some(value) = present(block, name)
                && !value.is_number()
            {
                scope.emit(DiagnosticKind::InvalidThresholdValue {
                    field: name,
                    value: describe(value),
                });
            }
        }
    }

    check_unknown_properties(block, STATIC_THRESHOLDS, STATIC_THRESHOLD_PROPERTIES, scope);
}

pub fn check_dynamic(block: &Map<String, Value>, scope: &mut RecordScope<'_>) {
    for &name in DYNAMIC_THRESHOLD_PROPERTIES {
        if present(block, name).is_none() {
            scope.emit(DiagnosticKind::MissingRequiredDynamicField { field: name });
        }
    }

    if let Some(value) = present(block, SENSITIVITY)
        && parse_sensitivity(value).is_none_or(|n| !SENSITIVITY_RANGE.contains(&n))
    {
        scope.emit(DiagnosticKind::InvalidSensitivity { value: describe(value) });
    }

    if let Some(value) = present(block, MODEL)
        && value.as_str().and_then(|s| s.parse::<DynamicModel>().ok()).is_none()
    {
        scope.emit(DiagnosticKind::InvalidModel { value: describe(value) });
    }

    if let Some(value) = present(block, OPERATOR) {
        check_operator(OPERATOR, value, scope);
    }

    check_unknown_properties(block, DYNAMIC_THRESHOLDS, DYNAMIC_THRESHOLD_PROPERTIES, scope);
}

/// Sensitivity may be written as a JSON integer or as a string holding one.
fn parse_sensitivity(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn check_operator(field: &'static str, value: &Value, scope: &mut RecordScope<'_>) {
    if value.as_str().and_then(|s| s.parse::<ComparisonOperator>().ok()).is_none() {
        scope.emit(DiagnosticKind::InvalidOperatorValue {
            field,
            value: describe(value),
        });
    }
}

fn check_unknown_properties(
    block: &Map<String, Value>,
    container: &'static str,
    known: &'static [&'static str],
    scope: &mut RecordScope<'_>,
) {
    for name in block.keys().filter(|name| !known.contains(&name.as_str())) {
        scope.emit(DiagnosticKind::UnknownProperty {
            container: Some(container),
            name: name.clone(),
            suggestion: closest_match(name, known.iter().copied()),
        });
    }
}
