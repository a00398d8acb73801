//! Uniqueness of `id` and `metricName` across a set of definitions.

use super::{Diagnostic, DiagnosticKind, Severity, ValidationReport};
use crate::schema::{ID, METRIC_NAME};
use serde_json::Value;
use std::collections::HashMap;

/// Values that occur more than once, with their counts, in order of first occurrence.
pub fn find_duplicates<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut counts: HashMap<&'a str, usize> = HashMap::new();
    let mut order = Vec::new();

    for value in values {
        let count = counts.entry(value).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }

    order
        .into_iter()
        .filter_map(|value| {
            let count = counts[&value];
            (count > 1).then_some((value, count))
        })
        .collect()
}

/// String values of a property across definitions; definitions without a string value are skipped.
fn string_values<'a>(definitions: impl IntoIterator<Item = &'a Value>, property: &'a str) -> impl Iterator<Item = &'a str> {
    definitions
        .into_iter()
        .filter_map(move |definition| definition.get(property).and_then(Value::as_str))
}

/// Report one `DuplicateId` per id that is used more than once.
pub fn check_ids<'a>(definitions: impl IntoIterator<Item = &'a Value>, report: &mut ValidationReport) {
    for (id, occurrences) in find_duplicates(string_values(definitions, ID)) {
        report.push(Diagnostic::new(
            Severity::Error,
            DiagnosticKind::DuplicateId {
                id: id.to_string(),
                occurrences,
            },
        ));
    }
}

/// Report one `DuplicateMetricName` per metric name that is used more than once.
pub fn check_metric_names<'a>(definitions: impl IntoIterator<Item = &'a Value>, report: &mut ValidationReport) {
    for (name, occurrences) in find_duplicates(string_values(definitions, METRIC_NAME)) {
        report.push(
            Diagnostic {
                metric_name: Some(name.to_string()),
                ..Diagnostic::new(
                    Severity::Error,
                    DiagnosticKind::DuplicateMetricName {
                        name: name.to_string(),
                        occurrences,
                    },
                )
            },
        );
    }
}
