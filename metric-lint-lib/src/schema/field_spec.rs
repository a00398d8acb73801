use super::AggregationType;
use core::fmt::{Display, Formatter, Result as FmtResult};
use serde_json::Value;
use strum::VariantNames;

pub const ID: &str = "id";
pub const METRIC_NAMESPACE: &str = "metricNamespace";
pub const METRIC_NAME: &str = "metricName";
pub const AGGREGATION_TYPE: &str = "aggregationType";
pub const TIME_GRAIN: &str = "timeGrain";
pub const RECOMMENDED: &str = "recommended";
pub const UNIT: &str = "unit";
pub const STATIC_THRESHOLDS: &str = "staticThresholds";
pub const DYNAMIC_THRESHOLDS: &str = "dynamicThresholds";

pub const DEGRADED_THRESHOLD: &str = "degradedThreshold";
pub const DEGRADED_OPERATOR: &str = "degradedOperator";
pub const UNHEALTHY_THRESHOLD: &str = "unhealthyThreshold";
pub const UNHEALTHY_OPERATOR: &str = "unhealthyOperator";

pub const SENSITIVITY: &str = "sensitivity";
pub const MODEL: &str = "model";
pub const OPERATOR: &str = "operator";

/// Properties recognized inside a `staticThresholds` block.
pub const STATIC_THRESHOLD_PROPERTIES: &[&str] = &[DEGRADED_THRESHOLD, DEGRADED_OPERATOR, UNHEALTHY_THRESHOLD, UNHEALTHY_OPERATOR];

/// Properties recognized inside a `dynamicThresholds` block. All of them are required.
pub const DYNAMIC_THRESHOLD_PROPERTIES: &[&str] = &[SENSITIVITY, MODEL, OPERATOR];

const BOOLEAN_VALUES: &[&str] = &["true", "false"];

/// JSON type a property is expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Boolean,
    Object,
}

impl ValueKind {
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Boolean => value.is_boolean(),
            Self::Object => value.is_object(),
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::String => write!(f, "a string"),
            Self::Boolean => write!(f, "a boolean"),
            Self::Object => write!(f, "an object"),
        }
    }
}

/// What a property's value is checked against once its type is correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRule {
    Unrestricted,
    OneOf(&'static [&'static str]),
    TimeGrain,
    Unit,
    StaticThresholds,
    DynamicThresholds,
}

/// One row of the metric-definition schema.
#[derive(Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub required: bool,
    pub kind: ValueKind,
    pub rule: ValueRule,
}

macro_rules! field_spec {
    ($name:expr, required, $kind:ident, $rule:expr) => {
        FieldSpec {
            name: $name,
            required: true,
            kind: ValueKind::$kind,
            rule: $rule,
        }
    };
    ($name:expr, optional, $kind:ident, $rule:expr) => {
        FieldSpec {
            name: $name,
            required: false,
            kind: ValueKind::$kind,
            rule: $rule,
        }
    };
}

/// Top-level properties of a metric definition, in the order they are checked.
pub const METRIC_DEFINITION_FIELDS: &[FieldSpec] = &[
    field_spec!(ID, required, String, ValueRule::Unrestricted),
    field_spec!(METRIC_NAMESPACE, required, String, ValueRule::Unrestricted),
    field_spec!(METRIC_NAME, required, String, ValueRule::Unrestricted),
    field_spec!(AGGREGATION_TYPE, required, String, ValueRule::OneOf(AggregationType::VARIANTS)),
    field_spec!(TIME_GRAIN, required, String, ValueRule::TimeGrain),
    field_spec!(RECOMMENDED, required, Boolean, ValueRule::OneOf(BOOLEAN_VALUES)),
    field_spec!(UNIT, optional, String, ValueRule::Unit),
    field_spec!(STATIC_THRESHOLDS, optional, Object, ValueRule::StaticThresholds),
    field_spec!(DYNAMIC_THRESHOLDS, optional, Object, ValueRule::DynamicThresholds),
];

/// Look up the schema row for a top-level property.
#[must_use]
pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
    METRIC_DEFINITION_FIELDS.iter().find(|spec| spec.name == name)
}

/// Iterate over the names of all recognized top-level properties.
pub fn field_names() -> impl Iterator<Item = &'static str> {
    METRIC_DEFINITION_FIELDS.iter().map(|spec| spec.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_fields() {
        let required: Vec<_> = METRIC_DEFINITION_FIELDS.iter().filter(|s| s.required).map(|s| s.name).collect();
        assert_eq!(
            required,
            ["id", "metricNamespace", "metricName", "aggregationType", "timeGrain", "recommended"]
        );
    }

    #[test]
    fn test_field_spec_lookup() {
        let spec = field_spec("recommended").unwrap();
        assert_eq!(spec.kind, ValueKind::Boolean);
        assert!(field_spec("displayName").is_none());
    }

    #[test]
    fn test_value_kind_matches() {
        assert!(ValueKind::String.matches(&json!("x")));
        assert!(!ValueKind::String.matches(&json!(1)));
        assert!(ValueKind::Boolean.matches(&json!(false)));
        assert!(!ValueKind::Boolean.matches(&json!("true")));
        assert!(ValueKind::Object.matches(&json!({})));
        assert!(!ValueKind::Object.matches(&json!([])));
    }
}
