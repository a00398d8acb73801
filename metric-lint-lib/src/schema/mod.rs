//! The metric-definition schema
//!
//! Metric definitions are loosely typed JSON objects. Rather than deserializing them into
//! rigid structs, which would stop at the first problem, the schema is described declaratively
//! so that every property can be checked independently.
//!
//! # Implementation Model
//!
//! - [`METRIC_DEFINITION_FIELDS`] is the schema table: each [`FieldSpec`] names a top-level
//!   property, whether it is required, the JSON type it must hold ([`ValueKind`]) and the rule
//!   its value is checked against ([`ValueRule`]).
//! - [`DefinitionView`] is a borrowed view over a single definition object with accessors for
//!   the identity properties and the threshold blocks, plus the set of unrecognized keys.
//! - The closed value sets (aggregation types, comparison operators, dynamic models, units) are
//!   plain enums parsed from their exact JSON spelling.

mod aggregation_type;
mod comparison_operator;
mod definition_view;
mod dynamic_model;
mod field_spec;
mod time_grain;
mod unit;

pub use aggregation_type::AggregationType;
pub use comparison_operator::ComparisonOperator;
pub use definition_view::DefinitionView;
pub use dynamic_model::DynamicModel;
pub use field_spec::{
    DEGRADED_OPERATOR, DEGRADED_THRESHOLD, DYNAMIC_THRESHOLD_PROPERTIES, DYNAMIC_THRESHOLDS, FieldSpec, ID, METRIC_DEFINITION_FIELDS,
    METRIC_NAME, MODEL, OPERATOR, SENSITIVITY, STATIC_THRESHOLD_PROPERTIES, STATIC_THRESHOLDS, UNHEALTHY_OPERATOR, UNHEALTHY_THRESHOLD,
    ValueKind, ValueRule, field_names,
};
pub use time_grain::is_valid_time_grain;
pub use unit::Unit;
