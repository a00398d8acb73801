use super::Severity;
use crate::schema::{ComparisonOperator, DYNAMIC_THRESHOLDS, DynamicModel, STATIC_THRESHOLDS, ValueKind};
use camino::{Utf8Path, Utf8PathBuf};
use core::fmt::{Display, Formatter, Result as FmtResult};
use strum::{IntoStaticStr, VariantNames};

/// What a diagnostic is about.
///
/// The variant name doubles as a stable code that appears in rendered output.
#[derive(Debug, Clone, PartialEq, Eq, IntoStaticStr)]
pub enum DiagnosticKind {
    EmptyOrMissing,
    ReadError {
        message: String,
    },
    ParseError {
        message: String,
    },
    RecordNotObject {
        found: &'static str,
    },
    DuplicateMetricName {
        name: String,
        occurrences: usize,
    },
    DuplicateId {
        id: String,
        occurrences: usize,
    },
    /// A property is missing (`found` is `None`) or holds the wrong JSON type.
    InvalidSchema {
        field: &'static str,
        expected: ValueKind,
        found: Option<&'static str>,
    },
    InvalidValue {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },
    InvalidTimeGrain {
        value: String,
    },
    UnrecognizedUnit {
        value: String,
    },
    MissingRequiredThreshold {
        missing: Vec<&'static str>,
    },
    InvalidOperatorValue {
        field: &'static str,
        value: String,
    },
    InvalidThresholdValue {
        field: &'static str,
        value: String,
    },
    IncompleteDegradedPair {
        present: &'static str,
        missing: &'static str,
    },
    MissingRequiredDynamicField {
        field: &'static str,
    },
    InvalidSensitivity {
        value: String,
    },
    InvalidModel {
        value: String,
    },
    UnknownProperty {
        container: Option<&'static str>,
        name: String,
        suggestion: Option<&'static str>,
    },
    ThresholdKindMissing,
    ThresholdKindConflict,
    UppercaseDirectory {
        name: String,
    },
}

impl DiagnosticKind {
    /// Stable identifier of the diagnostic, e.g. `DuplicateMetricName`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Severity used unless a policy overrides it.
    #[must_use]
    pub const fn default_severity(&self) -> Severity {
        match self {
            Self::UnrecognizedUnit { .. }
            | Self::IncompleteDegradedPair { .. }
            | Self::UnknownProperty { .. }
            | Self::ThresholdKindMissing
            | Self::ThresholdKindConflict => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl Display for DiagnosticKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::EmptyOrMissing => write!(f, "file is missing, empty, or does not hold a JSON array of metric definitions"),
            Self::ReadError { message } => write!(f, "unable to read file: {message}"),
            Self::ParseError { message } => write!(f, "invalid JSON: {message}"),
            Self::RecordNotObject { found } => write!(f, "metric definition must be an object, found {found}"),
            Self::DuplicateMetricName { name, occurrences } => write!(f, "metricName '{name}' is defined {occurrences} times"),
            Self::DuplicateId { id, occurrences } => write!(f, "id '{id}' is defined {occurrences} times"),
            Self::InvalidSchema {
                field,
                expected,
                found: None,
            } => write!(f, "required property '{field}' is missing, expected {expected}"),
            Self::InvalidSchema {
                field,
                expected,
                found: Some(found),
            } => write!(f, "property '{field}' must be {expected}, found {found}"),
            Self::InvalidValue { field, value, allowed } => {
                write!(f, "'{value}' is not a valid {field}, expected one of: {}", allowed.join(", "))
            }
            Self::InvalidTimeGrain { value } => write!(f, "timeGrain '{value}' must have the form PT<n>M or PT<n>H"),
            Self::UnrecognizedUnit { value } => write!(f, "unit '{value}' is not a recognized unit"),
            Self::MissingRequiredThreshold { missing } => {
                write!(f, "{STATIC_THRESHOLDS} is missing required properties: {}", missing.join(", "))
            }
            Self::InvalidOperatorValue { field, value } => write!(
                f,
                "'{value}' is not a valid {field}, expected one of: {}",
                ComparisonOperator::VARIANTS.join(", ")
            ),
            Self::InvalidThresholdValue { field, value } => write!(f, "{field} must be a number, found '{value}'"),
            Self::IncompleteDegradedPair { present, missing } => {
                write!(f, "{STATIC_THRESHOLDS} sets {present} without {missing}")
            }
            Self::MissingRequiredDynamicField { field } => {
                write!(f, "{DYNAMIC_THRESHOLDS} is missing required property '{field}'")
            }
            Self::InvalidSensitivity { value } => write!(f, "sensitivity '{value}' must be an integer between 0 and 2"),
            Self::InvalidModel { value } => write!(
                f,
                "'{value}' is not a valid model, expected one of: {}",
                DynamicModel::VARIANTS.join(", ")
            ),
            Self::UnknownProperty {
                container,
                name,
                suggestion,
            } => {
                write!(f, "unknown property '{name}'")?;
                if let Some(container) = container {
                    write!(f, " in {container}")?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, ", did you mean '{suggestion}'?")?;
                }
                Ok(())
            }
            Self::ThresholdKindMissing => write!(f, "definition has neither {STATIC_THRESHOLDS} nor {DYNAMIC_THRESHOLDS}"),
            Self::ThresholdKindConflict => write!(f, "definition has both {STATIC_THRESHOLDS} and {DYNAMIC_THRESHOLDS}"),
            Self::UppercaseDirectory { name } => write!(f, "directory name '{name}' must be lowercase"),
        }
    }
}

/// A single finding, tagged with where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub file: Option<Utf8PathBuf>,
    pub record: Option<usize>,
    pub metric_name: Option<String>,
}

impl Diagnostic {
    #[must_use]
    pub const fn new(severity: Severity, kind: DiagnosticKind) -> Self {
        Self {
            severity,
            kind,
            file: None,
            record: None,
            metric_name: None,
        }
    }

    #[must_use]
    pub fn in_file(mut self, file: Option<&Utf8Path>) -> Self {
        self.file = file.map(Utf8Path::to_path_buf);
        self
    }

    #[must_use]
    pub fn at_record(mut self, index: usize, metric_name: Option<&str>) -> Self {
        self.record = Some(index);
        self.metric_name = metric_name.map(str::to_string);
        self
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match (&self.metric_name, self.record) {
            (Some(name), _) => write!(f, "[{name}] ")?,
            (None, Some(index)) => write!(f, "[record {index}] ")?,
            (None, None) => {}
        }

        write!(f, "{}: {}", self.kind.code(), self.kind)
    }
}
