use super::Severity;
use crate::schema::Unit;
use strum::IntoEnumIterator;

/// Knobs that change how strictly definitions are judged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Spellings accepted for the optional `unit` property.
    pub units: Vec<String>,

    /// Severity for definitions with neither or both threshold kinds.
    pub threshold_kind_severity: Severity,

    /// Require threshold values in `staticThresholds` to be numbers.
    pub strict_threshold_values: bool,
}

impl ValidationPolicy {
    #[must_use]
    pub fn is_allowed_unit(&self, unit: &str) -> bool {
        self.units.iter().any(|u| u == unit)
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            units: Unit::iter().map(|u| u.to_string()).collect(),
            threshold_kind_severity: Severity::Warning,
            strict_threshold_values: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_units() {
        let policy = ValidationPolicy::default();
        assert!(policy.is_allowed_unit("Percent"));
        assert!(policy.is_allowed_unit("MilliSeconds"));
        assert!(!policy.is_allowed_unit("percent"));
        assert!(!policy.is_allowed_unit("Furlongs"));
    }
}
