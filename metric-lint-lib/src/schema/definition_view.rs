use super::field_spec::{self, DYNAMIC_THRESHOLDS, METRIC_NAME, STATIC_THRESHOLDS};
use serde_json::{Map, Value};

/// A typed, borrowed view over one metric-definition object.
///
/// Known properties are exposed through accessors; anything else surfaces through
/// [`DefinitionView::unrecognized_keys`]. A JSON `null` on an optional property reads as absent.
#[derive(Debug, Clone, Copy)]
pub struct DefinitionView<'a> {
    index: usize,
    fields: &'a Map<String, Value>,
}

impl<'a> DefinitionView<'a> {
    #[must_use]
    pub const fn new(index: usize, fields: &'a Map<String, Value>) -> Self {
        Self { index, fields }
    }

    /// Position of the definition within its file.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Raw value of a property, `null` included.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'a Value> {
        self.fields.get(name)
    }

    /// Value of an optional property, treating `null` as absent.
    #[must_use]
    pub fn optional_field(&self, name: &str) -> Option<&'a Value> {
        self.fields.get(name).filter(|v| !v.is_null())
    }

    #[must_use]
    pub fn metric_name(&self) -> Option<&'a str> {
        self.fields.get(METRIC_NAME).and_then(Value::as_str)
    }

    #[must_use]
    pub fn static_thresholds(&self) -> Option<&'a Value> {
        self.optional_field(STATIC_THRESHOLDS)
    }

    #[must_use]
    pub fn dynamic_thresholds(&self) -> Option<&'a Value> {
        self.optional_field(DYNAMIC_THRESHOLDS)
    }

    /// Property names that are not part of the metric-definition schema.
    pub fn unrecognized_keys(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.fields
            .keys()
            .map(String::as_str)
            .filter(|key| field_spec::field_spec(key).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors() {
        let value = json!({
            "id": "m1",
            "metricName": "cpu",
            "staticThresholds": null,
            "dynamicThresholds": {"sensitivity": 1},
        });
        let view = DefinitionView::new(3, value.as_object().unwrap());

        assert_eq!(view.index(), 3);
        assert_eq!(view.metric_name(), Some("cpu"));
        assert!(view.static_thresholds().is_none());
        assert!(view.field("staticThresholds").is_some());
        assert!(view.dynamic_thresholds().is_some());
    }

    #[test]
    fn test_non_string_metric_name_reads_as_absent() {
        let value = json!({"id": 7, "metricName": ["cpu"]});
        let view = DefinitionView::new(0, value.as_object().unwrap());

        assert!(view.metric_name().is_none());
    }

    #[test]
    fn test_unrecognized_keys() {
        let value = json!({
            "id": "m1",
            "displayName": "CPU",
            "metricname": "cpu",
            "unit": "Percent",
        });
        let view = DefinitionView::new(0, value.as_object().unwrap());
        let mut keys: Vec<_> = view.unrecognized_keys().collect();
        keys.sort_unstable();

        assert_eq!(keys, ["displayName", "metricname"]);
    }
}
