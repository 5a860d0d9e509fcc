//! The `missing` aggregation: a field-data bucket of all documents missing
//! a value for the given field.

use serde_json::{Map, Value};

use super::Aggregation;

/// Builder for a `missing` aggregation
#[derive(Debug, Clone, Default)]
pub struct MissingAggregation {
    field: Option<String>,
    sub_aggregations: Vec<(String, Value)>,
}

impl MissingAggregation {
    /// Creates an empty missing aggregation
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field whose missing values form the bucket
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a named sub-aggregation computed over the bucket
    #[must_use]
    pub fn with_sub_aggregation(mut self, name: impl Into<String>, agg: &impl Aggregation) -> Self {
        self.sub_aggregations.push((name.into(), agg.source()));
        self
    }
}

impl Aggregation for MissingAggregation {
    fn source(&self) -> Value {
        let mut opts = Map::new();
        if let Some(field) = &self.field {
            opts.insert("field".into(), Value::String(field.clone()));
        }

        let mut source = Map::new();
        source.insert("missing".into(), Value::Object(opts));

        if !self.sub_aggregations.is_empty() {
            let mut aggs = Map::new();
            for (name, sub) in &self.sub_aggregations {
                aggs.insert(name.clone(), sub.clone());
            }
            source.insert("aggregations".into(), Value::Object(aggs));
        }

        Value::Object(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_has_exact_shape() {
        let agg = MissingAggregation::new().with_field("price");
        let json = serde_json::to_string(&agg.source()).unwrap();
        assert_eq!(json, r#"{"missing":{"field":"price"}}"#);
    }

    #[test]
    fn source_without_field_is_empty_object() {
        let agg = MissingAggregation::new();
        let json = serde_json::to_string(&agg.source()).unwrap();
        assert_eq!(json, r#"{"missing":{}}"#);
    }

    #[test]
    fn sub_aggregations_are_nested() {
        let inner = MissingAggregation::new().with_field("discount");
        let agg = MissingAggregation::new()
            .with_field("price")
            .with_sub_aggregation("no_discount", &inner);

        let source = agg.source();
        assert_eq!(source["missing"]["field"], "price");
        assert_eq!(
            source["aggregations"]["no_discount"]["missing"]["field"],
            "discount"
        );
    }
}
