//! Catalog filter descriptions and applied-filter chips.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a catalog filter's option inputs are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterType {
    /// Discrete options: availability, vendor, product type, variant option.
    List,
    /// Free-form `min`/`max` price bounds.
    PriceRange,
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterType::List => f.write_str("LIST"),
            FilterType::PriceRange => f.write_str("PRICE_RANGE"),
        }
    }
}

/// One filter as returned by the catalog alongside a product listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub filter_type: FilterType,
    #[serde(default)]
    pub values: Vec<FilterValue>,
}

/// A selectable option of a [`FilterSpec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterValue {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub count: u64,
    pub input: RawInput,
}

/// Filter input as handed over by the catalog or the UI.
///
/// The catalog ships option inputs as pre-serialized JSON strings
/// (`"{\"productVendor\":\"Acme\"}"`); the price widget builds the value
/// directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawInput {
    Text(String),
    Json(Value),
}

impl RawInput {
    /// Structured form of the input, parsing it first if it is text.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        match self {
            RawInput::Text(text) => serde_json::from_str(text),
            RawInput::Json(value) => Ok(value.clone()),
        }
    }
}

impl From<&str> for RawInput {
    fn from(text: &str) -> Self {
        RawInput::Text(text.to_string())
    }
}

impl From<String> for RawInput {
    fn from(text: String) -> Self {
        RawInput::Text(text)
    }
}

impl From<Value> for RawInput {
    fn from(value: Value) -> Self {
        RawInput::Json(value)
    }
}

/// An active filter selection, shown as a removable chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedFilter {
    pub label: String,
    pub url_param: UrlParam,
}

impl AppliedFilter {
    pub fn new(label: impl Into<String>, key: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url_param: UrlParam {
                key: key.to_string(),
                value: value.into(),
            },
        }
    }
}

/// The search parameter an [`AppliedFilter`] came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlParam {
    pub key: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_spec_from_catalog_json() {
        let json = r#"{
            "id": "filter.v.option.color",
            "label": "Color",
            "type": "LIST",
            "values": [
                {
                    "id": "filter.v.option.color.red",
                    "label": "Red",
                    "count": 4,
                    "input": "{\"variantOption\":{\"name\":\"Color\",\"value\":\"Red\"}}"
                }
            ]
        }"#;
        let spec: FilterSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.filter_type, FilterType::List);
        assert_eq!(spec.values.len(), 1);
        assert_eq!(spec.values[0].count, 4);
        assert!(matches!(spec.values[0].input, RawInput::Text(_)));
    }

    #[test]
    fn price_range_spec_with_object_input() {
        let json = r#"{
            "id": "filter.v.price",
            "label": "Price",
            "type": "PRICE_RANGE",
            "values": [
                { "id": "filter.v.price", "label": "Price", "input": {"price": {"min": 0, "max": 120}} }
            ]
        }"#;
        let spec: FilterSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.filter_type, FilterType::PriceRange);
        assert!(matches!(spec.values[0].input, RawInput::Json(_)));
    }

    #[test]
    fn applied_filter_uses_camel_case() {
        let chip = AppliedFilter::new("Red", "variantOption", "Color:Red");
        let json = serde_json::to_value(&chip).unwrap();
        assert_eq!(json["urlParam"]["key"], "variantOption");
        assert_eq!(json["urlParam"]["value"], "Color:Red");
    }

    #[test]
    fn filter_type_display() {
        assert_eq!(FilterType::List.to_string(), "LIST");
        assert_eq!(FilterType::PriceRange.to_string(), "PRICE_RANGE");
    }
}
