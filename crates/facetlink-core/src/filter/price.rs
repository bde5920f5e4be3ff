//! Price range bounds read from, and committed to, the query string.

use serde_json::{json, Map, Value};

use crate::query::{QueryParams, MAX_PRICE, MIN_PRICE};

use super::{encode_filter, FilterError, FilterType, RawInput};

/// Price bounds currently in the URL.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    /// Bounds present in `params` that read as numbers.
    pub fn from_params(params: &QueryParams) -> Self {
        Self {
            min: params.get(MIN_PRICE).and_then(parse_decimal),
            max: params.get(MAX_PRICE).and_then(parse_decimal),
        }
    }

    /// Text the price inputs start out with; unset and zero bounds show empty.
    pub fn field_text(bound: Option<f64>) -> String {
        match bound {
            Some(v) if v != 0.0 => format_decimal(v),
            _ => String::new(),
        }
    }

    /// Commits edited price fields once the input has settled.
    ///
    /// Returns `Ok(None)` when there is nothing to navigate to: every field
    /// is either empty or equal to the bound already applied. Otherwise the
    /// non-empty fields are encoded as a `PRICE_RANGE` filter over `params`.
    pub fn commit(
        &self,
        min_text: &str,
        max_text: &str,
        params: &QueryParams,
    ) -> Result<Option<QueryParams>, FilterError> {
        if unchanged(min_text, self.min) && unchanged(max_text, self.max) {
            return Ok(None);
        }

        let mut price = Map::new();
        if !min_text.is_empty() {
            price.insert("min".to_string(), Value::from(min_text));
        }
        if !max_text.is_empty() {
            price.insert("max".to_string(), Value::from(max_text));
        }

        let input = RawInput::from(json!({ "price": price }));
        encode_filter(FilterType::PriceRange, &input, params).map(Some)
    }
}

fn unchanged(text: &str, bound: Option<f64>) -> bool {
    text.is_empty() || bound.is_some_and(|b| text == format_decimal(b))
}

/// Reads a decimal the lenient way a browser `Number()` does: surrounding
/// whitespace is ignored and blank text is zero.
pub(crate) fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Shortest decimal text, without a trailing `.0` on whole numbers.
pub(crate) fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
