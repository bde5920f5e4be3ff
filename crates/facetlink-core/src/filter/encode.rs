//! Filter input → search parameters.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::query::{QueryParams, MAX_PRICE, MIN_PRICE, VARIANT_OPTION};

use super::price::format_decimal;
use super::{FilterError, FilterType, RawInput};

#[derive(Debug, Deserialize)]
struct PriceInput {
    price: PriceBounds,
}

#[derive(Debug, Deserialize)]
struct PriceBounds {
    #[serde(default)]
    min: Option<Value>,
    #[serde(default)]
    max: Option<Value>,
}

/// One entry of a LIST input object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListValue {
    Text(String),
    Flag(bool),
    Variant { name: String, value: String },
}

/// Returns `params` plus the effect of one filter selection.
///
/// - `PriceRange`: `{"price": {"min"?, "max"?}}`; each present bound
///   overwrites `minPrice`/`maxPrice`, a missing bound leaves the current
///   one alone.
/// - `List`: object of sub-keys. Strings and booleans overwrite their key;
///   `{"name", "value"}` objects become a `name:value` token appended to
///   `variantOption` unless already there.
///
/// Textual input is parsed as JSON first. On error nothing is returned and
/// `params` is untouched.
///
/// # Examples
///
/// - LIST `{"variantOption": {"name": "Size", "value": "M"}}` over
///   `variantOption=Color:Red` → `variantOption=Color:Red&variantOption=Size:M`
/// - PRICE_RANGE `{"price": {"min": "50"}}` over `maxPrice=200` →
///   `maxPrice=200&minPrice=50`
pub fn encode_filter(
    filter_type: FilterType,
    raw_input: &RawInput,
    params: &QueryParams,
) -> Result<QueryParams, FilterError> {
    let input = raw_input.to_value()?;
    let mut next = params.clone();

    match filter_type {
        FilterType::PriceRange => apply_price(&mut next, input)?,
        FilterType::List => apply_list(&mut next, input)?,
    }

    Ok(next)
}

fn apply_price(params: &mut QueryParams, input: Value) -> Result<(), FilterError> {
    let PriceInput { price } = serde_json::from_value(input)
        .map_err(|e| FilterError::malformed(FilterType::PriceRange, e.to_string()))?;

    // Both bounds are validated before either is written.
    let min = price.min.as_ref().map(bound_text).transpose()?.flatten();
    let max = price.max.as_ref().map(bound_text).transpose()?.flatten();

    if let Some(min) = min {
        params.set(MIN_PRICE, min);
    }
    if let Some(max) = max {
        params.set(MAX_PRICE, max);
    }
    Ok(())
}

/// Text of a price bound, `None` when the bound counts as unset
/// (`null`, `""`, `0`).
fn bound_text(bound: &Value) -> Result<Option<String>, FilterError> {
    match bound {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => match n.as_f64() {
            Some(v) if v == 0.0 => Ok(None),
            Some(v) => Ok(Some(format_decimal(v))),
            None => Ok(Some(n.to_string())),
        },
        other => Err(FilterError::malformed(
            FilterType::PriceRange,
            format!("price bound must be a string or number, got {other}"),
        )),
    }
}

fn apply_list(params: &mut QueryParams, input: Value) -> Result<(), FilterError> {
    let entries: Map<String, Value> = match input {
        Value::Object(map) => map,
        other => {
            return Err(FilterError::malformed(
                FilterType::List,
                format!("expected an object, got {other}"),
            ))
        }
    };

    let mut values = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let value: ListValue = serde_json::from_value(value).map_err(|_| {
            FilterError::malformed(
                FilterType::List,
                format!("unsupported value for `{key}`"),
            )
        })?;
        values.push((key, value));
    }

    for (key, value) in values {
        match value {
            ListValue::Text(text) => params.set(&key, text),
            ListValue::Flag(flag) => params.set(&key, flag.to_string()),
            ListValue::Variant { name, value } => {
                let token = format!("{name}:{value}");
                if !params.get_all(VARIANT_OPTION).contains(&token.as_str()) {
                    params.append(VARIANT_OPTION, token);
                } else {
                    tracing::trace!(%token, "variant option already applied");
                }
            }
        }
    }
    Ok(())
}
