//! Navigation links that add, remove, or clear filter selections.

use crate::query::{QueryParams, FILTER_KEYS, VARIANT_OPTION};

use super::{encode_filter, AppliedFilter, FilterError, FilterSpec, RawInput};

/// Link that applies one option of `filter` on top of `params`.
pub fn build_filter_link(
    filter: &FilterSpec,
    option_input: &RawInput,
    params: &QueryParams,
    path: &str,
) -> Result<String, FilterError> {
    let next = encode_filter(filter.filter_type, option_input, params)?;
    Ok(next.href(path))
}

/// Link that drops `applied` from `params`.
///
/// A `variantOption` chip removes every token containing its value and keeps
/// the remaining tokens in order. Any other key is deleted outright, taking
/// all of its values with it.
///
/// # Examples
///
/// - chip `variantOption=Color:Red` over `variantOption=Color:Red&variantOption=Size:M`
///   on `/x` → `/x?variantOption=Size%3AM`
pub fn remove_filter_link(applied: &AppliedFilter, params: &QueryParams, path: &str) -> String {
    let key = applied.url_param.key.as_str();
    let mut next = params.clone();

    if key == VARIANT_OPTION {
        let remaining: Vec<String> = next
            .get_all(VARIANT_OPTION)
            .into_iter()
            .filter(|token| !token.contains(applied.url_param.value.as_str()))
            .map(String::from)
            .collect();
        next.delete(VARIANT_OPTION);
        for token in remaining {
            next.append(VARIANT_OPTION, token);
        }
    } else {
        next.delete(key);
    }

    next.href(path)
}

/// Link with every filter selection removed; `sort` and foreign keys stay.
/// Returns the bare path when no parameters remain.
pub fn clear_filters_link(params: &QueryParams, path: &str) -> String {
    let mut next = params.clone();
    for key in FILTER_KEYS {
        next.delete(key);
    }
    if next.is_empty() {
        path.to_string()
    } else {
        next.href(path)
    }
}
