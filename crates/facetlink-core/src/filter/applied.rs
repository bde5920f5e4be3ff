//! Recover catalog filters and applied-filter chips from a query string.

use serde::Serialize;

use crate::query::{
    QueryParams, AVAILABLE, MAX_PRICE, MIN_PRICE, PRODUCT_TYPE, PRODUCT_VENDOR, VARIANT_OPTION,
};

use super::price::{format_decimal, parse_decimal};
use super::AppliedFilter;

/// Filter variable forwarded to the catalog's product query.
///
/// Serializes to the catalog's `ProductFilter` input shape, e.g.
/// `{"available": true}` or `{"variantOption": {"name": "Size", "value": "M"}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductFilter {
    Available(bool),
    ProductVendor(String),
    ProductType(String),
    VariantOption(VariantOption),
    Price(PriceFilter),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantOption {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PriceFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// Display text used for chips that don't show the raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterLabels {
    pub in_stock: String,
    pub out_of_stock: String,
    pub currency_symbol: String,
}

impl Default for FilterLabels {
    fn default() -> Self {
        Self {
            in_stock: "In stock".to_string(),
            out_of_stock: "Out of stock".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

/// Result of [`collect_filters`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CollectedFilters {
    pub filters: Vec<ProductFilter>,
    pub applied: Vec<AppliedFilter>,
}

/// Walks `params` in order and builds the catalog filter variables together
/// with one chip per selection.
///
/// The price bounds are folded into a single trailing `price` filter since
/// the catalog does not accept them separately. A `variantOption` token is
/// split on its first `:`, so an option name that itself contains `:` comes
/// back with the remainder moved into the value. A token without a `:` is
/// dropped; unknown keys (including `sort`) are ignored.
pub fn collect_filters(params: &QueryParams, labels: &FilterLabels) -> CollectedFilters {
    let mut out = CollectedFilters::default();

    for (key, value) in params.iter() {
        if key == AVAILABLE {
            let in_stock = value == "true";
            out.filters.push(ProductFilter::Available(in_stock));
            let label = if in_stock {
                &labels.in_stock
            } else {
                &labels.out_of_stock
            };
            out.applied.push(AppliedFilter::new(label.as_str(), AVAILABLE, value));
        } else if key == PRODUCT_VENDOR || key == PRODUCT_TYPE {
            let filter = if key == PRODUCT_VENDOR {
                ProductFilter::ProductVendor(value.to_string())
            } else {
                ProductFilter::ProductType(value.to_string())
            };
            out.filters.push(filter);
            out.applied.push(AppliedFilter::new(value, key, value));
        } else if key.contains(VARIANT_OPTION) {
            let Some((name, option)) = value.split_once(':') else {
                tracing::debug!(%key, %value, "dropping variant option without `name:value` form");
                continue;
            };
            out.filters.push(ProductFilter::VariantOption(VariantOption {
                name: name.to_string(),
                value: option.to_string(),
            }));
            out.applied.push(AppliedFilter::new(option, key, value));
        }
    }

    if params.has(MIN_PRICE) || params.has(MAX_PRICE) {
        let mut price = PriceFilter::default();
        if let Some(raw) = params.get(MIN_PRICE) {
            let amount = parse_decimal(raw).unwrap_or(0.0);
            price.min = Some(amount);
            out.applied.push(AppliedFilter::new(
                format!("Min: {}{}", labels.currency_symbol, format_decimal(amount)),
                MIN_PRICE,
                raw,
            ));
        }
        if let Some(raw) = params.get(MAX_PRICE) {
            let amount = parse_decimal(raw).unwrap_or(0.0);
            price.max = Some(amount);
            out.applied.push(AppliedFilter::new(
                format!("Max: {}{}", labels.currency_symbol, format_decimal(amount)),
                MAX_PRICE,
                raw,
            ));
        }
        out.filters.push(ProductFilter::Price(price));
    }

    out
}

/// The chip matching a LIST option's label, if that option is applied.
pub fn find_applied_option<'a>(
    applied: &'a [AppliedFilter],
    option_label: &str,
) -> Option<&'a AppliedFilter> {
    applied.iter().find(|chip| chip.label == option_label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn availability_chips() {
        let params = QueryParams::parse("available=true");
        let collected = collect_filters(&params, &FilterLabels::default());
        assert_eq!(collected.filters, vec![ProductFilter::Available(true)]);
        assert_eq!(collected.applied[0].label, "In stock");

        let params = QueryParams::parse("available=false");
        let collected = collect_filters(&params, &FilterLabels::default());
        assert_eq!(collected.filters, vec![ProductFilter::Available(false)]);
        assert_eq!(collected.applied[0].label, "Out of stock");
    }

    #[test]
    fn vendor_type_and_variant_in_query_order() {
        let params = QueryParams::parse(
            "variantOption=Color%3ARed&productVendor=Acme&sort=newest&productType=Hat",
        );
        let collected = collect_filters(&params, &FilterLabels::default());
        let labels: Vec<&str> = collected.applied.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["Red", "Acme", "Hat"]);
        assert_eq!(collected.applied[0].url_param.value, "Color:Red");
        assert_eq!(collected.filters.len(), 3);
    }

    #[test]
    fn price_bounds_fold_into_one_filter() {
        let params = QueryParams::parse("maxPrice=200&productType=Hat&minPrice=abc");
        let collected = collect_filters(&params, &FilterLabels::default());
        assert_eq!(
            collected.filters.last(),
            Some(&ProductFilter::Price(PriceFilter {
                min: Some(0.0),
                max: Some(200.0),
            }))
        );
        let labels: Vec<&str> = collected.applied.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["Hat", "Min: $0", "Max: $200"]);
        assert_eq!(collected.applied[1].url_param.value, "abc");
    }

    #[test]
    fn malformed_variant_token_is_dropped() {
        let params = QueryParams::parse("variantOption=Red&productVendor=Acme");
        let collected = collect_filters(&params, &FilterLabels::default());
        assert_eq!(
            collected.filters,
            vec![ProductFilter::ProductVendor("Acme".to_string())]
        );
    }

    #[test]
    fn variant_token_splits_on_first_colon() {
        let params = QueryParams::parse("variantOption=Ratio%3A16%3A9");
        let collected = collect_filters(&params, &FilterLabels::default());
        assert_eq!(
            collected.filters,
            vec![ProductFilter::VariantOption(VariantOption {
                name: "Ratio".to_string(),
                value: "16:9".to_string(),
            })]
        );
        assert_eq!(collected.applied[0].label, "16:9");
        assert_eq!(collected.applied[0].url_param.value, "Ratio:16:9");
    }

    #[test]
    fn colon_in_option_name_moves_into_value() {
        let params = QueryParams::parse("variantOption=A%3AB%3AC");
        let collected = collect_filters(&params, &FilterLabels::default());
        assert_eq!(
            collected.filters,
            vec![ProductFilter::VariantOption(VariantOption {
                name: "A".to_string(),
                value: "B:C".to_string(),
            })]
        );
    }

    #[test]
    fn price_filter_only_when_a_bound_is_present() {
        let params = QueryParams::parse("productType=Hat&sort=newest");
        let collected = collect_filters(&params, &FilterLabels::default());
        assert!(!collected
            .filters
            .iter()
            .any(|f| matches!(f, ProductFilter::Price(_))));
    }

    #[test]
    fn product_filters_serialize_to_catalog_shape() {
        let filters = vec![
            ProductFilter::Available(true),
            ProductFilter::VariantOption(VariantOption {
                name: "Size".to_string(),
                value: "M".to_string(),
            }),
            ProductFilter::Price(PriceFilter {
                min: Some(5.0),
                max: None,
            }),
        ];
        assert_eq!(
            serde_json::to_value(&filters).unwrap(),
            json!([
                {"available": true},
                {"variantOption": {"name": "Size", "value": "M"}},
                {"price": {"min": 5.0}}
            ])
        );
    }

    #[test]
    fn finds_applied_option_by_label() {
        let applied = vec![AppliedFilter::new("Red", "variantOption", "Color:Red")];
        assert!(find_applied_option(&applied, "Red").is_some());
        assert!(find_applied_option(&applied, "Blue").is_none());
    }

    #[test]
    fn custom_labels() {
        let labels = FilterLabels {
            in_stock: "Available".to_string(),
            out_of_stock: "Sold out".to_string(),
            currency_symbol: "€".to_string(),
        };
        let params = QueryParams::parse("available=false&minPrice=15");
        let collected = collect_filters(&params, &labels);
        let chips: Vec<&str> = collected.applied.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(chips, vec!["Sold out", "Min: €15"]);
    }
}
