//! CLI parse tests.

use super::{Cli, CliCommand, FilterKind};
use clap::Parser;
use facetlink_core::sort::SortParam;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_filter_link() {
    match parse(&[
        "facetlink",
        "filter-link",
        "--type",
        "list",
        "--input",
        r#"{"productVendor":"Acme"}"#,
        "--url",
        "/collections/all?sort=newest",
    ]) {
        CliCommand::FilterLink {
            filter_type,
            input,
            url,
        } => {
            assert_eq!(filter_type, FilterKind::List);
            assert_eq!(input, r#"{"productVendor":"Acme"}"#);
            assert_eq!(url.as_deref(), Some("/collections/all?sort=newest"));
        }
        _ => panic!("expected FilterLink"),
    }
}

#[test]
fn cli_parse_filter_link_price_range() {
    match parse(&[
        "facetlink",
        "filter-link",
        "--type",
        "price-range",
        "--input",
        r#"{"price":{"min":"5"}}"#,
    ]) {
        CliCommand::FilterLink {
            filter_type, url, ..
        } => {
            assert_eq!(filter_type, FilterKind::PriceRange);
            assert!(url.is_none());
        }
        _ => panic!("expected FilterLink"),
    }
}

#[test]
fn cli_rejects_unknown_filter_type() {
    assert!(Cli::try_parse_from(["facetlink", "filter-link", "--type", "boolean", "--input", "{}"]).is_err());
}

#[test]
fn cli_parse_remove_link() {
    match parse(&[
        "facetlink",
        "remove-link",
        "--key",
        "variantOption",
        "--value",
        "Color:Red",
    ]) {
        CliCommand::RemoveLink {
            key,
            value,
            label,
            url,
        } => {
            assert_eq!(key, "variantOption");
            assert_eq!(value, "Color:Red");
            assert!(label.is_none());
            assert!(url.is_none());
        }
        _ => panic!("expected RemoveLink"),
    }
}

#[test]
fn cli_parse_remove_link_price_bound() {
    match parse(&["facetlink", "remove-link", "--key", "minPrice", "--value", "50"]) {
        CliCommand::RemoveLink { key, .. } => assert_eq!(key, "minPrice"),
        _ => panic!("expected RemoveLink"),
    }
}

#[test]
fn cli_remove_link_rejects_non_filter_key() {
    for key in ["sort", "utm_source", "variantoption"] {
        assert!(
            Cli::try_parse_from(["facetlink", "remove-link", "--key", key, "--value", "x"]).is_err(),
            "{key} should be rejected"
        );
    }
}

#[test]
fn cli_parse_sort_link() {
    match parse(&["facetlink", "sort-link", "price-low-high"]) {
        CliCommand::SortLink { sort, url } => {
            assert_eq!(sort, SortParam::PriceLowHigh);
            assert!(url.is_none());
        }
        _ => panic!("expected SortLink"),
    }
}

#[test]
fn cli_sort_link_rejects_unknown_sort() {
    assert!(Cli::try_parse_from(["facetlink", "sort-link", "cheapest"]).is_err());
}

#[test]
fn cli_parse_resolve_sort_accepts_anything() {
    match parse(&["facetlink", "resolve-sort", "garbage"]) {
        CliCommand::ResolveSort { sort } => assert_eq!(sort.as_deref(), Some("garbage")),
        _ => panic!("expected ResolveSort"),
    }
    match parse(&["facetlink", "resolve-sort"]) {
        CliCommand::ResolveSort { sort } => assert!(sort.is_none()),
        _ => panic!("expected ResolveSort"),
    }
}

#[test]
fn cli_parse_applied_json() {
    match parse(&["facetlink", "applied", "--url", "?available=true", "--json"]) {
        CliCommand::Applied { url, json } => {
            assert_eq!(url.as_deref(), Some("?available=true"));
            assert!(json);
        }
        _ => panic!("expected Applied"),
    }
}

#[test]
fn cli_parse_clear_and_menu() {
    assert!(matches!(
        parse(&["facetlink", "clear-link"]),
        CliCommand::ClearLink { url: None }
    ));
    assert!(matches!(
        parse(&["facetlink", "sort-menu", "--url", "/c"]),
        CliCommand::SortMenu { url: Some(_) }
    ));
}

#[test]
fn cli_parse_price_link_defaults_to_empty_fields() {
    match parse(&["facetlink", "price-link", "--max", "250"]) {
        CliCommand::PriceLink { min, max, url } => {
            assert_eq!(min, "");
            assert_eq!(max, "250");
            assert!(url.is_none());
        }
        _ => panic!("expected PriceLink"),
    }
}
