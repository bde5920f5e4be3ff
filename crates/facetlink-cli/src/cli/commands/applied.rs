//! `facetlink applied` – filters applied by a URL.

use anyhow::Result;
use facetlink_core::config::FacetlinkConfig;
use facetlink_core::filter::{collect_filters, remove_filter_link};
use facetlink_core::query::SORT;
use facetlink_core::sort::resolve_sort_str;
use serde_json::json;

use super::location;

pub fn run_applied(cfg: &FacetlinkConfig, url: Option<&str>, as_json: bool) -> Result<()> {
    let page = location(cfg, url);
    let collected = collect_filters(&page.params, &cfg.filter_labels());

    if as_json {
        let sort = resolve_sort_str(page.params.get(SORT));
        let variables = json!({
            "filters": collected.filters,
            "sortKey": sort.sort_key,
            "reverse": sort.reverse,
        });
        println!("{}", serde_json::to_string_pretty(&variables)?);
        return Ok(());
    }

    if collected.applied.is_empty() {
        println!("No filters applied.");
        return Ok(());
    }

    println!("{:<20} {:<16} {:<20} {}", "LABEL", "KEY", "VALUE", "REMOVE");
    for chip in &collected.applied {
        println!(
            "{:<20} {:<16} {:<20} {}",
            chip.label,
            chip.url_param.key,
            chip.url_param.value,
            remove_filter_link(chip, &page.params, &page.path)
        );
    }
    Ok(())
}
