//! `facetlink sort-menu` – menu entries with their links.

use anyhow::Result;
use facetlink_core::config::FacetlinkConfig;
use facetlink_core::sort::sort_menu;

use super::location;

pub fn run_sort_menu(cfg: &FacetlinkConfig, url: Option<&str>) -> Result<()> {
    let page = location(cfg, url);
    for item in sort_menu(&page.params, &page.path) {
        let marker = if item.active { "*" } else { " " };
        println!("{} {:<20} {}", marker, item.label, item.href);
    }
    Ok(())
}
