//! `facetlink clear-link` – the "Clear All" target.

use anyhow::Result;
use facetlink_core::config::FacetlinkConfig;
use facetlink_core::filter::clear_filters_link;

use super::location;

pub fn run_clear_link(cfg: &FacetlinkConfig, url: Option<&str>) -> Result<()> {
    let page = location(cfg, url);
    println!("{}", clear_filters_link(&page.params, &page.path));
    Ok(())
}
