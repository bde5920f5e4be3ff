//! `facetlink remove-link` – link that drops an applied filter.

use anyhow::Result;
use facetlink_core::config::FacetlinkConfig;
use facetlink_core::filter::{remove_filter_link, AppliedFilter};

use super::location;

pub fn run_remove_link(
    cfg: &FacetlinkConfig,
    key: &str,
    value: &str,
    label: Option<&str>,
    url: Option<&str>,
) -> Result<()> {
    let page = location(cfg, url);
    let chip = AppliedFilter::new(label.unwrap_or(value), key, value);
    println!("{}", remove_filter_link(&chip, &page.params, &page.path));
    Ok(())
}
