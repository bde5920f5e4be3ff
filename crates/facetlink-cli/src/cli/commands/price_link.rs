//! `facetlink price-link --min <n> --max <n>` – commit edited price fields.

use anyhow::{Context, Result};
use facetlink_core::config::FacetlinkConfig;
use facetlink_core::filter::PriceRange;

use super::location;

pub fn run_price_link(
    cfg: &FacetlinkConfig,
    min: &str,
    max: &str,
    url: Option<&str>,
) -> Result<()> {
    let page = location(cfg, url);
    let current = PriceRange::from_params(&page.params);
    match current
        .commit(min.trim(), max.trim(), &page.params)
        .context("encode price range")?
    {
        Some(next) => println!("{}", next.href(&page.path)),
        None => tracing::info!("price range unchanged, no link"),
    }
    Ok(())
}
