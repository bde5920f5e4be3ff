//! `facetlink filter-link` – link that applies a filter option.

use anyhow::{Context, Result};
use facetlink_core::config::FacetlinkConfig;
use facetlink_core::filter::{encode_filter, FilterType, RawInput};

use super::location;

pub fn run_filter_link(
    cfg: &FacetlinkConfig,
    filter_type: FilterType,
    input: &str,
    url: Option<&str>,
) -> Result<()> {
    let page = location(cfg, url);
    let next = encode_filter(filter_type, &RawInput::from(input), &page.params)
        .with_context(|| format!("encode {filter_type} filter input"))?;
    println!("{}", next.href(&page.path));
    Ok(())
}
