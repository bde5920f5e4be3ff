//! `facetlink sort-link <sort>`

use anyhow::Result;
use facetlink_core::config::FacetlinkConfig;
use facetlink_core::sort::{build_sort_link, SortParam};

use super::location;

pub fn run_sort_link(cfg: &FacetlinkConfig, sort: SortParam, url: Option<&str>) -> Result<()> {
    let page = location(cfg, url);
    println!("{}", build_sort_link(sort, &page.params, &page.path));
    Ok(())
}
