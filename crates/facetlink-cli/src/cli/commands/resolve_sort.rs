//! `facetlink resolve-sort [<sort>]` – print `SORT_KEY reverse`.

use anyhow::Result;
use facetlink_core::sort::resolve_sort_str;

pub fn run_resolve_sort(sort: Option<&str>) -> Result<()> {
    let values = resolve_sort_str(sort);
    println!("{} {}", values.sort_key, values.reverse);
    Ok(())
}
