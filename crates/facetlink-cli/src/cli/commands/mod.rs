//! CLI command handlers, one file per subcommand.

mod applied;
mod clear_link;
mod filter_link;
mod price_link;
mod remove_link;
mod resolve_sort;
mod sort_link;
mod sort_menu;

pub use applied::run_applied;
pub use clear_link::run_clear_link;
pub use filter_link::run_filter_link;
pub use price_link::run_price_link;
pub use remove_link::run_remove_link;
pub use resolve_sort::run_resolve_sort;
pub use sort_link::run_sort_link;
pub use sort_menu::run_sort_menu;

use facetlink_core::config::FacetlinkConfig;
use facetlink_core::query::Location;

/// Page the command operates on; the configured collection when `--url` is omitted.
fn location(cfg: &FacetlinkConfig, url: Option<&str>) -> Location {
    Location::parse(url.unwrap_or(""), &cfg.default_path)
}
