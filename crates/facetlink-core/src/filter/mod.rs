//! Collection filter codec.
//!
//! Translates filter selections coming from the catalog (`FilterSpec`
//! option inputs) into URL search parameters, builds the links that add or
//! remove a selection, and recovers the applied filters from an incoming
//! query string. Every operation clones the caller's [`QueryParams`] before
//! writing.
//!
//! [`QueryParams`]: crate::query::QueryParams

mod applied;
mod encode;
mod error;
mod link;
mod price;
mod types;

pub use applied::{
    collect_filters, find_applied_option, CollectedFilters, FilterLabels, PriceFilter,
    ProductFilter, VariantOption,
};
pub use encode::encode_filter;
pub use error::FilterError;
pub use link::{build_filter_link, clear_filters_link, remove_filter_link};
pub use price::PriceRange;
pub use types::{AppliedFilter, FilterSpec, FilterType, FilterValue, RawInput, UrlParam};
