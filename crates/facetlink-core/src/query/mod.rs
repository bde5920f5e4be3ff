//! URL search parameters and navigation targets.
//!
//! [`QueryParams`] is an ordered multi-map with the same semantics as a
//! browser `URLSearchParams`; [`Location`] splits an incoming URL into the
//! path and its parameters.

mod location;
mod params;

pub use location::Location;
pub use params::QueryParams;

/// Filter keys the catalog understands.
pub const AVAILABLE: &str = "available";
pub const PRODUCT_VENDOR: &str = "productVendor";
pub const PRODUCT_TYPE: &str = "productType";
pub const VARIANT_OPTION: &str = "variantOption";
pub const MIN_PRICE: &str = "minPrice";
pub const MAX_PRICE: &str = "maxPrice";

/// Sort selection key.
pub const SORT: &str = "sort";

/// Every key that carries a filter selection (everything but `sort`).
pub const FILTER_KEYS: [&str; 6] = [
    AVAILABLE,
    PRODUCT_VENDOR,
    PRODUCT_TYPE,
    VARIANT_OPTION,
    MIN_PRICE,
    MAX_PRICE,
];
