//! Entries of the "Sort by" menu.

use crate::query::QueryParams;

use super::{build_sort_link, SortParam};

/// Menu order and labels. `featured` is accepted from URLs but not offered.
pub const MENU_ENTRIES: [(SortParam, &str); 4] = [
    (SortParam::Newest, "Date, new to old"),
    (SortParam::PriceLowHigh, "Price, low to high"),
    (SortParam::PriceHighLow, "Price, high to low"),
    (SortParam::BestSelling, "Best Selling"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortMenuItem {
    pub label: &'static str,
    pub key: SortParam,
    pub href: String,
    /// The entry matches the current `sort` parameter.
    pub active: bool,
}

pub fn sort_menu(params: &QueryParams, path: &str) -> Vec<SortMenuItem> {
    let current = SortParam::from_params(params);
    MENU_ENTRIES
        .iter()
        .map(|&(key, label)| SortMenuItem {
            label,
            key,
            href: build_sort_link(key, params, path),
            active: current == Some(key),
        })
        .collect()
}
