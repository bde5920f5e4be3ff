//! Sort selection: URL value → catalog sort key and direction.

mod menu;

pub use menu::{sort_menu, SortMenuItem, MENU_ENTRIES};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::query::{QueryParams, SORT};

/// Sort values accepted in the `sort` search parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortParam {
    PriceLowHigh,
    PriceHighLow,
    BestSelling,
    Newest,
    Featured,
}

impl SortParam {
    pub const ALL: [SortParam; 5] = [
        SortParam::PriceLowHigh,
        SortParam::PriceHighLow,
        SortParam::BestSelling,
        SortParam::Newest,
        SortParam::Featured,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortParam::PriceLowHigh => "price-low-high",
            SortParam::PriceHighLow => "price-high-low",
            SortParam::BestSelling => "best-selling",
            SortParam::Newest => "newest",
            SortParam::Featured => "featured",
        }
    }

    /// Current selection in `params`, if it is one we know.
    pub fn from_params(params: &QueryParams) -> Option<Self> {
        params.get(SORT).and_then(|raw| raw.parse().ok())
    }
}

impl fmt::Display for SortParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `SortParam::from_str` for values outside the enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort `{0}`")]
pub struct UnknownSortParam(pub String);

impl FromStr for SortParam {
    type Err = UnknownSortParam;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortParam::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownSortParam(s.to_string()))
    }
}

/// Catalog-side sort field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortKey {
    Price,
    BestSelling,
    Created,
    Manual,
    Relevance,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Price => "PRICE",
            SortKey::BestSelling => "BEST_SELLING",
            SortKey::Created => "CREATED",
            SortKey::Manual => "MANUAL",
            SortKey::Relevance => "RELEVANCE",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort variables forwarded to the catalog query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortValues {
    pub sort_key: SortKey,
    pub reverse: bool,
}

impl Default for SortValues {
    fn default() -> Self {
        Self {
            sort_key: SortKey::Relevance,
            reverse: false,
        }
    }
}

/// Maps a sort selection to catalog sort variables. Never fails: no
/// selection resolves to `RELEVANCE`, ascending.
pub fn resolve_sort(param: Option<SortParam>) -> SortValues {
    let (sort_key, reverse) = match param {
        Some(SortParam::PriceHighLow) => (SortKey::Price, true),
        Some(SortParam::PriceLowHigh) => (SortKey::Price, false),
        Some(SortParam::BestSelling) => (SortKey::BestSelling, false),
        Some(SortParam::Newest) => (SortKey::Created, true),
        Some(SortParam::Featured) => (SortKey::Manual, false),
        None => return SortValues::default(),
    };
    SortValues { sort_key, reverse }
}

/// Same as [`resolve_sort`] for the raw `sort` value; unknown text falls back
/// to the default.
pub fn resolve_sort_str(raw: Option<&str>) -> SortValues {
    let param = raw.and_then(|s| match s.parse::<SortParam>() {
        Ok(param) => Some(param),
        Err(e) => {
            tracing::debug!("{e}, using default sort");
            None
        }
    });
    resolve_sort(param)
}

/// Link that switches the sort, keeping every other parameter.
pub fn build_sort_link(sort: SortParam, params: &QueryParams, path: &str) -> String {
    let mut next = params.clone();
    next.set(SORT, sort.as_str());
    next.href(path)
}
