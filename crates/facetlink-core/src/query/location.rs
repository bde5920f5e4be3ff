//! Split a navigation target into path and query.

use super::QueryParams;

/// Current page: path plus its parsed search parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub params: QueryParams,
}

impl Location {
    /// Parses `input` as an absolute URL, a `path?query` pair, or a bare
    /// `?query`. Fragments are discarded. When no path is given,
    /// `default_path` is used.
    ///
    /// # Examples
    ///
    /// - `"https://shop.example/collections/all?sort=newest"` → `/collections/all`, `sort=newest`
    /// - `"/collections/tees?available=true"` → `/collections/tees`, `available=true`
    /// - `"?productType=Hat"` → `default_path`, `productType=Hat`
    ///
    /// Only inputs with a scheme are read as URLs. A scheme-less host such as
    /// `"localhost:3000/collections/all"` has no path of its own, so the
    /// whole text before `?` is kept as the path.
    pub fn parse(input: &str, default_path: &str) -> Self {
        if let Ok(url) = url::Url::parse(input) {
            if !url.cannot_be_a_base() {
                return Self {
                    path: url.path().to_string(),
                    params: QueryParams::parse(url.query().unwrap_or("")),
                };
            }
        }

        let without_fragment = input.split('#').next().unwrap_or("");
        let (path, query) = without_fragment
            .split_once('?')
            .unwrap_or((without_fragment, ""));
        let path = if path.is_empty() { default_path } else { path };

        Self {
            path: path.to_string(),
            params: QueryParams::parse(query),
        }
    }
}
