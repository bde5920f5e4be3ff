use thiserror::Error;

use super::FilterType;

/// Why a filter input could not be turned into search parameters.
///
/// The caller's parameters are never modified when this is returned.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Textual input was not valid JSON.
    #[error("filter input is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Valid JSON, wrong shape for the declared filter type.
    #[error("malformed {filter_type} filter input: {reason}")]
    MalformedInput {
        filter_type: FilterType,
        reason: String,
    },
}

impl FilterError {
    pub(crate) fn malformed(filter_type: FilterType, reason: impl Into<String>) -> Self {
        FilterError::MalformedInput {
            filter_type,
            reason: reason.into(),
        }
    }
}
