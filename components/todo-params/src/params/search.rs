//! `todo_search` parameters.

use super::FromArgs;
use crate::args::{ArgMap, Args};
use crate::error::ParamError;
use crate::tools::constants::todo;
use serde::Serialize;
use serde_json::Value;

/// Result count used when `limit` is not given.
pub const DEFAULT_SEARCH_LIMIT: i64 = 20;

/// Largest result count a caller may request. Larger values are clamped.
pub const MAX_SEARCH_LIMIT: i64 = 100;

/// Optional constraints on search hits.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchFilters {
    /// Status to match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Earliest date, as given by the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    /// Latest date, as given by the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

/// Validated arguments of `todo_search`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    /// Search text. May be empty.
    pub query: String,
    /// Areas to search. Empty means every area.
    pub scope: Vec<String>,
    /// Hit constraints.
    pub filters: SearchFilters,
    /// At most [`MAX_SEARCH_LIMIT`]. Zero and negative values are kept.
    pub limit: i64,
}

impl FromArgs for SearchParams {
    const TOOL: &'static str = todo::SEARCH;

    fn from_args(args: &ArgMap) -> Result<Self, ParamError> {
        let args = Args::new(args);

        let query = args
            .text("query")
            .ok_or_else(|| ParamError::missing("query"))?;
        let scope = args
            .sequence("scope")
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();
        let filters = args
            .mapping("filters")
            .map(|filters| SearchFilters {
                status: filters.optional_text("status"),
                date_from: filters.optional_text("date_from"),
                date_to: filters.optional_text("date_to"),
            })
            .unwrap_or_default();
        let limit = args
            .whole_number("limit")
            .unwrap_or(DEFAULT_SEARCH_LIMIT)
            .min(MAX_SEARCH_LIMIT);

        Ok(Self {
            query: query.to_owned(),
            scope,
            filters,
            limit,
        })
    }
}
