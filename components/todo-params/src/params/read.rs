//! `todo_read` parameters.

use super::{FromArgs, validate};
use crate::args::{ArgMap, Args};
use crate::domains::{ClosedValue, Format};
use crate::error::ParamError;
use crate::tools::constants::todo;
use serde::Serialize;

/// Narrows which todos `todo_read` returns. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ReadFilter {
    /// Status to match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Priority to match. Passed through unchecked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Only todos touched within this many days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<i64>,
}

/// Validated arguments of `todo_read`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReadParams {
    /// A single todo to read. Reads all matching todos when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Selection criteria.
    pub filter: ReadFilter,
    /// Defaults to `summary`.
    pub format: Format,
}

impl FromArgs for ReadParams {
    const TOOL: &'static str = todo::READ;

    fn from_args(args: &ArgMap) -> Result<Self, ParamError> {
        let args = Args::new(args);

        let id = args.optional_text("id");
        let filter = args
            .mapping("filter")
            .map(|filter| ReadFilter {
                status: filter.optional_text("status"),
                priority: filter.optional_text("priority"),
                days: filter.whole_number("days"),
            })
            .unwrap_or_default();
        let format = args.text("format").unwrap_or(Format::Summary.as_str());

        Ok(Self {
            id,
            filter,
            format: validate(format)?,
        })
    }
}
