//! `todo_archive` parameters.

use super::FromArgs;
use crate::args::{ArgMap, Args};
use crate::error::ParamError;
use crate::tools::constants::todo;
use serde::Serialize;

/// Validated arguments of `todo_archive`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArchiveParams {
    /// Todo to archive.
    pub id: String,
    /// Archive bucket override, e.g. `2024-Q3`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quarter: Option<String>,
}

impl FromArgs for ArchiveParams {
    const TOOL: &'static str = todo::ARCHIVE;

    fn from_args(args: &ArgMap) -> Result<Self, ParamError> {
        let args = Args::new(args);

        let id = args
            .non_empty_text("id")
            .ok_or_else(|| ParamError::missing("id"))?;

        Ok(Self {
            id: id.to_owned(),
            quarter: args.optional_text("quarter"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::obj;
    use serde_json::json;

    #[test]
    fn test_archive() {
        let params =
            ArchiveParams::from_args(&obj(json!({"id": "todo-9", "quarter": "2024-Q3"}))).unwrap();
        assert_eq!(params.id, "todo-9");
        assert_eq!(params.quarter.as_deref(), Some("2024-Q3"));
    }

    #[test]
    fn test_missing_id() {
        let err = ArchiveParams::from_args(&obj(json!({"quarter": "2024-Q3"}))).unwrap_err();
        assert_eq!(err, ParamError::missing("id"));
    }
}
