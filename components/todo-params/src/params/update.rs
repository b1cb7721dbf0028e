//! `todo_update` parameters.

use super::{FromArgs, closed, validate};
use crate::args::{ArgMap, Args};
use crate::domains::{ClosedValue, Operation, Priority};
use crate::error::ParamError;
use crate::tools::constants::todo;
use serde::Serialize;

/// Front-matter changes carried by `todo_update`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpdateMetadata {
    /// New status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// New priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Test currently being worked on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_test: Option<String>,
}

/// Validated arguments of `todo_update`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UpdateParams {
    /// Todo to update.
    pub id: String,
    /// Section the content applies to. Free-form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Defaults to `append`.
    pub operation: Operation,
    /// Content to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Metadata changes.
    pub metadata: UpdateMetadata,
}

impl FromArgs for UpdateParams {
    const TOOL: &'static str = todo::UPDATE;

    fn from_args(args: &ArgMap) -> Result<Self, ParamError> {
        let args = Args::new(args);

        let id = args
            .non_empty_text("id")
            .ok_or_else(|| ParamError::missing("id"))?;
        let section = args.optional_text("section");
        let operation: Operation =
            validate(args.text("operation").unwrap_or(Operation::Append.as_str()))?;
        let content = args.optional_text("content");

        let mut metadata = UpdateMetadata::default();
        if let Some(meta) = args.mapping("metadata") {
            metadata.status = meta.optional_text("status");
            metadata.current_test = meta.optional_text("current_test");
            if let Some(priority) = meta.non_empty_text("priority") {
                let parsed: Priority = closed(priority).ok_or_else(|| {
                    ParamError::InvalidMetadataPriority {
                        value: priority.to_owned(),
                    }
                })?;
                metadata.priority = Some(parsed);
            }
        }

        Ok(Self {
            id: id.to_owned(),
            section,
            operation,
            content,
            metadata,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::obj;
    use serde_json::json;

    fn extract(value: serde_json::Value) -> Result<UpdateParams, ParamError> {
        UpdateParams::from_args(&obj(value))
    }

    #[test]
    fn test_defaults() {
        let params = extract(json!({"id": "todo-123"})).unwrap();
        assert_eq!(
            params,
            UpdateParams {
                id: "todo-123".to_string(),
                section: None,
                operation: Operation::Append,
                content: None,
                metadata: UpdateMetadata::default(),
            }
        );
    }

    #[test]
    fn test_missing_id() {
        for args in [json!({}), json!({"id": ""}), json!({"id": ["todo-1"]})] {
            assert_eq!(
                extract(args).unwrap_err().to_string(),
                "missing required parameter 'id'"
            );
        }
    }

    #[test]
    fn test_invalid_operation() {
        let err = extract(json!({"id": "todo-123", "operation": "delete"})).unwrap_err();
        assert!(err.to_string().starts_with("invalid operation 'delete'"));
    }

    #[test]
    fn test_free_form_section() {
        let params = extract(json!({
            "id": "todo-1",
            "section": "Anything Goes",
            "operation": "replace",
            "content": "- [ ] step",
        }))
        .unwrap();

        assert_eq!(params.section.as_deref(), Some("Anything Goes"));
        assert_eq!(params.operation, Operation::Replace);
        assert_eq!(params.content.as_deref(), Some("- [ ] step"));
    }

    #[test]
    fn test_metadata() {
        let params = extract(json!({
            "id": "todo-1",
            "metadata": {"status": "in_progress", "priority": "low", "current_test": "test_login"},
        }))
        .unwrap();

        assert_eq!(
            params.metadata,
            UpdateMetadata {
                status: Some("in_progress".to_string()),
                priority: Some(Priority::Low),
                current_test: Some("test_login".to_string()),
            }
        );
    }

    #[test]
    fn test_empty_metadata_priority_skips_validation() {
        let params = extract(json!({"id": "todo-1", "metadata": {"priority": ""}})).unwrap();
        assert_eq!(params.metadata.priority, None);
    }

    #[test]
    fn test_invalid_metadata_priority() {
        let err = extract(json!({"id": "todo-1", "metadata": {"priority": "HIGH"}})).unwrap_err();
        assert_eq!(err.to_string(), "invalid priority 'HIGH' in metadata");
    }

    #[test]
    fn test_operation_checked_before_metadata() {
        let err = extract(json!({
            "id": "todo-1",
            "operation": "delete",
            "metadata": {"priority": "HIGH"},
        }))
        .unwrap_err();
        assert!(err.to_string().starts_with("invalid operation"));
    }
}
