//! `todo_create` parameters.

use super::{FromArgs, validate};
use crate::args::{ArgMap, Args};
use crate::domains::{ClosedValue, Priority, TodoType};
use crate::error::ParamError;
use crate::tools::constants::todo;
use serde::Serialize;

/// Validated arguments of `todo_create`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateParams {
    /// Title of the new todo.
    pub task: String,
    /// Defaults to `high`.
    pub priority: Priority,
    /// Defaults to `feature`.
    #[serde(rename = "type")]
    pub todo_type: TodoType,
    /// Template to start the todo document from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Parent todo. Always set when `todo_type` is `phase` or `subtask`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl FromArgs for CreateParams {
    const TOOL: &'static str = todo::CREATE;

    fn from_args(args: &ArgMap) -> Result<Self, ParamError> {
        let args = Args::new(args);

        let task = args
            .non_empty_text("task")
            .ok_or_else(|| ParamError::missing("task"))?;
        let priority = args.text("priority").unwrap_or(Priority::High.as_str());
        let todo_type = args.text("type").unwrap_or(TodoType::Feature.as_str());
        let template = args.optional_text("template");
        let parent_id = args.optional_text("parent_id");

        let priority: Priority = validate(priority)?;
        let todo_type: TodoType = validate(todo_type)?;

        if todo_type.requires_parent() && parent_id.is_none() {
            return Err(ParamError::ParentIdRequired { todo_type });
        }

        Ok(Self {
            task: task.to_owned(),
            priority,
            todo_type,
            template,
            parent_id,
        })
    }
}
