//! `todo_create_multi` parameters: one multi-phase parent plus its phases.
//!
//! The whole shape is read before any value is validated, so a structural
//! problem in a late child is reported ahead of a bad priority on the parent.

use super::{FromArgs, closed};
use crate::args::{ArgMap, Args};
use crate::domains::{ClosedValue, Domain, Priority, TodoType};
use crate::error::ParamError;
use crate::tools::constants::todo;
use serde::Serialize;

/// One todo to create inside a `todo_create_multi` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateInfo {
    /// Title of the todo.
    pub task: String,
    /// Defaults to `high` for the parent and `medium` for children.
    pub priority: Priority,
    /// Defaults to `multi-phase` for the parent and `phase` for children.
    #[serde(rename = "type")]
    pub todo_type: TodoType,
}

/// Validated arguments of `todo_create_multi`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateMultiParams {
    /// The container todo.
    pub parent: CreateInfo,
    /// Phases in creation order. Never empty, never `multi-phase`.
    pub children: Vec<CreateInfo>,
}

/// A `CreateInfo` whose enum fields have not been checked yet.
struct Unchecked<'a> {
    task: &'a str,
    priority: &'a str,
    todo_type: &'a str,
}

impl<'a> Unchecked<'a> {
    fn read(args: Args<'a>, task: &'a str, priority: Priority, todo_type: TodoType) -> Self {
        Self {
            task,
            priority: args.text("priority").unwrap_or(priority.as_str()),
            todo_type: args.text("type").unwrap_or(todo_type.as_str()),
        }
    }
}

impl FromArgs for CreateMultiParams {
    const TOOL: &'static str = todo::CREATE_MULTI;

    fn from_args(args: &ArgMap) -> Result<Self, ParamError> {
        let args = Args::new(args);

        let parent_args = args.mapping("parent").ok_or(ParamError::MissingParent)?;
        let parent_task = parent_args
            .non_empty_text("task")
            .ok_or(ParamError::MissingParentTask)?;
        let parent = Unchecked::read(
            parent_args,
            parent_task,
            Priority::High,
            TodoType::MultiPhase,
        );

        let elements = args.sequence("children").ok_or(ParamError::MissingChildren)?;
        if elements.is_empty() {
            return Err(ParamError::NoChildren);
        }

        let mut unchecked = Vec::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            let child = Args::from_value(element).ok_or(ParamError::InvalidChild { index })?;
            let task = child
                .non_empty_text("task")
                .ok_or(ParamError::MissingChildTask { index })?;
            unchecked.push(Unchecked::read(
                child,
                task,
                Priority::Medium,
                TodoType::Phase,
            ));
        }

        let parent = CreateInfo {
            task: parent.task.to_owned(),
            priority: closed(parent.priority).ok_or_else(|| ParamError::InvalidParentValue {
                domain: Domain::Priority,
                value: parent.priority.to_owned(),
            })?,
            todo_type: closed(parent.todo_type).ok_or_else(|| {
                ParamError::InvalidParentValue {
                    domain: Domain::TodoType,
                    value: parent.todo_type.to_owned(),
                }
            })?,
        };

        let children = unchecked
            .into_iter()
            .enumerate()
            .map(|(index, child)| check_child(index, &child))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { parent, children })
    }
}

fn check_child(index: usize, child: &Unchecked<'_>) -> Result<CreateInfo, ParamError> {
    let invalid = |domain: Domain, value: &str| ParamError::InvalidChildValue {
        index,
        domain,
        value: value.to_owned(),
    };

    let priority: Priority =
        closed(child.priority).ok_or_else(|| invalid(Domain::Priority, child.priority))?;
    let todo_type: TodoType =
        closed(child.todo_type).ok_or_else(|| invalid(Domain::TodoType, child.todo_type))?;
    if todo_type == TodoType::MultiPhase {
        return Err(ParamError::MultiPhaseChild { index });
    }

    Ok(CreateInfo {
        task: child.task.to_owned(),
        priority,
        todo_type,
    })
}
