//! Tool descriptors advertised through MCP `tools/list`.
//!
//! Enum-valued properties are generated from the domain registry, so the
//! schema a client sees always matches what the extractors accept.

use crate::domains::{ClosedValue, Domain, Format, Operation, Priority, TodoType};
use crate::params::{DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT};
use crate::tools::constants::todo;
use serde::Serialize;
use serde_json::{Value, json};

/// One entry of the `tools/list` response.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ToolDescriptor {
    /// Tool name.
    pub name: &'static str,
    /// Human-readable summary.
    pub description: &'static str,
    /// JSON schema of the arguments object.
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

fn enum_property(domain: Domain, description: &str, default: Option<&str>) -> Value {
    let mut property = json!({
        "type": "string",
        "enum": domain.values(),
        "description": description,
    });
    if let (Some(default), Some(object)) = (default, property.as_object_mut()) {
        object.insert("default".to_string(), Value::from(default));
    }
    property
}

fn todo_info_schema(priority: Priority, todo_type: TodoType) -> Value {
    json!({
        "type": "object",
        "properties": {
            "task": {"type": "string", "description": "Todo title"},
            "priority": enum_property(Domain::Priority, "Todo priority", Some(priority.as_str())),
            "type": enum_property(Domain::TodoType, "Todo type", Some(todo_type.as_str())),
        },
        "required": ["task"],
    })
}

fn create() -> ToolDescriptor {
    ToolDescriptor {
        name: todo::CREATE,
        description: "Create a todo. Phases and subtasks must name their parent.",
        input_schema: json!({
            "type": "object",
            "properties": {
                "task": {"type": "string", "description": "Todo title"},
                "priority": enum_property(Domain::Priority, "Todo priority", Some(Priority::High.as_str())),
                "type": enum_property(Domain::TodoType, "Todo type", Some(TodoType::Feature.as_str())),
                "template": {"type": "string", "description": "Template to start from"},
                "parent_id": {"type": "string", "description": "Parent todo, required for phase and subtask"},
            },
            "required": ["task"],
        }),
    }
}

fn create_multi() -> ToolDescriptor {
    ToolDescriptor {
        name: todo::CREATE_MULTI,
        description: "Create a multi-phase todo and its phases in one call.",
        input_schema: json!({
            "type": "object",
            "properties": {
                "parent": todo_info_schema(Priority::High, TodoType::MultiPhase),
                "children": {
                    "type": "array",
                    "minItems": 1,
                    "items": todo_info_schema(Priority::Medium, TodoType::Phase),
                },
            },
            "required": ["parent", "children"],
        }),
    }
}

fn read() -> ToolDescriptor {
    ToolDescriptor {
        name: todo::READ,
        description: "Read one todo by id, or list todos matching a filter.",
        input_schema: json!({
            "type": "object",
            "properties": {
                "id": {"type": "string", "description": "Todo to read"},
                "filter": {
                    "type": "object",
                    "properties": {
                        "status": {"type": "string"},
                        "priority": {"type": "string"},
                        "days": {"type": "integer", "description": "Touched within this many days"},
                    },
                },
                "format": enum_property(Domain::Format, "Output format", Some(Format::Summary.as_str())),
            },
        }),
    }
}

fn update() -> ToolDescriptor {
    ToolDescriptor {
        name: todo::UPDATE,
        description: "Change a section of a todo or its metadata.",
        input_schema: json!({
            "type": "object",
            "properties": {
                "id": {"type": "string", "description": "Todo to update"},
                "section": {"type": "string", "description": "Section to change"},
                "operation": enum_property(Domain::Operation, "How content is applied", Some(Operation::Append.as_str())),
                "content": {"type": "string"},
                "metadata": {
                    "type": "object",
                    "properties": {
                        "status": {"type": "string"},
                        "priority": enum_property(Domain::Priority, "New priority", None),
                        "current_test": {"type": "string"},
                    },
                },
            },
            "required": ["id"],
        }),
    }
}

fn search() -> ToolDescriptor {
    ToolDescriptor {
        name: todo::SEARCH,
        description: "Search todos by text.",
        input_schema: json!({
            "type": "object",
            "properties": {
                "query": {"type": "string", "description": "Search text"},
                "scope": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Areas to search; empty searches everything",
                },
                "filters": {
                    "type": "object",
                    "properties": {
                        "status": {"type": "string"},
                        "date_from": {"type": "string"},
                        "date_to": {"type": "string"},
                    },
                },
                "limit": {
                    "type": "integer",
                    "default": DEFAULT_SEARCH_LIMIT,
                    "maximum": MAX_SEARCH_LIMIT,
                },
            },
            "required": ["query"],
        }),
    }
}

fn archive() -> ToolDescriptor {
    ToolDescriptor {
        name: todo::ARCHIVE,
        description: "Move a todo to the archive.",
        input_schema: json!({
            "type": "object",
            "properties": {
                "id": {"type": "string", "description": "Todo to archive"},
                "quarter": {"type": "string", "description": "Archive bucket override"},
            },
            "required": ["id"],
        }),
    }
}

/// Descriptors for every todo tool, in registration order.
#[must_use]
pub fn todo_tool_catalog() -> Vec<ToolDescriptor> {
    vec![create(), create_multi(), read(), update(), search(), archive()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_names() {
        let names: Vec<_> = todo_tool_catalog().iter().map(|tool| tool.name).collect();
        assert_eq!(names, todo::ALL);
    }

    #[test]
    fn test_enum_values_come_from_registry() {
        let catalog = todo_tool_catalog();
        let create = &catalog[0].input_schema;
        assert_eq!(
            create["properties"]["type"]["enum"],
            json!(Domain::TodoType.values())
        );
        assert_eq!(create["properties"]["priority"]["default"], json!("high"));

        let update = &catalog[3].input_schema;
        assert_eq!(
            update["properties"]["operation"]["enum"],
            json!(["append", "replace", "prepend", "toggle"])
        );
        assert!(update["properties"]["metadata"]["properties"]["priority"]
            .get("default")
            .is_none());
    }

    #[test]
    fn test_child_defaults() {
        let catalog = todo_tool_catalog();
        let items = &catalog[1].input_schema["properties"]["children"]["items"];
        assert_eq!(items["properties"]["priority"]["default"], json!("medium"));
        assert_eq!(items["properties"]["type"]["default"], json!("phase"));
    }

    #[test]
    fn test_serializes_mcp_shape() {
        let value = serde_json::to_value(&todo_tool_catalog()[5]).unwrap();
        assert_eq!(value["name"], json!("todo_archive"));
        assert_eq!(value["inputSchema"]["required"], json!(["id"]));
    }
}
