//! The advertised `tools/list` catalog and the dispatch registry must agree.

use anyhow::Result;
use serde_json::{Value, json};
use todo_params::{Domain, ServerConfig, ToolRegistry, todo_tool_catalog};

#[test]
fn test_every_listed_tool_is_dispatchable() {
    let registry = ToolRegistry::with_todo_tools();
    let catalog = todo_tool_catalog();

    let mut listed: Vec<&str> = catalog.iter().map(|tool| tool.name).collect();
    listed.sort_unstable();
    assert_eq!(listed, registry.available_tools());
}

#[test]
fn test_required_fields_are_enforced() -> Result<()> {
    let registry = ToolRegistry::with_todo_tools();

    for tool in todo_tool_catalog() {
        let required = tool.input_schema["required"].as_array().cloned().unwrap_or_default();
        if required.is_empty() {
            assert!(registry.dispatch_value(tool.name, &json!({}))?.tool_name() == tool.name);
        } else {
            assert!(
                registry.dispatch_value(tool.name, &json!({})).is_err(),
                "{} admitted a call without required fields",
                tool.name
            );
        }
    }
    Ok(())
}

#[test]
fn test_schema_enums_match_domains() {
    let catalog = todo_tool_catalog();
    let create = catalog
        .iter()
        .find(|tool| tool.name == "todo_create")
        .map(|tool| &tool.input_schema)
        .unwrap();

    assert_eq!(
        create["properties"]["priority"]["enum"],
        json!(Domain::Priority.values())
    );
    assert_eq!(
        create["properties"]["type"]["enum"],
        json!(Domain::TodoType.values())
    );
}

#[test]
fn test_catalog_serializes_for_tools_list() -> Result<()> {
    let listing = serde_json::to_value(todo_tool_catalog())?;
    let tools = listing.as_array().cloned().unwrap_or_default();

    assert_eq!(tools.len(), 6);
    for tool in tools {
        assert!(tool["name"].is_string());
        assert_eq!(tool["inputSchema"]["type"], Value::from("object"));
    }
    Ok(())
}

#[test]
fn test_default_server_config_is_valid() {
    let config = ServerConfig::default();
    assert!(config.validate().is_ok());
}
