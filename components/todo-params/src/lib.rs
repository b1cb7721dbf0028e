//! Todo Params - parameter admission for the todo MCP tool server.
//!
//! Every todo tool call carries a tool name and an untyped JSON arguments
//! object. This crate turns those arguments into typed, validated records
//! before any todo is read or written, and rejects malformed calls with a
//! stable message the caller sees verbatim.
//!
//! # Features
//!
//! - **Closed domains**: priority, todo type, read format and update
//!   operation are checked against one registry
//! - **Extractors**: one per tool, with fixed defaults and a fixed check order
//! - **Tool registry**: name-to-extractor routing for the host server
//! - **Catalog**: `tools/list` descriptors generated from the same registry
//! - **Error Handling**: structured errors using `thiserror`
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use todo_params::{ToolParams, ToolRegistry};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = ToolRegistry::with_todo_tools();
//! let params = registry.dispatch_value("todo_create", &json!({"task": "Write docs"}))?;
//!
//! if let ToolParams::Create(create) = params {
//!     assert_eq!(create.priority.to_string(), "high");
//! }
//!
//! let err = registry
//!     .dispatch_value("todo_update", &json!({"id": "todo-1", "operation": "delete"}))
//!     .unwrap_err();
//! assert!(err.to_string().starts_with("invalid operation 'delete'"));
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]

pub mod args;
pub mod config;
pub mod domains;
pub mod error;
pub mod params;
pub mod telemetry;
pub mod tools;

pub use args::{ArgMap, Args};
pub use config::{ServerConfig, ServerConfigBuilder};
pub use domains::{
    ClosedValue, Domain, Format, Operation, Priority, TodoType, is_valid_format,
    is_valid_operation, is_valid_priority, is_valid_todo_type,
};
pub use error::{ConfigError, ParamError, ToolError};
pub use params::{
    ArchiveParams, CreateInfo, CreateMultiParams, CreateParams, FromArgs, ReadFilter, ReadParams,
    SearchFilters, SearchParams, UpdateMetadata, UpdateParams, to_args,
};
pub use telemetry::init_logging;
pub use tools::{ToolDescriptor, ToolParams, ToolRegistry, todo_tool_catalog};

/// Version of the todo params crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
