//! Host-side tool surface: names, registry and `tools/list` catalog.

pub mod catalog;
pub mod constants;
pub mod registry;

pub use catalog::{ToolDescriptor, todo_tool_catalog};
pub use registry::{Extractor, ToolParams, ToolRegistry};
