//! Error types for parameter admission.
//!
//! The `Display` text of [`ParamError`] is returned to MCP callers verbatim
//! and is matched by clients and tests, so each message is fixed.

use crate::domains::{Domain, TodoType};
use thiserror::Error;

/// First violation found while extracting a tool's parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// A required top-level argument is absent, empty or not text.
    #[error("missing required parameter '{name}'")]
    MissingParameter {
        /// Argument name.
        name: &'static str,
    },

    /// `parent` is absent or not a mapping.
    #[error("parent is required")]
    MissingParent,

    /// `parent.task` is absent, empty or not text.
    #[error("parent.task is required")]
    MissingParentTask,

    /// `children` is absent or not a sequence.
    #[error("children array is required")]
    MissingChildren,

    /// `children` is an empty sequence.
    #[error("at least one child is required")]
    NoChildren,

    /// A `children` element is not a mapping.
    #[error("invalid child at index {index}")]
    InvalidChild {
        /// Position in `children`.
        index: usize,
    },

    /// A child has no usable `task`.
    #[error("children[{index}].task is required")]
    MissingChildTask {
        /// Position in `children`.
        index: usize,
    },

    /// A top-level enumerated argument is outside its domain.
    #[error("invalid {domain} '{value}', must be one of: {allowed}", allowed = .domain.allowed_list())]
    InvalidValue {
        /// Domain the value was checked against.
        domain: Domain,
        /// Rejected value.
        value: String,
    },

    /// An enumerated field of `parent` is outside its domain.
    #[error("invalid parent {domain} '{value}'")]
    InvalidParentValue {
        /// Domain the value was checked against.
        domain: Domain,
        /// Rejected value.
        value: String,
    },

    /// An enumerated field of a child is outside its domain.
    #[error("invalid {domain} '{value}' for child {index}")]
    InvalidChildValue {
        /// Position in `children`.
        index: usize,
        /// Domain the value was checked against.
        domain: Domain,
        /// Rejected value.
        value: String,
    },

    /// A child asked for the container type.
    #[error("child {index} cannot be of type 'multi-phase'")]
    MultiPhaseChild {
        /// Position in `children`.
        index: usize,
    },

    /// `metadata.priority` is set but outside the priority domain.
    #[error("invalid priority '{value}' in metadata")]
    InvalidMetadataPriority {
        /// Rejected value.
        value: String,
    },

    /// A hierarchical todo type was requested without `parent_id`.
    #[error("type '{todo_type}' requires parent_id to be specified")]
    ParentIdRequired {
        /// Requested type.
        todo_type: TodoType,
    },
}

impl ParamError {
    /// Shorthand for [`ParamError::MissingParameter`].
    #[must_use]
    pub fn missing(name: &'static str) -> Self {
        Self::MissingParameter { name }
    }

    /// Shorthand for [`ParamError::InvalidValue`].
    #[must_use]
    pub fn invalid(domain: Domain, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            domain,
            value: value.into(),
        }
    }
}

/// Errors raised by the tool registry while routing a call.
#[derive(Error, Debug)]
pub enum ToolError {
    /// No extractor is registered under this name.
    #[error("Tool '{name}' not found")]
    NotFound {
        /// Requested tool name.
        name: String,
    },

    /// The arguments payload is neither an object nor null.
    #[error("arguments for tool '{tool}' must be an object")]
    ArgumentsNotObject {
        /// Tool that was called.
        tool: String,
    },

    /// The extractor rejected the arguments. Displays the rejection as is.
    #[error("{source}")]
    InvalidArguments {
        /// Tool that was called.
        tool: String,
        /// Rejection reported by the extractor.
        source: ParamError,
    },
}

impl ToolError {
    /// Returns the extractor's rejection, if that is what this error is.
    #[must_use]
    pub fn param_error(&self) -> Option<&ParamError> {
        match self {
            Self::InvalidArguments { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Errors related to server configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A configuration value could not be used.
    #[error("Invalid configuration for '{key}': {value}")]
    InvalidConfiguration {
        /// The configuration key.
        key: String,
        /// The invalid value.
        value: String,
    },
}
