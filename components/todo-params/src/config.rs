//! Configuration for the todo tool server host.
//!
//! Only host concerns live here. Admission rules (defaults, the search
//! limit cap) are fixed and not configurable.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Log levels accepted by [`ServerConfig::log_level`].
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Server configuration settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server name reported to MCP clients.
    #[serde(default = "default_name")]
    pub name: String,

    /// Default log level when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines instead of plain text.
    #[serde(default)]
    pub json_logs: bool,
}

impl ServerConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from environment variables.
    ///
    /// Environment variables are prefixed with `TODO_MCP_`.
    /// For example: `TODO_MCP_LOG_LEVEL=debug`
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an unusable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = lookup("TODO_MCP_NAME") {
            config.name = val;
        }

        if let Some(val) = lookup("TODO_MCP_LOG_LEVEL") {
            config.log_level = val.to_lowercase();
        }

        if let Some(val) = lookup("TODO_MCP_JSON_LOGS") {
            config.json_logs = match val.to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                _ => {
                    return Err(ConfigError::InvalidConfiguration {
                        key: "json_logs".to_string(),
                        value: val,
                    });
                }
            };
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty name or an unknown log level.
    pub fn validate(&self) -> Result<&Self, ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::InvalidConfiguration {
                key: "name".to_string(),
                value: "empty".to_string(),
            });
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::InvalidConfiguration {
                key: "log_level".to_string(),
                value: self.log_level.clone(),
            });
        }

        Ok(self)
    }

    /// Returns a builder for creating configuration.
    #[must_use]
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

/// Builder for constructing [`ServerConfig`].
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    name: Option<String>,
    log_level: Option<String>,
    json_logs: Option<bool>,
}

impl ServerConfigBuilder {
    /// Sets the server name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the default log level.
    #[must_use]
    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Sets JSON log output.
    #[must_use]
    pub fn json_logs(mut self, json: bool) -> Self {
        self.json_logs = Some(json);
        self
    }

    /// Builds the configuration, validating all values.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let mut config = ServerConfig::default();

        if let Some(v) = self.name {
            config.name = v;
        }
        if let Some(v) = self.log_level {
            config.log_level = v;
        }
        if let Some(v) = self.json_logs {
            config.json_logs = v;
        }

        config.validate()?;
        Ok(config)
    }
}

fn default_name() -> String {
    "todo-mcp".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.name, "todo-mcp");
        assert_eq!(config.log_level, "info");
        assert!(!config.json_logs);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ServerConfig::builder()
            .name("todos")
            .log_level("debug")
            .json_logs(true)
            .build()
            .unwrap();

        assert_eq!(config.name, "todos");
        assert_eq!(config.log_level, "debug");
        assert!(config.json_logs);
    }

    #[test]
    fn test_invalid_config() {
        assert!(ServerConfig::builder().log_level("loud").build().is_err());
        assert!(ServerConfig::builder().name("  ").build().is_err());
    }

    #[test]
    fn test_from_lookup() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("TODO_MCP_NAME", "work-todos"),
            ("TODO_MCP_LOG_LEVEL", "WARN"),
            ("TODO_MCP_JSON_LOGS", "true"),
        ]))
        .unwrap();

        assert_eq!(config.name, "work-todos");
        assert_eq!(config.log_level, "warn");
        assert!(config.json_logs);
    }

    #[test]
    fn test_from_lookup_empty_env() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_from_lookup_rejects_bad_flag() {
        let err = ServerConfig::from_lookup(lookup(&[("TODO_MCP_JSON_LOGS", "maybe")]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration for 'json_logs': maybe"
        );
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: ServerConfig = serde_json::from_str(r#"{"json_logs": true}"#).unwrap();
        assert_eq!(config.name, "todo-mcp");
        assert!(config.json_logs);
    }
}
