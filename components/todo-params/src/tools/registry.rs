//! Tool registry mapping tool names to parameter extractors.

use crate::args::ArgMap;
use crate::error::{ParamError, ToolError};
use crate::params::{
    ArchiveParams, CreateMultiParams, CreateParams, FromArgs, ReadParams, SearchParams,
    UpdateParams,
};
use serde_json::Value;
use std::collections::HashMap;

/// Function that turns raw arguments into a validated record.
pub type Extractor = fn(&ArgMap) -> Result<ToolParams, ParamError>;

/// Validated parameters of any todo tool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToolParams {
    /// `todo_create`.
    Create(CreateParams),
    /// `todo_create_multi`.
    CreateMulti(CreateMultiParams),
    /// `todo_read`.
    Read(ReadParams),
    /// `todo_update`.
    Update(UpdateParams),
    /// `todo_search`.
    Search(SearchParams),
    /// `todo_archive`.
    Archive(ArchiveParams),
}

impl ToolParams {
    /// Name of the tool these parameters belong to.
    #[must_use]
    pub fn tool_name(&self) -> &'static str {
        match self {
            ToolParams::Create(_) => CreateParams::TOOL,
            ToolParams::CreateMulti(_) => CreateMultiParams::TOOL,
            ToolParams::Read(_) => ReadParams::TOOL,
            ToolParams::Update(_) => UpdateParams::TOOL,
            ToolParams::Search(_) => SearchParams::TOOL,
            ToolParams::Archive(_) => ArchiveParams::TOOL,
        }
    }

    /// Writes the parameters back into an arguments mapping.
    #[must_use]
    pub fn to_args(&self) -> ArgMap {
        match self {
            ToolParams::Create(p) => crate::params::to_args(p),
            ToolParams::CreateMulti(p) => crate::params::to_args(p),
            ToolParams::Read(p) => crate::params::to_args(p),
            ToolParams::Update(p) => crate::params::to_args(p),
            ToolParams::Search(p) => crate::params::to_args(p),
            ToolParams::Archive(p) => crate::params::to_args(p),
        }
    }
}

impl From<CreateParams> for ToolParams {
    fn from(params: CreateParams) -> Self {
        ToolParams::Create(params)
    }
}

impl From<CreateMultiParams> for ToolParams {
    fn from(params: CreateMultiParams) -> Self {
        ToolParams::CreateMulti(params)
    }
}

impl From<ReadParams> for ToolParams {
    fn from(params: ReadParams) -> Self {
        ToolParams::Read(params)
    }
}

impl From<UpdateParams> for ToolParams {
    fn from(params: UpdateParams) -> Self {
        ToolParams::Update(params)
    }
}

impl From<SearchParams> for ToolParams {
    fn from(params: SearchParams) -> Self {
        ToolParams::Search(params)
    }
}

impl From<ArchiveParams> for ToolParams {
    fn from(params: ArchiveParams) -> Self {
        ToolParams::Archive(params)
    }
}

fn extract<T>(args: &ArgMap) -> Result<ToolParams, ParamError>
where
    T: FromArgs + Into<ToolParams>,
{
    T::from_args(args).map(Into::into)
}

/// Registry for looking up extractors by tool name.
///
/// Only read after setup; one instance can be shared by all request handlers.
pub struct ToolRegistry {
    extractors: HashMap<String, Extractor>,
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.available_tools())
            .finish()
    }
}

impl ToolRegistry {
    /// Creates a new empty tool registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    /// Creates a registry holding all six todo tools.
    #[must_use]
    pub fn with_todo_tools() -> Self {
        let mut registry = Self::new();
        registry.register_params::<CreateParams>();
        registry.register_params::<CreateMultiParams>();
        registry.register_params::<ReadParams>();
        registry.register_params::<UpdateParams>();
        registry.register_params::<SearchParams>();
        registry.register_params::<ArchiveParams>();
        registry
    }

    /// Registers an extractor, replacing any previous one under `name`.
    pub fn register(&mut self, name: impl Into<String>, extractor: Extractor) {
        self.extractors.insert(name.into(), extractor);
    }

    /// Registers the extractor of `T` under `T::TOOL`.
    pub fn register_params<T>(&mut self)
    where
        T: FromArgs + Into<ToolParams>,
    {
        self.register(T::TOOL, extract::<T>);
    }

    /// Returns the registered tool names, sorted.
    #[must_use]
    pub fn available_tools(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.extractors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Checks whether a tool is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.extractors.contains_key(name)
    }

    /// Validates `args` for the tool called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::NotFound`] for an unregistered tool and
    /// [`ToolError::InvalidArguments`] when the extractor rejects the call.
    pub fn dispatch(&self, name: &str, args: &ArgMap) -> Result<ToolParams, ToolError> {
        let extractor = self.lookup(name)?;
        Self::run(name, extractor, args)
    }

    /// Like [`dispatch`](Self::dispatch) for a raw `arguments` value.
    ///
    /// `null` is read as an empty mapping, since clients may omit arguments
    /// for tools with no required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::ArgumentsNotObject`] for any other non-object
    /// value, plus the errors of [`dispatch`](Self::dispatch).
    pub fn dispatch_value(&self, name: &str, args: &Value) -> Result<ToolParams, ToolError> {
        let extractor = self.lookup(name)?;
        match args {
            Value::Object(map) => Self::run(name, extractor, map),
            Value::Null => Self::run(name, extractor, &ArgMap::new()),
            _ => Err(ToolError::ArgumentsNotObject {
                tool: name.to_string(),
            }),
        }
    }

    fn lookup(&self, name: &str) -> Result<Extractor, ToolError> {
        self.extractors.get(name).copied().ok_or_else(|| {
            tracing::warn!(tool = name, "call to unknown tool");
            ToolError::NotFound {
                name: name.to_string(),
            }
        })
    }

    fn run(name: &str, extractor: Extractor, args: &ArgMap) -> Result<ToolParams, ToolError> {
        match extractor(args) {
            Ok(params) => {
                tracing::debug!(tool = name, "arguments admitted");
                Ok(params)
            }
            Err(source) => {
                tracing::debug!(tool = name, error = %source, "arguments rejected");
                Err(ToolError::InvalidArguments {
                    tool: name.to_string(),
                    source,
                })
            }
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::with_todo_tools()
    }
}
