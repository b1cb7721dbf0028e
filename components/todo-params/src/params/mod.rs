//! Parameter records and their extractors, one module per tool.
//!
//! Each extractor reads the arguments in a fixed order and stops at the
//! first violation: required fields, then optional fields with defaults,
//! then enum membership and cross-field rules as listed per tool.

pub mod archive;
pub mod create;
pub mod create_multi;
pub mod read;
pub mod search;
pub mod update;

use crate::args::ArgMap;
use crate::domains::ClosedValue;
use crate::error::ParamError;
use serde::Serialize;
use serde_json::Value;

pub use archive::ArchiveParams;
pub use create::CreateParams;
pub use create_multi::{CreateInfo, CreateMultiParams};
pub use read::{ReadFilter, ReadParams};
pub use search::{DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT, SearchFilters, SearchParams};
pub use update::{UpdateMetadata, UpdateParams};

/// A parameter record that can be extracted from tool arguments.
pub trait FromArgs: Sized {
    /// Name of the tool whose arguments this record holds.
    const TOOL: &'static str;

    /// Extracts and validates the record.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParamError`] encountered.
    fn from_args(args: &ArgMap) -> Result<Self, ParamError>;
}

/// Writes a record back into an arguments mapping.
///
/// Unset optional fields are omitted, enum fields are written by wire name.
/// Extracting the result yields a record equal to the input.
#[must_use]
pub fn to_args<T: Serialize>(record: &T) -> ArgMap {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => map,
        _ => ArgMap::new(),
    }
}

/// Parses `value` as a member of `T`'s domain.
pub(crate) fn closed<T: ClosedValue>(value: &str) -> Option<T> {
    T::parse(value)
}

/// Parses a top-level enum argument, reporting the full allowed list.
pub(crate) fn validate<T: ClosedValue>(value: &str) -> Result<T, ParamError> {
    closed(value).ok_or_else(|| ParamError::invalid(T::DOMAIN, value))
}
