//! Closed value domains accepted by the todo tools.
//!
//! Every enumerated field (priority, todo type, read format, update
//! operation) is checked against exactly one table here. Error messages and
//! tool schemas list their allowed values from the same table.
//!
//! Matching is exact: no case folding, no trimming, and the empty string is
//! never a member.

use serde::{Serialize, Serializer};
use std::fmt;

/// Identifies one of the closed value domains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Todo priority.
    Priority,
    /// Todo type.
    TodoType,
    /// Output format for `todo_read`.
    Format,
    /// Content operation for `todo_update`.
    Operation,
}

impl Domain {
    /// All domains, in registry order.
    pub const ALL: [Domain; 4] = [
        Domain::Priority,
        Domain::TodoType,
        Domain::Format,
        Domain::Operation,
    ];

    /// Returns the allowed values of this domain in canonical order.
    #[must_use]
    pub const fn values(self) -> &'static [&'static str] {
        match self {
            Domain::Priority => &Priority::NAMES,
            Domain::TodoType => &TodoType::NAMES,
            Domain::Format => &Format::NAMES,
            Domain::Operation => &Operation::NAMES,
        }
    }

    /// Returns the argument name used for this domain in error messages.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Domain::Priority => "priority",
            Domain::TodoType => "type",
            Domain::Format => "format",
            Domain::Operation => "operation",
        }
    }

    /// Checks whether `value` is a member of this domain.
    #[must_use]
    pub fn contains(self, value: &str) -> bool {
        self.values().contains(&value)
    }

    /// Returns the allowed values joined for display, e.g. `high, medium, low`.
    #[must_use]
    pub fn allowed_list(self) -> String {
        self.values().join(", ")
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

/// A value drawn from one of the closed domains.
pub trait ClosedValue: Copy + Sized + 'static {
    /// Domain this type belongs to.
    const DOMAIN: Domain;

    /// Every member, in the same order as [`Domain::values`].
    const VARIANTS: &'static [Self];

    /// Wire name of the value.
    fn as_str(self) -> &'static str;

    /// Parses an exact wire name.
    fn parse(value: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.as_str() == value)
    }
}

/// Priority of a todo.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Priority {
    /// Work on this first.
    #[default]
    High,
    /// Normal priority.
    Medium,
    /// Can wait.
    Low,
}

impl Priority {
    const NAMES: [&'static str; 3] = ["high", "medium", "low"];
}

impl ClosedValue for Priority {
    const DOMAIN: Domain = Domain::Priority;
    const VARIANTS: &'static [Self] = &[Priority::High, Priority::Medium, Priority::Low];

    fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// Kind of todo.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TodoType {
    /// New functionality.
    #[default]
    Feature,
    /// Defect fix.
    Bug,
    /// Restructuring without behavior change.
    Refactor,
    /// Investigation.
    Research,
    /// Container todo split into phases.
    MultiPhase,
    /// One phase of a multi-phase todo. Requires a parent.
    Phase,
    /// Child task of another todo. Requires a parent.
    Subtask,
}

impl TodoType {
    const NAMES: [&'static str; 7] = [
        "feature",
        "bug",
        "refactor",
        "research",
        "multi-phase",
        "phase",
        "subtask",
    ];

    /// Whether todos of this type must name a parent.
    #[must_use]
    pub const fn requires_parent(self) -> bool {
        matches!(self, TodoType::Phase | TodoType::Subtask)
    }
}

impl ClosedValue for TodoType {
    const DOMAIN: Domain = Domain::TodoType;
    const VARIANTS: &'static [Self] = &[
        TodoType::Feature,
        TodoType::Bug,
        TodoType::Refactor,
        TodoType::Research,
        TodoType::MultiPhase,
        TodoType::Phase,
        TodoType::Subtask,
    ];

    fn as_str(self) -> &'static str {
        match self {
            TodoType::Feature => "feature",
            TodoType::Bug => "bug",
            TodoType::Refactor => "refactor",
            TodoType::Research => "research",
            TodoType::MultiPhase => "multi-phase",
            TodoType::Phase => "phase",
            TodoType::Subtask => "subtask",
        }
    }
}

/// Output format requested from `todo_read`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// Whole todo documents.
    Full,
    /// Title, status and progress.
    #[default]
    Summary,
    /// One line per todo.
    List,
}

impl Format {
    const NAMES: [&'static str; 3] = ["full", "summary", "list"];
}

impl ClosedValue for Format {
    const DOMAIN: Domain = Domain::Format;
    const VARIANTS: &'static [Self] = &[Format::Full, Format::Summary, Format::List];

    fn as_str(self) -> &'static str {
        match self {
            Format::Full => "full",
            Format::Summary => "summary",
            Format::List => "list",
        }
    }
}

/// How `todo_update` applies its content to a section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Add content after the existing section body.
    #[default]
    Append,
    /// Replace the section body.
    Replace,
    /// Add content before the existing section body.
    Prepend,
    /// Flip a checklist item.
    Toggle,
}

impl Operation {
    const NAMES: [&'static str; 4] = ["append", "replace", "prepend", "toggle"];
}

impl ClosedValue for Operation {
    const DOMAIN: Domain = Domain::Operation;
    const VARIANTS: &'static [Self] = &[
        Operation::Append,
        Operation::Replace,
        Operation::Prepend,
        Operation::Toggle,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Operation::Append => "append",
            Operation::Replace => "replace",
            Operation::Prepend => "prepend",
            Operation::Toggle => "toggle",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TodoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Records serialize enum fields by wire name so they can be written back
// into an arguments mapping.
fn serialize_closed<T, S>(value: T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: ClosedValue,
    S: Serializer,
{
    serializer.serialize_str(value.as_str())
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_closed(*self, serializer)
    }
}

impl Serialize for TodoType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_closed(*self, serializer)
    }
}

impl Serialize for Format {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_closed(*self, serializer)
    }
}

impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_closed(*self, serializer)
    }
}

/// Checks whether `value` is a valid priority.
#[must_use]
pub fn is_valid_priority(value: &str) -> bool {
    Domain::Priority.contains(value)
}

/// Checks whether `value` is a valid todo type.
#[must_use]
pub fn is_valid_todo_type(value: &str) -> bool {
    Domain::TodoType.contains(value)
}

/// Checks whether `value` is a valid read format.
#[must_use]
pub fn is_valid_format(value: &str) -> bool {
    Domain::Format.contains(value)
}

/// Checks whether `value` is a valid update operation.
#[must_use]
pub fn is_valid_operation(value: &str) -> bool {
    Domain::Operation.contains(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates_accept_members() {
        assert!(is_valid_priority("medium"));
        assert!(is_valid_todo_type("multi-phase"));
        assert!(is_valid_format("list"));
        assert!(is_valid_operation("toggle"));
    }

    #[test]
    fn test_predicates_are_exact() {
        assert!(!is_valid_priority(""));
        assert!(!is_valid_priority("High"));
        assert!(!is_valid_priority(" high"));
        assert!(!is_valid_todo_type("multi_phase"));
        assert!(!is_valid_format("SUMMARY"));
        assert!(!is_valid_operation("delete"));
    }

    #[test]
    fn test_variants_match_registry() {
        fn names<T: ClosedValue>() -> Vec<&'static str> {
            T::VARIANTS.iter().map(|v| v.as_str()).collect()
        }

        assert_eq!(names::<Priority>(), Domain::Priority.values());
        assert_eq!(names::<TodoType>(), Domain::TodoType.values());
        assert_eq!(names::<Format>(), Domain::Format.values());
        assert_eq!(names::<Operation>(), Domain::Operation.values());
    }

    #[test]
    fn test_parse_round_trips_every_name() {
        for domain in Domain::ALL {
            for name in domain.values() {
                let parsed = match domain {
                    Domain::Priority => Priority::parse(name).map(ClosedValue::as_str),
                    Domain::TodoType => TodoType::parse(name).map(ClosedValue::as_str),
                    Domain::Format => Format::parse(name).map(ClosedValue::as_str),
                    Domain::Operation => Operation::parse(name).map(ClosedValue::as_str),
                };
                assert_eq!(parsed, Some(*name));
            }
        }
    }

    #[test]
    fn test_allowed_list() {
        assert_eq!(Domain::Priority.allowed_list(), "high, medium, low");
        assert_eq!(
            Domain::TodoType.allowed_list(),
            "feature, bug, refactor, research, multi-phase, phase, subtask"
        );
        assert_eq!(Domain::Format.allowed_list(), "full, summary, list");
        assert_eq!(
            Domain::Operation.allowed_list(),
            "append, replace, prepend, toggle"
        );
    }

    #[test]
    fn test_requires_parent() {
        assert!(TodoType::Phase.requires_parent());
        assert!(TodoType::Subtask.requires_parent());
        assert!(!TodoType::MultiPhase.requires_parent());
        assert!(!TodoType::Feature.requires_parent());
    }

    #[test]
    fn test_serializes_wire_name() {
        let value = serde_json::to_value(TodoType::MultiPhase).unwrap();
        assert_eq!(value, serde_json::json!("multi-phase"));
    }
}
