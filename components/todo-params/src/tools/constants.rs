//! Tool name constants for the todo server.
//!
//! Using constants prevents typos and makes refactoring easier.
//! All tool names should be defined here and imported where needed.

/// Tool names for todo operations.
pub mod todo {
    /// Create one todo.
    pub const CREATE: &str = "todo_create";

    /// Create a multi-phase todo together with its phases.
    pub const CREATE_MULTI: &str = "todo_create_multi";

    /// Read one todo or a filtered list.
    pub const READ: &str = "todo_read";

    /// Change a todo's content or metadata.
    pub const UPDATE: &str = "todo_update";

    /// Full-text search over todos.
    pub const SEARCH: &str = "todo_search";

    /// Move a todo to the archive.
    pub const ARCHIVE: &str = "todo_archive";

    /// Every todo tool, in registration order.
    pub const ALL: [&str; 6] = [CREATE, CREATE_MULTI, READ, UPDATE, SEARCH, ARCHIVE];
}
