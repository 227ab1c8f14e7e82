use serde::{Deserialize, Serialize};

/// Priority given to items created without one.
pub const DEFAULT_PRIORITY: &str = "medium";

/// Store-assigned row id. Never reused once deleted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct TodoId(pub i64);

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { self.0.fmt(f) }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub task: String,
    pub completed: bool,
    pub priority: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTodo {
    pub task: Option<String>,
    pub priority: Option<String>,
}

/// Partial update. `None` keeps the stored value; `Some(false)` on
/// `completed` is an explicit write.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct UpdateTodo {
    pub task: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<String>,
}
