use async_trait::async_trait;
use super::todo::{Todo, TodoId, UpdateTodo};

/// Persistence port. Implementations report "no such row" through the
/// return value (`None` / `false`), never as an error.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    async fn init(&self) -> anyhow::Result<()>;
    async fn create(&self, task: String, priority: String) -> anyhow::Result<Todo>;
    async fn get(&self, id: TodoId) -> anyhow::Result<Option<Todo>>;
    async fn list(&self, completed: Option<bool>) -> anyhow::Result<Vec<Todo>>;
    async fn update(&self, id: TodoId, input: UpdateTodo) -> anyhow::Result<bool>;
    async fn complete_all(&self) -> anyhow::Result<u64>;
    async fn delete(&self, id: TodoId) -> anyhow::Result<bool>;
}
