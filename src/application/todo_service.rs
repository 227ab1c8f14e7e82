use crate::domain::error::{TodoError, TodoResult};
use crate::domain::repository::TodoRepository;
use crate::domain::todo::{CreateTodo, DEFAULT_PRIORITY, Todo, TodoId, UpdateTodo};
use async_trait::async_trait;

pub const TASK_REQUIRED: &str = "Task field is required.";

#[async_trait]
pub trait TodoService: Send + Sync + 'static {
    async fn create(&self, input: CreateTodo) -> TodoResult<Todo>;
    async fn get(&self, id: TodoId) -> TodoResult<Todo>;
    async fn list(&self, completed: Option<bool>) -> TodoResult<Vec<Todo>>;
    async fn update(&self, id: TodoId, input: UpdateTodo) -> TodoResult<()>;
    async fn complete_all(&self) -> TodoResult<u64>;
    async fn delete(&self, id: TodoId) -> TodoResult<()>;
}

#[derive(Clone)]
pub struct TodoServiceImpl<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoServiceImpl<R> {
    pub fn new(repo: R) -> Self { Self { repo } }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[async_trait]
impl<R: TodoRepository> TodoService for TodoServiceImpl<R> {
    async fn create(&self, input: CreateTodo) -> TodoResult<Todo> {
        let task = non_empty(input.task).ok_or_else(|| TodoError::Validation(TASK_REQUIRED.into()))?;
        let priority = non_empty(input.priority).unwrap_or_else(|| DEFAULT_PRIORITY.to_string());
        let todo = self.repo.create(task, priority).await?;
        tracing::info!(id = %todo.id, "todo created");
        Ok(todo)
    }

    async fn get(&self, id: TodoId) -> TodoResult<Todo> {
        self.repo.get(id).await?.ok_or(TodoError::NotFound)
    }

    async fn list(&self, completed: Option<bool>) -> TodoResult<Vec<Todo>> {
        Ok(self.repo.list(completed).await?)
    }

    async fn update(&self, id: TodoId, input: UpdateTodo) -> TodoResult<()> {
        // A blank task would break the non-empty invariant; treat it as not given.
        let input = UpdateTodo { task: non_empty(input.task), ..input };
        if !self.repo.update(id, input).await? {
            return Err(TodoError::NotFound);
        }
        tracing::debug!(%id, "todo updated");
        Ok(())
    }

    async fn complete_all(&self) -> TodoResult<u64> {
        let affected = self.repo.complete_all().await?;
        tracing::info!(affected, "all todos marked completed");
        Ok(affected)
    }

    async fn delete(&self, id: TodoId) -> TodoResult<()> {
        if !self.repo.delete(id).await? {
            return Err(TodoError::NotFound);
        }
        tracing::info!(%id, "todo deleted");
        Ok(())
    }
}
