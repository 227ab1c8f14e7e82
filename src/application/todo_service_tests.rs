#[cfg(test)]
mod tests {
    use super::super::todo_service::{TASK_REQUIRED, TodoService, TodoServiceImpl};
    use crate::domain::{error::TodoError, repository::TodoRepository, todo::{CreateTodo, Todo, TodoId, UpdateTodo}};
    use anyhow::Result;
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct InMemoryRepo {
        items: Arc<Mutex<BTreeMap<i64, Todo>>>,
        next_id: Arc<Mutex<i64>>,
    }

    #[async_trait]
    impl TodoRepository for InMemoryRepo {
        async fn init(&self) -> Result<()> { Ok(()) }
        async fn create(&self, task: String, priority: String) -> Result<Todo> {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            let todo = Todo { id: TodoId(*next), task, completed: false, priority };
            self.items.lock().unwrap().insert(*next, todo.clone());
            Ok(todo)
        }
        async fn get(&self, id: TodoId) -> Result<Option<Todo>> { Ok(self.items.lock().unwrap().get(&id.0).cloned()) }
        async fn list(&self, completed: Option<bool>) -> Result<Vec<Todo>> {
            Ok(self.items.lock().unwrap().values().filter(|t| completed.is_none_or(|c| t.completed == c)).cloned().collect())
        }
        async fn update(&self, id: TodoId, input: UpdateTodo) -> Result<bool> {
            let mut map = self.items.lock().unwrap();
            let Some(todo) = map.get_mut(&id.0) else { return Ok(false) };
            if let Some(t) = input.task { todo.task = t; }
            if let Some(c) = input.completed { todo.completed = c; }
            if let Some(p) = input.priority { todo.priority = p; }
            Ok(true)
        }
        async fn complete_all(&self) -> Result<u64> {
            let mut map = self.items.lock().unwrap();
            map.values_mut().for_each(|t| t.completed = true);
            Ok(map.len() as u64)
        }
        async fn delete(&self, id: TodoId) -> Result<bool> { Ok(self.items.lock().unwrap().remove(&id.0).is_some()) }
    }

    fn create(task: &str, priority: Option<&str>) -> CreateTodo {
        CreateTodo { task: Some(task.into()), priority: priority.map(Into::into) }
    }

    #[tokio::test]
    async fn unit_create_defaults_priority() {
        let service = TodoServiceImpl::new(InMemoryRepo::default());
        let created = service.create(create("X", None)).await.unwrap();
        assert_eq!(created.task, "X");
        assert_eq!(created.priority, "medium");
        assert!(!created.completed);

        let blank = service.create(create("Y", Some(""))).await.unwrap();
        assert_eq!(blank.priority, "medium");
        assert_ne!(blank.id, created.id);

        let high = service.create(create("Z", Some("high"))).await.unwrap();
        assert_eq!(service.get(high.id).await.unwrap().priority, "high");
    }

    #[tokio::test]
    async fn unit_create_requires_task() {
        let service = TodoServiceImpl::new(InMemoryRepo::default());
        for input in [CreateTodo::default(), create("", Some("low"))] {
            match service.create(input).await {
                Err(TodoError::Validation(msg)) => assert_eq!(msg, TASK_REQUIRED),
                other => panic!("expected validation error, got {other:?}"),
            }
        }
        assert!(service.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unit_update_keeps_unspecified_fields() {
        let service = TodoServiceImpl::new(InMemoryRepo::default());
        let todo = service.create(create("write docs", Some("low"))).await.unwrap();

        service.update(todo.id, UpdateTodo { completed: Some(true), ..Default::default() }).await.unwrap();
        service.update(todo.id, UpdateTodo { task: Some(String::new()), completed: Some(false), priority: None }).await.unwrap();

        let got = service.get(todo.id).await.unwrap();
        assert_eq!(got, Todo { completed: false, ..todo });
    }

    #[tokio::test]
    async fn unit_missing_rows_are_not_found() {
        let service = TodoServiceImpl::new(InMemoryRepo::default());
        assert!(matches!(service.get(TodoId(99999)).await, Err(TodoError::NotFound)));
        assert!(matches!(service.update(TodoId(99999), UpdateTodo::default()).await, Err(TodoError::NotFound)));
        assert!(matches!(service.delete(TodoId(99999)).await, Err(TodoError::NotFound)));
    }

    #[tokio::test]
    async fn unit_complete_all_on_empty_succeeds() {
        let service = TodoServiceImpl::new(InMemoryRepo::default());
        assert_eq!(service.complete_all().await.unwrap(), 0);
        service.create(create("a", None)).await.unwrap();
        service.create(create("b", None)).await.unwrap();
        assert_eq!(service.complete_all().await.unwrap(), 2);
        assert_eq!(service.list(Some(false)).await.unwrap().len(), 0);
        assert_eq!(service.list(Some(true)).await.unwrap().len(), 2);
    }
}
