use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow}, Pool, QueryBuilder, Row, Sqlite};

use crate::domain::{
    repository::TodoRepository,
    todo::{Todo, TodoId, UpdateTodo},
};

#[derive(Clone)]
pub struct SqliteTodoRepository {
    pool: Arc<Pool<Sqlite>>,
}

impl SqliteTodoRepository {
    /// Opens (creating if needed) the database behind `database_url`.
    ///
    /// An in-memory database lives only as long as its connection, so those
    /// are pinned to one connection that is never recycled.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("invalid database url {database_url}"))?
            .create_if_missing(true);
        let pool_options = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };
        let pool = pool_options
            .connect_with(options)
            .await
            .with_context(|| format!("failed to open database {database_url}"))?;
        Ok(Self { pool: Arc::new(pool) })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn init(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS todos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                task TEXT NOT NULL,
                completed BOOLEAN NOT NULL DEFAULT 0,
                priority TEXT NOT NULL DEFAULT 'medium'
            )",
        )
        .execute(&*self.pool)
        .await
        .context("failed to create todos table")?;
        Ok(())
    }

    async fn create(&self, task: String, priority: String) -> Result<Todo> {
        let result = sqlx::query("INSERT INTO todos (task, priority) VALUES (?1, ?2)")
            .bind(&task)
            .bind(&priority)
            .execute(&*self.pool)
            .await?;
        Ok(Todo { id: TodoId(result.last_insert_rowid()), task, completed: false, priority })
    }

    async fn get(&self, id: TodoId) -> Result<Option<Todo>> {
        let row = sqlx::query("SELECT id, task, completed, priority FROM todos WHERE id = ?1")
            .bind(id.0)
            .fetch_optional(&*self.pool)
            .await?;
        row.map(row_to_todo).transpose()
    }

    async fn list(&self, completed: Option<bool>) -> Result<Vec<Todo>> {
        let mut query = QueryBuilder::<Sqlite>::new("SELECT id, task, completed, priority FROM todos");
        if let Some(completed) = completed {
            query.push(" WHERE completed = ").push_bind(completed);
        }
        query.push(" ORDER BY id");
        let rows = query.build().fetch_all(&*self.pool).await?;
        rows.into_iter().map(row_to_todo).collect()
    }

    async fn update(&self, id: TodoId, input: UpdateTodo) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE todos SET task = COALESCE(?1, task),
                              completed = COALESCE(?2, completed),
                              priority = COALESCE(?3, priority)
             WHERE id = ?4",
        )
        .bind(input.task)
        .bind(input.completed)
        .bind(input.priority)
        .bind(id.0)
        .execute(&*self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn complete_all(&self) -> Result<u64> {
        let result = sqlx::query("UPDATE todos SET completed = 1")
            .execute(&*self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: TodoId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?1")
            .bind(id.0)
            .execute(&*self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn row_to_todo(row: SqliteRow) -> Result<Todo> {
    Ok(Todo {
        id: TodoId(row.try_get("id")?),
        task: row.try_get("task")?,
        completed: row.try_get("completed")?,
        priority: row.try_get("priority")?,
    })
}
