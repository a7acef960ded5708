use std::sync::Mutex;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::ApiError;
use crate::models::Todo;

/// Read-only gateway over todo storage.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Fetches every todo in storage order. Driver failures propagate
    /// unmodified as `ApiError::Internal`; no retry, no recovery.
    async fn get_all(&self) -> Result<Vec<Todo>, ApiError>;
}

/// Postgres-backed repository.
#[derive(Clone)]
pub struct PgTodoRepository {
    pool: PgPool,
}

impl PgTodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies pending migrations.
    pub async fn migrate(&self) -> Result<(), ApiError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Internal(e.into()))?;
        Ok(())
    }
}

#[async_trait]
impl TodoRepository for PgTodoRepository {
    async fn get_all(&self) -> Result<Vec<Todo>, ApiError> {
        // ORDER BY id keeps "storage order" deterministic
        let todos = sqlx::query_as::<_, Todo>("SELECT id, name FROM todos ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(todos)
    }
}

/// In-memory repository for local development and tests. Preserves
/// insertion order.
#[derive(Default)]
pub struct InMemoryTodoRepository {
    todos: Mutex<Vec<Todo>>,
}

impl InMemoryTodoRepository {
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos: Mutex::new(todos),
        }
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn get_all(&self) -> Result<Vec<Todo>, ApiError> {
        Ok(self.todos.lock().unwrap().clone())
    }
}
