use std::sync::Arc;

use crate::error::ApiError;
use crate::models::TodoReadDto;
use crate::repository::TodoRepository;

/// Thin application layer between the handlers and the repository.
pub struct TodoService {
    repository: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// All todos in storage order, projected for reading. No side effects;
    /// repository faults propagate unchanged.
    pub async fn get_all(&self) -> Result<Vec<TodoReadDto>, ApiError> {
        let todos = self.repository.get_all().await?;
        Ok(todos.iter().map(|t| t.to_read_dto()).collect())
    }
}
