use serde::{Deserialize, Serialize};

/// Todo row as stored. Rows are created and removed by the storage layer
/// (migrations, seeding); this API only reads them.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    pub id: i32,
    pub name: String,
}

/// Read projection of a todo, built fresh per response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoReadDto {
    pub id: i32,
    pub name: String,
}

impl Todo {
    /// Field-for-field read projection.
    pub fn to_read_dto(&self) -> TodoReadDto {
        TodoReadDto {
            id: self.id,
            name: self.name.clone(),
        }
    }
}
