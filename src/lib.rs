//! Read-only todo HTTP API with enveloped JSON responses.
//!
//! Layering: handlers -> `TodoService` -> `TodoRepository` -> Postgres.
//! Every failure funnels through [`error::ApiError`], so clients always
//! receive one of exactly two JSON shapes regardless of which layer failed.

use std::sync::Arc;

use axum::{routing::get, Router};

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod response;
pub mod service;

use repository::TodoRepository;
use service::TodoService;

/// Shared per-process state, cloned into each request task.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TodoService>,
}

impl AppState {
    /// Wires the call graph explicitly: repository into service into state.
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self {
            service: Arc::new(TodoService::new(repository)),
        }
    }
}

/// Builds the router over the given state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/todos", get(handlers::list_todos))
        .with_state(state)
}
