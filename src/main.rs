//! Entrypoint: serves the todo API over a local HTTP listener.

use std::sync::Arc;

use todo_api::config::Config;
use todo_api::repository::PgTodoRepository;
use todo_api::{app_with_state, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let pool = sqlx::PgPool::connect(&config.database_url).await?;
    let repository = PgTodoRepository::new(pool);
    repository.migrate().await?;

    // explicit wiring: repository -> service -> state, no container
    let state = AppState::new(Arc::new(repository));

    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server starting");

    axum::serve(listener, app_with_state(state)).await?;
    Ok(())
}
