//! HTTP surface for the file-backed task list

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tasklist_core::{Backend, TaskStore};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the `/todos` router over a shared store
pub fn create_api_router<B>(store: Arc<TaskStore<B>>) -> Router
where
    B: Backend + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/todos",
            get(handlers::todos::list_todos::<B>)
                .post(handlers::todos::create_todo::<B>)
                .patch(handlers::todos::update_todo::<B>)
                .delete(handlers::todos::delete_todo::<B>),
        )
        .route("/todos/summary", get(handlers::todos::get_summary::<B>))
        .route("/todos/{id}/toggle", post(handlers::todos::toggle_todo::<B>))
        .with_state(store)
}

/// Create the full router: `/api` routes, health check, tracing and CORS
pub fn create_router<B>(store: Arc<TaskStore<B>>) -> Router
where
    B: Backend + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest("/api", create_api_router(store))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Start the server and run until Ctrl+C
pub async fn start_server<B>(bind: &str, store: Arc<TaskStore<B>>) -> std::io::Result<()>
where
    B: Backend + Send + Sync + 'static,
{
    let app = create_router(store);
    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!(addr = %listener.local_addr()?, "tasklist API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(std::io::Error::other)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
