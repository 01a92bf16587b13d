//! Todo list API handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tasklist_core::{
    AppError, Backend, Identifier, Summary, Task, TaskDraft, TaskFilter, TaskStore,
};

use crate::api::error::ApiError;

// ============================================================================
// Request DTOs
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub filter: Option<String>,
}

/// `?id=` or `?text=` selecting the task(s) a PATCH or DELETE applies to.
/// `id` wins when both are given.
#[derive(Debug, Default, Deserialize)]
pub struct KeyQuery {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub text: Option<String>,
}

impl KeyQuery {
    fn into_identifier(self) -> Result<Identifier, AppError> {
        match (self.id, self.text) {
            (Some(id), _) => Ok(Identifier::Id(id)),
            (None, Some(text)) => Ok(Identifier::Text(text)),
            (None, None) => Err(AppError::validation(
                "query parameter 'text' or 'id' is required",
            )),
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Runs a store call on the blocking pool; the store does synchronous file I/O.
async fn with_store<B, T, F>(store: Arc<TaskStore<B>>, call: F) -> Result<T, ApiError>
where
    B: Backend + Send + Sync + 'static,
    T: Send + 'static,
    F: FnOnce(&TaskStore<B>) -> Result<T, AppError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || call(&store))
        .await
        .map_err(|err| ApiError(AppError::persistence(format!("store task failed: {err}"))))?
        .map_err(ApiError)
}

fn json_body(body: Result<Json<TaskDraft>, JsonRejection>) -> Result<TaskDraft, ApiError> {
    body.map(|Json(draft)| draft)
        .map_err(|rejection| ApiError(AppError::validation(rejection.body_text())))
}

fn key_query(query: Result<Query<KeyQuery>, QueryRejection>) -> Result<Identifier, ApiError> {
    let Query(query) =
        query.map_err(|rejection| ApiError(AppError::validation(rejection.body_text())))?;
    query.into_identifier().map_err(ApiError)
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/todos
pub async fn list_todos<B>(
    State(store): State<Arc<TaskStore<B>>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<Task>>, ApiError>
where
    B: Backend + Send + Sync + 'static,
{
    let Query(query) =
        query.map_err(|rejection| ApiError(AppError::validation(rejection.body_text())))?;
    let filter: TaskFilter = query.filter.as_deref().unwrap_or("all").parse()?;

    let tasks = with_store(store, move |store| store.list_filtered(filter)).await?;
    Ok(Json(tasks))
}

/// POST /api/todos
pub async fn create_todo<B>(
    State(store): State<Arc<TaskStore<B>>>,
    body: Result<Json<TaskDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError>
where
    B: Backend + Send + Sync + 'static,
{
    let draft = json_body(body)?;
    let change = with_store(store, move |store| store.create(draft)).await?;
    tracing::debug!(event = ?change.event, "create handled");
    Ok((StatusCode::CREATED, Json(change.value)))
}

/// PATCH /api/todos?text=... — full replacement of the matching task
pub async fn update_todo<B>(
    State(store): State<Arc<TaskStore<B>>>,
    query: Result<Query<KeyQuery>, QueryRejection>,
    body: Result<Json<TaskDraft>, JsonRejection>,
) -> Result<Json<Task>, ApiError>
where
    B: Backend + Send + Sync + 'static,
{
    let identifier = key_query(query)?;
    let draft = json_body(body)?;
    let change = with_store(store, move |store| store.update(&identifier, draft)).await?;
    tracing::debug!(event = ?change.event, "update handled");
    Ok(Json(change.value))
}

/// DELETE /api/todos?text=... — 204 whether or not anything matched
pub async fn delete_todo<B>(
    State(store): State<Arc<TaskStore<B>>>,
    query: Result<Query<KeyQuery>, QueryRejection>,
) -> Result<StatusCode, ApiError>
where
    B: Backend + Send + Sync + 'static,
{
    let identifier = key_query(query)?;
    let change = with_store(store, move |store| store.delete(&identifier)).await?;
    tracing::debug!(event = ?change.event, "delete handled");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/todos/{id}/toggle
pub async fn toggle_todo<B>(
    State(store): State<Arc<TaskStore<B>>>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Response, ApiError>
where
    B: Backend + Send + Sync + 'static,
{
    let Path(id) = id.map_err(|rejection| ApiError(AppError::validation(rejection.body_text())))?;
    let change = with_store(store, move |store| store.toggle_completed(id)).await?;

    Ok(match change.value {
        Some(task) => Json(task).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

/// GET /api/todos/summary
pub async fn get_summary<B>(
    State(store): State<Arc<TaskStore<B>>>,
) -> Result<Json<Summary>, ApiError>
where
    B: Backend + Send + Sync + 'static,
{
    let summary = with_store(store, |store| store.summary()).await?;
    Ok(Json(summary))
}
