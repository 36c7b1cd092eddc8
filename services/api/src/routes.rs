use crate::infra::{evaluation_instant, AppState, SharedSource};
use alumni_directory::directory::{
    AlumniDirectory, DirectoryStatistics, FilterCriteria, PersonRecord, RecordSource,
};
use alumni_directory::error::AppError;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::Serialize;
use serde_json::json;
use tracing::warn;

#[derive(Debug, Serialize)]
pub(crate) struct AlumniListResponse {
    pub(crate) total_alumni: usize,
    pub(crate) found: usize,
    pub(crate) alumni: Vec<PersonRecord>,
}

/// Roster endpoints backed by `source`.
pub(crate) fn directory_router(source: SharedSource) -> Router {
    Router::new()
        .route("/api/scrap", get(roster_rows_endpoint))
        .route("/api/v1/alumni", get(alumni_list_endpoint))
        .route("/api/v1/alumni/statistics", get(alumni_statistics_endpoint))
        .with_state(source)
}

pub(crate) fn with_directory_routes(source: SharedSource) -> Router {
    directory_router(source)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Runs a roster read on the blocking pool so file sources never stall the
/// async workers.
async fn on_blocking_pool<T, F>(source: SharedSource, read: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&dyn RecordSource) -> Result<T, AppError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || read(source.as_ref()))
        .await
        .map_err(|err| AppError::Io(std::io::Error::other(err)))?
}

async fn load_directory(source: SharedSource) -> Result<AlumniDirectory, AppError> {
    on_blocking_pool(source, |source| {
        Ok(AlumniDirectory::load(source, evaluation_instant(None))?)
    })
    .await
}

/// Every roster row, unclassified and unfiltered.
pub(crate) async fn roster_rows_endpoint(State(source): State<SharedSource>) -> Response {
    let rows = on_blocking_pool(source, |source| Ok(source.fetch_all()?)).await;
    match rows {
        Ok(rows) => Json(json!({ "success": true, "data": rows })).into_response(),
        Err(err) => {
            warn!(error = %err, "failed to fetch alumni roster");
            let payload = json!({
                "success": false,
                "error": "Failed to fetch data from database",
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn alumni_list_endpoint(
    State(source): State<SharedSource>,
    Query(criteria): Query<FilterCriteria>,
) -> Result<Json<AlumniListResponse>, AppError> {
    let directory = load_directory(source).await?;
    let alumni = directory.filter(&criteria);

    Ok(Json(AlumniListResponse {
        total_alumni: directory.alumni().len(),
        found: alumni.len(),
        alumni,
    }))
}

pub(crate) async fn alumni_statistics_endpoint(
    State(source): State<SharedSource>,
) -> Result<Json<DirectoryStatistics>, AppError> {
    let directory = load_directory(source).await?;
    Ok(Json(directory.statistics()))
}
