//! Rutas de Tracking

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::tracking_controller::TrackingController;
use crate::dto::tracking_dto::{
    BatchCreateResponse, BatchCreateTrackingRequest, CountResponse, CreateTrackingRequest,
    TrackingFilters, TrackingResponse, UpdateTrackingRequest,
};
use crate::dto::MessageResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_tracking_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_trackings))
        .route("/", post(create_tracking))
        .route("/count", get(count_trackings))
        .route("/archived", get(list_archived_trackings))
        .route("/batch", post(create_trackings_batch))
        .route("/:id", get(get_tracking))
        .route("/:id", patch(update_tracking))
        .route("/:id", delete(delete_tracking))
        .route("/:id/archive", post(archive_tracking))
        .route("/:id/unarchive", post(unarchive_tracking))
}

async fn list_trackings(
    State(state): State<AppState>,
    Query(filters): Query<TrackingFilters>,
) -> Result<Json<Vec<TrackingResponse>>, AppError> {
    let controller = TrackingController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn create_tracking(
    State(state): State<AppState>,
    Json(request): Json<CreateTrackingRequest>,
) -> Result<Json<TrackingResponse>, AppError> {
    let controller = TrackingController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn count_trackings(
    State(state): State<AppState>,
) -> Result<Json<CountResponse>, AppError> {
    let controller = TrackingController::new(state.pool.clone());
    let response = controller.count().await?;
    Ok(Json(response))
}

async fn list_archived_trackings(
    State(state): State<AppState>,
) -> Result<Json<Vec<TrackingResponse>>, AppError> {
    let controller = TrackingController::new(state.pool.clone());
    let response = controller
        .list_archived(state.config.archived_page_size)
        .await?;
    Ok(Json(response))
}

async fn create_trackings_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchCreateTrackingRequest>,
) -> Result<Json<BatchCreateResponse>, AppError> {
    let controller = TrackingController::new(state.pool.clone());
    let response = controller.create_batch(request).await?;
    Ok(Json(response))
}

async fn get_tracking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TrackingResponse>, AppError> {
    let controller = TrackingController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_tracking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTrackingRequest>,
) -> Result<Json<TrackingResponse>, AppError> {
    let controller = TrackingController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_tracking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = TrackingController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}

async fn archive_tracking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TrackingResponse>, AppError> {
    let controller = TrackingController::new(state.pool.clone());
    let response = controller.archive(id).await?;
    Ok(Json(response))
}

async fn unarchive_tracking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TrackingResponse>, AppError> {
    let controller = TrackingController::new(state.pool.clone());
    let response = controller.unarchive(id).await?;
    Ok(Json(response))
}
