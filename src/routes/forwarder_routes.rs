//! Rutas de Forwarder

use axum::{
    extract::{Path, State},
    routing::{delete, get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::forwarder_controller::ForwarderController;
use crate::dto::forwarder_dto::{
    CreateForwarderRequest, ForwarderResponse, UpdateForwarderRequest,
};
use crate::dto::MessageResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_forwarder_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_forwarders))
        .route("/", post(create_forwarder))
        .route("/:id", get(get_forwarder))
        .route("/:id", patch(update_forwarder))
        .route("/:id", delete(delete_forwarder))
}

async fn list_forwarders(
    State(state): State<AppState>,
) -> Result<Json<Vec<ForwarderResponse>>, AppError> {
    let controller = ForwarderController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn create_forwarder(
    State(state): State<AppState>,
    Json(request): Json<CreateForwarderRequest>,
) -> Result<Json<ForwarderResponse>, AppError> {
    let controller = ForwarderController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_forwarder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ForwarderResponse>, AppError> {
    let controller = ForwarderController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_forwarder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateForwarderRequest>,
) -> Result<Json<ForwarderResponse>, AppError> {
    let controller = ForwarderController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_forwarder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = ForwarderController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
