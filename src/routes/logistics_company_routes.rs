//! Rutas de LogisticsCompany

use axum::{
    extract::{Path, State},
    routing::{delete, get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::logistics_company_controller::LogisticsCompanyController;
use crate::dto::logistics_company_dto::{
    CreateLogisticsCompanyRequest, LogisticsCompanyResponse, UpdateLogisticsCompanyRequest,
};
use crate::dto::MessageResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_logistics_company_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_logistics_companies))
        .route("/", post(create_logistics_company))
        .route("/:id", get(get_logistics_company))
        .route("/:id", patch(update_logistics_company))
        .route("/:id", delete(delete_logistics_company))
}

async fn list_logistics_companies(
    State(state): State<AppState>,
) -> Result<Json<Vec<LogisticsCompanyResponse>>, AppError> {
    let controller = LogisticsCompanyController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn create_logistics_company(
    State(state): State<AppState>,
    Json(request): Json<CreateLogisticsCompanyRequest>,
) -> Result<Json<LogisticsCompanyResponse>, AppError> {
    let controller = LogisticsCompanyController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_logistics_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LogisticsCompanyResponse>, AppError> {
    let controller = LogisticsCompanyController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_logistics_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateLogisticsCompanyRequest>,
) -> Result<Json<LogisticsCompanyResponse>, AppError> {
    let controller = LogisticsCompanyController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_logistics_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = LogisticsCompanyController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
