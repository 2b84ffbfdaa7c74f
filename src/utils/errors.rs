//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
///
/// Todos los errores salen con el mismo shape: `{"message": "..."}`.
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Database(e) => {
                // La causa real solo se loggea, nunca se expone al cliente
                error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }

            AppError::Validation(e) => {
                error!("Validation error: {}", e);
                (StatusCode::BAD_REQUEST, validation_message(&e))
            }

            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),

            // Los conflictos de unicidad responden 400, no 409: los clientes
            // existentes tratan cualquier 400 como error de validación
            AppError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),

            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Aplana los errores del derive de `validator` a un mensaje legible
fn validation_message(errors: &validator::ValidationErrors) -> String {
    let fields: Vec<&str> = errors.field_errors().keys().copied().collect();
    if fields.is_empty() {
        "invalid request".to_string()
    } else {
        format!("invalid fields: {}", fields.join(", "))
    }
}

/// Detecta violaciones de índice único (SQLSTATE 23505)
///
/// Backstop para la ventana entre el pre-chequeo de unicidad y el INSERT:
/// una carrera concurrente termina como Conflict y no como 500.
pub fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(
        error.as_database_error().and_then(|db| db.code()),
        Some(code) if code == "23505"
    )
}

/// Detecta violaciones de clave foránea (SQLSTATE 23503)
pub fn is_foreign_key_violation(error: &sqlx::Error) -> bool {
    matches!(
        error.as_database_error().and_then(|db| db.code()),
        Some(code) if code == "23503"
    )
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str) -> AppError {
    AppError::NotFound(format!("{} not found", resource))
}

/// Función helper para crear errores de conflicto
pub fn conflict_error(resource: &str, field: &str) -> AppError {
    AppError::Conflict(format!("{} {} already exists", resource, field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_error_status_mapping() {
        let cases = vec![
            (
                AppError::NotFound("tracking not found".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::Conflict("tracking number already exists".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::BadRequest("tracking numbers required".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Internal("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let response = err.into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[tokio::test]
    async fn test_internal_error_is_generic() {
        let response = AppError::Internal("secret detail".to_string()).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Internal server error");
    }

    #[tokio::test]
    async fn test_message_shape() {
        let response = AppError::NotFound("tracking not found".to_string()).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "tracking not found");
        assert!(body.get("details").is_none());
    }
}
