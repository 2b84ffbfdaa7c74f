//! DTOs de la API

pub mod forwarder_dto;
pub mod logistics_company_dto;
pub mod tracking_dto;

use serde::{Deserialize, Serialize};

/// Response genérica de confirmación, p. ej. para deletes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
