//! DTOs de Forwarder

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::Forwarder;
use crate::utils::patch::double_option;
use crate::utils::validation::HEX_COLOR_RE;

/// Request para crear un forwarder
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateForwarderRequest {
    pub name: String,

    #[validate(regex = "HEX_COLOR_RE")]
    pub color: Option<String>,

    /// Dirección libre; el string vacío es un valor válido, distinto de "sin dirección"
    pub address: Option<String>,
}

/// Request para actualizar un forwarder existente
///
/// `address` distingue `null` explícito (limpiar) de campo ausente.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateForwarderRequest {
    pub name: Option<String>,

    #[validate(regex = "HEX_COLOR_RE")]
    pub color: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub address: Option<Option<String>>,
}

/// Response de forwarder para la API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwarderResponse {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Forwarder> for ForwarderResponse {
    fn from(forwarder: Forwarder) -> Self {
        Self {
            id: forwarder.id,
            name: forwarder.name,
            color: forwarder.color,
            address: forwarder.address,
            created_at: forwarder.created_at,
            updated_at: forwarder.updated_at,
        }
    }
}
