//! DTOs de LogisticsCompany

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::LogisticsCompany;
use crate::utils::validation::HEX_COLOR_RE;

/// Request para crear una empresa logística
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLogisticsCompanyRequest {
    pub name: String,

    #[validate(regex = "HEX_COLOR_RE")]
    pub color: Option<String>,

    pub tracking_url: Option<String>,
}

/// Request para actualizar una empresa logística existente
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLogisticsCompanyRequest {
    pub name: Option<String>,

    #[validate(regex = "HEX_COLOR_RE")]
    pub color: Option<String>,

    pub tracking_url: Option<String>,
}

/// Response de empresa logística para la API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogisticsCompanyResponse {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub tracking_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<LogisticsCompany> for LogisticsCompanyResponse {
    fn from(company: LogisticsCompany) -> Self {
        Self {
            id: company.id,
            name: company.name,
            color: company.color,
            tracking_url: company.tracking_url,
            created_at: company.created_at,
            updated_at: company.updated_at,
        }
    }
}
