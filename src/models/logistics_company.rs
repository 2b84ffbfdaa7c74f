//! Modelo de LogisticsCompany
//!
//! Transportista responsable de la entrega final. `tracking_url` es la
//! plantilla de consulta en el sitio oficial: el número de seguimiento se
//! concatena como sufijo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// LogisticsCompany principal - mapea exactamente a la tabla logistics_companies
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LogisticsCompany {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub tracking_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
