//! Modelo de Forwarder
//!
//! Intermediario de carga opcionalmente asociado a un tracking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Forwarder principal - mapea exactamente a la tabla forwarders
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Forwarder {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
