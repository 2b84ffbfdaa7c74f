//! Modelo de Tracking
//!
//! Este módulo contiene el struct Tracking y el enum de estado del ciclo
//! de vida. Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Estado del ciclo de vida de un envío
///
/// Las transiciones son libres: cualquier estado puede asignarse desde
/// cualquier otro. El archivado es ortogonal (flag `is_archived`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "tracking_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum TrackingStatus {
    Pending,
    Transit,
    Delivered,
    Exception,
}

impl TrackingStatus {
    /// Orden fijo de ranking para el sort por estado
    pub fn rank(&self) -> u8 {
        match self {
            TrackingStatus::Pending => 0,
            TrackingStatus::Transit => 1,
            TrackingStatus::Delivered => 2,
            TrackingStatus::Exception => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrackingStatus::Pending => "PENDING",
            TrackingStatus::Transit => "TRANSIT",
            TrackingStatus::Delivered => "DELIVERED",
            TrackingStatus::Exception => "EXCEPTION",
        }
    }
}

impl Default for TrackingStatus {
    fn default() -> Self {
        TrackingStatus::Pending
    }
}

impl fmt::Display for TrackingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrackingStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "PENDING" => Ok(TrackingStatus::Pending),
            "TRANSIT" => Ok(TrackingStatus::Transit),
            "DELIVERED" => Ok(TrackingStatus::Delivered),
            "EXCEPTION" => Ok(TrackingStatus::Exception),
            other => Err(format!("unknown tracking status '{}'", other)),
        }
    }
}

/// Tracking principal - mapea exactamente a la tabla trackings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tracking {
    pub id: Uuid,
    pub tracking_number: String,
    pub status: TrackingStatus,
    pub note: Option<String>,
    pub is_archived: bool,
    pub logistics_company_id: Option<Uuid>,
    pub forwarder_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_rank_order() {
        assert_eq!(TrackingStatus::Pending.rank(), 0);
        assert_eq!(TrackingStatus::Transit.rank(), 1);
        assert_eq!(TrackingStatus::Delivered.rank(), 2);
        assert_eq!(TrackingStatus::Exception.rank(), 3);
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&TrackingStatus::Pending).unwrap(),
            "\"PENDING\""
        );
        assert_eq!(
            serde_json::from_str::<TrackingStatus>("\"EXCEPTION\"").unwrap(),
            TrackingStatus::Exception
        );
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            "TRANSIT".parse::<TrackingStatus>().unwrap(),
            TrackingStatus::Transit
        );
        assert!("transit".parse::<TrackingStatus>().is_err());
        assert!("SHIPPED".parse::<TrackingStatus>().is_err());
    }

    #[test]
    fn test_default_status_is_pending() {
        assert_eq!(TrackingStatus::default(), TrackingStatus::Pending);
    }
}
