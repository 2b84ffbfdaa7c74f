//! DTOs de Tracking
//!
//! Requests, responses y filtros para los endpoints de trackings.
//! El casing del wire es camelCase (trackingNumber, isArchived, ...)
//! por compatibilidad con los clientes existentes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::TrackingStatus;
use crate::utils::patch::double_option;

/// Request para crear un tracking individual
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrackingRequest {
    pub tracking_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TrackingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logistics_company_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forwarder_id: Option<Uuid>,
}

/// Request para actualizar un tracking existente
///
/// Solo los campos presentes en el body se modifican. `note` y las dos
/// asociaciones distinguen `null` explícito (limpiar) de campo ausente.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrackingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TrackingStatus>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub note: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub logistics_company_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub forwarder_id: Option<Option<Uuid>>,
}

impl UpdateTrackingRequest {
    /// true cuando el body no trae ningún campo
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.note.is_none()
            && self.logistics_company_id.is_none()
            && self.forwarder_id.is_none()
    }
}

/// Filtros de igualdad para el listado de trackings
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingFilters {
    pub status: Option<TrackingStatus>,
    pub logistics_company_id: Option<Uuid>,
    pub forwarder_id: Option<Uuid>,
}

/// Entrada individual del alta masiva
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingWithNote {
    pub tracking_number: String,
    pub note: Option<String>,
}

/// Request de alta masiva
///
/// Acepta dos formas: `trackingsWithNotes` (pares número/nota) o el
/// formato legacy `trackingNumbers` (solo números, nota = null).
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchCreateTrackingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trackings_with_notes: Option<Vec<TrackingWithNote>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_numbers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logistics_company_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forwarder_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TrackingStatus>,
}

impl BatchCreateTrackingRequest {
    /// Normaliza ambas formas del request a una lista de pares número/nota.
    /// `None` cuando el body no trae ninguna de las dos listas.
    pub fn entries(&self) -> Option<Vec<TrackingWithNote>> {
        if let Some(with_notes) = &self.trackings_with_notes {
            return Some(with_notes.clone());
        }
        self.tracking_numbers.as_ref().map(|numbers| {
            numbers
                .iter()
                .map(|number| TrackingWithNote {
                    tracking_number: number.clone(),
                    note: None,
                })
                .collect()
        })
    }
}

/// Response del alta masiva
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCreateResponse {
    pub created: u64,
    pub skipped: u64,
}

/// Resumen de la empresa logística embebido en las respuestas de tracking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogisticsCompanySummary {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub tracking_url: String,
}

/// Resumen del forwarder embebido en las respuestas de tracking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwarderSummary {
    pub id: Uuid,
    pub name: String,
    pub color: String,
}

/// Response de tracking para la API, con los padres embebidos
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingResponse {
    pub id: Uuid,
    pub tracking_number: String,
    pub status: TrackingStatus,
    pub note: Option<String>,
    pub is_archived: bool,
    pub logistics_company_id: Option<Uuid>,
    pub forwarder_id: Option<Uuid>,
    pub logistics_company: Option<LogisticsCompanySummary>,
    pub forwarder: Option<ForwarderSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response del conteo de trackings activos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_field_presence() {
        let patch: UpdateTrackingRequest = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());

        let patch: UpdateTrackingRequest =
            serde_json::from_str(r#"{"note": null, "logisticsCompanyId": null}"#).unwrap();
        assert_eq!(patch.note, Some(None));
        assert_eq!(patch.logistics_company_id, Some(None));
        assert_eq!(patch.forwarder_id, None);

        let patch: UpdateTrackingRequest =
            serde_json::from_str(r#"{"status": "DELIVERED", "note": ""}"#).unwrap();
        assert_eq!(patch.status, Some(TrackingStatus::Delivered));
        assert_eq!(patch.note, Some(Some(String::new())));
    }

    #[test]
    fn test_batch_request_legacy_form() {
        let request: BatchCreateTrackingRequest =
            serde_json::from_str(r#"{"trackingNumbers": ["SF001", "SF002"]}"#).unwrap();
        let entries = request.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].tracking_number, "SF001");
        assert_eq!(entries[0].note, None);
    }

    #[test]
    fn test_batch_request_with_notes_form() {
        let request: BatchCreateTrackingRequest = serde_json::from_str(
            r#"{"trackingsWithNotes": [{"trackingNumber": "SF001", "note": "fragile"}]}"#,
        )
        .unwrap();
        let entries = request.entries().unwrap();
        assert_eq!(entries[0].note.as_deref(), Some("fragile"));
    }

    #[test]
    fn test_batch_request_neither_form() {
        let request: BatchCreateTrackingRequest = serde_json::from_str("{}").unwrap();
        assert!(request.entries().is_none());
    }

    #[test]
    fn test_tracking_response_wire_casing() {
        let response = TrackingResponse {
            id: Uuid::nil(),
            tracking_number: "ABC123".to_string(),
            status: TrackingStatus::Pending,
            note: None,
            is_archived: false,
            logistics_company_id: None,
            forwarder_id: None,
            logistics_company: None,
            forwarder: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("trackingNumber").is_some());
        assert!(value.get("isArchived").is_some());
        assert!(value.get("logisticsCompanyId").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("tracking_number").is_none());
    }
}
