//! Controller de Tracking
//!
//! Reglas de negocio del ciclo de vida de trackings: unicidad del número,
//! defaults, alta masiva con partición created/skipped, archivado y borrado.

use sqlx::PgPool;
use std::collections::HashSet;
use uuid::Uuid;

use crate::dto::tracking_dto::{
    BatchCreateResponse, BatchCreateTrackingRequest, CountResponse, CreateTrackingRequest,
    TrackingFilters, TrackingResponse, TrackingWithNote, UpdateTrackingRequest,
};
use crate::dto::MessageResponse;
use crate::repositories::tracking_repository::TrackingRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct TrackingController {
    repository: TrackingRepository,
}

impl TrackingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TrackingRepository::new(pool),
        }
    }

    pub async fn list(&self, filters: TrackingFilters) -> Result<Vec<TrackingResponse>, AppError> {
        self.repository
            .list_active(
                filters.status,
                filters.logistics_company_id,
                filters.forwarder_id,
            )
            .await
    }

    pub async fn list_archived(&self, limit: i64) -> Result<Vec<TrackingResponse>, AppError> {
        self.repository.list_archived(limit).await
    }

    pub async fn count(&self) -> Result<CountResponse, AppError> {
        let count = self.repository.count_active().await?;
        Ok(CountResponse { count })
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<TrackingResponse, AppError> {
        self.repository
            .find_with_relations(id)
            .await?
            .ok_or_else(|| not_found_error("tracking"))
    }

    pub async fn create(
        &self,
        request: CreateTrackingRequest,
    ) -> Result<TrackingResponse, AppError> {
        let tracking_number = request.tracking_number.trim().to_string();
        if tracking_number.is_empty() {
            return Err(AppError::BadRequest("tracking number required".to_string()));
        }

        // Pre-chequeo para un mensaje limpio; el índice único cubre la carrera
        if self.repository.tracking_number_exists(&tracking_number).await? {
            return Err(conflict_error("tracking", "number"));
        }

        let created = self
            .repository
            .create(
                tracking_number,
                request.status.unwrap_or_default(),
                request.note,
                request.logistics_company_id,
                request.forwarder_id,
            )
            .await?;

        self.repository
            .find_with_relations(created.id)
            .await?
            .ok_or_else(|| AppError::Internal("created tracking not readable".to_string()))
    }

    /// Alta masiva de trackings
    ///
    /// Los duplicados dentro del mismo batch se colapsan a la primera
    /// aparición; las repeticiones cuentan como `skipped`, igual que los
    /// números ya almacenados, de modo que created + skipped == len(input).
    pub async fn create_batch(
        &self,
        request: BatchCreateTrackingRequest,
    ) -> Result<BatchCreateResponse, AppError> {
        let entries = request
            .entries()
            .ok_or_else(|| AppError::BadRequest("tracking numbers required".to_string()))?;

        let trimmed = trim_entries(entries);
        if trimmed.is_empty() {
            return Err(AppError::BadRequest("tracking numbers required".to_string()));
        }

        let total = trimmed.len() as u64;
        let deduped = dedupe_first_wins(trimmed);

        let outcome = self
            .repository
            .insert_batch(
                &deduped,
                request.status.unwrap_or_default(),
                request.logistics_company_id,
                request.forwarder_id,
            )
            .await?;

        if outcome.created == 0 {
            return Err(AppError::BadRequest(
                "all tracking numbers already exist".to_string(),
            ));
        }

        Ok(BatchCreateResponse {
            created: outcome.created,
            skipped: total - outcome.created,
        })
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateTrackingRequest,
    ) -> Result<TrackingResponse, AppError> {
        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("tracking"))?;

        // Merge campo a campo: ausente = conservar, null = limpiar
        let status = request.status.unwrap_or(current.status);
        let note = match request.note {
            Some(note) => note,
            None => current.note,
        };
        let logistics_company_id = match request.logistics_company_id {
            Some(company) => company,
            None => current.logistics_company_id,
        };
        let forwarder_id = match request.forwarder_id {
            Some(forwarder) => forwarder,
            None => current.forwarder_id,
        };

        let updated = self
            .repository
            .update(id, status, note, logistics_company_id, forwarder_id)
            .await?;

        self.repository
            .find_with_relations(updated.id)
            .await?
            .ok_or_else(|| AppError::Internal("updated tracking not readable".to_string()))
    }

    pub async fn archive(&self, id: Uuid) -> Result<TrackingResponse, AppError> {
        self.set_archived(id, true).await
    }

    pub async fn unarchive(&self, id: Uuid) -> Result<TrackingResponse, AppError> {
        self.set_archived(id, false).await
    }

    async fn set_archived(&self, id: Uuid, is_archived: bool) -> Result<TrackingResponse, AppError> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(not_found_error("tracking"));
        }

        let updated = self.repository.set_archived(id, is_archived).await?;

        self.repository
            .find_with_relations(updated.id)
            .await?
            .ok_or_else(|| AppError::Internal("archived tracking not readable".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<MessageResponse, AppError> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(not_found_error("tracking"));
        }

        self.repository.delete(id).await?;

        Ok(MessageResponse::new("tracking deleted"))
    }
}

/// Recorta espacios y descarta entradas sin número
fn trim_entries(entries: Vec<TrackingWithNote>) -> Vec<TrackingWithNote> {
    entries
        .into_iter()
        .map(|entry| TrackingWithNote {
            tracking_number: entry.tracking_number.trim().to_string(),
            note: entry.note,
        })
        .filter(|entry| !entry.tracking_number.is_empty())
        .collect()
}

/// Colapsa los duplicados dentro del batch a la primera aparición
fn dedupe_first_wins(entries: Vec<TrackingWithNote>) -> Vec<TrackingWithNote> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.tracking_number.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(number: &str, note: Option<&str>) -> TrackingWithNote {
        TrackingWithNote {
            tracking_number: number.to_string(),
            note: note.map(|value| value.to_string()),
        }
    }

    #[test]
    fn test_trim_entries_drops_blanks() {
        let trimmed = trim_entries(vec![
            entry("  SF001  ", None),
            entry("   ", None),
            entry("", Some("orphan note")),
            entry("SF002", Some("fragile")),
        ]);

        assert_eq!(trimmed.len(), 2);
        assert_eq!(trimmed[0].tracking_number, "SF001");
        assert_eq!(trimmed[1].tracking_number, "SF002");
        assert_eq!(trimmed[1].note.as_deref(), Some("fragile"));
    }

    #[test]
    fn test_dedupe_first_occurrence_wins() {
        let deduped = dedupe_first_wins(vec![
            entry("SF001", None),
            entry("SF001", Some("dup")),
            entry("SF002", None),
        ]);

        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].tracking_number, "SF001");
        // La primera aparición conserva su nota (null), la repetición se descarta
        assert_eq!(deduped[0].note, None);
        assert_eq!(deduped[1].tracking_number, "SF002");
    }

    #[test]
    fn test_batch_accounting_created_plus_skipped_equals_input() {
        // Mismo shape que usa create_batch: total antes del dedup,
        // skipped = total - created
        let trimmed = trim_entries(vec![
            entry("SF001", None),
            entry("SF001", Some("dup")),
            entry("SF002", None),
        ]);
        let total = trimmed.len() as u64;
        let deduped = dedupe_first_wins(trimmed);

        // Contra un store vacío se crearían todas las entradas únicas
        let created = deduped.len() as u64;
        assert_eq!(total, 3);
        assert_eq!(created, 2);
        assert_eq!(created + (total - created), total);
    }
}
