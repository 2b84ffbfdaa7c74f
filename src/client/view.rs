//! Orquestación de la vista de lista
//!
//! Une el cliente HTTP, el estado local y el bus de eventos. Cada edición
//! inline manda el PATCH primero y recién parchea el estado local cuando
//! el servidor confirma; en fallo el estado previo queda intacto. Las
//! acciones masivas retiran de la lista solo los ids que terminaron bien.

use uuid::Uuid;

use crate::client::api::{ApiClient, BulkActionReport, ClientError};
use crate::client::events::{EventBus, TrackingEvent};
use crate::client::filters::FilterState;
use crate::client::list_state::TrackingListState;
use crate::dto::tracking_dto::{
    BatchCreateResponse, BatchCreateTrackingRequest, ForwarderSummary, LogisticsCompanySummary,
    UpdateTrackingRequest,
};
use crate::models::TrackingStatus;

pub struct TrackingListView {
    client: ApiClient,
    bus: EventBus,
    pub filters: FilterState,
    pub state: TrackingListState,
}

impl TrackingListView {
    pub fn new(client: ApiClient, bus: EventBus) -> Self {
        Self {
            client,
            bus,
            filters: FilterState::default(),
            state: TrackingListState::new(),
        }
    }

    /// Refetch de la lista con los filtros actuales más el conteo total.
    /// Publica el par total/filtrado para la barra de filtros.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        let rows = self.client.list_trackings(&self.filters).await?;
        let total = self.client.count_trackings().await?.count;
        let filtered = rows.len() as i64;

        self.state.set_rows(rows);
        self.bus
            .publish(TrackingEvent::CountsUpdated { total, filtered });

        Ok(())
    }

    /// Aplica filtros nuevos (p. ej. parseados del query string) y refresca
    pub async fn apply_filters(&mut self, filters: FilterState) -> Result<(), ClientError> {
        self.filters = filters;
        self.refresh().await
    }

    /// Alta masiva; en éxito notifica al resto de la UI vía bus
    pub async fn submit_batch(
        &self,
        request: &BatchCreateTrackingRequest,
    ) -> Result<BatchCreateResponse, ClientError> {
        let response = self.client.create_batch(request).await?;
        self.bus.publish(TrackingEvent::TrackingsAdded {
            created: response.created,
            skipped: response.skipped,
        });
        Ok(response)
    }

    /// Reacción a los mensajes del bus: un alta masiva dispara el refetch
    pub async fn handle_event(&mut self, event: TrackingEvent) -> Result<(), ClientError> {
        match event {
            TrackingEvent::TrackingsAdded { .. } => self.refresh().await,
            TrackingEvent::CountsUpdated { .. } => Ok(()),
        }
    }

    // --- Ediciones inline ---

    pub async fn set_status(
        &mut self,
        id: Uuid,
        status: TrackingStatus,
    ) -> Result<(), ClientError> {
        let request = UpdateTrackingRequest {
            status: Some(status),
            ..Default::default()
        };
        self.client.update_tracking(id, &request).await?;
        self.state.update_status(id, status);
        Ok(())
    }

    pub async fn set_note(&mut self, id: Uuid, note: Option<String>) -> Result<(), ClientError> {
        let request = UpdateTrackingRequest {
            note: Some(note.clone()),
            ..Default::default()
        };
        self.client.update_tracking(id, &request).await?;
        self.state.update_note(id, note);
        Ok(())
    }

    pub async fn set_logistics_company(
        &mut self,
        id: Uuid,
        company: Option<LogisticsCompanySummary>,
    ) -> Result<(), ClientError> {
        let request = UpdateTrackingRequest {
            logistics_company_id: Some(company.as_ref().map(|summary| summary.id)),
            ..Default::default()
        };
        self.client.update_tracking(id, &request).await?;
        self.state.update_logistics_company(id, company);
        Ok(())
    }

    pub async fn set_forwarder(
        &mut self,
        id: Uuid,
        forwarder: Option<ForwarderSummary>,
    ) -> Result<(), ClientError> {
        let request = UpdateTrackingRequest {
            forwarder_id: Some(forwarder.as_ref().map(|summary| summary.id)),
            ..Default::default()
        };
        self.client.update_tracking(id, &request).await?;
        self.state.update_forwarder(id, forwarder);
        Ok(())
    }

    // --- Acciones por fila ---

    pub async fn archive_one(&mut self, id: Uuid) -> Result<(), ClientError> {
        self.client.archive_tracking(id).await?;
        self.state.remove(id);
        Ok(())
    }

    pub async fn delete_one(&mut self, id: Uuid) -> Result<(), ClientError> {
        self.client.delete_tracking(id).await?;
        self.state.remove(id);
        Ok(())
    }

    // --- Acciones masivas sobre la selección ---

    pub async fn archive_selected(&mut self) -> BulkActionReport {
        let ids = self.state.selected_ids_in_display_order();
        let report = self.client.bulk_archive(&ids).await;
        self.state.remove_many(&report.succeeded);
        report
    }

    pub async fn delete_selected(&mut self) -> BulkActionReport {
        let ids = self.state.selected_ids_in_display_order();
        let report = self.client.bulk_delete(&ids).await;
        self.state.remove_many(&report.succeeded);
        report
    }
}
