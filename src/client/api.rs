//! Cliente HTTP tipado de la API de trackings
//!
//! Este módulo contiene el cliente que consume la capa de vista: un método
//! por endpoint más las operaciones masivas sobre la selección. Las
//! acciones masivas disparan un request independiente por id, esperan a
//! que todos terminen y reportan el resultado por ítem. Sin timeouts ni
//! reintentos en ningún request.

use futures::future::join_all;
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use uuid::Uuid;

use crate::client::filters::FilterState;
use crate::dto::forwarder_dto::ForwarderResponse;
use crate::dto::logistics_company_dto::LogisticsCompanyResponse;
use crate::dto::tracking_dto::{
    BatchCreateResponse, BatchCreateTrackingRequest, CountResponse, CreateTrackingRequest,
    TrackingResponse, UpdateTrackingRequest,
};
use crate::dto::MessageResponse;

/// Errores del cliente HTTP
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
}

/// Falla individual dentro de una acción masiva
#[derive(Debug, Clone)]
pub struct BulkFailure {
    pub id: Uuid,
    pub message: String,
}

/// Resultado por ítem de una acción masiva
///
/// La vista solo retira de su estado local los ids en `succeeded`; los
/// fallidos permanecen visibles y consistentes con el servidor.
#[derive(Debug, Clone, Default)]
pub struct BulkActionReport {
    pub succeeded: Vec<Uuid>,
    pub failed: Vec<BulkFailure>,
}

impl BulkActionReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Cliente HTTP de la API de trackings
pub struct ApiClient {
    pub client: Client,
    pub base_url: String,
}

impl ApiClient {
    /// Crear nuevo cliente apuntando a la URL base del servicio
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Listado de trackings activos con los filtros actuales
    pub async fn list_trackings(
        &self,
        filters: &FilterState,
    ) -> Result<Vec<TrackingResponse>, ClientError> {
        let query = filters.to_query_string();
        let url = if query.is_empty() {
            format!("{}/trackings", self.base_url)
        } else {
            format!("{}/trackings?{}", self.base_url, query)
        };
        let response = self.client.get(url).send().await?;
        parse_response(response).await
    }

    pub async fn list_archived(&self) -> Result<Vec<TrackingResponse>, ClientError> {
        let response = self
            .client
            .get(format!("{}/trackings/archived", self.base_url))
            .send()
            .await?;
        parse_response(response).await
    }

    pub async fn count_trackings(&self) -> Result<CountResponse, ClientError> {
        let response = self
            .client
            .get(format!("{}/trackings/count", self.base_url))
            .send()
            .await?;
        parse_response(response).await
    }

    pub async fn get_tracking(&self, id: Uuid) -> Result<TrackingResponse, ClientError> {
        let response = self
            .client
            .get(format!("{}/trackings/{}", self.base_url, id))
            .send()
            .await?;
        parse_response(response).await
    }

    pub async fn create_tracking(
        &self,
        request: &CreateTrackingRequest,
    ) -> Result<TrackingResponse, ClientError> {
        let response = self
            .client
            .post(format!("{}/trackings", self.base_url))
            .json(request)
            .send()
            .await?;
        parse_response(response).await
    }

    pub async fn create_batch(
        &self,
        request: &BatchCreateTrackingRequest,
    ) -> Result<BatchCreateResponse, ClientError> {
        let response = self
            .client
            .post(format!("{}/trackings/batch", self.base_url))
            .json(request)
            .send()
            .await?;
        parse_response(response).await
    }

    pub async fn update_tracking(
        &self,
        id: Uuid,
        request: &UpdateTrackingRequest,
    ) -> Result<TrackingResponse, ClientError> {
        let response = self
            .client
            .patch(format!("{}/trackings/{}", self.base_url, id))
            .json(request)
            .send()
            .await?;
        parse_response(response).await
    }

    pub async fn delete_tracking(&self, id: Uuid) -> Result<MessageResponse, ClientError> {
        let response = self
            .client
            .delete(format!("{}/trackings/{}", self.base_url, id))
            .send()
            .await?;
        parse_response(response).await
    }

    pub async fn archive_tracking(&self, id: Uuid) -> Result<TrackingResponse, ClientError> {
        let response = self
            .client
            .post(format!("{}/trackings/{}/archive", self.base_url, id))
            .send()
            .await?;
        parse_response(response).await
    }

    pub async fn unarchive_tracking(&self, id: Uuid) -> Result<TrackingResponse, ClientError> {
        let response = self
            .client
            .post(format!("{}/trackings/{}/unarchive", self.base_url, id))
            .send()
            .await?;
        parse_response(response).await
    }

    pub async fn list_logistics_companies(
        &self,
    ) -> Result<Vec<LogisticsCompanyResponse>, ClientError> {
        let response = self
            .client
            .get(format!("{}/logistics-companies", self.base_url))
            .send()
            .await?;
        parse_response(response).await
    }

    pub async fn list_forwarders(&self) -> Result<Vec<ForwarderResponse>, ClientError> {
        let response = self
            .client
            .get(format!("{}/forwarders", self.base_url))
            .send()
            .await?;
        parse_response(response).await
    }

    /// Borrado masivo: un DELETE por id, en paralelo
    pub async fn bulk_delete(&self, ids: &[Uuid]) -> BulkActionReport {
        let results = join_all(ids.iter().map(|id| async move {
            (*id, self.delete_tracking(*id).await.map(|_| ()))
        }))
        .await;

        collect_report(results)
    }

    /// Archivado masivo: un POST por id, en paralelo
    pub async fn bulk_archive(&self, ids: &[Uuid]) -> BulkActionReport {
        let results = join_all(ids.iter().map(|id| async move {
            (*id, self.archive_tracking(*id).await.map(|_| ()))
        }))
        .await;

        collect_report(results)
    }
}

fn collect_report(results: Vec<(Uuid, Result<(), ClientError>)>) -> BulkActionReport {
    let mut report = BulkActionReport::default();
    for (id, result) in results {
        match result {
            Ok(()) => report.succeeded.push(id),
            Err(error) => report.failed.push(BulkFailure {
                id,
                message: error.to_string(),
            }),
        }
    }
    report
}

/// Decodifica el body o traduce el `{"message"}` de error de la API
async fn parse_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let message = response
        .json::<MessageResponse>()
        .await
        .map(|body| body.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
