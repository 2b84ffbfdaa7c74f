//! Controller de Forwarder

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::forwarder_dto::{
    CreateForwarderRequest, ForwarderResponse, UpdateForwarderRequest,
};
use crate::dto::MessageResponse;
use crate::repositories::forwarder_repository::ForwarderRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

const DEFAULT_COLOR: &str = "#000000";

pub struct ForwarderController {
    repository: ForwarderRepository,
}

impl ForwarderController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ForwarderRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<ForwarderResponse>, AppError> {
        let forwarders = self.repository.list().await?;
        Ok(forwarders.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ForwarderResponse, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| not_found_error("forwarder"))
    }

    pub async fn create(
        &self,
        request: CreateForwarderRequest,
    ) -> Result<ForwarderResponse, AppError> {
        request.validate()?;

        let name = request.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("forwarder name required".to_string()));
        }

        if self.repository.name_exists(&name, None).await? {
            return Err(conflict_error("forwarder", "name"));
        }

        let forwarder = self
            .repository
            .create(
                name,
                request.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
                request.address,
            )
            .await?;

        Ok(forwarder.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateForwarderRequest,
    ) -> Result<ForwarderResponse, AppError> {
        request.validate()?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("forwarder"))?;

        let name = match request.name {
            Some(name) => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Err(AppError::BadRequest("forwarder name required".to_string()));
                }
                if name != current.name && self.repository.name_exists(&name, Some(id)).await? {
                    return Err(conflict_error("forwarder", "name"));
                }
                name
            }
            None => current.name,
        };

        // address: ausente = conservar, null = limpiar, "" = valor válido
        let address = match request.address {
            Some(address) => address,
            None => current.address,
        };

        let forwarder = self
            .repository
            .update(id, name, request.color.unwrap_or(current.color), address)
            .await?;

        Ok(forwarder.into())
    }

    /// Borra el forwarder; los trackings que lo referencian quedan con la
    /// asociación en null, nunca se borran en cascada.
    pub async fn delete(&self, id: Uuid) -> Result<MessageResponse, AppError> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(not_found_error("forwarder"));
        }

        self.repository.delete_nulling_references(id).await?;

        Ok(MessageResponse::new("forwarder deleted"))
    }
}
