//! Controller de LogisticsCompany

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::logistics_company_dto::{
    CreateLogisticsCompanyRequest, LogisticsCompanyResponse, UpdateLogisticsCompanyRequest,
};
use crate::dto::MessageResponse;
use crate::repositories::logistics_company_repository::LogisticsCompanyRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

/// Color de display por defecto
const DEFAULT_COLOR: &str = "#000000";

pub struct LogisticsCompanyController {
    repository: LogisticsCompanyRepository,
}

impl LogisticsCompanyController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: LogisticsCompanyRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<LogisticsCompanyResponse>, AppError> {
        let companies = self.repository.list().await?;
        Ok(companies.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<LogisticsCompanyResponse, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| not_found_error("logistics company"))
    }

    pub async fn create(
        &self,
        request: CreateLogisticsCompanyRequest,
    ) -> Result<LogisticsCompanyResponse, AppError> {
        request.validate()?;

        let name = request.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest(
                "logistics company name required".to_string(),
            ));
        }

        if self.repository.name_exists(&name, None).await? {
            return Err(conflict_error("logistics company", "name"));
        }

        let company = self
            .repository
            .create(
                name,
                request.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
                request.tracking_url.unwrap_or_default(),
            )
            .await?;

        Ok(company.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateLogisticsCompanyRequest,
    ) -> Result<LogisticsCompanyResponse, AppError> {
        request.validate()?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("logistics company"))?;

        let name = match request.name {
            Some(name) => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Err(AppError::BadRequest(
                        "logistics company name required".to_string(),
                    ));
                }
                if name != current.name && self.repository.name_exists(&name, Some(id)).await? {
                    return Err(conflict_error("logistics company", "name"));
                }
                name
            }
            None => current.name,
        };

        let company = self
            .repository
            .update(
                id,
                name,
                request.color.unwrap_or(current.color),
                request.tracking_url.unwrap_or(current.tracking_url),
            )
            .await?;

        Ok(company.into())
    }

    /// Borra la empresa; los trackings que la referencian quedan con la
    /// asociación en null, nunca se borran en cascada.
    pub async fn delete(&self, id: Uuid) -> Result<MessageResponse, AppError> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(not_found_error("logistics company"));
        }

        self.repository.delete_nulling_references(id).await?;

        Ok(MessageResponse::new("logistics company deleted"))
    }
}
