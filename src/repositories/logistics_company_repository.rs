//! Repositorio de LogisticsCompany

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::LogisticsCompany;
use crate::utils::errors::{conflict_error, is_unique_violation, AppError};

pub struct LogisticsCompanyRepository {
    pool: PgPool,
}

impl LogisticsCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Listado ordenado por nombre ascendente
    pub async fn list(&self) -> Result<Vec<LogisticsCompany>, AppError> {
        let companies = sqlx::query_as::<_, LogisticsCompany>(
            "SELECT * FROM logistics_companies ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(companies)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<LogisticsCompany>, AppError> {
        let company =
            sqlx::query_as::<_, LogisticsCompany>("SELECT * FROM logistics_companies WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(company)
    }

    /// Unicidad de nombre, exacta y case-sensitive. `exclude_id` permite
    /// reutilizar el chequeo en updates sin chocar con la propia fila.
    pub async fn name_exists(&self, name: &str, exclude_id: Option<Uuid>) -> Result<bool, AppError> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM logistics_companies WHERE name = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(name)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.0)
    }

    pub async fn create(
        &self,
        name: String,
        color: String,
        tracking_url: String,
    ) -> Result<LogisticsCompany, AppError> {
        let company = sqlx::query_as::<_, LogisticsCompany>(
            r#"
            INSERT INTO logistics_companies (id, name, color, tracking_url)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(color)
        .bind(tracking_url)
        .fetch_one(&self.pool)
        .await
        .map_err(map_name_conflict)?;

        Ok(company)
    }

    /// Actualiza con valores ya mergeados por el controller
    pub async fn update(
        &self,
        id: Uuid,
        name: String,
        color: String,
        tracking_url: String,
    ) -> Result<LogisticsCompany, AppError> {
        let company = sqlx::query_as::<_, LogisticsCompany>(
            r#"
            UPDATE logistics_companies
            SET name = $2, color = $3, tracking_url = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(color)
        .bind(tracking_url)
        .fetch_one(&self.pool)
        .await
        .map_err(map_name_conflict)?;

        Ok(company)
    }

    /// Borra la empresa anulando primero la FK en los trackings que la
    /// referencian. Ambos pasos van en una transacción: no existe ventana
    /// en la que la empresa desapareció pero los trackings siguen
    /// apuntándola, ni a la inversa.
    pub async fn delete_nulling_references(&self, id: Uuid) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;

        let detached = sqlx::query(
            "UPDATE trackings SET logistics_company_id = NULL, updated_at = NOW() WHERE logistics_company_id = $1",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        sqlx::query("DELETE FROM logistics_companies WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(detached)
    }
}

fn map_name_conflict(error: sqlx::Error) -> AppError {
    if is_unique_violation(&error) {
        conflict_error("logistics company", "name")
    } else {
        AppError::Database(error)
    }
}
