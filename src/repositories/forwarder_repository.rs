//! Repositorio de Forwarder

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Forwarder;
use crate::utils::errors::{conflict_error, is_unique_violation, AppError};

pub struct ForwarderRepository {
    pool: PgPool,
}

impl ForwarderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Listado ordenado por nombre ascendente
    pub async fn list(&self) -> Result<Vec<Forwarder>, AppError> {
        let forwarders =
            sqlx::query_as::<_, Forwarder>("SELECT * FROM forwarders ORDER BY name ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(forwarders)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Forwarder>, AppError> {
        let forwarder = sqlx::query_as::<_, Forwarder>("SELECT * FROM forwarders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(forwarder)
    }

    pub async fn name_exists(&self, name: &str, exclude_id: Option<Uuid>) -> Result<bool, AppError> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM forwarders WHERE name = $1 AND ($2::uuid IS NULL OR id <> $2))",
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
        address: Option<String>,
    ) -> Result<Forwarder, AppError> {
        let forwarder = sqlx::query_as::<_, Forwarder>(
            r#"
            INSERT INTO forwarders (id, name, color, address)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(color)
        .bind(address)
        .fetch_one(&self.pool)
        .await
        .map_err(map_name_conflict)?;

        Ok(forwarder)
    }

    /// Actualiza con valores ya mergeados por el controller
    pub async fn update(
        &self,
        id: Uuid,
        name: String,
        color: String,
        address: Option<String>,
    ) -> Result<Forwarder, AppError> {
        let forwarder = sqlx::query_as::<_, Forwarder>(
            r#"
            UPDATE forwarders
            SET name = $2, color = $3, address = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(color)
        .bind(address)
        .fetch_one(&self.pool)
        .await
        .map_err(map_name_conflict)?;

        Ok(forwarder)
    }

    /// Borra el forwarder anulando primero la FK en los trackings que lo
    /// referencian, en una única transacción.
    pub async fn delete_nulling_references(&self, id: Uuid) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;

        let detached = sqlx::query(
            "UPDATE trackings SET forwarder_id = NULL, updated_at = NOW() WHERE forwarder_id = $1",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        sqlx::query("DELETE FROM forwarders WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(detached)
    }
}

fn map_name_conflict(error: sqlx::Error) -> AppError {
    if is_unique_violation(&error) {
        conflict_error("forwarder", "name")
    } else {
        AppError::Database(error)
    }
}
