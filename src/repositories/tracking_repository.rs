//! Repositorio de Tracking
//!
//! Acceso a datos para la tabla trackings. Los listados devuelven la fila
//! con los padres embebidos vía LEFT JOIN para evitar N+1 desde la capa
//! de vista.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::tracking_dto::{
    ForwarderSummary, LogisticsCompanySummary, TrackingResponse, TrackingWithNote,
};
use crate::models::{Tracking, TrackingStatus};
use crate::utils::errors::{conflict_error, is_foreign_key_violation, is_unique_violation, AppError};

/// Fila del join trackings + padres
#[derive(Debug, sqlx::FromRow)]
pub struct TrackingJoinRow {
    pub id: Uuid,
    pub tracking_number: String,
    pub status: TrackingStatus,
    pub note: Option<String>,
    pub is_archived: bool,
    pub logistics_company_id: Option<Uuid>,
    pub forwarder_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub logistics_company_name: Option<String>,
    pub logistics_company_color: Option<String>,
    pub logistics_company_tracking_url: Option<String>,
    pub forwarder_name: Option<String>,
    pub forwarder_color: Option<String>,
}

impl From<TrackingJoinRow> for TrackingResponse {
    fn from(row: TrackingJoinRow) -> Self {
        let logistics_company = match (
            row.logistics_company_id,
            row.logistics_company_name,
            row.logistics_company_color,
            row.logistics_company_tracking_url,
        ) {
            (Some(id), Some(name), Some(color), Some(tracking_url)) => {
                Some(LogisticsCompanySummary {
                    id,
                    name,
                    color,
                    tracking_url,
                })
            }
            _ => None,
        };

        let forwarder = match (row.forwarder_id, row.forwarder_name, row.forwarder_color) {
            (Some(id), Some(name), Some(color)) => Some(ForwarderSummary { id, name, color }),
            _ => None,
        };

        Self {
            id: row.id,
            tracking_number: row.tracking_number,
            status: row.status,
            note: row.note,
            is_archived: row.is_archived,
            logistics_company_id: row.logistics_company_id,
            forwarder_id: row.forwarder_id,
            logistics_company,
            forwarder,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Resultado del alta masiva transaccional
#[derive(Debug)]
pub struct BatchInsertOutcome {
    pub created: u64,
    pub existing: Vec<String>,
}

const JOIN_SELECT: &str = r#"
SELECT t.id, t.tracking_number, t.status, t.note, t.is_archived,
       t.logistics_company_id, t.forwarder_id, t.created_at, t.updated_at,
       lc.name AS logistics_company_name,
       lc.color AS logistics_company_color,
       lc.tracking_url AS logistics_company_tracking_url,
       fw.name AS forwarder_name,
       fw.color AS forwarder_color
FROM trackings t
LEFT JOIN logistics_companies lc ON lc.id = t.logistics_company_id
LEFT JOIN forwarders fw ON fw.id = t.forwarder_id
"#;

pub struct TrackingRepository {
    pool: PgPool,
}

impl TrackingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Tracking>, AppError> {
        let tracking = sqlx::query_as::<_, Tracking>("SELECT * FROM trackings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(tracking)
    }

    pub async fn find_with_relations(
        &self,
        id: Uuid,
    ) -> Result<Option<TrackingResponse>, AppError> {
        let sql = format!("{} WHERE t.id = $1", JOIN_SELECT);
        let row = sqlx::query_as::<_, TrackingJoinRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(TrackingResponse::from))
    }

    /// Listado por defecto: solo no archivados, más reciente primero
    pub async fn list_active(
        &self,
        status: Option<TrackingStatus>,
        logistics_company_id: Option<Uuid>,
        forwarder_id: Option<Uuid>,
    ) -> Result<Vec<TrackingResponse>, AppError> {
        let sql = format!(
            r#"{}
            WHERE t.is_archived = FALSE
              AND ($1::tracking_status IS NULL OR t.status = $1)
              AND ($2::uuid IS NULL OR t.logistics_company_id = $2)
              AND ($3::uuid IS NULL OR t.forwarder_id = $3)
            ORDER BY t.created_at DESC
            "#,
            JOIN_SELECT
        );

        let rows = sqlx::query_as::<_, TrackingJoinRow>(&sql)
            .bind(status)
            .bind(logistics_company_id)
            .bind(forwarder_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(TrackingResponse::from).collect())
    }

    /// Archivados más recientes primero, acotado a `limit` filas
    pub async fn list_archived(&self, limit: i64) -> Result<Vec<TrackingResponse>, AppError> {
        let sql = format!(
            "{} WHERE t.is_archived = TRUE ORDER BY t.updated_at DESC LIMIT $1",
            JOIN_SELECT
        );

        let rows = sqlx::query_as::<_, TrackingJoinRow>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(TrackingResponse::from).collect())
    }

    pub async fn count_active(&self) -> Result<i64, AppError> {
        let row: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM trackings WHERE is_archived = FALSE")
                .fetch_one(&self.pool)
                .await?;

        Ok(row.0)
    }

    pub async fn tracking_number_exists(&self, tracking_number: &str) -> Result<bool, AppError> {
        let row: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM trackings WHERE tracking_number = $1)")
                .bind(tracking_number)
                .fetch_one(&self.pool)
                .await?;

        Ok(row.0)
    }

    pub async fn create(
        &self,
        tracking_number: String,
        status: TrackingStatus,
        note: Option<String>,
        logistics_company_id: Option<Uuid>,
        forwarder_id: Option<Uuid>,
    ) -> Result<Tracking, AppError> {
        let tracking = sqlx::query_as::<_, Tracking>(
            r#"
            INSERT INTO trackings (id, tracking_number, status, note, logistics_company_id, forwarder_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(tracking_number)
        .bind(status)
        .bind(note)
        .bind(logistics_company_id)
        .bind(forwarder_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(tracking)
    }

    /// Alta masiva: chequeo de existencia e inserts dentro de una única
    /// transacción, cerrando la ventana entre check e insert.
    pub async fn insert_batch(
        &self,
        entries: &[TrackingWithNote],
        status: TrackingStatus,
        logistics_company_id: Option<Uuid>,
        forwarder_id: Option<Uuid>,
    ) -> Result<BatchInsertOutcome, AppError> {
        let numbers: Vec<String> = entries
            .iter()
            .map(|entry| entry.tracking_number.clone())
            .collect();

        let mut tx = self.pool.begin().await?;

        let existing_rows: Vec<(String,)> =
            sqlx::query_as("SELECT tracking_number FROM trackings WHERE tracking_number = ANY($1)")
                .bind(&numbers)
                .fetch_all(&mut *tx)
                .await?;
        let existing: Vec<String> = existing_rows.into_iter().map(|row| row.0).collect();

        let mut created = 0u64;
        for entry in entries {
            if existing.contains(&entry.tracking_number) {
                continue;
            }
            sqlx::query(
                r#"
                INSERT INTO trackings (id, tracking_number, status, note, logistics_company_id, forwarder_id)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(&entry.tracking_number)
            .bind(status)
            .bind(&entry.note)
            .bind(logistics_company_id)
            .bind(forwarder_id)
            .execute(&mut *tx)
            .await
            .map_err(map_insert_error)?;
            created += 1;
        }

        tx.commit().await?;

        Ok(BatchInsertOutcome { created, existing })
    }

    /// Actualiza con valores ya mergeados por el controller
    pub async fn update(
        &self,
        id: Uuid,
        status: TrackingStatus,
        note: Option<String>,
        logistics_company_id: Option<Uuid>,
        forwarder_id: Option<Uuid>,
    ) -> Result<Tracking, AppError> {
        let tracking = sqlx::query_as::<_, Tracking>(
            r#"
            UPDATE trackings
            SET status = $2, note = $3, logistics_company_id = $4, forwarder_id = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(note)
        .bind(logistics_company_id)
        .bind(forwarder_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(tracking)
    }

    pub async fn set_archived(&self, id: Uuid, is_archived: bool) -> Result<Tracking, AppError> {
        let tracking = sqlx::query_as::<_, Tracking>(
            r#"
            UPDATE trackings
            SET is_archived = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(is_archived)
        .fetch_one(&self.pool)
        .await?;

        Ok(tracking)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM trackings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// Traduce violaciones de constraint a errores de dominio
fn map_insert_error(error: sqlx::Error) -> AppError {
    if is_unique_violation(&error) {
        conflict_error("tracking", "number")
    } else if is_foreign_key_violation(&error) {
        AppError::BadRequest("referenced logistics company or forwarder does not exist".to_string())
    } else {
        AppError::Database(error)
    }
}
