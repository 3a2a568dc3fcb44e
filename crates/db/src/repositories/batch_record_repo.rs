//! Repository for the `batch_records` table.

use qrgen_core::batch::BatchStatus;
use qrgen_core::types::BatchId;
use sqlx::PgPool;

use crate::models::batch_record::BatchRecord;

const COLUMNS: &str = "id, status, created_at";

/// Provides create and lookup operations for batch records.
pub struct BatchRecordRepo;

impl BatchRecordRepo {
    /// Insert a new batch record, returning the created row.
    pub async fn create(pool: &PgPool, status: BatchStatus) -> Result<BatchRecord, sqlx::Error> {
        let query = format!("INSERT INTO batch_records (status) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, BatchRecord>(&query)
            .bind(status.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a batch record by id.
    pub async fn find_by_id(pool: &PgPool, id: BatchId) -> Result<Option<BatchRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM batch_records WHERE id = $1");
        sqlx::query_as::<_, BatchRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
