//! Repository for the `qr_code_items` table.

use qrgen_core::types::BatchId;
use sqlx::PgPool;

use crate::models::qr_code_item::{CreateQrCodeItem, QrCodeItem};

const COLUMNS: &str = "id, batch_record_id, data, size, color, error_correction_level, format, \
                       created_at";

/// Provides create and lookup operations for batch items.
pub struct QrCodeItemRepo;

impl QrCodeItemRepo {
    /// Insert a new item, returning the created row.
    ///
    /// Fails with a foreign key violation if the batch does not exist.
    pub async fn create(
        pool: &PgPool,
        input: &CreateQrCodeItem<'_>,
    ) -> Result<QrCodeItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO qr_code_items
                (batch_record_id, data, size, color, error_correction_level, format)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QrCodeItem>(&query)
            .bind(input.batch_record_id)
            .bind(&input.request.data)
            .bind(input.request.size)
            .bind(&input.request.color)
            .bind(input.request.error_correction_level.as_str())
            .bind(input.request.format.as_str())
            .fetch_one(pool)
            .await
    }

    /// List the items of a batch in insertion order.
    pub async fn list_by_batch(
        pool: &PgPool,
        batch_record_id: BatchId,
    ) -> Result<Vec<QrCodeItem>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM qr_code_items WHERE batch_record_id = $1 ORDER BY id");
        sqlx::query_as::<_, QrCodeItem>(&query)
            .bind(batch_record_id)
            .fetch_all(pool)
            .await
    }
}
