//! [`BatchStore`] backed by the Postgres repositories.

use async_trait::async_trait;
use qrgen_core::batch::{BatchStatus, BatchStore, StoreError};
use qrgen_core::qr::QrCodeRequest;
use qrgen_core::types::{BatchId, DbId};

use crate::models::qr_code_item::CreateQrCodeItem;
use crate::repositories::{BatchRecordRepo, QrCodeItemRepo};
use crate::DbPool;

/// Writes batches through a shared connection pool.
#[derive(Clone)]
pub struct PgBatchStore {
    pool: DbPool,
}

impl PgBatchStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BatchStore for PgBatchStore {
    async fn create_batch_record(&self, status: BatchStatus) -> Result<BatchId, StoreError> {
        let record = BatchRecordRepo::create(&self.pool, status).await?;
        Ok(record.id)
    }

    async fn create_qr_code_item(
        &self,
        batch_id: BatchId,
        item: &QrCodeRequest,
    ) -> Result<DbId, StoreError> {
        let input = CreateQrCodeItem {
            batch_record_id: batch_id,
            request: item,
        };
        match QrCodeItemRepo::create(&self.pool, &input).await {
            Ok(row) => Ok(row.id),
            Err(e) => {
                tracing::warn!(%batch_id, error = %e, "Failed to insert batch item");
                Err(e.into())
            }
        }
    }
}
