//! Batch record entity model.

use qrgen_core::types::{BatchId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `batch_records` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BatchRecord {
    pub id: BatchId,
    pub status: String,
    pub created_at: Timestamp,
}
