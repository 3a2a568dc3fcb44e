//! QR code item entity model and DTOs.

use qrgen_core::qr::QrCodeRequest;
use qrgen_core::types::{BatchId, DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `qr_code_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QrCodeItem {
    pub id: DbId,
    pub batch_record_id: BatchId,
    pub data: String,
    pub size: i32,
    pub color: String,
    pub error_correction_level: String,
    pub format: String,
    pub created_at: Timestamp,
}

/// DTO for inserting an item under an existing batch.
#[derive(Debug, Clone)]
pub struct CreateQrCodeItem<'a> {
    pub batch_record_id: BatchId,
    pub request: &'a QrCodeRequest,
}
