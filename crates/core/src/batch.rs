//! Batch intake: persist a queued batch and one row per requested QR code.
//!
//! Nothing here renders images. Rows are written through a [`BatchStore`]
//! and stay `queued`; no code in this workspace processes them further.

use std::num::NonZeroUsize;

use async_trait::async_trait;
use futures::future::join_all;
use futures::stream::{self, StreamExt};

use crate::error::CoreError;
use crate::qr::{BatchSubmitResponse, QrCodeRequest, BATCH_QUEUED_MESSAGE};
use crate::types::{BatchId, DbId};

/// Default cap on concurrent item inserts per batch.
pub const DEFAULT_INSERT_CONCURRENCY: usize = 16;

/// Error type surfaced by store implementations.
pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

/// Lifecycle state of a batch record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    Queued,
}

impl BatchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Queued => "queued",
        }
    }
}

/// Create-only persistence for batches and their items.
#[async_trait]
pub trait BatchStore: Send + Sync {
    /// Insert a batch record and return its generated id.
    async fn create_batch_record(&self, status: BatchStatus) -> Result<BatchId, StoreError>;

    /// Insert one item belonging to `batch_id` and return its id.
    async fn create_qr_code_item(
        &self,
        batch_id: BatchId,
        item: &QrCodeRequest,
    ) -> Result<DbId, StoreError>;
}

/// How many item inserts may be in flight at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanOut {
    /// Every insert is issued at once.
    Unbounded,
    /// At most this many inserts run concurrently.
    Limited(NonZeroUsize),
}

impl FanOut {
    /// `0` means unbounded.
    pub fn from_limit(limit: usize) -> Self {
        NonZeroUsize::new(limit).map_or(Self::Unbounded, Self::Limited)
    }
}

impl Default for FanOut {
    fn default() -> Self {
        Self::from_limit(DEFAULT_INSERT_CONCURRENCY)
    }
}

/// Queue a batch of QR code requests.
///
/// The batch record is created first; if that fails no items are written.
/// Item inserts run concurrently and all of them settle before any failure
/// is reported. Items that did succeed are not rolled back.
pub async fn submit_batch_request(
    store: &dyn BatchStore,
    items: &[QrCodeRequest],
    fan_out: FanOut,
) -> Result<BatchSubmitResponse, CoreError> {
    let batch_id = store
        .create_batch_record(BatchStatus::Queued)
        .await
        .map_err(|e| CoreError::BatchCreation(e.to_string()))?;

    // Collected up front so the handler future stays `Send`.
    let creates: Vec<_> = items
        .iter()
        .map(|item| store.create_qr_code_item(batch_id, item))
        .collect();

    let results: Vec<Result<DbId, StoreError>> = match fan_out {
        FanOut::Unbounded => join_all(creates).await,
        FanOut::Limited(limit) => {
            stream::iter(creates)
                .buffer_unordered(limit.get())
                .collect::<Vec<_>>()
                .await
        }
    };

    let total = results.len();
    let failures: Vec<StoreError> = results.into_iter().filter_map(Result::err).collect();

    if let Some(first) = failures.first() {
        tracing::warn!(
            %batch_id,
            failed = failures.len(),
            total,
            error = %first,
            "Batch item inserts failed"
        );
        return Err(CoreError::ItemCreation {
            failed: failures.len(),
            total,
            reason: first.to_string(),
        });
    }

    tracing::info!(%batch_id, items = total, "Batch queued");

    Ok(BatchSubmitResponse {
        batch_id,
        message: BATCH_QUEUED_MESSAGE.to_string(),
    })
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
