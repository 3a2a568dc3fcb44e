use std::sync::Arc;

use qrgen_core::batch::BatchStore;
use qrgen_core::generation::QrGenerator;
use qrgen_core::submission::SubmissionDefaults;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: qrgen_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Direct QR generation (encoder, logo loader, compositor).
    pub generator: Arc<QrGenerator>,
    /// Destination for batch submissions.
    pub batch_store: Arc<dyn BatchStore>,
    /// Defaults for omitted single-submission fields.
    pub submission_defaults: Arc<SubmissionDefaults>,
}
