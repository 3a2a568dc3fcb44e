//! Handlers for QR code generation, single submission, and batch intake.
//!
//! Any failure is returned as `500 {"error": ...}` via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use qrgen_core::batch::{self, FanOut};
use qrgen_core::qr::{BatchSubmitResponse, GenerationRequest, GenerationResponse, QrCodeRequest};
use qrgen_core::submission::{self, SubmissionRequest};

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for `POST /generateQR`.
#[derive(Debug, Deserialize)]
pub struct GenerateQrParams {
    pub color: String,
    #[serde(rename = "errorCorrectionLevel")]
    pub error_correction_level: String,
    pub logo: Option<String>,
    pub data: String,
    pub size: u32,
}

/// Query parameters for `POST /submitData`.
#[derive(Debug, Deserialize)]
pub struct SubmitDataParams {
    pub data: String,
    pub size: Option<u32>,
    pub color: Option<String>,
    pub error_correction_level: Option<String>,
    pub format: Option<String>,
}

// ---------------------------------------------------------------------------
// POST /generateQR
// ---------------------------------------------------------------------------

/// Generate a customized QR code and return it as base64 PNG.
pub async fn generate_qr_code(
    State(state): State<AppState>,
    Query(params): Query<GenerateQrParams>,
) -> AppResult<Json<GenerationResponse>> {
    let request = GenerationRequest {
        data: params.data,
        size: params.size,
        color: params.color,
        error_correction_level: params.error_correction_level,
        logo: params.logo,
    };

    let response = state.generator.generate(request).await?;

    tracing::info!(
        size = response.size,
        level = %response.error_correction_level,
        has_logo = response.logo.as_deref().is_some_and(|l| !l.is_empty()),
        "QR code served"
    );

    Ok(Json(response))
}

// ---------------------------------------------------------------------------
// POST /submitData
// ---------------------------------------------------------------------------

/// Accept data to be encoded in a QR code.
///
/// Returns a placeholder image; see [`qrgen_core::submission`].
pub async fn submit_data_for_qr(
    State(state): State<AppState>,
    Query(params): Query<SubmitDataParams>,
) -> AppResult<Json<GenerationResponse>> {
    let request = SubmissionRequest {
        data: params.data,
        size: params.size,
        color: params.color,
        error_correction_level: params.error_correction_level,
        format: params.format,
    };

    let response = submission::submit_data_for_qr(request, &state.submission_defaults);

    tracing::debug!(size = response.size, "Accepted single submission");

    Ok(Json(response))
}

// ---------------------------------------------------------------------------
// POST /batchSubmit
// ---------------------------------------------------------------------------

/// Queue a list of QR code requests for later processing.
pub async fn submit_batch_request(
    State(state): State<AppState>,
    Json(items): Json<Vec<QrCodeRequest>>,
) -> AppResult<Json<BatchSubmitResponse>> {
    let fan_out = FanOut::from_limit(state.config.batch_insert_concurrency);

    let response = batch::submit_batch_request(state.batch_store.as_ref(), &items, fan_out).await?;

    tracing::info!(
        batch_id = %response.batch_id,
        items = items.len(),
        "Accepted batch submission"
    );

    Ok(Json(response))
}
