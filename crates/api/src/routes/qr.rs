//! Route definitions for QR code generation and submission.

use axum::routing::post;
use axum::Router;

use crate::handlers::qr;
use crate::state::AppState;

/// QR routes, mounted at the root rather than under a version prefix.
///
/// ```text
/// POST   /generateQR     -> generate_qr_code
/// POST   /submitData     -> submit_data_for_qr
/// POST   /batchSubmit    -> submit_batch_request
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generateQR", post(qr::generate_qr_code))
        .route("/submitData", post(qr::submit_data_for_qr))
        .route("/batchSubmit", post(qr::submit_batch_request))
}
