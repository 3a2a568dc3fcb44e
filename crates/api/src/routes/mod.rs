pub mod health;
pub mod qr;

use axum::Router;

use crate::state::AppState;

/// Build the QR route tree.
///
/// Route hierarchy:
///
/// ```text
/// /generateQR                                      generate a QR code (POST)
/// /submitData                                      placeholder single submission (POST)
/// /batchSubmit                                     queue a batch (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(qr::router())
}
