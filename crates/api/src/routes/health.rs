//! `GET /health`: database reachability plus the intake limits this
//! instance was started with.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use qrgen_core::batch::FanOut;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answers, `degraded` otherwise. Generation
    /// keeps working without it; only `/batchSubmit` needs it.
    pub status: &'static str,
    pub version: &'static str,
    pub database_reachable: bool,
    pub limits: IntakeLimits,
}

/// Runtime limits that shape how requests are accepted.
#[derive(Debug, Serialize)]
pub struct IntakeLimits {
    /// Concurrent item inserts per batch; `null` when unbounded.
    pub batch_insert_concurrency: Option<usize>,
    pub max_logo_bytes: usize,
    pub logo_fetch_timeout_secs: u64,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database_reachable = qrgen_db::health_check(&state.pool).await.is_ok();
    if !database_reachable {
        tracing::warn!("Health check could not reach the database");
    }

    let batch_insert_concurrency = match FanOut::from_limit(state.config.batch_insert_concurrency) {
        FanOut::Unbounded => None,
        FanOut::Limited(limit) => Some(limit.get()),
    };

    Json(HealthResponse {
        status: if database_reachable { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database_reachable,
        limits: IntakeLimits {
            batch_insert_concurrency,
            max_logo_bytes: state.config.max_logo_bytes,
            logo_fetch_timeout_secs: state.config.logo_fetch_timeout_secs,
        },
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
