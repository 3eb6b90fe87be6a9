use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use monitor_core::source::{AlertSink, BlockSource, JobPredicate, Registry, WorkLog};

use crate::scan;
use crate::AppState;

pub fn router<C, A>(state: Arc<AppState<C, A>>) -> Router
where
    C: Registry + BlockSource + JobPredicate + WorkLog + Send + Sync + 'static,
    A: AlertSink + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/check", post(run_check::<C, A>))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// The invocation boundary: an external scheduler POSTs here with no
/// payload. A top-level failure aborts the run and discards any verdicts
/// already computed; the body carries the error's message.
async fn run_check<C, A>(
    State(state): State<Arc<AppState<C, A>>>,
) -> Result<impl IntoResponse, (StatusCode, String)>
where
    C: Registry + BlockSource + JobPredicate + WorkLog + Send + Sync + 'static,
    A: AlertSink + Send + Sync + 'static,
{
    match scan::run_scan(&state.chain, &state.alerts).await {
        Ok(summary) => Ok(Json(summary)),
        Err(e) => {
            tracing::error!(error = %e, "scan aborted");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
