//! Readiness endpoint

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use domain_events::{EventRepository, MongoEventRepository};
use tracing::debug;

use crate::state::AppState;

/// Create a readiness router, served at the root next to `/health`
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check: MongoDB answers a ping and the events collection is readable
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let events = MongoEventRepository::new(&state.db);

    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![
        (
            "mongodb",
            Box::pin(async {
                database::mongodb::check_health(&state.mongo_client)
                    .await
                    .map_err(|e| e.to_string())
            }),
        ),
        (
            "events",
            Box::pin(async {
                let count = events.count().await.map_err(|e| e.to_string())?;
                debug!(count, "Events collection readable");
                Ok::<(), String>(())
            }),
        ),
    ];

    run_health_checks(checks).await
}
