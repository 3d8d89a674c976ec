use mongodb::{Client, bson::doc};
use std::time::Instant;

use crate::common::{DatabaseError, DatabaseResult};

/// Result of a timed ping.
#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub healthy: bool,
    pub message: Option<String>,
    pub response_time_ms: u64,
}

async fn ping(client: &Client) -> Result<(), mongodb::error::Error> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map(|_| ())
}

/// Ping the server; used by the readiness probe.
pub async fn check_health(client: &Client) -> DatabaseResult<()> {
    ping(client)
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))
}

/// Ping the server and report latency.
pub async fn check_health_detailed(client: &Client) -> HealthStatus {
    let start = Instant::now();
    let result = ping(client).await;
    let response_time_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(()) => HealthStatus {
            healthy: true,
            message: None,
            response_time_ms,
        },
        Err(e) => HealthStatus {
            healthy: false,
            message: Some(e.to_string()),
            response_time_ms,
        },
    }
}
