//! Events API routes
//!
//! Wires the events domain to MongoDB and to the package directory used for
//! package/category checks.

use axum::Router;
use domain_events::{EventRepository, EventService, MongoEventRepository};
use domain_packages::PackageRepository;
use std::sync::Arc;
use tracing::info;

/// Create the events router over any event store and package directory
pub fn router<R, P>(repository: R, packages: P) -> Router
where
    R: EventRepository + 'static,
    P: PackageRepository + 'static,
{
    let service = EventService::new(repository).with_packages(Arc::new(packages));

    // Use the domain's router
    domain_events::events_router().with_state(Arc::new(service))
}

/// Initialize event indexes in MongoDB
pub async fn init_indexes(db: &mongodb::Database) -> eyre::Result<()> {
    let repository = MongoEventRepository::new(db);
    repository
        .create_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create event indexes: {}", e))?;
    info!("Event collection indexes created");
    Ok(())
}
