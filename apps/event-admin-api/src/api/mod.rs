//! API routes module
//!
//! All HTTP API routes of the event admin server.

pub mod events;
pub mod health;
pub mod packages;

use axum::Router;
use domain_events::{EventRepository, MongoEventRepository};
use domain_packages::{MongoPackageRepository, PackageRepository};

use crate::state::AppState;

/// Create all API routes backed by MongoDB
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    build(
        MongoEventRepository::new(&state.db),
        MongoPackageRepository::new(state.db.clone()),
    )
}

/// Mount both resources; the event service shares the package store.
fn build<E, P>(events: E, packages: P) -> Router
where
    E: EventRepository + 'static,
    P: PackageRepository + Clone + 'static,
{
    Router::new()
        .nest("/event", events::router(events, packages.clone()))
        .nest("/package", packages::router(packages))
}

/// Create indexes for every collection
pub async fn init_indexes(db: &mongodb::Database) -> eyre::Result<()> {
    events::init_indexes(db).await?;
    packages::init_indexes(db).await
}
