//! Packages API routes

use axum::Router;
use domain_packages::{MongoPackageRepository, PackageRepository, PackageService, handlers};
use tracing::info;

/// Create packages router
pub fn router<R: PackageRepository + 'static>(repository: R) -> Router {
    handlers::router(PackageService::new(repository))
}

/// Initialize package indexes in MongoDB
pub async fn init_indexes(db: &mongodb::Database) -> eyre::Result<()> {
    MongoPackageRepository::new(db.clone())
        .create_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create package indexes: {}", e))?;
    info!("Package collection indexes created");
    Ok(())
}
