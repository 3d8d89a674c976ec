//! MongoDB implementation of PackageRepository

use async_trait::async_trait;
use database::mongodb::uuid_string;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Document, doc, to_bson},
    options::FindOptions,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{PackageError, PackageResult};
use crate::models::{Category, Package};
use crate::repository::PackageRepository;

#[derive(Clone)]
pub struct MongoPackageRepository {
    collection: Collection<Package>,
}

impl MongoPackageRepository {
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, "packages")
    }

    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<Package>(collection_name),
        }
    }

    /// Index backing the by-category picker query.
    pub async fn create_indexes(&self) -> PackageResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "category": 1, "name": 1 })
            .build();
        self.collection.create_index(index).await?;
        Ok(())
    }

    fn id_filter(id: Uuid) -> Document {
        doc! { "_id": uuid_string::to_bson(id) }
    }

    fn build_filter(category: Option<Category>) -> PackageResult<Document> {
        let mut filter = Document::new();
        if let Some(category) = category {
            filter.insert("category", to_bson(&category)?);
        }
        Ok(filter)
    }
}

#[async_trait]
impl PackageRepository for MongoPackageRepository {
    #[instrument(skip(self, package), fields(package_id = %package.id, package_name = %package.name))]
    async fn create(&self, package: Package) -> PackageResult<Package> {
        self.collection.insert_one(&package).await?;

        tracing::info!("Package created successfully");
        Ok(package)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> PackageResult<Option<Package>> {
        let package = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(package)
    }

    #[instrument(skip(self))]
    async fn list(&self, category: Option<Category>) -> PackageResult<Vec<Package>> {
        let options = FindOptions::builder()
            .sort(doc! { "name": 1, "_id": 1 })
            .build();

        let cursor = self
            .collection
            .find(Self::build_filter(category)?)
            .with_options(options)
            .await?;
        let packages: Vec<Package> = cursor.try_collect().await?;

        Ok(packages)
    }

    #[instrument(skip(self, package), fields(package_id = %package.id))]
    async fn update(&self, package: Package) -> PackageResult<Package> {
        let result = self
            .collection
            .replace_one(Self::id_filter(package.id), &package)
            .await?;

        if result.matched_count == 0 {
            return Err(PackageError::NotFound(package.id));
        }

        tracing::info!("Package updated successfully");
        Ok(package)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> PackageResult<bool> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;

        if result.deleted_count > 0 {
            tracing::info!(package_id = %id, "Package deleted successfully");
        }
        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_filter_without_category_is_empty() {
        let filter = MongoPackageRepository::build_filter(None).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn build_filter_uses_display_label() {
        let filter = MongoPackageRepository::build_filter(Some(Category::HomeDecor)).unwrap();
        assert_eq!(filter.get_str("category").unwrap(), "Home Decor");
    }
}
