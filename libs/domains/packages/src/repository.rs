use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{PackageError, PackageResult};
use crate::models::{Category, Package};

/// Repository trait for Package persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PackageRepository: Send + Sync {
    /// Insert a fully-built package
    async fn create(&self, package: Package) -> PackageResult<Package>;

    async fn get_by_id(&self, id: Uuid) -> PackageResult<Option<Package>>;

    /// All packages, optionally restricted to one category, ordered by name
    async fn list(&self, category: Option<Category>) -> PackageResult<Vec<Package>>;

    /// Replace a stored package; `NotFound` when the id is absent
    async fn update(&self, package: Package) -> PackageResult<Package>;

    /// Returns `false` when nothing was deleted
    async fn delete(&self, id: Uuid) -> PackageResult<bool>;
}

/// In-memory implementation of PackageRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryPackageRepository {
    packages: Arc<RwLock<HashMap<Uuid, Package>>>,
}

impl InMemoryPackageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PackageRepository for InMemoryPackageRepository {
    async fn create(&self, package: Package) -> PackageResult<Package> {
        let mut packages = self.packages.write().await;
        packages.insert(package.id, package.clone());

        tracing::info!(package_id = %package.id, "Created package");
        Ok(package)
    }

    async fn get_by_id(&self, id: Uuid) -> PackageResult<Option<Package>> {
        let packages = self.packages.read().await;
        Ok(packages.get(&id).cloned())
    }

    async fn list(&self, category: Option<Category>) -> PackageResult<Vec<Package>> {
        let packages = self.packages.read().await;

        let mut result: Vec<Package> = packages
            .values()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .cloned()
            .collect();
        result.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        Ok(result)
    }

    async fn update(&self, package: Package) -> PackageResult<Package> {
        let mut packages = self.packages.write().await;
        let slot = packages
            .get_mut(&package.id)
            .ok_or(PackageError::NotFound(package.id))?;
        *slot = package.clone();

        tracing::info!(package_id = %package.id, "Updated package");
        Ok(package)
    }

    async fn delete(&self, id: Uuid) -> PackageResult<bool> {
        let mut packages = self.packages.write().await;
        Ok(packages.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(name: &str, category: Category) -> Package {
        Package::new(name.to_string(), category, String::new(), None)
    }

    #[tokio::test]
    async fn list_filters_by_category_and_sorts_by_name() {
        let repo = InMemoryPackageRepository::new();
        repo.create(package("Silver", Category::Weddings)).await.unwrap();
        repo.create(package("Balloons", Category::Birthdays)).await.unwrap();
        repo.create(package("Gold", Category::Weddings)).await.unwrap();

        let weddings = repo.list(Some(Category::Weddings)).await.unwrap();
        let names: Vec<_> = weddings.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Gold", "Silver"]);

        assert_eq!(repo.list(None).await.unwrap().len(), 3);
        assert!(repo.list(Some(Category::HomeDecor)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_missing_package_is_not_found() {
        let repo = InMemoryPackageRepository::new();
        let result = repo.update(package("Ghost", Category::Engagement)).await;
        assert!(matches!(result, Err(PackageError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_reports_whether_anything_was_removed() {
        let repo = InMemoryPackageRepository::new();
        let created = repo.create(package("Gold", Category::Weddings)).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    }
}
