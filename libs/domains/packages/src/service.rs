//! Package Service - validation and category parsing over the repository

use axum_helpers::validation_message;
use chrono::Utc;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{PackageError, PackageResult};
use crate::models::{Category, CreatePackage, Package, PackageFilter, UpdatePackage};
use crate::repository::PackageRepository;

pub struct PackageService<R: PackageRepository> {
    repository: Arc<R>,
}

pub(crate) fn parse_category(raw: &str) -> PackageResult<Category> {
    Category::parse_label(raw)
        .ok_or_else(|| PackageError::Validation(format!("category: Unknown category '{}'", raw.trim())))
}

fn require_text(field: &str, value: String) -> PackageResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PackageError::Validation(format!("{field}: must not be empty")));
    }
    Ok(trimmed.to_string())
}

fn check_price(price: Option<f64>) -> PackageResult<Option<f64>> {
    match price {
        Some(p) if !p.is_finite() || p < 0.0 => Err(PackageError::Validation(
            "price: Price must be a non-negative number".to_string(),
        )),
        other => Ok(other),
    }
}

impl<R: PackageRepository> PackageService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Shared handle to the repository, e.g. for the events domain's package lookup.
    pub fn repository(&self) -> Arc<R> {
        Arc::clone(&self.repository)
    }

    #[instrument(skip(self, input), fields(package_name = %input.name))]
    pub async fn create_package(&self, input: CreatePackage) -> PackageResult<Package> {
        input
            .validate()
            .map_err(|e| PackageError::Validation(validation_message(&e)))?;

        let name = require_text("name", input.name)?;
        let category = parse_category(&input.category)?;
        let price = check_price(input.price)?;

        let package = Package::new(name, category, input.description.trim().to_string(), price);
        self.repository.create(package).await
    }

    #[instrument(skip(self))]
    pub async fn list_packages(&self, filter: PackageFilter) -> PackageResult<Vec<Package>> {
        let category = filter
            .category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .map(parse_category)
            .transpose()?;

        self.repository.list(category).await
    }

    #[instrument(skip(self))]
    pub async fn get_package(&self, id: Uuid) -> PackageResult<Package> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(PackageError::NotFound(id))
    }

    #[instrument(skip(self, input))]
    pub async fn update_package(&self, id: Uuid, input: UpdatePackage) -> PackageResult<Package> {
        input
            .validate()
            .map_err(|e| PackageError::Validation(validation_message(&e)))?;

        let mut package = self.get_package(id).await?;

        if let Some(name) = input.name {
            package.name = require_text("name", name)?;
        }
        if let Some(category) = input.category {
            package.category = parse_category(&category)?;
        }
        if let Some(description) = input.description {
            package.description = description.trim().to_string();
        }
        if input.price.is_some() {
            package.price = check_price(input.price)?;
        }
        package.updated_at = Utc::now();

        self.repository.update(package).await
    }

    #[instrument(skip(self))]
    pub async fn delete_package(&self, id: Uuid) -> PackageResult<()> {
        if !self.repository.delete(id).await? {
            return Err(PackageError::NotFound(id));
        }
        Ok(())
    }
}

impl<R: PackageRepository> Clone for PackageService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
