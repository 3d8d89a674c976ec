//! Event service layer

use crate::error::{EventError, Result};
use crate::models::{CreateEvent, Event, UpdateEvent, parse_date, parse_time};
use crate::repository::EventRepository;
use chrono::Utc;
use domain_packages::{Category, PackageRepository};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

/// Event service: lifecycle rules, field validation and package consistency
pub struct EventService<R: EventRepository> {
    repository: R,
    packages: Option<Arc<dyn PackageRepository>>,
}

impl<R: EventRepository> EventService<R> {
    /// Create a new event service without a package directory.
    ///
    /// Package references are then only checked for shape and a matching category.
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            packages: None,
        }
    }

    /// Check package references against a package directory
    pub fn with_packages(mut self, packages: Arc<dyn PackageRepository>) -> Self {
        self.packages = Some(packages);
        self
    }

    /// Validate and store a new event
    #[instrument(skip(self, create), fields(event_title = %create.title))]
    pub async fn create(&self, create: CreateEvent) -> Result<Event> {
        create.validate()?;

        let mut errors = Vec::new();
        let title = required("title", "Title", &create.title, &mut errors);
        let location = required("location", "Location", &create.location, &mut errors);
        let description = required("description", "Description", &create.description, &mut errors);
        let date = required("date", "Date", &create.date, &mut errors)
            .and_then(|raw| date_field(&raw, &mut errors));
        let time = required("time", "Time", &create.time, &mut errors)
            .and_then(|raw| time_field(&raw, &mut errors));

        let (Some(title), Some(date), Some(time), Some(location), Some(description)) =
            (title, date, time, location, description)
        else {
            return Err(EventError::validation(errors.join("; ")));
        };

        let category = parse_category(create.category.as_deref())?;
        let package_id = parse_package_id(create.package_id.as_deref())?;
        self.check_package(category, package_id).await?;

        let event = Event::new(title, date, time, location, description)
            .with_category(category, package_id);
        let event = self.repository.create(event).await?;
        info!(event_id = %event.id, "Event created");

        Ok(event)
    }

    /// Every event in insertion order
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Event>> {
        self.repository.list().await
    }

    /// Get event by ID
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: Uuid) -> Result<Event> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(EventError::NotFound { id })
    }

    /// Merge the supplied fields into a stored event.
    ///
    /// Changing the category without naming a package drops the old package.
    /// Status is left to the store, so a completion is never undone here.
    #[instrument(skip(self, update))]
    pub async fn update(&self, id: Uuid, update: UpdateEvent) -> Result<Event> {
        update.validate()?;
        let mut event = self.get_by_id(id).await?;

        let mut errors = Vec::new();
        if let Some(raw) = update.title {
            replace_text(&mut event.title, "title", "Title", &raw, &mut errors);
        }
        if let Some(raw) = update.location {
            replace_text(&mut event.location, "location", "Location", &raw, &mut errors);
        }
        if let Some(raw) = update.description {
            replace_text(&mut event.description, "description", "Description", &raw, &mut errors);
        }
        if let Some(date) = update.date.and_then(|raw| date_field(&raw, &mut errors)) {
            event.date = date;
        }
        if let Some(time) = update.time.and_then(|raw| time_field(&raw, &mut errors)) {
            event.time = time;
        }
        if !errors.is_empty() {
            return Err(EventError::validation(errors.join("; ")));
        }

        // The stored reference was checked when written; packages may since be gone.
        let mut package_touched = false;
        if let Some(raw) = update.category.as_deref() {
            let category = parse_category(Some(raw))?;
            if category != event.category {
                event.category = category;
                event.package_id = None;
                package_touched = true;
            }
        }
        if let Some(raw) = update.package_id.as_deref() {
            event.package_id = parse_package_id(Some(raw))?;
            package_touched = true;
        }
        if package_touched {
            self.check_package(event.category, event.package_id).await?;
        }

        event.updated_at = Utc::now();
        let event = self.repository.update(event).await?;
        info!(event_id = %event.id, "Event updated");

        Ok(event)
    }

    /// Mark an event completed. Completing twice is not an error.
    #[instrument(skip(self))]
    pub async fn complete(&self, id: Uuid) -> Result<Event> {
        let event = self
            .repository
            .complete(id)
            .await?
            .ok_or(EventError::NotFound { id })?;
        info!(event_id = %id, "Event completed");
        Ok(event)
    }

    /// Delete event by ID
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.repository.delete(id).await? {
            return Err(EventError::NotFound { id });
        }
        info!(event_id = %id, "Event deleted");
        Ok(())
    }

    /// Number of stored events
    #[instrument(skip(self))]
    pub async fn count(&self) -> Result<u64> {
        self.repository.count().await
    }

    async fn check_package(&self, category: Option<Category>, package_id: Option<Uuid>) -> Result<()> {
        let Some(package_id) = package_id else {
            return Ok(());
        };
        let Some(category) = category else {
            return Err(EventError::validation(
                "packageId: A package can only be chosen together with a category",
            ));
        };
        let Some(packages) = &self.packages else {
            return Ok(());
        };

        let package = packages
            .get_by_id(package_id)
            .await?
            .ok_or_else(|| EventError::validation("packageId: Package not found"))?;

        if package.category != category {
            return Err(EventError::validation(format!(
                "packageId: Package '{}' belongs to {}, not {}",
                package.name, package.category, category
            )));
        }
        Ok(())
    }
}

fn required(field: &str, label: &str, raw: &str, errors: &mut Vec<String>) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(format!("{field}: {label} is required"));
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn replace_text(slot: &mut String, field: &str, label: &str, raw: &str, errors: &mut Vec<String>) {
    if let Some(value) = required(field, label, raw, errors) {
        *slot = value;
    }
}

fn date_field(raw: &str, errors: &mut Vec<String>) -> Option<chrono::NaiveDate> {
    let date = parse_date(raw);
    if date.is_none() {
        errors.push("date: Date must be a valid YYYY-MM-DD date".to_string());
    }
    date
}

fn time_field(raw: &str, errors: &mut Vec<String>) -> Option<chrono::NaiveTime> {
    let time = parse_time(raw);
    if time.is_none() {
        errors.push("time: Time must be HH:MM or HH:MM:SS".to_string());
    }
    time
}

/// Blank means no category.
fn parse_category(raw: Option<&str>) -> Result<Option<Category>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(label) => Category::parse_label(label)
            .map(Some)
            .ok_or_else(|| EventError::validation(format!("category: Unknown category '{label}'"))),
    }
}

/// Blank means no package.
fn parse_package_id(raw: Option<&str>) -> Result<Option<Uuid>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(id) => Uuid::parse_str(id)
            .map(Some)
            .map_err(|_| EventError::validation(format!("packageId: Invalid package id '{id}'"))),
    }
}
