//! Event domain models

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use domain_packages::Category;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Completion status. The only transition is `NotCompleted` to `Completed`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    ToSchema,
)]
pub enum EventStatus {
    #[default]
    #[serde(rename = "Not Completed")]
    #[strum(serialize = "Not Completed")]
    NotCompleted,
    Completed,
}

impl EventStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Event stored in the `events` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id", alias = "id", with = "database::mongodb::uuid_string")]
    #[schema(value_type = String, format = Uuid)]
    pub id: Uuid,
    pub title: String,
    #[schema(value_type = String, format = Date, example = "2025-06-21")]
    pub date: NaiveDate,
    #[schema(value_type = String, example = "14:30:00")]
    pub time: NaiveTime,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default, with = "database::mongodb::uuid_string::option")]
    #[schema(value_type = Option<String>, format = Uuid)]
    pub package_id: Option<Uuid>,
    #[serde(default)]
    pub status: EventStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// New uncategorised event, not yet completed
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
        location: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            title: title.into(),
            date,
            time,
            location: location.into(),
            description: description.into(),
            category: None,
            package_id: None,
            status: EventStatus::NotCompleted,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_category(mut self, category: Option<Category>, package_id: Option<Uuid>) -> Self {
        self.category = category;
        self.package_id = package_id;
        self
    }
}

/// DTO for creating an event. Any `status` or `id` in the body is ignored.
///
/// Missing text fields deserialize as empty and are rejected by the service.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    #[serde(default)]
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: String,

    /// `YYYY-MM-DD`
    #[serde(default)]
    #[schema(example = "2025-06-21")]
    pub date: String,

    /// `HH:MM` or `HH:MM:SS`
    #[serde(default)]
    #[schema(example = "14:30")]
    pub time: String,

    #[serde(default)]
    #[validate(length(max = 200, message = "Location must be at most 200 characters"))]
    pub location: String,

    #[serde(default)]
    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: String,

    /// One of the category labels, e.g. `"Home Decor"`
    pub category: Option<String>,

    /// Package in the same category. Empty means none.
    pub package_id: Option<String>,
}

/// DTO for a partial update. Absent fields keep their stored value.
///
/// An empty `category` or `packageId` clears that field.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEvent {
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    #[validate(length(max = 200, message = "Location must be at most 200 characters"))]
    pub location: Option<String>,
    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,
    pub category: Option<String>,
    pub package_id: Option<String>,
}

/// Response body of the count endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct CountResponse {
    pub count: u64,
}

/// Parse `YYYY-MM-DD`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Parse `HH:MM:SS`, falling back to `HH:MM`.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}
