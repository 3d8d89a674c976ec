use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Event category. Both events and packages are filed under one of these.
///
/// Text form is the display label (`"Home Decor"`); parsing ignores ASCII case.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    ToSchema,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    Weddings,
    Engagement,
    Birthdays,
    #[serde(rename = "Home Decor")]
    #[strum(serialize = "Home Decor")]
    HomeDecor,
}

impl Category {
    /// Every category in display order.
    pub fn all() -> Vec<Category> {
        Category::iter().collect()
    }

    /// Parse user-supplied text, trimming surrounding whitespace.
    pub fn parse_label(raw: &str) -> Option<Category> {
        raw.trim().parse().ok()
    }
}

/// Package entity as stored in the `packages` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    #[serde(rename = "_id", alias = "id", with = "database::mongodb::uuid_string")]
    #[schema(value_type = String, format = Uuid)]
    pub id: Uuid,
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    /// Non-negative when present
    pub price: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a package
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePackage {
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "Name is required (max 200 characters)"))]
    pub name: String,
    /// One of the category labels
    #[serde(default)]
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[serde(default)]
    #[validate(length(max = 2000, message = "Description is too long"))]
    pub description: String,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,
}

/// DTO for partially updating a package
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePackage {
    #[validate(length(min = 1, max = 200, message = "Name must not be empty (max 200 characters)"))]
    pub name: Option<String>,
    pub category: Option<String>,
    #[validate(length(max = 2000, message = "Description is too long"))]
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,
}

/// Query filters for listing packages
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct PackageFilter {
    /// Restrict to one category label, e.g. `Weddings`
    pub category: Option<String>,
}

impl Package {
    pub fn new(name: String, category: Category, description: String, price: Option<f64>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name,
            category,
            description,
            price,
            created_at: now,
            updated_at: now,
        }
    }
}
