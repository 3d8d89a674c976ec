//! MongoDB implementation of EventRepository

use crate::error::{EventError, Result};
use crate::models::{Event, EventStatus};
use crate::repository::EventRepository;
use async_trait::async_trait;
use chrono::Utc;
use database::mongodb::uuid_string;
use futures_util::TryStreamExt;
use mongodb::bson::{Document, doc, to_bson, to_document};
use mongodb::options::{FindOptions, ReturnDocument};
use mongodb::{Collection, Database, IndexModel};
use tracing::instrument;
use uuid::Uuid;

/// MongoDB-based event repository
#[derive(Clone)]
pub struct MongoEventRepository {
    collection: Collection<Event>,
}

impl MongoEventRepository {
    /// Create a new MongoDB event repository
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection("events"),
        }
    }

    /// Create indexes for efficient querying
    pub async fn create_indexes(&self) -> Result<()> {
        let indexes = vec![
            // Report and calendar views read by date
            IndexModel::builder()
                .keys(doc! { "date": 1, "time": 1 })
                .build(),
            IndexModel::builder()
                .keys(doc! { "category": 1, "status": 1 })
                .build(),
            IndexModel::builder().keys(doc! { "packageId": 1 }).build(),
        ];

        self.collection.create_indexes(indexes).await?;
        Ok(())
    }

    fn id_filter(id: Uuid) -> Document {
        doc! { "_id": uuid_string::to_bson(id) }
    }

    /// Fields an update may write, encoded exactly as on insert.
    /// Status only changes through `complete`.
    fn editable_fields(event: &Event) -> Result<Document> {
        let mut fields = to_document(event)?;
        for key in ["_id", "status", "createdAt"] {
            fields.remove(key);
        }
        Ok(fields)
    }
}

#[async_trait]
impl EventRepository for MongoEventRepository {
    #[instrument(skip(self, event), fields(event_id = %event.id))]
    async fn create(&self, event: Event) -> Result<Event> {
        self.collection.insert_one(&event).await?;
        Ok(event)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Event>> {
        let event = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(event)
    }

    /// v7 ids are time-ordered, so `_id` ascending is insertion order.
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Event>> {
        let options = FindOptions::builder().sort(doc! { "_id": 1 }).build();

        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        let events: Vec<Event> = cursor.try_collect().await?;
        Ok(events)
    }

    #[instrument(skip(self, event), fields(event_id = %event.id))]
    async fn update(&self, event: Event) -> Result<Event> {
        let update = doc! { "$set": Self::editable_fields(&event)? };

        self.collection
            .find_one_and_update(Self::id_filter(event.id), update)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or(EventError::NotFound { id: event.id })
    }

    #[instrument(skip(self))]
    async fn complete(&self, id: Uuid) -> Result<Option<Event>> {
        let update = doc! {
            "$set": {
                "status": to_bson(&EventStatus::Completed)?,
                "updatedAt": to_bson(&Utc::now())?,
            }
        };

        let event = self
            .collection
            .find_one_and_update(Self::id_filter(id), update)
            .return_document(ReturnDocument::After)
            .await?;
        Ok(event)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;
        Ok(result.deleted_count > 0)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<u64> {
        let count = self.collection.count_documents(doc! {}).await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_filter_matches_stored_form() {
        let id = Uuid::now_v7();
        let filter = MongoEventRepository::id_filter(id);
        assert_eq!(filter.get_str("_id").unwrap(), id.to_string());
    }

    #[test]
    fn update_never_sets_status() {
        use chrono::{NaiveDate, NaiveTime};
        use domain_packages::Category;

        let event = Event::new(
            "Summer Wedding",
            NaiveDate::from_ymd_opt(2025, 6, 21).unwrap(),
            NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            "Rose Garden",
            "Ceremony",
        )
        .with_category(Some(Category::Weddings), Some(Uuid::now_v7()));

        let fields = MongoEventRepository::editable_fields(&event).unwrap();
        for key in ["_id", "status", "createdAt"] {
            assert!(!fields.contains_key(key), "{key} must not be written");
        }
        for key in ["title", "date", "time", "location", "description", "category", "packageId", "updatedAt"] {
            assert!(fields.contains_key(key), "{key} missing");
        }
        assert_eq!(
            fields.get_str("packageId").unwrap(),
            event.package_id.unwrap().to_string()
        );
    }
}
