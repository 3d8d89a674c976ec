//! Event creation form.
//!
//! `Idle -> Submitting -> Success | Failure`. Success resets every field,
//! failure keeps them so the user can correct and resubmit. A form with a
//! missing required field is never sent.

use domain_events::{CreateEvent, Event};
use domain_packages::{Category, Package};
use thiserror::Error;
use uuid::Uuid;

use crate::client::{ClientError, ClientResult, EventApi};
use crate::package_picker::{FetchTicket, PackagePicker};

const SUBMIT_FAILED: &str = "Error adding event";

#[derive(Debug, Error)]
pub enum FormError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Choose a category before choosing a package")]
    NoCategory,

    #[error("No package '{0}' in the selected category")]
    UnknownPackage(String),

    #[error(transparent)]
    Client(#[from] ClientError),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Success(Event),
    Failure(String),
}

/// Free-text inputs of the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
}

impl FormFields {
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("date", &self.date),
            ("time", &self.time),
            ("location", &self.location),
            ("description", &self.description),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

#[derive(Debug, Default)]
pub struct EventForm {
    pub fields: FormFields,
    picker: PackagePicker,
    state: FormState,
}

impl EventForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn picker(&self) -> &PackagePicker {
        &self.picker
    }

    pub fn category(&self) -> Option<Category> {
        self.picker.category()
    }

    pub fn package_id(&self) -> Option<Uuid> {
        self.picker.selected()
    }

    /// Changing the category drops the chosen package
    pub fn select_category(&mut self, category: Category) -> FetchTicket {
        self.picker.select_category(category)
    }

    pub fn apply_packages(&mut self, ticket: FetchTicket, result: Result<Vec<Package>, String>) -> bool {
        self.picker.apply(ticket, result)
    }

    pub async fn load_packages(
        &mut self,
        api: &dyn EventApi,
        category: Category,
    ) -> ClientResult<&[Package]> {
        self.picker.load(api, category).await
    }

    pub fn select_package(&mut self, id_or_name: &str) -> Result<&Package, FormError> {
        if self.picker.category().is_none() {
            return Err(FormError::NoCategory);
        }
        self.picker
            .select_package(id_or_name)
            .ok_or_else(|| FormError::UnknownPackage(id_or_name.to_string()))
    }

    /// Request body, or the list of missing required fields
    pub fn to_request(&self) -> Result<CreateEvent, FormError> {
        let missing = self.fields.missing();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }

        Ok(CreateEvent {
            title: self.fields.title.trim().to_string(),
            date: self.fields.date.trim().to_string(),
            time: self.fields.time.trim().to_string(),
            location: self.fields.location.trim().to_string(),
            description: self.fields.description.trim().to_string(),
            category: self.category().map(|c| c.to_string()),
            package_id: self.package_id().map(|id| id.to_string()),
        })
    }

    pub async fn submit(&mut self, api: &dyn EventApi) -> Result<Event, FormError> {
        let request = self.to_request()?;

        self.state = FormState::Submitting;
        match api.create_event(&request).await {
            Ok(event) => {
                self.reset();
                self.state = FormState::Success(event.clone());
                Ok(event)
            }
            Err(e) => {
                tracing::warn!(error = %e, "{SUBMIT_FAILED}");
                self.state = FormState::Failure(SUBMIT_FAILED.to_string());
                Err(e.into())
            }
        }
    }

    /// Clear fields, category and package
    pub fn reset(&mut self) {
        self.fields = FormFields::default();
        self.picker.clear();
        self.state = FormState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockEventApi;
    use chrono::{NaiveDate, NaiveTime};

    fn filled() -> EventForm {
        let mut form = EventForm::new();
        form.fields = FormFields {
            title: "Summer Wedding".into(),
            date: "2025-06-21".into(),
            time: "14:30".into(),
            location: "Rose Garden".into(),
            description: "Ceremony and reception".into(),
        };
        form
    }

    fn created(request: &CreateEvent) -> Event {
        Event::new(
            request.title.clone(),
            NaiveDate::from_ymd_opt(2025, 6, 21).unwrap(),
            NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            request.location.clone(),
            request.description.clone(),
        )
    }

    #[tokio::test]
    async fn test_missing_fields_never_transmit() {
        let mut api = MockEventApi::new();
        api.expect_create_event().times(0);

        let mut form = filled();
        form.fields.location = "  ".into();
        form.fields.date.clear();

        let err = form.submit(&api).await.unwrap_err();
        assert!(matches!(&err, FormError::MissingFields(f) if f == &vec!["date", "location"]));
        assert_eq!(form.state(), &FormState::Idle);
    }

    #[tokio::test]
    async fn test_success_resets_fields() {
        let mut api = MockEventApi::new();
        api.expect_create_event()
            .times(1)
            .returning(|request| Ok(created(request)));

        let mut form = filled();
        let ticket = form.select_category(Category::Weddings);
        let gold = Package::new("Gold".into(), Category::Weddings, String::new(), None);
        form.apply_packages(ticket, Ok(vec![gold]));
        form.select_package("Gold").unwrap();

        let event = form.submit(&api).await.unwrap();
        assert_eq!(event.title, "Summer Wedding");
        assert_eq!(form.fields, FormFields::default());
        assert_eq!(form.category(), None);
        assert_eq!(form.package_id(), None);
        assert!(matches!(form.state(), FormState::Success(_)));
    }

    #[tokio::test]
    async fn test_failure_keeps_fields() {
        let mut api = MockEventApi::new();
        api.expect_create_event().returning(|_| {
            Err(ClientError::Api {
                status: 400,
                message: "packageId: Package not found".into(),
            })
        });

        let mut form = filled();
        let before = form.fields.clone();

        let err = form.submit(&api).await.unwrap_err();
        assert!(err.to_string().contains("Package not found"));
        assert_eq!(form.fields, before);
        assert_eq!(form.state(), &FormState::Failure("Error adding event".into()));
    }

    #[test]
    fn test_request_carries_category_and_package() {
        let mut form = filled();
        let ticket = form.select_category(Category::HomeDecor);
        let vases = Package::new("Vases".into(), Category::HomeDecor, String::new(), Some(80.0));
        let id = vases.id;
        form.apply_packages(ticket, Ok(vec![vases]));
        form.select_package("vases").unwrap();

        let request = form.to_request().unwrap();
        assert_eq!(request.category.as_deref(), Some("Home Decor"));
        assert_eq!(request.package_id, Some(id.to_string()));
    }

    #[test]
    fn test_package_needs_category() {
        let mut form = filled();
        assert!(matches!(form.select_package("Gold"), Err(FormError::NoCategory)));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = filled();
        form.select_category(Category::Birthdays);
        form.reset();

        assert_eq!(form.fields, FormFields::default());
        assert_eq!(form.category(), None);
        assert_eq!(form.state(), &FormState::Idle);
    }
}
