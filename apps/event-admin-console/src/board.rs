//! Event board: the fetched rows plus loading and error state.

use domain_events::Event;
use tracing::warn;
use uuid::Uuid;

use crate::client::{ClientResult, EventApi};
use crate::filter::BoardFilter;

const FETCH_FAILED: &str = "Error fetching events";
const COMPLETE_FAILED: &str = "Error updating event status";
const DELETE_FAILED: &str = "Error deleting event";

/// Rows are only changed by successful calls. A failure records a generic
/// message in `error` and leaves the rows as they were.
#[derive(Debug, Default)]
pub struct EventBoard {
    events: Vec<Event>,
    loading: bool,
    error: Option<String>,
    pub filter: BoardFilter,
}

impl EventBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Rows passing the current filter
    pub fn visible(&self) -> Vec<&Event> {
        self.filter.apply(&self.events)
    }

    pub async fn load(&mut self, api: &dyn EventApi) -> ClientResult<()> {
        self.loading = true;
        self.error = None;
        let result = api.list_events().await;
        self.loading = false;

        let events = self.record(result, FETCH_FAILED)?;
        self.events = events;
        Ok(())
    }

    /// Replace the row with the server's completed copy
    pub async fn complete(&mut self, api: &dyn EventApi, id: Uuid) -> ClientResult<&Event> {
        let result = api.complete_event(id).await;
        let updated = self.record(result, COMPLETE_FAILED)?;

        let index = match self.events.iter().position(|e| e.id == id) {
            Some(index) => {
                self.events[index] = updated;
                index
            }
            None => {
                self.events.push(updated);
                self.events.len() - 1
            }
        };
        Ok(&self.events[index])
    }

    pub async fn delete(&mut self, api: &dyn EventApi, id: Uuid) -> ClientResult<()> {
        let result = api.delete_event(id).await;
        self.record(result, DELETE_FAILED)?;
        self.events.retain(|e| e.id != id);
        Ok(())
    }

    fn record<T>(&mut self, result: ClientResult<T>, message: &str) -> ClientResult<T> {
        result.inspect_err(|e| {
            warn!(error = %e, "{message}");
            self.error = Some(message.to_string());
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ClientError, MockEventApi};
    use chrono::{NaiveDate, NaiveTime};
    use domain_events::EventStatus;
    use domain_packages::Category;

    fn event(title: &str) -> Event {
        Event::new(
            title,
            NaiveDate::from_ymd_opt(2025, 6, 21).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            "Hall",
            "Details",
        )
    }

    fn server_error() -> ClientError {
        ClientError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        }
    }

    async fn loaded(events: Vec<Event>) -> EventBoard {
        let mut api = MockEventApi::new();
        api.expect_list_events()
            .returning(move || Ok(events.clone()));

        let mut board = EventBoard::new();
        board.load(&api).await.unwrap();
        board
    }

    #[tokio::test]
    async fn test_load_replaces_rows() {
        let board = loaded(vec![event("a"), event("b")]).await;
        assert_eq!(board.events().len(), 2);
        assert!(!board.is_loading());
        assert!(board.error().is_none());
    }

    #[tokio::test]
    async fn test_failed_load_keeps_rows() {
        let mut board = loaded(vec![event("a")]).await;

        let mut api = MockEventApi::new();
        api.expect_list_events().returning(|| Err(server_error()));
        assert!(board.load(&api).await.is_err());

        assert_eq!(board.events().len(), 1);
        assert_eq!(board.error(), Some("Error fetching events"));
        assert!(!board.is_loading());
    }

    #[tokio::test]
    async fn test_complete_replaces_row_with_server_copy() {
        let target = event("b");
        let id = target.id;
        let mut board = loaded(vec![event("a"), target.clone()]).await;

        let mut completed = target;
        completed.status = EventStatus::Completed;
        let mut api = MockEventApi::new();
        api.expect_complete_event()
            .returning(move |_| Ok(completed.clone()));

        let row = board.complete(&api, id).await.unwrap();
        assert_eq!(row.status, EventStatus::Completed);
        assert_eq!(board.events()[1].status, EventStatus::Completed);
        assert_eq!(board.events()[0].status, EventStatus::NotCompleted);
    }

    #[tokio::test]
    async fn test_failed_complete_leaves_rows() {
        let target = event("a");
        let id = target.id;
        let mut board = loaded(vec![target]).await;

        let mut api = MockEventApi::new();
        api.expect_complete_event()
            .returning(|_| Err(server_error()));

        assert!(board.complete(&api, id).await.is_err());
        assert_eq!(board.events()[0].status, EventStatus::NotCompleted);
        assert_eq!(board.error(), Some("Error updating event status"));
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let target = event("a");
        let id = target.id;
        let mut board = loaded(vec![target, event("b")]).await;

        let mut api = MockEventApi::new();
        api.expect_delete_event().returning(|_| Ok(()));
        board.delete(&api, id).await.unwrap();

        assert_eq!(board.events().len(), 1);
        assert_eq!(board.events()[0].title, "b");
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_row() {
        let target = event("a");
        let id = target.id;
        let mut board = loaded(vec![target]).await;

        let mut api = MockEventApi::new();
        api.expect_delete_event()
            .returning(|_| Err(server_error()));

        assert!(board.delete(&api, id).await.is_err());
        assert_eq!(board.events().len(), 1);
        assert_eq!(board.error(), Some("Error deleting event"));
    }

    #[tokio::test]
    async fn test_visible_applies_filter() {
        let mut wedding = event("Summer Wedding");
        wedding.category = Some(Category::Weddings);
        let mut board = loaded(vec![wedding, event("Office Party")]).await;

        board.filter.search = "PARTY".into();
        let visible = board.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Office Party");
    }
}
