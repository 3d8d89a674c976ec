//! HTTP handlers for events API

use crate::error::EventError;
use crate::models::{CountResponse, CreateEvent, Event, UpdateEvent};
use crate::repository::EventRepository;
use crate::service::EventService;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, patch};
use axum::{Json, Router};
use axum_helpers::{ErrorResponse, UuidPath, ValidatedJson};
use std::sync::Arc;
use tracing::instrument;

/// Events router state
pub type EventsState<R> = Arc<EventService<R>>;

/// Create the events router
///
/// Paths carry the `/event` resource segment; callers nest the router under `/api/event`.
pub fn events_router<R: EventRepository + 'static>() -> Router<EventsState<R>> {
    Router::new()
        .route("/event", get(list_events::<R>).post(create_event::<R>))
        .route("/event/count", get(count_events::<R>))
        .route(
            "/event/{id}",
            get(get_event::<R>)
                .put(update_event::<R>)
                .delete(delete_event::<R>),
        )
        .route("/event/{id}/complete", patch(complete_event::<R>))
}

/// List every event in insertion order
#[utoipa::path(
    get,
    path = "/event",
    responses(
        (status = 200, description = "All events", body = Vec<Event>),
        (status = 500, description = "Internal error", body = ErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip(state))]
pub async fn list_events<R: EventRepository>(
    State(state): State<EventsState<R>>,
) -> Result<Json<Vec<Event>>, EventError> {
    let events = state.list().await?;
    Ok(Json(events))
}

/// Create a new event
#[utoipa::path(
    post,
    path = "/event",
    request_body = CreateEvent,
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip(state, create), fields(event_title = %create.title))]
pub async fn create_event<R: EventRepository>(
    State(state): State<EventsState<R>>,
    ValidatedJson(create): ValidatedJson<CreateEvent>,
) -> Result<impl IntoResponse, EventError> {
    let event = state.create(create).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// Get event by ID
#[utoipa::path(
    get,
    path = "/event/{id}",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = Event),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip(state))]
pub async fn get_event<R: EventRepository>(
    State(state): State<EventsState<R>>,
    UuidPath(id): UuidPath,
) -> Result<Json<Event>, EventError> {
    let event = state.get_by_id(id).await?;
    Ok(Json(event))
}

/// Partially update an event
#[utoipa::path(
    put,
    path = "/event/{id}",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    request_body = UpdateEvent,
    responses(
        (status = 200, description = "Event updated", body = Event),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip(state, update))]
pub async fn update_event<R: EventRepository>(
    State(state): State<EventsState<R>>,
    UuidPath(id): UuidPath,
    ValidatedJson(update): ValidatedJson<UpdateEvent>,
) -> Result<Json<Event>, EventError> {
    let event = state.update(id, update).await?;
    Ok(Json(event))
}

/// Mark an event completed
#[utoipa::path(
    patch,
    path = "/event/{id}/complete",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event completed", body = Event),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip(state))]
pub async fn complete_event<R: EventRepository>(
    State(state): State<EventsState<R>>,
    UuidPath(id): UuidPath,
) -> Result<Json<Event>, EventError> {
    let event = state.complete(id).await?;
    Ok(Json(event))
}

/// Delete event by ID
#[utoipa::path(
    delete,
    path = "/event/{id}",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip(state))]
pub async fn delete_event<R: EventRepository>(
    State(state): State<EventsState<R>>,
    UuidPath(id): UuidPath,
) -> Result<StatusCode, EventError> {
    state.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Count stored events
#[utoipa::path(
    get,
    path = "/event/count",
    responses(
        (status = 200, description = "Event count", body = CountResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip(state))]
pub async fn count_events<R: EventRepository>(
    State(state): State<EventsState<R>>,
) -> Result<Json<CountResponse>, EventError> {
    let count = state.count().await?;
    Ok(Json(CountResponse { count }))
}
