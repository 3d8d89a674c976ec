//! Events Domain
//!
//! Bookable occasions with scheduling, location, an optional category and
//! package, and a one-way completion status.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Event Flow                            │
//! ├──────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  HTTP /api/event/event ──► EventService ──► EventRepository  │
//! │                                │               (MongoDB or   │
//! │                                │                in-memory)   │
//! │                                ▼                             │
//! │                       PackageRepository                      │
//! │                 (package/category consistency)               │
//! │                                                              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Status moves from `Not Completed` to `Completed` and never back.

use utoipa::OpenApi;

mod error;
pub mod handlers;
mod models;
mod mongodb;
mod repository;
mod service;

pub use error::{EventError, Result};
pub use handlers::{EventsState, events_router};
pub use models::{
    CountResponse, CreateEvent, Event, EventStatus, UpdateEvent, parse_date, parse_time,
};
pub use mongodb::MongoEventRepository;
pub use repository::{EventRepository, InMemoryEventRepository};
pub use service::EventService;

/// OpenAPI documentation for Events API
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_events,
        handlers::create_event,
        handlers::get_event,
        handlers::update_event,
        handlers::complete_event,
        handlers::delete_event,
        handlers::count_events,
    ),
    components(schemas(
        Event,
        EventStatus,
        CreateEvent,
        UpdateEvent,
        CountResponse,
        axum_helpers::ErrorResponse
    )),
    tags(
        (name = "events", description = "Event records and their completion lifecycle")
    )
)]
pub struct ApiDoc;
