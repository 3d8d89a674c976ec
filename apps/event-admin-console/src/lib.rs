//! Event Admin Console
//!
//! The admin UI as plain state machines over a typed API client:
//!
//! - [`client`]: HTTP client for `/api/event/event` and `/api/package`
//! - [`board`]: fetched events with loading and error state
//! - [`filter`]: title search plus category selection
//! - [`form`]: event creation form
//! - [`package_picker`]: category to package selection with stale-response protection
//! - [`report`]: paginated plain-text report of the filtered rows

pub mod board;
pub mod client;
pub mod filter;
pub mod form;
pub mod package_picker;
pub mod report;

pub use board::EventBoard;
pub use client::{ClientError, EventAdminClient, EventApi};
pub use filter::BoardFilter;
pub use form::{EventForm, FormError, FormState};
pub use package_picker::{FetchTicket, PackagePicker, PickerState};
pub use report::{ReportOptions, render_report};
