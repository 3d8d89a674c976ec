//! Packages Domain
//!
//! Service packages offered per event category, plus the shared
//! [`Category`] list used by the events domain and the admin console.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← /package endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← validation, category parsing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← trait + MongoDB / in-memory implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Category, Package, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_packages::{handlers, MongoPackageRepository, PackageService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let repository = MongoPackageRepository::new(client.database("event_admin"));
//! let router = handlers::router(PackageService::new(repository));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{PackageError, PackageResult};
pub use handlers::ApiDoc;
pub use models::{Category, CreatePackage, Package, PackageFilter, UpdatePackage};
pub use mongodb::MongoPackageRepository;
pub use repository::{InMemoryPackageRepository, PackageRepository};
pub use service::PackageService;
