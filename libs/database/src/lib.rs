//! Database connectors and startup helpers.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB client, configuration, health probe
//! - `config` - `core_config::FromEnv` for [`mongodb::MongoConfig`]
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{self, MongoConfig};
//! use database::common::RetryConfig;
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "event_admin");
//! let client = mongodb::connect_from_config_with_retry(&config, Some(RetryConfig::new())).await?;
//! let db = client.database(config.database());
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult};
