//! MongoDB connection management.

mod config;
mod connector;
mod health;
pub mod uuid_string;

pub use config::MongoConfig;
pub use connector::{
    MongoError, close, connect, connect_from_config, connect_from_config_with_retry,
    connect_with_retry,
};
pub use health::{HealthStatus, check_health, check_health_detailed};

pub use mongodb::{Client, Collection, Database};
