//! Process-wide database configuration for the shop microservices
//!
//! Resolves the connection URL (`DATABASE_URL`, else a per-profile fallback),
//! then builds one engine, one session factory and one model base per process.

pub mod config;
pub mod container;
pub mod database;
pub mod error;

pub use config::{env, env_optional, Config, Environment};
pub use container::App;
pub use database::{
    Database, DatabaseConfig, DatabaseConfigBuilder, DeploymentProfile, Engine, ModelBase,
    Session, SessionFactory, DB,
};
pub use error::FrameworkError;

// Re-export for entity definitions in downstream crates
pub use database::sea_orm;
