//! Database module
//!
//! One process owns one [`Database`]: the resolved config, the engine
//! (connection pool), a session factory bound to it and the model base that
//! entities declare themselves on.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use cna_db::{Config, DB};
//!
//! // 1. Resolve config (loads .env files, reads DATABASE_URL)
//! Config::init(std::path::Path::new("."))?;
//!
//! // 2. Build the handles once at startup
//! let db = DB::init().await?;
//!
//! // 3. Hand them to consumers, or resolve later
//! let session = DB::get()?.sessions().begin().await?;
//! ```

pub mod config;
pub mod connection;
pub mod model;
pub mod session;

pub use config::{DatabaseConfig, DatabaseConfigBuilder, DeploymentProfile};
pub use connection::Engine;
pub use model::ModelBase;
pub use session::{Session, SessionFactory};

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::error::FrameworkError;
use crate::{App, Config};

/// The per-process database handles
///
/// Cheap to clone; clones share the engine, session factory and model base.
#[derive(Clone, Debug)]
pub struct Database {
    config: Arc<DatabaseConfig>,
    sessions: SessionFactory,
    models: Arc<ModelBase>,
}

impl Database {
    /// Build engine, session factory and model base from `config`
    ///
    /// Each call builds a fresh set of handles. Use [`DB::init`] for the
    /// process-wide instance.
    pub async fn connect(config: DatabaseConfig) -> Result<Self, FrameworkError> {
        let engine = Engine::connect(&config).await?;

        Ok(Self {
            config: Arc::new(config),
            sessions: SessionFactory::new(engine),
            models: Arc::new(ModelBase::new()),
        })
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    pub fn engine(&self) -> &Engine {
        self.sessions.engine()
    }

    pub fn sessions(&self) -> &SessionFactory {
        &self.sessions
    }

    pub fn models(&self) -> &ModelBase {
        &self.models
    }

    /// True when both bundles hold the very same handles
    pub fn same_instance(&self, other: &Database) -> bool {
        self.engine().same_pool(other.engine()) && Arc::ptr_eq(&self.models, &other.models)
    }
}

static INSTANCE: OnceCell<Database> = OnceCell::const_new();

/// Database facade - process-wide init-once access
///
/// The first successful `init` builds the [`Database`] and registers it in
/// the application container. Every later call, concurrent or not, returns
/// that same instance and ignores its config argument.
pub struct DB;

impl DB {
    /// Initialize from the registered [`DatabaseConfig`]
    ///
    /// Falls back to [`DatabaseConfig::from_env`] when `Config::init` has not
    /// registered one.
    pub async fn init() -> Result<Database, FrameworkError> {
        let config = match Config::get::<DatabaseConfig>() {
            Some(config) => config,
            None => DatabaseConfig::from_env()?,
        };
        Self::init_with(config).await
    }

    /// Initialize with an explicit config
    pub async fn init_with(config: DatabaseConfig) -> Result<Database, FrameworkError> {
        let db = INSTANCE
            .get_or_try_init(|| async move {
                tracing::info!(
                    profile = %config.profile,
                    url = %config.redacted_url(),
                    echo = config.echo,
                    "initializing database"
                );
                let db = Database::connect(config).await?;
                App::singleton(db.clone());
                Ok::<_, FrameworkError>(db)
            })
            .await?;

        Ok(db.clone())
    }

    /// Get the initialized database
    ///
    /// # Errors
    ///
    /// Returns an error if `DB::init()` was not called.
    pub fn get() -> Result<Database, FrameworkError> {
        INSTANCE
            .get()
            .cloned()
            .ok_or_else(FrameworkError::service_not_found::<Database>)
    }

    pub fn is_initialized() -> bool {
        INSTANCE.initialized()
    }
}

// Re-export sea_orm types that users commonly need
pub use sea_orm;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn memory_config() -> DatabaseConfig {
        DatabaseConfig::builder()
            .url("sqlite::memory:")
            .echo(false)
            .build()
    }

    #[tokio::test]
    async fn test_connect_builds_independent_bundles() {
        let a = Database::connect(memory_config()).await.unwrap();
        let b = Database::connect(memory_config()).await.unwrap();

        assert!(a.same_instance(&a.clone()));
        assert!(!a.same_instance(&b));
        assert!(a.sessions().engine().same_pool(a.engine()));
        assert_eq!(a.config().url, "sqlite::memory:");
    }

    // The only test touching the global instance.
    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_init_is_once_per_process() {
        let handles: Vec<_> = (0..16)
            .map(|_| tokio::spawn(DB::init_with(memory_config())))
            .collect();

        let mut racers = Vec::new();
        for handle in handles {
            racers.push(handle.await.unwrap().unwrap());
        }

        let first = &racers[0];
        for other in &racers[1..] {
            assert!(first.same_instance(other));
        }

        let later = DB::init_with(
            DatabaseConfig::builder()
                .url("sqlite://./never-opened.db")
                .build(),
        )
        .await
        .unwrap();

        assert!(DB::is_initialized());
        assert!(first.same_instance(&later));
        assert!(first.same_instance(&DB::get().unwrap()));
        assert!(first.same_instance(&App::resolve::<Database>().unwrap()));
        assert_eq!(later.config().url, "sqlite::memory:");

        // Overwriting the container entry does not change what DB hands out.
        let stranger = Database::connect(memory_config()).await.unwrap();
        App::singleton(stranger.clone());

        assert!(first.same_instance(&DB::get().unwrap()));
        assert!(!stranger.same_instance(&DB::get().unwrap()));
    }
}
