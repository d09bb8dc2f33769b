//! Database engine handle

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection};
use std::sync::Arc;

use crate::database::config::DatabaseConfig;
use crate::error::FrameworkError;

/// Shared handle to the connection pool
///
/// Clones are cheap and all point at the same pool. The pool connects
/// lazily: no network I/O happens until a session first needs a connection.
///
/// # Example
///
/// ```rust,ignore
/// let engine = Engine::connect(&config).await?;
/// let users = user::Entity::find().all(engine.inner()).await?;
/// ```
#[derive(Clone, Debug)]
pub struct Engine {
    inner: Arc<DatabaseConnection>,
}

impl Engine {
    /// Build the engine from config
    ///
    /// Only the driver's own URL parsing can fail here. Unreachable hosts and
    /// bad credentials surface on first use. The connection string is masked
    /// in the returned error; passwords the driver quotes on their own are not.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, FrameworkError> {
        if let Some(path) = config.sqlite_file_path() {
            // SQLite refuses to create missing parent directories
            if let Some(parent) = std::path::Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        FrameworkError::database(format!(
                            "cannot create directory for {}: {}",
                            path, e
                        ))
                    })?;
                }
            }
        }

        let mut opt = ConnectOptions::new(config.driver_url());
        opt.connect_lazy(true).sqlx_logging(config.echo);

        let conn = Database::connect(opt)
            .await
            .map_err(|e| FrameworkError::database(config.scrub(&e.to_string())))?;
        tracing::debug!(
            backend = ?conn.get_database_backend(),
            echo = config.echo,
            "database engine created"
        );

        Ok(Self {
            inner: Arc::new(conn),
        })
    }

    /// Get a reference to the underlying SeaORM connection
    pub fn inner(&self) -> &DatabaseConnection {
        &self.inner
    }

    pub fn backend(&self) -> DatabaseBackend {
        self.inner.get_database_backend()
    }

    /// True when both handles share one pool
    pub fn same_pool(&self, other: &Engine) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl AsRef<DatabaseConnection> for Engine {
    fn as_ref(&self) -> &DatabaseConnection {
        &self.inner
    }
}

impl std::ops::Deref for Engine {
    type Target = DatabaseConnection;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
