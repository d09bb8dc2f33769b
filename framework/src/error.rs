//! Framework-wide error types
//!
//! Driver failures are passed through as-is (as their message) so callers see
//! exactly what sea-orm reported.

use thiserror::Error;

/// Framework-wide error type
///
/// # Example
///
/// ```rust,ignore
/// use cna_db::{FrameworkError, DB};
///
/// async fn users() -> Result<(), FrameworkError> {
///     let db = DB::get()?;
///     let session = db.sessions().begin().await?; // DbErr converts automatically
///     session.commit().await
/// }
/// ```
#[derive(Debug, Clone, Error)]
pub enum FrameworkError {
    /// Service not found in the application container
    #[error("Service '{type_name}' not registered in container")]
    ServiceNotFound {
        /// The type name of the service that was not found
        type_name: &'static str,
    },

    /// Configuration could not be resolved or registered
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl FrameworkError {
    /// Create a ServiceNotFound error for a given type
    pub fn service_not_found<T: ?Sized>() -> Self {
        Self::ServiceNotFound {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Create a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a Database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Implement From<DbErr> for automatic error conversion with ?
impl From<sea_orm::DbErr> for FrameworkError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Database(e.to_string())
    }
}
