//! Configuration module
//!
//! - `.env` file loading with environment-based precedence
//! - Type-safe configuration structs stored by type
//!
//! # Example
//!
//! ```rust,no_run
//! use cna_db::{Config, DatabaseConfig};
//!
//! Config::init(std::path::Path::new(".")).expect("invalid environment");
//!
//! let db = Config::get::<DatabaseConfig>().unwrap();
//! println!("Database profile: {}", db.profile);
//! ```

pub mod env;
pub mod repository;

pub use env::{env, env_optional, load_dotenv, Environment};

use std::path::Path;

use crate::database::DatabaseConfig;
use crate::error::FrameworkError;

/// Main Config facade for accessing configuration
pub struct Config;

impl Config {
    /// Initialize the configuration system
    ///
    /// Loads `.env` files from `project_root` and registers the
    /// [`DatabaseConfig`] resolved from the resulting environment.
    ///
    /// # Errors
    ///
    /// Fails when a database variable is set but is not valid UTF-8.
    pub fn init(project_root: &Path) -> Result<Environment, FrameworkError> {
        let env = env::load_dotenv(project_root);

        let database = DatabaseConfig::from_env()?;
        tracing::info!(
            environment = %env,
            profile = %database.profile,
            url = %database.redacted_url(),
            "resolved database configuration"
        );
        repository::put(database);

        Ok(env)
    }

    /// Get a typed config struct registered by [`Config::init`]
    pub fn get<T: std::any::Any + Clone>() -> Option<T> {
        repository::get::<T>()
    }
}
