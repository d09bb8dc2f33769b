//! Application container
//!
//! Holds process-wide singletons keyed by type. The database bundle is
//! registered here by [`crate::DB::init`] so consumers resolve it instead of
//! reaching for module-level globals.
//!
//! # Example
//!
//! ```rust,ignore
//! use cna_db::{App, Database};
//!
//! App::singleton(database);
//! let db: Database = App::resolve()?;
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use crate::error::FrameworkError;

/// Global application container
static APP_CONTAINER: OnceLock<RwLock<Container>> = OnceLock::new();

/// Type-keyed store of shared instances
#[derive(Default)]
pub struct Container {
    bindings: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a singleton instance (shared across all resolutions)
    pub fn singleton<T: Any + Send + Sync + 'static>(&mut self, instance: T) {
        self.bindings.insert(TypeId::of::<T>(), Arc::new(instance));
    }

    /// Resolve a concrete type (requires Clone)
    pub fn get<T: Any + Send + Sync + Clone + 'static>(&self) -> Option<T> {
        self.bindings
            .get(&TypeId::of::<T>())?
            .downcast_ref::<T>()
            .cloned()
    }

    pub fn has<T: Any + 'static>(&self) -> bool {
        self.bindings.contains_key(&TypeId::of::<T>())
    }
}

/// Application container facade
pub struct App;

impl App {
    fn container() -> &'static RwLock<Container> {
        APP_CONTAINER.get_or_init(|| RwLock::new(Container::new()))
    }

    /// Register a singleton instance
    pub fn singleton<T: Any + Send + Sync + 'static>(instance: T) {
        if let Ok(mut c) = Self::container().write() {
            c.singleton(instance);
        }
    }

    /// Resolve a concrete type
    pub fn get<T: Any + Send + Sync + Clone + 'static>() -> Option<T> {
        let container = APP_CONTAINER.get()?;
        container.read().ok()?.get::<T>()
    }

    /// Resolve a concrete type, returning an error if not found
    pub fn resolve<T: Any + Send + Sync + Clone + 'static>() -> Result<T, FrameworkError> {
        Self::get::<T>().ok_or_else(FrameworkError::service_not_found::<T>)
    }

    /// Check if a concrete type is registered
    pub fn has<T: Any + 'static>() -> bool {
        APP_CONTAINER
            .get()
            .and_then(|c| c.read().ok())
            .map(|c| c.has::<T>())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Marker(&'static str);

    #[test]
    fn test_container_singleton_roundtrip() {
        let mut container = Container::new();
        assert!(container.get::<Marker>().is_none());

        container.singleton(Marker("users"));
        assert!(container.has::<Marker>());
        assert_eq!(container.get::<Marker>(), Some(Marker("users")));
    }

    #[test]
    fn test_resolve_missing_type_errors() {
        #[derive(Clone)]
        struct NeverRegistered;

        let err = App::resolve::<NeverRegistered>().err().unwrap();
        assert!(matches!(err, FrameworkError::ServiceNotFound { .. }));
    }
}
