//! Resolved configuration, keyed by type
//!
//! Written once by [`crate::Config::init`] and read by the database facade.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

type Entry = Box<dyn Any + Send + Sync>;

static RESOLVED: OnceLock<RwLock<ConfigStore>> = OnceLock::new();

/// One value per config type
#[derive(Default)]
pub struct ConfigStore {
    entries: HashMap<TypeId, Entry>,
}

impl ConfigStore {
    /// Store `config`, returning true when it replaced an earlier value
    pub fn put<T: Any + Send + Sync>(&mut self, config: T) -> bool {
        self.entries
            .insert(TypeId::of::<T>(), Box::new(config))
            .is_some()
    }

    pub fn get<T: Any + Clone>(&self) -> Option<T> {
        self.entries.get(&TypeId::of::<T>())?.downcast_ref::<T>().cloned()
    }
}

pub(crate) fn put<T: Any + Send + Sync>(config: T) {
    let replaced = RESOLVED
        .get_or_init(RwLock::default)
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .put(config);

    if replaced {
        tracing::debug!(config = std::any::type_name::<T>(), "config replaced");
    }
}

pub(crate) fn get<T: Any + Clone>() -> Option<T> {
    RESOLVED
        .get()?
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Probe(u32);

    #[test]
    fn test_put_reports_replacement() {
        let mut store = ConfigStore::default();
        assert_eq!(store.get::<Probe>(), None);

        assert!(!store.put(Probe(1)));
        assert!(store.put(Probe(2)));
        assert_eq!(store.get::<Probe>(), Some(Probe(2)));
    }
}
