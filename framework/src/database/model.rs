//! Shared base for entity declarations
//!
//! Entities defined elsewhere attach themselves to the process-wide
//! [`ModelBase`]; the base knows every declared table and can create them
//! against an engine.
//!
//! ```rust,ignore
//! let models = ModelBase::new();
//! models.declare::<user::Entity>();
//! models.create_all(&engine).await?;
//! ```

use std::sync::{Arc, PoisonError, RwLock};

use sea_orm::sea_query::TableCreateStatement;
use sea_orm::{ConnectionTrait, EntityTrait, Schema};

use crate::database::connection::Engine;
use crate::error::FrameworkError;

type TableBuilder = Box<dyn Fn(&Schema) -> TableCreateStatement + Send + Sync>;

struct Declaration {
    table: String,
    build: TableBuilder,
}

/// Registry of declared entities
///
/// Safe to share between threads; declarations may arrive at any time.
#[derive(Default)]
pub struct ModelBase {
    declarations: RwLock<Vec<Arc<Declaration>>>,
}

impl ModelBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an entity to the base
    ///
    /// Declaring the same table twice keeps the first declaration.
    pub fn declare<E>(&self) -> &Self
    where
        E: EntityTrait,
    {
        let table = E::default().table_name().to_string();
        let mut declarations = self
            .declarations
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if declarations.iter().any(|d| d.table == table) {
            tracing::debug!(table = %table, "entity already declared");
            return self;
        }

        tracing::debug!(table = %table, "entity declared");
        declarations.push(Arc::new(Declaration {
            table,
            build: Box::new(|schema: &Schema| schema.create_table_from_entity(E::default())),
        }));
        self
    }

    /// Declared table names, in declaration order
    pub fn tables(&self) -> Vec<String> {
        self.snapshot().iter().map(|d| d.table.clone()).collect()
    }

    pub fn contains(&self, table: &str) -> bool {
        self.snapshot().iter().any(|d| d.table == table)
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    fn snapshot(&self) -> Vec<Arc<Declaration>> {
        self.declarations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Create every declared table that does not exist yet
    pub async fn create_all(&self, engine: &Engine) -> Result<(), FrameworkError> {
        let backend = engine.backend();
        let schema = Schema::new(backend);

        for declaration in self.snapshot() {
            let mut stmt = (declaration.build)(&schema);
            stmt.if_not_exists();
            engine.inner().execute(backend.build(&stmt)).await?;
            tracing::debug!(table = %declaration.table, "table ensured");
        }

        Ok(())
    }
}

impl std::fmt::Debug for ModelBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelBase")
            .field("tables", &self.tables())
            .finish()
    }
}
