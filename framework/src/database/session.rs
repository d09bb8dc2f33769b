//! Sessions and the factory that opens them
//!
//! A [`Session`] is one unit of work over a database transaction. Models are
//! plain owned values, so anything loaded or inserted through a session stays
//! readable after [`Session::commit`] without a re-fetch.

use sea_orm::{DatabaseTransaction, TransactionTrait};

use crate::database::connection::Engine;
use crate::error::FrameworkError;

/// Opens sessions bound to one engine
///
/// # Example
///
/// ```rust,ignore
/// let session = db.sessions().begin().await?;
/// let user = new_user.insert(&*session).await?;
/// session.commit().await?;
///
/// println!("{}", user.name); // still readable after commit
/// ```
#[derive(Clone, Debug)]
pub struct SessionFactory {
    engine: Engine,
}

impl SessionFactory {
    pub fn new(engine: Engine) -> Self {
        Self { engine }
    }

    /// Engine this factory is bound to
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Open a new session
    ///
    /// This is the first point where a connection is taken from the pool, so
    /// connection failures are reported here.
    pub async fn begin(&self) -> Result<Session, FrameworkError> {
        let txn = self.engine.inner().begin().await?;
        tracing::debug!("session opened");
        Ok(Session { txn })
    }
}

/// A unit of work
///
/// Derefs to the underlying [`DatabaseTransaction`], so any sea-orm query can
/// run against `&*session`. Dropping a session without committing rolls it
/// back.
pub struct Session {
    txn: DatabaseTransaction,
}

impl Session {
    /// Commit the unit of work
    pub async fn commit(self) -> Result<(), FrameworkError> {
        self.txn.commit().await?;
        tracing::debug!("session committed");
        Ok(())
    }

    /// Discard the unit of work
    pub async fn rollback(self) -> Result<(), FrameworkError> {
        self.txn.rollback().await?;
        tracing::debug!("session rolled back");
        Ok(())
    }
}

impl std::ops::Deref for Session {
    type Target = DatabaseTransaction;

    fn deref(&self) -> &Self::Target {
        &self.txn
    }
}
