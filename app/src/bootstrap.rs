//! Service bootstrap
//!
//! Builds the process-wide database handles. Called once from `main` before
//! any command runs; consumers get the returned [`Database`] or resolve it
//! with `DB::get()`.

use cna_db::{Database, FrameworkError, DB};

pub async fn register() -> Result<Database, FrameworkError> {
    let db = DB::init().await?;

    // Entities owned by this service attach here, e.g.
    // db.models().declare::<models::user::Entity>();

    tracing::debug!(tables = ?db.models().tables(), "model base ready");
    Ok(db)
}
