//! Persistence layer for mdnote articles.
//!
//! Articles live in a single redb database file, opened once at process
//! startup by the composition root and shared by every request handler. The
//! store exposes point reads and full-record replacement writes keyed by the
//! decimal article ID, plus an atomic sequence for ID allocation.

use std::path::Path;

use redb::Database;

pub mod error;
pub mod models;
pub mod repositories;

pub use error::StoreError;

/// Open (or create) the article database at `path` and make sure the tables
/// it needs exist.
///
/// Called exactly once per process; the returned handle is shared behind an
/// `Arc` for the lifetime of the server.
pub fn open_database(path: impl AsRef<Path>) -> Result<Database, StoreError> {
    let db = Database::create(path)?;
    repositories::article_repo::ensure_tables(&db)?;
    Ok(db)
}
