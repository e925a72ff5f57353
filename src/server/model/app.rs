use std::path::PathBuf;

use sea_orm::DatabaseConnection;

use crate::server::storage::DocumentStorage;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// Local storage for uploaded documents
    pub storage: DocumentStorage,
}

/// Builds state from a connection and a document root, used by test contexts which cannot
/// depend on this crate directly.
impl From<(DatabaseConnection, PathBuf)> for AppState {
    fn from((db, storage_root): (DatabaseConnection, PathBuf)) -> Self {
        Self {
            db,
            storage: DocumentStorage::new(storage_root),
        }
    }
}
