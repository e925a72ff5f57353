//! Documents written during a submission that is not yet committed.

use dioxus_logger::tracing;

use crate::server::{
    error::storage::StorageError,
    model::application::document::{DocumentKind, DocumentPaths, DocumentUploads},
    storage::DocumentStorage,
};

/// Tracks files written for a submission until its database transaction commits.
///
/// Call [`StagedDocuments::commit`] once the record referencing the files is committed, or
/// [`StagedDocuments::discard`] to delete them. A guard dropped without either deletes its files
/// synchronously and logs a warning.
#[must_use = "staged documents are deleted unless committed"]
pub struct StagedDocuments {
    storage: DocumentStorage,
    paths: DocumentPaths,
    armed: bool,
}

impl StagedDocuments {
    pub(super) fn new(storage: DocumentStorage) -> Self {
        Self {
            storage,
            paths: DocumentPaths::default(),
            armed: true,
        }
    }

    /// Writes every upload into its bucket.
    ///
    /// On error the files written so far stay tracked and are removed with the guard.
    pub async fn store_all(&mut self, uploads: &DocumentUploads) -> Result<(), StorageError> {
        for (kind, upload) in uploads.iter() {
            self.store(kind, &upload.file_name, &upload.bytes).await?;
        }

        Ok(())
    }

    /// Writes one document into its bucket and tracks the path for cleanup.
    pub async fn store(
        &mut self,
        kind: DocumentKind,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<(), StorageError> {
        let path = self.storage.store(kind.bucket(), original_name, bytes).await?;
        self.paths.set(kind, path);

        Ok(())
    }

    /// Paths written so far.
    pub fn paths(&self) -> &DocumentPaths {
        &self.paths
    }

    /// Keeps the files, the caller's record now owns them.
    pub fn commit(mut self) -> DocumentPaths {
        self.armed = false;
        std::mem::take(&mut self.paths)
    }

    /// Deletes every staged file.
    pub async fn discard(mut self) {
        self.armed = false;
        let paths = std::mem::take(&mut self.paths).into_vec();

        self.storage.delete_all_best_effort(&paths).await;
    }
}

impl Drop for StagedDocuments {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        for relative in std::mem::take(&mut self.paths).into_vec() {
            tracing::warn!("Removing uncommitted document {}", relative);

            let result = self
                .storage
                .resolve(&relative)
                .and_then(|path| {
                    std::fs::remove_file(&path)
                        .map_err(|source| StorageError::Delete { path, source })
                });

            if let Err(err) = result {
                tracing::warn!("Failed to remove uncommitted document {}: {}", relative, err);
            }
        }
    }
}
