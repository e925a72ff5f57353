//! Bucketed document storage on the local file system.
//!
//! Documents are written under `<root>/<bucket>/<millis>_<random>.<ext>` and referenced from the
//! database by their path relative to the root, so the root can move without a data migration.

pub mod staged;

use std::path::{Component, Path, PathBuf};

use chrono::Utc;
use dioxus_logger::tracing;
use rand::{distr::Alphanumeric, Rng};

use crate::server::{error::storage::StorageError, storage::staged::StagedDocuments};

/// Length of the random segment of generated file names.
const RANDOM_NAME_LENGTH: usize = 16;

/// Document store rooted at the configured storage path.
#[derive(Clone, Debug)]
pub struct DocumentStorage {
    root: PathBuf,
}

impl DocumentStorage {
    /// Creates a new instance of [`DocumentStorage`]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory every stored path is relative to
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Starts a group of writes that is deleted again unless committed.
    pub fn stage(&self) -> StagedDocuments {
        StagedDocuments::new(self.clone())
    }

    /// Writes a document into `bucket` under a generated unique name.
    ///
    /// # Arguments
    /// - `bucket` - Sub-directory for the document kind
    /// - `original_name` - Uploaded file name, only its extension is kept
    /// - `bytes` - File contents
    ///
    /// # Returns
    /// - `Ok(String)` - Path of the stored file relative to the storage root
    /// - `Err(StorageError::Write)` - Creating the bucket or writing the file failed
    pub async fn store(
        &self,
        bucket: &str,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<String, StorageError> {
        let directory = self.root.join(bucket);
        tokio::fs::create_dir_all(&directory)
            .await
            .map_err(|source| StorageError::Write {
                path: directory.clone(),
                source,
            })?;

        let relative = format!("{}/{}", bucket, unique_file_name(original_name));
        let path = self.root.join(&relative);

        if let Err(source) = tokio::fs::write(&path, bytes).await {
            remove_partial(&path).await;
            return Err(StorageError::Write { path, source });
        }

        tracing::debug!("Stored document {}", relative);

        Ok(relative)
    }

    /// Deletes a stored document, a file that is already gone counts as deleted.
    pub async fn delete(&self, relative: &str) -> Result<(), StorageError> {
        let path = self.resolve(relative)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Delete { path, source }),
        }
    }

    /// Deletes every document in `paths`, logging failures instead of returning them.
    pub async fn delete_all_best_effort(&self, paths: &[String]) {
        for relative in paths {
            if let Err(err) = self.delete(relative).await {
                tracing::warn!("Failed to delete document {}: {}", relative, err);
            }
        }
    }

    /// Absolute path of a stored document.
    ///
    /// # Returns
    /// - `Err(StorageError::InvalidPath)` - The path is absolute or escapes the storage root
    pub fn resolve(&self, relative: &str) -> Result<PathBuf, StorageError> {
        let candidate = Path::new(relative);

        let is_contained = !relative.is_empty()
            && candidate
                .components()
                .all(|component| matches!(component, Component::Normal(_)));

        if !is_contained {
            return Err(StorageError::InvalidPath(relative.to_string()));
        }

        Ok(self.root.join(candidate))
    }
}

/// Removes whatever a failed write left at `path`.
async fn remove_partial(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => tracing::debug!("Removed partially written document {}", path.display()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => tracing::warn!(
            "Failed to remove partially written document {}: {}",
            path.display(),
            err
        ),
    }
}

fn unique_file_name(original_name: &str) -> String {
    let random: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(RANDOM_NAME_LENGTH)
        .map(char::from)
        .collect();

    let extension = Path::new(original_name)
        .extension()
        .map(|extension| extension.to_string_lossy().to_ascii_lowercase());

    match extension {
        Some(extension) => format!("{}_{}.{}", Utc::now().timestamp_millis(), random, extension),
        None => format!("{}_{}", Utc::now().timestamp_millis(), random),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> (tempfile::TempDir, DocumentStorage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = DocumentStorage::new(dir.path());

        (dir, storage)
    }

    #[tokio::test]
    async fn stores_under_bucket_with_generated_name() {
        let (_dir, storage) = storage();

        let first = storage.store("id-cards", "KTP Budi.JPG", b"scan").await.unwrap();
        let second = storage.store("id-cards", "KTP Budi.JPG", b"scan").await.unwrap();

        assert!(first.starts_with("id-cards/"));
        assert!(first.ends_with(".jpg"));
        assert_ne!(first, second);
        assert_eq!(
            tokio::fs::read(storage.resolve(&first).unwrap()).await.unwrap(),
            b"scan"
        );
    }

    #[tokio::test]
    async fn delete_removes_file_and_ignores_missing() {
        let (_dir, storage) = storage();
        let path = storage.store("birth-certificates", "akta.pdf", b"%PDF").await.unwrap();

        storage.delete(&path).await.unwrap();
        storage.delete(&path).await.unwrap();

        assert!(!storage.resolve(&path).unwrap().exists());
    }

    #[tokio::test]
    async fn failed_store_leaves_no_file_behind() {
        let (dir, storage) = storage();
        tokio::fs::write(dir.path().join("id-cards"), b"not a directory")
            .await
            .unwrap();

        let result = storage.store("id-cards", "ktp.jpg", b"scan").await;

        assert!(matches!(result, Err(StorageError::Write { .. })));
        let mut entries = tokio::fs::read_dir(dir.path()).await.unwrap();
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.unwrap() {
            names.push(entry.file_name());
        }
        assert_eq!(names, vec![std::ffi::OsString::from("id-cards")]);
    }

    #[tokio::test]
    async fn remove_partial_deletes_file_and_ignores_missing() {
        let (dir, _storage) = storage();
        let path = dir.path().join("partial.jpg");
        tokio::fs::write(&path, b"sc").await.unwrap();

        remove_partial(&path).await;
        remove_partial(&path).await;

        assert!(!path.exists());
    }

    #[tokio::test]
    async fn remove_partial_leaves_directories_alone() {
        let (dir, _storage) = storage();
        let path = dir.path().join("id-cards");
        tokio::fs::create_dir(&path).await.unwrap();

        remove_partial(&path).await;

        assert!(path.is_dir());
    }

    #[test]
    fn resolve_rejects_paths_outside_root() {
        let (_dir, storage) = storage();

        for path in ["../secret.pdf", "/etc/passwd", "id-cards/../../x", ""] {
            assert!(
                matches!(storage.resolve(path), Err(StorageError::InvalidPath(_))),
                "{}",
                path
            );
        }
    }
}
