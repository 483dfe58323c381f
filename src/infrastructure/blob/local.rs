//! Directory-backed blob store for local development.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::{debug, trace};
use uuid::Uuid;

use crate::domain::entities::{PutOptions, PutResult, StoredObject};
use crate::domain::errors::StorageError;
use crate::domain::ports::BlobStorePort;
use crate::domain::services::{content_type_for_path, has_image_extension};

/// Stores blobs as files under a root directory.
///
/// Object URLs are `{public_base_url}/{pathname}`; with an empty base URL they
/// are site-relative paths such as `/img1.jpg`.
pub struct LocalBlobStore {
    root: PathBuf,
    public_base_url: String,
}

impl LocalBlobStore {
    /// Creates a store rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, public_base_url: &str) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url_for(&self, pathname: &str) -> String {
        format!("{}/{pathname}", self.public_base_url)
    }

    /// Resolves a pathname to a file below the root, rejecting escapes.
    fn file_for(&self, pathname: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(pathname);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if pathname.is_empty() || escapes {
            return Err(StorageError::invalid_pathname(pathname));
        }
        Ok(self.root.join(relative))
    }

    async fn walk(&self) -> Result<Vec<String>, StorageError> {
        let mut pathnames = Vec::new();
        let mut pending = vec![self.root.clone()];

        while let Some(dir) = pending.pop() {
            let mut entries = fs::read_dir(&dir).await?;
            while let Some(entry) = entries.next_entry().await? {
                let path = entry.path();
                if entry.file_type().await?.is_dir() {
                    pending.push(path);
                    continue;
                }
                let Ok(relative) = path.strip_prefix(&self.root) else {
                    continue;
                };
                let pathname = relative
                    .components()
                    .filter_map(|c| c.as_os_str().to_str())
                    .collect::<Vec<_>>()
                    .join("/");
                trace!(pathname = %pathname, "Found local blob");
                pathnames.push(pathname);
            }
        }

        Ok(pathnames)
    }
}

fn with_random_suffix(pathname: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    let suffix = &suffix[..12];
    let (dir, file) = pathname.rsplit_once('/').unwrap_or(("", pathname));
    let file = match file.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem}-{suffix}.{ext}"),
        _ => format!("{file}-{suffix}"),
    };
    if dir.is_empty() {
        file
    } else {
        format!("{dir}/{file}")
    }
}

#[async_trait]
impl BlobStorePort for LocalBlobStore {
    async fn list(&self, prefix: Option<&str>) -> Result<Vec<StoredObject>, StorageError> {
        if !fs::try_exists(&self.root).await? {
            debug!(root = %self.root.display(), "Local blob root does not exist");
            return Ok(Vec::new());
        }

        let objects = self
            .walk()
            .await?
            .into_iter()
            .filter(|p| prefix.is_none_or(|prefix| p.starts_with(prefix)))
            .map(|pathname| {
                let content_type = has_image_extension(&pathname)
                    .then(|| content_type_for_path(&pathname).to_string());
                StoredObject::new(pathname.clone(), self.url_for(&pathname), content_type)
            })
            .collect();

        Ok(objects)
    }

    async fn put(
        &self,
        pathname: &str,
        body: Bytes,
        options: PutOptions,
    ) -> Result<PutResult, StorageError> {
        let pathname = if options.add_random_suffix {
            with_random_suffix(pathname)
        } else {
            pathname.to_string()
        };
        let file = self.file_for(&pathname)?;

        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&file, &body).await?;

        debug!(pathname = %pathname, bytes = body.len(), "Stored local blob");

        Ok(PutResult {
            url: self.url_for(&pathname),
            pathname,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_put_then_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::new(dir.path(), "https://cdn.test/");

        let put = store
            .put(
                "images/a.jpg",
                Bytes::from_static(b"jpeg"),
                PutOptions::public(),
            )
            .await
            .unwrap();
        store
            .put("notes.txt", Bytes::from_static(b"hi"), PutOptions::public())
            .await
            .unwrap();

        assert_eq!(put.url, "https://cdn.test/images/a.jpg");

        let mut objects = store.list(None).await.unwrap();
        objects.sort_by(|a, b| a.pathname.cmp(&b.pathname));
        assert_eq!(objects.len(), 2);
        assert_eq!(objects[0].pathname, "images/a.jpg");
        assert_eq!(objects[0].content_type(), Some("image/jpeg"));
        assert_eq!(objects[1].content_type(), None);

        let images = store.list(Some("images/")).await.unwrap();
        assert_eq!(images.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_base_url_gives_site_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("img1.jpg"), b"x").unwrap();
        let store = LocalBlobStore::new(dir.path(), "");

        let objects = store.list(None).await.unwrap();

        assert_eq!(objects[0].url, "/img1.jpg");
    }

    #[tokio::test]
    async fn test_missing_root_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::new(dir.path().join("absent"), "");

        assert!(assert_ok!(store.list(None).await).is_empty());
    }

    #[tokio::test]
    async fn test_put_rejects_escaping_pathname() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::new(dir.path().join("root"), "");

        assert_err!(
            store
                .put("../evil.jpg", Bytes::from_static(b"x"), PutOptions::public())
                .await
        );
        assert_err!(
            store
                .put("/etc/evil.jpg", Bytes::from_static(b"x"), PutOptions::public())
                .await
        );
    }

    #[tokio::test]
    async fn test_random_suffix_keeps_extension() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::new(dir.path(), "");

        let put = store
            .put(
                "images/a.jpg",
                Bytes::from_static(b"x"),
                PutOptions::public().with_random_suffix(true),
            )
            .await
            .unwrap();

        assert_ne!(put.pathname, "images/a.jpg");
        assert!(put.pathname.starts_with("images/a-"));
        assert!(put.pathname.ends_with(".jpg"));
        assert!(dir.path().join(&put.pathname).exists());
    }
}
