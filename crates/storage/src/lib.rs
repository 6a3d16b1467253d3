//! Object storage for uploaded cover images.
//!
//! Images are stored under a randomly generated key that preserves the
//! original file extension; uniqueness comes from the random name, so
//! existing keys are never overwritten. The store itself sits behind
//! [`ObjectStore`] so the API crate can swap in an in-memory store for
//! tests.

use std::sync::Arc;

use aws_sdk_s3::primitives::ByteStream;
use uuid::Uuid;

/// Key prefix for uploaded images within the bucket.
pub const UPLOAD_PREFIX: &str = "uploads";

/// Errors from the upload path. Always surfaced to the caller; there is
/// no fallback for a failed write.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    Upload(String),
}

/// Minimal put-only object store interface.
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put(
        &self,
        key: &str,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<(), StorageError>;
}

/// S3-compatible bucket store.
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3ObjectStore {
    /// Build a store from ambient AWS configuration, with an optional
    /// custom endpoint for S3-compatible providers (MinIO, Supabase
    /// storage, ...).
    pub async fn from_env(bucket: impl Into<String>, endpoint_url: Option<&str>) -> Self {
        let base = aws_config::load_from_env().await;
        let mut builder = aws_sdk_s3::config::Builder::from(&base).force_path_style(true);
        if let Some(endpoint) = endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }
        Self {
            client: aws_sdk_s3::Client::from_conf(builder.build()),
            bucket: bucket.into(),
        }
    }
}

#[async_trait::async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put(
        &self,
        key: &str,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<(), StorageError> {
        let mut request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes));
        if let Some(ct) = content_type {
            request = request.content_type(ct);
        }
        request
            .send()
            .await
            .map_err(|e| StorageError::Upload(e.to_string()))?;
        Ok(())
    }
}

/// Uploader: random key generation + store write + public URL.
pub struct ImageUploader {
    store: Arc<dyn ObjectStore>,
    public_base_url: String,
}

impl ImageUploader {
    pub fn new(store: Arc<dyn ObjectStore>, public_base_url: impl Into<String>) -> Self {
        Self {
            store,
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Store a binary under a fresh random name, returning the publicly
    /// resolvable URL.
    pub async fn upload(
        &self,
        original_filename: &str,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        let key = object_key(original_filename);
        self.store.put(&key, content_type, bytes).await?;
        let url = format!("{}/{}", self.public_base_url, key);
        tracing::info!(key = %key, "Uploaded image");
        Ok(url)
    }
}

/// Generate a collision-resistant object key, preserving the original
/// file extension (lowercased) when one is present.
pub fn object_key(original_filename: &str) -> String {
    let id = Uuid::new_v4();
    match original_filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
            format!("{UPLOAD_PREFIX}/{id}.{}", ext.to_lowercase())
        }
        _ => format!("{UPLOAD_PREFIX}/{id}"),
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryObjectStore {
    objects: tokio::sync::Mutex<std::collections::HashMap<String, Vec<u8>>>,
    /// When true, every put fails; used to exercise write-error paths.
    pub fail_puts: bool,
}

#[async_trait::async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn put(
        &self,
        key: &str,
        _content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<(), StorageError> {
        if self.fail_puts {
            return Err(StorageError::Upload("simulated storage outage".into()));
        }
        self.objects.lock().await.insert(key.to_string(), bytes);
        Ok(())
    }
}

impl MemoryObjectStore {
    /// A store whose puts always fail.
    pub fn failing() -> Self {
        Self {
            fail_puts: true,
            ..Default::default()
        }
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.objects.lock().await.contains_key(key)
    }

    pub async fn len(&self) -> usize {
        self.objects.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_object_key_preserves_extension() {
        let key = object_key("Cover Photo.PNG");
        assert!(key.starts_with("uploads/"));
        assert!(key.ends_with(".png"));
    }

    #[test]
    fn test_object_key_without_extension() {
        let key = object_key("rawfile");
        assert!(key.starts_with("uploads/"));
        assert!(!key.contains('.'));
    }

    #[test]
    fn test_object_keys_are_unique() {
        assert_ne!(object_key("a.png"), object_key("a.png"));
    }

    #[tokio::test]
    async fn test_upload_returns_public_url_and_stores_bytes() {
        let store = Arc::new(MemoryObjectStore::default());
        let uploader = ImageUploader::new(store.clone(), "https://cdn.example.com/");

        let url = uploader
            .upload("shot.jpg", Some("image/jpeg"), vec![1, 2, 3])
            .await
            .unwrap();

        assert!(url.starts_with("https://cdn.example.com/uploads/"));
        assert!(url.ends_with(".jpg"));
        let key = url.trim_start_matches("https://cdn.example.com/");
        assert!(store.contains(key).await);
    }

    #[tokio::test]
    async fn test_upload_failure_propagates() {
        let store = Arc::new(MemoryObjectStore {
            fail_puts: true,
            ..Default::default()
        });
        let uploader = ImageUploader::new(store, "https://cdn.example.com");
        let result = uploader.upload("shot.jpg", None, vec![]).await;
        assert_matches!(result, Err(StorageError::Upload(_)));
    }
}
