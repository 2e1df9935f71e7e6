use anyhow::{Context, Result};
use aws_sdk_s3::{self, presigning::PresigningConfig, primitives::ByteStream};
use std::time::Duration;

use super::StoreError;
use crate::domain::ports::FloorplanStore;

/// How long a minted floorplan read url stays valid.
const GET_URL_TTL: Duration = Duration::from_secs(5 * 60);

/// Floorplan document access in the storage bucket.
#[derive(Debug, Clone)]
pub struct S3Floorplans {
    inner: aws_sdk_s3::Client,
    storage_bucket: String,
}

impl S3Floorplans {
    pub fn new(inner: aws_sdk_s3::Client, storage_bucket: String) -> Self {
        S3Floorplans {
            inner,
            storage_bucket,
        }
    }

    #[tracing::instrument(skip(self, body))]
    async fn put_object(&self, key: &str, body: Vec<u8>) -> Result<()> {
        self.inner
            .put_object()
            .bucket(self.storage_bucket.clone())
            .key(key)
            .content_type("application/json")
            .body(ByteStream::from(body))
            .send()
            .await
            .context("failed to put floorplan object")?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_object(&self, key: &str) -> Result<()> {
        self.inner
            .delete_object()
            .bucket(self.storage_bucket.clone())
            .key(key)
            .send()
            .await
            .context("failed to delete floorplan object")?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn get_presigned_url(&self, key: &str) -> Result<String> {
        let presigned_url = self
            .inner
            .get_object()
            .bucket(self.storage_bucket.clone())
            .key(key)
            .presigned(
                PresigningConfig::expires_in(GET_URL_TTL)
                    .context("failed to create presigning config")?,
            )
            .await
            .context("failed to create presigned URL")?;

        Ok(presigned_url.uri().to_string())
    }
}

impl FloorplanStore for S3Floorplans {
    type Error = StoreError;

    async fn put(&self, path: &str, body: Vec<u8>) -> Result<(), StoreError> {
        Ok(self.put_object(path, body).await?)
    }

    async fn delete(&self, path: &str) -> Result<(), StoreError> {
        Ok(self.delete_object(path).await?)
    }

    async fn presigned_get_url(&self, path: &str) -> Result<String, StoreError> {
        Ok(self.get_presigned_url(path).await?)
    }
}
