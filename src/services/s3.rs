use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::types::{BucketVersioningStatus, VersioningConfiguration};
use std::time::Duration;
use tracing::{debug, info};

use crate::errors::{LocalStackError, LocalStackResult};

/// Object-storage operations against the emulated S3 endpoint.
///
/// Holds a single SDK client (cheaply cloneable, no shared mutable state)
/// configured for path-style addressing by [`crate::ClientFactory`].
#[derive(Debug, Clone)]
pub struct S3Service {
    client: S3Client,
}

impl S3Service {
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }

    /// Access the underlying SDK client for operations not wrapped here.
    pub fn client(&self) -> &S3Client {
        &self.client
    }

    /// # Errors
    ///
    /// Returns an error if the bucket cannot be created, including when it
    /// already exists and is owned by another caller.
    pub async fn create_bucket(&self, bucket: &str) -> LocalStackResult<()> {
        self.client.create_bucket().bucket(bucket).send().await?;
        info!("Created bucket {}", bucket);
        Ok(())
    }

    /// Create the bucket if it is missing and turn on versioning for it.
    /// An existing bucket is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if creation or the versioning update fails.
    pub async fn ensure_bucket(&self, bucket: &str) -> LocalStackResult<()> {
        if self.client.head_bucket().bucket(bucket).send().await.is_ok() {
            debug!("Bucket {} already exists", bucket);
            return Ok(());
        }

        self.client.create_bucket().bucket(bucket).send().await?;
        self.client
            .put_bucket_versioning()
            .bucket(bucket)
            .versioning_configuration(
                VersioningConfiguration::builder()
                    .status(BucketVersioningStatus::Enabled)
                    .build(),
            )
            .send()
            .await?;
        info!("Created versioned bucket {}", bucket);
        Ok(())
    }

    /// Upload a single object.
    ///
    /// # Errors
    ///
    /// Returns an error if the upload is rejected, e.g. when the bucket
    /// does not exist.
    pub async fn upload_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: Option<&str>,
    ) -> LocalStackResult<()> {
        let mut request = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body));
        if let Some(content_type) = content_type {
            request = request.content_type(content_type);
        }
        request.send().await?;
        debug!("Uploaded s3://{}/{}", bucket, key);
        Ok(())
    }

    /// Fetch an object's full body.
    ///
    /// # Errors
    ///
    /// Returns an error for a missing bucket or key, or if streaming the
    /// body fails mid-read.
    pub async fn get_object(&self, bucket: &str, key: &str) -> LocalStackResult<Vec<u8>> {
        let response = self.client.get_object().bucket(bucket).key(key).send().await?;
        let body = response
            .body
            .collect()
            .await
            .map_err(|e| LocalStackError::Aws(format!("Failed to read object body: {e}")))?;
        Ok(body.into_bytes().to_vec())
    }

    /// # Errors
    ///
    /// Returns an error if the delete is rejected by the emulator.
    pub async fn delete_object(&self, bucket: &str, key: &str) -> LocalStackResult<()> {
        self.client.delete_object().bucket(bucket).key(key).send().await?;
        debug!("Deleted s3://{}/{}", bucket, key);
        Ok(())
    }

    /// List the names of all buckets visible on the endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing call fails.
    pub async fn list_buckets(&self) -> LocalStackResult<Vec<String>> {
        let response = self.client.list_buckets().send().await?;
        Ok(response
            .buckets()
            .iter()
            .filter_map(|bucket| bucket.name().map(str::to_string))
            .collect())
    }

    /// Generate a presigned GET URL for sharing an object without
    /// credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if `expires_in` is out of range for presigning or
    /// the request cannot be signed.
    pub async fn presigned_get_url(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> LocalStackResult<String> {
        let presigning = PresigningConfig::expires_in(expires_in)
            .map_err(|e| LocalStackError::Aws(format!("Invalid presigning window: {e}")))?;
        let request = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .presigned(presigning)
            .await?;
        Ok(request.uri().to_string())
    }
}
