//! S3-backed upload URL signing

use std::sync::Arc;
use std::time::Duration;

use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client as S3Client;
use gallery_atoms::{SigningError, UploadUrlSigner};

/// Mints SigV4 pre-signed PUT URLs. Signing is local; no request reaches S3.
pub struct S3UploadSigner {
    s3_client: Arc<S3Client>,
}

impl S3UploadSigner {
    #[must_use]
    pub const fn new(s3_client: Arc<S3Client>) -> Self {
        Self { s3_client }
    }
}

#[async_trait::async_trait]
impl UploadUrlSigner for S3UploadSigner {
    async fn presign_put(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, SigningError> {
        let presigned_config = PresigningConfig::expires_in(expires_in)
            .map_err(|e| SigningError::Config(e.to_string()))?;

        let presigned_request = self
            .s3_client
            .put_object()
            .bucket(bucket)
            .key(key)
            .presigned(presigned_config)
            .await
            .map_err(|e| SigningError::S3(DisplayErrorContext(&e).to_string()))?;

        Ok(presigned_request.uri().to_string())
    }
}
