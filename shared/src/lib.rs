//! AWS-backed collaborators and configuration for the gallery Lambdas

pub mod config;
pub mod dynamo;
pub mod s3;

use std::sync::Arc;

use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_s3::Client as S3Client;
use gallery_atoms::{GallerySettings, IdGenerator, ItemStore, UploadUrlSigner, UuidGenerator};

pub use config::{load_settings, ConfigError};
pub use dynamo::DynamoStore;
pub use s3::S3UploadSigner;

/// Clients and settings built once per cold start and shared by every invocation
pub struct AppState {
    pub store: Arc<dyn ItemStore>,
    pub signer: Arc<dyn UploadUrlSigner>,
    pub ids: Arc<dyn IdGenerator>,
    pub settings: GallerySettings,
}

impl AppState {
    /// Build the production state from the standard AWS environment
    pub async fn from_env(settings: GallerySettings) -> Self {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

        let dynamo_client = Arc::new(DynamoClient::new(&aws_config));
        let s3_client = Arc::new(S3Client::new(&aws_config));

        Self {
            store: Arc::new(DynamoStore::new(dynamo_client)),
            signer: Arc::new(S3UploadSigner::new(s3_client)),
            ids: Arc::new(UuidGenerator),
            settings,
        }
    }
}
