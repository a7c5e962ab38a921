//! Error kinds for the gallery atoms

use lambda_http::http::StatusCode;
use thiserror::Error;

/// Result type for gallery operations
pub type GalleryResult<T> = Result<T, GalleryError>;

/// Failure talking to the key-value store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The SDK gave up waiting on the store
    #[error("{operation} on table {table} timed out")]
    Timeout {
        operation: &'static str,
        table: String,
    },

    /// The store rejected the request or the transport failed
    #[error("{operation} on table {table} failed: {message}")]
    Request {
        operation: &'static str,
        table: String,
        message: String,
    },

    /// A record could not be converted to or from the store's item format
    #[error("Failed to convert item for table {table}: {message}")]
    Serialization { table: String, message: String },
}

/// Failure minting a pre-signed upload URL
#[derive(Debug, Error)]
pub enum SigningError {
    /// Presigning config creation failed (e.g. expiry out of range)
    #[error("Failed to create presigning config: {0}")]
    Config(String),

    /// The object-storage client refused to sign
    #[error("Failed to generate presigned URL: {0}")]
    S3(String),
}

#[derive(Debug, Error)]
pub enum GalleryError {
    /// Request body is not a JSON object
    #[error("Invalid request body: {0}")]
    MalformedBody(String),

    /// The group referenced by an image does not exist
    #[error("Group does not exist")]
    GroupNotFound { group_id: String },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Signing(#[from] SigningError),
}

impl GalleryError {
    /// HTTP status this error is surfaced as
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::GroupNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Store(StoreError::Timeout { .. }) => StatusCode::GATEWAY_TIMEOUT,
            Self::Store(_) | Self::Signing(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Message safe to return to the caller. Dependency details stay in the logs.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::MalformedBody(_) | Self::GroupNotFound { .. } => self.to_string(),
            Self::Store(StoreError::Timeout { .. }) => "Upstream service timed out".to_string(),
            Self::Store(_) | Self::Signing(_) => "Upstream service error".to_string(),
        }
    }
}
