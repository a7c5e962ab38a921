use std::time::Duration;

/// Deployment settings shared by both handlers.
/// Built once at cold start by `gallery_shared::config`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GallerySettings {
    pub groups_table: String,
    pub images_table: String,
    pub bucket_name: String,
    /// Lifetime of pre-signed upload URLs
    pub url_expiration: Duration,
}
