use lambda_http::{http::StatusCode, Body, Error, Response};

use super::service;
use crate::response::{error_response, json_response};
use crate::settings::GallerySettings;
use crate::store::{IdGenerator, ItemStore, UploadUrlSigner};

/// HTTP Handler: POST /groups/{group_id}/images
pub async fn create_image_handler(
    store: &dyn ItemStore,
    signer: &dyn UploadUrlSigner,
    ids: &dyn IdGenerator,
    settings: &GallerySettings,
    group_id: &str,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    match service::create_image(store, signer, ids, settings, group_id, body).await {
        Ok(created) => {
            tracing::info!(
                "Created image {} in group {} (table={}, bucket={})",
                created.new_item.image_id,
                group_id,
                settings.images_table,
                settings.bucket_name,
            );
            json_response(StatusCode::CREATED, &created)
        }
        Err(e) => error_response(&e),
    }
}
