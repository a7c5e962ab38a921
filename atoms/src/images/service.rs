use chrono::SecondsFormat;

use super::model::{image_url, CreateImageResponse, Image};
use crate::error::{GalleryError, GalleryResult};
use crate::groups::group_exists;
use crate::payload::{parse_object, strip_reserved};
use crate::settings::GallerySettings;
use crate::store::{IdGenerator, ItemStore, UploadUrlSigner};

/// Fields the server always generates for an image
pub const RESERVED_IMAGE_FIELDS: &[&str] = &["groupId", "timestamp", "imageId", "imageUrl"];

/// Create an image record in an existing group and sign an upload URL for it.
///
/// The group is looked up before the body is parsed, so a missing group
/// wins over a malformed body.
pub async fn create_image(
    store: &dyn ItemStore,
    signer: &dyn UploadUrlSigner,
    ids: &dyn IdGenerator,
    settings: &GallerySettings,
    group_id: &str,
    body: &[u8],
) -> GalleryResult<CreateImageResponse> {
    if !group_exists(store, &settings.groups_table, group_id).await? {
        return Err(GalleryError::GroupNotFound {
            group_id: group_id.to_string(),
        });
    }

    let mut fields = parse_object(body)?;

    let dropped = strip_reserved(&mut fields, RESERVED_IMAGE_FIELDS);
    if !dropped.is_empty() {
        tracing::warn!("Ignoring caller-supplied reserved image fields: {:?}", dropped);
    }

    let image_id = ids.new_id();
    let image = Image {
        group_id: group_id.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        image_url: image_url(&settings.bucket_name, &image_id),
        image_id,
        fields,
    };

    store
        .put_item(&settings.images_table, &image.to_record())
        .await?;

    // The record is already written; a signing failure leaves it in place.
    let upload_url = signer
        .presign_put(&settings.bucket_name, &image.image_id, settings.url_expiration)
        .await?;

    Ok(CreateImageResponse {
        new_item: image,
        upload_url,
    })
}
