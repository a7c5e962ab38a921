use serde::Serialize;

use crate::store::Record;

/// Image domain model - one uploaded (or about to be uploaded) file in a group
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub group_id: String,
    /// ISO-8601, UTC, millisecond precision
    pub timestamp: String,
    pub image_id: String,
    #[serde(flatten)]
    pub fields: Record,
    /// Public object URL, not the signed upload URL
    pub image_url: String,
}

impl Image {
    /// The item written to the images table
    #[must_use]
    pub fn to_record(&self) -> Record {
        let mut record = self.fields.clone();
        record.insert("groupId".to_string(), self.group_id.clone().into());
        record.insert("timestamp".to_string(), self.timestamp.clone().into());
        record.insert("imageId".to_string(), self.image_id.clone().into());
        record.insert("imageUrl".to_string(), self.image_url.clone().into());
        record
    }
}

/// Public URL of an object in `bucket`
#[must_use]
pub fn image_url(bucket: &str, image_id: &str) -> String {
    format!("https://{bucket}.s3.amazonaws.com/{image_id}")
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateImageResponse {
    pub new_item: Image,
    pub upload_url: String,
}
