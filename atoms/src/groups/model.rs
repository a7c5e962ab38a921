use serde::Serialize;

use crate::store::Record;

/// Primary key attribute of the groups table
pub const GROUP_KEY: &str = "id";

/// Group domain model - a named collection of images.
/// Everything except `id` is whatever the caller sent.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Group {
    pub id: String,
    #[serde(flatten)]
    pub fields: Record,
}

impl Group {
    /// The item written to the groups table
    #[must_use]
    pub fn to_record(&self) -> Record {
        let mut record = self.fields.clone();
        record.insert(GROUP_KEY.to_string(), self.id.clone().into());
        record
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupResponse {
    pub new_item: Group,
}
