use super::model::{Group, GROUP_KEY};
use crate::error::GalleryResult;
use crate::payload::{parse_object, strip_reserved};
use crate::store::{IdGenerator, ItemStore};

/// Fields the server always generates for a group
pub const RESERVED_GROUP_FIELDS: &[&str] = &[GROUP_KEY];

/// Create a new group from a raw request body
pub async fn create_group(
    store: &dyn ItemStore,
    ids: &dyn IdGenerator,
    table_name: &str,
    body: &[u8],
) -> GalleryResult<Group> {
    let mut fields = parse_object(body)?;

    let dropped = strip_reserved(&mut fields, RESERVED_GROUP_FIELDS);
    if !dropped.is_empty() {
        tracing::warn!("Ignoring caller-supplied reserved group fields: {:?}", dropped);
    }

    let group = Group {
        id: ids.new_id(),
        fields,
    };

    store.put_item(table_name, &group.to_record()).await?;

    Ok(group)
}

/// Whether a group with this id is present
pub async fn group_exists(
    store: &dyn ItemStore,
    table_name: &str,
    group_id: &str,
) -> GalleryResult<bool> {
    let item = store.get_item(table_name, GROUP_KEY, group_id).await?;
    tracing::debug!("Get group {}: found={}", group_id, item.is_some());
    Ok(item.is_some())
}
