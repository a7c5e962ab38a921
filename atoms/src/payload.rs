use crate::error::{GalleryError, GalleryResult};
use crate::store::Record;

/// Parse a request body that must be a JSON object
pub fn parse_object(body: &[u8]) -> GalleryResult<Record> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| GalleryError::MalformedBody(e.to_string()))?;

    match value {
        serde_json::Value::Object(fields) => Ok(fields),
        _ => Err(GalleryError::MalformedBody(
            "expected a JSON object".to_string(),
        )),
    }
}

/// Remove server-generated field names from caller fields.
/// Returns the names that were dropped.
pub fn strip_reserved(fields: &mut Record, reserved: &[&str]) -> Vec<String> {
    reserved
        .iter()
        .filter_map(|name| fields.remove(*name).map(|_| (*name).to_string()))
        .collect()
}
