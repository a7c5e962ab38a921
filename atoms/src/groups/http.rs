use lambda_http::{http::StatusCode, Body, Error, Response};

use super::model::CreateGroupResponse;
use super::service;
use crate::response::{error_response, json_response};
use crate::store::{IdGenerator, ItemStore};

/// HTTP Handler: POST /groups
pub async fn create_group_handler(
    store: &dyn ItemStore,
    ids: &dyn IdGenerator,
    table_name: &str,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    match service::create_group(store, ids, table_name, body).await {
        Ok(group) => {
            tracing::info!("Created group {} in {}", group.id, table_name);
            json_response(StatusCode::OK, &CreateGroupResponse { new_item: group })
        }
        Err(e) => error_response(&e),
    }
}
