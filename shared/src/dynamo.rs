//! DynamoDB-backed `ItemStore`

use std::collections::HashMap;
use std::sync::Arc;

use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;
use gallery_atoms::{ItemStore, Record, StoreError};
use serde_dynamo::{from_item, to_item};

/// Stores records as DynamoDB items, one attribute per JSON field
pub struct DynamoStore {
    client: Arc<DynamoClient>,
}

impl DynamoStore {
    #[must_use]
    pub const fn new(client: Arc<DynamoClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl ItemStore for DynamoStore {
    async fn put_item(&self, table_name: &str, item: &Record) -> Result<(), StoreError> {
        let attributes: HashMap<String, AttributeValue> =
            to_item(item).map_err(|e| StoreError::Serialization {
                table: table_name.to_string(),
                message: e.to_string(),
            })?;

        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(attributes))
            .send()
            .await
            .map_err(|e| store_error("put_item", table_name, &e))?;

        Ok(())
    }

    async fn get_item(
        &self,
        table_name: &str,
        key_name: &str,
        key_value: &str,
    ) -> Result<Option<Record>, StoreError> {
        let response = self
            .client
            .get_item()
            .table_name(table_name)
            .key(key_name, AttributeValue::S(key_value.to_string()))
            .send()
            .await
            .map_err(|e| store_error("get_item", table_name, &e))?;

        response
            .item
            .map(|item| {
                from_item(item).map_err(|e| StoreError::Serialization {
                    table: table_name.to_string(),
                    message: e.to_string(),
                })
            })
            .transpose()
    }
}

/// Timeouts surface as 504, everything else as 502
fn store_error<E, R>(operation: &'static str, table_name: &str, err: &SdkError<E, R>) -> StoreError
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    tracing::error!(
        "DynamoDB {} failed for table {}: {}",
        operation,
        table_name,
        DisplayErrorContext(err)
    );

    match err {
        SdkError::TimeoutError(_) => StoreError::Timeout {
            operation,
            table: table_name.to_string(),
        },
        _ => StoreError::Request {
            operation,
            table: table_name.to_string(),
            message: DisplayErrorContext(err).to_string(),
        },
    }
}
