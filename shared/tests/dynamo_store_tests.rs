//! Run with LocalStack on :4566: `cargo test -p gallery-shared -- --ignored`

use std::sync::Arc;

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
};
use aws_sdk_dynamodb::Client as DynamoClient;
use gallery_atoms::groups::{create_group, group_exists};
use gallery_atoms::{ItemStore, UuidGenerator};
use gallery_shared::DynamoStore;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

const LOCALSTACK_ENDPOINT: &str = "http://localhost:4566";
const TEST_REGION: &str = "us-east-1";

/// Test context that deletes its table on drop
struct TestContext {
    store: DynamoStore,
    table_name: String,
    client: Arc<DynamoClient>,
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let client = self.client.clone();
        let table = self.table_name.clone();

        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn(async move {
                let _ = client.delete_table().table_name(&table).send().await;
            });
        }
    }
}

async fn setup_test() -> TestContext {
    let table_name = format!("test-groups-{}", Uuid::new_v4());

    let config = aws_config::defaults(BehaviorVersion::latest())
        .endpoint_url(LOCALSTACK_ENDPOINT)
        .region(Region::new(TEST_REGION))
        .credentials_provider(Credentials::from_keys(
            "test", // AWS_ACCESS_KEY_ID
            "test", // AWS_SECRET_ACCESS_KEY
            None,   // no session token
        ))
        .load()
        .await;
    let client = Arc::new(DynamoClient::new(&config));

    client
        .create_table()
        .table_name(&table_name)
        .billing_mode(BillingMode::PayPerRequest)
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name("id")
                .key_type(KeyType::Hash)
                .build()
                .expect("Failed to build key schema"),
        )
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name("id")
                .attribute_type(ScalarAttributeType::S)
                .build()
                .expect("Failed to build attribute definition"),
        )
        .send()
        .await
        .expect("Failed to create table");

    TestContext {
        store: DynamoStore::new(client.clone()),
        table_name,
        client,
    }
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_put_then_get_round_trips_nested_fields() {
    let ctx = setup_test().await;
    let item = json!({
        "id": "g1",
        "name": "trip",
        "members": 3,
        "tags": ["beach", "2024"],
        "owner": {"name": "sam"}
    });
    let record = item.as_object().cloned().unwrap();

    ctx.store.put_item(&ctx.table_name, &record).await.unwrap();
    let fetched = ctx
        .store
        .get_item(&ctx.table_name, "id", "g1")
        .await
        .unwrap()
        .expect("item should exist");

    assert_eq!(fetched["name"], json!("trip"));
    assert_eq!(fetched["members"].as_f64(), Some(3.0));
    assert_eq!(fetched["tags"], json!(["beach", "2024"]));
    assert_eq!(fetched["owner"], json!({"name": "sam"}));
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_get_missing_item() {
    let ctx = setup_test().await;

    let fetched = ctx
        .store
        .get_item(&ctx.table_name, "id", "missing")
        .await
        .unwrap();

    assert_eq!(fetched, None);
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_created_group_is_found() {
    let ctx = setup_test().await;

    let group = create_group(&ctx.store, &UuidGenerator, &ctx.table_name, br#"{"name":"trip"}"#)
        .await
        .unwrap();

    assert!(group_exists(&ctx.store, &ctx.table_name, &group.id).await.unwrap());
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_missing_table_is_a_request_error() {
    let ctx = setup_test().await;

    let err = ctx
        .store
        .get_item("no-such-table", "id", "g1")
        .await
        .unwrap_err();

    assert!(matches!(err, gallery_atoms::StoreError::Request { .. }));
}
