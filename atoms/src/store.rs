//! Collaborators the atoms are written against.
//!
//! The Lambda builds one of each at cold start and passes them into the
//! handlers. `gallery-shared` holds the DynamoDB and S3 implementations.

use std::time::Duration;

use crate::error::{SigningError, StoreError};

/// A stored record: a flat JSON object
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Key-value store with put/get by primary key
#[async_trait::async_trait]
pub trait ItemStore: Send + Sync {
    /// Write `item` as a new item in `table_name`
    async fn put_item(&self, table_name: &str, item: &Record) -> Result<(), StoreError>;

    /// Point lookup by a single string partition key
    async fn get_item(
        &self,
        table_name: &str,
        key_name: &str,
        key_value: &str,
    ) -> Result<Option<Record>, StoreError>;
}

/// Object storage that can mint pre-signed PUT URLs
#[async_trait::async_trait]
pub trait UploadUrlSigner: Send + Sync {
    async fn presign_put(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, SigningError>;
}

/// Source of globally unique opaque identifiers
pub trait IdGenerator: Send + Sync {
    fn new_id(&self) -> String;
}

/// UUID v4 identifiers
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    use super::{IdGenerator, ItemStore, Record, UploadUrlSigner};
    use crate::error::{SigningError, StoreError};

    /// In-memory store that remembers every item and counts writes
    #[derive(Debug, Default)]
    pub struct MemoryStore {
        items: Mutex<Vec<(String, Record)>>,
        puts: AtomicUsize,
    }

    impl MemoryStore {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Insert an item without counting it as a write
        pub fn seed(&self, table_name: &str, item: Record) {
            self.items
                .lock()
                .expect("memory store lock poisoned")
                .push((table_name.to_string(), item));
        }

        /// Number of `put_item` calls observed
        pub fn put_count(&self) -> usize {
            self.puts.load(Ordering::SeqCst)
        }

        /// Items currently held for `table_name`, in insertion order
        pub fn items_in(&self, table_name: &str) -> Vec<Record> {
            self.items
                .lock()
                .expect("memory store lock poisoned")
                .iter()
                .filter(|(table, _)| table == table_name)
                .map(|(_, item)| item.clone())
                .collect()
        }
    }

    #[async_trait::async_trait]
    impl ItemStore for MemoryStore {
        async fn put_item(&self, table_name: &str, item: &Record) -> Result<(), StoreError> {
            self.puts.fetch_add(1, Ordering::SeqCst);
            self.seed(table_name, item.clone());
            Ok(())
        }

        async fn get_item(
            &self,
            table_name: &str,
            key_name: &str,
            key_value: &str,
        ) -> Result<Option<Record>, StoreError> {
            Ok(self
                .items
                .lock()
                .expect("memory store lock poisoned")
                .iter()
                .find(|(table, item)| {
                    table == table_name
                        && item.get(key_name).and_then(|v| v.as_str()) == Some(key_value)
                })
                .map(|(_, item)| item.clone()))
        }
    }

    /// Store whose every call fails
    #[derive(Debug, Default)]
    pub struct FailingStore {
        pub timed_out: bool,
    }

    impl FailingStore {
        fn failure(&self, operation: &'static str, table_name: &str) -> StoreError {
            if self.timed_out {
                StoreError::Timeout {
                    operation,
                    table: table_name.to_string(),
                }
            } else {
                StoreError::Request {
                    operation,
                    table: table_name.to_string(),
                    message: "ServiceUnavailable".to_string(),
                }
            }
        }
    }

    #[async_trait::async_trait]
    impl ItemStore for FailingStore {
        async fn put_item(&self, table_name: &str, _item: &Record) -> Result<(), StoreError> {
            Err(self.failure("put_item", table_name))
        }

        async fn get_item(
            &self,
            table_name: &str,
            _key_name: &str,
            _key_value: &str,
        ) -> Result<Option<Record>, StoreError> {
            Err(self.failure("get_item", table_name))
        }
    }

    /// Deterministic ids: `id-1`, `id-2`, ...
    #[derive(Debug, Default)]
    pub struct SequentialIds {
        next: AtomicUsize,
    }

    impl IdGenerator for SequentialIds {
        fn new_id(&self) -> String {
            format!("id-{}", self.next.fetch_add(1, Ordering::SeqCst) + 1)
        }
    }

    /// Signer that returns a fake but well-formed URL, or fails when `fail` is set
    #[derive(Debug, Default)]
    pub struct StaticSigner {
        pub fail: bool,
    }

    #[async_trait::async_trait]
    impl UploadUrlSigner for StaticSigner {
        async fn presign_put(
            &self,
            bucket: &str,
            key: &str,
            expires_in: Duration,
        ) -> Result<String, SigningError> {
            if self.fail {
                return Err(SigningError::S3("signing disabled".to_string()));
            }
            Ok(format!(
                "https://{bucket}.s3.amazonaws.com/{key}?X-Amz-Expires={}&X-Amz-Signature=fake",
                expires_in.as_secs()
            ))
        }
    }
}
