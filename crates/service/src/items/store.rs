use async_trait::async_trait;
use models::ForageItem;

use crate::errors::ServiceError;

/// Trait abstraction for the foraging log item store.
///
/// Implementations must keep `id` unique across all stored items and return
/// items in insertion order.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Append `item` unless its `id` is taken, in which case the store is left
    /// untouched and `ServiceError::DuplicateIdentifier` is returned.
    async fn create(&self, item: ForageItem) -> Result<ForageItem, ServiceError>;
    async fn list_all(&self) -> Vec<ForageItem>;
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
