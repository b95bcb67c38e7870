use std::sync::Arc;

use async_trait::async_trait;
use models::ForageItem;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::errors::ServiceError;
use crate::items::store::ItemStore;

/// Process-memory item store. Contents live as long as the store does.
#[derive(Clone, Default)]
pub struct InMemoryItemStore {
    inner: Arc<RwLock<Vec<ForageItem>>>,
}

impl InMemoryItemStore {
    /// Create an empty store.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Append `item` if no stored item shares its id.
    ///
    /// The duplicate scan and the append run under one write guard, so two
    /// concurrent creates with the same id cannot both succeed.
    pub async fn create(&self, item: ForageItem) -> Result<ForageItem, ServiceError> {
        let mut items = self.inner.write().await;
        if items.iter().any(|existing| existing.id == item.id) {
            warn!(id = item.id, "rejecting duplicate item id");
            return Err(ServiceError::DuplicateIdentifier(item.id));
        }
        items.push(item.clone());
        debug!(id = item.id, total = items.len(), "stored item");
        Ok(item)
    }

    /// Snapshot of every stored item in insertion order.
    pub async fn list_all(&self) -> Vec<ForageItem> {
        self.inner.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn create(&self, item: ForageItem) -> Result<ForageItem, ServiceError> { self.create(item).await }
    async fn list_all(&self) -> Vec<ForageItem> { self.list_all().await }
    async fn len(&self) -> usize { self.len().await }
}
