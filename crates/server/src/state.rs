use std::sync::Arc;

use service::items::ItemStore;

/// Shared handler state. Cloned per request; the store itself is shared.
#[derive(Clone)]
pub struct ServerState {
    pub item_store: Arc<dyn ItemStore>,
}

impl ServerState {
    pub fn new(item_store: Arc<dyn ItemStore>) -> Self {
        Self { item_store }
    }
}
