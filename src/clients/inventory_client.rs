use tracing::{debug, instrument};
use crate::actor_framework::{FrameworkError, ResourceClient, Write};
use crate::domain::InventoryItem;
use crate::inventory_actor::{InventoryError, InventoryPatch};

/// Client for the inventory document store.
#[derive(Clone)]
pub struct InventoryStoreClient {
    inner: ResourceClient<InventoryItem>,
}

impl_client_new!(InventoryStoreClient, InventoryItem);
impl_client_methods!(InventoryStoreClient, InventoryItem, InventoryError, StoreUnavailable, item);

impl InventoryStoreClient {
    /// Stores `item` whole under its ID.
    #[instrument(skip(self, item), fields(item_id = %item.id))]
    pub async fn replace_item(&self, item: InventoryItem) -> Result<InventoryItem, InventoryError> {
        debug!("Sending request");
        self.inner
            .put(Write::Replace(item))
            .await
            .map_err(|e| InventoryError::StoreUnavailable(e.to_string()))
    }

    /// Field-level upsert: only the fields set on `patch` change.
    ///
    /// Returns `None` when the item is gone and `patch` is too partial to
    /// recreate it.
    #[instrument(skip(self))]
    pub async fn merge_item(&self, id: String, patch: InventoryPatch) -> Result<Option<InventoryItem>, InventoryError> {
        debug!("Sending request");
        match self.inner.put(Write::Merge { id, patch }).await {
            Ok(item) => Ok(Some(item)),
            Err(FrameworkError::NotFound(_)) => Ok(None),
            Err(e) => Err(InventoryError::StoreUnavailable(e.to_string())),
        }
    }
}
