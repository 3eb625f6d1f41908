//! Rules for creating, reading and mutating inventory items.
//!
//! The service holds no state of its own. Every operation re-reads the store,
//! and every mutation returns its outcome so the caller decides whether to
//! re-list. Read-then-write races between concurrent callers are not
//! guarded against: the last writer wins.

mod quantity;

pub use quantity::*;

use tracing::{debug, info, instrument, warn};
use crate::blob_actor::BlobError;
use crate::clients::{BlobClient, InventoryStoreClient, LookupClient};
use crate::domain::{filter_by_name, normalize, InventoryItem, ProductRecord};
use crate::inventory_actor::{InventoryError, InventoryPatch};

#[derive(Clone)]
pub struct InventoryService {
    store: InventoryStoreClient,
    lookup: LookupClient,
    blobs: BlobClient,
}

impl InventoryService {
    pub fn new(store: InventoryStoreClient, lookup: LookupClient, blobs: BlobClient) -> Self {
        Self { store, lookup, blobs }
    }

    /// Every stored item, in whatever order the store yields them.
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> Result<Vec<InventoryItem>, InventoryError> {
        let items = self.store.list_items().await?;
        debug!(item_count = items.len(), "Listed inventory");
        Ok(items)
    }

    /// Items whose name contains `term`, ignoring case.
    #[instrument(skip(self))]
    pub async fn search_items(&self, term: &str) -> Result<Vec<InventoryItem>, InventoryError> {
        let items = self.list_items().await?;
        Ok(filter_by_name(items, term))
    }

    /// Adds one unit of the item called `name`, creating it on first add.
    ///
    /// The trimmed name is the item's ID.
    #[instrument(skip(self))]
    pub async fn add_item_by_name(&self, name: &str) -> Result<InventoryItem, InventoryError> {
        let name = name.trim();
        if name.is_empty() {
            warn!("Rejected add: empty name");
            return Err(InventoryError::InvalidInput("Item name required".to_string()));
        }

        let fresh = InventoryItem::new(name, name, self.blobs.default_image_url());
        self.add_or_increment(fresh).await
    }

    /// Resolves `code` through the lookup provider and adds one unit of the
    /// matching product.
    ///
    /// Any lookup failure is reported as `ProductNotFound` and leaves the
    /// store untouched.
    #[instrument(skip(self), fields(upc = %code))]
    pub async fn add_item_by_upc(&self, code: &str) -> Result<InventoryItem, InventoryError> {
        let code = code.trim();
        if code.is_empty() {
            warn!("Rejected add: empty UPC");
            return Err(InventoryError::InvalidInput("UPC required".to_string()));
        }

        let raw = match self.lookup.lookup(code.to_string()).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Product lookup failed");
                return Err(InventoryError::ProductNotFound(code.to_string()));
            }
        };

        let Some(product) = normalize(&raw) else {
            info!("No product found for this UPC");
            return Err(InventoryError::ProductNotFound(code.to_string()));
        };

        info!(
            brand = product.brand.as_deref().unwrap_or("-"),
            category = product.category.as_deref().unwrap_or("-"),
            "Product found"
        );

        let id = canonical_upc(&product, code);
        if id != code {
            debug!(canonical = %id, "Provider echoed a different UPC");
        }

        let name = product
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(id.as_str())
            .to_string();
        let image_url = product.first_image().unwrap_or(self.blobs.default_image_url());

        let fresh = InventoryItem::new(&id, name, image_url).with_upc(&id);
        self.add_or_increment(fresh).await
    }

    /// Applies `delta` to the quantity of `id`.
    ///
    /// A result at or below zero deletes the item. A missing item is left
    /// alone and reported as [`QuantityChange::Missing`], including one that
    /// disappears between the read and the write.
    #[instrument(skip(self), fields(item_id = %id))]
    pub async fn change_quantity(&self, id: &str, delta: i64) -> Result<QuantityChange, InventoryError> {
        let Some(current) = self.store.get_item(id.to_string()).await? else {
            debug!("Item vanished before quantity change");
            return Ok(QuantityChange::Missing);
        };

        match apply_delta(current.quantity, delta) {
            QuantityState::Present(quantity) => {
                match self.store.merge_item(current.id, InventoryPatch::quantity(quantity)).await? {
                    Some(item) => {
                        info!(quantity, "Quantity updated");
                        Ok(QuantityChange::Updated(item))
                    }
                    None => {
                        debug!("Item vanished during quantity change");
                        Ok(QuantityChange::Missing)
                    }
                }
            }
            QuantityState::Absent => {
                if !self.store.delete_item(current.id).await? {
                    debug!("Item vanished during quantity change");
                    return Ok(QuantityChange::Missing);
                }
                info!(previous = current.quantity, "Item removed");
                Ok(QuantityChange::Removed)
            }
        }
    }

    /// Uploads a new image for `id` and points the item at it.
    ///
    /// Returns `None` without uploading when the item does not exist.
    #[instrument(skip(self, bytes), fields(item_id = %id, size = bytes.len()))]
    pub async fn set_item_image(&self, id: &str, file_name: &str, bytes: Vec<u8>) -> Result<Option<InventoryItem>, InventoryError> {
        if self.store.get_item(id.to_string()).await?.is_none() {
            debug!("Item vanished before image change");
            return Ok(None);
        }

        let url = match self.blobs.upload(file_name, bytes).await {
            Ok(url) => url,
            Err(BlobError::InvalidUpload(msg)) => {
                return Err(InventoryError::InvalidInput(msg));
            }
            Err(e) => return Err(InventoryError::StoreUnavailable(e.to_string())),
        };

        let Some(item) = self.store.merge_item(id.to_string(), InventoryPatch::image_url(url)).await? else {
            debug!("Item vanished during image change");
            return Ok(None);
        };
        info!(image_url = %item.image_url, "Item image updated");
        Ok(Some(item))
    }

    /// Stores `fresh` when its ID is absent, otherwise bumps the stored
    /// quantity by one and keeps every other stored field.
    ///
    /// An item deleted between the read and the increment is stored fresh.
    async fn add_or_increment(&self, fresh: InventoryItem) -> Result<InventoryItem, InventoryError> {
        if let Some(existing) = self.store.get_item(fresh.id.clone()).await? {
            let quantity = existing.quantity.saturating_add(1);
            if let Some(item) = self.store.merge_item(existing.id, InventoryPatch::quantity(quantity)).await? {
                info!(item_id = %item.id, quantity, "Item incremented");
                return Ok(item);
            }
            debug!(item_id = %fresh.id, "Item vanished during increment");
        }

        let item = self.store.replace_item(fresh).await?;
        info!(item_id = %item.id, "Item created");
        Ok(item)
    }
}

/// The provider's echoed UPC, or the entered code when the provider echoes
/// nothing usable.
fn canonical_upc(product: &ProductRecord, entered: &str) -> String {
    product
        .upc
        .as_deref()
        .map(str::trim)
        .filter(|upc| !upc.is_empty())
        .unwrap_or(entered)
        .to_string()
}
