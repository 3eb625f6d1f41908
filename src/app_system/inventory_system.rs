use tokio::task::JoinHandle;
use tracing::{error, info, instrument};
use crate::actor_framework::ResourceActor;
use crate::clients::{BlobClient, InventoryStoreClient, LookupClient};
use crate::domain::{InventoryItem, StoredImage};
use crate::inventory_service::InventoryService;
use crate::lookup_actor::{LookupError, LookupService};
use super::AppConfig;

/// The running application: every actor, wired together.
///
/// Starts the document store, the blob store and the lookup service, and
/// hands out an `InventoryService` bound to them.
pub struct InventorySystem {
    pub inventory: InventoryService,
    lookup_client: LookupClient,
    handles: Vec<JoinHandle<()>>,
}

impl InventorySystem {
    #[instrument(name = "inventory_system", skip(config))]
    pub fn new(config: &AppConfig) -> Result<Self, LookupError> {
        info!("Starting inventory system");

        let (store_actor, store_client) = ResourceActor::<InventoryItem>::new(config.channel_buffer);
        let store_handle = tokio::spawn(store_actor.run());

        let (blob_actor, blob_client) = ResourceActor::<StoredImage>::new(config.channel_buffer);
        let blob_handle = tokio::spawn(blob_actor.run());

        let (lookup_service, lookup_client) =
            LookupService::new(config.channel_buffer, &config.lookup_base_url, config.lookup_timeout())?;
        let lookup_handle = tokio::spawn(lookup_service.run());

        let inventory = InventoryService::new(
            InventoryStoreClient::new(store_client),
            lookup_client.clone(),
            BlobClient::new(blob_client, &config.blob_base_url, &config.default_image_name),
        );

        info!("Inventory system started successfully");

        Ok(Self {
            inventory,
            lookup_client,
            handles: vec![store_handle, blob_handle, lookup_handle],
        })
    }

    /// Stops every actor and waits for them.
    ///
    /// The stores stop once their last client is gone, so clones of
    /// `inventory` handed out earlier must be dropped first.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down inventory system");

        if let Err(e) = self.lookup_client.shutdown().await {
            error!(error = %e, "Lookup service already stopped");
        }
        drop(self.inventory);
        drop(self.lookup_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Inventory system shutdown complete");
        Ok(())
    }
}
