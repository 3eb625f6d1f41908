use crate::actor_framework::Entity;
use crate::domain::InventoryItem;
use super::dtos::InventoryPatch;

impl Entity for InventoryItem {
    type Id = String;
    type Patch = InventoryPatch;

    fn id(&self) -> &String { &self.id }

    /// Creates an item from a merge write against an absent ID.
    ///
    /// The patch must carry a name, a quantity and an image URL. A missing
    /// UPC means the item was added by name.
    fn from_patch(id: String, patch: InventoryPatch) -> Result<Self, String> {
        match patch {
            InventoryPatch { name: Some(name), quantity: Some(quantity), upc, image_url: Some(image_url) } => {
                Ok(Self { id, name, quantity, upc: upc.unwrap_or_default(), image_url })
            }
            _ => Err(format!("Incomplete item for {}: name, quantity and image URL are required", id)),
        }
    }

    /// A stored item has a name and a positive quantity.
    fn on_write(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err(format!("Item {} has an empty name", self.id));
        }
        if self.quantity == 0 {
            return Err(format!("Item {} cannot be stored with a zero quantity", self.id));
        }
        Ok(())
    }

    /// Applies only the fields present in the patch.
    fn on_merge(&mut self, patch: InventoryPatch) -> Result<(), String> {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(upc) = patch.upc {
            self.upc = upc;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        Ok(())
    }
}
