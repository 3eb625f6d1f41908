// DTOs for InventoryItem
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryPatch {
    pub name: Option<String>,
    pub quantity: Option<u32>,
    pub upc: Option<String>,
    pub image_url: Option<String>,
}

impl InventoryPatch {
    pub fn quantity(quantity: u32) -> Self {
        Self { quantity: Some(quantity), ..Default::default() }
    }

    pub fn image_url(image_url: impl Into<String>) -> Self {
        Self { image_url: Some(image_url.into()), ..Default::default() }
    }
}
