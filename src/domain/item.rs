use serde::{Deserialize, Serialize};

/// A persisted inventory record.
///
/// `id` is the display name for items added by hand and the canonical UPC for
/// items added through a barcode lookup. A stored item always has a
/// `quantity` of at least one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    /// Empty when the item was added by name.
    #[serde(default)]
    pub upc: String,
    pub image_url: String,
}

impl InventoryItem {
    /// A fresh record with a quantity of one and no UPC.
    pub fn new(id: impl Into<String>, name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity: 1,
            upc: String::new(),
            image_url: image_url.into(),
        }
    }

    pub fn with_upc(mut self, upc: impl Into<String>) -> Self {
        self.upc = upc.into();
        self
    }
}

/// Items whose name contains `term`, ignoring case. A blank term matches everything.
pub fn filter_by_name(items: Vec<InventoryItem>, term: &str) -> Vec<InventoryItem> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<InventoryItem> {
        vec![
            InventoryItem::new("Milk", "Milk", "memory://default.png"),
            InventoryItem::new("012345", "Oat Milk 1L", "http://x/1.jpg").with_upc("012345"),
            InventoryItem::new("Bread", "Bread", "memory://default.png"),
        ]
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let found = filter_by_name(items(), "MILK");
        let ids: Vec<&str> = found.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["Milk", "012345"]);
    }

    #[test]
    fn test_blank_term_keeps_everything() {
        assert_eq!(filter_by_name(items(), "  ").len(), 3);
    }

    #[test]
    fn test_serializes_with_document_field_names() {
        let item = InventoryItem::new("Milk", "Milk", "memory://default.png");
        let doc = serde_json::to_value(&item).unwrap();
        assert_eq!(
            doc,
            serde_json::json!({
                "id": "Milk",
                "name": "Milk",
                "quantity": 1,
                "upc": "",
                "imageUrl": "memory://default.png"
            })
        );
    }
}
