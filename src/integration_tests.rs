#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use crate::app_system::{AppConfig, InventorySystem};
    use crate::domain::InventoryItem;
    use crate::inventory_actor::InventoryError;
    use crate::inventory_service::QuantityChange;

    fn config(lookup_base_url: String) -> AppConfig {
        AppConfig {
            lookup_base_url,
            lookup_timeout_secs: 5,
            blob_base_url: "memory://pantry".to_string(),
            default_image_name: "default.png".to_string(),
            channel_buffer: 16,
            log_level: "debug".to_string(),
        }
    }

    async fn provider() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/lookup"))
            .and(query_param("upc", "012345"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": "OK",
                "total": 1,
                "items": [{ "title": "Milk", "upc": "012345", "images": ["http://x/1.jpg"] }]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/lookup"))
            .and(query_param("upc", "999"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "code": "OK", "total": 0, "items": [] })))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_upc_add_then_name_add_then_decrement() {
        let server = provider().await;
        let system = InventorySystem::new(&config(server.uri())).unwrap();
        let inventory = &system.inventory;

        // Fresh store; the lookup result becomes the stored item.
        let milk = inventory.add_item_by_upc("012345").await.unwrap();
        assert_eq!(milk, InventoryItem::new("012345", "Milk", "http://x/1.jpg").with_upc("012345"));

        // Name adds are keyed by name and get the default image.
        inventory.add_item_by_name("Bread").await.unwrap();
        let bread = inventory.add_item_by_name("Bread").await.unwrap();
        assert_eq!(bread.quantity, 2);
        assert_eq!(bread.image_url, "memory://pantry/default.png");

        let mut ids: Vec<String> = inventory.list_items().await.unwrap().into_iter().map(|i| i.id).collect();
        ids.sort();
        assert_eq!(ids, vec!["012345".to_string(), "Bread".to_string()]);

        // Dropping to zero removes the record.
        assert_eq!(inventory.change_quantity("012345", -1).await.unwrap(), QuantityChange::Removed);
        let remaining = inventory.list_items().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "Bread");

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_unknown_upc_leaves_store_unchanged() {
        let server = provider().await;
        let system = InventorySystem::new(&config(server.uri())).unwrap();

        let err = system.inventory.add_item_by_upc("999").await.unwrap_err();
        assert_eq!(err, InventoryError::ProductNotFound("999".into()));
        assert!(system.inventory.list_items().await.unwrap().is_empty());

        // The service is still usable afterwards.
        assert_eq!(system.inventory.add_item_by_name("Milk").await.unwrap().quantity, 1);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_provider_reports_not_found() {
        // Nothing listens on the discard port.
        let system = InventorySystem::new(&config("http://127.0.0.1:9".to_string())).unwrap();

        let err = system.inventory.add_item_by_upc("012345").await.unwrap_err();
        assert_eq!(err, InventoryError::ProductNotFound("012345".into()));
        assert!(system.inventory.list_items().await.unwrap().is_empty());

        system.shutdown().await.unwrap();
    }
}
