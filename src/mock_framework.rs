//! # Mock Framework
//!
//! Utilities for testing clients and the inventory service in isolation.
//!
//! Use [`create_mock_client`] or [`create_mock_lookup`] to get a client and a
//! receiver. Then use helpers like [`expect_get`] or [`expect_lookup`] to
//! assert behavior and answer on the actor's behalf.

use serde_json::Value;
use tokio::sync::{mpsc, oneshot};
use crate::actor_framework::{Entity, FrameworkError, ResourceActor, ResourceClient, ResourceRequest, Write};
use crate::clients::{BlobClient, InventoryStoreClient, LookupClient};
use crate::domain::{InventoryItem, StoredImage};
use crate::inventory_service::InventoryService;
use crate::lookup_actor::LookupError;
use crate::messages::LookupRequest;

pub const TEST_BLOB_BASE: &str = "memory://pantry";
pub const TEST_DEFAULT_IMAGE: &str = "memory://pantry/default.png";

/// Creates a mock client and a receiver for asserting requests.
///
/// The test plays the actor: it inspects each message arriving on `receiver`
/// and answers through the message's `respond_to`.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Put request
pub async fn expect_put<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(Write<T>, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Put { write, respond_to }) => Some((write, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, oneshot::Sender<Result<bool, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Creates a lookup client whose requests land on the returned receiver.
pub fn create_mock_lookup(buffer_size: usize) -> (LookupClient, mpsc::Receiver<LookupRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (LookupClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Lookup request
pub async fn expect_lookup(receiver: &mut mpsc::Receiver<LookupRequest>) -> Option<(String, oneshot::Sender<Result<Value, LookupError>>)> {
    match receiver.recv().await {
        Some(LookupRequest::Lookup { code, respond_to }) => Some((code, respond_to)),
        _ => None,
    }
}

/// Answers every lookup with `respond(code)` until the client side goes away.
pub fn serve_lookups(
    mut receiver: mpsc::Receiver<LookupRequest>,
    respond: impl Fn(&str) -> Result<Value, LookupError> + Send + 'static,
) {
    tokio::spawn(async move {
        while let Some((code, respond_to)) = expect_lookup(&mut receiver).await {
            let _ = respond_to.send(respond(code.as_str()));
        }
    });
}

/// Real in-memory store and blob actors.
pub fn spawn_stores() -> (InventoryStoreClient, BlobClient) {
    let (store_actor, store) = ResourceActor::<InventoryItem>::new(10);
    tokio::spawn(store_actor.run());
    let (blob_actor, blobs) = ResourceActor::<StoredImage>::new(10);
    tokio::spawn(blob_actor.run());
    (
        InventoryStoreClient::new(store),
        BlobClient::new(blobs, TEST_BLOB_BASE, "default.png"),
    )
}

/// A service over real stores, with lookups answered by `respond`.
pub fn service_with_lookups(
    respond: impl Fn(&str) -> Result<Value, LookupError> + Send + 'static,
) -> (InventoryService, InventoryStoreClient) {
    let (store, blobs) = spawn_stores();
    let (lookup, lookup_rx) = create_mock_lookup(10);
    serve_lookups(lookup_rx, respond);
    (InventoryService::new(store.clone(), lookup, blobs), store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<InventoryItem>(10);

        let get_task = tokio::spawn(async move { client.get("Milk".to_string()).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, "Milk");
        let item = InventoryItem::new("Milk", "Milk", TEST_DEFAULT_IMAGE);
        responder.send(Ok(Some(item.clone()))).unwrap();

        let result = get_task.await.unwrap();
        assert_eq!(result, Ok(Some(item)));
    }

    #[tokio::test]
    async fn test_mock_lookup() {
        let (client, mut receiver) = create_mock_lookup(10);

        let lookup_task = tokio::spawn(async move { client.lookup("012345".to_string()).await });

        let (code, responder) = expect_lookup(&mut receiver).await.expect("Expected Lookup request");
        assert_eq!(code, "012345");
        responder.send(Err(LookupError::Status(404))).unwrap();

        assert_eq!(lookup_task.await.unwrap(), Err(LookupError::Status(404)));
    }
}
