use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{debug, instrument};
use crate::messages::LookupRequest;
use crate::lookup_actor::LookupError;

/// Client for the `LookupService` actor.
#[derive(Clone)]
pub struct LookupClient {
    sender: mpsc::Sender<LookupRequest>,
}

impl LookupClient {
    pub fn new(sender: mpsc::Sender<LookupRequest>) -> Self {
        Self { sender }
    }

    /// No response is awaited; the service stops after draining earlier requests.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), LookupError> {
        debug!("Sending shutdown request");
        self.sender
            .send(LookupRequest::Shutdown)
            .await
            .map_err(|e| LookupError::ActorCommunicationError(e.to_string()))
    }
}

client_method!(LookupClient => fn lookup(code: String) -> Value as LookupRequest::Lookup, Error = LookupError);
