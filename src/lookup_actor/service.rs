use std::time::Duration;
use reqwest::header::ACCEPT;
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn, Instrument};
use crate::clients::LookupClient;
use crate::messages::{LookupRequest, ServiceResponse};
use super::LookupError;

/// Actor that resolves barcodes over HTTP.
///
/// Every request runs in its own task, which owns the response channel, so a
/// slow provider never stalls the mailbox.
pub struct LookupService {
    receiver: mpsc::Receiver<LookupRequest>,
    http: reqwest::Client,
    endpoint: String,
}

impl LookupService {
    pub fn new(buffer_size: usize, base_url: &str, timeout: Duration) -> Result<(Self, LookupClient), LookupError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            http,
            endpoint: format!("{}/lookup", base_url.trim_end_matches('/')),
        };
        Ok((service, LookupClient::new(sender)))
    }

    #[instrument(name = "lookup_service", skip(self), fields(endpoint = %self.endpoint))]
    pub async fn run(mut self) {
        info!("LookupService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                LookupRequest::Lookup { code, respond_to } => {
                    self.handle_lookup(code, respond_to);
                }
                LookupRequest::Shutdown => {
                    info!("LookupService shutting down");
                    break;
                }
            }
        }

        info!("LookupService stopped");
    }

    #[instrument(fields(upc = %code), skip(self, respond_to))]
    fn handle_lookup(&self, code: String, respond_to: ServiceResponse<Value, LookupError>) {
        debug!("Processing lookup request");

        let http = self.http.clone();
        let endpoint = self.endpoint.clone();

        tokio::spawn(
            async move {
                let result = fetch(&http, &endpoint, &code).await;
                match &result {
                    Ok(_) => debug!("Lookup response received"),
                    Err(LookupError::Status(status)) => warn!(status, "Lookup provider rejected request"),
                    Err(e) => error!(error = %e, "Lookup request failed"),
                }
                let _ = respond_to.send(result);
            }
            .in_current_span(),
        );
    }
}

async fn fetch(http: &reqwest::Client, endpoint: &str, code: &str) -> Result<Value, LookupError> {
    let response = http
        .get(endpoint)
        .query(&[("upc", code)])
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| LookupError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(LookupError::Status(status.as_u16()));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| LookupError::Decode(e.to_string()))
}
