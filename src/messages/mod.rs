use serde_json::Value;
use tokio::sync::oneshot;
use crate::lookup_actor::LookupError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Messages understood by the `LookupService`. The response carries the raw
/// provider body; normalization happens on the caller's side.
#[derive(Debug)]
pub enum LookupRequest {
    Lookup {
        code: String,
        respond_to: ServiceResponse<Value, LookupError>,
    },
    Shutdown,
}
