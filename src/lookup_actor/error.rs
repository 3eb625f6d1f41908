use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum LookupError {
    #[error("Lookup transport error: {0}")]
    Transport(String),
    #[error("Lookup provider returned status {0}")]
    Status(u16),
    #[error("Lookup response could not be decoded: {0}")]
    Decode(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
