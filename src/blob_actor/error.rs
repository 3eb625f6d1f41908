use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum BlobError {
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),
    #[error("Blob storage error: {0}")]
    StorageError(String),
}
