use thiserror::Error;

/// Errors reported by inventory operations. None of them is fatal to the process.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Product not found for UPC: {0}")]
    ProductNotFound(String),
    #[error("Inventory store unavailable: {0}")]
    StoreUnavailable(String),
}
