//! Barcode lookup against a remote product database.

pub mod service;
pub mod error;

pub use service::*;
pub use error::*;
