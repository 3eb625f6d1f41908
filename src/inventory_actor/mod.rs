//! Inventory-specific document logic: the write rules for stored items.

mod dtos;
pub mod entity;
pub mod error;

pub use dtos::*;
pub use error::*;
