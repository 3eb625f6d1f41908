//! Typed handles for the actors in the system.

#[macro_use]
mod macros;

pub mod blob_client;
pub mod inventory_client;
pub mod lookup_client;

pub use blob_client::*;
pub use inventory_client::*;
pub use lookup_client::*;
