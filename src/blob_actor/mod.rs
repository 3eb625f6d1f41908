//! Image object storage kept by a `ResourceActor<StoredImage>`.

pub mod entity;
pub mod error;

pub use error::*;
