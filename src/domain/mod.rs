pub mod item;
pub mod product;
pub mod image;

pub use item::*;
pub use product::*;
pub use image::*;
