/// An image kept by the blob store, addressed by its object name.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredImage {
    pub name: String,
    pub bytes: Vec<u8>,
}
