use crate::actor_framework::Entity;
use crate::domain::StoredImage;

impl Entity for StoredImage {
    type Id = String;
    /// Replacement bytes for an existing object.
    type Patch = Vec<u8>;

    fn id(&self) -> &String { &self.name }

    /// Objects are only ever uploaded whole.
    fn from_patch(id: String, _bytes: Vec<u8>) -> Result<Self, String> {
        Err(format!("No object named {} to overwrite", id))
    }

    fn on_write(&self) -> Result<(), String> {
        if self.bytes.is_empty() {
            return Err(format!("Object {} has no content", self.name));
        }
        Ok(())
    }

    fn on_merge(&mut self, bytes: Vec<u8>) -> Result<(), String> {
        self.bytes = bytes;
        Ok(())
    }
}
