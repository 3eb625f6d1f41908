use crate::domain::InventoryItem;

/// Result of [`InventoryService::change_quantity`](super::InventoryService::change_quantity).
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityChange {
    /// The item is still stored, with its new quantity.
    Updated(InventoryItem),
    /// The quantity reached zero or below and the item was deleted.
    Removed,
    /// No item with that ID was stored; nothing happened.
    Missing,
}

/// Quantity state of a single item. `Absent` is both initial and re-enterable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityState {
    Absent,
    Present(u32),
}

/// Applies `delta` to a stored quantity. Anything at or below zero means the
/// record goes away; there is no clamping to zero.
pub fn apply_delta(current: u32, delta: i64) -> QuantityState {
    let next = i64::from(current).saturating_add(delta);
    if next <= 0 {
        QuantityState::Absent
    } else {
        QuantityState::Present(u32::try_from(next).unwrap_or(u32::MAX))
    }
}
