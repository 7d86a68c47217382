use super::Scenery;
use crate::models::{RuntimeState, TrackItem, TrackItemId, TrackItemKind};

/// Extension trait for item lookups on `Scenery`
pub trait TrackItems {
    /// Get an item by its identifier
    fn item(&self, id: TrackItemId) -> Option<&TrackItem>;

    /// Iterate over all items in load order
    fn items(&self) -> impl Iterator<Item = &TrackItem>;

    /// Iterate over the items of one kind in load order
    fn items_of_kind(&self, kind: TrackItemKind) -> impl Iterator<Item = &TrackItem>;

    /// Get the runtime state of an item for the simulation to update
    fn runtime_mut(&mut self, id: TrackItemId) -> Option<&mut RuntimeState>;

    fn contains(&self, id: TrackItemId) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool;
}

impl TrackItems for Scenery {
    fn item(&self, id: TrackItemId) -> Option<&TrackItem> {
        self.items.get(&id)
    }

    fn items(&self) -> impl Iterator<Item = &TrackItem> {
        self.items.values()
    }

    fn items_of_kind(&self, kind: TrackItemKind) -> impl Iterator<Item = &TrackItem> {
        self.items.values().filter(move |item| item.kind() == kind)
    }

    fn runtime_mut(&mut self, id: TrackItemId) -> Option<&mut RuntimeState> {
        self.items.get_mut(&id).map(TrackItem::runtime_mut)
    }

    fn contains(&self, id: TrackItemId) -> bool {
        self.items.contains_key(&id)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
