use super::Scenery;
use crate::models::{PlaceItem, TrackItem};

/// Extension trait for place-related operations on `Scenery`
pub trait Places {
    /// Get a place by its code
    fn place_by_code(&self, code: &str) -> Option<&PlaceItem>;

    /// Iterate over all places in load order
    fn places(&self) -> impl Iterator<Item = &PlaceItem>;

    /// Get the items that declare they belong to the place with this code,
    /// the place itself excluded
    fn items_at_place(&self, code: &str) -> Vec<&TrackItem>;
}

impl Places for Scenery {
    fn place_by_code(&self, code: &str) -> Option<&PlaceItem> {
        self.place_index
            .get(code)
            .and_then(|id| self.items.get(id))
            .and_then(TrackItem::as_place)
    }

    fn places(&self) -> impl Iterator<Item = &PlaceItem> {
        self.place_index
            .values()
            .filter_map(|id| self.items.get(id))
            .filter_map(TrackItem::as_place)
    }

    fn items_at_place(&self, code: &str) -> Vec<&TrackItem> {
        self.items
            .values()
            .filter(|item| item.as_place().is_none())
            .filter(|item| item.base().place_code.as_deref() == Some(code))
            .collect()
    }
}
