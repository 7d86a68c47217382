use serde::{Deserialize, Serialize};

use super::base::TrackStruct;
use crate::constants::END_ITEM_LENGTH;

/// Invisible single point item to which the free ends of other items are
/// connected.
///
/// A well formed end item has exactly one neighbour; checking this is up to
/// the layout validation, traversal only relies on the linkage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndItem {
    #[serde(flatten)]
    pub base: TrackStruct,
}

impl EndItem {
    #[must_use]
    pub fn new(base: TrackStruct) -> Self {
        Self { base }
    }

    /// Always [`END_ITEM_LENGTH`], whatever the stored length is, so that no
    /// train is expected to run through.
    #[must_use]
    pub fn real_length(&self) -> f64 {
        END_ITEM_LENGTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::models::TrackItemId;

    #[test]
    fn test_real_length_ignores_stored_length() {
        let end = EndItem::new(
            TrackStruct::new(TrackItemId(1), "E", Point::new(0.0, 0.0)).with_real_length(12.5),
        );
        assert_eq!(end.base.real_length, 12.5);
        assert_eq!(end.real_length(), END_ITEM_LENGTH);
    }
}
