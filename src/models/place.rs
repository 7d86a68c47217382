use serde::{Deserialize, Serialize};

use super::base::TrackStruct;

/// A physical location such as a station or a passing point.
///
/// Places are not linked to other items: nothing traverses through a place.
/// Items belong to a place by carrying its code as their place code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceItem {
    #[serde(flatten)]
    pub base: TrackStruct,
}

impl PlaceItem {
    #[must_use]
    pub fn new(base: TrackStruct) -> Self {
        Self { base }
    }

    /// The code other items use to declare they belong to this place
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.base.place_code.as_deref()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.base.name
    }
}

/// Capability of items that can be part of a place.
pub trait PlaceObject {
    /// The track number of this item within its place, empty if it has none
    fn track_code(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::models::TrackItemId;

    #[test]
    fn test_place_code_and_name() {
        let place = PlaceItem::new(
            TrackStruct::new(TrackItemId(9), "Central", Point::new(0.0, 0.0)).with_place_code("CTL"),
        );
        assert_eq!(place.code(), Some("CTL"));
        assert_eq!(place.name(), "Central");
        assert_eq!(place.base.next_id, None);
        assert_eq!(place.base.previous_id, None);
    }
}
