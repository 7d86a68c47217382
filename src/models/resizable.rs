use serde::{Deserialize, Serialize};

use super::base::TrackStruct;
use crate::geometry::Point;

/// Base of the items the user can resize in an editor, such as line or
/// platform items: a track item with an end point besides its origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResizableStruct {
    #[serde(flatten)]
    pub base: TrackStruct,
    #[serde(default)]
    pub xf: f64,
    #[serde(default)]
    pub yf: f64,
}

impl ResizableStruct {
    #[must_use]
    pub fn new(base: TrackStruct, end: Point) -> Self {
        Self { base, xf: end.x, yf: end.y }
    }

    #[must_use]
    pub fn end(&self) -> Point {
        Point::new(self.xf, self.yf)
    }

    /// Length of the item on the scene, in pixels
    #[must_use]
    pub fn scene_length(&self) -> f64 {
        self.base.origin().distance_to(self.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TrackItemId;

    #[test]
    fn test_end_and_scene_length() {
        let base = TrackStruct::new(TrackItemId(1), "L", Point::new(10.0, 10.0));
        let resizable = ResizableStruct::new(base, Point::new(40.0, 50.0));

        assert_eq!(resizable.base.origin(), Point::new(10.0, 10.0));
        assert_eq!(resizable.end(), Point::new(40.0, 50.0));
        assert!((resizable.scene_length() - 50.0).abs() < 1e-10);
    }
}
