use serde::{Deserialize, Serialize};

use super::base::TrackStruct;
use super::id::{optional_id, TrackItemId};
use super::track_item::TrackItem;
use crate::constants::POINTS_HALF_SIZE;
use crate::error::TrackError;
use crate::geometry::{on_square_boundary, Point};
use crate::scenery::Scenery;

/// A three-way junction.
///
/// ```text
///                     ____________ reverse
///                    /
/// common ___________/______________normal
/// ```
///
/// Trains go from the common end to the normal or reverse end depending on
/// the state of the points, never from normal to reverse. The previous and
/// next links of the base record are the common and normal ends; the reverse
/// end has its own link.
///
/// Points are drawn on a 10 x 10 square centered on the item origin. The
/// ends are expressed in item coordinates and lie on the side of this square.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsItem {
    #[serde(flatten)]
    pub base: TrackStruct,
    #[serde(default, rename = "xf")]
    pub xc: f64,
    #[serde(default, rename = "yf")]
    pub yc: f64,
    #[serde(default)]
    pub xn: f64,
    #[serde(default)]
    pub yn: f64,
    #[serde(default)]
    pub xr: f64,
    #[serde(default)]
    pub yr: f64,
    #[serde(default, rename = "reverseTiId", with = "optional_id")]
    pub reverse_id: Option<TrackItemId>,
    #[serde(skip)]
    reversed: bool,
}

impl PointsItem {
    /// Ends are given in item coordinates
    #[must_use]
    pub fn new(base: TrackStruct, common_end: Point, normal_end: Point, reverse_end: Point) -> Self {
        Self {
            base,
            xc: common_end.x,
            yc: common_end.y,
            xn: normal_end.x,
            yn: normal_end.y,
            xr: reverse_end.x,
            yr: reverse_end.y,
            reverse_id: None,
            reversed: false,
        }
    }

    #[must_use]
    pub fn with_reverse(mut self, reverse: TrackItemId) -> Self {
        self.reverse_id = Some(reverse);
        self
    }

    /// The center of the points in scene coordinates
    #[must_use]
    pub fn center(&self) -> Point {
        self.base.origin()
    }

    #[must_use]
    pub fn common_end(&self) -> Point {
        Point::new(self.xc, self.yc)
    }

    #[must_use]
    pub fn normal_end(&self) -> Point {
        Point::new(self.xn, self.yn)
    }

    #[must_use]
    pub fn reverse_end(&self) -> Point {
        Point::new(self.xr, self.yr)
    }

    /// Whether all three ends lie on the side of the drawing square
    #[must_use]
    pub fn ends_on_square(&self) -> bool {
        [self.common_end(), self.normal_end(), self.reverse_end()]
            .into_iter()
            .all(|end| on_square_boundary(end, POINTS_HALF_SIZE))
    }

    /// The item linked to the reverse end of these points
    ///
    /// # Errors
    ///
    /// Returns `UnboundRegistry` if the points are not bound to `scenery`
    pub fn reverse_item<'s>(&self, scenery: &'s Scenery) -> Result<Option<&'s TrackItem>, TrackError> {
        self.base.check_bound(scenery)?;
        Ok(scenery.resolve(self.reverse_id))
    }

    /// True if the points are in the reversed position
    #[must_use]
    pub fn reversed(&self) -> bool {
        self.reversed
    }

    pub fn set_reversed(&mut self, reversed: bool) {
        self.reversed = reversed;
    }

    /// Switch the points to the other position and return the new one
    pub fn toggle(&mut self) -> bool {
        self.reversed = !self.reversed;
        self.reversed
    }
}
