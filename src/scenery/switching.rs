use super::Scenery;
use crate::debug_log;
use crate::error::TrackError;
use crate::models::{PointsItem, TrackItemId};

/// Extension trait storing the position of points items on `Scenery`.
///
/// Whoever calls these decides whether switching is allowed; no interlocking
/// is checked here.
pub trait PointsSwitching {
    /// Get the points item with this identifier
    ///
    /// # Errors
    ///
    /// Returns an error if there is no such item or if it is not a points item
    fn points(&self, id: TrackItemId) -> Result<&PointsItem, TrackError>;

    /// True if the points are reversed
    ///
    /// # Errors
    ///
    /// Returns an error if there is no such item or if it is not a points item
    fn points_reversed(&self, id: TrackItemId) -> Result<bool, TrackError>;

    /// Set the points to the given position
    ///
    /// # Errors
    ///
    /// Returns an error if there is no such item or if it is not a points item
    fn set_points_reversed(&mut self, id: TrackItemId, reversed: bool) -> Result<(), TrackError>;

    /// Switch the points to the other position, returns the new position
    ///
    /// # Errors
    ///
    /// Returns an error if there is no such item or if it is not a points item
    fn toggle_points(&mut self, id: TrackItemId) -> Result<bool, TrackError>;
}

impl Scenery {
    fn points_mut(&mut self, id: TrackItemId) -> Result<&mut PointsItem, TrackError> {
        self.items
            .get_mut(&id)
            .ok_or(TrackError::UnknownItem(id))?
            .as_points_mut()
            .ok_or(TrackError::NotPoints(id))
    }
}

impl PointsSwitching for Scenery {
    fn points(&self, id: TrackItemId) -> Result<&PointsItem, TrackError> {
        self.items
            .get(&id)
            .ok_or(TrackError::UnknownItem(id))?
            .as_points()
            .ok_or(TrackError::NotPoints(id))
    }

    fn points_reversed(&self, id: TrackItemId) -> Result<bool, TrackError> {
        self.points(id).map(PointsItem::reversed)
    }

    fn set_points_reversed(&mut self, id: TrackItemId, reversed: bool) -> Result<(), TrackError> {
        self.points_mut(id)?.set_reversed(reversed);
        debug_log!("Points {} set to {}", id, if reversed { "reverse" } else { "normal" });
        Ok(())
    }

    fn toggle_points(&mut self, id: TrackItemId) -> Result<bool, TrackError> {
        let reversed = self.points_mut(id)?.toggle();
        debug_log!("Points {} switched to {}", id, if reversed { "reverse" } else { "normal" });
        Ok(reversed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenery::fixtures::{ids, junction_layout};

    #[test]
    fn test_points_start_normal() {
        let scenery = junction_layout();
        assert!(!scenery.points_reversed(ids::POINTS).expect("points exist"));
    }

    #[test]
    fn test_toggle_points() {
        let mut scenery = junction_layout();
        assert!(scenery.toggle_points(ids::POINTS).expect("points exist"));
        assert!(scenery.points_reversed(ids::POINTS).expect("points exist"));
        assert!(scenery.points_reversed(ids::POINTS).expect("points exist"));

        assert!(!scenery.toggle_points(ids::POINTS).expect("points exist"));
        assert!(!scenery.points_reversed(ids::POINTS).expect("points exist"));
    }

    #[test]
    fn test_set_points_reversed_is_idempotent() {
        let mut scenery = junction_layout();
        scenery.set_points_reversed(ids::POINTS, true).expect("points exist");
        scenery.set_points_reversed(ids::POINTS, true).expect("points exist");
        assert!(scenery.points_reversed(ids::POINTS).expect("points exist"));
    }

    #[test]
    fn test_switching_errors() {
        let mut scenery = junction_layout();
        assert_eq!(
            scenery.toggle_points(TrackItemId(999)),
            Err(TrackError::UnknownItem(TrackItemId(999)))
        );
        assert_eq!(
            scenery.set_points_reversed(ids::LINE_WEST, true),
            Err(TrackError::NotPoints(ids::LINE_WEST))
        );
        assert!(matches!(scenery.points(ids::PLACE), Err(TrackError::NotPoints(_))));
    }
}
