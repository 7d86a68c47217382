use super::{Scenery, TrackItems};
use crate::error::TrackError;
use crate::models::{Direction, TrackItem, TrackItemId};

/// Iterator following the linkage of the scenery item after item.
///
/// Yields the start item first, then each following item, and stops after an
/// item whose far side is unset. If the linkage breaks, the error is yielded
/// once and the walk ends. A walk around a loop never ends on its own.
#[derive(Debug)]
pub struct Walk<'s> {
    scenery: &'s Scenery,
    direction: Direction,
    preceding: &'s TrackItem,
    current: Option<&'s TrackItem>,
    error: Option<TrackError>,
}

impl Scenery {
    /// Walk the scenery from `start`, having arrived from `from`
    ///
    /// # Errors
    ///
    /// Returns `UnknownItem` if either item does not exist
    pub fn walk(&self, start: TrackItemId, from: TrackItemId, direction: Direction) -> Result<Walk<'_>, TrackError> {
        let current = self.item(start).ok_or(TrackError::UnknownItem(start))?;
        let preceding = self.item(from).ok_or(TrackError::UnknownItem(from))?;
        Ok(Walk {
            scenery: self,
            direction,
            preceding,
            current: Some(current),
            error: None,
        })
    }
}

impl<'s> Iterator for Walk<'s> {
    type Item = Result<&'s TrackItem, TrackError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(error) = self.error.take() {
            return Some(Err(error));
        }
        let current = self.current.take()?;
        match current.following_item(self.scenery, self.preceding, self.direction) {
            Ok(following) => {
                self.preceding = current;
                self.current = following;
            }
            Err(error) => self.error = Some(error),
        }
        Some(Ok(current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenery::fixtures::{ids, junction_layout, loop_layout, straight_layout};
    use crate::scenery::SimulationOptions;

    #[test]
    fn test_walk_to_the_end() {
        let scenery = straight_layout(SimulationOptions::default());
        let visited: Vec<TrackItemId> = scenery
            .walk(TrackItemId(2), TrackItemId(1), Direction::Forward)
            .expect("items exist")
            .map(|item| item.map(TrackItem::id))
            .collect::<Result<_, _>>()
            .expect("linked");
        assert_eq!(visited, vec![TrackItemId(2), TrackItemId(3), TrackItemId(4)]);
    }

    #[test]
    fn test_walk_backwards() {
        let scenery = straight_layout(SimulationOptions::default());
        let visited: Vec<TrackItemId> = scenery
            .walk(TrackItemId(3), TrackItemId(4), Direction::Backward)
            .expect("items exist")
            .map(|item| item.map(TrackItem::id))
            .collect::<Result<_, _>>()
            .expect("linked");
        assert_eq!(visited, vec![TrackItemId(3), TrackItemId(2), TrackItemId(1)]);
    }

    #[test]
    fn test_walk_through_points_follows_normal_link() {
        let scenery = junction_layout();
        let visited: Vec<TrackItemId> = scenery
            .walk(ids::LINE_WEST, ids::END_WEST, Direction::Forward)
            .expect("items exist")
            .map(|item| item.map(TrackItem::id))
            .collect::<Result<_, _>>()
            .expect("linked");
        assert_eq!(
            visited,
            vec![ids::LINE_WEST, ids::POINTS, ids::LINK, ids::LINE_EAST, ids::END_EAST]
        );
    }

    #[test]
    fn test_walk_reports_broken_linkage_once() {
        let scenery = junction_layout();
        let mut walk = scenery
            .walk(ids::LINE_WEST, ids::LINE_EAST, Direction::Forward)
            .expect("items exist");

        let first = walk.next().expect("start item").expect("start is yielded");
        assert_eq!(first.id(), ids::LINE_WEST);
        let err = walk.next().expect("error is yielded").expect_err("not linked");
        assert_eq!(
            err,
            TrackError::ItemsNotLinked {
                item: ids::LINE_WEST,
                preceding: ids::LINE_EAST,
            }
        );
        assert!(walk.next().is_none());
    }

    #[test]
    fn test_walk_around_loop() {
        let scenery = loop_layout();
        let visited: Vec<TrackItemId> = scenery
            .walk(TrackItemId(1), TrackItemId(3), Direction::Forward)
            .expect("items exist")
            .take(7)
            .map(|item| item.map(TrackItem::id))
            .collect::<Result<_, _>>()
            .expect("linked");
        let expected: Vec<TrackItemId> = [1, 2, 3, 1, 2, 3, 1].into_iter().map(TrackItemId).collect();
        assert_eq!(visited, expected);
    }

    #[test]
    fn test_walk_unknown_start() {
        let scenery = junction_layout();
        assert!(matches!(
            scenery.walk(TrackItemId(999), ids::END_WEST, Direction::Forward),
            Err(TrackError::UnknownItem(TrackItemId(999)))
        ));
    }
}
