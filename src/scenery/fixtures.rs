//! Layouts shared by the test suites
//!
//! ```text
//!                        ___ PLATFORM (7) ___ END_BRANCH (8)
//!                       /
//! END_WEST (1) __ LINE_WEST (2) __ POINTS (3) __ LINK (4) __ LINE_EAST (5) __ END_EAST (6)
//!                                                                 |
//!                                                     CROSSING (9), conflicts with 5
//! ```
use super::{Scenery, SimulationOptions};
use crate::geometry::Point;
use crate::models::{EndItem, LineItem, PlaceItem, PlatformItem, PointsItem, TextItem, TrackItem, TrackItemId, TrackStruct};

pub mod ids {
    use crate::models::TrackItemId;

    pub const END_WEST: TrackItemId = TrackItemId(1);
    pub const LINE_WEST: TrackItemId = TrackItemId(2);
    pub const POINTS: TrackItemId = TrackItemId(3);
    pub const LINK: TrackItemId = TrackItemId(4);
    pub const LINE_EAST: TrackItemId = TrackItemId(5);
    pub const END_EAST: TrackItemId = TrackItemId(6);
    pub const PLATFORM: TrackItemId = TrackItemId(7);
    pub const END_BRANCH: TrackItemId = TrackItemId(8);
    pub const CROSSING: TrackItemId = TrackItemId(9);
    pub const END_NORTH: TrackItemId = TrackItemId(10);
    pub const END_SOUTH: TrackItemId = TrackItemId(11);
    pub const PLACE: TrackItemId = TrackItemId(12);
    pub const TEXT: TrackItemId = TrackItemId(13);

    pub const ALL: [TrackItemId; 13] = [
        END_WEST, LINE_WEST, POINTS, LINK, LINE_EAST, END_EAST, PLATFORM, END_BRANCH, CROSSING, END_NORTH,
        END_SOUTH, PLACE, TEXT,
    ];
}

fn base(id: TrackItemId, x: f64, y: f64) -> TrackStruct {
    TrackStruct::new(id, format!("item {id}"), Point::new(x, y))
}

fn end(id: TrackItemId, x: f64, y: f64, previous: Option<TrackItemId>, next: Option<TrackItemId>) -> TrackItem {
    EndItem::new(base(id, x, y).with_links(previous, next)).into()
}

fn line(id: TrackItemId, from: (f64, f64), to: (f64, f64), previous: TrackItemId, next: TrackItemId) -> LineItem {
    LineItem::new(
        base(id, from.0, from.1)
            .with_links(Some(previous), Some(next))
            .with_real_length(Point::from(from).distance_to(Point::from(to))),
        Point::from(to),
    )
}

/// A junction with a platform on its branch and a line crossing the main line
pub fn junction_layout() -> Scenery {
    use ids::*;

    let items: Vec<TrackItem> = vec![
        end(END_WEST, 0.0, 0.0, None, Some(LINE_WEST)),
        line(LINE_WEST, (0.0, 0.0), (100.0, 0.0), END_WEST, POINTS).into(),
        PointsItem::new(
            base(POINTS, 105.0, 0.0).with_links(Some(LINE_WEST), Some(LINK)),
            Point::new(-5.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(5.0, -5.0),
        )
        .with_reverse(PLATFORM)
        .into(),
        TrackItem::InvisibleLink(line(LINK, (110.0, 0.0), (120.0, 0.0), POINTS, LINE_EAST)),
        {
            let mut east = line(LINE_EAST, (120.0, 0.0), (200.0, 0.0), LINK, END_EAST);
            east.resizable.base = east.resizable.base.with_max_speed(10.0).with_conflict(CROSSING);
            east.into()
        },
        end(END_EAST, 200.0, 0.0, Some(LINE_EAST), None),
        {
            let mut platform = line(PLATFORM, (110.0, -5.0), (180.0, -5.0), POINTS, END_BRANCH).with_track_code("1");
            platform.resizable.base = platform.resizable.base.with_place_code("STN");
            PlatformItem::new(platform).into()
        },
        end(END_BRANCH, 180.0, -5.0, Some(PLATFORM), None),
        {
            let mut crossing = line(CROSSING, (190.0, -20.0), (190.0, 20.0), END_NORTH, END_SOUTH);
            crossing.resizable.base = crossing.resizable.base.with_conflict(LINE_EAST);
            crossing.into()
        },
        end(END_NORTH, 190.0, -20.0, None, Some(CROSSING)),
        end(END_SOUTH, 190.0, 20.0, Some(CROSSING), None),
        PlaceItem::new(TrackStruct::new(PLACE, "Station", Point::new(150.0, -30.0)).with_place_code("STN")).into(),
        TextItem::new(TrackStruct::new(TEXT, "Station", Point::new(150.0, -40.0))).into(),
    ];

    Scenery::bind(items, SimulationOptions::default()).expect("fixture layout binds")
}

/// `E1 - L2 - L3 - E4`
pub fn straight_layout(options: SimulationOptions) -> Scenery {
    let id = TrackItemId;
    let items: Vec<TrackItem> = vec![
        end(id(1), 0.0, 0.0, None, Some(id(2))),
        line(id(2), (0.0, 0.0), (50.0, 0.0), id(1), id(3)).into(),
        line(id(3), (50.0, 0.0), (100.0, 0.0), id(2), id(4)).into(),
        end(id(4), 100.0, 0.0, Some(id(3)), None),
    ];
    Scenery::bind(items, options).expect("fixture layout binds")
}

/// Three lines closing a loop: `1 -> 2 -> 3 -> 1`
pub fn loop_layout() -> Scenery {
    let id = TrackItemId;
    let items: Vec<TrackItem> = vec![
        line(id(1), (0.0, 0.0), (50.0, 0.0), id(3), id(2)).into(),
        line(id(2), (50.0, 0.0), (50.0, 50.0), id(1), id(3)).into(),
        line(id(3), (50.0, 50.0), (0.0, 0.0), id(2), id(1)).into(),
    ];
    Scenery::bind(items, SimulationOptions::default()).expect("fixture layout binds")
}
