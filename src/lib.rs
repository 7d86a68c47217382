#![allow(unknown_lints)]
//! Static topology of a railway scenery layout.
//!
//! A layout is a graph of track items (lines, points, end items, places...)
//! linked end to end. Items reference each other by identifier and are owned
//! by a [`Scenery`], through which every reference is resolved: neighbours,
//! conflicting items, places and the reverse end of points.
//!
//! ```
//! use scenery_graph::{Direction, Layout, TrackItemId, TrackItems};
//!
//! let json = r#"{"trackItems": {
//!     "1": {"__type__": "EndItem", "tiId": 1, "nextTiId": 2},
//!     "2": {"__type__": "LineItem", "tiId": 2, "previousTiId": 1, "nextTiId": 3, "xf": 100},
//!     "3": {"__type__": "EndItem", "tiId": 3, "previousTiId": 2, "x": 100}
//! }}"#;
//! let scenery = Layout::from_json(json)?.into_scenery()?;
//!
//! let line = scenery.item(TrackItemId(2)).expect("line is defined");
//! let start = scenery.item(TrackItemId(1)).expect("end is defined");
//! let next = line.following_item(&scenery, start, Direction::Forward)?;
//! assert_eq!(next.map(|item| item.id()), Some(TrackItemId(3)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod constants;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod models;
pub mod scenery;

#[doc(hidden)]
pub use log as __log;

pub use error::{LayoutError, TrackError};
pub use geometry::Point;
pub use models::{
    Direction, EndItem, LineItem, PlaceItem, PlaceObject, PlatformItem, PointsItem, TextItem, TrackItem,
    TrackItemId, TrackItemKind, TrackStruct,
};
pub use scenery::{
    Layout, LayoutIssue, LayoutValidation, Places, PointsSwitching, Scenery, SimulationOptions, Topology,
    TrackItems,
};
