use serde::{Deserialize, Serialize};

use super::base::TrackStruct;
use super::place::PlaceObject;
use super::resizable::ResizableStruct;
use crate::geometry::Point;

/// A simple railway line connecting two items.
///
/// The same record backs invisible links, which behave exactly like lines but
/// are not meant to be drawn (links between lines, bridges, tunnels).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(flatten)]
    pub resizable: ResizableStruct,
    #[serde(default)]
    pub track_code: String,
}

impl LineItem {
    #[must_use]
    pub fn new(base: TrackStruct, end: Point) -> Self {
        Self {
            resizable: ResizableStruct::new(base, end),
            track_code: String::new(),
        }
    }

    #[must_use]
    pub fn with_track_code(mut self, track_code: impl Into<String>) -> Self {
        self.track_code = track_code.into();
        self
    }
}

impl PlaceObject for LineItem {
    fn track_code(&self) -> &str {
        &self.track_code
    }
}

/// A platform, usually drawn as a colored rectangle along its track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformItem {
    #[serde(flatten)]
    pub line: LineItem,
}

impl PlatformItem {
    #[must_use]
    pub fn new(line: LineItem) -> Self {
        Self { line }
    }
}

impl PlaceObject for PlatformItem {
    fn track_code(&self) -> &str {
        self.line.track_code()
    }
}
