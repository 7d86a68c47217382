mod base;
mod end;
mod id;
mod kind;
mod line;
mod place;
mod points;
mod resizable;
mod runtime;
mod text;
mod track_item;

pub use base::{CustomProperties, TrackStruct};
pub use end::EndItem;
pub use id::{RegistryId, RouteId, TrackItemId, TrainId};
pub use kind::TrackItemKind;
pub use line::{LineItem, PlatformItem};
pub use place::{PlaceItem, PlaceObject};
pub use points::PointsItem;
pub use resizable::ResizableStruct;
pub use runtime::RuntimeState;
pub use text::TextItem;
pub use track_item::TrackItem;

/// Direction of travel along an item: `Forward` runs from the previous item
/// towards the next one, `Backward` the other way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}
