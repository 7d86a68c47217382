use serde::{Deserialize, Serialize};
use std::fmt;

use super::base::TrackStruct;
use super::end::EndItem;
use super::id::TrackItemId;
use super::kind::TrackItemKind;
use super::line::{LineItem, PlatformItem};
use super::place::{PlaceItem, PlaceObject};
use super::points::PointsItem;
use super::resizable::ResizableStruct;
use super::runtime::RuntimeState;
use super::text::TextItem;
use super::Direction;
use crate::error::TrackError;
use crate::geometry::Point;
use crate::scenery::Scenery;

/// A piece of scenery.
///
/// Each item has coordinates in the scenery layout and is connected to other
/// items so that trains can travel from one to another. The variant set is
/// closed; all variants share the navigation contract of [`TrackStruct`] and
/// only override what they change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "__type__")]
pub enum TrackItem {
    #[serde(rename = "LineItem")]
    Line(LineItem),
    #[serde(rename = "InvisibleLinkItem")]
    InvisibleLink(LineItem),
    #[serde(rename = "PlatformItem")]
    Platform(PlatformItem),
    #[serde(rename = "EndItem")]
    End(EndItem),
    #[serde(rename = "Place")]
    Place(PlaceItem),
    #[serde(rename = "TextItem")]
    Text(TextItem),
    #[serde(rename = "PointsItem")]
    Points(PointsItem),
}

impl TrackItem {
    #[must_use]
    pub fn kind(&self) -> TrackItemKind {
        match self {
            TrackItem::Line(_) => TrackItemKind::LineItem,
            TrackItem::InvisibleLink(_) => TrackItemKind::InvisibleLinkItem,
            TrackItem::Platform(_) => TrackItemKind::PlatformItem,
            TrackItem::End(_) => TrackItemKind::EndItem,
            TrackItem::Place(_) => TrackItemKind::Place,
            TrackItem::Text(_) => TrackItemKind::TextItem,
            TrackItem::Points(_) => TrackItemKind::PointsItem,
        }
    }

    #[must_use]
    pub fn base(&self) -> &TrackStruct {
        match self {
            TrackItem::Line(l) | TrackItem::InvisibleLink(l) => &l.resizable.base,
            TrackItem::Platform(p) => &p.line.resizable.base,
            TrackItem::End(e) => &e.base,
            TrackItem::Place(p) => &p.base,
            TrackItem::Text(t) => &t.base,
            TrackItem::Points(p) => &p.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut TrackStruct {
        match self {
            TrackItem::Line(l) | TrackItem::InvisibleLink(l) => &mut l.resizable.base,
            TrackItem::Platform(p) => &mut p.line.resizable.base,
            TrackItem::End(e) => &mut e.base,
            TrackItem::Place(p) => &mut p.base,
            TrackItem::Text(t) => &mut t.base,
            TrackItem::Points(p) => &mut p.base,
        }
    }

    #[must_use]
    pub fn id(&self) -> TrackItemId {
        self.base().id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.base().name
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        self.base().origin()
    }

    /// The end point of resizable items
    #[must_use]
    pub fn end(&self) -> Option<Point> {
        self.as_resizable().map(ResizableStruct::end)
    }

    #[must_use]
    pub fn next_id(&self) -> Option<TrackItemId> {
        self.base().next_id
    }

    #[must_use]
    pub fn previous_id(&self) -> Option<TrackItemId> {
        self.base().previous_id
    }

    /// Length in meters of this item in real life.
    ///
    /// End items always report [`crate::constants::END_ITEM_LENGTH`].
    #[must_use]
    pub fn real_length(&self) -> f64 {
        match self {
            TrackItem::End(e) => e.real_length(),
            _ => self.base().real_length,
        }
    }

    /// Maximum speed in m/s, the simulation default if the item has none
    #[must_use]
    pub fn max_speed(&self, scenery: &Scenery) -> f64 {
        self.base().max_speed(scenery)
    }

    #[must_use]
    pub fn runtime(&self) -> &RuntimeState {
        &self.base().runtime
    }

    pub fn runtime_mut(&mut self) -> &mut RuntimeState {
        &mut self.base_mut().runtime
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.base().is_bound()
    }

    /// A copy of this item that is not bound to any scenery
    #[must_use]
    pub fn unbound(mut self) -> Self {
        self.base_mut().unbind();
        self
    }

    /// # Errors
    ///
    /// Returns `UnboundRegistry` if this item is not bound to `scenery`
    pub fn neighbor<'s>(&self, scenery: &'s Scenery, direction: Direction) -> Result<Option<&'s TrackItem>, TrackError> {
        self.base().neighbor(scenery, direction)
    }

    /// # Errors
    ///
    /// Returns `UnboundRegistry` if this item is not bound to `scenery`
    pub fn next_item<'s>(&self, scenery: &'s Scenery) -> Result<Option<&'s TrackItem>, TrackError> {
        self.base().next_item(scenery)
    }

    /// # Errors
    ///
    /// Returns `UnboundRegistry` if this item is not bound to `scenery`
    pub fn previous_item<'s>(&self, scenery: &'s Scenery) -> Result<Option<&'s TrackItem>, TrackError> {
        self.base().previous_item(scenery)
    }

    /// # Errors
    ///
    /// Returns `UnboundRegistry` if this item is not bound to `scenery`
    pub fn conflict_item<'s>(&self, scenery: &'s Scenery) -> Result<Option<&'s TrackItem>, TrackError> {
        self.base().conflict_item(scenery)
    }

    /// # Errors
    ///
    /// Returns `UnboundRegistry` if this item is not bound to `scenery`
    pub fn place<'s>(&self, scenery: &'s Scenery) -> Result<Option<&'s PlaceItem>, TrackError> {
        self.base().place(scenery)
    }

    /// See [`TrackStruct::following_item`]
    ///
    /// # Errors
    ///
    /// Returns `ItemsNotLinked` if `preceding` is not a neighbour of this item,
    /// or `UnboundRegistry` if either item is not bound to `scenery`
    pub fn following_item<'s>(
        &self,
        scenery: &'s Scenery,
        preceding: &TrackItem,
        direction: Direction,
    ) -> Result<Option<&'s TrackItem>, TrackError> {
        self.base().following_item(scenery, preceding, direction)
    }

    #[must_use]
    pub fn as_resizable(&self) -> Option<&ResizableStruct> {
        match self {
            TrackItem::Line(l) | TrackItem::InvisibleLink(l) => Some(&l.resizable),
            TrackItem::Platform(p) => Some(&p.line.resizable),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_place_object(&self) -> Option<&dyn PlaceObject> {
        match self {
            TrackItem::Line(l) | TrackItem::InvisibleLink(l) => Some(l),
            TrackItem::Platform(p) => Some(p),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_place(&self) -> Option<&PlaceItem> {
        match self {
            TrackItem::Place(p) => Some(p),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_points(&self) -> Option<&PointsItem> {
        match self {
            TrackItem::Points(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_points_mut(&mut self) -> Option<&mut PointsItem> {
        match self {
            TrackItem::Points(p) => Some(p),
            _ => None,
        }
    }

    /// Ids of every item this item is linked to, reverse end included
    #[must_use]
    pub fn linked_ids(&self) -> Vec<TrackItemId> {
        let mut ids: Vec<TrackItemId> = [self.previous_id(), self.next_id()].into_iter().flatten().collect();
        if let Some(reverse) = self.as_points().and_then(|p| p.reverse_id) {
            ids.push(reverse);
        }
        ids
    }
}

impl fmt::Display for TrackItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind(), self.id())
    }
}

impl From<LineItem> for TrackItem {
    fn from(line: LineItem) -> Self {
        TrackItem::Line(line)
    }
}

impl From<PlatformItem> for TrackItem {
    fn from(platform: PlatformItem) -> Self {
        TrackItem::Platform(platform)
    }
}

impl From<EndItem> for TrackItem {
    fn from(end: EndItem) -> Self {
        TrackItem::End(end)
    }
}

impl From<PlaceItem> for TrackItem {
    fn from(place: PlaceItem) -> Self {
        TrackItem::Place(place)
    }
}

impl From<TextItem> for TrackItem {
    fn from(text: TextItem) -> Self {
        TrackItem::Text(text)
    }
}

impl From<PointsItem> for TrackItem {
    fn from(points: PointsItem) -> Self {
        TrackItem::Points(points)
    }
}
