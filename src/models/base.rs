use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::id::{optional_code, optional_id, RegistryId, TrackItemId};
use super::place::PlaceItem;
use super::runtime::RuntimeState;
use super::track_item::TrackItem;
use super::Direction;
use crate::error::TrackError;
use crate::geometry::Point;
use crate::scenery::{Places, Scenery};

/// Collaborator-defined metadata: string keys to ordered integer lists
pub type CustomProperties = IndexMap<String, Vec<i64>>;

/// Reads custom properties written either as one object or as a list of
/// objects. Entries of a list are merged in order, a later key replaces an
/// earlier one.
mod custom_properties_serde {
    use serde::{Deserialize, Deserializer};

    use super::CustomProperties;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Persisted {
        Map(CustomProperties),
        List(Vec<CustomProperties>),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<CustomProperties, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Persisted>::deserialize(deserializer)? {
            None => CustomProperties::new(),
            Some(Persisted::Map(properties)) => properties,
            Some(Persisted::List(list)) => list.into_iter().flatten().collect(),
        })
    }
}

/// Fields and behaviour shared by every item of the scenery.
///
/// An item is connected to at most two other items: the previous item is
/// usually the item connected to the origin of this item, and the next item
/// the one connected to its other end. Neighbours, conflicting items and
/// places are referenced by identifier and resolved through the [`Scenery`]
/// the item is bound to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackStruct {
    #[serde(rename = "tiId")]
    pub id: TrackItemId,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "nextTiId", with = "optional_id")]
    pub next_id: Option<TrackItemId>,
    #[serde(default, rename = "previousTiId", with = "optional_id")]
    pub previous_id: Option<TrackItemId>,
    /// Maximum speed in m/s, 0 to use the simulation default
    #[serde(default)]
    pub max_speed: f64,
    /// Length in meters of this item in real life
    #[serde(default)]
    pub real_length: f64,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default, rename = "conflictTiId", with = "optional_id")]
    pub conflict_id: Option<TrackItemId>,
    #[serde(default, deserialize_with = "custom_properties_serde::deserialize")]
    pub custom_properties: CustomProperties,
    #[serde(default, with = "optional_code")]
    pub place_code: Option<String>,

    #[serde(skip)]
    registry: Option<RegistryId>,
    #[serde(skip)]
    pub runtime: RuntimeState,
}

impl TrackStruct {
    #[must_use]
    pub fn new(id: TrackItemId, name: impl Into<String>, origin: Point) -> Self {
        Self {
            id,
            name: name.into(),
            next_id: None,
            previous_id: None,
            max_speed: 0.0,
            real_length: 0.0,
            x: origin.x,
            y: origin.y,
            conflict_id: None,
            custom_properties: CustomProperties::new(),
            place_code: None,
            registry: None,
            runtime: RuntimeState::default(),
        }
    }

    #[must_use]
    pub fn with_links(mut self, previous: Option<TrackItemId>, next: Option<TrackItemId>) -> Self {
        self.previous_id = previous;
        self.next_id = next;
        self
    }

    #[must_use]
    pub fn with_real_length(mut self, real_length: f64) -> Self {
        self.real_length = real_length;
        self
    }

    #[must_use]
    pub fn with_max_speed(mut self, max_speed: f64) -> Self {
        self.max_speed = max_speed;
        self
    }

    #[must_use]
    pub fn with_conflict(mut self, conflict: TrackItemId) -> Self {
        self.conflict_id = Some(conflict);
        self
    }

    #[must_use]
    pub fn with_place_code(mut self, code: impl Into<String>) -> Self {
        self.place_code = Some(code.into());
        self
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.registry.is_some()
    }

    pub(crate) fn bind(&mut self, registry: RegistryId) {
        self.registry = Some(registry);
    }

    pub(crate) fn unbind(&mut self) {
        self.registry = None;
    }

    pub(crate) fn check_bound(&self, scenery: &Scenery) -> Result<(), TrackError> {
        if self.registry == Some(scenery.registry_id()) {
            Ok(())
        } else {
            Err(TrackError::UnboundRegistry { item: self.id })
        }
    }

    /// Maximum speed in m/s allowed on this item.
    ///
    /// Falls back to the simulation default when the item has no override.
    #[must_use]
    pub fn max_speed(&self, scenery: &Scenery) -> f64 {
        if self.max_speed == 0.0 {
            scenery.options().default_max_speed
        } else {
            self.max_speed
        }
    }

    /// The neighbour on the given side: `Forward` is the next item,
    /// `Backward` the previous item. `None` if that side is unset.
    ///
    /// # Errors
    ///
    /// Returns `UnboundRegistry` if this item is not bound to `scenery`
    pub fn neighbor<'s>(&self, scenery: &'s Scenery, direction: Direction) -> Result<Option<&'s TrackItem>, TrackError> {
        self.check_bound(scenery)?;
        let id = match direction {
            Direction::Forward => self.next_id,
            Direction::Backward => self.previous_id,
        };
        Ok(scenery.resolve(id))
    }

    /// # Errors
    ///
    /// Returns `UnboundRegistry` if this item is not bound to `scenery`
    pub fn next_item<'s>(&self, scenery: &'s Scenery) -> Result<Option<&'s TrackItem>, TrackError> {
        self.neighbor(scenery, Direction::Forward)
    }

    /// # Errors
    ///
    /// Returns `UnboundRegistry` if this item is not bound to `scenery`
    pub fn previous_item<'s>(&self, scenery: &'s Scenery) -> Result<Option<&'s TrackItem>, TrackError> {
        self.neighbor(scenery, Direction::Backward)
    }

    /// The item on which a route must not be set while one is active on this
    /// item (and vice-versa), typically a crossing without points.
    ///
    /// # Errors
    ///
    /// Returns `UnboundRegistry` if this item is not bound to `scenery`
    pub fn conflict_item<'s>(&self, scenery: &'s Scenery) -> Result<Option<&'s TrackItem>, TrackError> {
        self.check_bound(scenery)?;
        Ok(scenery.resolve(self.conflict_id))
    }

    /// The place this item belongs to, as defined by its place code
    ///
    /// # Errors
    ///
    /// Returns `UnboundRegistry` if this item is not bound to `scenery`
    pub fn place<'s>(&self, scenery: &'s Scenery) -> Result<Option<&'s PlaceItem>, TrackError> {
        self.check_bound(scenery)?;
        Ok(self
            .place_code
            .as_deref()
            .and_then(|code| scenery.place_by_code(code)))
    }

    /// The item following this one, knowing we come from `preceding`.
    ///
    /// Returns the next item when coming from the previous item and the
    /// previous item when coming from the next one, `None` if that side is
    /// unset. `direction` only matters when `preceding` is linked on both
    /// sides: `Forward` then yields the next item and `Backward` the previous.
    ///
    /// # Errors
    ///
    /// Returns `ItemsNotLinked` if `preceding` is not a neighbour of this item,
    /// or `UnboundRegistry` if this item or `preceding` is not bound to
    /// `scenery`
    pub fn following_item<'s>(
        &self,
        scenery: &'s Scenery,
        preceding: &TrackItem,
        direction: Direction,
    ) -> Result<Option<&'s TrackItem>, TrackError> {
        self.check_bound(scenery)?;
        preceding.base().check_bound(scenery)?;
        let previous = scenery.resolve(self.previous_id);
        let next = scenery.resolve(self.next_id);

        let from_previous = previous.is_some_and(|item| item.id() == preceding.id());
        let from_next = next.is_some_and(|item| item.id() == preceding.id());

        match (from_previous, from_next) {
            (true, true) => Ok(match direction {
                Direction::Forward => next,
                Direction::Backward => previous,
            }),
            (true, false) => Ok(next),
            (false, true) => Ok(previous),
            (false, false) => Err(TrackError::ItemsNotLinked {
                item: self.id,
                preceding: preceding.id(),
            }),
        }
    }
}
