//! The registry holding every item of a layout.
//!
//! Items reference each other by [`TrackItemId`]; the [`Scenery`] owns them
//! all and resolves those references. Construction happens in two phases:
//! items are built (usually deserialized) on their own, then
//! [`Scenery::bind`] gathers them and binds each of them to the registry.

use indexmap::IndexMap;

use crate::debug_log;
use crate::error::LayoutError;
use crate::models::{RegistryId, TrackItem, TrackItemId};

mod items;
mod layout;
mod options;
mod places;
mod switching;
mod topology;
mod validation;
mod walk;

#[cfg(test)]
pub(crate) mod fixtures;

pub use items::TrackItems;
pub use layout::Layout;
pub use options::SimulationOptions;
pub use places::Places;
pub use switching::PointsSwitching;
pub use topology::{Link, Topology};
pub use validation::{LayoutIssue, LayoutValidation, LinkField};
pub use walk::Walk;

use options::is_valid_default_speed;

/// The items of a loaded layout and the simulation options they read.
///
/// Lookups are plain reads and may run concurrently; mutations (runtime
/// state, points switching) need exclusive access, which the borrow checker
/// enforces through `&mut Scenery`.
#[derive(Debug)]
pub struct Scenery {
    registry_id: RegistryId,
    options: SimulationOptions,
    items: IndexMap<TrackItemId, TrackItem>,
    place_index: IndexMap<String, TrackItemId>,
}

impl Scenery {
    /// Gather `items` in a new registry and bind each of them to it.
    ///
    /// Items keep their insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if an item uses the reserved identifier 0, if two
    /// items share an identifier, if two places share a code, or if a speed
    /// is negative or not finite
    pub fn bind(items: impl IntoIterator<Item = TrackItem>, options: SimulationOptions) -> Result<Self, LayoutError> {
        if !is_valid_default_speed(options.default_max_speed) {
            return Err(LayoutError::InvalidDefaultMaxSpeed(options.default_max_speed));
        }
        let registry_id = RegistryId::next();
        let mut by_id = IndexMap::new();
        let mut place_index = IndexMap::new();

        for mut item in items {
            let id = item.id();
            if id.0 == TrackItemId::UNSET {
                return Err(LayoutError::ReservedIdentifier);
            }
            let speed = item.base().max_speed;
            if !speed.is_finite() || speed < 0.0 {
                return Err(LayoutError::InvalidMaxSpeed { item: id, speed });
            }
            if let Some(code) = item.as_place().and_then(|place| place.code()) {
                if place_index.insert(code.to_string(), id).is_some() {
                    return Err(LayoutError::DuplicatePlaceCode(code.to_string()));
                }
            }
            item.base_mut().bind(registry_id);
            if by_id.insert(id, item).is_some() {
                return Err(LayoutError::DuplicateIdentifier(id));
            }
        }

        debug_log!("Bound {} track items and {} places", by_id.len(), place_index.len());

        Ok(Self {
            registry_id,
            options,
            items: by_id,
            place_index,
        })
    }

    #[must_use]
    pub fn registry_id(&self) -> RegistryId {
        self.registry_id
    }

    #[must_use]
    pub fn options(&self) -> &SimulationOptions {
        &self.options
    }

    /// Resolve an optional reference. Unset and dangling references are `None`.
    pub(crate) fn resolve(&self, id: Option<TrackItemId>) -> Option<&TrackItem> {
        id.and_then(|id| self.items.get(&id))
    }

    /// Clear the runtime state of every item and set all points to normal
    pub fn reset_runtime_state(&mut self) {
        for item in self.items.values_mut() {
            item.runtime_mut().reset();
            if let Some(points) = item.as_points_mut() {
                points.set_reversed(false);
            }
        }
        debug_log!("Reset runtime state of {} track items", self.items.len());
    }
}

impl Clone for Scenery {
    /// The clone is a separate registry: items are rebound to it, so items
    /// of one scenery are unbound with respect to the other.
    fn clone(&self) -> Self {
        let registry_id = RegistryId::next();
        let items = self
            .items
            .iter()
            .map(|(&id, item)| {
                let mut item = item.clone();
                item.base_mut().bind(registry_id);
                (id, item)
            })
            .collect();
        Self {
            registry_id,
            options: self.options.clone(),
            items,
            place_index: self.place_index.clone(),
        }
    }
}
