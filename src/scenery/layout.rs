use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::{Scenery, SimulationOptions};
use crate::debug_log;
use crate::error::LayoutError;
use crate::models::{TrackItem, TrackItemId};

/// The persisted form of a layout: options and items keyed by identifier.
///
/// ```json
/// {
///   "options": { "defaultMaxSpeed": 18.06 },
///   "trackItems": {
///     "1": { "__type__": "EndItem", "tiId": 1, "nextTiId": 2, ... }
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    #[serde(default)]
    pub options: SimulationOptions,
    #[serde(default)]
    pub track_items: IndexMap<String, TrackItem>,
}

impl Layout {
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid layout
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    ///
    /// Returns an error if reading fails or the content is not a valid layout
    pub fn from_reader(reader: impl Read) -> Result<Self, LayoutError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid layout
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        debug_log!("Loading layout from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The persisted form of a bound scenery, without its runtime state
    #[must_use]
    pub fn from_scenery(scenery: &Scenery) -> Self {
        use super::TrackItems;

        let track_items = scenery
            .items()
            .map(|item| (item.id().to_string(), item.clone().unbound()))
            .collect();
        Self {
            options: scenery.options().clone(),
            track_items,
        }
    }

    /// Check the item keys and bind the items into a new scenery
    ///
    /// # Errors
    ///
    /// Returns an error if a key is not a valid identifier, does not match the
    /// `tiId` of its item, or if binding fails
    pub fn into_scenery(self) -> Result<Scenery, LayoutError> {
        let mut items = Vec::with_capacity(self.track_items.len());
        for (key, item) in self.track_items {
            let key_id = key
                .trim()
                .parse::<u32>()
                .map(TrackItemId)
                .map_err(|_| LayoutError::InvalidIdentifier(key.clone()))?;
            if key_id != item.id() {
                return Err(LayoutError::MismatchedIdentifier {
                    key: key_id,
                    declared: item.id(),
                });
            }
            items.push(item);
        }
        Scenery::bind(items, self.options)
    }
}
