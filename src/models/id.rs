//! Identifiers used by the scenery registry
//!
//! - `TrackItemId` for items of the layout (stable for a loaded layout)
//! - `RegistryId` for a bound scenery (unique within the process)
//! - `RouteId` and `TrainId` for the runtime objects attached to items
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies a track item within a scenery.
///
/// In the persisted layout the value 0 means "no item"; in memory an absent
/// reference is always `Option::None` and 0 never names an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackItemId(pub u32);

impl TrackItemId {
    /// The persisted "unset" sentinel
    pub const UNSET: u32 = 0;
}

impl fmt::Display for TrackItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TrackItemId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies an active route. Routes live outside of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RouteId(pub u32);

/// Identifies a train. Trains live outside of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TrainId(pub u32);

/// Counter for unique [`RegistryId`] allocation.
static REGISTRY_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier of a bound scenery.
///
/// Items remember the registry they were bound to, so that resolving an item
/// through a scenery it does not belong to is reported instead of silently
/// looking up an unrelated item with the same `TrackItemId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistryId(u64);

impl RegistryId {
    /// Allocate a fresh, unique registry ID. Thread-safe.
    pub(crate) fn next() -> Self {
        Self(REGISTRY_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Serde helpers mapping the persisted 0/null sentinel to `Option::None`
pub(crate) mod optional_id {
    use super::TrackItemId;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S>(id: &Option<TrackItemId>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(id.map_or(TrackItemId::UNSET, |id| id.0))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<TrackItemId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<u32>::deserialize(deserializer)?;
        Ok(raw.filter(|&v| v != TrackItemId::UNSET).map(TrackItemId))
    }
}

/// Serde helpers mapping the persisted empty string to `Option::None`
pub(crate) mod optional_code {
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S>(code: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(code.as_deref().unwrap_or_default())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.filter(|code| !code.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Holder {
        #[serde(default, with = "optional_id")]
        id: Option<TrackItemId>,
        #[serde(default, with = "optional_code")]
        code: Option<String>,
    }

    #[test]
    fn test_registry_ids_are_unique() {
        let a = RegistryId::next();
        let b = RegistryId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn test_zero_and_null_deserialize_to_none() {
        let zero: Holder = serde_json::from_str(r#"{"id": 0, "code": ""}"#).expect("valid json");
        assert_eq!(zero.id, None);
        assert_eq!(zero.code, None);

        let null: Holder = serde_json::from_str(r#"{"id": null}"#).expect("valid json");
        assert_eq!(null.id, None);

        let set: Holder = serde_json::from_str(r#"{"id": 12, "code": "STN"}"#).expect("valid json");
        assert_eq!(set.id, Some(TrackItemId(12)));
        assert_eq!(set.code.as_deref(), Some("STN"));
    }

    #[test]
    fn test_none_serializes_to_sentinel() {
        let holder = Holder { id: None, code: None };
        let json = serde_json::to_value(&holder).expect("serializable");
        assert_eq!(json["id"], 0);
        assert_eq!(json["code"], "");
    }
}
