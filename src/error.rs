//! Error types for scenery navigation and layout loading.

use thiserror::Error;

use crate::models::TrackItemId;

/// Errors raised while navigating the scenery graph.
///
/// Every variant is recoverable by the caller: a route computation can be
/// aborted or the layout reported as invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackError {
    /// The item the caller arrived from is neither neighbour of `item`.
    #[error("track items {item} and {preceding} are not linked")]
    ItemsNotLinked {
        item: TrackItemId,
        preceding: TrackItemId,
    },
    /// A resolution was attempted on an item that is not bound to the
    /// scenery it was resolved against.
    #[error("track item {item} is not bound to this scenery")]
    UnboundRegistry { item: TrackItemId },
    #[error("no track item with id {0}")]
    UnknownItem(TrackItemId),
    #[error("track item {0} is not a points item")]
    NotPoints(TrackItemId),
}

/// Errors raised while loading or binding a layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("failed to read layout: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed layout: {0}")]
    Json(#[from] serde_json::Error),
    /// Identifier 0 is the persisted "unset" sentinel and cannot name an item.
    #[error("identifier 0 is reserved and cannot name a track item")]
    ReservedIdentifier,
    #[error("track item key {0:?} is not a valid identifier")]
    InvalidIdentifier(String),
    #[error("track item stored under key {key} declares tiId {declared}")]
    MismatchedIdentifier {
        key: TrackItemId,
        declared: TrackItemId,
    },
    #[error("track item {0} is defined more than once")]
    DuplicateIdentifier(TrackItemId),
    #[error("place code {0:?} is used by more than one place")]
    DuplicatePlaceCode(String),
    #[error("default max speed {0} is not a positive speed")]
    InvalidDefaultMaxSpeed(f64),
    /// Item speeds must be finite and non-negative, 0 meaning "use the default".
    #[error("max speed {speed} of track item {item} is not a valid speed")]
    InvalidMaxSpeed { item: TrackItemId, speed: f64 },
}
