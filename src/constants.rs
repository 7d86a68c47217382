/// Length reported by end items, in meters.
///
/// Must be bigger than the maximum distance the fastest train can travel
/// during one simulation step at maximum simulation speed, so that no train
/// is ever expected to run through an end item.
pub const END_ITEM_LENGTH: f64 = 1_000_000_000.0;

/// Half the side of the square points items are drawn on.
///
/// Points ends are expressed in item coordinates and must lie on the border
/// of the square, i.e. at least one of their coordinates is `±POINTS_HALF_SIZE`.
pub const POINTS_HALF_SIZE: f64 = 5.0;

/// Simulation-wide maximum speed in m/s used when neither the layout options
/// nor an item override it (65 km/h).
pub const DEFAULT_MAX_SPEED: f64 = 18.06;

/// Tolerance used when comparing scene coordinates
pub const COORDINATE_EPSILON: f64 = 1e-9;
