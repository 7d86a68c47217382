use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_SPEED;
use crate::debug_log;

/// Environment variable overriding [`SimulationOptions::default_max_speed`]
pub const DEFAULT_MAX_SPEED_ENV: &str = "SCENERY_DEFAULT_MAX_SPEED";

/// Simulation-wide settings read by the track items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationOptions {
    /// Maximum speed in m/s on items that do not set their own
    pub default_max_speed: f64,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            default_max_speed: DEFAULT_MAX_SPEED,
        }
    }
}

/// Whether `speed` can serve as the simulation default: finite and positive
pub(crate) fn is_valid_default_speed(speed: f64) -> bool {
    speed.is_finite() && speed > 0.0
}

impl SimulationOptions {
    /// Apply the overrides found in the environment.
    ///
    /// Values that cannot be parsed, or that are not finite positive speeds,
    /// are ignored with a warning.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = lookup(DEFAULT_MAX_SPEED_ENV) {
            match raw.trim().parse::<f64>() {
                Ok(speed) if is_valid_default_speed(speed) => {
                    debug_log!("Default max speed overridden to {} m/s", speed);
                    self.default_max_speed = speed;
                }
                _ => log::warn!("Ignoring invalid {DEFAULT_MAX_SPEED_ENV} value {raw:?}"),
            }
        }
        self
    }
}
