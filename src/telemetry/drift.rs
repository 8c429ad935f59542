use serde::{Deserialize, Serialize};

/// Closed numeric range used to clamp a drifting field
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

/// Step sizes and clamp ranges for one tick of simulated drift.
///
/// Each field moves by `(uniform(0,1) - 0.5) * step`, then is clamped.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftConfig {
    /// °F
    pub temperature_step: f64,
    pub temperature_bounds: Bounds,

    /// bpm; the delta is floored to a whole beat
    pub heart_rate_step: f64,
    pub heart_rate_bounds: Bounds,

    /// SpO2 %
    pub oxygen_step: f64,
    pub oxygen_bounds: Bounds,

    /// In the device's own unit
    pub reading_step: f64,
    pub reading_bounds: Bounds,

    /// Maximum battery percentage lost per tick (drain is `uniform(0,1) * max`)
    pub battery_drain_max: f64,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            temperature_step: 0.5,
            temperature_bounds: Bounds::new(90.0, 110.0),
            heart_rate_step: 10.0,
            heart_rate_bounds: Bounds::new(30.0, 220.0),
            oxygen_step: 2.0,
            oxygen_bounds: Bounds::new(85.0, 100.0),
            reading_step: 2.0,
            reading_bounds: Bounds::new(0.0, f64::MAX),
            battery_drain_max: 0.5,
        }
    }
}

impl DriftConfig {
    /// Name of the first inverted bounds pair, if any
    pub fn invalid_bounds(&self) -> Option<&'static str> {
        [
            ("temperature_bounds", &self.temperature_bounds),
            ("heart_rate_bounds", &self.heart_rate_bounds),
            ("oxygen_bounds", &self.oxygen_bounds),
            ("reading_bounds", &self.reading_bounds),
        ]
        .into_iter()
        .find(|(_, b)| !b.is_valid())
        .map(|(name, _)| name)
    }
}
