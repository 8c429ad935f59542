use serde::{Deserialize, Serialize};

/// Configuration for the live feed task
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Interval between patient vitals ticks (milliseconds)
    pub patient_interval_ms: u64,

    /// Interval between device telemetry ticks (milliseconds)
    pub device_interval_ms: u64,

    /// Fixed RNG seed for reproducible drift (None = OS entropy)
    pub rng_seed: Option<u64>,

    /// Capacity of the per-tick update broadcast channel
    pub update_buffer: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            patient_interval_ms: 5000,
            device_interval_ms: 3000,
            rng_seed: None,
            update_buffer: 256,
        }
    }
}
