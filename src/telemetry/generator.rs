use super::derived::{
    active_monitoring_count, connected_device_count, critical_patient_count, device_alert_count,
    DashboardSummary, DeviceSummary,
};
use super::drift::DriftConfig;
use super::model::{DeviceStatus, IoTDevice, Patient, JUST_NOW};
use super::seed::{seed_devices, seed_patients};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Owns the mock patient and device lists and drifts them on demand.
///
/// The generator has no clock of its own; the feed task decides when to
/// call [`tick_patients`](Self::tick_patients) and
/// [`tick_devices`](Self::tick_devices).
pub struct TelemetryGenerator<R = StdRng> {
    patients: Vec<Patient>,
    devices: Vec<IoTDevice>,
    drift: DriftConfig,
    rng: R,
}

impl TelemetryGenerator<StdRng> {
    /// Generator over the literal seed records.
    ///
    /// `rng_seed` makes the drift reproducible; `None` draws from OS entropy.
    pub fn new(drift: DriftConfig, rng_seed: Option<u64>) -> Self {
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_records(seed_patients(), seed_devices(), drift, rng)
    }
}

impl<R: Rng> TelemetryGenerator<R> {
    /// Generator over arbitrary starting records
    pub fn with_records(
        patients: Vec<Patient>,
        devices: Vec<IoTDevice>,
        drift: DriftConfig,
        rng: R,
    ) -> Self {
        Self {
            patients,
            devices,
            drift,
            rng,
        }
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn devices(&self) -> &[IoTDevice] {
        &self.devices
    }

    /// Centered random delta in `[-step/2, step/2)`
    fn jitter(&mut self, step: f64) -> f64 {
        (self.rng.gen::<f64>() - 0.5) * step
    }

    /// Drift every patient's temperature, heart rate and oxygen saturation.
    ///
    /// Blood pressure and status are left untouched.
    pub fn tick_patients(&mut self) {
        for i in 0..self.patients.len() {
            let temperature_delta = self.jitter(self.drift.temperature_step);
            let heart_rate_delta = self.jitter(self.drift.heart_rate_step).floor();
            let oxygen_delta = self.jitter(self.drift.oxygen_step);

            let drift = &self.drift;
            let patient = &mut self.patients[i];
            let vitals = &mut patient.vitals;

            vitals.temperature = drift
                .temperature_bounds
                .clamp(vitals.temperature + temperature_delta);
            vitals.heart_rate = drift
                .heart_rate_bounds
                .clamp(f64::from(vitals.heart_rate) + heart_rate_delta)
                .round() as i32;
            vitals.oxygen_saturation = drift
                .oxygen_bounds
                .clamp(vitals.oxygen_saturation + oxygen_delta);

            patient.last_update = JUST_NOW.to_string();
        }
    }

    /// Drift every device reading and drain batteries.
    ///
    /// Offline devices always report an empty battery.
    pub fn tick_devices(&mut self) {
        for i in 0..self.devices.len() {
            let reading_delta = self.jitter(self.drift.reading_step);
            let drain = self.rng.gen::<f64>() * self.drift.battery_drain_max;

            let drift = &self.drift;
            let device = &mut self.devices[i];

            device.last_reading.value = drift
                .reading_bounds
                .clamp(device.last_reading.value + reading_delta);
            device.last_reading.timestamp = JUST_NOW.to_string();

            device.battery_level = match device.status {
                DeviceStatus::Offline => 0.0,
                _ => (device.battery_level - drain).clamp(0.0, 100.0),
            };
        }
    }

    pub fn tick(&mut self) {
        self.tick_patients();
        self.tick_devices();
    }

    pub fn critical_patient_count(&self) -> usize {
        critical_patient_count(&self.patients)
    }

    pub fn device_alert_count(&self) -> usize {
        device_alert_count(&self.devices)
    }

    pub fn connected_device_count(&self) -> usize {
        connected_device_count(&self.devices)
    }

    pub fn active_monitoring_count(&self) -> usize {
        active_monitoring_count(&self.patients)
    }

    pub fn dashboard_summary(&self) -> DashboardSummary {
        DashboardSummary::from_patients(&self.patients)
    }

    pub fn device_summary(&self) -> DeviceSummary {
        DeviceSummary::from_devices(&self.devices)
    }
}
