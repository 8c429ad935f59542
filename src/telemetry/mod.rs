// Mock telemetry: seed records, drift generator and derived counts

mod derived;
mod drift;
mod generator;
mod model;
mod seed;

pub use derived::{
    active_monitoring_count, connected_device_count, critical_patient_count, critical_vitals,
    device_alert_count, is_vital_critical, DashboardSummary, DeviceSummary, Vital,
    DATA_POINTS_PER_HOUR,
};
pub use drift::{Bounds, DriftConfig};
pub use generator::TelemetryGenerator;
pub use model::{
    BloodPressure, DeviceStatus, DeviceType, IoTDevice, Location, Patient, PatientStatus,
    Reading, Thresholds, Vitals, JUST_NOW,
};
pub use seed::{seed_devices, seed_patients};

#[cfg(test)]
mod tests;
