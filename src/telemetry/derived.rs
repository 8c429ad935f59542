// Aggregates computed from the live lists on every read. Nothing here is
// cached: callers pass the current slice and get a fresh count back.

use super::model::{DeviceStatus, IoTDevice, Patient, PatientStatus, Vitals};
use serde::{Deserialize, Serialize};

/// Literal "data points per hour" figure shown on the IoT panel
pub const DATA_POINTS_PER_HOUR: u32 = 1247;

/// Vital sign with a critical-range predicate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vital {
    Temperature,
    HeartRate,
    OxygenSaturation,
}

/// Whether a single vital reading falls in its critical range.
///
/// Temperature above 102 °F, heart rate above 100 or below 60 bpm,
/// oxygen saturation below 95 %.
pub fn is_vital_critical(vital: Vital, value: f64) -> bool {
    match vital {
        Vital::Temperature => value > 102.0,
        Vital::HeartRate => !(60.0..=100.0).contains(&value),
        Vital::OxygenSaturation => value < 95.0,
    }
}

/// Vitals of one patient currently in their critical range.
///
/// Independent of the patient's status label, which is never recomputed.
pub fn critical_vitals(vitals: &Vitals) -> Vec<Vital> {
    [
        (Vital::Temperature, vitals.temperature),
        (Vital::HeartRate, f64::from(vitals.heart_rate)),
        (Vital::OxygenSaturation, vitals.oxygen_saturation),
    ]
    .into_iter()
    .filter(|(vital, value)| is_vital_critical(*vital, *value))
    .map(|(vital, _)| vital)
    .collect()
}

/// Patients labelled critical
pub fn critical_patient_count(patients: &[Patient]) -> usize {
    patients
        .iter()
        .filter(|p| p.status == PatientStatus::Critical)
        .count()
}

/// Patients still under monitoring (not recovered)
pub fn active_monitoring_count(patients: &[Patient]) -> usize {
    patients
        .iter()
        .filter(|p| p.status != PatientStatus::Recovered)
        .count()
}

/// Devices whose last reading is outside their threshold band
pub fn device_alert_count(devices: &[IoTDevice]) -> usize {
    devices
        .iter()
        .filter(|d| d.is_reading_out_of_range())
        .count()
}

/// Devices currently online
pub fn connected_device_count(devices: &[IoTDevice]) -> usize {
    devices
        .iter()
        .filter(|d| d.status == DeviceStatus::Online)
        .count()
}

/// Counters for the patient tracking dashboard
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_patients: usize,
    pub critical_alerts: usize,
    pub active_monitoring: usize,
}

impl DashboardSummary {
    pub fn from_patients(patients: &[Patient]) -> Self {
        Self {
            total_patients: patients.len(),
            critical_alerts: critical_patient_count(patients),
            active_monitoring: active_monitoring_count(patients),
        }
    }
}

/// Counters for the IoT monitoring panel
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSummary {
    pub connected: usize,
    pub total: usize,
    pub active_alerts: usize,
    pub data_points_per_hour: u32,
}

impl DeviceSummary {
    pub fn from_devices(devices: &[IoTDevice]) -> Self {
        Self {
            connected: connected_device_count(devices),
            total: devices.len(),
            active_alerts: device_alert_count(devices),
            data_points_per_hour: DATA_POINTS_PER_HOUR,
        }
    }
}
