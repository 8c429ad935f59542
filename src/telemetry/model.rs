use serde::{Deserialize, Serialize};

/// Display label written on every record touched by a tick
pub const JUST_NOW: &str = "Just now";

/// Geographic position (WGS84 degrees)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodPressure {
    pub systolic: u16,
    pub diastolic: u16,
}

/// Physiological measurements tracked per patient
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vitals {
    /// Body temperature in °F
    pub temperature: f64,
    /// Beats per minute
    pub heart_rate: i32,
    /// SpO2 percentage
    pub oxygen_saturation: f64,
    pub blood_pressure: BloodPressure,
}

/// Display classification assigned at seed time.
///
/// Never recomputed from vitals: a patient seeded as `Critical` stays
/// `Critical` even after the drift brings every vital back into range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatientStatus {
    Critical,
    Warning,
    Stable,
    Recovered,
}

impl PatientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatientStatus::Critical => "critical",
            PatientStatus::Warning => "warning",
            PatientStatus::Stable => "stable",
            PatientStatus::Recovered => "recovered",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "critical" => Some(PatientStatus::Critical),
            "warning" => Some(PatientStatus::Warning),
            "stable" => Some(PatientStatus::Stable),
            "recovered" => Some(PatientStatus::Recovered),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub location: Location,
    pub vitals: Vitals,
    pub status: PatientStatus,
    pub last_update: String,
    pub phone: String,
    pub address: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    Smartwatch,
    Thermometer,
    PulseOximeter,
    Smartphone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceStatus {
    Online,
    Offline,
    Warning,
}

/// Most recent measurement reported by a device
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Relative display label ("2 mins ago", "Just now")
    pub timestamp: String,
    pub value: f64,
    pub unit: String,
}

/// Inclusive band of a normal reading
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub min: f64,
    pub max: f64,
}

impl Thresholds {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Wearable or app reporting readings for one patient.
///
/// `patient_id` is a lookup key only; devices do not own patients and
/// may reference ids absent from the patient list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IoTDevice {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub device_type: DeviceType,
    pub status: DeviceStatus,
    /// Percentage in [0, 100]
    pub battery_level: f64,
    pub last_reading: Reading,
    pub thresholds: Thresholds,
}

impl IoTDevice {
    /// True when the last reading lies outside the threshold band
    pub fn is_reading_out_of_range(&self) -> bool {
        !self.thresholds.contains(self.last_reading.value)
    }
}
