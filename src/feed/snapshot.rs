use crate::telemetry::{
    active_monitoring_count, connected_device_count, critical_patient_count, device_alert_count,
    DashboardSummary, DeviceSummary, IoTDevice, Patient,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Immutable copy of both entity lists, published after every tick.
///
/// Derived counts are methods so they are always computed from the lists
/// held by this snapshot.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedSnapshot {
    pub patients: Vec<Patient>,
    pub devices: Vec<IoTDevice>,
    /// Patient ticks applied so far
    pub patient_ticks: u64,
    /// Device ticks applied so far
    pub device_ticks: u64,
    pub updated_at: DateTime<Utc>,
}

impl FeedSnapshot {
    pub fn new(patients: Vec<Patient>, devices: Vec<IoTDevice>) -> Self {
        Self {
            patients,
            devices,
            patient_ticks: 0,
            device_ticks: 0,
            updated_at: Utc::now(),
        }
    }

    pub fn patient(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    pub fn device(&self, id: &str) -> Option<&IoTDevice> {
        self.devices.iter().find(|d| d.id == id)
    }

    /// Devices whose (weak) patient reference matches `patient_id`
    pub fn devices_for_patient<'a>(
        &'a self,
        patient_id: &'a str,
    ) -> impl Iterator<Item = &'a IoTDevice> + 'a {
        self.devices.iter().filter(move |d| d.patient_id == patient_id)
    }

    pub fn total_ticks(&self) -> u64 {
        self.patient_ticks + self.device_ticks
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

/// Combined counters sent after every tick
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedSummary {
    pub dashboard: DashboardSummary,
    pub devices: DeviceSummary,
    pub patient_ticks: u64,
    pub device_ticks: u64,
}

impl From<&FeedSnapshot> for FeedSummary {
    fn from(snapshot: &FeedSnapshot) -> Self {
        Self {
            dashboard: snapshot.dashboard_summary(),
            devices: snapshot.device_summary(),
            patient_ticks: snapshot.patient_ticks,
            device_ticks: snapshot.device_ticks,
        }
    }
}

/// Per-tick change broadcast to subscribers
#[derive(Clone, Debug)]
pub enum FeedUpdate {
    Patient {
        patient: Patient,
        timestamp: DateTime<Utc>,
    },
    Device {
        device: IoTDevice,
        timestamp: DateTime<Utc>,
    },
    Summary {
        summary: FeedSummary,
        timestamp: DateTime<Utc>,
    },
}

impl FeedUpdate {
    /// Id of the patient or device this update concerns (None for summaries)
    pub fn entity_id(&self) -> Option<&str> {
        match self {
            FeedUpdate::Patient { patient, .. } => Some(&patient.id),
            FeedUpdate::Device { device, .. } => Some(&device.id),
            FeedUpdate::Summary { .. } => None,
        }
    }
}
