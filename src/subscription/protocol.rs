use crate::feed::{FeedSummary, FeedUpdate};
use crate::telemetry::{IoTDevice, Patient};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client → Server message types
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    #[serde(rename = "subscribe")]
    Subscribe { entity_id: String },
    #[serde(rename = "unsubscribe")]
    Unsubscribe { entity_id: String },
}

/// Server → Client: Patient vitals changed
#[derive(Debug, Clone, Serialize)]
pub struct PatientUpdateMessage {
    #[serde(rename = "type")]
    pub msg_type: String,
    pub entity_id: String,
    pub patient: Patient,
    pub timestamp: DateTime<Utc>,
}

/// Server → Client: Device reading or battery changed
#[derive(Debug, Clone, Serialize)]
pub struct DeviceUpdateMessage {
    #[serde(rename = "type")]
    pub msg_type: String,
    pub entity_id: String,
    pub device: IoTDevice,
    pub timestamp: DateTime<Utc>,
}

/// Server → Client: Derived counters after a tick
#[derive(Debug, Clone, Serialize)]
pub struct SummaryUpdateMessage {
    #[serde(rename = "type")]
    pub msg_type: String,
    pub summary: FeedSummary,
    pub timestamp: DateTime<Utc>,
}

/// Any message pushed from the feed to a client
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ServerMessage {
    Patient(PatientUpdateMessage),
    Device(DeviceUpdateMessage),
    Summary(SummaryUpdateMessage),
}

impl From<FeedUpdate> for ServerMessage {
    fn from(update: FeedUpdate) -> Self {
        match update {
            FeedUpdate::Patient { patient, timestamp } => {
                ServerMessage::Patient(PatientUpdateMessage {
                    msg_type: "patient_update".to_string(),
                    entity_id: patient.id.clone(),
                    patient,
                    timestamp,
                })
            }
            FeedUpdate::Device { device, timestamp } => ServerMessage::Device(DeviceUpdateMessage {
                msg_type: "device_update".to_string(),
                entity_id: device.id.clone(),
                device,
                timestamp,
            }),
            FeedUpdate::Summary { summary, timestamp } => {
                ServerMessage::Summary(SummaryUpdateMessage {
                    msg_type: "summary_update".to_string(),
                    summary,
                    timestamp,
                })
            }
        }
    }
}

/// Server → Client: Error message
#[derive(Debug, Clone, Serialize)]
pub struct ErrorMessage {
    #[serde(rename = "type")]
    pub msg_type: String,
    pub error: String,
}

impl ErrorMessage {
    pub fn new(error: String) -> Self {
        Self {
            msg_type: "error".to_string(),
            error,
        }
    }
}
